//! Clamped life totals with an applied-delta history.

use im::Vector;
use serde::{Deserialize, Serialize};

/// Default starting (and maximum) life for a duel.
pub const DEFAULT_STARTING_LIFE: u32 = 20;

/// Whether a life event reduced or restored life.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeEventKind {
    /// Life was reduced.
    Damage,
    /// Life was restored.
    Heal,
}

/// One applied life change. Only non-zero applied amounts are recorded,
/// and the amount is what actually landed after clamping, not what was
/// requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeEvent {
    /// Damage or heal.
    pub kind: LifeEventKind,
    /// The applied delta.
    pub amount: u32,
}

/// Presentation band for a life total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeStatus {
    /// Depleted.
    Dead,
    /// At or below 25%.
    Critical,
    /// At or below 50%.
    Low,
    /// At or below 75%.
    Medium,
    /// Above 75%.
    High,
}

/// A seat's life total, always within `[0, max]`.
///
/// ## Example
///
/// ```
/// use duel_engine::life::LifeTracker;
///
/// let mut life = LifeTracker::new(20);
/// assert_eq!(life.damage(25), 20); // clamped at zero
/// assert!(life.is_depleted());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeTracker {
    current: u32,
    max: u32,
    history: Vector<LifeEvent>,
}

impl LifeTracker {
    /// Create a tracker at full life.
    #[must_use]
    pub fn new(max: u32) -> Self {
        Self {
            current: max,
            max,
            history: Vector::new(),
        }
    }

    /// Current life.
    #[must_use]
    pub fn current(&self) -> u32 {
        self.current
    }

    /// Maximum life.
    #[must_use]
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Reduce life, clamped at zero. Returns the applied delta, which
    /// may be less than `amount`.
    pub fn damage(&mut self, amount: u32) -> u32 {
        let applied = amount.min(self.current);
        self.current -= applied;
        if applied > 0 {
            self.history.push_back(LifeEvent {
                kind: LifeEventKind::Damage,
                amount: applied,
            });
        }
        applied
    }

    /// Restore life, clamped at the maximum. Returns the applied delta.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let applied = amount.min(self.max - self.current);
        self.current += applied;
        if applied > 0 {
            self.history.push_back(LifeEvent {
                kind: LifeEventKind::Heal,
                amount: applied,
            });
        }
        applied
    }

    /// Set life directly, clamped into `[0, max]`. The delta is
    /// recorded as damage or heal. Returns the new current life.
    pub fn set(&mut self, amount: u32) -> u32 {
        let target = amount.min(self.max);
        if target < self.current {
            self.damage(self.current - target);
        } else if target > self.current {
            self.heal(target - self.current);
        }
        self.current
    }

    /// True once life has reached zero.
    #[must_use]
    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }

    /// Remaining life as a percentage of the maximum. Presentation only.
    #[must_use]
    pub fn percentage(&self) -> f32 {
        self.current as f32 / self.max as f32 * 100.0
    }

    /// Presentation band for the current total.
    #[must_use]
    pub fn status(&self) -> LifeStatus {
        if self.is_depleted() {
            LifeStatus::Dead
        } else if self.current * 4 <= self.max {
            LifeStatus::Critical
        } else if self.current * 2 <= self.max {
            LifeStatus::Low
        } else if self.current * 4 <= self.max * 3 {
            LifeStatus::Medium
        } else {
            LifeStatus::High
        }
    }

    /// Applied life changes, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<LifeEvent> {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_full() {
        let life = LifeTracker::new(20);
        assert_eq!(life.current(), 20);
        assert_eq!(life.max(), 20);
        assert!(!life.is_depleted());
        assert!(life.history().is_empty());
    }

    #[test]
    fn test_damage_returns_applied_delta() {
        let mut life = LifeTracker::new(20);
        assert_eq!(life.damage(6), 6);
        assert_eq!(life.current(), 14);
    }

    #[test]
    fn test_overkill_damage_clamps_at_zero() {
        let mut life = LifeTracker::new(20);
        assert_eq!(life.damage(25), 20);
        assert_eq!(life.current(), 0);
        assert!(life.is_depleted());
    }

    #[test]
    fn test_heal_clamps_at_max() {
        let mut life = LifeTracker::new(20);
        life.damage(5);
        assert_eq!(life.heal(100), 5);
        assert_eq!(life.current(), 20);
    }

    #[test]
    fn test_history_records_applied_amounts() {
        let mut life = LifeTracker::new(20);
        life.damage(25);
        life.heal(3);
        life.heal(0);

        let events: Vec<_> = life.history().iter().copied().collect();
        assert_eq!(
            events,
            vec![
                LifeEvent {
                    kind: LifeEventKind::Damage,
                    amount: 20
                },
                LifeEvent {
                    kind: LifeEventKind::Heal,
                    amount: 3
                },
            ]
        );
    }

    #[test]
    fn test_zero_delta_not_recorded() {
        let mut life = LifeTracker::new(20);
        life.heal(5); // already at max
        assert!(life.history().is_empty());
    }

    #[test]
    fn test_set_clamps_and_records() {
        let mut life = LifeTracker::new(20);

        assert_eq!(life.set(12), 12);
        assert_eq!(life.set(50), 20);
        assert_eq!(life.history().len(), 2);
    }

    #[test]
    fn test_percentage() {
        let mut life = LifeTracker::new(20);
        life.damage(5);
        assert!((life.percentage() - 75.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_status_bands() {
        let mut life = LifeTracker::new(20);
        assert_eq!(life.status(), LifeStatus::High);

        life.set(15);
        assert_eq!(life.status(), LifeStatus::Medium);

        life.set(10);
        assert_eq!(life.status(), LifeStatus::Low);

        life.set(5);
        assert_eq!(life.status(), LifeStatus::Critical);

        life.set(0);
        assert_eq!(life.status(), LifeStatus::Dead);
    }

    #[test]
    fn test_tracker_serialization() {
        let mut life = LifeTracker::new(20);
        life.damage(8);

        let json = serde_json::to_string(&life).unwrap();
        let back: LifeTracker = serde_json::from_str(&json).unwrap();
        assert_eq!(life, back);
    }
}
