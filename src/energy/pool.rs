//! Per-seat energy counters with caps and atomic payment.

use serde::{Deserialize, Serialize};

use super::cost::CostMap;
use super::EnergyColor;

/// Default per-color cap.
pub const DEFAULT_ENERGY_CAP: u8 = 10;

/// A seat's spendable energy, one counter per color.
///
/// Counters stay within `[0, cap]` at all times. Payment is
/// all-or-nothing: `pay` either decrements every required color or
/// leaves the pool untouched.
///
/// ## Example
///
/// ```
/// use duel_engine::energy::{parse_cost, EnergyColor, EnergyPool};
///
/// let mut pool = EnergyPool::new();
/// pool.add(EnergyColor::Blue, 3);
///
/// let cost = parse_cost("青2");
/// assert!(pool.can_afford(&cost));
/// assert!(pool.pay(&cost).is_ok());
/// assert_eq!(pool.get(EnergyColor::Blue), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyPool {
    amounts: [u8; EnergyColor::COUNT],
    cap: u8,
}

impl Default for EnergyPool {
    fn default() -> Self {
        Self::new()
    }
}

impl EnergyPool {
    /// Create an empty pool with the default per-color cap.
    #[must_use]
    pub fn new() -> Self {
        Self::with_cap(DEFAULT_ENERGY_CAP)
    }

    /// Create an empty pool with a custom per-color cap.
    #[must_use]
    pub fn with_cap(cap: u8) -> Self {
        Self {
            amounts: [0; EnergyColor::COUNT],
            cap,
        }
    }

    /// The per-color cap.
    #[must_use]
    pub fn cap(&self) -> u8 {
        self.cap
    }

    /// Current amount of a color.
    #[must_use]
    pub fn get(&self, color: EnergyColor) -> u8 {
        self.amounts[color.index()]
    }

    /// Current amounts of all colors, as a [`CostMap`]-shaped bundle.
    #[must_use]
    pub fn amounts(&self) -> CostMap {
        let mut all = CostMap::new();
        for color in EnergyColor::ALL {
            all.add(color, self.get(color));
        }
        all
    }

    /// Sum of all counters.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.amounts.iter().map(|&a| u32::from(a)).sum()
    }

    /// Increment a color, clamped to the cap. Returns the new amount.
    pub fn add(&mut self, color: EnergyColor, amount: u8) -> u8 {
        let slot = &mut self.amounts[color.index()];
        *slot = slot.saturating_add(amount).min(self.cap);
        *slot
    }

    /// Check whether every required color is covered.
    #[must_use]
    pub fn can_afford(&self, cost: &CostMap) -> bool {
        EnergyColor::ALL.iter().all(|&c| self.get(c) >= cost.get(c))
    }

    /// Pay a cost, all-or-nothing.
    ///
    /// On success every required color is decremented simultaneously.
    /// On failure the pool is untouched and the per-color deficits are
    /// returned.
    pub fn pay(&mut self, cost: &CostMap) -> Result<(), CostMap> {
        let missing = self.missing(cost);
        if !missing.is_free() {
            return Err(missing);
        }

        for color in EnergyColor::ALL {
            self.amounts[color.index()] -= cost.get(color);
        }
        Ok(())
    }

    /// Per-color deficits for an unaffordable cost (empty when
    /// affordable). Used for user feedback, never for mutation.
    #[must_use]
    pub fn missing(&self, cost: &CostMap) -> CostMap {
        let mut missing = CostMap::new();
        for color in EnergyColor::ALL {
            let required = cost.get(color);
            let held = self.get(color);
            if held < required {
                missing.add(color, required - held);
            }
        }
        missing
    }

    /// Reset every counter to zero.
    pub fn reset(&mut self) {
        self.amounts = [0; EnergyColor::COUNT];
    }
}
