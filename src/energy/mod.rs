//! Energy system: per-seat resource counters and cost payment.
//!
//! Players accumulate energy in five colors and spend it to place
//! cards. Card costs arrive as free text from the catalog (the
//! 必要エナジー field) and are parsed leniently into a [`CostMap`].
//!
//! ## Key Types
//!
//! - `EnergyColor`: The closed set of five resource colors
//! - `CostMap`: Per-color required amounts parsed from cost text
//! - `EnergyPool`: A seat's counters with caps and atomic payment

pub mod cost;
pub mod pool;

pub use cost::{format_cost, parse_cost, CostMap};
pub use pool::{EnergyPool, DEFAULT_ENERGY_CAP};

use serde::{Deserialize, Serialize};

/// Turn-start energy scales with the turn number, capped here.
pub const MAX_TURN_ENERGY: u8 = 5;

/// One of the five energy colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnergyColor {
    /// 青
    Blue,
    /// 赤
    Red,
    /// 緑
    Green,
    /// 黄
    Yellow,
    /// 紫
    Purple,
}

impl EnergyColor {
    /// Number of colors.
    pub const COUNT: usize = 5;

    /// All colors, in canonical order.
    pub const ALL: [EnergyColor; 5] = [
        EnergyColor::Blue,
        EnergyColor::Red,
        EnergyColor::Green,
        EnergyColor::Yellow,
        EnergyColor::Purple,
    ];

    /// Canonical index of this color.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            EnergyColor::Blue => 0,
            EnergyColor::Red => 1,
            EnergyColor::Green => 2,
            EnergyColor::Yellow => 3,
            EnergyColor::Purple => 4,
        }
    }

    /// The single-character catalog token for this color.
    #[must_use]
    pub const fn token(self) -> char {
        match self {
            EnergyColor::Blue => '青',
            EnergyColor::Red => '赤',
            EnergyColor::Green => '緑',
            EnergyColor::Yellow => '黄',
            EnergyColor::Purple => '紫',
        }
    }

    /// Map a catalog token back to its color.
    ///
    /// ```
    /// use duel_engine::energy::EnergyColor;
    ///
    /// assert_eq!(EnergyColor::from_token('青'), Some(EnergyColor::Blue));
    /// assert_eq!(EnergyColor::from_token('x'), None);
    /// ```
    #[must_use]
    pub const fn from_token(token: char) -> Option<Self> {
        match token {
            '青' => Some(EnergyColor::Blue),
            '赤' => Some(EnergyColor::Red),
            '緑' => Some(EnergyColor::Green),
            '黄' => Some(EnergyColor::Yellow),
            '紫' => Some(EnergyColor::Purple),
            _ => None,
        }
    }

    /// English color name for log text.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            EnergyColor::Blue => "blue",
            EnergyColor::Red => "red",
            EnergyColor::Green => "green",
            EnergyColor::Yellow => "yellow",
            EnergyColor::Purple => "purple",
        }
    }
}

impl std::fmt::Display for EnergyColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Energy granted at the start of a turn: `min(turn_number, 5)`.
///
/// The colors themselves are rolled from the duel RNG by the controller.
#[must_use]
pub fn turn_energy_amount(turn_number: u32) -> u8 {
    turn_number.min(u32::from(MAX_TURN_ENERGY)) as u8
}
