//! Cost maps and the lenient cost-text parser.
//!
//! Catalog cost specifications are free text like `青2赤` ("two blue,
//! one red"). The parser scans for color tokens, each followed by an
//! optional decimal amount (default 1), and ignores everything it does
//! not recognize — catalog data is scraped and messy, so unknown
//! characters are noise, not errors. A string with no recognizable
//! tokens parses as a zero cost; the duel controller logs that case
//! for visibility.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::EnergyColor;

/// Per-color required amounts.
///
/// Colors absent from the map (amount 0) are unconstrained. Also used
/// for deficit reporting (`EnergyPool::missing`) and for describing a
/// bundle of granted energy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostMap {
    amounts: [u8; EnergyColor::COUNT],
}

impl CostMap {
    /// The zero cost.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Required amount for a color (0 = unconstrained).
    #[must_use]
    pub fn get(&self, color: EnergyColor) -> u8 {
        self.amounts[color.index()]
    }

    /// Add to a color's required amount, saturating.
    pub fn add(&mut self, color: EnergyColor, amount: u8) {
        let slot = &mut self.amounts[color.index()];
        *slot = slot.saturating_add(amount);
    }

    /// Builder-style `add`.
    #[must_use]
    pub fn with(mut self, color: EnergyColor, amount: u8) -> Self {
        self.add(color, amount);
        self
    }

    /// True if no color is required.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.amounts.iter().all(|&a| a == 0)
    }

    /// Sum of required amounts across colors.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.amounts.iter().map(|&a| u32::from(a)).sum()
    }

    /// Non-zero (color, amount) entries in canonical color order.
    ///
    /// Costs rarely touch more than two colors, so entries stay inline.
    #[must_use]
    pub fn entries(&self) -> SmallVec<[(EnergyColor, u8); 4]> {
        EnergyColor::ALL
            .iter()
            .filter_map(|&c| {
                let amount = self.get(c);
                (amount > 0).then_some((c, amount))
            })
            .collect()
    }
}

impl std::fmt::Display for CostMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_cost(self))
    }
}

/// Parse a free-text cost specification into a [`CostMap`].
///
/// Each color token may be followed by a decimal amount; a bare token
/// counts as 1. Repeated tokens accumulate. Unrecognized characters are
/// skipped.
///
/// ```
/// use duel_engine::energy::{parse_cost, EnergyColor};
///
/// let cost = parse_cost("青2緑");
/// assert_eq!(cost.get(EnergyColor::Blue), 2);
/// assert_eq!(cost.get(EnergyColor::Green), 1);
/// assert_eq!(cost.get(EnergyColor::Red), 0);
///
/// assert!(parse_cost("無料").is_free());
/// ```
#[must_use]
pub fn parse_cost(raw: &str) -> CostMap {
    let mut cost = CostMap::new();
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        let Some(color) = EnergyColor::from_token(c) else {
            continue;
        };

        let mut amount: u32 = 0;
        let mut has_digits = false;
        while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
            has_digits = true;
            amount = amount.saturating_mul(10).saturating_add(digit);
            chars.next();
        }

        let amount = if has_digits {
            amount.min(u32::from(u8::MAX)) as u8
        } else {
            1
        };
        cost.add(color, amount);
    }

    cost
}

/// Render a cost for log text: color name, then amount when above 1.
///
/// ```
/// use duel_engine::energy::{format_cost, CostMap, EnergyColor};
///
/// let cost = CostMap::new()
///     .with(EnergyColor::Blue, 2)
///     .with(EnergyColor::Red, 1);
/// assert_eq!(format_cost(&cost), "blue2 red");
/// assert_eq!(format_cost(&CostMap::new()), "free");
/// ```
#[must_use]
pub fn format_cost(cost: &CostMap) -> String {
    if cost.is_free() {
        return "free".to_string();
    }

    let parts: Vec<String> = cost
        .entries()
        .iter()
        .map(|&(color, amount)| {
            if amount > 1 {
                format!("{}{}", color.name(), amount)
            } else {
                color.name().to_string()
            }
        })
        .collect();
    parts.join(" ")
}
