//! Card metadata - static catalog data.
//!
//! `CardMetadata` holds the unchanging properties of a card as served
//! by the catalog backend. The engine reads `cost_spec`; the remaining
//! fields are carried for the presentation layer.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card's catalog identity.
///
/// This identifies the "kind" of card, not a physical copy in a duel;
/// copies are `board::CardInstance` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateId(pub u32);

impl TemplateId {
    /// Create a new template ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Template({})", self.0)
    }
}

/// Static card data from the catalog.
///
/// `cost_spec` is the raw 必要エナジー free text; it is parsed leniently
/// at placement time, never validated here.
///
/// ## Example
///
/// ```
/// use duel_engine::catalog::{CardMetadata, TemplateId};
///
/// let card = CardMetadata::new(TemplateId::new(1), "Azure Drake")
///     .with_cost("青2")
///     .with_battle_points(1500);
///
/// assert_eq!(card.cost_spec, "青2");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardMetadata {
    /// Catalog identity.
    pub template: TemplateId,

    /// Card name (for display and log text).
    pub name: String,

    /// Raw cost specification text (必要エナジー). Empty means free.
    pub cost_spec: String,

    /// Card kind text (カード種類), when the catalog provides it.
    pub card_type: Option<String>,

    /// Battle points (BP), when the catalog provides them.
    pub battle_points: Option<i64>,

    /// Energy this card generates (発生エナジー), raw text.
    pub generated_energy: Option<String>,

    /// Feature/trait text (特徴).
    pub feature_text: Option<String>,
}

impl CardMetadata {
    /// Create metadata with a name and no cost.
    #[must_use]
    pub fn new(template: TemplateId, name: impl Into<String>) -> Self {
        Self {
            template,
            name: name.into(),
            cost_spec: String::new(),
            card_type: None,
            battle_points: None,
            generated_energy: None,
            feature_text: None,
        }
    }

    /// Set the raw cost text (builder pattern).
    #[must_use]
    pub fn with_cost(mut self, cost_spec: impl Into<String>) -> Self {
        self.cost_spec = cost_spec.into();
        self
    }

    /// Set the card kind text.
    #[must_use]
    pub fn with_card_type(mut self, card_type: impl Into<String>) -> Self {
        self.card_type = Some(card_type.into());
        self
    }

    /// Set the battle points.
    #[must_use]
    pub fn with_battle_points(mut self, bp: i64) -> Self {
        self.battle_points = Some(bp);
        self
    }

    /// Set the generated-energy text.
    #[must_use]
    pub fn with_generated_energy(mut self, text: impl Into<String>) -> Self {
        self.generated_energy = Some(text.into());
        self
    }

    /// Set the feature text.
    #[must_use]
    pub fn with_feature_text(mut self, text: impl Into<String>) -> Self {
        self.feature_text = Some(text.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_id_basics() {
        let id = TemplateId::new(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(format!("{id}"), "Template(7)");
    }

    #[test]
    fn test_metadata_builder() {
        let card = CardMetadata::new(TemplateId::new(1), "Azure Drake")
            .with_cost("青2")
            .with_card_type("ユニット")
            .with_battle_points(1500)
            .with_generated_energy("*青*")
            .with_feature_text("ドラゴン");

        assert_eq!(card.name, "Azure Drake");
        assert_eq!(card.cost_spec, "青2");
        assert_eq!(card.card_type.as_deref(), Some("ユニット"));
        assert_eq!(card.battle_points, Some(1500));
    }

    #[test]
    fn test_metadata_defaults_to_free() {
        let card = CardMetadata::new(TemplateId::new(2), "Token");
        assert!(card.cost_spec.is_empty());
        assert!(card.card_type.is_none());
    }

    #[test]
    fn test_metadata_serialization() {
        let card = CardMetadata::new(TemplateId::new(3), "Test").with_cost("赤");
        let json = serde_json::to_string(&card).unwrap();
        let back: CardMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
