//! Catalog registry for metadata lookup.

use rustc_hash::FxHashMap;

use super::metadata::{CardMetadata, TemplateId};

/// Registry of card metadata.
///
/// Stores every card the application has loaded and provides lookup by
/// template ID. Registration is an application setup step, so a
/// duplicate ID is a defect and panics; a *missing* ID at decklist
/// resolution time is a reported error instead (catalog data and deck
/// data come from different sources and can drift).
///
/// ## Example
///
/// ```
/// use duel_engine::catalog::{CardCatalog, CardMetadata, TemplateId};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(CardMetadata::new(TemplateId::new(1), "Azure Drake").with_cost("青2"));
///
/// let found = catalog.lookup(TemplateId::new(1)).unwrap();
/// assert_eq!(found.name, "Azure Drake");
/// assert!(catalog.lookup(TemplateId::new(99)).is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<TemplateId, CardMetadata>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register card metadata.
    ///
    /// Panics if a card with the same template ID already exists.
    pub fn register(&mut self, card: CardMetadata) {
        if self.cards.contains_key(&card.template) {
            panic!("Card with template {:?} already registered", card.template);
        }
        self.cards.insert(card.template, card);
    }

    /// Look up metadata by template ID.
    #[must_use]
    pub fn lookup(&self, template: TemplateId) -> Option<&CardMetadata> {
        self.cards.get(&template)
    }

    /// Check if a template ID is registered.
    #[must_use]
    pub fn contains(&self, template: TemplateId) -> bool {
        self.cards.contains_key(&template)
    }

    /// Number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all registered metadata.
    pub fn iter(&self) -> impl Iterator<Item = &CardMetadata> {
        self.cards.values()
    }
}
