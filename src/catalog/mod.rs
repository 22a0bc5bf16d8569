//! Card catalog: static card metadata and lookup.
//!
//! The catalog is a consumed interface: the surrounding application
//! loads card data from its backend and registers it here; the engine
//! reads only the cost specification (and the name, for log text) when
//! resolving a decklist into card instances.
//!
//! ## Key Types
//!
//! - `TemplateId`: Identifier for a card's catalog identity
//! - `CardMetadata`: Static card data (name, cost text, display fields)
//! - `CardCatalog`: Metadata lookup by template id

pub mod metadata;
pub mod registry;

pub use metadata::{CardMetadata, TemplateId};
pub use registry::CardCatalog;
