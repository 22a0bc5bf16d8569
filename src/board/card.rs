//! Card instances - physical copies in a duel.
//!
//! A `CardInstance` is one copy of a catalog card. Two copies of the
//! same template are distinct instances with distinct IDs, so the
//! engine can track exactly which copy sits where.

use serde::{Deserialize, Serialize};

use crate::catalog::TemplateId;

/// Unique identifier for one physical card copy within a duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Create a new instance ID.
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

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}

/// One physical card copy.
///
/// Owned by exactly one of {deck, hand, field slot} of one seat at a
/// time. The name and cost text are resolved from the catalog once at
/// duel initialization so the instance is self-contained afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique per physical copy.
    pub instance: InstanceId,

    /// Catalog identity (shared by all copies of the same card).
    pub template: TemplateId,

    /// Card name, for log text.
    pub name: String,

    /// Raw cost specification from the catalog. Parsed leniently at
    /// placement time.
    pub cost_spec: String,
}

impl CardInstance {
    /// Create a card instance.
    #[must_use]
    pub fn new(
        instance: InstanceId,
        template: TemplateId,
        name: impl Into<String>,
        cost_spec: impl Into<String>,
    ) -> Self {
        Self {
            instance,
            template,
            name: name.into(),
            cost_spec: cost_spec.into(),
        }
    }
}
