//! Record-model contract and polymorphic references.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::id::RecordId;

/// Entity marker + minimal interface.
pub trait Entity {
    /// Returns the record identifier.
    fn id(&self) -> RecordId;
}

/// Contract implemented by every host-managed record type.
///
/// `NAME` is the storage-level type tag carried inside polymorphic reference
/// columns; `TABLE` is the table backing this model in the host schema.
pub trait Model: Entity {
    const NAME: &'static str;
    const TABLE: &'static str;
}

/// Polymorphic reference: a (type tag, id) pair packed into one column.
///
/// Stored and rendered as `"<type-tag>,<id>"`. Tags may contain dots but
/// never a comma, so the first comma always splits tag from id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelRef {
    model: String,
    id: RecordId,
}

impl ModelRef {
    pub fn new(model: impl Into<String>, id: RecordId) -> Self {
        Self {
            model: model.into(),
            id,
        }
    }

    /// Reference to a record of model `M`.
    pub fn to<M: Model>(id: RecordId) -> Self {
        Self::new(M::NAME, id)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Type test against a concrete model: tag comparison, not downcasting.
    pub fn is<M: Model>(&self) -> bool {
        self.model == M::NAME
    }
}

impl core::fmt::Display for ModelRef {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{},{}", self.model, self.id)
    }
}

impl FromStr for ModelRef {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (model, id) = s
            .split_once(',')
            .ok_or_else(|| DomainError::invalid_reference(format!("missing comma in {s:?}")))?;
        if model.is_empty() {
            return Err(DomainError::invalid_reference(format!(
                "empty type tag in {s:?}"
            )));
        }
        let id = RecordId::from_str(id)
            .map_err(|_| DomainError::invalid_reference(format!("bad id in {s:?}")))?;
        Ok(Self::new(model, id))
    }
}
