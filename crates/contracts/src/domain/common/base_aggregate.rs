use super::EntityMetadata;
use serde::{Deserialize, Serialize};

/// Fields shared by every aggregate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BaseAggregate<Id> {
    pub id: Id,
    /// Business code (e.g. "PRJ-001")
    pub code: String,
    /// Display name
    pub description: String,
    pub metadata: EntityMetadata,
}

impl<Id> BaseAggregate<Id> {
    pub fn new(id: Id, code: String, description: String) -> Self {
        Self {
            id,
            code,
            description,
            metadata: EntityMetadata::new(),
        }
    }

    /// Rebuild an aggregate loaded from storage
    pub fn with_metadata(id: Id, code: String, description: String, metadata: EntityMetadata) -> Self {
        Self {
            id,
            code,
            description,
            metadata,
        }
    }

    pub fn touch(&mut self) {
        self.metadata.touch();
    }
}
