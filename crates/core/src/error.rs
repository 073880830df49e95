//! Domain error model.

use thiserror::Error;

use crate::id::ItemId;

/// Result type used across the catalog.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level error.
///
/// Only deterministic input failures live here. A missing item is an expected
/// outcome and is reported as `None` / `false` by the operations themselves.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A value violated a documented constraint (id, name, rating, category).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The id is already taken by another item.
    #[error("item id already exists: {0}")]
    DuplicateId(ItemId),
}

impl CatalogError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn duplicate_id(id: ItemId) -> Self {
        Self::DuplicateId(id)
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_duplicate_id(&self) -> bool {
        matches!(self, Self::DuplicateId(_))
    }
}
