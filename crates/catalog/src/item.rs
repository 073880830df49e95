use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, ItemId, Rating, ValueObject};

use crate::category::Category;

/// A catalog record.
///
/// Only [`Catalog`](crate::Catalog) holds `Item`s; everything outside the
/// store sees [`ItemSnapshot`]s. Fields are set through already-validated
/// types, so an `Item` cannot carry an out-of-range rating or a bad id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    name: String,
    category: Category,
    rating: Rating,
    created_at: DateTime<Utc>,
    modified_at: DateTime<Utc>,
}

impl Item {
    pub(crate) fn new(
        id: ItemId,
        name: String,
        category: Category,
        rating: Rating,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            category,
            rating,
            created_at,
            modified_at: created_at,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn modified_at(&self) -> DateTime<Utc> {
        self.modified_at
    }

    pub fn is_modified(&self) -> bool {
        self.modified_at > self.created_at
    }

    /// Overwrite the mutable fields and stamp the modification time.
    ///
    /// `modified_at` never moves before `created_at`, even when the caller
    /// created the item with a timestamp ahead of `now`.
    pub(crate) fn revise(
        &mut self,
        name: String,
        category: Category,
        rating: Rating,
        now: DateTime<Utc>,
    ) {
        self.name = name;
        self.category = category;
        self.rating = rating;
        self.modified_at = now.max(self.created_at);
    }

    pub fn snapshot(&self) -> ItemSnapshot {
        ItemSnapshot {
            id: self.id,
            name: self.name.clone(),
            category: self.category,
            rating: self.rating,
            created_at: self.created_at,
            modified_at: self.modified_at,
        }
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> ItemId {
        self.id
    }
}

/// Read-only copy of an [`Item`] taken at read time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSnapshot {
    id: ItemId,
    name: String,
    category: Category,
    rating: Rating,
    created_at: DateTime<Utc>,
    modified_at: DateTime<Utc>,
}

impl ItemSnapshot {
    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn modified_at(&self) -> DateTime<Utc> {
        self.modified_at
    }
}

impl ValueObject for ItemSnapshot {}
