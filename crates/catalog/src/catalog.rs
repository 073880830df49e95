//! Record store: validation, insertion, point lookup and update.
//!
//! Query operations live in the private `query` module as a second
//! `impl Catalog` block.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use stockroom_core::{CatalogError, CatalogResult, Clock, ItemId, Rating, SystemClock};

use crate::category::Category;
use crate::item::{Item, ItemSnapshot};

/// In-memory item collection.
///
/// Not synchronized: callers serialize access (see
/// [`CatalogService`](crate::CatalogService)). Items are kept in insertion
/// order; `index` maps an id to its position for lookups and duplicate checks.
#[derive(Debug)]
pub struct Catalog {
    pub(crate) items: Vec<Item>,
    index: HashMap<ItemId, usize>,
    pub(crate) clock: Arc<dyn Clock>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
            clock,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Insert a new item.
    ///
    /// Input validation runs before the uniqueness check, so a bad name on a
    /// taken id reports `Validation`, not `DuplicateId`. On failure the
    /// collection is untouched.
    pub fn add(
        &mut self,
        id: i64,
        name: &str,
        category: Category,
        rating: i32,
        created_at: DateTime<Utc>,
    ) -> CatalogResult<()> {
        let id = Self::validate_id(id)?;
        let rating = Self::validate_fields(name, rating)?;
        self.ensure_available(id)?;

        self.index.insert(id, self.items.len());
        self.items
            .push(Item::new(id, name.to_string(), category, rating, created_at));
        Ok(())
    }

    pub fn get_by_id(&self, id: i64) -> Option<ItemSnapshot> {
        self.find(id).map(Item::snapshot)
    }

    pub fn get_all(&self) -> Vec<ItemSnapshot> {
        self.items.iter().map(Item::snapshot).collect()
    }

    /// Overwrite name, category and rating of an existing item.
    ///
    /// Returns `Ok(false)` when no item has `id`. Validation errors are
    /// reported whether or not the item exists.
    pub fn update(
        &mut self,
        id: i64,
        new_name: &str,
        new_category: Category,
        new_rating: i32,
    ) -> CatalogResult<bool> {
        let rating = Self::validate_fields(new_name, new_rating)?;

        let Some(pos) = ItemId::new(id).ok().and_then(|id| self.index.get(&id).copied()) else {
            return Ok(false);
        };

        let now = self.clock.now();
        self.items[pos].revise(new_name.to_string(), new_category, rating, now);
        Ok(true)
    }

    /// Reject non-positive ids.
    pub fn validate_id(id: i64) -> CatalogResult<ItemId> {
        ItemId::new(id)
    }

    /// Name and rating rules shared by [`add`](Self::add) and
    /// [`update`](Self::update). The name is checked first.
    pub fn validate_fields(name: &str, rating: i32) -> CatalogResult<Rating> {
        if name.trim().is_empty() {
            return Err(CatalogError::validation("item name cannot be empty"));
        }
        Rating::new(rating)
    }

    /// Fail with `DuplicateId` if `id` is taken.
    ///
    /// Non-positive ids can never be stored, so they are always available.
    pub fn check_id_available(&self, id: i64) -> CatalogResult<()> {
        match ItemId::new(id) {
            Ok(id) => self.ensure_available(id),
            Err(_) => Ok(()),
        }
    }

    fn ensure_available(&self, id: ItemId) -> CatalogResult<()> {
        if self.index.contains_key(&id) {
            return Err(CatalogError::duplicate_id(id));
        }
        Ok(())
    }

    fn find(&self, id: i64) -> Option<&Item> {
        let id = ItemId::new(id).ok()?;
        self.index.get(&id).map(|&pos| &self.items[pos])
    }
}
