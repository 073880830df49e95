//! Thread-safe facade over [`Catalog`].
//!
//! Every method is one critical section: lock, run the matching `Catalog`
//! operation, unlock. Readers and writers exclude each other; there is no
//! way to hold the lock across two calls.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};

use stockroom_core::{CatalogResult, Clock, ItemId, Rating};

use crate::catalog::Catalog;
use crate::category::Category;
use crate::item::ItemSnapshot;

/// Shared handle to one catalog. Clones refer to the same store.
#[derive(Debug, Clone, Default)]
pub struct CatalogService {
    inner: Arc<Mutex<Catalog>>,
}

impl CatalogService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self::from_catalog(Catalog::with_clock(clock))
    }

    pub fn from_catalog(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(Mutex::new(catalog)),
        }
    }

    // A panic inside a critical section cannot leave a half-applied write
    // (validation precedes every mutation), so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Catalog> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn add(
        &self,
        id: i64,
        name: &str,
        category: Category,
        rating: i32,
        created_at: DateTime<Utc>,
    ) -> CatalogResult<()> {
        let result = self.lock().add(id, name, category, rating, created_at);
        match &result {
            Ok(()) => tracing::debug!(item_id = id, %category, "item added"),
            Err(e) => tracing::debug!(item_id = id, error = %e, "add rejected"),
        }
        result
    }

    pub fn get_by_id(&self, id: i64) -> Option<ItemSnapshot> {
        self.lock().get_by_id(id)
    }

    pub fn get_all(&self) -> Vec<ItemSnapshot> {
        self.lock().get_all()
    }

    pub fn update(
        &self,
        id: i64,
        new_name: &str,
        new_category: Category,
        new_rating: i32,
    ) -> CatalogResult<bool> {
        let result = self.lock().update(id, new_name, new_category, new_rating);
        match &result {
            Ok(true) => tracing::debug!(item_id = id, "item updated"),
            Ok(false) => tracing::debug!(item_id = id, "update skipped: no such item"),
            Err(e) => tracing::debug!(item_id = id, error = %e, "update rejected"),
        }
        result
    }

    pub fn get_by_category_sorted_by_name(&self, category: Category) -> Vec<ItemSnapshot> {
        self.lock().get_by_category_sorted_by_name(category)
    }

    pub fn get_created_after(&self, threshold: DateTime<Utc>) -> Vec<ItemSnapshot> {
        self.lock().get_created_after(threshold)
    }

    pub fn get_modified_since_creation(&self) -> Vec<ItemSnapshot> {
        self.lock().get_modified_since_creation()
    }

    pub fn get_categories_in_use(&self) -> BTreeSet<Category> {
        self.lock().get_categories_in_use()
    }

    pub fn count_in_category(&self, category: Category) -> usize {
        self.lock().count_in_category(category)
    }

    pub fn count_by_first_letter_of_name(&self) -> BTreeMap<char, usize> {
        self.lock().count_by_first_letter_of_name()
    }

    pub fn get_top_rated_this_month_sorted_by_date_desc(&self) -> Vec<ItemSnapshot> {
        self.lock().get_top_rated_this_month_sorted_by_date_desc()
    }

    // The validators hold no catalog state, but still go through the lock so
    // every call on the service is serialized the same way.

    pub fn validate_id(&self, id: i64) -> CatalogResult<ItemId> {
        let _guard = self.lock();
        Catalog::validate_id(id)
    }

    pub fn validate_fields(&self, name: &str, rating: i32) -> CatalogResult<Rating> {
        let _guard = self.lock();
        Catalog::validate_fields(name, rating)
    }

    pub fn check_id_available(&self, id: i64) -> CatalogResult<()> {
        self.lock().check_id_available(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use stockroom_core::{CatalogError, ManualClock};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 10, 8, 0, 0).unwrap()
    }

    #[test]
    fn clones_share_one_store() {
        let service = CatalogService::with_clock(Arc::new(ManualClock::new(t0())));
        let other = service.clone();

        service.add(1, "Laptop", Category::Electronics, 8, t0()).unwrap();
        assert_eq!(other.len(), 1);
        assert_eq!(other.get_by_id(1).unwrap().name(), "Laptop");
    }

    #[test]
    fn errors_pass_through_unchanged() {
        let service = CatalogService::new();
        service.add(1, "Laptop", Category::Electronics, 8, t0()).unwrap();

        assert!(service
            .add(1, "Laptop", Category::Electronics, 8, t0())
            .unwrap_err()
            .is_duplicate_id());
        assert!(service.add(2, "", Category::Electronics, 8, t0()).unwrap_err().is_validation());
        assert_eq!(
            service.validate_id(-1).unwrap_err(),
            CatalogError::validation("item id must be a positive number")
        );
        assert!(service.validate_fields("Laptop", 10).unwrap().is_max());
        assert!(service.check_id_available(1).unwrap_err().is_duplicate_id());
        assert!(service.check_id_available(2).is_ok());
    }

    #[test]
    fn reads_are_snapshots() {
        let clock = Arc::new(ManualClock::new(t0()));
        let service = CatalogService::with_clock(clock.clone());
        service.add(1, "Laptop", Category::Electronics, 8, t0()).unwrap();

        let before = service.get_all();
        clock.advance(Duration::seconds(1));
        assert!(service.update(1, "X", Category::Books, 9).unwrap());

        assert_eq!(before[0].name(), "Laptop");
        let after = service.get_by_id(1).unwrap();
        assert_eq!(after.name(), "X");
        assert_eq!(after.category(), Category::Books);
        assert!(after.modified_at() > after.created_at());
        assert_eq!(service.get_modified_since_creation(), vec![after]);
    }

    #[test]
    fn update_on_missing_id_is_false() {
        let service = CatalogService::new();
        assert!(!service.update(42, "Ghost", Category::Toys, 3).unwrap());
        assert!(service.is_empty());
    }

    #[test]
    fn lock_survives_a_panicking_caller() {
        let service = CatalogService::new();
        service.add(1, "Laptop", Category::Electronics, 8, t0()).unwrap();

        let poisoner = service.clone();
        let joined = std::thread::spawn(move || {
            let _guard = poisoner.lock();
            panic!("caller panicked while holding the lock");
        })
        .join();
        assert!(joined.is_err());

        assert_eq!(service.len(), 1);
        service.add(2, "Shirt", Category::Clothing, 7, t0()).unwrap();
        assert_eq!(service.count_in_category(Category::Clothing), 1);
    }
}
