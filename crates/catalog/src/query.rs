//! Read-side queries over the catalog.
//!
//! Every query is a full scan in insertion order followed by an optional
//! stable sort; results are snapshots.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Datelike, Months, Utc};

use crate::catalog::Catalog;
use crate::category::Category;
use crate::item::{Item, ItemSnapshot};

impl Catalog {
    /// Items of `category`, ascending by name (byte-wise), insertion order on ties.
    pub fn get_by_category_sorted_by_name(&self, category: Category) -> Vec<ItemSnapshot> {
        let mut hits: Vec<&Item> = self
            .items
            .iter()
            .filter(|item| item.category() == category)
            .collect();
        hits.sort_by(|a, b| a.name().cmp(b.name()));
        hits.into_iter().map(Item::snapshot).collect()
    }

    /// Items created strictly after `threshold`.
    pub fn get_created_after(&self, threshold: DateTime<Utc>) -> Vec<ItemSnapshot> {
        self.items
            .iter()
            .filter(|item| item.created_at() > threshold)
            .map(Item::snapshot)
            .collect()
    }

    /// Items updated at least once.
    pub fn get_modified_since_creation(&self) -> Vec<ItemSnapshot> {
        self.items
            .iter()
            .filter(|item| item.is_modified())
            .map(Item::snapshot)
            .collect()
    }

    pub fn get_categories_in_use(&self) -> BTreeSet<Category> {
        self.items.iter().map(Item::category).collect()
    }

    pub fn count_in_category(&self, category: Category) -> usize {
        self.items
            .iter()
            .filter(|item| item.category() == category)
            .count()
    }

    /// Tally of the first character of every name, as stored (case and
    /// leading whitespace preserved).
    pub fn count_by_first_letter_of_name(&self) -> BTreeMap<char, usize> {
        let mut counts = BTreeMap::new();
        for first in self.items.iter().filter_map(|item| item.name().chars().next()) {
            *counts.entry(first).or_insert(0) += 1;
        }
        counts
    }

    /// Max-rated items created in the current calendar month (UTC), newest
    /// first.
    ///
    /// Equal `created_at` values come out in reverse insertion order: the scan
    /// runs back to front and the sort is stable.
    pub fn get_top_rated_this_month_sorted_by_date_desc(&self) -> Vec<ItemSnapshot> {
        let Some((start, next_start)) = month_window(self.clock.now()) else {
            return Vec::new();
        };

        let mut hits: Vec<&Item> = self
            .items
            .iter()
            .rev()
            .filter(|item| item.rating().is_max())
            .filter(|item| item.created_at() >= start && item.created_at() < next_start)
            .collect();
        hits.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        hits.into_iter().map(Item::snapshot).collect()
    }
}

/// `[first instant of the month, first instant of the next month)`.
fn month_window(now: DateTime<Utc>) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let first = now.date_naive().with_day(1)?;
    let next = first.checked_add_months(Months::new(1))?;
    Some((first.and_hms_opt(0, 0, 0)?.and_utc(), next.and_hms_opt(0, 0, 0)?.and_utc()))
}
