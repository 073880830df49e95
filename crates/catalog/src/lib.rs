//! Inventory catalog (in-memory, thread-safe).
//!
//! [`Catalog`] is the single-threaded record store: validation, insert, update
//! and the read-side queries. [`CatalogService`] puts it behind one lock and is
//! what callers share across threads.

pub mod catalog;
pub mod category;
pub mod item;
mod query;
pub mod service;

pub use catalog::Catalog;
pub use category::Category;
pub use item::{Item, ItemSnapshot};
pub use service::CatalogService;

pub use stockroom_core::{
    CatalogError, CatalogResult, Clock, ItemId, ManualClock, Rating, SystemClock,
};
