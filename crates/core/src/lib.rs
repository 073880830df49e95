//! `stockroom-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the catalog: the
//! error taxonomy, validated identifiers and ratings, and the time source.

pub mod clock;
pub mod entity;
pub mod error;
pub mod id;
pub mod rating;
pub mod value_object;

pub use clock::{Clock, ManualClock, SystemClock};
pub use entity::Entity;
pub use error::{CatalogError, CatalogResult};
pub use id::ItemId;
pub use rating::Rating;
pub use value_object::ValueObject;
