//! Item rating value object.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::value_object::ValueObject;

/// Rating in the inclusive range `[Rating::MIN, Rating::MAX]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 10;

    pub fn new(raw: i32) -> Result<Self, CatalogError> {
        if !(Self::MIN..=Self::MAX).contains(&raw) {
            return Err(CatalogError::validation(format!(
                "item rating must be between {} and {}",
                Self::MIN,
                Self::MAX
            )));
        }
        // In range, so the narrowing cannot truncate.
        Ok(Self(raw as u8))
    }

    pub fn get(self) -> i32 {
        i32::from(self.0)
    }

    /// Whether this is the highest rating an item can hold.
    pub fn is_max(self) -> bool {
        self.get() == Self::MAX
    }
}

impl ValueObject for Rating {}

impl core::fmt::Display for Rating {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<i32> for Rating {
    type Error = CatalogError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for i32 {
    fn from(value: Rating) -> Self {
        value.get()
    }
}
