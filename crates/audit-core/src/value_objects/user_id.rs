//! User ID - numeric identity of the user an audit record belongs to
//!
//! Only the number is stored; no relationship to a users table is enforced.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an audited user (32-bit, matches the `user_id` column)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    /// Create a new UserId from a raw i32 value
    #[inline]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the inner i32 value
    #[inline]
    pub const fn into_inner(self) -> i32 {
        self.0
    }

    /// Check if the UserId is zero (unset)
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for UserId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<UserId> for i32 {
    fn from(id: UserId) -> Self {
        id.0
    }
}
