//! Ownership accessors exposed by authored content.
//!
//! Entities and their DTOs implement these so authorization can read an owner id
//! without knowing the concrete type.

use crate::ids::UserId;

/// A resource written by a user (posts, comments and their DTOs).
pub trait HasAuthor {
    fn author_id(&self) -> UserId;
}

/// A resource created on behalf of a user (likes and their DTOs).
pub trait HasUser {
    fn user_id(&self) -> UserId;
}
