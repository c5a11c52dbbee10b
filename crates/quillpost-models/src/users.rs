//! User account model.

use crate::ids::UserId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user account.
///
/// When a user record is itself the resource being acted upon (account
/// read/update/delete), its own `id` is the owner.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub email_confirmed: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
