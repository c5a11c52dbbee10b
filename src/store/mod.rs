//! Role and permission lookups.
//!
//! The evaluator only ever asks two questions of its store: which roles does a
//! user hold, and which permissions does a role grant. Both are reads; role
//! administration belongs to the concrete stores.
//!
//! - [`memory`]: In-process store with administrative operations, used for tests
//!   and seeding
//! - [`postgres`]: Store backed by the `user_roles`, `role_permissions` and
//!   `permissions` tables

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use quillpost_core::permissions::{CatalogError, Permission};
use quillpost_models::{RoleId, UserId};
use std::time::Duration;

pub use memory::InMemoryRoleStore;
pub use postgres::PgRoleStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Corrupt permission row: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Role {0} does not exist")]
    RoleNotFound(RoleId),

    #[error("Lookup timed out after {0:?}")]
    Timeout(Duration),
}

/// Read access to role assignments and grants.
#[async_trait]
pub trait RoleStore: Send + Sync {
    /// Roles held by `user_id`. Empty when the user holds none.
    async fn roles_of(&self, user_id: UserId) -> Result<Vec<RoleId>, StoreError>;

    /// Permissions granted by `role_id`.
    async fn permissions_of(&self, role_id: RoleId) -> Result<Vec<Permission>, StoreError>;
}
