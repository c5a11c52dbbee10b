//! Role and permission domain models.
//!
//! Roles are named bundles of permissions. Users hold roles through `user_roles`;
//! roles hold permissions through `role_permissions`.

use crate::ids::{PermissionId, RoleId, UserId};
use quillpost_core::permissions::{CatalogError, Permission};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Role {
    pub id: RoleId,
    pub name: String,
}

/// A `permissions` row as stored: the catalog parts are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct PermissionRow {
    pub id: i64,
    pub action: String,
    pub target: String,
    pub range: String,
}

impl TryFrom<PermissionRow> for Permission {
    type Error = CatalogError;

    fn try_from(row: PermissionRow) -> Result<Self, Self::Error> {
        Permission::parse(PermissionId(row.id), &row.action, &row.target, &row.range)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct UserRole {
    pub user_id: UserId,
    pub role_id: RoleId,
}
