//! Postgres-backed role store.
//!
//! Expected tables:
//!
//! ```text
//! permissions      (id BIGINT, action TEXT, target TEXT, "range" TEXT,
//!                   UNIQUE (action, target, "range"))
//! role_permissions (role_id BIGINT, permission_id BIGINT, PRIMARY KEY (role_id, permission_id))
//! user_roles       (user_id BIGINT, role_id BIGINT, PRIMARY KEY (user_id, role_id))
//! ```

use async_trait::async_trait;
use quillpost_core::permissions::Permission;
use quillpost_db::PgPool;
use quillpost_models::{PermissionRow, RoleId, UserId, UserRole};
use tracing::instrument;

use super::{RoleStore, StoreError};

#[derive(Clone, Debug)]
pub struct PgRoleStore {
    pool: PgPool,
}

impl PgRoleStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleStore for PgRoleStore {
    #[instrument(skip(self))]
    async fn roles_of(&self, user_id: UserId) -> Result<Vec<RoleId>, StoreError> {
        let rows = sqlx::query_as::<_, UserRole>(
            "SELECT user_id, role_id FROM user_roles WHERE user_id = $1 ORDER BY role_id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(held_roles(user_id, rows))
    }

    #[instrument(skip(self))]
    async fn permissions_of(&self, role_id: RoleId) -> Result<Vec<Permission>, StoreError> {
        let rows = sqlx::query_as::<_, PermissionRow>(
            r#"SELECT p.id, p.action, p.target, p."range" AS range
            FROM permissions p
            INNER JOIN role_permissions rp ON rp.permission_id = p.id
            WHERE rp.role_id = $1"#,
        )
        .bind(role_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| Permission::try_from(row).map_err(StoreError::from))
            .collect()
    }
}

/// Role ids of the assignment rows that belong to `user_id`.
fn held_roles(user_id: UserId, rows: Vec<UserRole>) -> Vec<RoleId> {
    rows.into_iter()
        .filter(|row| row.user_id == user_id)
        .map(|row| row.role_id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment(user: i64, role: i64) -> UserRole {
        UserRole {
            user_id: UserId::new(user),
            role_id: RoleId::new(role),
        }
    }

    #[test]
    fn test_held_roles_keeps_row_order() {
        let rows = vec![assignment(7, 1), assignment(7, 3)];
        assert_eq!(
            held_roles(UserId::new(7), rows),
            vec![RoleId::new(1), RoleId::new(3)]
        );
    }

    #[test]
    fn test_held_roles_ignores_other_users() {
        let rows = vec![assignment(9, 2), assignment(7, 4)];
        assert_eq!(held_roles(UserId::new(7), rows), vec![RoleId::new(4)]);
    }
}
