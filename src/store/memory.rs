//! In-process role store.
//!
//! Holds roles, grants and assignments behind a single `parking_lot::RwLock`.
//! Permission ids are allocated once per (action, target, range) triple, so the
//! same grant on two roles shares one id, as rows in `permissions` would.

use async_trait::async_trait;
use parking_lot::RwLock;
use quillpost_core::permissions::{
    Permission, PermissionAction, PermissionId, PermissionRange, PermissionTarget,
};
use quillpost_models::{Role, RoleId, UserId};
use std::collections::HashMap;
use tracing::debug;

use super::{RoleStore, StoreError};

type Triple = (PermissionAction, PermissionTarget, PermissionRange);

#[derive(Debug, Default)]
struct Inner {
    next_role_id: i64,
    roles: HashMap<RoleId, Role>,
    catalog: HashMap<Triple, PermissionId>,
    grants: HashMap<RoleId, Vec<Permission>>,
    assignments: HashMap<UserId, Vec<RoleId>>,
}

impl Inner {
    fn permission_for(&mut self, triple: Triple) -> Permission {
        let next = PermissionId(self.catalog.len() as i64 + 1);
        let id = *self.catalog.entry(triple).or_insert(next);
        let (action, target, range) = triple;
        Permission::new(id, action, target, range)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryRoleStore {
    inner: RwLock<Inner>,
}

impl InMemoryRoleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a role with no permissions.
    pub fn create_role(&self, name: impl Into<String>) -> Role {
        let mut inner = self.inner.write();
        inner.next_role_id += 1;
        let role = Role {
            id: RoleId::new(inner.next_role_id),
            name: name.into(),
        };
        inner.roles.insert(role.id, role.clone());
        inner.grants.insert(role.id, Vec::new());
        debug!(role_id = %role.id, name = %role.name, "Created role");
        role
    }

    /// Grants a permission to a role.
    ///
    /// Returns `false` when the role already holds this exact triple. `Own` and
    /// `All` for the same action and target are distinct grants.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::RoleNotFound`] for an unknown role.
    pub fn grant(
        &self,
        role_id: RoleId,
        action: PermissionAction,
        target: PermissionTarget,
        range: PermissionRange,
    ) -> Result<bool, StoreError> {
        let mut inner = self.inner.write();
        if !inner.roles.contains_key(&role_id) {
            return Err(StoreError::RoleNotFound(role_id));
        }

        let permission = inner.permission_for((action, target, range));
        let grants = inner.grants.entry(role_id).or_default();
        if grants.iter().any(|held| held.same_grant(&permission)) {
            return Ok(false);
        }
        grants.push(permission);
        debug!(role_id = %role_id, permission = %permission, "Granted permission");
        Ok(true)
    }

    /// Removes a permission from a role. Returns whether it was held.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::RoleNotFound`] for an unknown role.
    pub fn revoke(
        &self,
        role_id: RoleId,
        action: PermissionAction,
        target: PermissionTarget,
        range: PermissionRange,
    ) -> Result<bool, StoreError> {
        let mut inner = self.inner.write();
        let grants = inner
            .grants
            .get_mut(&role_id)
            .ok_or(StoreError::RoleNotFound(role_id))?;
        let before = grants.len();
        grants.retain(|p| !(p.action == action && p.target == target && p.range == range));
        Ok(grants.len() != before)
    }

    /// Assigns a role to a user. Returns `false` when already assigned.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::RoleNotFound`] for an unknown role.
    pub fn assign(&self, user_id: UserId, role_id: RoleId) -> Result<bool, StoreError> {
        let mut inner = self.inner.write();
        if !inner.roles.contains_key(&role_id) {
            return Err(StoreError::RoleNotFound(role_id));
        }

        let held = inner.assignments.entry(user_id).or_default();
        if held.contains(&role_id) {
            return Ok(false);
        }
        held.push(role_id);
        debug!(user_id = %user_id, role_id = %role_id, "Assigned role");
        Ok(true)
    }

    /// All roles, ordered by id.
    pub fn roles(&self) -> Vec<Role> {
        let inner = self.inner.read();
        let mut roles: Vec<Role> = inner.roles.values().cloned().collect();
        roles.sort_by_key(|role| role.id);
        roles
    }
}

#[async_trait]
impl RoleStore for InMemoryRoleStore {
    async fn roles_of(&self, user_id: UserId) -> Result<Vec<RoleId>, StoreError> {
        Ok(self
            .inner
            .read()
            .assignments
            .get(&user_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn permissions_of(&self, role_id: RoleId) -> Result<Vec<Permission>, StoreError> {
        self.inner
            .read()
            .grants
            .get(&role_id)
            .cloned()
            .ok_or(StoreError::RoleNotFound(role_id))
    }
}
