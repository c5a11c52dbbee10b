#![allow(dead_code)]

use async_trait::async_trait;
use quillpost::authz::Authorizer;
use quillpost::store::{InMemoryRoleStore, RoleStore, StoreError};
use quillpost_auth::Claims;
use quillpost_config::AuthzConfig;
use quillpost_core::permissions::{Permission, PermissionAction, PermissionRange, PermissionTarget};
use quillpost_models::{
    CategoryId, CommentDto, CommentId, LikeDto, LikeableType, Post, PostId, RoleId, Tag, TagId,
    User, UserId,
};
use std::sync::Arc;
use std::time::Duration;

pub type Grant = (PermissionAction, PermissionTarget, PermissionRange);

/// Builds an in-memory role store one role at a time.
#[derive(Default)]
pub struct Fixture {
    pub store: Arc<InMemoryRoleStore>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a role holding `grants` and returns its id.
    pub fn role(&self, name: &str, grants: &[Grant]) -> RoleId {
        let role = self.store.create_role(name);
        for &(action, target, range) in grants {
            self.store.grant(role.id, action, target, range).unwrap();
        }
        role.id
    }

    pub fn assign(&self, user: i64, roles: &[RoleId]) -> UserId {
        let user = UserId::new(user);
        for role in roles {
            self.store.assign(user, *role).unwrap();
        }
        user
    }

    pub fn authorizer(&self) -> Authorizer {
        Authorizer::new(self.store.clone(), &AuthzConfig::default())
    }
}

pub fn claims(sub: &str) -> Claims {
    Claims {
        sub: sub.to_string(),
        username: "test".to_string(),
        exp: 9999999999,
        iat: 1234567890,
    }
}

pub fn comment_by(author: i64) -> CommentDto {
    CommentDto {
        id: Some(CommentId::new(1)),
        author: UserId::new(author),
        post_parent: PostId::new(1),
        comment_parent: None,
        content: "First!".to_string(),
    }
}

pub fn like_by(user: i64) -> LikeDto {
    LikeDto {
        id: None,
        user: UserId::new(user),
        likeable_type: LikeableType::Post,
        post: Some(PostId::new(1)),
        comment: None,
    }
}

pub fn post_by(author: i64) -> Post {
    Post {
        id: PostId::new(1),
        author: UserId::new(author),
        category: CategoryId::new(1),
        name: "Hello".to_string(),
        content: "World".to_string(),
        thumbnail_url: None,
        published_at: chrono::Utc::now(),
        modified_at: None,
    }
}

pub fn user(id: i64) -> User {
    User {
        id: UserId::new(id),
        username: format!("user{}", id),
        email: format!("user{}@example.com", id),
        email_confirmed: true,
        created_at: chrono::Utc::now(),
    }
}

pub fn tag() -> Tag {
    Tag {
        id: TagId::new(1),
        name: "rust".to_string(),
    }
}

/// Store whose permission lookups fail for the listed roles.
pub struct FailingStore {
    pub inner: Arc<InMemoryRoleStore>,
    pub failing_roles: Vec<RoleId>,
    pub fail_roles_of: bool,
}

#[async_trait]
impl RoleStore for FailingStore {
    async fn roles_of(&self, user_id: UserId) -> Result<Vec<RoleId>, StoreError> {
        if self.fail_roles_of {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        self.inner.roles_of(user_id).await
    }

    async fn permissions_of(&self, role_id: RoleId) -> Result<Vec<Permission>, StoreError> {
        if self.failing_roles.contains(&role_id) {
            return Err(StoreError::Database(sqlx::Error::PoolClosed));
        }
        self.inner.permissions_of(role_id).await
    }
}

/// Store that answers after `delay`.
pub struct SlowStore {
    pub inner: Arc<InMemoryRoleStore>,
    pub delay: Duration,
}

#[async_trait]
impl RoleStore for SlowStore {
    async fn roles_of(&self, user_id: UserId) -> Result<Vec<RoleId>, StoreError> {
        self.inner.roles_of(user_id).await
    }

    async fn permissions_of(&self, role_id: RoleId) -> Result<Vec<Permission>, StoreError> {
        tokio::time::sleep(self.delay).await;
        self.inner.permissions_of(role_id).await
    }
}
