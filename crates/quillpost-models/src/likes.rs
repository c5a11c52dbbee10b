//! Like models.

use crate::ids::{CommentId, LikeId, PostId, UserId};
use crate::ownership::HasUser;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "likeable_type", rename_all = "lowercase")]
pub enum LikeableType {
    Post,
    Comment,
}

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Like {
    pub id: LikeId,
    pub user: UserId,
    pub likeable_type: LikeableType,
    pub post: Option<PostId>,
    pub comment: Option<CommentId>,
    pub published_at: chrono::DateTime<chrono::Utc>,
}

/// Payload for adding or updating a like.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LikeDto {
    pub id: Option<LikeId>,
    pub user: UserId,
    pub likeable_type: LikeableType,
    pub post: Option<PostId>,
    pub comment: Option<CommentId>,
}

impl HasUser for Like {
    fn user_id(&self) -> UserId {
        self.user
    }
}

impl HasUser for LikeDto {
    fn user_id(&self) -> UserId {
        self.user
    }
}
