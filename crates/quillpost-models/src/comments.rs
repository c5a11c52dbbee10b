//! Comment models.

use crate::ids::{CommentId, PostId, UserId};
use crate::ownership::HasAuthor;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub author: UserId,
    pub post_parent: PostId,
    pub comment_parent: Option<CommentId>,
    pub content: String,
    pub published_at: chrono::DateTime<chrono::Utc>,
}

/// Payload for adding or updating a comment.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CommentDto {
    pub id: Option<CommentId>,
    pub author: UserId,
    pub post_parent: PostId,
    pub comment_parent: Option<CommentId>,
    pub content: String,
}

impl HasAuthor for Comment {
    fn author_id(&self) -> UserId {
        self.author
    }
}

impl HasAuthor for CommentDto {
    fn author_id(&self) -> UserId {
        self.author
    }
}
