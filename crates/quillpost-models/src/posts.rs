//! Blog post models.

use crate::ids::{CategoryId, PostId, TagId, UserId};
use crate::ownership::HasAuthor;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub author: UserId,
    pub category: CategoryId,
    pub name: String,
    pub content: String,
    pub thumbnail_url: Option<String>,
    pub published_at: chrono::DateTime<chrono::Utc>,
    pub modified_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Payload for adding or updating a post.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PostDto {
    pub id: Option<PostId>,
    pub author: UserId,
    pub category: CategoryId,
    pub name: String,
    pub content: String,
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<TagId>,
}

impl HasAuthor for Post {
    fn author_id(&self) -> UserId {
        self.author
    }
}

impl HasAuthor for PostDto {
    fn author_id(&self) -> UserId {
        self.author
    }
}
