//! # Quillpost Models
//!
//! Domain models and DTOs for the Quillpost API.
//!
//! This crate provides the blog entities and DTOs that flow through authorization
//! checks, the role/permission rows the store reads, and the ownership accessor
//! traits resources expose.
//!
//! # Modules
//!
//! - [`ids`]: Strongly-typed numeric IDs
//! - [`ownership`]: `HasAuthor` / `HasUser` accessors
//! - [`users`]: User accounts
//! - [`posts`], [`comments`], [`likes`]: Authored content
//! - [`taxonomy`]: Tags and categories
//! - [`roles`]: Roles, permission rows and assignments
//!
//! # Example
//!
//! ```ignore
//! use quillpost_models::{HasAuthor, Post};
//!
//! let owner = post.author_id();
//! ```

pub mod comments;
pub mod ids;
pub mod likes;
pub mod ownership;
pub mod posts;
pub mod roles;
pub mod taxonomy;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use comments::{Comment, CommentDto};
pub use ids::{CategoryId, CommentId, LikeId, PermissionId, PostId, RoleId, TagId, UserId};
pub use likes::{Like, LikeDto, LikeableType};
pub use ownership::{HasAuthor, HasUser};
pub use posts::{Post, PostDto};
pub use roles::{PermissionRow, Role, UserRole};
pub use taxonomy::{Category, Tag};
pub use users::User;
