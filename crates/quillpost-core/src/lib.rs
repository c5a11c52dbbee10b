//! # Quillpost Core
//!
//! Core types, errors, and the permission catalog for the Quillpost API.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`permissions`]: The closed vocabulary of actions, targets and ranges, and the
//!   [`Permission`] triple built from them
//!
//! # Example
//!
//! ```ignore
//! use quillpost_core::permissions::{
//!     Permission, PermissionAction, PermissionRange, PermissionTarget,
//! };
//!
//! let permission = Permission::parse(PermissionId::from(1), "Read", "Post", "All")?;
//! assert_eq!(permission.action, PermissionAction::Read);
//! ```

pub mod errors;
pub mod permissions;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use permissions::{
    CatalogError, Permission, PermissionAction, PermissionRange, PermissionTarget,
};
