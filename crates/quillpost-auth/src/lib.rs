//! # Quillpost Auth
//!
//! Authentication types for the Quillpost API.
//!
//! Tokens are issued and verified upstream; by the time a request reaches
//! authorization its access-token [`Claims`] are already decoded. This crate
//! provides:
//!
//! - [`claims`]: The access-token claim structure
//! - [`identity`]: [`IdentitySource`], the single question authorization asks of
//!   the authentication context: "who is calling?"
//!
//! # Example
//!
//! ```ignore
//! use quillpost_auth::{Claims, IdentitySource};
//!
//! match claims.principal_id() {
//!     Some(user_id) => println!("caller is {user_id}"),
//!     None => println!("anonymous or malformed subject"),
//! }
//! ```

pub mod claims;
pub mod identity;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use identity::{Anonymous, IdentitySource};
