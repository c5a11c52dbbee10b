//! # Quillpost Config
//!
//! Configuration types for the Quillpost API, loaded from environment variables.
//!
//! - [`authz`]: Authorization evaluator configuration
//!
//! # Example
//!
//! ```ignore
//! use quillpost_config::AuthzConfig;
//!
//! let authz_config = AuthzConfig::from_env();
//! ```

pub mod authz;

// Re-export commonly used types at crate root
pub use authz::AuthzConfig;
