//! Quillpost Observability Module
//!
//! Provides:
//! - Console logging initialization for binaries
//! - Authorization decision metrics via the `metrics` facade
//!
//! Metrics are recorded through whatever recorder the host installs; without one
//! the calls are no-ops.
//!
//! # Examples
//!
//! ```no_run
//! use quillpost_observability::init_basic_console_logging;
//!
//! init_basic_console_logging();
//! ```

pub mod basic_logging;
pub mod metrics;

pub use basic_logging::init_basic_console_logging;
pub use metrics::{track_authz_decision, track_policy_cache_hit};
