//! Authorization configuration.
//!
//! # Configuration
//!
//! - `AUTHZ_LOOKUP_TIMEOUT_MS`: Upper bound for each role/permission lookup (default: 2000)
//! - `AUTHZ_POLICY_CACHE`: Memoize parsed policy names for the process lifetime (default: true)
//! - `AUTHZ_EXPOSE_DENY_REASONS`: Include the deny reason in HTTP error bodies (default: false)
//!
//! # Example
//!
//! ```ignore
//! use quillpost_config::AuthzConfig;
//!
//! let config = AuthzConfig::from_env();
//! let timeout = config.lookup_timeout();
//! ```

use std::env;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthzConfig {
    /// Milliseconds allowed for a single store lookup before the decision
    /// fails closed.
    pub lookup_timeout_ms: u64,

    /// Whether resolved policy names are cached.
    pub policy_cache: bool,

    /// Whether deny reasons reach the HTTP response body.
    ///
    /// Reasons are always logged; this only controls what the end user sees.
    pub expose_deny_reasons: bool,
}

impl Default for AuthzConfig {
    fn default() -> Self {
        Self {
            lookup_timeout_ms: 2000,
            policy_cache: true,
            expose_deny_reasons: false,
        }
    }
}

impl AuthzConfig {
    /// Creates a new `AuthzConfig` from environment variables.
    ///
    /// Falls back to default values if environment variables are not set
    /// or cannot be parsed.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            lookup_timeout_ms: env::var("AUTHZ_LOOKUP_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.lookup_timeout_ms),
            policy_cache: env::var("AUTHZ_POLICY_CACHE")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.policy_cache),
            expose_deny_reasons: env::var("AUTHZ_EXPOSE_DENY_REASONS")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.expose_deny_reasons),
        }
    }

    #[must_use]
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
