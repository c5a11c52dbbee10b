//! Policy name resolution.
//!
//! Routes name the permission they need as a string. Two kinds of name resolve
//! to a [`Requirement`]:
//!
//! 1. Statically registered names (`"moderate-comments"`), looked up first
//! 2. Dynamic names following the grammar `permission.<Action>.<Target>.<Range>`
//!
//! A dynamic name always yields a *fixed* range requirement. A name that does not
//! follow the grammar at all is "not applicable" (`Ok(None)`); a name that follows
//! it but spells an unknown member is rejected with [`PolicyError::InvalidPolicy`].
//! A typo must never resolve to some other valid-looking requirement.
//!
//! # Example
//!
//! ```ignore
//! use quillpost::authz::policy::parse_policy;
//!
//! let requirement = parse_policy("permission.Read.Post.Own")?.expect("grammar matches");
//! assert!(parse_policy("permission.Read.Post")?.is_none());
//! assert!(parse_policy("permission.Frobnicate.Post.Own").is_err());
//! ```

use parking_lot::RwLock;
use quillpost_core::permissions::{
    CatalogError, PermissionAction, PermissionRange, PermissionTarget,
};
use std::collections::HashMap;
use tracing::debug;

use super::requirement::Requirement;

/// Literal first segment of a dynamic policy name.
pub const POLICY_PREFIX: &str = "permission";

const POLICY_SEGMENTS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    #[error("invalid policy '{name}': {source}")]
    InvalidPolicy {
        name: String,
        #[source]
        source: CatalogError,
    },
}

/// Parses a dynamic policy name.
///
/// Returns `Ok(None)` when `name` does not follow the grammar (wrong prefix or
/// segment count).
///
/// # Errors
///
/// Returns [`PolicyError::InvalidPolicy`] when the grammar matches but a segment
/// is not a catalog member.
pub fn parse_policy(name: &str) -> Result<Option<Requirement>, PolicyError> {
    let segments: Vec<&str> = name.split('.').collect();
    if segments.len() != POLICY_SEGMENTS || segments[0] != POLICY_PREFIX {
        return Ok(None);
    }

    let invalid = |source: CatalogError| PolicyError::InvalidPolicy {
        name: name.to_string(),
        source,
    };

    let action: PermissionAction = segments[1].parse().map_err(invalid)?;
    let target: PermissionTarget = segments[2].parse().map_err(invalid)?;
    let range: PermissionRange = segments[3].parse().map_err(invalid)?;

    Ok(Some(Requirement::with_range(action, target, range)))
}

/// Resolves policy names to requirements.
///
/// Static registrations win over the dynamic grammar. Successfully parsed dynamic
/// names are memoized for the lifetime of the provider when caching is enabled;
/// failures are never cached.
#[derive(Debug, Default)]
pub struct PolicyProvider {
    statics: HashMap<String, Requirement>,
    cache: Option<RwLock<HashMap<String, Requirement>>>,
}

impl PolicyProvider {
    pub fn new(cache_enabled: bool) -> Self {
        Self {
            statics: HashMap::new(),
            cache: cache_enabled.then(|| RwLock::new(HashMap::new())),
        }
    }

    /// Registers a named policy. Later registrations replace earlier ones.
    pub fn register(mut self, name: impl Into<String>, requirement: Requirement) -> Self {
        self.statics.insert(name.into(), requirement);
        self
    }

    /// Resolves `name`, consulting static registrations first.
    ///
    /// # Errors
    ///
    /// See [`parse_policy`].
    pub fn resolve(&self, name: &str) -> Result<Option<Requirement>, PolicyError> {
        if let Some(requirement) = self.statics.get(name) {
            return Ok(Some(*requirement));
        }

        let Some(cache) = &self.cache else {
            return parse_policy(name);
        };

        if let Some(requirement) = cache.read().get(name) {
            quillpost_observability::track_policy_cache_hit();
            return Ok(Some(*requirement));
        }

        let parsed = parse_policy(name)?;
        if let Some(requirement) = parsed {
            debug!(policy = %name, requirement = %requirement, "Caching resolved policy");
            cache.write().insert(name.to_string(), requirement);
        }
        Ok(parsed)
    }

    /// Number of memoized dynamic policies.
    pub fn cached_len(&self) -> usize {
        self.cache.as_ref().map_or(0, |cache| cache.read().len())
    }
}
