//! Permission catalog for the Quillpost API.
//!
//! This module is the closed vocabulary every authorization decision is phrased in:
//! what is being done ([`PermissionAction`]), to which class of resource
//! ([`PermissionTarget`]), and how far the grant reaches ([`PermissionRange`]).
//! A [`Permission`] is one of each, plus the stable identifier the store gave it.
//!
//! Member names are case-sensitive and double as their textual form, both in the
//! `permissions` table and in policy strings such as `permission.Read.Post.All`.
//!
//! # Example
//!
//! ```ignore
//! use quillpost_core::permissions::{Permission, PermissionAction, PermissionId};
//!
//! let permission = Permission::parse(PermissionId(3), "Update", "Comment", "Own")?;
//! assert_eq!(permission.action, PermissionAction::Update);
//!
//! // Unknown members are rejected, never defaulted
//! assert!(Permission::parse(PermissionId(4), "Frobnicate", "Comment", "Own").is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error raised when a catalog member cannot be built from its textual form.
///
/// This is a programmer or configuration error (a bad row, a typo in a seed file),
/// never an authorization outcome.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid argument: '{value}' is not a known {kind}")]
    InvalidArgument { kind: &'static str, value: String },
}

/// Defines a closed catalog enum whose variant names are also its text form.
macro_rules! catalog_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal { $($variant:ident),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The member's case-sensitive name.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CatalogError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $(stringify!($variant) => Ok($name::$variant),)+
                    _ => Err(CatalogError::InvalidArgument {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

catalog_enum! {
    /// The verb a permission grants.
    PermissionAction, "permission action" {
        Create,
        Read,
        Update,
        Delete,
    }
}

catalog_enum! {
    /// The class of resource a permission applies to.
    PermissionTarget, "permission target" {
        Account,
        User,
        Post,
        Comment,
        Like,
        Role,
        Tag,
        Category,
    }
}

catalog_enum! {
    /// How far a permission reaches.
    ///
    /// `Own` only covers resources whose owner is the caller; `All` is unrestricted.
    PermissionRange, "permission range" {
        Own,
        All,
    }
}

/// Stable identifier of a permission row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionId(pub i64);

impl fmt::Display for PermissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for PermissionId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// An immutable (action, target, range) grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permission {
    pub id: PermissionId,
    pub action: PermissionAction,
    pub target: PermissionTarget,
    pub range: PermissionRange,
}

impl Permission {
    pub const fn new(
        id: PermissionId,
        action: PermissionAction,
        target: PermissionTarget,
        range: PermissionRange,
    ) -> Self {
        Self {
            id,
            action,
            target,
            range,
        }
    }

    /// Builds a permission from the textual names of its three parts.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidArgument`] naming the first part that is not a
    /// known member.
    pub fn parse(
        id: PermissionId,
        action: &str,
        target: &str,
        range: &str,
    ) -> Result<Self, CatalogError> {
        Ok(Self::new(id, action.parse()?, target.parse()?, range.parse()?))
    }

    /// Whether this permission and `other` grant the same triple.
    pub fn same_grant(&self, other: &Permission) -> bool {
        self.action == other.action && self.target == other.target && self.range == other.range
    }

    /// Whether this permission speaks about `action` on `target`, at any range.
    pub fn covers(&self, action: PermissionAction, target: PermissionTarget) -> bool {
        self.action == action && self.target == target
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.action, self.target, self.range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_members() {
        let permission = Permission::parse(PermissionId(1), "Read", "Post", "All").unwrap();
        assert_eq!(permission.action, PermissionAction::Read);
        assert_eq!(permission.target, PermissionTarget::Post);
        assert_eq!(permission.range, PermissionRange::All);
    }

    #[test]
    fn test_parse_unknown_member_is_invalid_argument() {
        let err = Permission::parse(PermissionId(1), "Read", "Blog", "All").unwrap_err();
        assert_eq!(
            err,
            CatalogError::InvalidArgument {
                kind: "permission target",
                value: "Blog".to_string()
            }
        );
    }

    #[test]
    fn test_member_names_are_case_sensitive() {
        assert!("read".parse::<PermissionAction>().is_err());
        assert!("OWN".parse::<PermissionRange>().is_err());
        assert_eq!("Own".parse::<PermissionRange>(), Ok(PermissionRange::Own));
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for target in PermissionTarget::ALL {
            assert_eq!(target.to_string().parse::<PermissionTarget>(), Ok(*target));
        }
    }

    #[test]
    fn test_same_grant_ignores_id() {
        let a = Permission::parse(PermissionId(1), "Update", "Comment", "Own").unwrap();
        let b = Permission::parse(PermissionId(2), "Update", "Comment", "Own").unwrap();
        let c = Permission::parse(PermissionId(3), "Update", "Comment", "All").unwrap();
        assert!(a.same_grant(&b));
        assert!(!a.same_grant(&c));
        assert!(a.covers(PermissionAction::Update, PermissionTarget::Comment));
    }

    #[test]
    fn test_display_permission() {
        let permission = Permission::parse(PermissionId(9), "Delete", "Role", "All").unwrap();
        assert_eq!(permission.to_string(), "Delete.Role.All");
    }
}
