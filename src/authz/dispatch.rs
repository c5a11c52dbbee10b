//! Handler dispatch: which range check applies to a request.
//!
//! The requirement's shape (fixed or unspecified range) and the resource's
//! capability together pick one [`RangeCheck`]. The full table:
//!
//! | Requirement range | Resource                              | Check                 |
//! |-------------------|---------------------------------------|-----------------------|
//! | `Fixed(r)`        | any, or none                          | `Exact(r)`            |
//! | unspecified       | none, `NoOwner`                       | `AllOnly`             |
//! | unspecified       | `HasAuthorId`, `HasUserId`, `IsPrincipalItself` | `OwnedBy(owner)` |
//!
//! Onboarding a new resource kind means classifying it (see
//! [`resource`](super::resource)); this table does not change.

use quillpost_core::permissions::PermissionRange;
use quillpost_models::UserId;

use super::requirement::{RangeSpec, Requirement};
use super::resource::Ownership;

/// How a granted permission's range is tested against a requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeCheck {
    /// The permission's range must equal this one.
    Exact(PermissionRange),
    /// Only `All` satisfies: there is no owner to compare against.
    AllOnly,
    /// `All` satisfies; `Own` satisfies when the caller is this owner.
    OwnedBy(UserId),
}

impl RangeCheck {
    pub fn plan(requirement: &Requirement, resource: Option<Ownership>) -> Self {
        match (requirement.range, resource) {
            (RangeSpec::Fixed(range), _) => RangeCheck::Exact(range),
            (RangeSpec::Unspecified, None | Some(Ownership::NoOwner)) => RangeCheck::AllOnly,
            (
                RangeSpec::Unspecified,
                Some(
                    Ownership::Author(owner) | Ownership::User(owner) | Ownership::Principal(owner),
                ),
            ) => RangeCheck::OwnedBy(owner),
        }
    }

    /// Whether a permission with `range` passes this check for `principal`.
    pub fn admits(&self, range: PermissionRange, principal: UserId) -> bool {
        match *self {
            RangeCheck::Exact(required) => range == required,
            RangeCheck::AllOnly => range == PermissionRange::All,
            RangeCheck::OwnedBy(owner) => match range {
                PermissionRange::All => true,
                PermissionRange::Own => owner == principal,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quillpost_core::permissions::{PermissionAction, PermissionTarget};

    const ME: UserId = UserId::new(7);
    const SOMEONE_ELSE: UserId = UserId::new(9);

    fn update_comment() -> Requirement {
        Requirement::new(PermissionAction::Update, PermissionTarget::Comment)
    }

    #[test]
    fn test_fixed_range_ignores_resource() {
        let fixed = Requirement::with_range(
            PermissionAction::Update,
            PermissionTarget::Comment,
            PermissionRange::All,
        );
        let check = RangeCheck::plan(&fixed, Some(Ownership::Author(ME)));
        assert_eq!(check, RangeCheck::Exact(PermissionRange::All));
        assert!(!check.admits(PermissionRange::Own, ME));
        assert!(check.admits(PermissionRange::All, ME));
    }

    #[test]
    fn test_unowned_admits_only_all() {
        for resource in [None, Some(Ownership::NoOwner)] {
            let check = RangeCheck::plan(&update_comment(), resource);
            assert_eq!(check, RangeCheck::AllOnly);
            assert!(check.admits(PermissionRange::All, ME));
            assert!(!check.admits(PermissionRange::Own, ME));
        }
    }

    #[test]
    fn test_owned_resources_compare_owner() {
        for resource in [
            Ownership::Author(ME),
            Ownership::User(ME),
            Ownership::Principal(ME),
        ] {
            let check = RangeCheck::plan(&update_comment(), Some(resource));
            assert_eq!(check, RangeCheck::OwnedBy(ME));
            assert!(check.admits(PermissionRange::Own, ME));
            assert!(!check.admits(PermissionRange::Own, SOMEONE_ELSE));
            assert!(check.admits(PermissionRange::All, SOMEONE_ELSE));
        }
    }
}
