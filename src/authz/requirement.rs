use quillpost_core::permissions::{PermissionAction, PermissionRange, PermissionTarget};
use std::fmt;

/// How the range of a [`Requirement`] is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeSpec {
    /// Resolve `Own` vs `All` against the resource being acted on.
    Unspecified,
    /// Require a permission with exactly this range. No ownership inference.
    Fixed(PermissionRange),
}

/// What a caller must hold to perform an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Requirement {
    pub action: PermissionAction,
    pub target: PermissionTarget,
    pub range: RangeSpec,
}

impl Requirement {
    /// A requirement whose range is resolved against the resource's owner.
    pub const fn new(action: PermissionAction, target: PermissionTarget) -> Self {
        Self {
            action,
            target,
            range: RangeSpec::Unspecified,
        }
    }

    /// A requirement that only an exact range match satisfies.
    pub const fn with_range(
        action: PermissionAction,
        target: PermissionTarget,
        range: PermissionRange,
    ) -> Self {
        Self {
            action,
            target,
            range: RangeSpec::Fixed(range),
        }
    }

    pub const fn is_fixed(&self) -> bool {
        matches!(self.range, RangeSpec::Fixed(_))
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.range {
            RangeSpec::Fixed(range) => write!(f, "{}.{}.{}", self.action, self.target, range),
            RangeSpec::Unspecified => write!(f, "{}.{}.*", self.action, self.target),
        }
    }
}
