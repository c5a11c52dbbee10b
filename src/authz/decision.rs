use std::fmt;

/// Why a request was denied.
///
/// Every variant is an expected outcome, not a fault. Reasons are kept distinct
/// for logs and metrics even when the HTTP layer shows callers a uniform
/// "access denied".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DenyReason {
    /// No principal could be resolved from the request.
    Unauthenticated,
    /// The principal holds no roles.
    NoRoles,
    /// Roles exist but none grants the requirement.
    InsufficientPermission,
    /// The named policy is malformed or unknown.
    InvalidPolicy,
    /// A role or permission lookup failed or timed out.
    LookupFailed,
}

impl DenyReason {
    pub const fn as_str(&self) -> &'static str {
        match self {
            DenyReason::Unauthenticated => "unauthenticated",
            DenyReason::NoRoles => "no_roles",
            DenyReason::InsufficientPermission => "insufficient_permission",
            DenyReason::InvalidPolicy => "invalid_policy",
            DenyReason::LookupFailed => "lookup_failed",
        }
    }
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The answer to "may this principal do this?".
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    Allow,
    Deny(DenyReason),
}

impl Decision {
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }

    pub const fn deny_reason(&self) -> Option<DenyReason> {
        match self {
            Decision::Allow => None,
            Decision::Deny(reason) => Some(*reason),
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Allow => f.write_str("allow"),
            Decision::Deny(reason) => write!(f, "deny ({reason})"),
        }
    }
}
