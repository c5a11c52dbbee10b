//! Principal identity resolution.
//!
//! Authorization never trusts a caller it cannot name. An [`IdentitySource`]
//! answers with the caller's [`UserId`] or `None`; a missing or unparseable
//! subject is treated the same as no authentication at all.

use crate::claims::Claims;
use quillpost_models::ids::UserId;

/// Something that can name the caller of the current request.
pub trait IdentitySource {
    /// The caller's user id, or `None` when it cannot be resolved.
    fn principal_id(&self) -> Option<UserId>;
}

impl IdentitySource for Claims {
    fn principal_id(&self) -> Option<UserId> {
        self.sub.parse().ok()
    }
}

impl IdentitySource for UserId {
    fn principal_id(&self) -> Option<UserId> {
        Some(*self)
    }
}

impl<T: IdentitySource> IdentitySource for Option<T> {
    fn principal_id(&self) -> Option<UserId> {
        self.as_ref().and_then(IdentitySource::principal_id)
    }
}

impl<T: IdentitySource + ?Sized> IdentitySource for &T {
    fn principal_id(&self) -> Option<UserId> {
        (**self).principal_id()
    }
}

/// A request that carried no credentials.
#[derive(Debug, Clone, Copy, Default)]
pub struct Anonymous;

impl IdentitySource for Anonymous {
    fn principal_id(&self) -> Option<UserId> {
        None
    }
}
