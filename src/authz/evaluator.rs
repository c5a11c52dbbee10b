//! The authorization evaluator.
//!
//! One evaluator serves every route. It resolves the principal, loads the
//! principal's roles, and looks for a single permission that satisfies the
//! requirement under the [`RangeCheck`] picked for the resource. Roles are a
//! union: one granting role is enough.
//!
//! Every store lookup is bounded by the configured timeout. Anything that goes
//! wrong while answering ends in a deny, never an allow.

use quillpost_auth::IdentitySource;
use quillpost_config::AuthzConfig;
use quillpost_core::permissions::Permission;
use quillpost_models::{RoleId, UserId};
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

use super::decision::{Decision, DenyReason};
use super::dispatch::RangeCheck;
use super::policy::PolicyProvider;
use super::requirement::Requirement;
use super::resource::{Ownership, Resource};
use crate::store::{RoleStore, StoreError};

pub struct Authorizer {
    store: Arc<dyn RoleStore>,
    policies: PolicyProvider,
    lookup_timeout: Duration,
}

impl fmt::Debug for Authorizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authorizer")
            .field("policies", &self.policies)
            .field("lookup_timeout", &self.lookup_timeout)
            .finish_non_exhaustive()
    }
}

impl Authorizer {
    pub fn new(store: Arc<dyn RoleStore>, config: &AuthzConfig) -> Self {
        Self {
            store,
            policies: PolicyProvider::new(config.policy_cache),
            lookup_timeout: config.lookup_timeout(),
        }
    }

    /// Replaces the policy provider, typically one with static registrations.
    pub fn with_policies(mut self, policies: PolicyProvider) -> Self {
        self.policies = policies;
        self
    }

    /// Decides a requirement with no resource in hand.
    ///
    /// An unspecified range is only satisfied by `All` here.
    pub async fn authorize<P>(&self, principal: &P, requirement: Requirement) -> Decision
    where
        P: IdentitySource + Sync + ?Sized,
    {
        self.decide(principal, requirement, None).await
    }

    /// Decides a requirement against a loaded resource instance.
    pub async fn authorize_resource<P, R>(
        &self,
        principal: &P,
        requirement: Requirement,
        resource: &R,
    ) -> Decision
    where
        P: IdentitySource + Sync + ?Sized,
        R: Resource + ?Sized,
    {
        self.decide(principal, requirement, Some(resource.ownership()))
            .await
    }

    /// Decides a named policy.
    ///
    /// A name that is neither registered nor follows the policy grammar, or that
    /// follows the grammar with an unknown member, is denied with
    /// [`DenyReason::InvalidPolicy`].
    pub async fn authorize_policy<P>(
        &self,
        principal: &P,
        policy: &str,
        resource: Option<Ownership>,
    ) -> Decision
    where
        P: IdentitySource + Sync + ?Sized,
    {
        let requirement = match self.policies.resolve(policy) {
            Ok(Some(requirement)) => requirement,
            Ok(None) => {
                error!(policy = %policy, "Unknown authorization policy");
                return record(Decision::Deny(DenyReason::InvalidPolicy));
            }
            Err(e) => {
                error!(error = %e, "Rejected authorization policy");
                return record(Decision::Deny(DenyReason::InvalidPolicy));
            }
        };

        self.decide(principal, requirement, resource).await
    }

    /// Decides a requirement against an already classified resource.
    pub async fn decide<P>(
        &self,
        principal: &P,
        requirement: Requirement,
        resource: Option<Ownership>,
    ) -> Decision
    where
        P: IdentitySource + Sync + ?Sized,
    {
        let Some(user_id) = principal.principal_id() else {
            debug!(requirement = %requirement, "Denied unauthenticated request");
            return record(Decision::Deny(DenyReason::Unauthenticated));
        };

        let check = RangeCheck::plan(&requirement, resource);
        record(self.evaluate(user_id, requirement, check).await)
    }

    #[instrument(
        skip_all,
        fields(user_id = %user_id, action = %requirement.action, target = %requirement.target)
    )]
    async fn evaluate(
        &self,
        user_id: UserId,
        requirement: Requirement,
        check: RangeCheck,
    ) -> Decision {
        let roles = match self.lookup(self.store.roles_of(user_id)).await {
            Ok(roles) => roles,
            Err(e) => {
                warn!(error = %e, "Role lookup failed");
                return Decision::Deny(DenyReason::LookupFailed);
            }
        };

        if roles.is_empty() {
            debug!(reason = %DenyReason::NoRoles, "Denied");
            return Decision::Deny(DenyReason::NoRoles);
        }

        let mut lookup_failed = false;
        for role_id in dedup(roles) {
            let permissions = match self.lookup(self.store.permissions_of(role_id)).await {
                Ok(permissions) => permissions,
                Err(StoreError::Catalog(e)) => {
                    error!(role_id = %role_id, error = %e, "Corrupt permission row");
                    lookup_failed = true;
                    continue;
                }
                Err(e) => {
                    warn!(role_id = %role_id, error = %e, "Permission lookup failed");
                    lookup_failed = true;
                    continue;
                }
            };

            if let Some(granted) = permissions
                .iter()
                .find(|p| satisfies(p, &requirement, &check, user_id))
            {
                debug!(role_id = %role_id, permission = %granted, "Allowed");
                return Decision::Allow;
            }
        }

        let reason = if lookup_failed {
            DenyReason::LookupFailed
        } else {
            DenyReason::InsufficientPermission
        };
        debug!(reason = %reason, "Denied");
        Decision::Deny(reason)
    }

    async fn lookup<T>(
        &self,
        fut: impl Future<Output = Result<T, StoreError>>,
    ) -> Result<T, StoreError> {
        tokio::time::timeout(self.lookup_timeout, fut)
            .await
            .map_err(|_| StoreError::Timeout(self.lookup_timeout))?
    }
}

fn satisfies(
    permission: &Permission,
    requirement: &Requirement,
    check: &RangeCheck,
    principal: UserId,
) -> bool {
    permission.covers(requirement.action, requirement.target)
        && check.admits(permission.range, principal)
}

/// Drops repeated role ids while keeping first-seen order.
fn dedup(roles: Vec<RoleId>) -> Vec<RoleId> {
    let mut seen = Vec::with_capacity(roles.len());
    for role in roles {
        if !seen.contains(&role) {
            seen.push(role);
        }
    }
    seen
}

fn record(decision: Decision) -> Decision {
    match decision {
        Decision::Allow => quillpost_observability::track_authz_decision("allow", "none"),
        Decision::Deny(reason) => {
            quillpost_observability::track_authz_decision("deny", reason.as_str())
        }
    }
    decision
}
