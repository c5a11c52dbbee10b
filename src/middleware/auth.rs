use axum::{extract::FromRequestParts, http::request::Parts};
use quillpost_auth::{Claims, IdentitySource};
use quillpost_config::AuthzConfig;
use quillpost_core::errors::AppError;
use quillpost_models::UserId;

use crate::authz::{Decision, DenyReason, Ownership, Requirement, Resource};
use crate::state::AppState;

/// Extractor providing the authenticated caller's claims.
///
/// Token verification happens upstream; this only reads the verified [`Claims`]
/// from the request extensions.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// Get the caller's user id
    pub fn user_id(&self) -> Result<UserId, AppError> {
        self.0
            .principal_id()
            .ok_or_else(|| AppError::unauthorized("Invalid user ID in token".to_string()))
    }
}

impl IdentitySource for AuthUser {
    fn principal_id(&self) -> Option<UserId> {
        self.0.principal_id()
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| AppError::unauthorized("Missing authentication".to_string()))
    }
}

/// Turns a decision into a handler result.
///
/// `Unauthenticated` maps to 401 and a misconfigured policy to 500. Every other
/// deny is a 403 whose message only names the reason when the configuration
/// allows it.
pub fn decision_into_result(
    decision: Decision,
    requirement: &str,
    config: &AuthzConfig,
) -> Result<(), AppError> {
    let reason = match decision {
        Decision::Allow => return Ok(()),
        Decision::Deny(reason) => reason,
    };

    match reason {
        DenyReason::Unauthenticated => {
            Err(AppError::unauthorized("Authentication required".to_string()))
        }
        DenyReason::InvalidPolicy => Err(AppError::internal(anyhow::anyhow!(
            "Authorization policy '{}' is misconfigured",
            requirement
        ))),
        _ if config.expose_deny_reasons => Err(AppError::forbidden(format!(
            "Access denied ({reason}): {requirement}"
        ))),
        _ => Err(AppError::forbidden("Access denied".to_string())),
    }
}

/// Requires `requirement` without a resource. Unspecified ranges need `All`.
pub async fn require(
    state: &AppState,
    auth_user: &AuthUser,
    requirement: Requirement,
) -> Result<(), AppError> {
    let decision = state.authorizer.authorize(auth_user, requirement).await;
    decision_into_result(decision, &requirement.to_string(), &state.authz_config)
}

/// Requires `requirement` on a loaded resource, honouring `Own` grants for the
/// resource's owner.
pub async fn require_resource<R>(
    state: &AppState,
    auth_user: &AuthUser,
    requirement: Requirement,
    resource: &R,
) -> Result<(), AppError>
where
    R: Resource + ?Sized,
{
    let decision = state
        .authorizer
        .authorize_resource(auth_user, requirement, resource)
        .await;
    decision_into_result(decision, &requirement.to_string(), &state.authz_config)
}

/// Requires a named policy, optionally against a classified resource.
pub async fn require_policy(
    state: &AppState,
    auth_user: &AuthUser,
    policy: &str,
    resource: Option<Ownership>,
) -> Result<(), AppError> {
    let decision = state
        .authorizer
        .authorize_policy(auth_user, policy, resource)
        .await;
    decision_into_result(decision, policy, &state.authz_config)
}

/// Helper macro to create policy check extractors.
///
/// The policy is resolved by the shared authorizer, so both registered names and
/// `permission.<Action>.<Target>.<Range>` names work. No resource is involved.
#[macro_export]
macro_rules! require_policy {
    ($name:ident, $policy:literal) => {
        #[derive(Debug, Clone)]
        pub struct $name(pub $crate::middleware::auth::AuthUser);

        impl axum::extract::FromRequestParts<$crate::state::AppState> for $name {
            type Rejection = quillpost_core::errors::AppError;

            async fn from_request_parts(
                parts: &mut axum::http::request::Parts,
                state: &$crate::state::AppState,
            ) -> Result<Self, Self::Rejection> {
                use axum::extract::FromRequestParts as _;

                let auth_user =
                    $crate::middleware::auth::AuthUser::from_request_parts(parts, state).await?;

                let decision = state
                    .authorizer
                    .authorize_policy(&auth_user, $policy, None)
                    .await;
                $crate::middleware::auth::decision_into_result(
                    decision,
                    $policy,
                    &state.authz_config,
                )?;

                Ok($name(auth_user))
            }
        }
    };
}

// Pre-defined extractors for targets without an owner

// Tags
require_policy!(RequireTagsCreate, "permission.Create.Tag.All");
require_policy!(RequireTagsUpdate, "permission.Update.Tag.All");
require_policy!(RequireTagsDelete, "permission.Delete.Tag.All");

// Categories
require_policy!(RequireCategoriesCreate, "permission.Create.Category.All");
require_policy!(RequireCategoriesUpdate, "permission.Update.Category.All");
require_policy!(RequireCategoriesDelete, "permission.Delete.Category.All");

// Roles
require_policy!(RequireRolesCreate, "permission.Create.Role.All");
require_policy!(RequireRolesRead, "permission.Read.Role.All");
require_policy!(RequireRolesUpdate, "permission.Update.Role.All");
require_policy!(RequireRolesDelete, "permission.Delete.Role.All");

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn claims(sub: &str) -> Claims {
        Claims {
            sub: sub.to_string(),
            username: "ada".to_string(),
            exp: 9999999999,
            iat: 1234567890,
        }
    }

    #[test]
    fn test_auth_user_id() {
        assert_eq!(AuthUser(claims("7")).user_id().unwrap(), UserId::new(7));

        let err = AuthUser(claims("not-a-number")).user_id().unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_allow_is_ok() {
        let config = AuthzConfig::default();
        assert!(decision_into_result(Decision::Allow, "Read.Post.*", &config).is_ok());
    }

    #[test]
    fn test_deny_status_mapping() {
        let config = AuthzConfig::default();
        let status = |reason| {
            decision_into_result(Decision::Deny(reason), "Read.Post.*", &config)
                .unwrap_err()
                .status
        };

        assert_eq!(status(DenyReason::Unauthenticated), StatusCode::UNAUTHORIZED);
        assert_eq!(status(DenyReason::NoRoles), StatusCode::FORBIDDEN);
        assert_eq!(status(DenyReason::InsufficientPermission), StatusCode::FORBIDDEN);
        assert_eq!(status(DenyReason::LookupFailed), StatusCode::FORBIDDEN);
        assert_eq!(status(DenyReason::InvalidPolicy), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_deny_reason_hidden_by_default() {
        let err = decision_into_result(
            Decision::Deny(DenyReason::NoRoles),
            "Read.Post.*",
            &AuthzConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err.error.to_string(), "Access denied");
    }

    #[test]
    fn test_deny_reason_exposed_when_configured() {
        let config = AuthzConfig {
            expose_deny_reasons: true,
            ..AuthzConfig::default()
        };
        let err = decision_into_result(
            Decision::Deny(DenyReason::InsufficientPermission),
            "Update.Comment.*",
            &config,
        )
        .unwrap_err();
        assert_eq!(
            err.error.to_string(),
            "Access denied (insufficient_permission): Update.Comment.*"
        );
    }
}
