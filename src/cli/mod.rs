//! Administrative commands backing `quillpost-cli`.

use quillpost_config::AuthzConfig;
use quillpost_db::PgPool;
use quillpost_models::UserId;
use std::sync::Arc;

use crate::authz::{Authorizer, Decision, PolicyError, parse_policy};
use crate::store::PgRoleStore;

/// Describes what a policy name resolves to through the dynamic grammar.
///
/// # Errors
///
/// Returns [`PolicyError::InvalidPolicy`] for a grammar match with an unknown member.
pub fn describe_policy(name: &str) -> Result<String, PolicyError> {
    Ok(match parse_policy(name)? {
        Some(requirement) => format!("{name} requires {requirement}"),
        None => format!("{name} is not a permission policy"),
    })
}

/// Decides `policy` for `user_id` against the Postgres role store.
pub async fn check_policy(
    pool: PgPool,
    config: &AuthzConfig,
    user_id: UserId,
    policy: &str,
) -> Decision {
    let authorizer = Authorizer::new(Arc::new(PgRoleStore::new(pool)), config);
    authorizer.authorize_policy(&user_id, policy, None).await
}
