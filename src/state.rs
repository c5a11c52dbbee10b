use anyhow::Context;
use quillpost_config::AuthzConfig;
use std::sync::Arc;

use crate::authz::Authorizer;
use crate::store::{PgRoleStore, RoleStore};

#[derive(Clone, Debug)]
pub struct AppState {
    pub authorizer: Arc<Authorizer>,
    pub authz_config: AuthzConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn RoleStore>, authz_config: AuthzConfig) -> Self {
        Self {
            authorizer: Arc::new(Authorizer::new(store, &authz_config)),
            authz_config,
        }
    }
}

/// Builds the state from the environment, backed by the Postgres role store.
pub async fn init_app_state() -> anyhow::Result<AppState> {
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = quillpost_db::init_db_pool(&database_url)
        .await
        .context("Failed to connect to database")?;

    Ok(AppState::new(
        Arc::new(PgRoleStore::new(pool)),
        AuthzConfig::from_env(),
    ))
}
