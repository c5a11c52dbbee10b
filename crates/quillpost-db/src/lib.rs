//! # Quillpost DB
//!
//! Database pool initialization for the Quillpost API.
//!
//! # Example
//!
//! ```ignore
//! use quillpost_db::init_db_pool;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sqlx::Error> {
//!     let pool = init_db_pool(&std::env::var("DATABASE_URL")?).await?;
//!     Ok(())
//! }
//! ```

use sqlx::postgres::PgPoolOptions;

/// Maximum connections held by the pool.
pub const MAX_CONNECTIONS: u32 = 5;

/// Initializes a PostgreSQL connection pool.
///
/// The returned pool is cheaply cloneable and should be shared through the
/// application state.
///
/// # Errors
///
/// Returns the underlying [`sqlx::Error`] when the database cannot be reached.
pub async fn init_db_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(database_url)
        .await
}

// Re-export PgPool for convenience
pub use sqlx::PgPool;
