//! Middleware modules for request processing.
//!
//! # Modules
//!
//! - [`auth`]: The `AuthUser` extractor and authorization guards
//!
//! # Authorization Flow
//!
//! 1. An upstream token layer verifies the bearer token and inserts [`Claims`]
//!    into the request extensions
//! 2. `AuthUser` picks the claims up; a request without them is rejected with 401
//! 3. Policy extractors or [`auth::require_resource`] ask the shared
//!    [`Authorizer`] for a decision
//! 4. Handler executes if the decision is allow
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::{AuthUser, RequireTagsCreate, require_resource};
//!
//! async fn create_tag(RequireTagsCreate(auth_user): RequireTagsCreate) -> impl IntoResponse {
//!     // Only executes if the caller holds Create.Tag.All
//! }
//!
//! async fn update_comment(
//!     State(state): State<AppState>,
//!     auth_user: AuthUser,
//!     Json(dto): Json<CommentDto>,
//! ) -> Result<impl IntoResponse, AppError> {
//!     let requirement = Requirement::new(PermissionAction::Update, PermissionTarget::Comment);
//!     require_resource(&state, &auth_user, requirement, &dto).await?;
//!     // ...
//! }
//! ```
//!
//! [`Claims`]: quillpost_auth::Claims
//! [`Authorizer`]: crate::authz::Authorizer

pub mod auth;
