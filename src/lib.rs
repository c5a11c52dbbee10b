//! # Quillpost Authorization
//!
//! Role-based authorization for the Quillpost blog API.
//!
//! ## Overview
//!
//! Users hold roles; roles hold permissions. A permission is an
//! `(action, target, range)` triple such as `Update.Comment.Own`:
//!
//! | Part   | Members |
//! |--------|---------|
//! | Action | `Create`, `Read`, `Update`, `Delete` |
//! | Target | `Account`, `User`, `Post`, `Comment`, `Like`, `Role`, `Tag`, `Category` |
//! | Range  | `Own` (only resources the caller owns), `All` |
//!
//! A request names a requirement, either directly or through a policy string
//! (`permission.Delete.Role.All`). The [`authz::Authorizer`] answers allow or deny,
//! taking ownership of the resource into account when the requirement leaves the
//! range open.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── quillpost-core/           # AppError, permission catalog
//! ├── quillpost-models/         # Id newtypes, blog entities, role rows
//! ├── quillpost-auth/           # Claims, IdentitySource
//! ├── quillpost-config/         # AuthzConfig
//! ├── quillpost-db/             # Postgres pool
//! └── quillpost-observability/  # Logging and decision metrics
//! src/
//! ├── authz/        # Requirements, policies, resources, evaluator
//! ├── store/        # Role store trait, in-memory and Postgres stores
//! ├── middleware/   # axum extractors and guards
//! ├── cli/          # quillpost-cli commands
//! └── state.rs      # Shared application state
//! ```
//!
//! ## Ownership
//!
//! | Resource                              | Owner              |
//! |---------------------------------------|--------------------|
//! | `Post`, `Comment` and their DTOs      | author             |
//! | `Like` and its DTO                    | user who liked     |
//! | `User`                                | the user itself    |
//! | `Role`, `Tag`, `Category`             | none (`All` only)  |
//!
//! ## Failure Handling
//!
//! Decisions fail closed. A malformed policy, an unresolvable caller, and a
//! failed or slow store lookup all deny.

pub mod authz;
pub mod cli;
pub mod middleware;
pub mod state;
pub mod store;
