//! Role-based authorization.
//!
//! - [`requirement`]: What a route needs (action, target, range)
//! - [`policy`]: Named policies and the `permission.<Action>.<Target>.<Range>` grammar
//! - [`resource`]: Ownership classification of resource types
//! - [`dispatch`]: Which range check applies to a requirement and resource
//! - [`evaluator`]: The [`Authorizer`] producing a [`Decision`]
//! - [`decision`]: Allow/deny outcomes and deny reasons

pub mod decision;
pub mod dispatch;
pub mod evaluator;
pub mod policy;
pub mod requirement;
pub mod resource;

pub use decision::{Decision, DenyReason};
pub use dispatch::RangeCheck;
pub use evaluator::Authorizer;
pub use policy::{PolicyError, PolicyProvider, parse_policy};
pub use requirement::{RangeSpec, Requirement};
pub use resource::{Ownership, Resource, ResourceCapability};
