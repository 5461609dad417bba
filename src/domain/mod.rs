//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `ahp` - Analytic Hierarchy Process model, weights, ranking and sensitivity

pub mod ahp;
pub mod foundation;
