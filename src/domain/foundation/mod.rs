//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the AHP domain.

mod errors;
mod ids;
mod intensity;
mod score;
mod timestamp;

pub use errors::{AhpError, EntityKind, ValidationError};
pub use ids::ModelId;
pub use intensity::Intensity;
pub use score::Score;
pub use timestamp::Timestamp;
