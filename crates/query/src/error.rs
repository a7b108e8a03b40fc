//! Search compilation errors.

use thiserror::Error;

/// Error raised while compiling a search clause against a model.
///
/// Malformed clause *structure* never reaches this layer; the host domain
/// compiler rejects it upstream. What can fail here is the per-model field
/// mapping.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The clause names a field the model's domain compiler does not know.
    #[error("unknown field `{field}` on `{model}`")]
    UnknownField {
        model: &'static str,
        field: String,
    },
}
