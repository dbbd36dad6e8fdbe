//! Domain-level error types.

use thiserror::Error;
use validator::ValidationErrors;

/// Repository-level errors.
///
/// `Validation` is the only kind a caller can fix by changing its input;
/// every other variant is an infrastructure failure.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),
}

impl From<ValidationErrors> for RepoError {
    fn from(errors: ValidationErrors) -> Self {
        RepoError::Validation(validation_messages(&errors))
    }
}

/// Flatten validator output into one human-readable message per violated rule.
///
/// Messages are ordered by field name so responses are stable.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| (field.to_string(), errs))
        .collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| match &err.message {
                Some(message) => message.to_string(),
                None => format!("{} is invalid", field),
            })
        })
        .collect()
}
