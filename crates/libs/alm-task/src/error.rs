//! Task error types.

/// Task errors.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A required task parameter was empty.
    #[error("Missing required parameter {0}")]
    MissingParameter(&'static str),
}
