//! Common types and utilities.

/// Task error type.
pub use crate::error::Error;

/// Task result type.
pub type Result<T> = core::result::Result<T, Error>;
