//! ## Custom Errors for Logician
//!
//! This module defines the error type shared by every configurator in the crate.
//! It uses the `thiserror` crate to derive the `Error` trait.
//!
//! Configurators do not wrap or translate the errors of the configurators they decorate:
//! whatever an inner configurator or a level supplier returns travels back to the caller of
//! `configure` untouched.
//!
//! ### Example
//!
//! ```rust
//! use logician::exceptions::{LogicianError, LogicianResult};
//!
//! fn read_level() -> LogicianResult<String> {
//!     Err(LogicianError::LevelSupply("no level configured".into()))
//! }
//! ```

use thiserror::Error;

/// Errors specific to the Logician library.
#[derive(Debug, Error)]
pub enum LogicianError {
    /// A constructor argument broke a precondition (e.g., an absent level list).
    #[error("{0}")]
    PreconditionViolation(String),

    /// A level supplier could not produce a level.
    #[error("Level supply error: {0}")]
    LevelSupply(String),

    /// Installing a configured logger as the process-wide default failed.
    #[error("failed to set global default subscriber, {0}")]
    GlobalDefaultSubscriber(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// A convenient result type for Logician operations.
pub type LogicianResult<T> = std::result::Result<T, LogicianError>;
