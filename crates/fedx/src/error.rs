use derive_more::Display;
use fedx_build::{BuildError, StitchError};
use fedx_config_build::ConfigError;
use fedx_id::IdError;
use fedx_schema::{ErrorTree, extract::ExtractError};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Error
/// Public error type: a stable kind plus the underlying message.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
#[error("{kind}: {message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Recoverable at request time; everything else is a build failure.
    #[must_use]
    pub const fn is_runtime(&self) -> bool {
        matches!(self.kind, ErrorKind::Identifier)
    }
}

impl From<IdError> for Error {
    fn from(err: IdError) -> Self {
        Self::new(ErrorKind::Identifier, err.to_string())
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::new(ErrorKind::Config, err.to_string())
    }
}

impl From<ErrorTree> for Error {
    fn from(err: ErrorTree) -> Self {
        Self::new(ErrorKind::Validation, err.to_string())
    }
}

impl From<ExtractError> for Error {
    fn from(err: ExtractError) -> Self {
        Self::new(ErrorKind::Extract, err.to_string())
    }
}

impl From<StitchError> for Error {
    fn from(err: StitchError) -> Self {
        Self::new(ErrorKind::Stitch, err.to_string())
    }
}

impl From<BuildError> for Error {
    fn from(err: BuildError) -> Self {
        match err {
            BuildError::Config(e) => e.into(),
            BuildError::Extract(e) => e.into(),
            BuildError::Stitch(e) => e.into(),
            BuildError::Validation(e) => e.into(),
            BuildError::Env(_) | BuildError::Io { .. } => Self::new(ErrorKind::Io, err.to_string()),
        }
    }
}

///
/// ErrorKind
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum ErrorKind {
    Config,
    Extract,
    Identifier,
    Io,
    Stitch,
    Validation,
}

///
/// TESTS
///
