use crate::{PREFIX_PART_LENGTH, TOTAL_LENGTH};
use thiserror::Error as ThisError;

///
/// IdError
///
/// Runtime errors for identifier handling. All variants are recoverable and
/// never carry a partially built identifier.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum IdError {
    #[error(
        "invalid prefix '{prefix}': expected {PREFIX_PART_LENGTH} ASCII alphanumeric characters"
    )]
    InvalidPrefix { prefix: String },

    #[error("malformed identifier: {0}")]
    MalformedIdentifier(MalformedReason),

    #[error("identifier cannot be persisted: {0}")]
    UnpersistableIdentifier(&'static str),
}

impl From<MalformedReason> for IdError {
    fn from(reason: MalformedReason) -> Self {
        Self::MalformedIdentifier(reason)
    }
}

///
/// MalformedReason
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum MalformedReason {
    #[error("empty input")]
    Empty,

    #[error("length {len} does not match the required {TOTAL_LENGTH}")]
    Length { len: usize },

    #[error("missing '-' separator after the prefix")]
    MissingSeparator,

    #[error("prefix must be lowercase ASCII alphanumeric")]
    Prefix,

    #[error("body character at offset {offset} is outside the identifier alphabet")]
    Body { offset: usize },

    #[error("expected a value")]
    Null,

    #[error("unexpected {kind} value")]
    UnexpectedKind { kind: &'static str },
}
