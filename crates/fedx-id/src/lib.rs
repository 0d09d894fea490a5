//! Prefixed identifiers: `{prefix}-{body}`, e.g. `loadbal-7hD2k_0qLm9xYtR3bW-cE`.
//!
//! The prefix names the owning entity type (7 lowercase ASCII alphanumerics),
//! the body is 21 symbols from the URL-safe nanoid alphabet. Bodies carry 126
//! random bits; uniqueness is probabilistic, with a 50% chance of one
//! collision only after roughly 2^63 identifiers under the same prefix.

mod error;
mod generator;
mod gql;
mod value;

pub use error::{IdError, MalformedReason};
pub use generator::{Generator, generate};
pub use value::ScalarValue;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

///
/// CONSTANTS
///

pub const PREFIX_PART_LENGTH: usize = 7;
pub const ID_PART_LENGTH: usize = 21;
pub const PARTS: usize = 2;

/// Length of every valid identifier, separator included.
pub const TOTAL_LENGTH: usize = PREFIX_PART_LENGTH + ID_PART_LENGTH + PARTS - 1;

pub const SEPARATOR: u8 = b'-';

/// Body alphabet, 64 URL-safe symbols.
pub const ALPHABET: &[u8; 64] = b"_-0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

///
/// PrefixedId
///
/// Fixed-size inline value; copying or parsing never allocates. The all-zero
/// value is the nil identifier, which is never valid for persistence.
///

#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct PrefixedId {
    bytes: [u8; TOTAL_LENGTH],
}

impl PrefixedId {
    #[must_use]
    pub const fn nil() -> Self {
        Self {
            bytes: [0; TOTAL_LENGTH],
        }
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.bytes == [0; TOTAL_LENGTH]
    }

    /// Generate a new identifier under `prefix` (lowercased first).
    pub fn generate(prefix: &str) -> Result<Self, IdError> {
        generate(prefix)
    }

    /// Parse foreign text, checking shape, separator and both segments.
    pub fn parse(text: &str) -> Result<Self, IdError> {
        let input = text.as_bytes();

        if input.is_empty() {
            return Err(MalformedReason::Empty.into());
        }
        if input.len() != TOTAL_LENGTH {
            return Err(MalformedReason::Length { len: input.len() }.into());
        }
        if input[PREFIX_PART_LENGTH] != SEPARATOR {
            return Err(MalformedReason::MissingSeparator.into());
        }
        if !input[..PREFIX_PART_LENGTH].iter().all(|&b| is_prefix_byte(b)) {
            return Err(MalformedReason::Prefix.into());
        }

        let body = &input[PREFIX_PART_LENGTH + 1..];
        if let Some(offset) = body.iter().position(|b| !ALPHABET.contains(b)) {
            return Err(MalformedReason::Body {
                offset: PREFIX_PART_LENGTH + 1 + offset,
            }
            .into());
        }

        let mut bytes = [0u8; TOTAL_LENGTH];
        bytes.copy_from_slice(input);

        Ok(Self { bytes })
    }

    /// Guard for storage writes: both segments must be present.
    pub fn validate_for_persist(&self) -> Result<(), IdError> {
        if self.prefix().is_empty() {
            return Err(IdError::UnpersistableIdentifier("no prefix set"));
        }
        if self.body().is_empty() {
            return Err(IdError::UnpersistableIdentifier("no id set"));
        }

        Ok(())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        if self.is_nil() {
            return "";
        }

        std::str::from_utf8(&self.bytes).unwrap_or_default()
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        self.as_str().get(..PREFIX_PART_LENGTH).unwrap_or_default()
    }

    #[must_use]
    pub fn body(&self) -> &str {
        self.as_str()
            .get(PREFIX_PART_LENGTH + 1..)
            .unwrap_or_default()
    }

    pub(crate) const fn from_parts(
        prefix: [u8; PREFIX_PART_LENGTH],
        body: [u8; ID_PART_LENGTH],
    ) -> Self {
        let mut bytes = [0u8; TOTAL_LENGTH];
        let mut i = 0;
        while i < PREFIX_PART_LENGTH {
            bytes[i] = prefix[i];
            i += 1;
        }
        bytes[PREFIX_PART_LENGTH] = SEPARATOR;
        let mut j = 0;
        while j < ID_PART_LENGTH {
            bytes[PREFIX_PART_LENGTH + 1 + j] = body[j];
            j += 1;
        }

        Self { bytes }
    }
}

/// Lowercase and check a prefix.
pub fn normalize_prefix(prefix: &str) -> Result<[u8; PREFIX_PART_LENGTH], IdError> {
    let invalid = || IdError::InvalidPrefix {
        prefix: prefix.to_string(),
    };

    let bytes = prefix.as_bytes();
    if bytes.len() != PREFIX_PART_LENGTH {
        return Err(invalid());
    }

    let mut out = [0u8; PREFIX_PART_LENGTH];
    for (slot, &b) in out.iter_mut().zip(bytes) {
        let lower = b.to_ascii_lowercase();
        if !is_prefix_byte(lower) {
            return Err(invalid());
        }
        *slot = lower;
    }

    Ok(out)
}

const fn is_prefix_byte(b: u8) -> bool {
    b.is_ascii_lowercase() || b.is_ascii_digit()
}

impl AsRef<str> for PrefixedId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Debug for PrefixedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PrefixedId").field(&self.as_str()).finish()
    }
}

impl Default for PrefixedId {
    fn default() -> Self {
        Self::nil()
    }
}

impl fmt::Display for PrefixedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrefixedId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl PartialEq<str> for PrefixedId {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for PrefixedId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Serialize for PrefixedId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PrefixedId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;

        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<&str> for PrefixedId {
    type Error = IdError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn total_length_is_29() {
        assert_eq!(TOTAL_LENGTH, 29);
    }

    #[test]
    fn generate_lowercases_prefix() {
        let id = PrefixedId::generate("LoadBal").unwrap();

        assert_eq!(id.prefix(), "loadbal");
        assert_eq!(id.body().len(), ID_PART_LENGTH);
        assert_eq!(id.as_str().len(), TOTAL_LENGTH);
    }

    #[test]
    fn generate_rejects_bad_prefixes() {
        for prefix in ["", "abc", "toolongprefix", "load-ba", "lo adba", "lbålbå"] {
            assert!(
                matches!(
                    PrefixedId::generate(prefix),
                    Err(IdError::InvalidPrefix { .. })
                ),
                "prefix {prefix:?} should be rejected"
            );
        }
    }

    #[test]
    fn parse_rejects_short_inputs() {
        for text in ["", "abc", "abcdefg-"] {
            assert!(matches!(
                PrefixedId::parse(text),
                Err(IdError::MalformedIdentifier(_))
            ));
        }
    }

    #[test]
    fn parse_rejects_missing_separator_and_bad_segments() {
        let body = "a".repeat(ID_PART_LENGTH);

        assert_eq!(
            PrefixedId::parse(&format!("abcdefg_{body}")),
            Err(IdError::MalformedIdentifier(
                MalformedReason::MissingSeparator
            ))
        );
        assert_eq!(
            PrefixedId::parse(&format!("ABCDEFG-{body}")),
            Err(IdError::MalformedIdentifier(MalformedReason::Prefix))
        );
        assert_eq!(
            PrefixedId::parse(&format!("abcdefg-{}!", "a".repeat(ID_PART_LENGTH - 1))),
            Err(IdError::MalformedIdentifier(MalformedReason::Body {
                offset: TOTAL_LENGTH - 1
            }))
        );
    }

    #[test]
    fn body_may_contain_separator() {
        let text = format!("tenants-{}", "-".repeat(ID_PART_LENGTH));
        let id = PrefixedId::parse(&text).unwrap();

        assert_eq!(id.prefix(), "tenants");
        assert_eq!(id.body(), "-".repeat(ID_PART_LENGTH));
    }

    #[test]
    fn nil_is_empty_and_unpersistable() {
        let nil = PrefixedId::default();

        assert!(nil.is_nil());
        assert_eq!(nil.as_str(), "");
        assert_eq!(nil.prefix(), "");
        assert!(matches!(
            nil.validate_for_persist(),
            Err(IdError::UnpersistableIdentifier(_))
        ));
    }

    #[test]
    fn serde_uses_plain_text() {
        let id = PrefixedId::generate("gadgets").unwrap();
        let json = serde_json::to_string(&id).unwrap();

        assert_eq!(json, format!("\"{id}\""));
        assert_eq!(serde_json::from_str::<PrefixedId>(&json).unwrap(), id);
        assert!(serde_json::from_str::<PrefixedId>("\"gadgets-nope\"").is_err());
    }

    proptest! {
        #[test]
        fn round_trip(prefix in "[a-z0-9]{7}") {
            let id = PrefixedId::generate(&prefix).unwrap();
            let parsed = PrefixedId::parse(id.as_str()).unwrap();

            prop_assert_eq!(parsed.prefix(), prefix.as_str());
            prop_assert_eq!(parsed.body().len(), ID_PART_LENGTH);
            prop_assert_eq!(parsed, id);
            prop_assert!(parsed.validate_for_persist().is_ok());
        }

        #[test]
        fn wrong_length_is_malformed(text in "\\PC{0,40}") {
            prop_assume!(text.len() != TOTAL_LENGTH);

            prop_assert!(matches!(
                PrefixedId::parse(&text),
                Err(IdError::MalformedIdentifier(_))
            ));
        }

        #[test]
        fn parse_never_panics(text in "\\PC*") {
            let _ = PrefixedId::parse(&text);
        }
    }
}
