use crate::{IdError, MalformedReason, PrefixedId};
use serde::{Deserialize, Serialize};

///
/// ScalarValue
///
/// The loosely typed value a database driver hands over when reading or
/// writing a column. Identifiers map to `Text`.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum ScalarValue {
    Null,
    Bool(bool),
    Bytes(Vec<u8>),
    Float(f64),
    Int(i64),
    Text(String),
}

impl ScalarValue {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Bytes(_) => "bytes",
            Self::Float(_) => "float",
            Self::Int(_) => "int",
            Self::Text(_) => "text",
        }
    }
}

impl PrefixedId {
    /// Value written to storage. The nil identifier is refused.
    pub fn to_value(&self) -> Result<ScalarValue, IdError> {
        self.validate_for_persist()?;

        Ok(ScalarValue::Text(self.as_str().to_string()))
    }

    /// Read an identifier back from a driver value. Text and UTF-8 bytes are
    /// re-parsed, so a corrupted column surfaces as an error.
    pub fn from_value(value: &ScalarValue) -> Result<Self, IdError> {
        match value {
            ScalarValue::Text(s) => Self::parse(s),
            ScalarValue::Bytes(b) => {
                let s = std::str::from_utf8(b).map_err(|_| MalformedReason::UnexpectedKind {
                    kind: "non-utf8 bytes",
                })?;

                Self::parse(s)
            }
            ScalarValue::Null => Err(MalformedReason::Null.into()),
            other => Err(MalformedReason::UnexpectedKind { kind: other.kind() }.into()),
        }
    }
}

impl TryFrom<PrefixedId> for ScalarValue {
    type Error = IdError;

    fn try_from(id: PrefixedId) -> Result<Self, Self::Error> {
        id.to_value()
    }
}

impl TryFrom<&ScalarValue> for PrefixedId {
    type Error = IdError;

    fn try_from(value: &ScalarValue) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Generator;

    #[test]
    fn text_and_bytes_read_back() {
        let id = Generator::seeded(3).generate("tenants").unwrap();
        let value = id.to_value().unwrap();

        assert_eq!(value, ScalarValue::Text(id.to_string()));
        assert_eq!(PrefixedId::from_value(&value).unwrap(), id);

        let bytes = ScalarValue::Bytes(id.as_str().as_bytes().to_vec());
        assert_eq!(PrefixedId::from_value(&bytes).unwrap(), id);
    }

    #[test]
    fn nil_is_not_written() {
        let err = PrefixedId::nil().to_value().unwrap_err();

        assert!(matches!(err, IdError::UnpersistableIdentifier(_)));
    }

    #[test]
    fn foreign_values_are_rejected() {
        for value in [
            ScalarValue::Null,
            ScalarValue::Int(29),
            ScalarValue::Bool(true),
            ScalarValue::Bytes(vec![0xff; 29]),
            ScalarValue::Text("tenants-short".into()),
        ] {
            assert!(
                matches!(
                    PrefixedId::from_value(&value),
                    Err(IdError::MalformedIdentifier(_))
                ),
                "{value:?} should not decode"
            );
        }
    }
}
