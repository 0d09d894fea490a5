use crate::{IdError, MalformedReason, PrefixedId};
use serde_json::Value as JsonValue;
use std::fmt::{self, Write};

impl PrefixedId {
    /// Write the identifier as a GraphQL string scalar. The alphabet has no
    /// characters that need escaping.
    pub fn write_gql<W: Write>(&self, w: &mut W) -> fmt::Result {
        w.write_char('"')?;
        w.write_str(self.as_str())?;
        w.write_char('"')
    }

    #[must_use]
    pub fn to_gql(&self) -> String {
        let mut out = String::with_capacity(crate::TOTAL_LENGTH + 2);
        let _ = self.write_gql(&mut out);

        out
    }

    /// Read an identifier from a GraphQL input value. Only strings map.
    pub fn from_gql(value: &JsonValue) -> Result<Self, IdError> {
        match value {
            JsonValue::String(s) => Self::parse(s),
            JsonValue::Null => Err(MalformedReason::Null.into()),
            JsonValue::Bool(_) => Err(MalformedReason::UnexpectedKind { kind: "bool" }.into()),
            JsonValue::Number(_) => Err(MalformedReason::UnexpectedKind { kind: "number" }.into()),
            JsonValue::Array(_) => Err(MalformedReason::UnexpectedKind { kind: "list" }.into()),
            JsonValue::Object(_) => Err(MalformedReason::UnexpectedKind { kind: "object" }.into()),
        }
    }
}
