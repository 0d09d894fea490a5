use crate::{
    annotation::{Annotation, Annotations},
    err,
    error::ErrorTree,
};
use derive_more::{Deref, Display};
use fedx_id::{IdError, PrefixedId};
use serde::{Deserialize, Serialize};
use std::ops::Not;

///
/// FieldList
///

#[derive(Clone, Debug, Default, Deref, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldList(Vec<Field>);

impl FieldList {
    // get
    #[must_use]
    pub fn get(&self, ident: &str) -> Option<&Field> {
        self.0.iter().find(|f| f.ident == ident)
    }

    pub fn push(&mut self, field: Field) {
        self.0.push(field);
    }
}

impl FromIterator<Field> for FieldList {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

///
/// FieldKind
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum FieldKind {
    Json,
    String,
    Text,
    Time,
}

///
/// ValueType
///
/// Typed value carried by a text column.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ValueType {
    PrefixedId,
}

///
/// FieldDefault
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum FieldDefault {
    GenerateId { prefix: String },
    Now,
}

impl FieldDefault {
    /// Produce a fresh identifier for `GenerateId` defaults.
    pub fn generate_id(&self) -> Result<Option<PrefixedId>, IdError> {
        match self {
            Self::GenerateId { prefix } => PrefixedId::generate(prefix).map(Some),
            Self::Now => Ok(None),
        }
    }
}

///
/// Field
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Field {
    pub ident: String,
    pub kind: FieldKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<ValueType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_len: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_len: Option<usize>,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub optional: bool,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub not_empty: bool,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub unique: bool,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub immutable: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<FieldDefault>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_default: Option<FieldDefault>,

    #[serde(default, skip_serializing_if = "Annotations::is_empty")]
    pub annotations: Annotations,
}

impl Field {
    #[must_use]
    pub fn new(ident: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            ident: ident.into(),
            kind,
            value_type: None,
            min_len: None,
            max_len: None,
            optional: false,
            not_empty: false,
            unique: false,
            immutable: false,
            default: None,
            update_default: None,
            annotations: Annotations::new(),
        }
    }

    #[must_use]
    pub fn text(ident: impl Into<String>) -> Self {
        Self::new(ident, FieldKind::Text)
    }

    #[must_use]
    pub fn json(ident: impl Into<String>) -> Self {
        Self::new(ident, FieldKind::Json)
    }

    #[must_use]
    pub fn time(ident: impl Into<String>) -> Self {
        Self::new(ident, FieldKind::Time)
    }

    #[must_use]
    pub const fn value_type(mut self, value_type: ValueType) -> Self {
        self.value_type = Some(value_type);
        self
    }

    #[must_use]
    pub const fn min_len(mut self, len: usize) -> Self {
        self.min_len = Some(len);
        self
    }

    #[must_use]
    pub const fn max_len(mut self, len: usize) -> Self {
        self.max_len = Some(len);
        self
    }

    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    #[must_use]
    pub const fn not_empty(mut self) -> Self {
        self.not_empty = true;
        self
    }

    #[must_use]
    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    #[must_use]
    pub const fn immutable(mut self) -> Self {
        self.immutable = true;
        self
    }

    #[must_use]
    pub fn default(mut self, default: FieldDefault) -> Self {
        self.default = Some(default);
        self
    }

    #[must_use]
    pub fn update_default(mut self, default: FieldDefault) -> Self {
        self.update_default = Some(default);
        self
    }

    #[must_use]
    pub fn annotation(mut self, annotation: impl Into<Annotation>) -> Self {
        self.annotations.insert(annotation.into());
        self
    }

    /// Check a text value against the declared constraints.
    pub fn check_text(&self, value: &str) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if self.not_empty && value.is_empty() {
            err!(errs, "field '{}' must not be empty", self.ident);
        }
        if let Some(min) = self.min_len
            && value.len() < min
        {
            err!(errs, "field '{}' is shorter than {min}", self.ident);
        }
        if let Some(max) = self.max_len
            && value.len() > max
        {
            err!(errs, "field '{}' is longer than {max}", self.ident);
        }
        if self.value_type == Some(ValueType::PrefixedId)
            && let Err(e) = PrefixedId::parse(value)
        {
            err!(errs, "field '{}': {e}", self.ident);
        }

        errs.result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fedx_id::TOTAL_LENGTH;

    #[test]
    fn prefixed_id_fields_parse_values() {
        let field = Field::text("tenant_id")
            .min_len(TOTAL_LENGTH)
            .max_len(TOTAL_LENGTH)
            .value_type(ValueType::PrefixedId);
        let id = PrefixedId::generate("tenants").unwrap();

        assert!(field.check_text(id.as_str()).is_ok());
        assert!(field.check_text("tenants-nope").is_err());

        // right length, wrong shape
        let bad = "x".repeat(TOTAL_LENGTH);
        let errs = field.check_text(&bad).unwrap_err();
        assert_eq!(errs.len(), 1);
    }

    #[test]
    fn field_serde_skips_defaults() {
        let json = serde_json::to_value(Field::text("name")).unwrap();

        assert_eq!(json, serde_json::json!({ "ident": "name", "kind": "Text" }));
    }
}
