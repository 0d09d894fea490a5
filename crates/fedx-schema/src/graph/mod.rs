//! GraphQL schema graph handed between the upstream generator, the stitching
//! passes and the downstream emitter.

mod sdl;

use derive_more::Display;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const QUERY_TYPE: &str = "Query";
pub const NODE_INTERFACE: &str = "Node";

///
/// SchemaGraph
///
/// Named type definitions in insertion order. Order is kept so rendering the
/// same input always yields the same document.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct SchemaGraph {
    types: IndexMap<String, Definition>,
}

impl SchemaGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_type(mut self, def: Definition) -> Self {
        self.insert(def);
        self
    }

    /// Insert or replace a definition, keeping the original position on replace.
    pub fn insert(&mut self, def: Definition) {
        self.types.insert(def.name.clone(), def);
    }

    pub fn remove(&mut self, name: &str) -> Option<Definition> {
        self.types.shift_remove(name)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Definition> {
        self.types.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Definition> {
        self.types.get_mut(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn types(&self) -> impl Iterator<Item = &Definition> {
        self.types.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    #[must_use]
    pub fn query(&self) -> Option<&Definition> {
        self.get(QUERY_TYPE)
    }
}

impl FromIterator<Definition> for SchemaGraph {
    fn from_iter<I: IntoIterator<Item = Definition>>(iter: I) -> Self {
        let mut graph = Self::new();
        for def in iter {
            graph.insert(def);
        }

        graph
    }
}

///
/// DefinitionKind
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum DefinitionKind {
    Enum,
    InputObject,
    Interface,
    Object,
    Scalar,
    Union,
}

impl DefinitionKind {
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Enum => "enum",
            Self::InputObject => "input",
            Self::Interface => "interface",
            Self::Object => "type",
            Self::Scalar => "scalar",
            Self::Union => "union",
        }
    }
}

///
/// Definition
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Definition {
    pub kind: DefinitionKind,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldDefinition>,

    /// Enum values, or member types for a union.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

impl Definition {
    #[must_use]
    pub fn new(kind: DefinitionKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            description: None,
            interfaces: Vec::new(),
            directives: Vec::new(),
            fields: Vec::new(),
            values: Vec::new(),
        }
    }

    #[must_use]
    pub fn object(name: impl Into<String>) -> Self {
        Self::new(DefinitionKind::Object, name)
    }

    #[must_use]
    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(DefinitionKind::Interface, name)
    }

    #[must_use]
    pub fn scalar(name: impl Into<String>) -> Self {
        Self::new(DefinitionKind::Scalar, name)
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    #[must_use]
    pub fn with_directive(mut self, directive: Directive) -> Self {
        self.directives.push(directive);
        self
    }

    #[must_use]
    pub fn with_field(mut self, field: FieldDefinition) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.values.push(value.into());
        self
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }

    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    #[must_use]
    pub fn directive(&self, name: &str) -> Option<&Directive> {
        self.directives.iter().find(|d| d.name == name)
    }
}

///
/// FieldDefinition
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct FieldDefinition {
    pub name: String,
    pub ty: TypeRef,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<InputValueDefinition>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
}

impl FieldDefinition {
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            description: None,
            arguments: Vec::new(),
            directives: Vec::new(),
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_argument(mut self, argument: InputValueDefinition) -> Self {
        self.arguments.push(argument);
        self
    }

    #[must_use]
    pub fn with_directive(mut self, directive: Directive) -> Self {
        self.directives.push(directive);
        self
    }
}

///
/// InputValueDefinition
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct InputValueDefinition {
    pub name: String,
    pub ty: TypeRef,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<ConstValue>,
}

impl InputValueDefinition {
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            default_value: None,
        }
    }

    #[must_use]
    pub fn default_value(mut self, value: ConstValue) -> Self {
        self.default_value = Some(value);
        self
    }
}

///
/// TypeRef
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum TypeRef {
    Named(String),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    #[must_use]
    pub fn non_null_named(name: impl Into<String>) -> Self {
        Self::NonNull(Box::new(Self::named(name)))
    }

    #[must_use]
    pub fn list(inner: Self) -> Self {
        Self::List(Box::new(inner))
    }

    #[must_use]
    pub fn non_null(inner: Self) -> Self {
        match inner {
            Self::NonNull(_) => inner,
            other => Self::NonNull(Box::new(other)),
        }
    }

    #[must_use]
    pub const fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    /// The innermost named type.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::List(inner) | Self::NonNull(inner) => inner.name(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

///
/// Directive
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Directive {
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<Argument>,
}

impl Directive {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_argument(mut self, name: impl Into<String>, value: ConstValue) -> Self {
        self.arguments.push(Argument {
            name: name.into(),
            value,
        });
        self
    }

    /// `@key(fields: "...")`, or a bare `@key` when `fields` is empty.
    #[must_use]
    pub fn key(fields: &str) -> Self {
        let directive = Self::new("key");
        if fields.is_empty() {
            directive
        } else {
            directive.with_argument("fields", ConstValue::String(fields.to_string()))
        }
    }

    #[must_use]
    pub fn external() -> Self {
        Self::new("external")
    }

    #[must_use]
    pub fn argument(&self, name: &str) -> Option<&ConstValue> {
        self.arguments
            .iter()
            .find(|a| a.name == name)
            .map(|a| &a.value)
    }
}

///
/// Argument
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Argument {
    pub name: String,
    pub value: ConstValue,
}

///
/// ConstValue
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum ConstValue {
    Boolean(bool),
    Enum(String),
    Float(f64),
    Int(i64),
    List(Vec<ConstValue>),
    Null,
    String(String),
}

impl fmt::Display for ConstValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Enum(e) => f.write_str(e),
            Self::Float(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Null => f.write_str("null"),
            // JSON string escaping is a valid GraphQL string literal
            Self::String(s) => {
                let quoted = serde_json::to_string(s).map_err(|_| fmt::Error)?;
                f.write_str(&quoted)
            }
        }
    }
}
