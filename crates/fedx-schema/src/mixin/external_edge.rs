use crate::{
    annotation::{Annotation, FedxAnnotation, GraphqlAnnotation, SkipMode},
    mixin::Mixin,
    node::{Field, Index, ValueType},
};
use fedx_id::TOTAL_LENGTH;
use fedx_utils::case::{is_pascal, pascal, snake};
use serde::{Deserialize, Serialize};

///
/// ExternalEdgeConfig
///
/// Resolved settings for a reference to an entity owned by another service.
/// Travels on the field annotation into the stitching pass.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ExternalEdgeConfig {
    pub edge_name: String,
    pub connection_name: String,
    pub field_name: String,

    #[serde(rename = "AnyID")]
    pub any_id: bool,
    pub immutable: bool,
    pub optional: bool,

    #[serde(rename = "SkipGQL")]
    pub skip_gql: bool,
}

impl ExternalEdgeConfig {
    /// Apply one option. Annotation passthroughs do not touch the config.
    #[must_use]
    pub fn apply(self, option: &ExternalEdgeOption) -> Self {
        match option {
            ExternalEdgeOption::EdgeType(name) => self.with_edge_type(name),
            ExternalEdgeOption::FieldName(name) => Self {
                field_name: name.clone(),
                ..self
            },
            ExternalEdgeOption::ConnectionName(name) => Self {
                connection_name: name.clone(),
                ..self
            },
            ExternalEdgeOption::Optional(v) => Self {
                optional: *v,
                ..self
            },
            ExternalEdgeOption::Immutable(v) => Self {
                immutable: *v,
                ..self
            },
            ExternalEdgeOption::SkipGql(v) => Self {
                skip_gql: *v,
                ..self
            },
            ExternalEdgeOption::AllowAnyId(v) => Self { any_id: *v, ..self },
            ExternalEdgeOption::FieldAnnotation(_) => self,
        }
    }

    fn with_edge_type(self, name: &str) -> Self {
        if !is_pascal(name) {
            tracing::warn!(
                got = name,
                expected = %pascal(name),
                "external edge type does not look like a GraphQL type name, verify it before continuing"
            );
        }

        let field_name = if self.field_name.is_empty() {
            format!("{}_id", snake(name))
        } else {
            self.field_name
        };

        Self {
            edge_name: name.to_string(),
            field_name,
            ..self
        }
    }
}

///
/// ExternalEdgeOption
///
/// One patch to an `ExternalEdgeConfig`. Options apply in order and later
/// ones win, except that a field name, once set, is never replaced by a
/// derived one.
///

#[derive(Clone, Debug, PartialEq)]
pub enum ExternalEdgeOption {
    /// GraphQL type of the remote entity; derives the field name if unset.
    EdgeType(String),
    FieldName(String),
    /// Root query field to relocate; defaults to the pluralized owner type.
    ConnectionName(String),
    Optional(bool),
    Immutable(bool),
    /// Keep the storage field but leave the GraphQL schema alone.
    SkipGql(bool),
    /// Accept any text instead of a prefixed identifier.
    AllowAnyId(bool),
    /// Extra field annotation, applied after every generated one.
    FieldAnnotation(Annotation),
}

impl ExternalEdgeOption {
    #[must_use]
    pub fn edge_type(name: impl Into<String>) -> Self {
        Self::EdgeType(name.into())
    }

    #[must_use]
    pub fn field_name(name: impl Into<String>) -> Self {
        Self::FieldName(name.into())
    }

    #[must_use]
    pub fn connection_name(name: impl Into<String>) -> Self {
        Self::ConnectionName(name.into())
    }

    #[must_use]
    pub fn field_annotation(annotation: impl Into<Annotation>) -> Self {
        Self::FieldAnnotation(annotation.into())
    }
}

///
/// ExternalEdge
///
/// Mixin adding the identifier field for an external edge plus its index.
///

#[derive(Clone, Debug, PartialEq)]
pub struct ExternalEdge {
    config: ExternalEdgeConfig,
    field_annotations: Vec<Annotation>,
}

impl ExternalEdge {
    #[must_use]
    pub fn new(options: impl IntoIterator<Item = ExternalEdgeOption>) -> Self {
        let mut config = ExternalEdgeConfig::default();
        let mut field_annotations = Vec::new();

        for option in options {
            config = config.apply(&option);
            if let ExternalEdgeOption::FieldAnnotation(annotation) = option {
                field_annotations.push(annotation);
            }
        }

        Self {
            config,
            field_annotations,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &ExternalEdgeConfig {
        &self.config
    }
}

impl Mixin for ExternalEdge {
    fn fields(&self) -> Vec<Field> {
        let c = &self.config;

        let mut field = Field::text(&c.field_name)
            .annotation(GraphqlAnnotation::ty("ID"))
            .annotation(FedxAnnotation::ExternalEdge(c.clone()));

        if c.immutable {
            field = field
                .immutable()
                .annotation(GraphqlAnnotation::skip([SkipMode::MutationUpdateInput]));
        }

        if !c.any_id {
            field = field
                .min_len(TOTAL_LENGTH)
                .max_len(TOTAL_LENGTH)
                .value_type(ValueType::PrefixedId);
        }

        field = if c.optional {
            field.optional()
        } else {
            field.not_empty()
        };

        // caller annotations go last so they can override generated ones
        for annotation in &self.field_annotations {
            field = field.annotation(annotation.clone());
        }

        vec![field]
    }

    fn indexes(&self) -> Vec<Index> {
        vec![Index::new([self.config.field_name.as_str()])]
    }
}
