use fedx_schema::graph::DefinitionKind;
use thiserror::Error as ThisError;

///
/// StitchError
///
/// Fatal stitching failures. Any of these aborts the whole pass.
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum StitchError {
    #[error("type '{ty}' already has a field named '{field}'")]
    DuplicateField { ty: String, field: String },

    #[error(
        "no '{connection}' field on Query for the external edge {entity}.{field}; set a connection name"
    )]
    MissingConnectionField {
        entity: String,
        field: String,
        connection: String,
    },

    #[error("schema has no '{name}' type")]
    MissingSchemaType { name: String },

    #[error("'{name}' is a {kind}, expected an object type")]
    TypeKindMismatch { name: String, kind: DefinitionKind },
}
