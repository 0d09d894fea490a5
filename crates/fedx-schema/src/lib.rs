//! Schema model for federated services: entities built from mixins, the
//! annotations they carry, validation, metadata extraction and the GraphQL
//! type graph the stitcher rewrites.

pub mod annotation;
pub mod error;
pub mod extract;
pub mod graph;
pub mod mixin;
pub mod node;
pub mod validate;

/// Name under which this workspace's field metadata is stored.
pub const ANNOTATION_NAME: &str = "FEDX";

/// Maximum length for entity names.
pub const MAX_ENTITY_NAME_LEN: usize = 64;

/// Maximum length for field names.
pub const MAX_FIELD_NAME_LEN: usize = 64;

/// Maximum number of fields in one index.
pub const MAX_INDEX_FIELDS: usize = 4;

pub use error::ErrorTree;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        ANNOTATION_NAME,
        annotation::{Annotation, FedxAnnotation, GraphqlAnnotation, SkipMode},
        err,
        error::ErrorTree,
        extract::{ExtractionTuple, Worklist, extract},
        graph::{Definition, Directive, FieldDefinition, SchemaGraph, TypeRef},
        mixin::{
            ExternalEdge, ExternalEdgeConfig, ExternalEdgeOption, Mixin, NamespacedData,
            PrimaryKey, Timestamps, external_edge,
        },
        node::*,
        validate::validate_schema,
    };
}
