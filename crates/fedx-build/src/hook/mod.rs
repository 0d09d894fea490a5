//! Schema hooks: independent passes over the GraphQL schema graph.
//!
//! Every hook takes the graph by value and returns the rewritten graph or an
//! error; the pipeline composes them in sequence.

mod external_edges;
mod federation;
mod json_scalar;

pub use external_edges::ExternalEdges;
pub use federation::{RemoveNodeGoModel, RemoveNodeQueries};
pub use json_scalar::{JSON_SCALAR, JsonScalar};

use crate::StitchError;
use fedx_schema::{
    extract::Worklist,
    graph::{Definition, DefinitionKind, SchemaGraph},
};

///
/// SchemaHook
///

pub trait SchemaHook {
    fn name(&self) -> &'static str;

    fn apply(&self, graph: SchemaGraph, worklist: &Worklist) -> Result<SchemaGraph, StitchError>;
}

// type_mut
fn type_mut<'a>(graph: &'a mut SchemaGraph, name: &str) -> Result<&'a mut Definition, StitchError> {
    graph
        .get_mut(name)
        .ok_or_else(|| StitchError::MissingSchemaType {
            name: name.to_string(),
        })
}

// object_mut
// like type_mut, but the definition must be an object type
fn object_mut<'a>(
    graph: &'a mut SchemaGraph,
    name: &str,
) -> Result<&'a mut Definition, StitchError> {
    let def = type_mut(graph, name)?;

    match def.kind {
        DefinitionKind::Object => Ok(def),
        kind => Err(StitchError::TypeKindMismatch {
            name: name.to_string(),
            kind,
        }),
    }
}
