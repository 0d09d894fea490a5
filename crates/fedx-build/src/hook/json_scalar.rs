use crate::{StitchError, hook::SchemaHook};
use fedx_schema::{
    extract::Worklist,
    graph::{Definition, SchemaGraph},
};

pub const JSON_SCALAR: &str = "JSON";

///
/// JsonScalar
///
/// Registers `scalar JSON` when some entity carries namespaced data. An
/// existing definition is left untouched.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct JsonScalar;

impl SchemaHook for JsonScalar {
    fn name(&self) -> &'static str {
        "json_scalar"
    }

    fn apply(
        &self,
        mut graph: SchemaGraph,
        worklist: &Worklist,
    ) -> Result<SchemaGraph, StitchError> {
        if worklist.has_namespaced_data() && !graph.contains(JSON_SCALAR) {
            graph.insert(Definition::scalar(JSON_SCALAR).description("A valid JSON string."));
        }

        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fedx_schema::{extract::FieldRef, graph::DefinitionKind};

    fn namespaced() -> Worklist {
        Worklist {
            namespaced_data: vec![FieldRef {
                entity: "Widget".to_string(),
                field: "data".to_string(),
            }],
            ..Worklist::default()
        }
    }

    #[test]
    fn registers_scalar_only_when_needed() {
        let without = JsonScalar
            .apply(SchemaGraph::new(), &Worklist::default())
            .unwrap();
        let with = JsonScalar.apply(SchemaGraph::new(), &namespaced()).unwrap();

        assert!(without.is_empty());
        assert_eq!(with.get(JSON_SCALAR).unwrap().kind, DefinitionKind::Scalar);
    }

    #[test]
    fn existing_definition_is_kept() {
        let graph = SchemaGraph::new()
            .with_type(Definition::scalar(JSON_SCALAR).description("Custom."));
        let graph = JsonScalar.apply(graph, &namespaced()).unwrap();

        assert_eq!(
            graph.get(JSON_SCALAR).unwrap().description.as_deref(),
            Some("Custom.")
        );
    }
}
