use crate::{
    StitchError,
    hook::{SchemaHook, object_mut, type_mut},
};
use fedx_schema::{
    extract::Worklist,
    graph::{NODE_INTERFACE, QUERY_TYPE, SchemaGraph},
};

/// Directive binding `Node` to the generator's own model type.
pub const GO_MODEL_DIRECTIVE: &str = "goModel";

/// Root query fields resolving any node by id.
pub const NODE_QUERIES: [&str; 2] = ["node", "nodes"];

///
/// RemoveNodeGoModel
///
/// Federation resolves entities through `@key`, so `Node` loses its model
/// binding.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct RemoveNodeGoModel;

impl SchemaHook for RemoveNodeGoModel {
    fn name(&self) -> &'static str {
        "remove_node_go_model"
    }

    fn apply(&self, mut graph: SchemaGraph, _: &Worklist) -> Result<SchemaGraph, StitchError> {
        let node = type_mut(&mut graph, NODE_INTERFACE)?;
        node.directives.retain(|d| d.name != GO_MODEL_DIRECTIVE);

        Ok(graph)
    }
}

///
/// RemoveNodeQueries
///

#[derive(Clone, Copy, Debug, Default)]
pub struct RemoveNodeQueries;

impl SchemaHook for RemoveNodeQueries {
    fn name(&self) -> &'static str {
        "remove_node_queries"
    }

    fn apply(&self, mut graph: SchemaGraph, _: &Worklist) -> Result<SchemaGraph, StitchError> {
        let query = object_mut(&mut graph, QUERY_TYPE)?;
        query
            .fields
            .retain(|f| !NODE_QUERIES.contains(&f.name.as_str()));

        Ok(graph)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use fedx_schema::graph::{ConstValue, Definition, Directive, FieldDefinition, TypeRef};

    fn base() -> SchemaGraph {
        SchemaGraph::new()
            .with_type(
                Definition::interface(NODE_INTERFACE)
                    .with_directive(
                        Directive::new(GO_MODEL_DIRECTIVE).with_argument(
                            "model",
                            ConstValue::String("example/ent.Noder".to_string()),
                        ),
                    )
                    .with_directive(Directive::new("keep"))
                    .with_field(FieldDefinition::new("id", TypeRef::non_null_named("ID"))),
            )
            .with_type(
                Definition::object(QUERY_TYPE)
                    .with_field(FieldDefinition::new("node", TypeRef::named("Node")))
                    .with_field(FieldDefinition::new(
                        "nodes",
                        TypeRef::non_null(TypeRef::list(TypeRef::named("Node"))),
                    ))
                    .with_field(FieldDefinition::new(
                        "widgets",
                        TypeRef::non_null_named("WidgetConnection"),
                    )),
            )
    }

    #[test]
    fn strips_only_go_model() {
        let graph = RemoveNodeGoModel
            .apply(base(), &Worklist::default())
            .unwrap();
        let node = graph.get(NODE_INTERFACE).unwrap();

        assert!(node.directive(GO_MODEL_DIRECTIVE).is_none());
        assert!(node.directive("keep").is_some());
    }

    #[test]
    fn removes_both_node_queries() {
        let graph = RemoveNodeQueries
            .apply(base(), &Worklist::default())
            .unwrap();
        let names: Vec<_> = graph
            .query()
            .unwrap()
            .fields
            .iter()
            .map(|f| f.name.as_str())
            .collect();

        assert_eq!(names, ["widgets"]);
    }

    #[test]
    fn missing_types_are_fatal() {
        let empty = SchemaGraph::new();

        assert!(matches!(
            RemoveNodeGoModel.apply(empty.clone(), &Worklist::default()),
            Err(StitchError::MissingSchemaType { name }) if name == NODE_INTERFACE
        ));
        assert!(matches!(
            RemoveNodeQueries.apply(empty, &Worklist::default()),
            Err(StitchError::MissingSchemaType { name }) if name == QUERY_TYPE
        ));
    }
}
