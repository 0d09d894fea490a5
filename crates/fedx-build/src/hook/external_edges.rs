use crate::{
    StitchError,
    hook::{SchemaHook, object_mut},
};
use fedx_config_build::Relocation;
use fedx_schema::{
    extract::{ExtractionTuple, Worklist},
    graph::{
        Definition, DefinitionKind, Directive, FieldDefinition, QUERY_TYPE, SchemaGraph, TypeRef,
    },
};
use fedx_utils::{
    case::{camel, snake},
    inflect::pluralize,
};
use std::collections::BTreeMap;

///
/// ExternalEdges
///
/// For each external edge: make sure a federation stub for the remote type
/// exists, relocate the owner's root connection field under it, and give
/// the owner a typed field pointing at the stub.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct ExternalEdges {
    relocation: Relocation,
}

impl ExternalEdges {
    #[must_use]
    pub const fn new(relocation: Relocation) -> Self {
        Self { relocation }
    }

    fn stitch(
        &self,
        graph: &mut SchemaGraph,
        tuple: &ExtractionTuple,
        moved: &mut BTreeMap<String, FieldDefinition>,
    ) -> Result<(), StitchError> {
        let config = &tuple.config;
        let edge = config.edge_name.as_str();

        ensure_stub(graph, edge)?;

        // connection
        let connection = connection_name(&tuple.entity, &config.connection_name);
        let field = self.take_connection(graph, tuple, &connection, moved)?;
        let stub = object_mut(graph, edge)?;
        if !stub.has_field(&field.name) {
            stub.fields.push(field);
        }

        // forward edge
        let name = camel(&snake(edge));
        let ty = if config.optional {
            TypeRef::named(edge)
        } else {
            TypeRef::non_null_named(edge)
        };

        let local = object_mut(graph, &tuple.entity)?;
        if local.has_field(&name) {
            return Err(StitchError::DuplicateField {
                ty: tuple.entity.clone(),
                field: name,
            });
        }

        tracing::debug!(
            entity = %tuple.entity,
            field = %name,
            ty = %ty,
            connection = %connection,
            "stitched external edge"
        );
        local.fields.push(FieldDefinition::new(name, ty));

        Ok(())
    }

    // take_connection
    // fields moved off Query by earlier tuples stay available to later stubs
    fn take_connection(
        &self,
        graph: &mut SchemaGraph,
        tuple: &ExtractionTuple,
        connection: &str,
        moved: &mut BTreeMap<String, FieldDefinition>,
    ) -> Result<FieldDefinition, StitchError> {
        let query = object_mut(graph, QUERY_TYPE)?;

        if let Some(pos) = query.fields.iter().position(|f| f.name == connection) {
            let field = match self.relocation {
                Relocation::Copy => query.fields[pos].clone(),
                Relocation::Move => {
                    let field = query.fields.remove(pos);
                    moved.insert(connection.to_string(), field.clone());
                    field
                }
            };

            return Ok(field);
        }

        moved
            .get(connection)
            .cloned()
            .ok_or_else(|| StitchError::MissingConnectionField {
                entity: tuple.entity.clone(),
                field: tuple.field.clone(),
                connection: connection.to_string(),
            })
    }
}

impl SchemaHook for ExternalEdges {
    fn name(&self) -> &'static str {
        "external_edges"
    }

    fn apply(
        &self,
        mut graph: SchemaGraph,
        worklist: &Worklist,
    ) -> Result<SchemaGraph, StitchError> {
        let mut moved = BTreeMap::new();

        for tuple in &worklist.external_edges {
            if tuple.config.skip_gql {
                tracing::debug!(
                    entity = %tuple.entity,
                    field = %tuple.field,
                    "external edge skipped for GraphQL"
                );
                continue;
            }

            self.stitch(&mut graph, tuple, &mut moved)?;
        }

        Ok(graph)
    }
}

/// Root query field listing `entity`, unless an explicit name is given.
#[must_use]
pub fn connection_name(entity: &str, explicit: &str) -> String {
    if explicit.is_empty() {
        camel(&snake(&pluralize(entity)))
    } else {
        explicit.to_string()
    }
}

/// Minimal object type for an entity owned by another service.
#[must_use]
pub fn federation_stub(name: &str) -> Definition {
    Definition::object(name)
        .with_directive(Directive::key("id"))
        .with_field(
            FieldDefinition::new("id", TypeRef::non_null_named("ID"))
                .with_directive(Directive::external()),
        )
}

// ensure_stub
// an existing object with this name is reused as is
fn ensure_stub(graph: &mut SchemaGraph, name: &str) -> Result<(), StitchError> {
    match graph.get(name) {
        Some(def) if def.kind == DefinitionKind::Object => Ok(()),
        Some(def) => Err(StitchError::TypeKindMismatch {
            name: name.to_string(),
            kind: def.kind,
        }),
        None => {
            tracing::debug!(ty = name, "adding federation stub");
            graph.insert(federation_stub(name));

            Ok(())
        }
    }
}

///
/// TESTS
///
