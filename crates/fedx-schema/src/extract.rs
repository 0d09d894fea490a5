use crate::{
    ANNOTATION_NAME,
    annotation::{Annotation, FedxAnnotation},
    mixin::ExternalEdgeConfig,
    node::{Entity, Field, Schema},
};
use thiserror::Error as ThisError;

///
/// ExtractError
///

#[derive(Debug, ThisError)]
pub enum ExtractError {
    #[error(
        "malformed {name} annotation on {entity}.{field}: {reason}",
        name = ANNOTATION_NAME
    )]
    MalformedAnnotationPayload {
        entity: String,
        field: String,
        reason: String,
    },
}

///
/// ExtractionTuple
///
/// One external edge: the owning entity, the identifier field, and the
/// resolved config.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExtractionTuple {
    pub entity: String,
    pub field: String,
    pub config: ExternalEdgeConfig,
}

///
/// FieldRef
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldRef {
    pub entity: String,
    pub field: String,
}

///
/// Worklist
///
/// Everything the stitcher needs, in entity declaration order then field
/// order.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Worklist {
    pub external_edges: Vec<ExtractionTuple>,
    pub namespaced_data: Vec<FieldRef>,
}

impl Worklist {
    #[must_use]
    pub const fn has_namespaced_data(&self) -> bool {
        !self.namespaced_data.is_empty()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.external_edges.is_empty() && self.namespaced_data.is_empty()
    }
}

/// Scan every field of every entity for this workspace's annotation.
pub fn extract(schema: &Schema) -> Result<Worklist, ExtractError> {
    let mut worklist = Worklist::default();

    for entity in schema.entities() {
        for field in entity.fields.iter() {
            let Some(annotation) = field.annotations.get(ANNOTATION_NAME) else {
                continue;
            };

            match classify(entity, field, annotation)? {
                FedxAnnotation::ExternalEdge(config) => {
                    worklist.external_edges.push(ExtractionTuple {
                        entity: entity.name.clone(),
                        field: field.ident.clone(),
                        config,
                    });
                }
                FedxAnnotation::NamespacedData => worklist.namespaced_data.push(FieldRef {
                    entity: entity.name.clone(),
                    field: field.ident.clone(),
                }),
            }
        }
    }

    tracing::debug!(
        external_edges = worklist.external_edges.len(),
        namespaced_data = worklist.namespaced_data.len(),
        "extracted schema metadata"
    );

    Ok(worklist)
}

fn classify(
    entity: &Entity,
    field: &Field,
    annotation: &Annotation,
) -> Result<FedxAnnotation, ExtractError> {
    let malformed = |reason: String| ExtractError::MalformedAnnotationPayload {
        entity: entity.name.clone(),
        field: field.ident.clone(),
        reason,
    };

    let decoded = match annotation {
        Annotation::Fedx(a) => a.clone(),
        Annotation::Foreign { payload, .. } => {
            serde_json::from_value(payload.clone()).map_err(|e| malformed(e.to_string()))?
        }
        other => return Err(malformed(format!("unexpected {} payload", other.name()))),
    };

    if let FedxAnnotation::ExternalEdge(config) = &decoded
        && config.edge_name.is_empty()
    {
        return Err(malformed("external edge has no edge name".to_string()));
    }

    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mixin::{ExternalEdgeOption, NamespacedData, PrimaryKey, external_edge};
    use serde_json::json;

    fn gadget() -> Entity {
        Entity::new("Gadget")
            .mixin(&PrimaryKey::new("gadgets"))
            .mixin(&external_edge([ExternalEdgeOption::edge_type("Widget")]))
            .mixin(&NamespacedData)
            .mixin(&external_edge([ExternalEdgeOption::edge_type("Tenant")]))
    }

    #[test]
    fn tuples_follow_declaration_order() {
        let schema = Schema::new()
            .with_entity(gadget())
            .with_entity(Entity::new("Sprocket").mixin(&external_edge([
                ExternalEdgeOption::edge_type("Tenant"),
                ExternalEdgeOption::Optional(true),
            ])));

        let worklist = extract(&schema).unwrap();
        let seen: Vec<_> = worklist
            .external_edges
            .iter()
            .map(|t| (t.entity.as_str(), t.field.as_str(), t.config.edge_name.as_str()))
            .collect();

        assert_eq!(
            seen,
            [
                ("Gadget", "widget_id", "Widget"),
                ("Gadget", "tenant_id", "Tenant"),
                ("Sprocket", "tenant_id", "Tenant"),
            ]
        );
        assert!(worklist.external_edges[2].config.optional);
        assert_eq!(
            worklist.namespaced_data,
            [FieldRef {
                entity: "Gadget".to_string(),
                field: "data".to_string(),
            }]
        );
    }

    #[test]
    fn schema_read_back_from_json_extracts_the_same() {
        let schema = Schema::new().with_entity(gadget());
        let json = serde_json::to_string(&schema).unwrap();
        let back: Schema = serde_json::from_str(&json).unwrap();

        assert_eq!(extract(&back).unwrap(), extract(&schema).unwrap());
    }

    #[test]
    fn unknown_payload_names_entity_and_field() {
        let entity = Entity::new("Gadget").field(
            Field::text("widget_id").annotation(Annotation::foreign(
                ANNOTATION_NAME,
                json!({ "Unexpected": true }),
            )),
        );
        let err = extract(&Schema::new().with_entity(entity)).unwrap_err();

        assert!(err.to_string().contains("Gadget.widget_id"));
    }

    #[test]
    fn edge_without_name_is_malformed() {
        let entity = Entity::new("Gadget").field(
            Field::text("widget_id").annotation(Annotation::foreign(
                ANNOTATION_NAME,
                json!({ "ExternalEdge": { "FieldName": "widget_id" } }),
            )),
        );

        assert!(matches!(
            extract(&Schema::new().with_entity(entity)),
            Err(ExtractError::MalformedAnnotationPayload { .. })
        ));
    }

    #[test]
    fn unrelated_annotations_are_ignored() {
        let entity = Entity::new("Gadget")
            .field(Field::text("name").annotation(Annotation::foreign("Other", json!("x"))));

        assert!(extract(&Schema::new().with_entity(entity)).unwrap().is_empty());
    }
}
