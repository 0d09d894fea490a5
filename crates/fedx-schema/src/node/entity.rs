use crate::{
    annotation::{Annotation, Annotations},
    mixin::Mixin,
    node::{Field, FieldList, Index},
};
use serde::{Deserialize, Serialize};

///
/// Entity
///
/// A named storage entity. Fields and indexes keep declaration order, with
/// mixin contributions landing where the mixin was applied.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Entity {
    pub name: String,

    #[serde(default)]
    pub fields: FieldList,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub indexes: Vec<Index>,

    #[serde(default, skip_serializing_if = "Annotations::is_empty")]
    pub annotations: Annotations,
}

impl Entity {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: FieldList::default(),
            indexes: Vec::new(),
            annotations: Annotations::new(),
        }
    }

    /// Append everything a mixin contributes.
    #[must_use]
    pub fn mixin(mut self, mixin: &impl Mixin) -> Self {
        for field in mixin.fields() {
            self.fields.push(field);
        }
        self.indexes.extend(mixin.indexes());
        self.annotations.extend(mixin.annotations());

        self
    }

    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn index(mut self, index: Index) -> Self {
        self.indexes.push(index);
        self
    }

    #[must_use]
    pub fn annotation(mut self, annotation: impl Into<Annotation>) -> Self {
        self.annotations.insert(annotation.into());
        self
    }

    #[must_use]
    pub fn get_field(&self, ident: &str) -> Option<&Field> {
        self.fields.get(ident)
    }

    /// Primary-key prefix, if the entity declares one.
    #[must_use]
    pub fn id_prefix(&self) -> Option<&str> {
        self.annotations.id_prefix().map(|a| a.prefix.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mixin::{ExternalEdgeOption, NamespacedData, PrimaryKey, external_edge};

    #[test]
    fn mixins_apply_in_order() {
        let entity = Entity::new("Widget")
            .mixin(&PrimaryKey::new("widgets"))
            .mixin(&external_edge([ExternalEdgeOption::edge_type("Tenant")]))
            .field(Field::text("name"))
            .mixin(&NamespacedData);

        let idents: Vec<_> = entity.fields.iter().map(|f| f.ident.as_str()).collect();

        assert_eq!(idents, ["id", "tenant_id", "name", "namespace", "data"]);
        assert_eq!(entity.indexes.len(), 1);
        assert_eq!(entity.id_prefix(), Some("widgets"));
        assert!(entity.get_field("tenant_id").is_some());
    }

    #[test]
    fn entity_round_trips_through_json() {
        let entity = Entity::new("Widget").field(Field::text("name"));
        let json = serde_json::to_string(&entity).unwrap();
        let back: Entity = serde_json::from_str(&json).unwrap();

        assert_eq!(back, entity);
    }
}
