mod naming;

use crate::{
    MAX_INDEX_FIELDS, err,
    error::ErrorTree,
    node::{Entity, Schema},
};
use fedx_id::{PREFIX_PART_LENGTH, normalize_prefix};
use naming::{validate_entity_name, validate_field_name};
use std::collections::{BTreeMap, BTreeSet};

/// Check the whole schema, collecting every problem under its entity.
pub fn validate_schema(schema: &Schema) -> Result<(), ErrorTree> {
    let mut errs = ErrorTree::new();
    let mut names = BTreeSet::new();
    let mut prefixes = BTreeMap::<[u8; PREFIX_PART_LENGTH], &str>::new();

    for entity in schema.entities() {
        let mut entity_errs = validate_entity(entity);

        if !names.insert(entity.name.as_str()) {
            err!(entity_errs, "entity '{}' is declared more than once", entity.name);
        }

        if let Some(prefix) = entity.id_prefix() {
            match normalize_prefix(prefix) {
                Ok(normalized) => {
                    if let Some(other) = prefixes.insert(normalized, &entity.name) {
                        err!(entity_errs, "id prefix '{prefix}' is already used by '{other}'");
                    }
                }
                Err(e) => err!(entity_errs, "{e}"),
            }
        }

        errs.merge_for(entity.name.clone(), entity_errs);
    }

    errs.result()
}

fn validate_entity(entity: &Entity) -> ErrorTree {
    let mut errs = ErrorTree::new();

    if let Err(e) = validate_entity_name(&entity.name) {
        errs.add(e);
    }

    // fields
    let mut seen = BTreeSet::new();
    for field in entity.fields.iter() {
        if let Err(e) = validate_field_name(&field.ident) {
            errs.add_for(field.ident.clone(), e);
        }
        if !seen.insert(field.ident.as_str()) {
            errs.add_for(field.ident.clone(), "field is declared more than once");
        }
        if let (Some(min), Some(max)) = (field.min_len, field.max_len)
            && min > max
        {
            errs.add_for(field.ident.clone(), format!("min_len {min} exceeds max_len {max}"));
        }
        if field.optional && field.not_empty {
            errs.add_for(field.ident.clone(), "field cannot be both optional and not empty");
        }
    }

    // indexes
    for index in &entity.indexes {
        if index.fields.is_empty() {
            err!(errs, "index has no fields");
        }
        if index.fields.len() > MAX_INDEX_FIELDS {
            err!(errs, "index {index} has more than {MAX_INDEX_FIELDS} fields");
        }
        for ident in &index.fields {
            if entity.get_field(ident).is_none() {
                err!(errs, "index {index} references unknown field '{ident}'");
            }
        }
    }

    errs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        mixin::{ExternalEdgeOption, NamespacedData, PrimaryKey, Timestamps, external_edge},
        node::{Field, Index},
    };

    fn widget() -> Entity {
        Entity::new("Widget")
            .mixin(&PrimaryKey::new("widgets"))
            .mixin(&external_edge([ExternalEdgeOption::edge_type("Tenant")]))
            .mixin(&Timestamps)
            .mixin(&NamespacedData)
    }

    #[test]
    fn composed_entity_is_valid() {
        let schema = Schema::new().with_entity(widget());

        assert!(validate_schema(&schema).is_ok());
    }

    #[test]
    fn colliding_mixins_are_reported() {
        let entity = widget().mixin(&external_edge([ExternalEdgeOption::edge_type("Tenant")]));
        let errs = validate_schema(&Schema::new().with_entity(entity)).unwrap_err();

        let flat = errs.flatten();
        assert!(flat.iter().any(|(route, msg)| {
            route == "Widget.tenant_id" && msg.contains("more than once")
        }));
    }

    #[test]
    fn duplicate_entities_and_prefixes() {
        let schema = Schema::new()
            .with_entity(Entity::new("Widget").mixin(&PrimaryKey::new("sharing")))
            .with_entity(Entity::new("Gadget").mixin(&PrimaryKey::new("SHARING")))
            .with_entity(Entity::new("Widget"));
        let errs = validate_schema(&schema).unwrap_err();
        let flat = errs.flatten();

        assert!(flat.iter().any(|(r, m)| r == "Gadget" && m.contains("already used")));
        assert!(flat.iter().any(|(r, m)| r == "Widget" && m.contains("more than once")));
    }

    #[test]
    fn bad_prefix_is_reported() {
        let schema = Schema::new().with_entity(Entity::new("Widget").mixin(&PrimaryKey::new("w")));

        assert!(validate_schema(&schema).is_err());
    }

    #[test]
    fn indexes_must_reference_fields() {
        let entity = Entity::new("Widget")
            .field(Field::text("name"))
            .index(Index::new(["name", "missing"]))
            .index(Index::new(["name", "name", "name", "name", "name"]));
        let errs = validate_schema(&Schema::new().with_entity(entity)).unwrap_err();

        assert_eq!(errs.len(), 2);
    }
}
