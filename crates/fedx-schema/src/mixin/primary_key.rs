use crate::{
    annotation::{Annotation, IdPrefixAnnotation, key_directive},
    mixin::Mixin,
    node::{Field, FieldDefault, FieldKind, ValueType},
};

///
/// PrimaryKey
///
/// An immutable `id` field holding a prefixed identifier generated on
/// create, and the `@key(fields: "id")` directive that makes the type
/// resolvable by other services.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrimaryKey {
    prefix: String,
}

impl PrimaryKey {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Mixin for PrimaryKey {
    fn fields(&self) -> Vec<Field> {
        vec![
            Field::new("id", FieldKind::String)
                .value_type(ValueType::PrefixedId)
                .default(FieldDefault::GenerateId {
                    prefix: self.prefix.clone(),
                })
                .unique()
                .immutable(),
        ]
    }

    fn annotations(&self) -> Vec<Annotation> {
        vec![
            IdPrefixAnnotation {
                prefix: self.prefix.clone(),
            }
            .into(),
            key_directive("id"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Directive;
    use fedx_id::PrefixedId;

    #[test]
    fn id_default_generates_under_prefix() {
        let fields = PrimaryKey::new("widgets").fields();
        let id = &fields[0];

        assert!(id.unique && id.immutable);
        let generated = id.default.as_ref().unwrap().generate_id().unwrap().unwrap();
        assert_eq!(generated.prefix(), "widgets");
        assert!(id.check_text(generated.as_str()).is_ok());
        assert!(PrefixedId::parse(generated.as_str()).is_ok());
    }

    #[test]
    fn entity_gets_key_directive() {
        let annotations = PrimaryKey::new("widgets").annotations();
        let gql = annotations
            .iter()
            .find_map(|a| match a {
                Annotation::Graphql(g) => Some(g),
                _ => None,
            })
            .unwrap();

        assert_eq!(gql.directives, [Directive::key("id")]);
    }
}
