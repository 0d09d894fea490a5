use crate::{ANNOTATION_NAME, graph::Directive, mixin::ExternalEdgeConfig};
use serde::{Deserialize, Deserializer, Serialize, Serializer, ser::SerializeMap};
use serde_json::Value as JsonValue;
use std::collections::{BTreeMap, BTreeSet};

/// Key for GraphQL generator hints (type overrides, skips, directives).
pub const GRAPHQL_ANNOTATION_NAME: &str = "GraphQL";

/// Key for the primary-key prefix of an entity.
pub const ID_PREFIX_ANNOTATION_NAME: &str = "IdPrefix";

///
/// Annotation
///
/// Known annotation kinds are typed; anything else, including payloads read
/// back from serialized schemas, is carried as raw JSON under its own name.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Annotation {
    Fedx(FedxAnnotation),
    Foreign { name: String, payload: JsonValue },
    Graphql(GraphqlAnnotation),
    IdPrefix(IdPrefixAnnotation),
}

impl Annotation {
    #[must_use]
    pub fn foreign(name: impl Into<String>, payload: JsonValue) -> Self {
        Self::Foreign {
            name: name.into(),
            payload,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Fedx(_) => ANNOTATION_NAME,
            Self::Foreign { name, .. } => name,
            Self::Graphql(_) => GRAPHQL_ANNOTATION_NAME,
            Self::IdPrefix(_) => ID_PREFIX_ANNOTATION_NAME,
        }
    }

    /// Wire form of the payload.
    #[must_use]
    pub fn to_json(&self) -> JsonValue {
        let encoded = match self {
            Self::Fedx(a) => serde_json::to_value(a),
            Self::Foreign { payload, .. } => return payload.clone(),
            Self::Graphql(a) => serde_json::to_value(a),
            Self::IdPrefix(a) => serde_json::to_value(a),
        };

        // plain structs of strings and bools always encode
        encoded.unwrap_or(JsonValue::Null)
    }
}

///
/// Annotations
///
/// Annotations keyed by name. Inserting under an existing name overrides it,
/// except GraphQL hints, which merge field by field with the newer one winning.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Annotations(BTreeMap<String, Annotation>);

impl Annotations {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, annotation: Annotation) {
        let name = annotation.name().to_string();

        match (self.0.remove(&name), annotation) {
            (Some(Annotation::Graphql(existing)), Annotation::Graphql(newer)) => {
                self.0.insert(name, Annotation::Graphql(existing.merge(newer)));
            }
            (_, annotation) => {
                self.0.insert(name, annotation);
            }
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Annotation> {
        self.0.get(name)
    }

    #[must_use]
    pub fn graphql(&self) -> Option<&GraphqlAnnotation> {
        match self.get(GRAPHQL_ANNOTATION_NAME) {
            Some(Annotation::Graphql(a)) => Some(a),
            _ => None,
        }
    }

    #[must_use]
    pub fn id_prefix(&self) -> Option<&IdPrefixAnnotation> {
        match self.get(ID_PREFIX_ANNOTATION_NAME) {
            Some(Annotation::IdPrefix(a)) => Some(a),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Annotation> {
        self.0.values()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Extend<Annotation> for Annotations {
    fn extend<I: IntoIterator<Item = Annotation>>(&mut self, iter: I) {
        for annotation in iter {
            self.insert(annotation);
        }
    }
}

impl FromIterator<Annotation> for Annotations {
    fn from_iter<I: IntoIterator<Item = Annotation>>(iter: I) -> Self {
        let mut out = Self::new();
        out.extend(iter);

        out
    }
}

impl Serialize for Annotations {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, annotation) in &self.0 {
            map.serialize_entry(name, &annotation.to_json())?;
        }

        map.end()
    }
}

// Read back as raw payloads; classification happens at extraction time.
impl<'de> Deserialize<'de> for Annotations {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, JsonValue>::deserialize(deserializer)?;

        Ok(Self(
            raw.into_iter()
                .map(|(name, payload)| {
                    let annotation = Annotation::foreign(name.clone(), payload);
                    (name, annotation)
                })
                .collect(),
        ))
    }
}

///
/// FedxAnnotation
///
/// The closed set of metadata this workspace attaches to fields.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(try_from = "AnnotationPayload", into = "AnnotationPayload")]
pub enum FedxAnnotation {
    ExternalEdge(ExternalEdgeConfig),
    NamespacedData,
}

impl FedxAnnotation {
    #[must_use]
    pub const fn external_edge(&self) -> Option<&ExternalEdgeConfig> {
        match self {
            Self::ExternalEdge(config) => Some(config),
            Self::NamespacedData => None,
        }
    }
}

///
/// AnnotationPayload
///
/// Wire shape of a `FedxAnnotation`; exactly one member must be set.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct AnnotationPayload {
    #[serde(rename = "IsNamespacedDataJSONField", default)]
    is_namespaced_data_json_field: bool,

    #[serde(rename = "ExternalEdge", default)]
    external_edge: Option<ExternalEdgeConfig>,
}

impl TryFrom<AnnotationPayload> for FedxAnnotation {
    type Error = String;

    fn try_from(payload: AnnotationPayload) -> Result<Self, Self::Error> {
        match (payload.is_namespaced_data_json_field, payload.external_edge) {
            (false, Some(config)) => Ok(Self::ExternalEdge(config)),
            (true, None) => Ok(Self::NamespacedData),
            (true, Some(_)) => {
                Err("payload is both an external edge and a namespaced data field".to_string())
            }
            (false, None) => Err(
                "payload carries neither an external edge nor a namespaced data marker".to_string(),
            ),
        }
    }
}

impl From<FedxAnnotation> for AnnotationPayload {
    fn from(annotation: FedxAnnotation) -> Self {
        match annotation {
            FedxAnnotation::ExternalEdge(config) => Self {
                is_namespaced_data_json_field: false,
                external_edge: Some(config),
            },
            FedxAnnotation::NamespacedData => Self {
                is_namespaced_data_json_field: true,
                external_edge: None,
            },
        }
    }
}

///
/// GraphqlAnnotation
///
/// Hints for the upstream GraphQL generator.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GraphqlAnnotation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_field: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub skip: BTreeSet<SkipMode>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
}

impl GraphqlAnnotation {
    /// Override the GraphQL type of a field.
    #[must_use]
    pub fn ty(name: impl Into<String>) -> Self {
        Self {
            r#type: Some(name.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn order_field(name: impl Into<String>) -> Self {
        Self {
            order_field: Some(name.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn skip(modes: impl IntoIterator<Item = SkipMode>) -> Self {
        Self {
            skip: modes.into_iter().collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn directives(directives: impl IntoIterator<Item = Directive>) -> Self {
        Self {
            directives: directives.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Combine with a newer annotation; its set values take precedence.
    #[must_use]
    pub fn merge(mut self, newer: Self) -> Self {
        if newer.r#type.is_some() {
            self.r#type = newer.r#type;
        }
        if newer.order_field.is_some() {
            self.order_field = newer.order_field;
        }
        self.skip.extend(newer.skip);
        self.directives.extend(newer.directives);

        self
    }
}

/// Entity annotation carrying `@key(fields: ...)`.
#[must_use]
pub fn key_directive(fields: &str) -> Annotation {
    GraphqlAnnotation::directives([Directive::key(fields)]).into()
}

impl From<GraphqlAnnotation> for Annotation {
    fn from(annotation: GraphqlAnnotation) -> Self {
        Self::Graphql(annotation)
    }
}

impl From<FedxAnnotation> for Annotation {
    fn from(annotation: FedxAnnotation) -> Self {
        Self::Fedx(annotation)
    }
}

///
/// SkipMode
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Ord, PartialEq, PartialOrd, Serialize)]
#[remain::sorted]
pub enum SkipMode {
    MutationCreateInput,
    MutationUpdateInput,
    OrderField,
    Type,
    WhereInput,
}

///
/// IdPrefixAnnotation
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct IdPrefixAnnotation {
    pub prefix: String,
}

impl From<IdPrefixAnnotation> for Annotation {
    fn from(annotation: IdPrefixAnnotation) -> Self {
        Self::IdPrefix(annotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn graphql_hints_merge_with_newer_winning() {
        let mut annotations = Annotations::new();
        annotations.insert(GraphqlAnnotation::ty("ID").into());
        annotations.insert(GraphqlAnnotation::skip([SkipMode::MutationUpdateInput]).into());
        annotations.insert(GraphqlAnnotation::ty("String").into());

        let gql = annotations.graphql().unwrap();
        assert_eq!(gql.r#type.as_deref(), Some("String"));
        assert!(gql.skip.contains(&SkipMode::MutationUpdateInput));
    }

    #[test]
    fn other_annotations_are_replaced() {
        let mut annotations = Annotations::new();
        annotations.insert(Annotation::foreign("Other", json!(1)));
        annotations.insert(Annotation::foreign("Other", json!(2)));

        assert_eq!(
            annotations.get("Other"),
            Some(&Annotation::foreign("Other", json!(2)))
        );
    }

    #[test]
    fn fedx_wire_shape() {
        let marker = Annotation::Fedx(FedxAnnotation::NamespacedData);

        assert_eq!(
            marker.to_json(),
            json!({ "IsNamespacedDataJSONField": true, "ExternalEdge": null })
        );
    }

    #[test]
    fn fedx_payload_must_pick_one_shape() {
        let both = json!({
            "IsNamespacedDataJSONField": true,
            "ExternalEdge": { "EdgeName": "Tenant" }
        });
        let neither = json!({});
        let unknown = json!({ "Surprise": 1 });

        for payload in [both, neither, unknown] {
            assert!(serde_json::from_value::<FedxAnnotation>(payload).is_err());
        }
    }

    #[test]
    fn deserialized_annotations_are_raw() {
        let annotations: Annotations =
            serde_json::from_value(json!({ "FEDX": { "IsNamespacedDataJSONField": true } }))
                .unwrap();

        assert!(matches!(
            annotations.get(ANNOTATION_NAME),
            Some(Annotation::Foreign { .. })
        ));
    }
}
