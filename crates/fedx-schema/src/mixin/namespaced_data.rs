use crate::{
    annotation::{FedxAnnotation, GraphqlAnnotation},
    mixin::Mixin,
    node::Field,
};

pub const NAMESPACE_MIN_LEN: usize = 5;
pub const NAMESPACE_MAX_LEN: usize = 64;

///
/// NamespacedData
///
/// A `namespace` key plus an opaque JSON `data` document. The data field is
/// marked so the stitching pass knows to register the `JSON` scalar.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct NamespacedData;

impl Mixin for NamespacedData {
    fn fields(&self) -> Vec<Field> {
        vec![
            Field::text("namespace")
                .not_empty()
                .min_len(NAMESPACE_MIN_LEN)
                .max_len(NAMESPACE_MAX_LEN)
                .annotation(GraphqlAnnotation::order_field("NAMESPACE")),
            Field::json("data")
                .annotation(GraphqlAnnotation::ty("JSON"))
                .annotation(FedxAnnotation::NamespacedData),
        ]
    }
}
