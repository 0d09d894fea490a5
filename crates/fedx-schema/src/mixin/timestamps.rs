use crate::{
    annotation::{GraphqlAnnotation, SkipMode},
    mixin::Mixin,
    node::{Field, FieldDefault, Index},
};

///
/// Timestamps
///
/// `created_at` and `updated_at`, both system managed and indexed.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct Timestamps;

impl Mixin for Timestamps {
    fn fields(&self) -> Vec<Field> {
        let skip = || {
            GraphqlAnnotation::skip([SkipMode::MutationCreateInput, SkipMode::MutationUpdateInput])
        };

        vec![
            Field::time("created_at")
                .default(FieldDefault::Now)
                .immutable()
                .annotation(skip()),
            Field::time("updated_at")
                .default(FieldDefault::Now)
                .update_default(FieldDefault::Now)
                .immutable()
                .annotation(skip()),
        ]
    }

    fn indexes(&self) -> Vec<Index> {
        vec![Index::new(["created_at"]), Index::new(["updated_at"])]
    }
}
