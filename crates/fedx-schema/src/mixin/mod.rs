//! Reusable bundles of fields, indexes and annotations.
//!
//! Mixins compose by concatenation: an entity applies each one in the order
//! given and keeps every contribution. Two mixins declaring the same field is
//! reported by schema validation rather than resolved here.

mod external_edge;
mod namespaced_data;
mod primary_key;
mod timestamps;

pub use external_edge::{ExternalEdge, ExternalEdgeConfig, ExternalEdgeOption};
pub use namespaced_data::NamespacedData;
pub use primary_key::PrimaryKey;
pub use timestamps::Timestamps;

use crate::{
    annotation::Annotation,
    node::{Field, Index},
};

///
/// Mixin
///

pub trait Mixin {
    fn fields(&self) -> Vec<Field> {
        Vec::new()
    }

    fn indexes(&self) -> Vec<Index> {
        Vec::new()
    }

    /// Entity-level annotations.
    fn annotations(&self) -> Vec<Annotation> {
        Vec::new()
    }
}

/// Shorthand for `ExternalEdge::new`.
#[must_use]
pub fn external_edge(options: impl IntoIterator<Item = ExternalEdgeOption>) -> ExternalEdge {
    ExternalEdge::new(options)
}
