mod entity;
mod field;
mod index;
mod schema;

pub use entity::Entity;
pub use field::{Field, FieldDefault, FieldKind, FieldList, ValueType};
pub use index::Index;
pub use schema::Schema;
