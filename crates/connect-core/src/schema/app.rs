//! Application-level schema

mod attribute_kind;
pub use attribute_kind::AttributeKind;

mod model;
pub use model::{Model, ModelId};

mod relation;
pub use relation::{Relation, RelationType};
