mod attribute;
pub use attribute::Attribute;

mod model;
pub use model::{generate_unique_id, Model};

pub mod relation;
pub use relation::{ManyRelation, OneRelation};

pub use connect_core::{
    bail, err,
    schema::app::{AttributeKind, ModelId, Relation, RelationType},
    stmt::{Type, Value, ValueRecord},
    Error, Result,
};

pub mod schema {
    pub use connect_core::schema::*;
}
