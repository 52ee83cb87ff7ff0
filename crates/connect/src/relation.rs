mod many;
pub use many::ManyRelation;

mod one;
pub use one::OneRelation;
