/// The type of a [`Value`](super::Value).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// The type of `Value::Null`
    Null,

    /// Boolean value
    Bool,

    /// Signed 64-bit integer
    I64,

    /// 64-bit floating point number
    F64,

    /// String type
    String,

    /// A record of named fields
    Record,

    /// A list of a single type. Empty lists have an item type of `Null`.
    List(Box<Type>),
}

impl Type {
    pub fn list(ty: impl Into<Self>) -> Self {
        Self::List(Box::new(ty.into()))
    }
}
