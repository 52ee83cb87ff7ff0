use crate::{AttributeKind, ModelId};

/// State shared by every attribute declared on a model.
///
/// The parent is recorded by its [`ModelId`] so that attributes can be built
/// while the parent model itself is still being constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute {
    parent: ModelId,
    kind: AttributeKind,
}

impl Attribute {
    pub fn new(parent: ModelId, kind: AttributeKind) -> Self {
        Self { parent, kind }
    }

    /// The model declaring the attribute.
    pub fn parent(&self) -> ModelId {
        self.parent
    }

    pub fn kind(&self) -> AttributeKind {
        self.kind
    }
}
