/// Discriminates the variants of model attributes.
///
/// Each attribute records its kind when it is constructed; the kind never
/// changes afterwards.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    /// Reference to at most one related model
    RelOne,

    /// Reference to a collection of related models
    RelMany,
}

impl AttributeKind {
    pub fn is_relation(self) -> bool {
        matches!(self, Self::RelOne | Self::RelMany)
    }

    pub fn is_many(self) -> bool {
        matches!(self, Self::RelMany)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::RelOne => "rel_one",
            Self::RelMany => "rel_many",
        }
    }
}

impl std::fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
