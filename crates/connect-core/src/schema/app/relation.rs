use super::AttributeKind;
use crate::Result;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder for keys the backend has not reported.
const UNSET: &str = "unset";

fn unset() -> String {
    UNSET.to_string()
}

/// A relation declared on a backend model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    /// Name of the relation field on the parent model
    pub name: String,

    #[serde(rename = "type")]
    pub ty: RelationType,

    /// Name of the related model
    pub model: String,

    #[serde(default = "unset")]
    pub foreign_key: String,

    #[serde(default = "unset")]
    pub local_key: String,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationType {
    HasMany,
    MorphMany,
    BelongsTo,
    HasOne,
    BelongsToMany,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RelationJson<'a> {
    #[serde(flatten)]
    relation: &'a Relation,
    many: bool,
}

impl Relation {
    pub fn new(name: impl Into<String>, ty: RelationType, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty,
            model: model.into(),
            foreign_key: unset(),
            local_key: unset(),
        }
    }

    pub fn with_keys(mut self, foreign_key: impl Into<String>, local_key: impl Into<String>) -> Self {
        self.foreign_key = foreign_key.into();
        self.local_key = local_key.into();
        self
    }

    /// True when the relation points to more than one related instance.
    pub fn relates_to_many(&self) -> bool {
        self.ty.relates_to_many()
    }

    /// The kind of attribute that holds this relation on the client.
    pub fn attribute_kind(&self) -> AttributeKind {
        self.ty.attribute_kind()
    }

    pub fn has_keys(&self) -> bool {
        self.foreign_key != UNSET && self.local_key != UNSET
    }

    pub fn to_json(&self) -> Result<String> {
        let json = RelationJson {
            relation: self,
            many: self.relates_to_many(),
        };
        Ok(serde_json::to_string(&json)?)
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rel:{}:{}:{}:{}-{}",
            self.name, self.ty, self.model, self.foreign_key, self.local_key
        )
    }
}

impl RelationType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HasMany => "hasMany",
            Self::MorphMany => "morphMany",
            Self::BelongsTo => "belongsTo",
            Self::HasOne => "hasOne",
            Self::BelongsToMany => "belongsToMany",
        }
    }

    pub fn relates_to_many(self) -> bool {
        matches!(self, Self::HasMany | Self::MorphMany | Self::BelongsToMany)
    }

    pub fn attribute_kind(self) -> AttributeKind {
        if self.relates_to_many() {
            AttributeKind::RelMany
        } else {
            AttributeKind::RelOne
        }
    }
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
