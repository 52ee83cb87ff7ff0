use super::Relation;
use crate::schema::Name;
use std::fmt;

/// Schema of a model as the backend describes it.
#[derive(Debug, Clone)]
pub struct Model {
    /// Uniquely identifies the model within the process
    pub id: ModelId,

    /// Name of the model
    pub name: Name,

    /// Name of the primary key field
    pub primary_key: String,

    /// Relations declared by the model
    pub relations: Vec<Relation>,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ModelId(pub usize);

impl Model {
    pub fn new(id: ModelId, name: &str, primary_key: impl Into<String>) -> Self {
        Self {
            id,
            name: Name::new(name),
            primary_key: primary_key.into(),
            relations: vec![],
        }
    }

    pub fn with_relation(mut self, relation: Relation) -> Self {
        self.relations.push(relation);
        self
    }

    /// Find a relation by name. The name may be given in snake_case or
    /// camelCase.
    pub fn relation(&self, name: &str) -> Option<&Relation> {
        let name = Name::new(name);
        self.relations
            .iter()
            .find(|relation| Name::new(&relation.name) == name)
    }

    /// Names of the relations to eager load, prefixed with `parent.` when the
    /// model is itself being loaded as a relation of `parent`.
    pub fn with_relations(&self, parent: Option<&str>) -> Vec<String> {
        self.relations
            .iter()
            .map(|relation| match parent {
                Some(parent) if !parent.is_empty() => format!("{parent}.{}", relation.name),
                _ => relation.name.clone(),
            })
            .collect()
    }

    /// Value of the `include` query parameter requesting every relation of
    /// the model.
    pub fn include_param(&self, parent: Option<&str>) -> String {
        self.with_relations(parent).join(",")
    }
}

impl From<&Model> for ModelId {
    fn from(value: &Model) -> Self {
        value.id
    }
}

impl fmt::Debug for ModelId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ModelId({})", self.0)
    }
}
