use crate::{Attribute, AttributeKind, Model, ModelId, Value};

use std::fmt;

/// A "has many" attribute: holds the related models of a parent model.
pub struct ManyRelation<T> {
    attribute: Attribute,
    relation_name: String,
    primary_key: String,
    values: Vec<T>,
}

impl<T: Model> ManyRelation<T> {
    pub fn new(
        parent: ModelId,
        name: impl Into<String>,
        primary_key: impl Into<String>,
        values: Vec<T>,
    ) -> Self {
        Self {
            attribute: Attribute::new(parent, AttributeKind::RelMany),
            relation_name: name.into(),
            primary_key: primary_key.into(),
            values,
        }
    }

    pub fn get(&self) -> &[T] {
        &self.values
    }

    pub fn set(&mut self, values: Vec<T>) {
        tracing::trace!(
            relation = %self.relation_name,
            len = values.len(),
            "set many relation"
        );
        self.values = values;
    }

    pub fn push(&mut self, value: T) {
        self.values.push(value);
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Populates the relation from the value an API response carries for it.
    ///
    /// `Null` empties the relation; a list must contain only records. On error
    /// the current values are kept.
    pub fn load(&mut self, input: Value) -> crate::Result<()> {
        let items = match input {
            Value::Null => vec![],
            Value::List(items) => items,
            input => {
                tracing::debug!(relation = %self.relation_name, ty = ?input.infer_ty(), "unexpected relation payload");
                return Err(crate::Error::type_conversion(input, "List")
                    .context(crate::err!("relation `{}`", self.relation_name)));
            }
        };

        let mut values = Vec::with_capacity(items.len());

        for (index, item) in items.into_iter().enumerate() {
            let loaded = item.to_record().and_then(T::load).map_err(|err| {
                tracing::debug!(relation = %self.relation_name, index, error = %err, "failed to load relation item");
                err.context(crate::err!("relation `{}` item {index}", self.relation_name))
            })?;
            values.push(loaded);
        }

        self.set(values);
        Ok(())
    }

    /// Primary key values of the related models, in order.
    pub fn related_keys(&self) -> Vec<Value> {
        self.values
            .iter()
            .map(|value| value.key_value(&self.primary_key).unwrap_or_default())
            .collect()
    }
}

impl<T> ManyRelation<T> {
    pub fn relation_name(&self) -> &str {
        &self.relation_name
    }

    pub fn primary_key(&self) -> &str {
        &self.primary_key
    }

    pub fn kind(&self) -> AttributeKind {
        self.attribute.kind()
    }

    pub fn parent(&self) -> ModelId {
        self.attribute.parent()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<T: fmt::Debug> fmt::Debug for ManyRelation<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_list().entries(&self.values).finish()
    }
}
