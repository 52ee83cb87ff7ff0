use crate::{Attribute, AttributeKind, Model, ModelId, Value};

use std::fmt;

/// A "has one" attribute: holds at most one related model on behalf of a
/// parent model.
///
/// The relation name and primary key name are fixed at construction. The
/// related value may be replaced or cleared at any time.
pub struct OneRelation<T> {
    attribute: Attribute,
    relation_name: String,
    primary_key: String,
    value: Option<T>,
}

impl<T: Model> OneRelation<T> {
    pub fn new(
        parent: ModelId,
        name: impl Into<String>,
        primary_key: impl Into<String>,
        value: Option<T>,
    ) -> Self {
        Self {
            attribute: Attribute::new(parent, AttributeKind::RelOne),
            relation_name: name.into(),
            primary_key: primary_key.into(),
            value,
        }
    }

    /// The related model, or `None` when no model is referenced.
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.value.as_mut()
    }

    /// Replaces the related model. `None` clears the reference.
    pub fn set(&mut self, value: Option<T>) {
        tracing::trace!(
            relation = %self.relation_name,
            present = value.is_some(),
            "set one relation"
        );
        self.value = value;
    }

    /// Clears the reference, returning the previously related model.
    pub fn take(&mut self) -> Option<T> {
        self.value.take()
    }

    /// Populates the relation from the value an API response carries for it.
    ///
    /// `Null` clears the relation and a record is loaded as `T`. On error the
    /// current value is kept.
    pub fn load(&mut self, input: Value) -> crate::Result<()> {
        let value = match input {
            Value::Null => None,
            Value::Record(record) => Some(T::load(record).map_err(|err| {
                tracing::debug!(relation = %self.relation_name, error = %err, "failed to load relation");
                err.context(crate::err!("relation `{}`", self.relation_name))
            })?),
            input => {
                tracing::debug!(relation = %self.relation_name, ty = ?input.infer_ty(), "unexpected relation payload");
                return Err(crate::Error::type_conversion(input, "Record")
                    .context(crate::err!("relation `{}`", self.relation_name)));
            }
        };

        self.set(value);
        Ok(())
    }

    /// The related model's value for the relation's primary key field.
    pub fn related_key(&self) -> Option<Value> {
        self.value
            .as_ref()
            .and_then(|value| value.key_value(&self.primary_key))
    }
}

impl<T> OneRelation<T> {
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

    pub fn is_some(&self) -> bool {
        self.value.is_some()
    }
}

impl<T: fmt::Debug> fmt::Debug for OneRelation<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value.as_ref() {
            Some(t) => t.fmt(fmt),
            None => {
                write!(fmt, "<none>")?;
                Ok(())
            }
        }
    }
}
