use super::Value;
use crate::{Error, Result};

use indexmap::IndexMap;
use std::ops;

/// Named fields of a record, in the order they appeared in the payload.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ValueRecord {
    pub fields: IndexMap<String, Value>,
}

impl ValueRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, returning `self` so records can be built inline.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Removes and returns the named field, or a missing field error.
    pub fn expect_field(&mut self, name: &str) -> Result<Value> {
        self.fields
            .shift_remove(name)
            .ok_or_else(|| Error::missing_field(name))
    }

    /// Removes and returns the named field, or `Value::Null` when absent.
    pub fn take_field(&mut self, name: &str) -> Value {
        self.fields.shift_remove(name).unwrap_or_default()
    }
}

impl ops::Deref for ValueRecord {
    type Target = IndexMap<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.fields
    }
}

impl ops::DerefMut for ValueRecord {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.fields
    }
}
