use super::{Value, ValueRecord};
use crate::{Error, Result};

impl TryFrom<serde_json::Value> for Value {
    type Error = Error;

    fn try_from(src: serde_json::Value) -> Result<Self> {
        use serde_json::Value as Json;

        Ok(match src {
            Json::Null => Self::Null,
            Json::Bool(v) => Self::Bool(v),
            Json::Number(n) => match n.as_i64() {
                Some(v) => Self::I64(v),
                None => match n.as_f64() {
                    Some(v) => Self::F64(v),
                    None => crate::bail!("number `{n}` is out of range"),
                },
            },
            Json::String(v) => Self::String(v),
            Json::Array(items) => Self::List(
                items
                    .into_iter()
                    .map(Value::try_from)
                    .collect::<Result<_>>()?,
            ),
            Json::Object(fields) => Self::Record(ValueRecord::try_from(fields)?),
        })
    }
}

impl TryFrom<serde_json::Map<String, serde_json::Value>> for ValueRecord {
    type Error = Error;

    fn try_from(src: serde_json::Map<String, serde_json::Value>) -> Result<Self> {
        let mut record = ValueRecord::new();

        for (name, value) in src {
            let value = Value::try_from(value)
                .map_err(|err| err.context(crate::err!("field `{name}`")))?;
            record.fields.insert(name, value);
        }

        Ok(record)
    }
}

impl Value {
    /// Parses a JSON document into a value.
    pub fn from_json(src: &str) -> Result<Self> {
        let json: serde_json::Value = serde_json::from_str(src)?;
        Value::try_from(json)
    }
}
