use crate::{Result, Value};
use connect_core::{
    schema::app::{self, ModelId},
    stmt::ValueRecord,
};

/// Generate a unique model ID at runtime.
///
/// This function uses a global atomic counter to ensure each call returns
/// a unique ModelId. IDs start at 0 and increment with each call.
/// This is thread-safe and can be called concurrently.
pub fn generate_unique_id() -> ModelId {
    use std::sync::atomic::{AtomicUsize, Ordering};

    static NEXT_MODEL_ID: AtomicUsize = AtomicUsize::new(0);

    let id = NEXT_MODEL_ID.fetch_add(1, Ordering::Relaxed);
    ModelId(id)
}

/// A domain entity that can be the target of a relation attribute.
pub trait Model: Sized {
    /// Unique identifier for this model within the process.
    fn id() -> ModelId;

    /// The backend's description of the model and its relations.
    fn schema() -> app::Model;

    /// Load an instance of the model from a record of an API response.
    fn load(record: ValueRecord) -> Result<Self>;

    /// The current value of the named field, if the model exposes it.
    fn key_value(&self, field: &str) -> Option<Value>;
}
