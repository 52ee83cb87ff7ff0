use super::Error;

/// Error when a value cannot be encoded to, or decoded from, JSON.
#[derive(Debug)]
pub(super) struct SerializationFailure {
    source: serde_json::Error,
}

impl std::error::Error for SerializationFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl core::fmt::Display for SerializationFailure {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "serialization failure: {}", self.source)
    }
}

impl Error {
    /// Creates a serialization failure error.
    pub fn serialization_failure(source: serde_json::Error) -> Error {
        Error::from(super::ErrorKind::SerializationFailure(SerializationFailure {
            source,
        }))
    }

    /// Returns `true` if this error is a serialization failure.
    pub fn is_serialization_failure(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::SerializationFailure(_))
    }
}
