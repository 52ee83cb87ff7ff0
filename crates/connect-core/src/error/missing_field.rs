use super::Error;

/// Error when a record does not carry a field a model needs to load.
#[derive(Debug)]
pub(super) struct MissingField {
    name: Box<str>,
}

impl std::error::Error for MissingField {}

impl core::fmt::Display for MissingField {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "missing field `{}`", self.name)
    }
}

impl Error {
    /// Creates a missing field error.
    pub fn missing_field(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingField(MissingField {
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing field error.
    pub fn is_missing_field(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingField(_))
    }
}
