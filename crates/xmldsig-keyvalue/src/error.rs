use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyValueError {
    /// A required input reference was not supplied.
    #[error("Invalid argument: {0} must not be absent")]
    InvalidArgument(&'static str),

    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    /// `Seed` and `PgenCounter` travel together.
    #[error("Inconsistent optional pair: {present} present without {missing}")]
    InconsistentOptionalPair {
        present: &'static str,
        missing: &'static str,
    },

    #[error("Malformed value in {field}: {reason}")]
    MalformedValue { field: String, reason: String },

    #[error("Value too large in {field}: {len} bytes exceeds limit of {max}")]
    ValueTooLarge {
        field: String,
        len: usize,
        max: usize,
    },

    #[error("Key value holds no key parameters")]
    EmptyKey,

    #[error("Unexpected element: expected {expected}, found {found}")]
    UnexpectedElement { expected: String, found: String },

    #[error("Unsupported key value: {0}")]
    UnsupportedKeyValue(String),

    #[error("XML error: {0}")]
    Xml(String),
}

impl KeyValueError {
    pub(crate) fn malformed(field: &str, reason: impl ToString) -> Self {
        Self::MalformedValue {
            field: field.to_owned(),
            reason: reason.to_string(),
        }
    }
}

impl From<quick_xml::Error> for KeyValueError {
    fn from(err: quick_xml::Error) -> Self {
        Self::Xml(err.to_string())
    }
}

pub type KeyValueResult<T> = Result<T, KeyValueError>;
