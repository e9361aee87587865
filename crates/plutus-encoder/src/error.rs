use plutus_data::ConstrError;
use thiserror::Error;

use crate::address::AddressKind;

/// Problems found while resolving a field or container annotation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectiveError {
    #[error("unknown directive kind `{0}`")]
    UnknownKind(String),
    #[error("unknown directive modifier `{0}`")]
    UnknownModifier(String),
    #[error("constructor index `{0}` is not a number")]
    InvalidConstructor(String),
    #[error("container directive must be `DefList`, found `{0}`")]
    UnsupportedContainer(String),
    #[error(transparent)]
    Range(#[from] ConstrError),
}

/// Error type for a single encode call. Any variant aborts the whole call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("schema error on `{field}`: {reason}")]
    Schema {
        field: String,
        reason: DirectiveError,
    },
    #[error("field `{field}` is declared {expected} but holds {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("field `{field}` holds invalid hex text `{text}`")]
    InvalidHex { field: String, text: String },
    #[error("constructor index {index} is outside the supported range 0..=1400")]
    UnsupportedConstructorRange { index: i64 },
    #[error("unsupported address kind: {kind}")]
    UnsupportedAddressKind { kind: AddressKind },
    #[error("malformed address: {0}")]
    MalformedAddress(String),
    #[error("record nesting exceeds the maximum depth of {limit}")]
    DepthExceeded { limit: usize },
}

impl EncodeError {
    /// Attaches a field name to a directive failure. Out-of-range constructor
    /// indices surface as [`EncodeError::UnsupportedConstructorRange`].
    pub fn schema(field: impl Into<String>, reason: DirectiveError) -> Self {
        match reason {
            DirectiveError::Range(ConstrError::UnsupportedConstructorRange { index }) => {
                Self::UnsupportedConstructorRange { index }
            }
            reason => Self::Schema {
                field: field.into(),
                reason,
            },
        }
    }
}

impl From<ConstrError> for EncodeError {
    fn from(err: ConstrError) -> Self {
        match err {
            ConstrError::UnsupportedConstructorRange { index } => {
                Self::UnsupportedConstructorRange { index }
            }
            other => Self::Schema {
                field: "<constructor>".into(),
                reason: DirectiveError::Range(other),
            },
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid encoder config: {0}")]
    Toml(String),
    #[error("invalid encoder config value: {0}")]
    Invalid(String),
}
