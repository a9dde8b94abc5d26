//! Error types for contract decoding and invariant checks
//!
//! The contract shapes themselves never fail. These errors describe how a
//! value on the wire (or a value built by hand) fails to conform to them.

use thiserror::Error;

/// Contract violation error types.
///
/// Decoding failures are classified from the JSON layer; `InvalidRange` is
/// only produced by the opt-in `validate` checks on individual shapes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    /// A wire token or ordinal does not match any enumeration variant
    #[error("unknown {kind} value `{value}`")]
    UnknownEnumValue {
        /// Name of the enumeration (or `enum` when the JSON layer cannot tell)
        kind: String,
        /// The rejected wire value
        value: String,
    },

    /// A required field is absent from the payload
    #[error("missing required field `{0}`")]
    MissingRequiredField(String),

    /// A value has the wrong JSON type for its field
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// A value is structurally valid but semantically out of range
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// An endpoint path template was rendered without one of its parameters
    #[error("missing path parameter `{0}`")]
    MissingPathParam(String),

    /// The payload is not well-formed JSON
    #[error("malformed payload: {0}")]
    Malformed(String),
}

/// Result type for contract operations.
pub type ContractResult<T> = Result<T, ContractError>;

impl ContractError {
    /// Build an `UnknownEnumValue` error.
    pub fn unknown_value(kind: impl Into<String>, value: impl ToString) -> Self {
        Self::UnknownEnumValue {
            kind: kind.into(),
            value: value.to_string(),
        }
    }

    /// Check if this error was caused by the caller's payload rather than
    /// by the code using the contract.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ContractError::MissingPathParam(_))
    }

    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            ContractError::UnknownEnumValue { .. }
            | ContractError::MissingRequiredField(_)
            | ContractError::TypeMismatch(_)
            | ContractError::Malformed(_) => 400,

            ContractError::InvalidRange(_) => 422,

            ContractError::MissingPathParam(_) => 500,
        }
    }

    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            ContractError::UnknownEnumValue { .. } => "UNKNOWN_ENUM_VALUE",
            ContractError::MissingRequiredField(_) => "MISSING_REQUIRED_FIELD",
            ContractError::TypeMismatch(_) => "TYPE_MISMATCH",
            ContractError::InvalidRange(_) => "INVALID_RANGE",
            ContractError::MissingPathParam(_) => "MISSING_PATH_PARAM",
            ContractError::Malformed(_) => "MALFORMED_PAYLOAD",
        }
    }
}
