//! Wire representation helpers
//!
//! This module fixes how contract values travel as JSON: the `wire_enum!`
//! macro for closed string enumerations, and decode/encode helpers that turn
//! `serde_json` failures into [`ContractError`] categories.

use serde::de::DeserializeOwned;
use serde::{de, ser, Serialize, Serializer};
use serde_json::error::Category;

use crate::error::{ContractError, ContractResult};

/// Declare a closed string enumeration with a fixed wire-token table.
///
/// The generated type serializes as its token and refuses any token that is
/// not in the table with [`ContractError::UnknownEnumValue`]. Tokens are
/// matched exactly; there is no case folding and no fallback variant.
///
/// # Examples
///
/// ```
/// use contract_core::wire_enum;
///
/// wire_enum! {
///     /// Delivery channel.
///     pub enum Channel {
///         /// Electronic mail
///         Email => "email",
///         /// Text message
///         Sms => "sms",
///     }
/// }
///
/// assert_eq!(Channel::Email.as_str(), "email");
/// assert_eq!("sms".parse::<Channel>().unwrap(), Channel::Sms);
/// assert!("fax".parse::<Channel>().is_err());
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $token:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Get the wire token of this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $token, )+
                }
            }

            /// Parse a value from its exact wire token.
            pub fn parse(s: &str) -> ::std::option::Option<Self> {
                match s {
                    $( $token => ::std::option::Option::Some(Self::$variant), )+
                    _ => ::std::option::Option::None,
                }
            }

            /// Get all values in declaration order.
            pub fn all() -> &'static [Self] {
                &[ $( Self::$variant, )+ ]
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::ContractError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Self::parse(s)
                    .ok_or_else(|| $crate::ContractError::unknown_value(stringify!($name), s))
            }
        }

        impl ::std::convert::TryFrom<::std::string::String> for $name {
            type Error = $crate::ContractError;

            fn try_from(s: ::std::string::String) -> ::std::result::Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let token: ::std::string::String =
                    $crate::__private::serde::Deserialize::deserialize(deserializer)?;
                Self::parse(&token)
                    .ok_or_else(|| $crate::wire::unknown_value_error(stringify!($name), &token))
            }
        }
    };
}

/// Decode a JSON payload into a contract shape.
///
/// # Errors
///
/// - [`ContractError::Malformed`] if the payload is not valid JSON
/// - [`ContractError::MissingRequiredField`] if a required field is absent
/// - [`ContractError::UnknownEnumValue`] if an enumeration value is unknown
/// - [`ContractError::TypeMismatch`] for any other shape mismatch
pub fn decode<T: DeserializeOwned>(payload: &str) -> ContractResult<T> {
    serde_json::from_str(payload).map_err(reject::<T>)
}

/// Decode an already-parsed JSON value into a contract shape.
///
/// Errors are classified the same way as [`decode`].
pub fn decode_value<T: DeserializeOwned>(value: serde_json::Value) -> ContractResult<T> {
    serde_json::from_value(value).map_err(reject::<T>)
}

/// Encode a contract value as a JSON string.
///
/// # Errors
///
/// - [`ContractError::InvalidRange`] if a field refuses its value, such as a
///   non-finite number
/// - [`ContractError::Malformed`] for anything JSON cannot represent
pub fn encode<T: Serialize>(value: &T) -> ContractResult<String> {
    serde_json::to_string(value).map_err(refuse)
}

/// Encode a contract value as a JSON value.
///
/// Errors are classified the same way as [`encode`].
pub fn encode_value<T: Serialize>(value: &T) -> ContractResult<serde_json::Value> {
    serde_json::to_value(value).map_err(refuse)
}

/// Serialize an `f64` that must stay a JSON number.
///
/// `serde_json` writes NaN and infinities as `null`, which no decoder of the
/// same shape accepts back. Use with `#[serde(serialize_with = "...")]`.
pub fn finite_f64<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        Err(ser::Error::custom(format_args!(
            "non-finite number `{value}` cannot be encoded"
        )))
    }
}

/// Build the deserializer error for a token outside an enumeration.
///
/// The message records the token's byte length, so [`classify`] recovers the
/// exact token whatever characters it contains.
pub fn unknown_value_error<E: de::Error>(kind: &str, value: &str) -> E {
    E::custom(format_args!(
        "unknown {kind} value ({} bytes): {value}",
        value.len()
    ))
}

fn refuse(err: serde_json::Error) -> ContractError {
    match err.classify() {
        Category::Data => ContractError::InvalidRange(err.to_string()),
        Category::Io | Category::Syntax | Category::Eof => ContractError::Malformed(err.to_string()),
    }
}

fn reject<T>(err: serde_json::Error) -> ContractError {
    let classified = classify(&err);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        shape = std::any::type_name::<T>(),
        code = classified.error_code(),
        error = %err,
        "Rejected contract payload"
    );

    classified
}

/// Map a `serde_json` error onto a contract error category.
pub fn classify(err: &serde_json::Error) -> ContractError {
    match err.classify() {
        Category::Io | Category::Syntax | Category::Eof => ContractError::Malformed(err.to_string()),
        Category::Data => classify_message(&strip_position(err)),
    }
}

/// Errors read from text end with " at line L column C"; value errors don't.
fn strip_position(err: &serde_json::Error) -> String {
    let message = err.to_string();
    if err.line() == 0 {
        return message;
    }
    let suffix = format!(" at line {} column {}", err.line(), err.column());
    match message.strip_suffix(&suffix) {
        Some(head) => head.to_string(),
        None => message,
    }
}

fn classify_message(message: &str) -> ContractError {
    if let Some((kind, value)) = unknown_token(message) {
        return ContractError::unknown_value(kind, value);
    }

    if let Some(rest) = message.strip_prefix("missing field `") {
        return ContractError::MissingRequiredField(until_backtick(rest).to_string());
    }

    // Derived enums: "unknown variant `x`, expected one of ..."
    if let Some(rest) = message.strip_prefix("unknown variant `") {
        let value = rest
            .rsplit_once("`, expected")
            .map_or_else(|| until_backtick(rest), |(value, _)| value);
        return ContractError::unknown_value("enum", value);
    }

    ContractError::TypeMismatch(message.to_string())
}

/// Parse a message built by [`unknown_value_error`].
fn unknown_token(message: &str) -> Option<(&str, &str)> {
    let rest = message.strip_prefix("unknown ")?;
    let (kind, rest) = rest.split_once(" value (")?;
    if kind.is_empty() || !kind.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    let (len, rest) = rest.split_once(" bytes): ")?;
    let len: usize = len.parse().ok()?;
    rest.get(..len).map(|value| (kind, value))
}

fn until_backtick(s: &str) -> &str {
    s.split('`').next().unwrap_or(s)
}
