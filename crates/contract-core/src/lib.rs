//! # Contract Core
//!
//! Shared machinery for the REST API contract crates.
//!
//! ## Overview
//!
//! The contract-core crate provides:
//! - **Wire enums**: `wire_enum!` for closed string enumerations with a fixed token table
//! - **Endpoints**: `HttpMethod`, `EndpointSignature` and the typed `Endpoint` trait
//! - **Errors**: `ContractError`, the categories a payload can violate a shape with
//! - **Shared shapes**: `Profile`, `ProfileMetadata`, `Location`, `User`, `Currency`
//!
//! ## Wire Conventions
//!
//! - Field names are camelCase
//! - Timestamps are RFC 3339 strings (`2024-01-01T00:00:00Z`)
//! - Absent optional fields decode as `None` and are omitted on encode
//! - Unknown enumeration values are rejected, never defaulted
//!
//! ## Usage
//!
//! ```rust
//! use contract_core::{wire, Currency, ContractError};
//!
//! let currency: Currency = wire::decode("\"EUR\"").unwrap();
//! assert_eq!(currency, Currency::Eur);
//!
//! let err = wire::decode::<Currency>("\"XYZ\"").unwrap_err();
//! assert_eq!(err.error_code(), "UNKNOWN_ENUM_VALUE");
//! ```
//!
//! ## Feature Flags
//!
//! - `tracing` (default): debug events when a payload is rejected

pub mod currency;
pub mod endpoint;
pub mod error;
pub mod location;
pub mod profile;
pub mod user;
pub mod wire;

// Re-export main types for convenience
pub use currency::Currency;
pub use endpoint::{Endpoint, EndpointSignature, HttpMethod};
pub use error::{ContractError, ContractResult};
pub use location::Location;
pub use profile::{Profile, ProfileMetadata};
pub use user::User;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
