//! # Organizations Contract
//!
//! This crate declares the data-transfer shapes and resource types of the
//! organizations domain of the REST API.
//!
//! ## Overview
//!
//! The contract-organizations crate provides:
//! - **Organizations**: The organization resource with its identity and counters
//! - **Members**: Users linked to an organization with a ranked role
//! - **Social links**: Links to the organization's social accounts
//! - **Events**: Events and tickets embedded in organizations
//! - **DTOs**: Request bodies for organization and ticket creation
//! - **Endpoints**: The static catalog of organization endpoints
//!
//! ## Architecture
//!
//! ```text
//! Organization
//!   ├─ OrganizationIdentity ─→ Profile + OrganizationSocialLink[]
//!   ├─ OrganizationMember ─→ User + OrganizationMemberRole
//!   ├─ Event ─→ EventTicket
//!   └─ EventTicket (saved)
//!
//! OrganizationEndpoints ─→ EndpointSignature (method, path, response, body)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use contract_core::wire;
//! use contract_organizations::{Organization, OrganizationEndpoints, OrganizationIdentity};
//!
//! let org = Organization::new("acme-events", OrganizationIdentity::new("Acme Events"));
//! let json = wire::encode(&org).unwrap();
//! let back: Organization = wire::decode(&json).unwrap();
//! assert_eq!(back, org);
//!
//! let sig = OrganizationEndpoints::Get.signature();
//! assert_eq!(sig.render(&[("id", org.id.as_str())]).unwrap(), format!("/organizations/{}", org.id));
//! ```
//!
//! ## Feature Flags
//!
//! - `tracing` (default): forwards to `contract-core/tracing`

pub mod dto;
pub mod endpoints;
pub mod event;
pub mod identity;
pub mod membership;
pub mod organization;
pub mod roles;

// Re-export main types for convenience
pub use dto::{CreateOrganizationDto, CreateOrganizationEventTicketDto, UpdateOrganizationDto};
pub use endpoints::{
    CreateOrganization, DeleteOrganization, GetOrganization, ListOrganizations,
    OrganizationEndpoints, UpdateOrganization,
};
pub use event::{
    Event, EventTicket, OrganizationEventTicketCategory, OrganizationEventTicketType,
};
pub use identity::{
    OrganizationIdentity, OrganizationMetadata, OrganizationSocialLink, OrganizationSocialType,
};
pub use membership::OrganizationMember;
pub use organization::Organization;
pub use roles::OrganizationMemberRole;
