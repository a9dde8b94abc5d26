//! Organization resource
//!
//! This module provides the Organization shape returned by the organization
//! endpoints. An organization embeds its identity, members, events and the
//! tickets it has saved.

use chrono::{DateTime, Utc};
use contract_core::{ContractError, ContractResult, Location};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::event::{Event, EventTicket};
use crate::identity::OrganizationIdentity;
use crate::membership::OrganizationMember;
use crate::roles::OrganizationMemberRole;

/// An organization that publishes events.
///
/// # Architecture
///
/// ```text
/// Organization
///   ├─ OrganizationIdentity (profile + social links + counters)
///   ├─ Members (OrganizationMember, ranked by role)
///   ├─ Events
///   │     └─ EventTicket
///   └─ Saved tickets
/// ```
///
/// # Examples
///
/// ```
/// use contract_organizations::{Organization, OrganizationIdentity};
///
/// let org = Organization::new("acme-events", OrganizationIdentity::new("Acme Events"));
/// assert_eq!(org.slug, "acme-events");
/// assert!(org.members.is_empty());
/// assert!(!org.verified);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Unique identifier
    pub id: String,

    /// URL-friendly slug (unique across the platform)
    pub slug: String,

    /// Public identity
    pub identity: OrganizationIdentity,

    /// Members, in join order
    pub members: Vec<OrganizationMember>,

    /// Optional address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    /// Events organized
    pub events: Vec<Event>,

    /// Tickets the organization saved
    pub saved_tickets: Vec<EventTicket>,

    /// Whether the organization has been verified
    pub verified: bool,

    /// When the organization was last updated
    pub updated_at: DateTime<Utc>,

    /// When the organization was created
    pub created_at: DateTime<Utc>,
}

impl Organization {
    /// Creates an organization.
    ///
    /// The organization is created with:
    /// - A newly generated UUID v7 ID
    /// - No members, events or saved tickets
    /// - Unverified status
    /// - Current timestamp for created_at and updated_at
    pub fn new(slug: impl Into<String>, identity: OrganizationIdentity) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7().to_string(),
            slug: slug.into(),
            identity,
            members: Vec::new(),
            location: None,
            events: Vec::new(),
            saved_tickets: Vec::new(),
            verified: false,
            updated_at: now,
            created_at: now,
        }
    }

    /// Membership of the given user, if any.
    pub fn member(&self, user_id: &str) -> Option<&OrganizationMember> {
        self.members.iter().find(|m| m.user_id() == user_id)
    }

    /// Role of the given user, if they are a member.
    pub fn role_of(&self, user_id: &str) -> Option<OrganizationMemberRole> {
        self.member(user_id).map(|m| m.role)
    }

    /// Members holding the Owner role.
    pub fn owners(&self) -> impl Iterator<Item = &OrganizationMember> {
        self.members
            .iter()
            .filter(|m| m.role == OrganizationMemberRole::Owner)
    }

    /// Check if the identity counters match the embedded collections.
    ///
    /// `viewsCount` has no collection to compare against and is ignored.
    pub fn counters_consistent(&self) -> bool {
        let metadata = self.identity.metadata();
        metadata.events_count == self.events.len() as u64
            && metadata.members_count == self.members.len() as u64
    }

    /// Check the resource invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidRange`] if `updatedAt` precedes
    /// `createdAt`.
    pub fn validate(&self) -> ContractResult<()> {
        if self.updated_at < self.created_at {
            return Err(ContractError::InvalidRange(format!(
                "updatedAt ({}) precedes createdAt ({})",
                self.updated_at.to_rfc3339(),
                self.created_at.to_rfc3339()
            )));
        }
        Ok(())
    }
}
