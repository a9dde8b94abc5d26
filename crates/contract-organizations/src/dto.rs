//! Request payloads
//!
//! Bodies accepted by the organization endpoints and by ticket creation.
//! Invariant checks are opt-in through `validate`; decoding never runs them.

use chrono::{DateTime, Utc};
use contract_core::{ContractError, ContractResult, Currency, Location};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::event::{OrganizationEventTicketCategory, OrganizationEventTicketType};
use crate::identity::OrganizationSocialLink;

/// Body of `POST /organizations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrganizationDto {
    /// URL-friendly slug (must be unique)
    pub slug: String,

    /// Display name
    pub name: String,

    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Optional address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    /// Social links
    #[serde(default)]
    pub social_links: Vec<OrganizationSocialLink>,
}

impl CreateOrganizationDto {
    /// Creates a payload with only the required fields.
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            description: None,
            location: None,
            social_links: Vec::new(),
        }
    }
}

/// Body of `PUT /organizations/:id`.
///
/// Every field is optional; absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrganizationDto {
    /// New slug
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// New display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    /// Replacement social links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_links: Option<Vec<OrganizationSocialLink>>,
}

impl UpdateOrganizationDto {
    /// Check if the payload changes nothing.
    pub fn is_empty(&self) -> bool {
        self.slug.is_none()
            && self.name.is_none()
            && self.description.is_none()
            && self.location.is_none()
            && self.social_links.is_none()
    }
}

/// Payload creating a ticket for one of an organization's events.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use contract_core::Currency;
/// use contract_organizations::{CreateOrganizationEventTicketDto, OrganizationEventTicketType};
///
/// let ticket = CreateOrganizationEventTicketDto::new(
///     "General admission",
///     25.5,
///     100,
///     Currency::Eur,
///     Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
/// );
/// assert_eq!(ticket.kind, OrganizationEventTicketType::Paid);
/// assert!(ticket.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrganizationEventTicketDto {
    /// Ticket ID, assigned by the client or the server
    pub id: String,

    /// Ticket name
    pub name: String,

    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Unit price in `currency`
    #[serde(serialize_with = "contract_core::wire::finite_f64")]
    pub price: f64,

    /// Number of tickets to put on sale
    pub quantity: u32,

    /// Pricing model
    #[serde(rename = "type")]
    pub kind: OrganizationEventTicketType,

    /// Audience category
    pub category: OrganizationEventTicketCategory,

    /// Price currency
    pub currency: Currency,

    /// Whether the ticket is listed publicly
    pub is_visible: bool,

    /// Whether `price` already includes service fees
    pub is_fees_included: bool,

    /// Start of the sales window
    pub start_at: DateTime<Utc>,

    /// End of the sales window
    pub end_at: DateTime<Utc>,
}

impl CreateOrganizationEventTicketDto {
    /// Creates a visible, standard ticket with a fresh UUID v7 id.
    ///
    /// The type is `Paid` for a positive price and `Free` otherwise.
    pub fn new(
        name: impl Into<String>,
        price: f64,
        quantity: u32,
        currency: Currency,
        start_at: DateTime<Utc>,
        end_at: DateTime<Utc>,
    ) -> Self {
        let kind = if price > 0.0 {
            OrganizationEventTicketType::Paid
        } else {
            OrganizationEventTicketType::Free
        };

        Self {
            id: Uuid::now_v7().to_string(),
            name: name.into(),
            description: None,
            price,
            quantity,
            kind,
            category: OrganizationEventTicketCategory::default(),
            currency,
            is_visible: true,
            is_fees_included: false,
            start_at,
            end_at,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the pricing model.
    pub fn with_type(mut self, kind: OrganizationEventTicketType) -> Self {
        self.kind = kind;
        self
    }

    /// Set the audience category.
    pub fn with_category(mut self, category: OrganizationEventTicketCategory) -> Self {
        self.category = category;
        self
    }

    /// Mark the price as including service fees.
    pub fn with_fees_included(mut self) -> Self {
        self.is_fees_included = true;
        self
    }

    /// Hide the ticket from public listings.
    pub fn hidden(mut self) -> Self {
        self.is_visible = false;
        self
    }

    /// Check the payload invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidRange`] if the price is negative or
    /// not finite, or if the sales window does not end after it starts.
    pub fn validate(&self) -> ContractResult<()> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ContractError::InvalidRange(format!(
                "price must be a non-negative amount, got {}",
                self.price
            )));
        }
        if self.end_at <= self.start_at {
            return Err(ContractError::InvalidRange(format!(
                "endAt ({}) must be after startAt ({})",
                self.end_at.to_rfc3339(),
                self.start_at.to_rfc3339()
            )));
        }
        Ok(())
    }
}
