//! Events and their tickets
//!
//! Events belong to an organization and reference it by id; tickets
//! reference their event by id. Neither embeds its parent, so the
//! `Organization -> Event -> EventTicket` nesting has no cycles.

use chrono::{DateTime, Utc};
use contract_core::{Currency, Location};
use serde::{Deserialize, Serialize};

contract_core::wire_enum! {
    /// Pricing model of a ticket.
    pub enum OrganizationEventTicketType {
        /// No charge
        Free => "free",
        /// Fixed price
        Paid => "paid",
        /// Pay what you want, `price` is the suggested amount
        Donation => "donation",
    }
}

contract_core::wire_enum! {
    /// Audience category of a ticket.
    pub enum OrganizationEventTicketCategory {
        /// General admission
        Standard => "standard",
        /// Premium access
        Vip => "vip",
        /// Admits several people
        Group => "group",
        /// Discounted early sale
        Early => "early",
    }
}

impl Default for OrganizationEventTicketCategory {
    fn default() -> Self {
        Self::Standard
    }
}

/// A ticket on sale for an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTicket {
    /// Unique identifier
    pub id: String,

    /// ID of the event this ticket admits to
    pub event: String,

    /// Ticket name
    pub name: String,

    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Unit price in `currency`
    #[serde(serialize_with = "contract_core::wire::finite_f64")]
    pub price: f64,

    /// Number of tickets on sale
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

    /// When the ticket was last updated
    pub updated_at: DateTime<Utc>,

    /// When the ticket was created
    pub created_at: DateTime<Utc>,
}

impl EventTicket {
    /// Check if the ticket is on sale at `at`.
    pub fn is_on_sale(&self, at: DateTime<Utc>) -> bool {
        self.is_visible && self.quantity > 0 && self.start_at <= at && at < self.end_at
    }
}

/// An event organized by an organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique identifier
    pub id: String,

    /// URL-friendly slug
    pub slug: String,

    /// Event title
    pub title: String,

    /// Short summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// ID of the organizing organization
    pub organization: String,

    /// Venue, absent for online events
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    /// Tickets on sale
    pub tickets: Vec<EventTicket>,

    /// When the event starts
    pub start_at: DateTime<Utc>,

    /// When the event ends
    pub end_at: DateTime<Utc>,

    /// When the event was last updated
    pub updated_at: DateTime<Utc>,

    /// When the event was created
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Check if the event has no physical venue.
    pub fn is_online(&self) -> bool {
        self.location.is_none()
    }

    /// Total number of tickets across all ticket kinds.
    pub fn total_quantity(&self) -> u64 {
        self.tickets.iter().map(|t| u64::from(t.quantity)).sum()
    }
}
