//! Membership shape
//!
//! A member links a user to an organization with a ranked role.

use chrono::{DateTime, Utc};
use contract_core::User;
use serde::{Deserialize, Serialize};

use crate::roles::OrganizationMemberRole;

/// A user's membership in an organization.
///
/// The user is embedded in full, as returned by the API.
///
/// # Examples
///
/// ```
/// use contract_core::{Profile, ProfileMetadata, User};
/// use contract_organizations::{OrganizationMember, OrganizationMemberRole};
///
/// let user = User::new("usr_1", "jane@example.com", Profile::new("Jane", ProfileMetadata::default()));
/// let member = OrganizationMember::new(user, OrganizationMemberRole::Manager);
/// assert_eq!(member.user_id(), "usr_1");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationMember {
    /// The member's account
    pub user: User,

    /// Role within the organization
    pub role: OrganizationMemberRole,

    /// When the user joined
    pub created_at: DateTime<Utc>,
}

impl OrganizationMember {
    /// Creates a membership that starts now.
    pub fn new(user: User, role: OrganizationMemberRole) -> Self {
        Self {
            user,
            role,
            created_at: Utc::now(),
        }
    }

    /// ID of the member's account.
    pub fn user_id(&self) -> &str {
        &self.user.id
    }
}
