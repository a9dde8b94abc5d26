//! User account shape as exposed by the REST API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::profile::Profile;

/// A user account.
///
/// # Examples
///
/// ```
/// use contract_core::{Profile, ProfileMetadata, User};
///
/// let user = User::new("usr_1", "jane@example.com", Profile::new("Jane", ProfileMetadata::default()));
/// assert_eq!(user.created_at, user.updated_at);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier
    pub id: String,

    /// Primary email address
    pub email: String,

    /// Public profile
    pub identity: Profile,

    /// When the account was last updated
    pub updated_at: DateTime<Utc>,

    /// When the account was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a user stamped with the current time.
    pub fn new(id: impl Into<String>, email: impl Into<String>, identity: Profile) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            email: email.into(),
            identity,
            updated_at: now,
            created_at: now,
        }
    }
}
