//! Public profile shapes
//!
//! A profile is the public face of an account (user or organization).
//! The metadata type is generic so that each account kind can extend the
//! base counters with its own.

use serde::{Deserialize, Serialize};

/// Public profile of an account.
///
/// # Examples
///
/// ```
/// use contract_core::{Profile, ProfileMetadata};
///
/// let profile = Profile::new("Acme Events", ProfileMetadata::default())
///     .with_description("Concerts and festivals");
/// assert_eq!(profile.name, "Acme Events");
/// assert_eq!(profile.metadata.followers_count, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile<M = ProfileMetadata> {
    /// Display name
    pub name: String,

    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Avatar image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// Banner image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_url: Option<String>,

    /// Public counters
    pub metadata: M,
}

impl<M> Profile<M> {
    /// Creates a profile with no description or images.
    pub fn new(name: impl Into<String>, metadata: M) -> Self {
        Self {
            name: name.into(),
            description: None,
            avatar_url: None,
            banner_url: None,
            metadata,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the avatar image URL.
    pub fn with_avatar_url(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }

    /// Set the banner image URL.
    pub fn with_banner_url(mut self, url: impl Into<String>) -> Self {
        self.banner_url = Some(url.into());
        self
    }
}

/// Counters shared by every profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileMetadata {
    /// Number of accounts following this profile
    #[serde(default)]
    pub followers_count: u64,
}
