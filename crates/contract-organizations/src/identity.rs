//! Organization public identity
//!
//! The identity is the organization's public profile extended with social
//! links and organization-specific counters.

use std::collections::HashSet;

use contract_core::{Profile, ProfileMetadata};
use serde::{Deserialize, Serialize};

contract_core::wire_enum! {
    /// Social network an organization can link to.
    pub enum OrganizationSocialType {
        /// facebook.com page
        Facebook => "facebook",
        /// twitter.com / x.com account
        Twitter => "twitter",
        /// instagram.com account
        Instagram => "instagram",
        /// linkedin.com company page
        Linkedin => "linkedin",
        /// youtube.com channel
        Youtube => "youtube",
        /// Own website
        Website => "website",
    }
}

/// A link from an organization to one of its social accounts.
///
/// The URL is carried as-is; it is not checked to be well-formed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationSocialLink {
    /// Social network
    #[serde(rename = "type")]
    pub kind: OrganizationSocialType,

    /// Link target
    pub url: String,
}

impl OrganizationSocialLink {
    /// Creates a social link.
    pub fn new(kind: OrganizationSocialType, url: impl Into<String>) -> Self {
        Self {
            kind,
            url: url.into(),
        }
    }
}

/// Profile counters of an organization.
///
/// Extends [`ProfileMetadata`]; on the wire the base counters and the
/// organization counters share one object. The counters are denormalized
/// and are expected, not guaranteed, to match the organization's
/// collections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationMetadata {
    /// Base profile counters
    #[serde(flatten)]
    pub profile: ProfileMetadata,

    /// Number of events published by the organization
    pub events_count: u64,

    /// Number of profile views
    pub views_count: u64,

    /// Number of members
    pub members_count: u64,
}

/// Public identity of an organization.
///
/// # Examples
///
/// ```
/// use contract_organizations::{OrganizationIdentity, OrganizationSocialLink, OrganizationSocialType};
///
/// let identity = OrganizationIdentity::new("Acme Events")
///     .with_social_link(OrganizationSocialLink::new(OrganizationSocialType::Website, "https://acme.test"));
///
/// assert_eq!(identity.profile.name, "Acme Events");
/// assert!(identity.social_link(OrganizationSocialType::Website).is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationIdentity {
    /// Profile fields
    #[serde(flatten)]
    pub profile: Profile<OrganizationMetadata>,

    /// Links to social accounts, in display order
    pub social_links: Vec<OrganizationSocialLink>,
}

impl OrganizationIdentity {
    /// Creates an identity with zeroed counters and no social links.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            profile: Profile::new(name, OrganizationMetadata::default()),
            social_links: Vec::new(),
        }
    }

    /// Set the profile description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.profile = self.profile.with_description(description);
        self
    }

    /// Append a social link.
    pub fn with_social_link(mut self, link: OrganizationSocialLink) -> Self {
        self.social_links.push(link);
        self
    }

    /// Organization counters.
    pub fn metadata(&self) -> &OrganizationMetadata {
        &self.profile.metadata
    }

    /// First link of the given type, if any.
    pub fn social_link(&self, kind: OrganizationSocialType) -> Option<&OrganizationSocialLink> {
        self.social_links.iter().find(|link| link.kind == kind)
    }

    /// Check that no social type appears more than once.
    ///
    /// Duplicates are allowed by the shape; consumers that want one link
    /// per network can use this check.
    pub fn has_unique_social_types(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.social_links.len());
        self.social_links.iter().all(|link| seen.insert(link.kind))
    }
}
