//! Organization endpoint catalog
//!
//! | Method | Path | Response | Body |
//! |---|---|---|---|
//! | GET | /organizations | Organization[] | |
//! | GET | /organizations/:id | Organization | |
//! | POST | /organizations | Organization | CreateOrganizationDto |
//! | PUT | /organizations/:id | Organization | UpdateOrganizationDto |
//! | DELETE | /organizations/:id | boolean | |

use contract_core::{Endpoint, EndpointSignature, HttpMethod};

use crate::dto::{CreateOrganizationDto, UpdateOrganizationDto};
use crate::organization::Organization;

const COLLECTION: &str = "/organizations";
const ITEM: &str = "/organizations/:id";

/// `GET /organizations`
#[derive(Debug, Clone, Copy)]
pub struct ListOrganizations;

impl Endpoint for ListOrganizations {
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = COLLECTION;
    const RESPONSE: &'static str = "Organization[]";
    const BODY: Option<&'static str> = None;
    type Response = Vec<Organization>;
    type Body = ();
}

/// `GET /organizations/:id`
#[derive(Debug, Clone, Copy)]
pub struct GetOrganization;

impl Endpoint for GetOrganization {
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = ITEM;
    const RESPONSE: &'static str = "Organization";
    const BODY: Option<&'static str> = None;
    type Response = Organization;
    type Body = ();
}

/// `POST /organizations`
#[derive(Debug, Clone, Copy)]
pub struct CreateOrganization;

impl Endpoint for CreateOrganization {
    const METHOD: HttpMethod = HttpMethod::Post;
    const PATH: &'static str = COLLECTION;
    const RESPONSE: &'static str = "Organization";
    const BODY: Option<&'static str> = Some("CreateOrganizationDto");
    type Response = Organization;
    type Body = CreateOrganizationDto;
}

/// `PUT /organizations/:id`
#[derive(Debug, Clone, Copy)]
pub struct UpdateOrganization;

impl Endpoint for UpdateOrganization {
    const METHOD: HttpMethod = HttpMethod::Put;
    const PATH: &'static str = ITEM;
    const RESPONSE: &'static str = "Organization";
    const BODY: Option<&'static str> = Some("UpdateOrganizationDto");
    type Response = Organization;
    type Body = UpdateOrganizationDto;
}

/// `DELETE /organizations/:id`
///
/// Responds `true` when the organization was deleted.
#[derive(Debug, Clone, Copy)]
pub struct DeleteOrganization;

impl Endpoint for DeleteOrganization {
    const METHOD: HttpMethod = HttpMethod::Delete;
    const PATH: &'static str = ITEM;
    const RESPONSE: &'static str = "boolean";
    const BODY: Option<&'static str> = None;
    type Response = bool;
    type Body = ();
}

/// Every endpoint of the organizations resource.
///
/// # Examples
///
/// ```
/// use contract_core::HttpMethod;
/// use contract_organizations::OrganizationEndpoints;
///
/// let sig = OrganizationEndpoints::Delete.signature();
/// assert_eq!(sig.method, HttpMethod::Delete);
/// assert_eq!(sig.render(&[("id", "org_1")]).unwrap(), "/organizations/org_1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrganizationEndpoints {
    /// `GET /organizations`
    List,
    /// `GET /organizations/:id`
    Get,
    /// `POST /organizations`
    Create,
    /// `PUT /organizations/:id`
    Update,
    /// `DELETE /organizations/:id`
    Delete,
}

impl OrganizationEndpoints {
    /// All endpoints, in catalog order.
    pub const ALL: [Self; 5] = [
        Self::List,
        Self::Get,
        Self::Create,
        Self::Update,
        Self::Delete,
    ];

    /// Static signature of this endpoint.
    pub fn signature(&self) -> EndpointSignature {
        match self {
            Self::List => ListOrganizations::signature(),
            Self::Get => GetOrganization::signature(),
            Self::Create => CreateOrganization::signature(),
            Self::Update => UpdateOrganization::signature(),
            Self::Delete => DeleteOrganization::signature(),
        }
    }

    /// Signatures of every endpoint, in catalog order.
    pub fn signatures() -> Vec<EndpointSignature> {
        Self::ALL.iter().map(Self::signature).collect()
    }

    /// Find the endpoint declared for a method and path template.
    pub fn find(method: HttpMethod, path: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|endpoint| endpoint.signature().key() == (method, path))
    }
}
