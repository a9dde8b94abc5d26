//! Endpoint signatures
//!
//! An endpoint signature binds an HTTP method and a path template to the
//! shapes of its response and (optional) request body. Signatures are static
//! data: they describe call sites for client generators and route tables for
//! servers, they never perform a request.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ContractError, ContractResult};

crate::wire_enum! {
    /// HTTP methods used by endpoint signatures.
    pub enum HttpMethod {
        /// Read a resource or collection
        Get => "GET",
        /// Create a resource
        Post => "POST",
        /// Replace a resource
        Put => "PUT",
        /// Partially update a resource
        Patch => "PATCH",
        /// Delete a resource
        Delete => "DELETE",
    }
}

impl HttpMethod {
    /// Check if requests with this method carry a body by convention.
    pub fn expects_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }
}

/// Static description of one endpoint.
///
/// Path templates use `:name` segments for parameters, e.g.
/// `/organizations/:id`.
///
/// # Examples
///
/// ```
/// use contract_core::{EndpointSignature, HttpMethod};
///
/// let sig = EndpointSignature {
///     method: HttpMethod::Get,
///     path: "/organizations/:id",
///     response: "Organization",
///     body: None,
/// };
/// assert_eq!(sig.path_params(), vec!["id"]);
/// assert_eq!(sig.render(&[("id", "org_42")]).unwrap(), "/organizations/org_42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointSignature {
    /// HTTP method
    pub method: HttpMethod,

    /// Path template
    pub path: &'static str,

    /// Name of the response shape (`[]` suffix for collections)
    pub response: &'static str,

    /// Name of the request body shape, if the endpoint takes one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<&'static str>,
}

impl EndpointSignature {
    /// The `(method, path)` pair identifying this endpoint.
    pub fn key(&self) -> (HttpMethod, &'static str) {
        (self.method, self.path)
    }

    /// Check if this endpoint takes a request body.
    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }

    /// Names of the path parameters, in template order.
    pub fn path_params(&self) -> Vec<&'static str> {
        self.path
            .split('/')
            .filter_map(|segment| segment.strip_prefix(':'))
            .collect()
    }

    /// Substitute path parameters into the template.
    ///
    /// Values are inserted verbatim; percent-encoding is left to the
    /// transport layer. Extra parameters are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::MissingPathParam`] for the first template
    /// parameter without a value.
    pub fn render(&self, params: &[(&str, &str)]) -> ContractResult<String> {
        let mut rendered = String::with_capacity(self.path.len());

        for (i, segment) in self.path.split('/').enumerate() {
            if i > 0 {
                rendered.push('/');
            }
            match segment.strip_prefix(':') {
                Some(name) => {
                    let value = params
                        .iter()
                        .find(|(key, _)| *key == name)
                        .map(|(_, value)| *value)
                        .ok_or_else(|| ContractError::MissingPathParam(name.to_string()))?;
                    rendered.push_str(value);
                }
                None => rendered.push_str(segment),
            }
        }

        Ok(rendered)
    }
}

impl fmt::Display for EndpointSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.method, self.path, self.response)?;
        if let Some(body) = self.body {
            write!(f, " ({body})")?;
        }
        Ok(())
    }
}

/// A typed endpoint.
///
/// Implemented by zero-sized marker types, one per endpoint. The associated
/// types let a client generator produce call sites whose request and response
/// types are checked at compile time; endpoints without a body use `()`.
pub trait Endpoint {
    /// HTTP method
    const METHOD: HttpMethod;

    /// Path template
    const PATH: &'static str;

    /// Name of the response shape
    const RESPONSE: &'static str;

    /// Name of the request body shape
    const BODY: Option<&'static str>;

    /// Response payload type
    type Response: Serialize + DeserializeOwned;

    /// Request body type
    type Body: Serialize + DeserializeOwned;

    /// Static signature of this endpoint.
    fn signature() -> EndpointSignature {
        EndpointSignature {
            method: Self::METHOD,
            path: Self::PATH,
            response: Self::RESPONSE,
            body: Self::BODY,
        }
    }
}
