//! Postal location with coordinates

use serde::{Deserialize, Serialize};

/// A physical location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Street address
    pub address: String,

    /// City
    pub city: String,

    /// Postal code, when the country uses one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,

    /// Country name or code
    pub country: String,

    /// Latitude in decimal degrees
    #[serde(serialize_with = "crate::wire::finite_f64")]
    pub latitude: f64,

    /// Longitude in decimal degrees
    #[serde(serialize_with = "crate::wire::finite_f64")]
    pub longitude: f64,
}

impl Location {
    /// Creates a location without a postal code.
    pub fn new(
        address: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            address: address.into(),
            city: city.into(),
            zip_code: None,
            country: country.into(),
            latitude,
            longitude,
        }
    }

    /// Set the postal code.
    pub fn with_zip_code(mut self, zip_code: impl Into<String>) -> Self {
        self.zip_code = Some(zip_code.into());
        self
    }

    /// Check if the coordinates are within the WGS 84 ranges.
    pub fn has_valid_coordinates(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}
