use std::fmt;

use thiserror::Error;

use crate::entities::*;

/// Why a location lookup produced no result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeocodingErrorKind {
    /// No credentials for the mapping provider are configured.
    MissingApiKey,
    /// The request could not be sent or the response could not be read.
    NetworkError,
    /// The provider answered with a non-`OK` status, e.g. `ZERO_RESULTS`.
    Status(String),
    NotFound,
    /// The device offers no geolocation.
    Unsupported,
    GeolocationFailed,
    /// The mapping service is not configured or not loaded.
    ServiceUnavailable,
}

impl GeocodingErrorKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::MissingApiKey => "missing_api_key",
            Self::NetworkError => "network_error",
            Self::Status(status) => status,
            Self::NotFound => "not_found",
            Self::Unsupported => "unsupported",
            Self::GeolocationFailed => "geolocation_failed",
            Self::ServiceUnavailable => "service_unavailable",
        }
    }
}

impl fmt::Display for GeocodingErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct GeocodingError {
    pub kind: GeocodingErrorKind,
    pub message: String,
}

impl GeocodingError {
    pub fn new(kind: GeocodingErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn missing_api_key() -> Self {
        Self::new(
            GeocodingErrorKind::MissingApiKey,
            "No API key for the mapping provider",
        )
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(GeocodingErrorKind::NetworkError, message)
    }

    pub fn service_unavailable() -> Self {
        Self::new(
            GeocodingErrorKind::ServiceUnavailable,
            "The mapping service is not available",
        )
    }

    /// A non-`OK` provider status.
    ///
    /// Without an explicit message the provider found nothing.
    pub fn status(status: impl Into<String>, message: Option<String>) -> Self {
        let kind = GeocodingErrorKind::Status(status.into());
        Self::new(kind, message.unwrap_or_else(|| "No results found".into()))
    }
}

pub type GeocodingOutcome = Result<GeocodingResult, GeocodingError>;

/// Forward geocoding: free text address to coordinates.
///
/// Reverse lookups pass the coordinates as `"lat, lng"` text.
pub trait GeoCodingGateway {
    fn geocode(&self, address: &str) -> GeocodingOutcome;
}

/// An open-data reverse geocoder that is asked when the
/// mapping provider could not resolve a position.
pub trait ReverseGeoCodingGateway {
    fn reverse_geocode(&self, pos: MapPoint) -> Result<String, GeocodingError>;
}
