use std::time::Duration;

use crate::geo::MapPoint;

/// Outcome of a forward or reverse geocoding request.
///
/// Produced by a network call and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodingResult {
    pub pos: MapPoint,
    pub formatted_address: String,
    pub place_id: Option<String>,
}

/// A candidate place returned by a text based place search
/// before its coordinates have been resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prediction {
    pub description: String,
    pub place_id: String,
}

impl Prediction {
    /// The leading segment of the description before the first comma,
    /// e.g. `"Paris"` for `"Paris, Texas, USA"`.
    pub fn leading_segment(&self) -> &str {
        leading_segment(&self.description)
    }
}

pub fn leading_segment(s: &str) -> &str {
    s.split(',').next().unwrap_or_default().trim()
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaceDetails {
    pub pos: Option<MapPoint>,
    pub formatted_address: Option<String>,
}

/// The address and coordinates picked by the user.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocationSelection {
    pub address: String,
    pub pos: MapPoint,
}

impl LocationSelection {
    /// The selection after clearing the input: empty address, zero coordinates.
    pub fn cleared() -> Self {
        Self {
            address: String::new(),
            pos: MapPoint::zero(),
        }
    }

    pub fn is_cleared(&self) -> bool {
        self.address.is_empty() && self.pos.is_zero()
    }
}

impl From<GeocodingResult> for LocationSelection {
    fn from(from: GeocodingResult) -> Self {
        let GeocodingResult {
            pos,
            formatted_address,
            place_id: _,
        } = from;
        Self {
            address: formatted_address,
            pos,
        }
    }
}

/// A position reported by the device of the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DevicePosition {
    pub pos: MapPoint,
    /// Accuracy radius in meters
    pub accuracy: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeolocationOptions {
    pub enable_high_accuracy: bool,
    pub timeout: Duration,
    pub maximum_age: Duration,
}

impl Default for GeolocationOptions {
    fn default() -> Self {
        Self {
            enable_high_accuracy: true,
            timeout: Duration::from_secs(10),
            maximum_age: Duration::ZERO,
        }
    }
}
