use std::fmt;

use thiserror::Error;

/// A validated geographical position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapPointError {
    #[error("Latitude out of range")]
    Latitude,
    #[error("Longitude out of range")]
    Longitude,
}

impl MapPoint {
    pub const LAT_DEG_MAX: f64 = 90.0;
    pub const LAT_DEG_MIN: f64 = -90.0;
    pub const LNG_DEG_MAX: f64 = 180.0;
    pub const LNG_DEG_MIN: f64 = -180.0;

    /// The position `(0, 0)` that marks a cleared selection.
    pub const fn zero() -> Self {
        Self { lat: 0.0, lng: 0.0 }
    }

    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Result<Self, MapPointError> {
        if !(Self::LAT_DEG_MIN..=Self::LAT_DEG_MAX).contains(&lat) {
            return Err(MapPointError::Latitude);
        }
        if !(Self::LNG_DEG_MIN..=Self::LNG_DEG_MAX).contains(&lng) {
            return Err(MapPointError::Longitude);
        }
        Ok(Self { lat, lng })
    }

    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn lng(self) -> f64 {
        self.lng
    }

    pub fn is_zero(self) -> bool {
        self.lat == 0.0 && self.lng == 0.0
    }

    /// Both coordinates with a fixed number of decimal places, e.g. `"48.137154, 11.576124"`.
    pub fn to_lat_lng_string(self, precision: usize) -> String {
        format!(
            "{lat:.precision$}, {lng:.precision$}",
            lat = self.lat,
            lng = self.lng,
        )
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_valid_coordinates() {
        assert!(MapPoint::try_from_lat_lng_deg(90.0, 180.0).is_ok());
        assert!(MapPoint::try_from_lat_lng_deg(-90.0, -180.0).is_ok());
        assert!(MapPoint::try_from_lat_lng_deg(15.8585, 74.5069).is_ok());
    }

    #[test]
    fn reject_invalid_coordinates() {
        assert_eq!(
            Err(MapPointError::Latitude),
            MapPoint::try_from_lat_lng_deg(90.1, 0.0)
        );
        assert_eq!(
            Err(MapPointError::Longitude),
            MapPoint::try_from_lat_lng_deg(0.0, -180.5)
        );
        assert!(MapPoint::try_from_lat_lng_deg(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn format_with_fixed_precision() {
        let p = MapPoint::try_from_lat_lng_deg(48.1371543, 11.5761249).unwrap();
        assert_eq!("48.137154, 11.576125", p.to_lat_lng_string(6));
        assert_eq!("48.13715, 11.57612", p.to_lat_lng_string(5));
    }
}
