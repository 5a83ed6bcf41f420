//! Reverse geocoding with OpenStreetMap Nominatim.

use geocoding::{Openstreetmap, Point, Reverse};

use civic_core::{
    entities::MapPoint,
    gateways::geocode::{GeocodingError, GeocodingErrorKind, ReverseGeoCodingGateway},
};

pub const DEFAULT_ENDPOINT: &str = "https://nominatim.openstreetmap.org/";

#[derive(Debug, Clone)]
pub struct Nominatim {
    endpoint: String,
}

impl Nominatim {
    pub fn new(endpoint: Option<String>) -> Self {
        let endpoint = endpoint
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        Self { endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ReverseGeoCodingGateway for Nominatim {
    fn reverse_geocode(&self, pos: MapPoint) -> Result<String, GeocodingError> {
        let osm = Openstreetmap::new_with_endpoint(self.endpoint.clone());
        let point = Point::new(pos.lng(), pos.lat());
        match osm.reverse(&point) {
            Ok(Some(display_name)) => {
                log::debug!("Resolved {pos} to '{display_name}'");
                Ok(display_name)
            }
            Ok(None) => Err(GeocodingError::new(
                GeocodingErrorKind::NotFound,
                format!("No address found for {pos}"),
            )),
            Err(err) => {
                log::warn!("Failed to reverse geocode {pos}: {err}");
                Err(GeocodingError::network(err.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint() {
        assert_eq!(DEFAULT_ENDPOINT, Nominatim::new(None).endpoint());
        assert_eq!(DEFAULT_ENDPOINT, Nominatim::new(Some("".into())).endpoint());
        assert_eq!(
            "http://localhost:8080/",
            Nominatim::new(Some("http://localhost:8080/".into())).endpoint()
        );
    }
}
