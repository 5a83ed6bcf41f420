use std::{cell::RefCell, collections::HashMap};

use super::{geocode::*, geolocation::*, photos::*, places::*};
use crate::entities::*;

pub fn pos(lat: f64, lng: f64) -> MapPoint {
    MapPoint::try_from_lat_lng_deg(lat, lng).unwrap()
}

pub fn prediction(description: &str, place_id: &str) -> Prediction {
    Prediction {
        description: description.into(),
        place_id: place_id.into(),
    }
}

/// Answers with scripted results and records every query.
#[derive(Debug, Default)]
pub struct MockGeoCoding {
    pub results: HashMap<String, GeocodingResult>,
    pub failure: Option<GeocodingErrorKind>,
    pub queries: RefCell<Vec<String>>,
}

impl MockGeoCoding {
    pub fn with_result(mut self, address: &str, formatted: &str, lat: f64, lng: f64) -> Self {
        self.results.insert(
            address.into(),
            GeocodingResult {
                pos: pos(lat, lng),
                formatted_address: formatted.into(),
                place_id: Some(format!("geo-{address}")),
            },
        );
        self
    }

    pub fn failing(kind: GeocodingErrorKind) -> Self {
        Self {
            failure: Some(kind),
            ..Default::default()
        }
    }
}

impl GeoCodingGateway for MockGeoCoding {
    fn geocode(&self, address: &str) -> GeocodingOutcome {
        self.queries.borrow_mut().push(address.into());
        if let Some(kind) = &self.failure {
            return Err(GeocodingError::new(kind.clone(), "mock failure"));
        }
        self.results
            .get(address)
            .cloned()
            .ok_or_else(|| GeocodingError::status("ZERO_RESULTS", None))
    }
}

#[derive(Debug, Default)]
pub struct MockPlaces {
    pub predictions: Vec<Prediction>,
    pub details: HashMap<String, PlaceDetails>,
    pub prediction_requests: RefCell<Vec<String>>,
    pub detail_requests: RefCell<Vec<String>>,
}

impl MockPlaces {
    pub fn with_prediction(mut self, description: &str, place_id: &str) -> Self {
        self.predictions.push(prediction(description, place_id));
        self
    }

    pub fn with_details(mut self, place_id: &str, address: &str, lat: f64, lng: f64) -> Self {
        self.details.insert(
            place_id.into(),
            PlaceDetails {
                pos: Some(pos(lat, lng)),
                formatted_address: Some(address.into()),
            },
        );
        self
    }
}

impl PlacesGateway for MockPlaces {
    fn predictions(&self, input: &str, _: &str) -> Result<Vec<Prediction>, GeocodingError> {
        self.prediction_requests.borrow_mut().push(input.into());
        Ok(self.predictions.clone())
    }

    fn place_details(&self, place_id: &str, _: &str) -> Result<PlaceDetails, GeocodingError> {
        self.detail_requests.borrow_mut().push(place_id.into());
        self.details
            .get(place_id)
            .cloned()
            .ok_or_else(|| GeocodingError::status("NOT_FOUND", None))
    }
}

#[derive(Debug, Default)]
pub struct MockReverse {
    pub address: Option<String>,
    pub requests: RefCell<usize>,
}

impl ReverseGeoCodingGateway for MockReverse {
    fn reverse_geocode(&self, _: MapPoint) -> Result<String, GeocodingError> {
        *self.requests.borrow_mut() += 1;
        self.address
            .clone()
            .ok_or_else(|| GeocodingError::network("mock failure"))
    }
}

#[derive(Debug, Default)]
pub struct MockPhotoStorage {
    pub objects: RefCell<Vec<(String, Vec<u8>)>>,
}

impl PhotoStorageGateway for MockPhotoStorage {
    fn store(&self, path: &str, data: &[u8]) -> anyhow::Result<String> {
        self.objects.borrow_mut().push((path.into(), data.to_vec()));
        Ok(format!("https://photos.example.org/{path}"))
    }
}

pub fn device_at(lat: f64, lng: f64) -> ReportedPosition {
    ReportedPosition(Some(DevicePosition {
        pos: pos(lat, lng),
        accuracy: Some(10.0),
    }))
}
