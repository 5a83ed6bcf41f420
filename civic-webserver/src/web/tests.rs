use std::{collections::HashMap, sync::Arc};

use parking_lot::Mutex;
use rocket::{config::Config as RocketCfg, local::blocking::Client, Route};

use civic_core::{
    entities::*,
    gateways::{
        geocode::{GeoCodingGateway, GeocodingError, GeocodingOutcome},
        photos::PhotoStorageGateway,
        places::PlacesGateway,
    },
};

use crate::web::{sqlite, Cfg, Gateways};

pub mod prelude {

    pub const DUMMY_VERSION: &str = "3.2.1";

    pub use rocket::{
        http::{ContentType, Cookie, Header, Status},
        local::blocking::{Client, LocalResponse},
    };

    pub use super::{rocket_test_setup, DummyGeoGW, DummyPhotoGW, DummyPlacesGW, Mocks};

    pub use civic_core::repositories::*;
}

/// Gateways that answer a fixed set of requests.
#[derive(Clone)]
pub struct Mocks {
    pub geocoding: Arc<DummyGeoGW>,
    pub places: Arc<DummyPlacesGW>,
    pub photos: Arc<DummyPhotoGW>,
}

impl Default for Mocks {
    fn default() -> Self {
        Self {
            geocoding: Arc::new(DummyGeoGW::default()),
            places: Arc::new(DummyPlacesGW::default()),
            photos: Arc::new(DummyPhotoGW::default()),
        }
    }
}

impl Mocks {
    pub fn gateways(&self) -> Gateways {
        Gateways {
            geocoding: Some(self.geocoding.clone()),
            places: Some(self.places.clone()),
            reverse_fallback: None,
            photos: self.photos.clone(),
        }
    }
}

fn pos(lat: f64, lng: f64) -> MapPoint {
    MapPoint::try_from_lat_lng_deg(lat, lng).unwrap()
}

pub struct DummyGeoGW {
    results: HashMap<&'static str, GeocodingResult>,
}

impl Default for DummyGeoGW {
    fn default() -> Self {
        let paris = GeocodingResult {
            pos: pos(48.856614, 2.3522219),
            formatted_address: "Paris, France".into(),
            place_id: Some("paris-fr".into()),
        };
        let springfield = GeocodingResult {
            pos: pos(39.78172, -89.65015),
            formatted_address: "Springfield, IL, USA".into(),
            place_id: Some("springfield-il".into()),
        };
        let results = [
            ("Paris", paris.clone()),
            ("48.8566, 2.3522", paris),
            ("Springfield", springfield),
        ]
        .into_iter()
        .collect();
        Self { results }
    }
}

impl GeoCodingGateway for DummyGeoGW {
    fn geocode(&self, address: &str) -> GeocodingOutcome {
        self.results
            .get(address.trim())
            .cloned()
            .ok_or_else(|| GeocodingError::network("connection refused"))
    }
}

pub struct DummyPlacesGW {
    predictions: Vec<Prediction>,
    details: HashMap<&'static str, PlaceDetails>,
    pub detail_requests: Mutex<Vec<String>>,
}

impl Default for DummyPlacesGW {
    fn default() -> Self {
        let prediction = |description: &str, place_id: &str| Prediction {
            description: description.into(),
            place_id: place_id.into(),
        };
        let predictions = vec![
            prediction("Paris, France", "paris-fr"),
            prediction("Paris, TX, USA", "paris-tx"),
            prediction("Springfield, IL, USA", "springfield-il"),
            prediction("Springfield, MA, USA", "springfield-ma"),
        ];
        let details = [
            (
                "paris-fr",
                PlaceDetails {
                    pos: Some(pos(48.856614, 2.3522219)),
                    formatted_address: Some("Paris, France".into()),
                },
            ),
            (
                "springfield-il",
                PlaceDetails {
                    pos: Some(pos(39.78172, -89.65015)),
                    formatted_address: None,
                },
            ),
        ]
        .into_iter()
        .collect();
        Self {
            predictions,
            details,
            detail_requests: Default::default(),
        }
    }
}

impl PlacesGateway for DummyPlacesGW {
    fn predictions(
        &self,
        input: &str,
        _session_token: &str,
    ) -> Result<Vec<Prediction>, GeocodingError> {
        let input = input.trim().to_lowercase();
        Ok(self
            .predictions
            .iter()
            .filter(|p| p.description.to_lowercase().starts_with(&input))
            .cloned()
            .collect())
    }

    fn place_details(
        &self,
        place_id: &str,
        _session_token: &str,
    ) -> Result<PlaceDetails, GeocodingError> {
        self.detail_requests.lock().push(place_id.to_owned());
        self.details
            .get(place_id)
            .cloned()
            .ok_or_else(|| GeocodingError::status("NOT_FOUND", None))
    }
}

#[derive(Default)]
pub struct DummyPhotoGW {
    pub stored: Mutex<Vec<(String, usize)>>,
}

impl PhotoStorageGateway for DummyPhotoGW {
    fn store(&self, path: &str, data: &[u8]) -> anyhow::Result<String> {
        self.stored.lock().push((path.to_owned(), data.len()));
        Ok(format!("http://localhost/photos/{path}"))
    }
}

pub fn rocket_test_setup(
    mounts: Vec<(&'static str, Vec<Route>)>,
    gateways: Gateways,
) -> (Client, sqlite::Connections) {
    let connections = civic_db_sqlite::Connections::init(":memory:", 1).unwrap();
    civic_db_sqlite::run_embedded_database_migrations(connections.exclusive().unwrap())
        .unwrap();
    let db = sqlite::Connections::from(connections);
    let options = super::InstanceOptions {
        mounts,
        rocket_cfg: Some(RocketCfg::debug_default()),
        cfg: Cfg::default(),
        version: prelude::DUMMY_VERSION,
    };
    let rocket = super::rocket_instance(options, db.clone(), gateways);
    let client = Client::tracked(rocket).unwrap();
    (client, db)
}
