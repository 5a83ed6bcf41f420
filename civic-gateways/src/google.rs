//! Google Maps Platform: geocoding, place autocomplete and place details.

use std::time::Duration;

use serde::{de::DeserializeOwned, Deserialize};

use civic_core::{
    entities::*,
    gateways::{
        geocode::{GeoCodingGateway, GeocodingError, GeocodingOutcome},
        places::PlacesGateway,
    },
};

pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com";

const STATUS_OK: &str = "OK";
const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

#[derive(Debug, Clone)]
pub struct GoogleMaps {
    api_key: Option<String>,
    base_url: String,
    timeout: Duration,
}

impl GoogleMaps {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn get<T: DeserializeOwned>(&self, path: &str, params: &[(&str, &str)]) -> Result<T, GeocodingError> {
        let Some(api_key) = &self.api_key else {
            return Err(GeocodingError::missing_api_key());
        };
        let url = format!("{}{path}", self.base_url);
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|err| GeocodingError::network(err.to_string()))?;
        let response = client
            .get(&url)
            .query(params)
            .query(&[("key", api_key.as_str())])
            .send()
            .and_then(|res| res.error_for_status())
            .map_err(|err| {
                log::warn!("Request to {path} failed: {err}");
                GeocodingError::network(err.to_string())
            })?;
        response.json::<T>().map_err(|err| {
            log::warn!("Unexpected response from {path}: {err}");
            GeocodingError::network(err.to_string())
        })
    }
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    formatted_address: String,
    geometry: Geometry,
    place_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AutocompletePrediction {
    description: String,
    place_id: String,
}

#[derive(Debug, Deserialize)]
struct AutocompleteResponse {
    status: String,
    #[serde(default)]
    predictions: Vec<AutocompletePrediction>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PlaceResult {
    formatted_address: Option<String>,
    geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
struct PlaceDetailsResponse {
    status: String,
    result: Option<PlaceResult>,
    error_message: Option<String>,
}

fn map_point(location: &LatLng) -> Result<MapPoint, GeocodingError> {
    MapPoint::try_from_lat_lng_deg(location.lat, location.lng).map_err(|err| {
        GeocodingError::status("INVALID_RESPONSE", Some(format!("{err}")))
    })
}

fn geocoding_result(response: GeocodeResponse) -> GeocodingOutcome {
    let GeocodeResponse {
        status,
        results,
        error_message,
    } = response;
    if status != STATUS_OK {
        return Err(GeocodingError::status(status, error_message));
    }
    let Some(first) = results.into_iter().next() else {
        return Err(GeocodingError::status(status, error_message));
    };
    Ok(GeocodingResult {
        pos: map_point(&first.geometry.location)?,
        formatted_address: first.formatted_address,
        place_id: first.place_id,
    })
}

fn predictions(response: AutocompleteResponse) -> Result<Vec<Prediction>, GeocodingError> {
    let AutocompleteResponse {
        status,
        predictions,
        error_message,
    } = response;
    match status.as_str() {
        STATUS_OK => Ok(predictions
            .into_iter()
            .map(|p| Prediction {
                description: p.description,
                place_id: p.place_id,
            })
            .collect()),
        STATUS_ZERO_RESULTS => Ok(Vec::new()),
        _ => Err(GeocodingError::status(status, error_message)),
    }
}

fn place_details(response: PlaceDetailsResponse) -> Result<PlaceDetails, GeocodingError> {
    let PlaceDetailsResponse {
        status,
        result,
        error_message,
    } = response;
    if status != STATUS_OK {
        return Err(GeocodingError::status(status, error_message));
    }
    let Some(PlaceResult {
        formatted_address,
        geometry,
    }) = result
    else {
        return Err(GeocodingError::status(status, error_message));
    };
    let pos = geometry
        .map(|g| map_point(&g.location))
        .transpose()?;
    Ok(PlaceDetails {
        pos,
        formatted_address,
    })
}

impl GeoCodingGateway for GoogleMaps {
    fn geocode(&self, address: &str) -> GeocodingOutcome {
        let address = address.trim();
        log::debug!("Geocoding '{address}'");
        let response = self.get("/maps/api/geocode/json", &[("address", address)])?;
        geocoding_result(response)
    }
}

impl PlacesGateway for GoogleMaps {
    fn predictions(
        &self,
        input: &str,
        session_token: &str,
    ) -> Result<Vec<Prediction>, GeocodingError> {
        let response = self.get(
            "/maps/api/place/autocomplete/json",
            &[
                ("input", input),
                ("types", "(cities)"),
                ("sessiontoken", session_token),
            ],
        )?;
        predictions(response)
    }

    fn place_details(
        &self,
        place_id: &str,
        session_token: &str,
    ) -> Result<PlaceDetails, GeocodingError> {
        let response = self.get(
            "/maps/api/place/details/json",
            &[
                ("place_id", place_id),
                ("fields", "geometry/location,formatted_address"),
                ("sessiontoken", session_token),
            ],
        )?;
        place_details(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use civic_core::gateways::geocode::GeocodingErrorKind;

    fn parse<T: DeserializeOwned>(json: &str) -> T {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn parse_geocoding_result() {
        let res = geocoding_result(parse(
            r#"{
              "status": "OK",
              "results": [{
                "formatted_address": "Paris, France",
                "place_id": "ChIJD7fiBh9u5kcRYJSMaMOCCwQ",
                "geometry": { "location": { "lat": 48.856614, "lng": 2.3522219 } }
              }]
            }"#,
        ))
        .unwrap();
        assert_eq!("Paris, France", res.formatted_address);
        assert_eq!(48.856614, res.pos.lat());
        assert_eq!(Some("ChIJD7fiBh9u5kcRYJSMaMOCCwQ".into()), res.place_id);
    }

    #[test]
    fn geocoding_status_errors() {
        let err = geocoding_result(parse(r#"{ "status": "ZERO_RESULTS", "results": [] }"#))
            .unwrap_err();
        assert_eq!(GeocodingErrorKind::Status("ZERO_RESULTS".into()), err.kind);
        assert_eq!("No results found", err.message);

        let err = geocoding_result(parse(
            r#"{ "status": "REQUEST_DENIED", "error_message": "The provided API key is invalid." }"#,
        ))
        .unwrap_err();
        assert_eq!("REQUEST_DENIED", err.kind.as_str());
        assert_eq!("The provided API key is invalid.", err.message);
    }

    #[test]
    fn parse_predictions() {
        let p = predictions(parse(
            r#"{
              "status": "OK",
              "predictions": [
                { "description": "Paris, France", "place_id": "fr", "types": ["locality"] },
                { "description": "Paris, TX, USA", "place_id": "tx" }
              ]
            }"#,
        ))
        .unwrap();
        assert_eq!(2, p.len());
        assert_eq!("Paris", p[1].leading_segment());
        assert!(predictions(parse(r#"{ "status": "ZERO_RESULTS" }"#))
            .unwrap()
            .is_empty());
        assert!(predictions(parse(r#"{ "status": "INVALID_REQUEST" }"#)).is_err());
    }

    #[test]
    fn parse_place_details() {
        let details = place_details(parse(
            r#"{
              "status": "OK",
              "result": {
                "formatted_address": "Paris, France",
                "geometry": { "location": { "lat": 48.85, "lng": 2.35 } }
              }
            }"#,
        ))
        .unwrap();
        assert_eq!(Some("Paris, France".into()), details.formatted_address);
        assert_eq!(2.35, details.pos.unwrap().lng());

        let details = place_details(parse(r#"{ "status": "OK", "result": {} }"#)).unwrap();
        assert_eq!(None, details.pos);
        assert!(place_details(parse(r#"{ "status": "NOT_FOUND" }"#)).is_err());
    }

    #[test]
    fn missing_api_key() {
        let gw = GoogleMaps::new(Some(" ".into()));
        assert!(!gw.has_api_key());
        let err = gw.geocode("Paris").unwrap_err();
        assert_eq!(GeocodingErrorKind::MissingApiKey, err.kind);
    }

    #[test]
    fn unreachable_provider_is_a_network_error() {
        let gw = GoogleMaps::new(Some("key".into()))
            .with_base_url("http://127.0.0.1:9/")
            .with_timeout(Duration::from_millis(500));
        let err = gw.geocode("###invalid###").unwrap_err();
        assert_eq!(GeocodingErrorKind::NetworkError, err.kind);
    }
}
