use duration_str::deserialize_duration;
use serde::Deserialize;
use std::{path::PathBuf, time::Duration};

const DEFAULT_CONFIG_FILE: &str = include_str!("civic-report.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub webserver: Option<WebServer>,
    pub auth: Option<Auth>,
    pub geocoding: Option<Geocoding>,
    pub reverse_geocoding: Option<ReverseGeocoding>,
    pub gateway: Option<Gateway>,
    pub location_search: Option<LocationSearch>,
    pub geolocation: Option<Geolocation>,
    pub map: Option<Map>,
    pub photos: Option<Photos>,
}

impl Config {
    pub fn embedded_default() -> Result<Self, toml::de::Error> {
        toml::from_str(DEFAULT_CONFIG_FILE)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: String,
    pub connection_pool_size: u8,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub port: Option<u16>,
    pub cors: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Auth {
    #[serde(deserialize_with = "deserialize_duration")]
    pub jwt_validity: Duration,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeocodingGateway {
    Google,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ReverseGeocoding {
    pub fallback: Option<ReverseGeocodingGateway>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReverseGeocodingGateway {
    Nominatim,
}

#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub google: Option<Google>,
    pub nominatim: Option<Nominatim>,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Google {
    pub api_key: Option<String>,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Nominatim {
    pub endpoint: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LocationSearch {
    #[serde(deserialize_with = "deserialize_duration")]
    pub debounce: Duration,
    pub min_query_len: usize,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geolocation {
    pub high_accuracy: bool,
    #[serde(deserialize_with = "deserialize_duration")]
    pub timeout: Duration,
    #[serde(deserialize_with = "deserialize_duration")]
    pub maximum_age: Duration,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Map {
    /// `[lat, lng]` in degrees
    pub default_center: [f64; 2],
    pub default_zoom: u8,
    pub highlight_zoom: u8,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Photos {
    pub dir: PathBuf,
    pub public_url: String,
    /// Bytes
    pub max_size: u64,
}
