use anyhow::{anyhow, Result};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

use civic_core::{
    entities::{GeolocationOptions, MapPoint},
    location::LocationSearchConfig,
    map::MapConfig,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "civic-report.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";
const ENV_NAME_GOOGLE_MAPS_API_KEY: &str = "GOOGLE_MAPS_API_KEY";

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub jwt_validity: Duration,
    pub geocoding: Geocoding,
    pub location_search: LocationSearchConfig,
    pub map: MapConfig,
    pub photos: Photos,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    raw::Config::embedded_default()?
                }
                _ => return Err(err.into()),
            },
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        if let Ok(api_key) = env::var(ENV_NAME_GOOGLE_MAPS_API_KEY) {
            if let Some(GeocodingGateway::Google {
                api_key: configured,
            }) = &mut cfg.geocoding.gateway
            {
                *configured = Some(api_key);
            }
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
}

pub struct WebServer {
    pub port: Option<u16>,
    pub enable_cors: bool,
}

pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
    pub reverse_fallback: Option<ReverseGeocodingGateway>,
}

pub enum GeocodingGateway {
    /// A missing key is reported by every lookup.
    Google { api_key: Option<String> },
}

pub enum ReverseGeocodingGateway {
    Nominatim { endpoint: Option<String> },
}

pub struct Photos {
    /// File system directory of the `photos` bucket.
    pub dir: PathBuf,
    pub public_url: String,
    pub max_size: u64,
}

/// Each missing section is taken from the embedded defaults.
struct Sections {
    file: raw::Config,
    defaults: raw::Config,
}

macro_rules! section {
    ($sections:expr, $name:ident) => {
        $sections
            .file
            .$name
            .take()
            .or_else(|| $sections.defaults.$name.take())
            .ok_or_else(|| anyhow!("Missing '{}' configuration", stringify!($name)))
    };
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let mut sections = Sections {
            file: from,
            defaults: raw::Config::embedded_default()?,
        };

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = section!(sections, db)?;
        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool must not be empty"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::WebServer { port, cors } = section!(sections, webserver)?;
        let webserver = WebServer {
            port,
            enable_cors: cors,
        };

        let raw::Auth { jwt_validity } = section!(sections, auth)?;

        let gateway = sections.file.gateway.take().unwrap_or_default();
        let gateway_defaults = sections.defaults.gateway.take().unwrap_or_default();

        let geocoding_gateway = section!(sections, geocoding)?.gateway.map(|gw| match gw {
            raw::GeocodingGateway::Google => {
                let api_key = gateway
                    .google
                    .clone()
                    .and_then(|g| g.api_key)
                    .filter(|key| !key.trim().is_empty());
                if api_key.is_none() {
                    log::warn!("No Google Maps API key configured");
                }
                GeocodingGateway::Google { api_key }
            }
        });
        let reverse_fallback = section!(sections, reverse_geocoding)?
            .fallback
            .map(|gw| match gw {
                raw::ReverseGeocodingGateway::Nominatim => {
                    let endpoint = gateway
                        .nominatim
                        .clone()
                        .or(gateway_defaults.nominatim.clone())
                        .and_then(|n| n.endpoint);
                    ReverseGeocodingGateway::Nominatim { endpoint }
                }
            });
        let geocoding = Geocoding {
            gateway: geocoding_gateway,
            reverse_fallback,
        };

        let raw::LocationSearch {
            debounce,
            min_query_len,
        } = section!(sections, location_search)?;
        let raw::Geolocation {
            high_accuracy,
            timeout,
            maximum_age,
        } = section!(sections, geolocation)?;
        let location_search = LocationSearchConfig {
            debounce,
            min_query_len,
            geolocation: GeolocationOptions {
                enable_high_accuracy: high_accuracy,
                timeout,
                maximum_age,
            },
        };

        let raw::Map {
            default_center: [lat, lng],
            default_zoom,
            highlight_zoom,
        } = section!(sections, map)?;
        let map = MapConfig {
            default_center: MapPoint::try_from_lat_lng_deg(lat, lng)
                .map_err(|err| anyhow!("Invalid map center: {err}"))?,
            default_zoom,
            highlight_zoom,
        };

        let raw::Photos {
            dir,
            public_url,
            max_size,
        } = section!(sections, photos)?;
        let photos = Photos {
            dir,
            public_url,
            max_size,
        };

        Ok(Self {
            db,
            webserver,
            jwt_validity,
            geocoding,
            location_search,
            map,
            photos,
        })
    }
}
