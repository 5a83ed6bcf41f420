use std::{path::PathBuf, sync::Arc, time::Duration};

use civic_core::{
    gateways::{
        geocode::{GeoCodingGateway, ReverseGeoCodingGateway},
        geolocation::GeoLocationGateway,
        photos::PhotoStorageGateway,
        places::PlacesGateway,
    },
    location::{LocationSearchConfig, LocationServices},
    map::MapConfig,
};
use rocket::{config::Config as RocketCfg, fs::FileServer, Rocket, Route};

pub mod api;
mod guards;
pub mod jwt;
mod sqlite;

#[cfg(test)]
pub mod tests;

pub const DEFAULT_MAX_PHOTO_SIZE: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Cfg {
    pub location_search: LocationSearchConfig,
    pub map: MapConfig,
    pub jwt_validity: Duration,
    /// Upper limit of an uploaded photo in bytes
    pub max_photo_size: u64,
    /// Stored photos are served from this directory under `/photos`.
    pub photo_dir: Option<PathBuf>,
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            location_search: Default::default(),
            map: Default::default(),
            jwt_validity: jwt::DEFAULT_VALIDITY,
            max_photo_size: DEFAULT_MAX_PHOTO_SIZE,
            photo_dir: None,
        }
    }
}

/// Connections to the outside world.
///
/// The location services are optional: without them location
/// lookups fail with `service_unavailable`.
#[derive(Clone)]
pub struct Gateways {
    pub geocoding: Option<Arc<dyn GeoCodingGateway + Send + Sync>>,
    pub places: Option<Arc<dyn PlacesGateway + Send + Sync>>,
    pub reverse_fallback: Option<Arc<dyn ReverseGeoCodingGateway + Send + Sync>>,
    pub photos: Arc<dyn PhotoStorageGateway + Send + Sync>,
}

impl Gateways {
    pub fn location_services<'a>(
        &'a self,
        geolocation: &'a dyn GeoLocationGateway,
    ) -> LocationServices<'a> {
        LocationServices {
            geocoding: self
                .geocoding
                .as_deref()
                .map(|gw| gw as &dyn GeoCodingGateway),
            places: self.places.as_deref().map(|gw| gw as &dyn PlacesGateway),
            reverse_fallback: self
                .reverse_fallback
                .as_deref()
                .map(|gw| gw as &dyn ReverseGeoCodingGateway),
            geolocation,
        }
    }
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
    version: &'static str,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
    gateways: Gateways,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
        version,
    } = options;

    if gateways.geocoding.is_none() {
        warn!("No geocoding gateway configured: location lookups are not available");
    }
    let jwt_state = jwt::JwtState::new(cfg.jwt_validity);
    let photo_dir = cfg.photo_dir.clone();

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r
        .manage(db)
        .manage(jwt_state)
        .manage(gateways)
        .manage(cfg)
        .manage(guards::Version(version));

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    if let Some(dir) = photo_dir {
        info!("Serving photos from {}", dir.display());
        instance = instance.mount("/photos", FileServer::from(dir));
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

pub async fn run(
    db: sqlite::Connections,
    port: Option<u16>,
    enable_cors: bool,
    cfg: Cfg,
    gateways: Gateways,
    version: &'static str,
) {
    let rocket_cfg = match port {
        Some(port) => match RocketCfg::figment()
            .merge(("port", port))
            .extract::<RocketCfg>()
        {
            Ok(rocket_cfg) => Some(rocket_cfg),
            Err(err) => {
                error!("Invalid web server configuration: {err}");
                return;
            }
        },
        None => None,
    };
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg,
        cfg,
        version,
    };
    let instance = rocket_instance(options, db, gateways);
    let server_task = if enable_cors {
        match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => instance.attach(cors).launch(),
            Err(err) => {
                error!("Invalid CORS configuration: {err}");
                return;
            }
        }
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
