use std::{fs, path::PathBuf, sync::Arc, time::Duration};

use anyhow::Result;
use clap::{Parser, Subcommand};

use civic_gateways::{google::GoogleMaps, nominatim::Nominatim, photos::FileSystemPhotoStorage};
use civic_webserver::{Cfg as WebCfg, Gateways};

use crate::{
    config::{self, Config},
    locate,
};

const GOOGLE_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Parser)]
#[command(name = "civic-report", version, about = "Report and track civic issues")]
struct Args {
    /// Configuration file (TOML)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    /// URL to the database
    #[arg(long, global = true, value_name = "DATABASE_URL")]
    db_url: Option<String>,
    /// Set the port to listen
    #[arg(short, long, global = true)]
    port: Option<u16>,
    /// Allow requests from any origin
    #[arg(long, global = true)]
    enable_cors: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the web server (default)
    Serve,
    /// Search locations interactively
    Locate,
}

pub async fn run() -> Result<()> {
    let args = Args::parse();
    let mut cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;
    if let Some(db_url) = args.db_url {
        cfg.db.conn_sqlite = db_url;
    }
    let gateways = gateways(&cfg);
    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let port = args.port.or(cfg.webserver.port);
            let enable_cors = args.enable_cors || cfg.webserver.enable_cors;
            serve(cfg, gateways, port, enable_cors).await
        }
        Command::Locate => {
            let config = cfg.location_search.clone();
            tokio::task::spawn_blocking(move || locate::run(&gateways, config)).await?
        }
    }
}

async fn serve(cfg: Config, gateways: Gateways, port: Option<u16>, enable_cors: bool) -> Result<()> {
    log::info!("Connecting to SQLite database {}", cfg.db.conn_sqlite);
    let connections =
        civic_db_sqlite::Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size.into())?;
    civic_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    fs::create_dir_all(&cfg.photos.dir)?;
    let web_cfg = WebCfg {
        location_search: cfg.location_search,
        map: cfg.map,
        jwt_validity: cfg.jwt_validity,
        max_photo_size: cfg.photos.max_size,
        photo_dir: Some(cfg.photos.dir),
    };
    civic_webserver::run(
        connections,
        port,
        enable_cors,
        web_cfg,
        gateways,
        env!("CARGO_PKG_VERSION"),
    )
    .await;
    Ok(())
}

fn gateways(cfg: &Config) -> Gateways {
    let photos = FileSystemPhotoStorage::new(&cfg.photos.dir, &cfg.photos.public_url);
    let mut gateways = Gateways {
        geocoding: None,
        places: None,
        reverse_fallback: None,
        photos: Arc::new(photos),
    };
    match &cfg.geocoding.gateway {
        Some(config::GeocodingGateway::Google { api_key }) => {
            let google =
                Arc::new(GoogleMaps::new(api_key.clone()).with_timeout(GOOGLE_REQUEST_TIMEOUT));
            gateways.geocoding = Some(google.clone());
            gateways.places = Some(google);
        }
        None => {
            log::warn!("No geocoding gateway configured");
        }
    }
    if let Some(config::ReverseGeocodingGateway::Nominatim { endpoint }) =
        &cfg.geocoding.reverse_fallback
    {
        let nominatim = Nominatim::new(endpoint.clone());
        log::info!("Reverse geocoding fallback: {}", nominatim.endpoint());
        gateways.reverse_fallback = Some(Arc::new(nominatim));
    }
    gateways
}
