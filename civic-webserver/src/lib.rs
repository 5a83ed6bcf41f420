#![recursion_limit = "128"]

#[macro_use]
extern crate log;

use civic_db_sqlite::Connections;

mod adapters;
mod web;

pub use web::{Cfg, Gateways};

pub async fn run(
    connections: Connections,
    port: Option<u16>,
    enable_cors: bool,
    cfg: Cfg,
    gateways: Gateways,
    version: &'static str,
) {
    web::run(connections.into(), port, enable_cors, cfg, gateways, version).await;
}
