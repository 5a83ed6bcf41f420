#![deny(missing_debug_implementations)]

//! # civic-core
//!
//! Business rules of civic issue reporting: repositories and gateway
//! traits, use cases, the location search state machine and the
//! map marker projection.

pub mod entities {
    pub use civic_entities::{
        email::*, geo::*, geocoding::*, id::*, issue::*, password::*, profile::*, time::*,
    };
}

pub mod gateways;
pub mod location;
pub mod map;
pub mod repositories;
pub mod usecases;
pub mod util;
