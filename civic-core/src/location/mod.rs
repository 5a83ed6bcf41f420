//! Turns free text input into a selected address with coordinates.
//!
//! The [`LocationSearch`] state machine is driven by input events.
//! Time is passed into every event that depends on it and all network
//! access goes through the gateways bundled in [`LocationServices`].

use std::{fmt, time::Instant};

use crate::{
    entities::*,
    gateways::{
        geocode::{GeoCodingGateway, GeocodingError, GeocodingOutcome, ReverseGeoCodingGateway},
        geolocation::GeoLocationGateway,
        places::PlacesGateway,
    },
};

mod search;

pub use self::search::*;

#[derive(Clone, Copy)]
pub struct LocationServices<'a> {
    /// `None` if the mapping provider is not configured.
    pub geocoding: Option<&'a dyn GeoCodingGateway>,
    /// `None` if the autocomplete service is not available.
    pub places: Option<&'a dyn PlacesGateway>,
    pub reverse_fallback: Option<&'a dyn ReverseGeoCodingGateway>,
    pub geolocation: &'a dyn GeoLocationGateway,
}

impl fmt::Debug for LocationServices<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocationServices")
            .field("geocoding", &self.geocoding.is_some())
            .field("places", &self.places.is_some())
            .field("reverse_fallback", &self.reverse_fallback.is_some())
            .finish_non_exhaustive()
    }
}

impl LocationServices<'_> {
    pub fn geocode(&self, address: &str) -> GeocodingOutcome {
        let Some(geocoding) = self.geocoding else {
            return Err(GeocodingError::service_unavailable());
        };
        geocoding.geocode(address)
    }
}

/// Looks up a human readable address for a position.
///
/// The mapping provider is asked first, the open-data fallback second.
/// Returns `None` if neither of them knows the position.
pub fn address_of_position(services: &LocationServices, pos: MapPoint) -> Option<String> {
    let query = format!("{}, {}", pos.lat(), pos.lng());
    match services.geocode(&query) {
        Ok(res) if !res.formatted_address.trim().is_empty() => {
            return Some(res.formatted_address);
        }
        Ok(_) => {
            log::debug!("Empty address for position {pos}");
        }
        Err(err) => {
            log::warn!("Unable to reverse geocode {pos}: {err}");
        }
    }
    let fallback = services.reverse_fallback?;
    match fallback.reverse_geocode(pos) {
        Ok(address) if !address.trim().is_empty() => Some(address),
        Ok(_) => None,
        Err(err) => {
            log::warn!("Unable to reverse geocode {pos} with fallback: {err}");
            None
        }
    }
}

/// Runs a complete search for the given input.
///
/// The debounce delay is skipped. The returned search is either
/// selected, suggesting or failed.
pub fn search_once(
    config: LocationSearchConfig,
    services: &LocationServices,
    input: &str,
    now: Instant,
) -> LocationSearch {
    let mut search = LocationSearch::new(config);
    search.input_changed(input, now);
    match search.next_deadline() {
        Some(deadline) => {
            search.tick(deadline, services);
        }
        None => {
            search.enter(services);
        }
    }
    search
}
