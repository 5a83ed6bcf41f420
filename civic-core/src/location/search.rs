use std::time::{Duration, Instant};

use super::{address_of_position, LocationServices};
use crate::{entities::*, gateways::geocode::GeocodingErrorKind};

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Inputs with fewer trimmed characters never trigger a request.
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationSearchConfig {
    pub debounce: Duration,
    pub min_query_len: usize,
    pub geolocation: GeolocationOptions,
}

impl Default for LocationSearchConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            min_query_len: DEFAULT_MIN_QUERY_LEN,
            geolocation: GeolocationOptions::default(),
        }
    }
}

/// Entries of the dropdown below the input.
#[derive(Debug, Clone, PartialEq)]
pub enum Suggestions {
    Predictions(Vec<Prediction>),
    Results(Vec<GeocodingResult>),
}

impl Suggestions {
    pub fn len(&self) -> usize {
        match self {
            Self::Predictions(p) => p.len(),
            Self::Results(r) => r.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum State {
    Idle,
    Debouncing { query: String, deadline: Instant },
    Predicting { query: String },
    Suggesting(Suggestions),
    Geocoding { address: String },
    Selected(LocationSelection),
    Error(GeocodingErrorKind),
}

#[derive(Debug)]
pub struct LocationSearch {
    config: LocationSearchConfig,
    input: String,
    state: State,
    selection: Option<LocationSelection>,
    session_token: Id,
}

impl LocationSearch {
    pub fn new(config: LocationSearchConfig) -> Self {
        Self {
            config,
            input: String::new(),
            state: State::Idle,
            selection: None,
            session_token: Id::new(),
        }
    }

    /// Starts with an address that is geocoded once and selected.
    pub fn with_initial_address(
        config: LocationSearchConfig,
        address: &str,
        services: &LocationServices,
    ) -> Self {
        let mut search = Self::new(config);
        if !address.trim().is_empty() {
            search.input = address.to_owned();
            search.geocode(address, true, services);
        }
        search
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub const fn state(&self) -> &State {
        &self.state
    }

    /// The last committed selection.
    pub const fn selection(&self) -> Option<&LocationSelection> {
        self.selection.as_ref()
    }

    pub fn suggestions(&self) -> Option<&Suggestions> {
        match &self.state {
            State::Suggesting(s) => Some(s),
            _ => None,
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        match self.state {
            State::Debouncing { deadline, .. } => Some(deadline),
            _ => None,
        }
    }

    /// The input text changed.
    ///
    /// A pending request is replaced by a new one for the current
    /// value that is due after the debounce delay.
    pub fn input_changed(&mut self, value: impl Into<String>, now: Instant) {
        self.input = value.into();
        if self.input.trim().chars().count() < self.config.min_query_len {
            self.set_state(State::Idle);
            return;
        }
        let query = self.input.trim().to_owned();
        let deadline = now + self.config.debounce;
        self.set_state(State::Debouncing { query, deadline });
    }

    /// Sends a pending prediction request if it is due.
    ///
    /// Returns `true` if a request was sent.
    pub fn tick(&mut self, now: Instant, services: &LocationServices) -> bool {
        let query = match &self.state {
            State::Debouncing { query, deadline } if *deadline <= now => query.clone(),
            _ => return false,
        };
        self.predict(query, services);
        true
    }

    /// Selects the top suggestion or geocodes the input directly.
    pub fn enter(&mut self, services: &LocationServices) {
        match &self.state {
            State::Suggesting(Suggestions::Predictions(p)) if !p.is_empty() => {
                let top = p[0].clone();
                self.select_prediction(top, services);
            }
            State::Suggesting(Suggestions::Results(r)) if !r.is_empty() => {
                let top = r[0].clone();
                self.commit(top.into());
            }
            _ => {
                let input = self.input.clone();
                if input.trim().is_empty() {
                    self.set_state(State::Idle);
                } else {
                    self.geocode(&input, true, services);
                }
            }
        }
    }

    /// Picks an entry of the dropdown.
    ///
    /// Returns `false` if there is no such entry.
    pub fn pick(&mut self, index: usize, services: &LocationServices) -> bool {
        match &self.state {
            State::Suggesting(Suggestions::Predictions(p)) => {
                let Some(prediction) = p.get(index).cloned() else {
                    return false;
                };
                self.select_prediction(prediction, services);
                true
            }
            State::Suggesting(Suggestions::Results(r)) => {
                let Some(result) = r.get(index).cloned() else {
                    return false;
                };
                self.commit(result.into());
                true
            }
            _ => false,
        }
    }

    /// Selects the address of the current device position.
    ///
    /// Without any address for the position the coordinates are used
    /// as address text.
    pub fn use_current_location(&mut self, services: &LocationServices) {
        let position = match services
            .geolocation
            .current_position(&self.config.geolocation)
        {
            Ok(position) => position,
            Err(err) => {
                log::warn!("Unable to get the current position: {err}");
                self.set_state(State::Error(err.kind));
                return;
            }
        };
        let pos = position.pos;
        let address = address_of_position(services, pos)
            .unwrap_or_else(|| pos.to_lat_lng_string(6));
        self.commit(LocationSelection { address, pos });
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.session_token = Id::new();
        let cleared = LocationSelection::cleared();
        self.selection = Some(cleared.clone());
        self.set_state(State::Selected(cleared));
    }

    fn predict(&mut self, query: String, services: &LocationServices) {
        let Some(places) = services.places else {
            log::debug!("No place predictions available: geocoding '{query}'");
            self.geocode(&query, true, services);
            return;
        };
        self.set_state(State::Predicting {
            query: query.clone(),
        });
        let predictions = match places.predictions(&query, self.session_token.as_str()) {
            Ok(predictions) => predictions,
            Err(err) => {
                log::warn!("Unable to fetch predictions for '{query}': {err}");
                Vec::new()
            }
        };
        if predictions.is_empty() {
            self.geocode(&query, true, services);
            return;
        }
        if let Some(prediction) = auto_selectable(&query, &predictions) {
            let prediction = prediction.clone();
            self.select_prediction(prediction, services);
            return;
        }
        self.set_state(State::Suggesting(Suggestions::Predictions(predictions)));
    }

    fn select_prediction(&mut self, prediction: Prediction, services: &LocationServices) {
        let Some(places) = services.places else {
            self.geocode(&prediction.description, false, services);
            return;
        };
        let details = places.place_details(&prediction.place_id, self.session_token.as_str());
        match details {
            Ok(PlaceDetails {
                pos: Some(pos),
                formatted_address,
            }) => {
                let address = formatted_address
                    .filter(|a| !a.trim().is_empty())
                    .unwrap_or(prediction.description);
                self.commit(LocationSelection { address, pos });
            }
            Ok(_) => {
                log::debug!("No coordinates for place {}", prediction.place_id);
                self.geocode(&prediction.description, false, services);
            }
            Err(err) => {
                log::warn!("Unable to fetch place {}: {err}", prediction.place_id);
                self.geocode(&prediction.description, false, services);
            }
        }
    }

    fn geocode(&mut self, address: &str, auto_select: bool, services: &LocationServices) {
        self.set_state(State::Geocoding {
            address: address.to_owned(),
        });
        match services.geocode(address) {
            Ok(result) => {
                if auto_select {
                    self.commit(result.into());
                } else {
                    self.set_state(State::Suggesting(Suggestions::Results(vec![result])));
                }
            }
            Err(err) => {
                log::warn!("Unable to geocode '{address}': {err}");
                self.set_state(State::Error(err.kind));
            }
        }
    }

    fn commit(&mut self, selection: LocationSelection) {
        log::debug!("Selected location '{}' at {}", selection.address, selection.pos);
        self.input = selection.address.clone();
        self.session_token = Id::new();
        self.selection = Some(selection.clone());
        self.set_state(State::Selected(selection));
    }

    fn set_state(&mut self, next: State) {
        log::trace!("{:?} -> {:?}", self.state, next);
        self.state = next;
    }
}

/// A prediction that matches the input well enough to be
/// selected without showing a dropdown.
///
/// Either the whole label of a prediction equals the input or the
/// city of the top prediction (its leading segment) equals the
/// whole input, ignoring case.
pub fn auto_selectable<'p>(input: &str, predictions: &'p [Prediction]) -> Option<&'p Prediction> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }
    if let Some(exact) = predictions
        .iter()
        .find(|p| p.description.trim().to_lowercase() == input)
    {
        return Some(exact);
    }
    predictions
        .first()
        .filter(|top| top.leading_segment().to_lowercase() == input)
}
