pub use civic_boundary::*;

use civic_core::{
    entities as e,
    gateways::geocode::{self as geo, GeocodingErrorKind},
    location::{State, Suggestions},
    map, usecases,
};

pub mod from_json {
    //! JSON -> Entity

    use super::*;

    pub fn new_issue(from: NewIssue) -> usecases::NewIssue {
        let NewIssue {
            title,
            description,
            category,
            priority,
            location_text,
            lat,
            lng,
            photos,
            contact_info,
        } = from;
        usecases::NewIssue {
            title,
            description,
            category,
            priority,
            location_text,
            lat,
            lng,
            photos,
            contact_info,
        }
    }

    pub fn profile_update(from: ProfileUpdate) -> usecases::ProfileUpdate {
        let ProfileUpdate {
            name,
            phone,
            avatar_url,
            organization_name,
            location_text,
            lat,
            lng,
        } = from;
        usecases::ProfileUpdate {
            name,
            phone,
            avatar_url,
            organization_name,
            location_text,
            lat,
            lng,
        }
    }
}

pub mod to_json {
    //! Entity -> JSON

    use super::*;

    pub fn geocoding_error(from: geo::GeocodingError) -> GeocodingError {
        GeocodingError {
            kind: from.kind.as_str().to_owned(),
            message: from.message,
        }
    }

    fn error_message(kind: &GeocodingErrorKind) -> &'static str {
        match kind {
            GeocodingErrorKind::MissingApiKey => "No API key for the mapping provider",
            GeocodingErrorKind::NetworkError => "The mapping provider is not reachable",
            GeocodingErrorKind::Status(_) | GeocodingErrorKind::NotFound => "No results found",
            GeocodingErrorKind::Unsupported => "Geolocation is not supported",
            GeocodingErrorKind::GeolocationFailed => "Unable to determine the current position",
            GeocodingErrorKind::ServiceUnavailable => "The mapping service is not available",
        }
    }

    pub fn location_search_result(state: &State) -> LocationSearchResult {
        match state {
            State::Selected(selection) => LocationSearchResult::Selected {
                selection: selection.clone().into(),
            },
            State::Suggesting(Suggestions::Predictions(predictions)) => {
                LocationSearchResult::Predictions {
                    predictions: predictions.iter().cloned().map(Into::into).collect(),
                }
            }
            State::Suggesting(Suggestions::Results(results)) => LocationSearchResult::Results {
                results: results.iter().cloned().map(Into::into).collect(),
            },
            State::Error(kind) => LocationSearchResult::Error {
                error: GeocodingError {
                    kind: kind.as_str().to_owned(),
                    message: error_message(kind).to_owned(),
                },
            },
            State::Idle
            | State::Debouncing { .. }
            | State::Predicting { .. }
            | State::Geocoding { .. } => LocationSearchResult::Idle,
        }
    }

    pub fn map_view(view: &map::MapView) -> MapView {
        let viewport = view.viewport();
        let markers = view
            .markers()
            .map(|marker| MapMarker {
                issue_id: marker.issue_id.to_string(),
                lat: marker.pos.lat(),
                lng: marker.pos.lng(),
                title: marker.title.clone(),
                icon: marker.icon.url(),
                highlighted: marker.icon == map::MarkerIcon::Highlighted,
            })
            .collect();
        MapView {
            center: viewport.center.into(),
            zoom: viewport.zoom,
            markers,
        }
    }

    pub fn issue_list(issues: Vec<e::Issue>, active_filter_count: usize) -> IssueList {
        IssueList {
            issues: issues.into_iter().map(Into::into).collect(),
            active_filter_count,
        }
    }
}
