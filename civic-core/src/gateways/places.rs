use crate::{entities::*, gateways::geocode::GeocodingError};

/// Text based place search (autocomplete) and place details.
pub trait PlacesGateway {
    /// Predictions for a partial address.
    ///
    /// Requests that belong to the same search share a session token.
    fn predictions(
        &self,
        input: &str,
        session_token: &str,
    ) -> Result<Vec<Prediction>, GeocodingError>;

    fn place_details(
        &self,
        place_id: &str,
        session_token: &str,
    ) -> Result<PlaceDetails, GeocodingError>;
}
