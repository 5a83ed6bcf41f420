use super::*;
use civic_core::{
    gateways::{
        geocode::GeocodingError,
        geolocation::ReportedPosition,
    },
    location::{self, LocationSearch},
};
use std::time::Instant;

const NO_POSITION: ReportedPosition = ReportedPosition(None);

#[get("/location/predictions?<q>&<session>")]
pub async fn get_predictions(
    gateways: &State<Gateways>,
    q: String,
    session: Option<String>,
) -> Result<Vec<json::Prediction>> {
    let gateways = gateways.inner().clone();
    let session = session.unwrap_or_else(|| Id::new().into());
    let predictions = blocking(move || {
        let Some(places) = gateways.places.as_deref() else {
            return Err(GeocodingError::service_unavailable());
        };
        places.predictions(q.trim(), &session)
    })
    .await??;
    Ok(Json(predictions.into_iter().map(Into::into).collect()))
}

#[get("/location/details/<place_id>?<session>")]
pub async fn get_place_details(
    gateways: &State<Gateways>,
    place_id: String,
    session: Option<String>,
) -> Result<json::PlaceDetails> {
    let gateways = gateways.inner().clone();
    let session = session.unwrap_or_else(|| Id::new().into());
    let details = blocking(move || {
        let Some(places) = gateways.places.as_deref() else {
            return Err(GeocodingError::service_unavailable());
        };
        places.place_details(&place_id, &session)
    })
    .await??;
    Ok(Json(details.into()))
}

#[get("/location/geocode?<address>")]
pub async fn get_geocode(
    gateways: &State<Gateways>,
    address: String,
) -> Result<json::GeocodingResult> {
    let gateways = gateways.inner().clone();
    let result = blocking(move || {
        gateways
            .location_services(&NO_POSITION)
            .geocode(&address)
    })
    .await??;
    Ok(Json(result.into()))
}

/// The address of a position.
///
/// Positions without any known address are described by their coordinates.
#[get("/location/reverse?<lat>&<lng>")]
pub async fn get_reverse(
    gateways: &State<Gateways>,
    lat: f64,
    lng: f64,
) -> Result<json::LocationSelection> {
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng)?;
    let gateways = gateways.inner().clone();
    let address = blocking(move || {
        let services = gateways.location_services(&NO_POSITION);
        location::address_of_position(&services, pos)
    })
    .await?
    .unwrap_or_else(|| pos.to_lat_lng_string(6));
    Ok(Json(LocationSelection { address, pos }.into()))
}

/// Searches a location for the given input in one go.
#[post("/location/resolve", format = "application/json", data = "<query>")]
pub async fn post_resolve(
    gateways: &State<Gateways>,
    cfg: &State<Cfg>,
    query: JsonResult<'_, json::LocationQuery>,
) -> Result<json::LocationSearchResult> {
    let json::LocationQuery { input, enter } = query?.into_inner();
    let gateways = gateways.inner().clone();
    let config = cfg.location_search.clone();
    let result = blocking(move || {
        let services = gateways.location_services(&NO_POSITION);
        let mut search = location::search_once(config, &services, &input, Instant::now());
        if enter && search.suggestions().is_some() {
            search.enter(&services);
        }
        to_json::location_search_result(search.state())
    })
    .await?;
    Ok(Json(result))
}

/// Selects the address of the position reported by the client.
#[post("/location/current", format = "application/json", data = "<position>")]
pub async fn post_current(
    gateways: &State<Gateways>,
    cfg: &State<Cfg>,
    position: JsonResult<'_, json::ReportedPosition>,
) -> Result<json::LocationSearchResult> {
    let position: DevicePosition = position?.into_inner().try_into()?;
    let gateways = gateways.inner().clone();
    let config = cfg.location_search.clone();
    let result = blocking(move || {
        let device = ReportedPosition(Some(position));
        let services = gateways.location_services(&device);
        let mut search = LocationSearch::new(config);
        search.use_current_location(&services);
        to_json::location_search_result(search.state())
    })
    .await?;
    Ok(Json(result))
}
