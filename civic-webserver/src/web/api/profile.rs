use super::*;
use civic_core::gateways::geolocation::ReportedPosition;

#[get("/profile")]
pub fn get_profile(account: Account) -> Json<json::Profile> {
    Json(account.into_profile().into())
}

#[put("/profile", format = "application/json", data = "<update>")]
pub fn put_profile(
    db: sqlite::Connections,
    account: Account,
    update: JsonResult<json::ProfileUpdate>,
) -> Result<json::Profile> {
    let update = from_json::profile_update(update?.into_inner());
    let profile = flows::update_profile(&db, account.profile(), update)?;
    Ok(Json(profile.into()))
}

#[post("/profile/complete", format = "application/json", data = "<completion>")]
pub fn post_profile_complete(
    db: sqlite::Connections,
    account: Account,
    completion: JsonResult<json::ProfileCompletion>,
) -> Result<json::Profile> {
    let json::ProfileCompletion { role, profile } = completion?.into_inner();
    let update = from_json::profile_update(profile);
    let profile = flows::complete_profile(&db, account.profile(), &role, update)?;
    Ok(Json(profile.into()))
}

/// Suggests a home location for the reported device position.
///
/// Nothing is stored: the client decides whether to keep it.
#[post(
    "/profile/location/autofill",
    format = "application/json",
    data = "<position>"
)]
pub async fn post_profile_location_autofill(
    _account: Account,
    gateways: &State<Gateways>,
    cfg: &State<Cfg>,
    position: JsonResult<'_, json::ReportedPosition>,
) -> Result<json::LocationSelection> {
    let position: DevicePosition = position?.into_inner().try_into()?;
    let gateways = gateways.inner().clone();
    let options = cfg.location_search.geolocation.clone();
    let selection = blocking(move || {
        let device = ReportedPosition(Some(position));
        let services = gateways.location_services(&device);
        usecases::autofill_profile_location(&services, &options)
    })
    .await??;
    Ok(Json(selection.into()))
}
