use super::{parse_position, prelude::*};
use crate::{
    location::{address_of_position, LocationServices},
    util::validate::AutoCorrect,
};

/// Editable profile fields.
#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name              : Option<String>,
    pub phone             : Option<String>,
    pub avatar_url        : Option<String>,
    pub organization_name : Option<String>,
    pub location_text     : Option<String>,
    pub lat               : Option<f64>,
    pub lng               : Option<f64>,
}

pub fn get_profile<R: ProfileRepo>(repo: &R, id: &str) -> Result<Profile> {
    Ok(repo.get_profile(id)?)
}

/// Finishes the signup by choosing a role and filling in the profile.
pub fn complete_profile<R: ProfileRepo>(
    repo: &R,
    account: &Profile,
    role: &str,
    update: ProfileUpdate,
) -> Result<Profile> {
    let role = role.trim().parse::<Role>().map_err(|_| Error::Role)?;
    let mut profile = account.clone();
    profile.role = role;
    apply_update(&mut profile, update)?;
    profile.is_complete = true;
    let profile = profile.auto_correct();
    log::info!("Completed profile {} as {}", profile.id, profile.role);
    repo.update_profile(&profile)?;
    Ok(profile)
}

/// Changes the profile fields without touching the role.
pub fn update_profile<R: ProfileRepo>(
    repo: &R,
    account: &Profile,
    update: ProfileUpdate,
) -> Result<Profile> {
    let mut profile = account.clone();
    apply_update(&mut profile, update)?;
    let profile = profile.auto_correct();
    log::debug!("Updating profile {}", profile.id);
    repo.update_profile(&profile)?;
    Ok(profile)
}

fn apply_update(profile: &mut Profile, update: ProfileUpdate) -> Result<()> {
    let ProfileUpdate {
        name,
        phone,
        avatar_url,
        organization_name,
        location_text,
        lat,
        lng,
    } = update;
    profile.home_pos = parse_position(lat, lng)?;
    profile.name = name;
    profile.phone = phone;
    profile.avatar_url = avatar_url;
    profile.organization_name = organization_name;
    profile.location_text = location_text;
    Ok(())
}

/// Suggests the home location from the current device position.
///
/// Without any address for the position the location text is made
/// of the coordinates.
pub fn autofill_profile_location(
    services: &LocationServices,
    options: &GeolocationOptions,
) -> Result<LocationSelection> {
    let position = services.geolocation.current_position(options)?;
    let pos = position.pos;
    let address = address_of_position(services, pos)
        .unwrap_or_else(|| format!("Lat {:.5}, Lng {:.5}", pos.lat(), pos.lng()));
    Ok(LocationSelection { address, pos })
}
