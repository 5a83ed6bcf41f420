// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use civic_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod issue;
mod profile;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn read_only_violation() -> repo::Error {
    anyhow!("Write access to a read-only database connection").into()
}

fn load_pos(lat: Option<f64>, lng: Option<f64>) -> Result<Option<MapPoint>> {
    match (lat, lng) {
        (Some(lat), Some(lng)) => MapPoint::try_from_lat_lng_deg(lat, lng)
            .map(Some)
            .map_err(|err| anyhow!("Invalid position ({lat}, {lng}): {err}").into()),
        (None, None) => Ok(None),
        _ => Err(anyhow!("Incomplete position ({lat:?}, {lng:?})").into()),
    }
}
