use crate::{entities::*, util::validate};

mod change_issue_status;
mod error;
mod export_issues;
mod filter_issues;
mod login;
mod profile;
mod register;
mod report_issue;
mod upload_photo;

#[cfg(test)]
pub mod tests;

type Result<T> = std::result::Result<T, Error>;

pub use self::{
    change_issue_status::*, error::Error, export_issues::*, filter_issues::*, login::*,
    profile::*, register::*, report_issue::*, upload_photo::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
use self::prelude::*;

pub fn get_issue<R: IssueRepo>(repo: &R, id: &str) -> Result<Issue> {
    Ok(repo.get_issue(id)?)
}

/// All issues, newest first.
pub fn load_issues<R: IssueRepo>(repo: &R) -> Result<Vec<Issue>> {
    let mut issues = repo.all_issues()?;
    issues.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(issues)
}

/// Validated position from optional raw coordinates.
///
/// Both or none of the coordinates must be present.
pub fn parse_position(lat: Option<f64>, lng: Option<f64>) -> Result<Option<MapPoint>> {
    match (lat, lng) {
        (Some(lat), Some(lng)) => Ok(Some(MapPoint::try_from_lat_lng_deg(lat, lng)?)),
        (None, None) => Ok(None),
        _ => Err(Error::InvalidPosition),
    }
}

pub fn is_valid_email(email: &EmailAddress) -> bool {
    validate::is_valid_email(email.as_str())
}
