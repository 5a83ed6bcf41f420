use crate::{
    gateways::geocode::GeocodingError,
    repositories,
    util::validate::IssueInvalidation,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The title is missing")]
    Title,
    #[error("The description is missing")]
    Description,
    #[error("Invalid email address")]
    EmailAddress,
    #[error("Invalid password")]
    Password,
    #[error("The user already exists")]
    UserExists,
    #[error("Invalid credentials")]
    Credentials,
    #[error("This is not allowed")]
    Forbidden,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Invalid category")]
    Category,
    #[error("Invalid issue status")]
    IssueStatus,
    #[error("Invalid role")]
    Role,
    #[error("Empty photo")]
    EmptyPhoto,
    #[error("No issues to export")]
    EmptyExport,
    #[error("Location unavailable: {0}")]
    Location(#[from] GeocodingError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<civic_entities::password::ParseError> for Error {
    fn from(_: civic_entities::password::ParseError) -> Self {
        Self::Password
    }
}

impl From<civic_entities::email::EmailAddressParseError> for Error {
    fn from(_: civic_entities::email::EmailAddressParseError) -> Self {
        Self::EmailAddress
    }
}

impl From<civic_entities::geo::MapPointError> for Error {
    fn from(_: civic_entities::geo::MapPointError) -> Self {
        Self::InvalidPosition
    }
}

impl From<IssueInvalidation> for Error {
    fn from(err: IssueInvalidation) -> Self {
        match err {
            IssueInvalidation::Title => Self::Title,
            IssueInvalidation::Description => Self::Description,
        }
    }
}
