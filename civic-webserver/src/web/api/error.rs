use super::json_error_response;
use anyhow::anyhow;
use civic_application::error::{AppError, BError};
use civic_core::gateways::geocode::{GeocodingError, GeocodingErrorKind};
pub use civic_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error(transparent)]
    Location(#[from] GeocodingError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity),
            JsonError::Parse(_str, err) => {
                Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity)
            }
        }
    }
}

fn location_status(kind: &GeocodingErrorKind) -> Status {
    match kind {
        GeocodingErrorKind::MissingApiKey | GeocodingErrorKind::ServiceUnavailable => {
            Status::ServiceUnavailable
        }
        GeocodingErrorKind::NetworkError => Status::BadGateway,
        GeocodingErrorKind::Status(_) | GeocodingErrorKind::NotFound => Status::NotFound,
        GeocodingErrorKind::Unsupported | GeocodingErrorKind::GeolocationFailed => {
            Status::BadRequest
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::App(err) => {
                if let AppError::Business(err) = &err {
                    match err {
                        BError::Parameter(err) => {
                            return match err {
                                ParameterError::Credentials | ParameterError::Unauthorized => {
                                    json_error_response(req, err, Status::Unauthorized)
                                }
                                ParameterError::Forbidden => {
                                    json_error_response(req, err, Status::Forbidden)
                                }
                                ParameterError::Location(geo) => {
                                    json_error_response(req, err, location_status(&geo.kind))
                                }
                                _ => json_error_response(req, err, Status::BadRequest),
                            };
                        }
                        BError::Repo(RepoError::NotFound) => {
                            return json_error_response(req, err, Status::NotFound);
                        }
                        BError::Repo(RepoError::AlreadyExists) => {
                            return json_error_response(req, err, Status::Conflict);
                        }
                        _ => {}
                    }
                }
                error!("Error: {err}");
                json_error_response(req, &err, Status::InternalServerError)
            }
            Error::Location(err) => {
                let status = location_status(&err.kind);
                json_error_response(req, &err, status)
            }
            Error::OtherWithStatus(err, status) => json_error_response(req, &err, status),
            Error::Other(err) => {
                error!("Error: {err}");
                json_error_response(req, &err, Status::InternalServerError)
            }
        }
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        AppError::from(err).into()
    }
}

impl From<BError> for Error {
    fn from(err: BError) -> Self {
        AppError::from(err).into()
    }
}

impl From<ParameterError> for Error {
    fn from(err: ParameterError) -> Self {
        Self::App(err.into())
    }
}

impl From<civic_entities::email::EmailAddressParseError> for Error {
    fn from(err: civic_entities::email::EmailAddressParseError) -> Self {
        Self::OtherWithStatus(err.into(), Status::BadRequest)
    }
}

impl From<civic_entities::geo::MapPointError> for Error {
    fn from(err: civic_entities::geo::MapPointError) -> Self {
        ParameterError::from(err).into()
    }
}
