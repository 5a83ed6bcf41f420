use civic_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use std::io;
use thiserror::Error;

pub use civic_core::repositories;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> AppError {
        match err {
            ParameterError::Repo(err) => err.into(),
            err => AppError::Business(err.into()),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    String(#[from] ::std::string::FromUtf8Error),
    #[error(transparent)]
    Csv(#[from] ::csv::Error),
}

impl<W: io::Write> From<::csv::IntoInnerError<::csv::Writer<W>>> for AppError {
    fn from(err: ::csv::IntoInnerError<::csv::Writer<W>>) -> Self {
        Self::Io(err.into_error())
    }
}

impl From<civic_entities::password::ParseError> for AppError {
    fn from(err: civic_entities::password::ParseError) -> Self {
        BError::from(err).into()
    }
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<String> for BError {
    fn from(s: String) -> Self {
        Self::Internal(s)
    }
}

impl From<civic_entities::password::ParseError> for BError {
    fn from(_: civic_entities::password::ParseError) -> Self {
        Self::Parameter(ParameterError::Password)
    }
}

impl From<civic_entities::geo::MapPointError> for BError {
    fn from(_: civic_entities::geo::MapPointError) -> Self {
        Self::Parameter(ParameterError::InvalidPosition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repo_errors_are_not_parameter_errors() {
        let err = AppError::from(ParameterError::Repo(RepoError::NotFound));
        assert!(matches!(
            err,
            AppError::Business(BError::Repo(RepoError::NotFound))
        ));
        let err = AppError::from(ParameterError::Title);
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(ParameterError::Title))
        ));
    }
}
