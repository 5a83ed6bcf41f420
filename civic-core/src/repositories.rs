// Low-level database access traits.
// Each repository is responsible for a single entity.
// Related entities are only referenced by their id.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait IssueRepo {
    fn create_issue(&self, issue: &Issue) -> Result<()>;
    fn get_issue(&self, id: &str) -> Result<Issue>;

    /// All issues, newest first.
    fn all_issues(&self) -> Result<Vec<Issue>>;

    fn update_issue_status(&self, id: &str, status: IssueStatus) -> Result<()>;
    fn count_issues(&self) -> Result<usize>;
}

pub trait ProfileRepo {
    fn create_profile(&self, profile: &Profile) -> Result<()>;
    fn update_profile(&self, profile: &Profile) -> Result<()>;
    fn get_profile(&self, id: &str) -> Result<Profile>;
    fn try_get_profile_by_email(&self, email: &EmailAddress) -> Result<Option<Profile>>;

    fn get_profile_by_email(&self, email: &EmailAddress) -> Result<Profile> {
        self.try_get_profile_by_email(email)?
            .ok_or(Error::NotFound)
    }
}
