use std::cell::RefCell;

use super::prelude::*;

pub use crate::repositories::Error as RepoError;

#[derive(Debug, Default)]
pub struct MockDb {
    pub issues: RefCell<Vec<Issue>>,
    pub profiles: RefCell<Vec<Profile>>,
}

type RepoResult<T> = std::result::Result<T, RepoError>;

impl IssueRepo for MockDb {
    fn create_issue(&self, issue: &Issue) -> RepoResult<()> {
        let mut issues = self.issues.borrow_mut();
        if issues.iter().any(|i| i.id == issue.id) {
            return Err(RepoError::AlreadyExists);
        }
        issues.push(issue.clone());
        Ok(())
    }

    fn get_issue(&self, id: &str) -> RepoResult<Issue> {
        self.issues
            .borrow()
            .iter()
            .find(|i| i.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn all_issues(&self) -> RepoResult<Vec<Issue>> {
        Ok(self.issues.borrow().clone())
    }

    fn update_issue_status(&self, id: &str, status: IssueStatus) -> RepoResult<()> {
        let mut issues = self.issues.borrow_mut();
        let issue = issues
            .iter_mut()
            .find(|i| i.id.as_str() == id)
            .ok_or(RepoError::NotFound)?;
        issue.status = status;
        Ok(())
    }

    fn count_issues(&self) -> RepoResult<usize> {
        Ok(self.issues.borrow().len())
    }
}

impl ProfileRepo for MockDb {
    fn create_profile(&self, profile: &Profile) -> RepoResult<()> {
        let mut profiles = self.profiles.borrow_mut();
        if profiles
            .iter()
            .any(|p| p.id == profile.id || p.email == profile.email)
        {
            return Err(RepoError::AlreadyExists);
        }
        profiles.push(profile.clone());
        Ok(())
    }

    fn update_profile(&self, profile: &Profile) -> RepoResult<()> {
        let mut profiles = self.profiles.borrow_mut();
        let p = profiles
            .iter_mut()
            .find(|p| p.id == profile.id)
            .ok_or(RepoError::NotFound)?;
        *p = profile.clone();
        Ok(())
    }

    fn get_profile(&self, id: &str) -> RepoResult<Profile> {
        self.profiles
            .borrow()
            .iter()
            .find(|p| p.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn try_get_profile_by_email(&self, email: &EmailAddress) -> RepoResult<Option<Profile>> {
        Ok(self
            .profiles
            .borrow()
            .iter()
            .find(|p| &p.email == email)
            .cloned())
    }
}
