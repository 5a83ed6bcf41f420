use thiserror::Error;

use crate::entities::*;

pub use fast_chemail::is_valid_email;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub trait AutoCorrect {
    fn auto_correct(self) -> Self;
}

/// Trims the value and drops it if nothing remains.
pub fn non_blank(s: Option<String>) -> Option<String> {
    s.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IssueInvalidation {
    #[error("Missing title")]
    Title,
    #[error("Missing description")]
    Description,
}

impl Validate for Issue {
    type Error = IssueInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.title.trim().is_empty() {
            return Err(Self::Error::Title);
        }
        if self.description.trim().is_empty() {
            return Err(Self::Error::Description);
        }
        Ok(())
    }
}

impl AutoCorrect for Issue {
    fn auto_correct(mut self) -> Self {
        self.title = self.title.trim().to_owned();
        self.description = self.description.trim().to_owned();
        self.location_text = self.location_text.trim().to_owned();
        self.contact_info = non_blank(self.contact_info);
        self.photos.retain(|url| !url.trim().is_empty());
        self
    }
}

impl AutoCorrect for Profile {
    fn auto_correct(mut self) -> Self {
        self.name = non_blank(self.name);
        self.phone = non_blank(self.phone);
        self.avatar_url = non_blank(self.avatar_url);
        self.location_text = non_blank(self.location_text);
        self.organization_name = if self.role == Role::Admin {
            non_blank(self.organization_name)
        } else {
            None
        };
        self
    }
}
