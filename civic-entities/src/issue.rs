use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::*;
use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString};
use thiserror::Error;

use crate::{geo::MapPoint, id::Id, time::Timestamp};

pub type CategoryPrimitive = i16;
pub type PriorityPrimitive = i16;
pub type IssueStatusPrimitive = i16;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub id            : Id,
    pub title         : String,
    pub description   : String,
    pub category      : Category,
    pub priority      : Priority,
    pub status        : IssueStatus,
    pub location_text : String,
    pub pos           : Option<MapPoint>,
    pub photos        : Vec<String>,
    pub contact_info  : Option<String>,
    pub reporter      : Reporter,
    pub created_at    : Timestamp,
}

impl Issue {
    pub fn urgency_score(&self) -> u8 {
        self.priority.urgency_score()
    }
}

/// Identity of the user that reported an issue.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reporter {
    pub id: Option<Id>,
    pub name: Option<String>,
}

impl Reporter {
    pub const ANONYMOUS: &'static str = "Anonymous";

    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(Self::ANONYMOUS)
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
         FromPrimitive, ToPrimitive, EnumIter, EnumCount, EnumString, Display, AsRefStr)]
#[strum(ascii_case_insensitive)]
pub enum Category {
    Infrastructure = 1,
    Utilities      = 2,
    #[strum(serialize = "Public Safety")]
    PublicSafety   = 3,
    Environment    = 4,
    Transportation = 5,
    Vandalism      = 6,
    Noise          = 7,
    #[default]
    Other          = 0,
}

impl Category {
    /// Unknown or missing values are read as [`Category::Other`].
    pub fn parse_or_default(s: Option<&str>) -> Self {
        s.and_then(|s| s.trim().parse().ok()).unwrap_or_default()
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
         FromPrimitive, ToPrimitive, EnumIter, EnumCount, EnumString, Display, AsRefStr)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Priority {
    #[default]
    Low    = 0,
    Medium = 1,
    High   = 2,
    Urgent = 3,
}

impl Priority {
    pub const fn urgency_score(self) -> u8 {
        match self {
            Self::Urgent => 90,
            Self::High => 75,
            Self::Medium => 50,
            Self::Low => 25,
        }
    }

    /// Unknown or missing values are read as [`Priority::Low`].
    pub fn parse_or_default(s: Option<&str>) -> Self {
        s.and_then(|s| s.trim().parse().ok()).unwrap_or_default()
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
         FromPrimitive, ToPrimitive, EnumIter, EnumCount, EnumString, Display, AsRefStr)]
#[strum(ascii_case_insensitive, serialize_all = "snake_case")]
pub enum IssueStatus {
    Rejected   = -1,
    #[default]
    Open       =  0,
    InProgress =  1,
    Resolved   =  2,
}

#[derive(Debug, Error)]
#[error("Invalid category primitive: {0}")]
pub struct InvalidCategoryPrimitive(CategoryPrimitive);

#[derive(Debug, Error)]
#[error("Invalid priority primitive: {0}")]
pub struct InvalidPriorityPrimitive(PriorityPrimitive);

#[derive(Debug, Error)]
#[error("Invalid issue status primitive: {0}")]
pub struct InvalidIssueStatusPrimitive(IssueStatusPrimitive);

impl TryFrom<i16> for Category {
    type Error = InvalidCategoryPrimitive;
    fn try_from(from: CategoryPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidCategoryPrimitive(from))
    }
}

impl From<Category> for CategoryPrimitive {
    fn from(from: Category) -> Self {
        from.to_i16().unwrap_or_default()
    }
}

impl TryFrom<i16> for Priority {
    type Error = InvalidPriorityPrimitive;
    fn try_from(from: PriorityPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidPriorityPrimitive(from))
    }
}

impl From<Priority> for PriorityPrimitive {
    fn from(from: Priority) -> Self {
        from.to_i16().unwrap_or_default()
    }
}

impl TryFrom<i16> for IssueStatus {
    type Error = InvalidIssueStatusPrimitive;
    fn try_from(from: IssueStatusPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidIssueStatusPrimitive(from))
    }
}

impl From<IssueStatus> for IssueStatusPrimitive {
    fn from(from: IssueStatus) -> Self {
        from.to_i16().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn category_names() {
        assert_eq!("Public Safety", Category::PublicSafety.to_string());
        assert_eq!(Category::PublicSafety, "public safety".parse().unwrap());
        assert_eq!(Category::Other, Category::parse_or_default(None));
        assert_eq!(Category::Other, Category::parse_or_default(Some("Potholes")));
        assert_eq!(Category::Noise, Category::parse_or_default(Some(" Noise ")));
        assert_eq!(8, Category::COUNT);
    }

    #[test]
    fn priority_urgency_scores() {
        assert_eq!(90, Priority::Urgent.urgency_score());
        assert_eq!(75, Priority::High.urgency_score());
        assert_eq!(50, Priority::Medium.urgency_score());
        assert_eq!(25, Priority::Low.urgency_score());
        assert_eq!(Priority::Low, Priority::parse_or_default(None));
        assert_eq!(Priority::Urgent, Priority::parse_or_default(Some("URGENT")));
    }

    #[test]
    fn status_names() {
        assert_eq!("in_progress", IssueStatus::InProgress.to_string());
        assert_eq!(IssueStatus::Open, IssueStatus::default());
        assert_eq!(IssueStatus::Resolved, "resolved".parse().unwrap());
    }

    #[test]
    fn primitives_round_trip() {
        for c in Category::iter() {
            assert_eq!(c, Category::try_from(<CategoryPrimitive as From<Category>>::from(c)).unwrap());
        }
        for s in IssueStatus::iter() {
            assert_eq!(s, IssueStatus::try_from(<IssueStatusPrimitive as From<IssueStatus>>::from(s)).unwrap());
        }
        assert!(Priority::try_from(42_i16).is_err());
    }

    #[test]
    fn anonymous_reporter() {
        assert_eq!("Anonymous", Reporter::default().display_name());
        let r = Reporter {
            id: None,
            name: Some("  ".into()),
        };
        assert_eq!("Anonymous", r.display_name());
        let r = Reporter {
            id: None,
            name: Some("Jane".into()),
        };
        assert_eq!("Jane", r.display_name());
    }
}
