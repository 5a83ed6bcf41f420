use super::prelude::*;

const ALL: &str = "all";

/// Criteria of the issue list.
///
/// Empty values and `"all"` do not constrain the list.
#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueFilter {
    /// Case-insensitive text in title, description or location
    pub search   : Option<String>,
    pub category : Option<String>,
    pub priority : Option<String>,
    pub status   : Option<String>,
    /// Part of the location text
    pub location : Option<String>,
}

fn criterion(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(ALL))
}

impl IssueFilter {
    /// Number of criteria that actually constrain the list.
    pub fn active_count(&self) -> usize {
        let Self {
            search,
            category,
            priority,
            status,
            location,
        } = self;
        [search, category, priority, status, location]
            .into_iter()
            .filter_map(criterion)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    pub fn matches(&self, issue: &Issue) -> bool {
        if let Some(search) = criterion(&self.search) {
            let search = search.to_lowercase();
            let found = [&issue.title, &issue.description, &issue.location_text]
                .into_iter()
                .any(|text| text.to_lowercase().contains(&search));
            if !found {
                return false;
            }
        }
        if let Some(category) = criterion(&self.category) {
            if !issue.category.as_ref().eq_ignore_ascii_case(category) {
                return false;
            }
        }
        if let Some(priority) = criterion(&self.priority) {
            if !issue.priority.as_ref().eq_ignore_ascii_case(priority) {
                return false;
            }
        }
        if let Some(status) = criterion(&self.status) {
            if !issue.status.as_ref().eq_ignore_ascii_case(status) {
                return false;
            }
        }
        if let Some(location) = criterion(&self.location) {
            if !issue.location_text.contains(location) {
                return false;
            }
        }
        true
    }
}

/// Keeps the order of the given issues.
pub fn filter_issues(issues: Vec<Issue>, filter: &IssueFilter) -> Vec<Issue> {
    if filter.is_empty() {
        return issues;
    }
    let issues: Vec<_> = issues.into_iter().filter(|i| filter.matches(i)).collect();
    log::debug!(
        "{} issues match {} filter criteria",
        issues.len(),
        filter.active_count()
    );
    issues
}

/// Newest issues first that match the filter.
pub fn load_filtered_issues<R: IssueRepo>(repo: &R, filter: &IssueFilter) -> Result<Vec<Issue>> {
    let issues = super::load_issues(repo)?;
    Ok(filter_issues(issues, filter))
}
