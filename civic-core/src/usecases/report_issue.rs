use super::{parse_position, prelude::*};
use crate::util::validate::{AutoCorrect, Validate};

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewIssue {
    pub title         : String,
    pub description   : String,
    pub category      : Option<String>,
    pub priority      : Option<String>,
    pub location_text : String,
    pub lat           : Option<f64>,
    pub lng           : Option<f64>,
    pub photos        : Vec<String>,
    pub contact_info  : Option<String>,
}

/// Stores a new issue on behalf of the reporter.
///
/// Only users may report issues. The reporter name is taken
/// from the reporter's profile.
pub fn report_issue<R: IssueRepo>(repo: &R, reporter: &Profile, new_issue: NewIssue) -> Result<Issue> {
    if reporter.role != Role::User {
        log::info!("Refusing issue report from {:?} {}", reporter.role, reporter.id);
        return Err(Error::Forbidden);
    }
    let NewIssue {
        title,
        description,
        category,
        priority,
        location_text,
        lat,
        lng,
        photos,
        contact_info,
    } = new_issue;
    let pos = parse_position(lat, lng)?;
    let issue = Issue {
        id: Id::new(),
        title,
        description,
        category: Category::parse_or_default(category.as_deref()),
        priority: Priority::parse_or_default(priority.as_deref()),
        status: IssueStatus::Open,
        location_text,
        pos,
        photos,
        contact_info,
        reporter: Reporter {
            id: Some(reporter.id.clone()),
            name: reporter.name.clone(),
        },
        created_at: Timestamp::now(),
    }
    .auto_correct();
    issue.validate()?;
    log::info!("Reporting new issue {} ({})", issue.id, issue.category);
    repo.create_issue(&issue)?;
    Ok(issue)
}
