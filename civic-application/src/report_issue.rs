use super::*;

/// Reports a new issue on behalf of the (logged in) reporter.
pub fn report_issue(
    connections: &sqlite::Connections,
    reporter: &Profile,
    new_issue: usecases::NewIssue,
) -> Result<Issue> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::report_issue(conn, reporter, new_issue).inspect_err(|err| {
            log::warn!("Failed to report a new issue: {err}");
        })
    })?)
}
