use super::*;

pub fn change_issue_status(
    connections: &sqlite::Connections,
    account: &Profile,
    issue_id: &str,
    status: IssueStatus,
) -> Result<Issue> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::change_issue_status(conn, account, issue_id, status).inspect_err(|err| {
            log::warn!("Failed to change status of issue {issue_id}: {err}");
        })
    })?)
}
