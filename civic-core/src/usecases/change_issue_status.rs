use super::prelude::*;

pub fn change_issue_status<R: IssueRepo>(
    repo: &R,
    account: &Profile,
    issue_id: &str,
    status: IssueStatus,
) -> Result<Issue> {
    if !account.is_admin() {
        return Err(Error::Forbidden);
    }
    log::info!("Changing status of issue {issue_id} to {status}");
    repo.update_issue_status(issue_id, status)?;
    Ok(repo.get_issue(issue_id)?)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use civic_entities::builders::*;

    #[test]
    fn only_admins_change_status() {
        let db = MockDb::default();
        db.issues
            .borrow_mut()
            .push(Issue::build().id("i").finish());
        let user = Profile::build().role(Role::User).finish();
        assert!(matches!(
            change_issue_status(&db, &user, "i", IssueStatus::Resolved),
            Err(Error::Forbidden)
        ));
        assert_eq!(IssueStatus::Open, db.issues.borrow()[0].status);

        let admin = Profile::build().role(Role::Admin).finish();
        let issue = change_issue_status(&db, &admin, "i", IssueStatus::Resolved).unwrap();
        assert_eq!(IssueStatus::Resolved, issue.status);
        assert!(change_issue_status(&db, &admin, "x", IssueStatus::Resolved).is_err());
    }
}
