use super::*;

#[get("/issues?<query..>")]
pub fn get_issues(db: sqlite::Connections, query: IssueQuery) -> Result<json::IssueList> {
    let filter = usecases::IssueFilter::from(query);
    let issues = usecases::load_filtered_issues(&db.shared()?, &filter)?;
    Ok(Json(to_json::issue_list(issues, filter.active_count())))
}

#[get("/issues/<id>")]
pub fn get_issue(db: sqlite::Connections, id: &str) -> Result<json::Issue> {
    let issue = usecases::get_issue(&db.shared()?, id)?;
    Ok(Json(issue.into()))
}

#[post("/issues", format = "application/json", data = "<new_issue>")]
pub fn post_issue(
    db: sqlite::Connections,
    account: Account,
    new_issue: JsonResult<json::NewIssue>,
) -> Result<json::Issue> {
    let new_issue = from_json::new_issue(new_issue?.into_inner());
    let issue = flows::report_issue(&db, account.profile(), new_issue)?;
    Ok(Json(issue.into()))
}

#[put("/issues/<id>/status", format = "application/json", data = "<change>")]
pub fn put_issue_status(
    db: sqlite::Connections,
    account: Account,
    id: &str,
    change: JsonResult<json::IssueStatusChange>,
) -> Result<json::Issue> {
    let status = IssueStatus::from(change?.into_inner().status);
    let issue = flows::change_issue_status(&db, account.profile(), id, status)?;
    Ok(Json(issue.into()))
}
