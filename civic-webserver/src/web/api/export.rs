use super::*;

#[get("/export/issues.csv?<query..>")]
pub fn csv_export(
    db: sqlite::Connections,
    _account: Account,
    query: IssueQuery,
) -> result::Result<(ContentType, String), ApiError> {
    let filter = usecases::IssueFilter::from(query);
    let data = flows::export_issues_csv(&db, &filter)?;
    Ok((ContentType::CSV, data))
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn export_requires_login() {
        let (client, _) = setup();
        let res = client.get("/export/issues.csv").dispatch();
        assert_eq!(Status::Unauthorized, res.status());
    }

    #[test]
    fn export_filtered_issues() {
        let (client, db) = setup();
        let jane = register_profile(&db, "jane@example.org", "secret");
        create_issue(&db, jane.id.as_str(), "Broken bench", "Park", "Vandalism");
        create_issue(&db, jane.id.as_str(), "Night noise", "Park", "Noise");
        login(&client, "jane@example.org", "secret");

        let res = client.get("/export/issues.csv?category=Noise").dispatch();
        assert_eq!(Status::Ok, res.status());
        assert_eq!(Some(ContentType::CSV), res.content_type());
        let body = res.into_string().unwrap();
        let lines: Vec<_> = body.lines().collect();
        assert_eq!(2, lines.len());
        assert!(lines[0].starts_with("ID,Title,Category,Status,Location"));
        assert!(lines[1].contains(",Night noise,Noise,open,Park,"));
    }

    #[test]
    fn nothing_to_export() {
        let (client, db) = setup();
        register_profile(&db, "jane@example.org", "secret");
        login(&client, "jane@example.org", "secret");
        let res = client.get("/export/issues.csv").dispatch();
        assert_eq!(Status::BadRequest, res.status());
        let err: json::Error = serde_json::from_str(&res.into_string().unwrap()).unwrap();
        assert_eq!("No issues to export", err.message);
    }
}
