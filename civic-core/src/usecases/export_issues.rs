use super::{filter_issues::*, prelude::*};

pub const EXPORT_COLUMNS: [&str; 9] = [
    "ID",
    "Title",
    "Category",
    "Status",
    "Location",
    "Description",
    "Urgency Score",
    "Created At",
    "Reported By",
];

/// One line of the spreadsheet export.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueExportRecord {
    pub id            : String,
    pub title         : String,
    pub category      : String,
    pub status        : String,
    pub location      : String,
    pub description   : String,
    pub urgency_score : u8,
    pub created_at    : String,
    pub reported_by   : String,
}

impl From<&Issue> for IssueExportRecord {
    fn from(issue: &Issue) -> Self {
        Self {
            id: issue.id.to_string(),
            title: issue.title.clone(),
            category: issue.category.to_string(),
            status: issue.status.to_string(),
            location: issue.location_text.clone(),
            description: issue.description.clone(),
            urgency_score: issue.urgency_score(),
            created_at: issue.created_at.format_rfc3339(),
            reported_by: issue.reporter.display_name().to_owned(),
        }
    }
}

impl IssueExportRecord {
    pub fn into_row(self) -> [String; 9] {
        [
            self.id,
            self.title,
            self.category,
            self.status,
            self.location,
            self.description,
            self.urgency_score.to_string(),
            self.created_at,
            self.reported_by,
        ]
    }
}

/// The filtered issue list in export order.
pub fn export_issues<R: IssueRepo>(repo: &R, filter: &IssueFilter) -> Result<Vec<IssueExportRecord>> {
    let issues = load_filtered_issues(repo, filter)?;
    if issues.is_empty() {
        return Err(Error::EmptyExport);
    }
    log::info!("Exporting {} issues", issues.len());
    Ok(issues.iter().map(IssueExportRecord::from).collect())
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use civic_entities::builders::*;

    #[test]
    fn export_filtered_issues_in_list_order() {
        let db = MockDb::default();
        db.issues.borrow_mut().extend([
            Issue::build()
                .id("a")
                .title("Noisy bar")
                .category(Category::Noise)
                .priority(Priority::High)
                .created_at(1_000)
                .finish(),
            Issue::build()
                .id("b")
                .title("Loud music")
                .category(Category::Noise)
                .reporter("p", "Jane")
                .created_at(2_000)
                .finish(),
            Issue::build()
                .id("c")
                .title("Pothole")
                .category(Category::Infrastructure)
                .created_at(3_000)
                .finish(),
        ]);
        let filter = IssueFilter {
            category: Some("Noise".into()),
            ..Default::default()
        };
        let records = export_issues(&db, &filter).unwrap();
        assert_eq!(2, records.len());
        assert_eq!("b", records[0].id);
        assert_eq!("Jane", records[0].reported_by);
        assert_eq!(25, records[0].urgency_score);
        assert_eq!("a", records[1].id);
        assert_eq!("Anonymous", records[1].reported_by);
        assert_eq!(75, records[1].urgency_score);
        assert_eq!("open", records[1].status);
        let row = records[1].clone().into_row();
        assert_eq!("Noise", row[2]);
        assert_eq!("75", row[6]);
        assert_eq!("1970-01-01T00:00:01Z", row[7]);
    }

    #[test]
    fn nothing_to_export() {
        let db = MockDb::default();
        assert!(matches!(
            export_issues(&db, &IssueFilter::default()),
            Err(Error::EmptyExport)
        ));
        db.issues.borrow_mut().push(Issue::build().title("x").finish());
        let filter = IssueFilter {
            search: Some("nothing".into()),
            ..Default::default()
        };
        let err = export_issues(&db, &filter).unwrap_err();
        assert_eq!("No issues to export", err.to_string());
    }
}
