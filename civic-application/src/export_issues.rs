use super::*;

/// The filtered issues as CSV with a header line.
pub fn export_issues_csv(
    connections: &sqlite::Connections,
    filter: &usecases::IssueFilter,
) -> Result<String> {
    let records = {
        let db = connections.shared()?;
        usecases::export_issues(&db, filter)?
    };
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(usecases::EXPORT_COLUMNS)?;
    for record in records {
        wtr.write_record(record.into_row())?;
    }
    wtr.flush()?;
    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}
