use super::*;
use civic_core::map::MapView;

/// Markers of the filtered issues and the viewport around the
/// highlighted issue.
#[get("/map?<highlighted>&<query..>")]
pub fn get_map(
    db: sqlite::Connections,
    cfg: &State<Cfg>,
    highlighted: Option<&str>,
    query: IssueQuery,
) -> Result<json::MapView> {
    let filter = usecases::IssueFilter::from(query);
    let issues = usecases::load_filtered_issues(&db.shared()?, &filter)?;
    let mut view = MapView::new(cfg.map);
    let patches = view.set_issues(issues);
    trace!("Applied {} marker patches", patches.len());
    view.set_highlighted(highlighted.map(Id::from));
    Ok(Json(to_json::map_view(&view)))
}
