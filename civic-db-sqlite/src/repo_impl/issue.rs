use super::*;

impl IssueRepo for DbReadOnly<'_> {
    fn create_issue(&self, _issue: &Issue) -> Result<()> {
        Err(read_only_violation())
    }
    fn get_issue(&self, id: &str) -> Result<Issue> {
        get_issue(&mut self.conn.borrow_mut(), id)
    }
    fn all_issues(&self) -> Result<Vec<Issue>> {
        all_issues(&mut self.conn.borrow_mut())
    }
    fn update_issue_status(&self, _id: &str, _status: IssueStatus) -> Result<()> {
        Err(read_only_violation())
    }
    fn count_issues(&self) -> Result<usize> {
        count_issues(&mut self.conn.borrow_mut())
    }
}

impl IssueRepo for DbReadWrite<'_> {
    fn create_issue(&self, issue: &Issue) -> Result<()> {
        create_issue(&mut self.conn.borrow_mut(), issue)
    }
    fn get_issue(&self, id: &str) -> Result<Issue> {
        get_issue(&mut self.conn.borrow_mut(), id)
    }
    fn all_issues(&self) -> Result<Vec<Issue>> {
        all_issues(&mut self.conn.borrow_mut())
    }
    fn update_issue_status(&self, id: &str, status: IssueStatus) -> Result<()> {
        update_issue_status(&mut self.conn.borrow_mut(), id, status)
    }
    fn count_issues(&self) -> Result<usize> {
        count_issues(&mut self.conn.borrow_mut())
    }
}

impl IssueRepo for DbConnection<'_> {
    fn create_issue(&self, issue: &Issue) -> Result<()> {
        create_issue(&mut self.conn.borrow_mut(), issue)
    }
    fn get_issue(&self, id: &str) -> Result<Issue> {
        get_issue(&mut self.conn.borrow_mut(), id)
    }
    fn all_issues(&self) -> Result<Vec<Issue>> {
        all_issues(&mut self.conn.borrow_mut())
    }
    fn update_issue_status(&self, id: &str, status: IssueStatus) -> Result<()> {
        update_issue_status(&mut self.conn.borrow_mut(), id, status)
    }
    fn count_issues(&self) -> Result<usize> {
        count_issues(&mut self.conn.borrow_mut())
    }
}

fn create_issue(conn: &mut SqliteConnection, issue: &Issue) -> Result<()> {
    let new_issue = models::NewIssue {
        id: issue.id.as_str(),
        title: &issue.title,
        description: &issue.description,
        category: issue.category.into(),
        priority: issue.priority.into(),
        status: issue.status.into(),
        location_text: &issue.location_text,
        lat: issue.pos.map(MapPoint::lat),
        lng: issue.pos.map(MapPoint::lng),
        contact_info: issue.contact_info.as_deref(),
        reporter_id: issue.reporter.id.as_ref().map(Id::as_str),
        reporter_name: issue.reporter.name.as_deref(),
        created_at: issue.created_at.as_millis(),
    };
    diesel::insert_into(schema::issues::table)
        .values(&new_issue)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if issue.photos.is_empty() {
        return Ok(());
    }
    let parent_rowid = resolve_issue_rowid(conn, issue.id.as_str())?;
    let photos: Vec<_> = issue
        .photos
        .iter()
        .map(|url| models::NewIssuePhoto {
            parent_rowid,
            url: url.as_str(),
        })
        .collect();
    diesel::insert_into(schema::issue_photo::table)
        .values(&photos)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn resolve_issue_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::issues::dsl;
    schema::issues::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)
}

fn load_issue_photos(conn: &mut SqliteConnection, parent_rowid: i64) -> Result<Vec<String>> {
    use schema::issue_photo::dsl;
    schema::issue_photo::table
        .select(dsl::url)
        .filter(dsl::parent_rowid.eq(parent_rowid))
        .order_by(dsl::rowid)
        .load::<String>(conn)
        .map_err(from_diesel_err)
}

fn load_issue(conn: &mut SqliteConnection, entity: models::IssueEntity) -> Result<Issue> {
    let models::IssueEntity {
        rowid,
        id,
        title,
        description,
        category,
        priority,
        status,
        location_text,
        lat,
        lng,
        contact_info,
        reporter_id,
        reporter_name,
        created_at,
    } = entity;
    let category = Category::try_from(category).map_err(anyhow::Error::from)?;
    let priority = Priority::try_from(priority).map_err(anyhow::Error::from)?;
    let status = IssueStatus::try_from(status).map_err(anyhow::Error::from)?;
    let photos = load_issue_photos(conn, rowid)?;
    Ok(Issue {
        id: id.into(),
        title,
        description,
        category,
        priority,
        status,
        location_text,
        pos: load_pos(lat, lng)?,
        photos,
        contact_info,
        reporter: Reporter {
            id: reporter_id.map(Id::from),
            name: reporter_name,
        },
        created_at: Timestamp::from_millis(created_at),
    })
}

fn get_issue(conn: &mut SqliteConnection, id: &str) -> Result<Issue> {
    use schema::issues::dsl;
    let entity = dsl::issues
        .filter(dsl::id.eq(id))
        .first::<models::IssueEntity>(conn)
        .map_err(from_diesel_err)?;
    load_issue(conn, entity)
}

fn all_issues(conn: &mut SqliteConnection) -> Result<Vec<Issue>> {
    use schema::issues::dsl;
    let entities = dsl::issues
        .order_by((dsl::created_at.desc(), dsl::rowid.desc()))
        .load::<models::IssueEntity>(conn)
        .map_err(from_diesel_err)?;
    entities
        .into_iter()
        .map(|entity| load_issue(conn, entity))
        .collect()
}

fn update_issue_status(conn: &mut SqliteConnection, id: &str, status: IssueStatus) -> Result<()> {
    use schema::issues::dsl;
    let count = diesel::update(dsl::issues.filter(dsl::id.eq(id)))
        .set(dsl::status.eq(IssueStatusPrimitive::from(status)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    Ok(())
}

fn count_issues(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::issues::dsl;
    let count = dsl::issues
        .select(diesel::dsl::count(dsl::rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(count as usize)
}
