use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = issues)]
pub struct NewIssue<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub category: i16,
    pub priority: i16,
    pub status: i16,
    pub location_text: &'a str,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub contact_info: Option<&'a str>,
    pub reporter_id: Option<&'a str>,
    pub reporter_name: Option<&'a str>,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct IssueEntity {
    pub rowid: i64,
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: i16,
    pub priority: i16,
    pub status: i16,
    pub location_text: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub contact_info: Option<String>,
    pub reporter_id: Option<String>,
    pub reporter_name: Option<String>,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = issue_photo)]
pub struct NewIssuePhoto<'a> {
    pub parent_rowid: i64,
    pub url: &'a str,
}

#[derive(Queryable)]
pub struct IssuePhoto {
    pub parent_rowid: i64,
    pub url: String,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = profiles, treat_none_as_null = true)]
pub struct NewProfile<'a> {
    pub id: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub role: i16,
    pub name: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub avatar_url: Option<&'a str>,
    pub organization_name: Option<&'a str>,
    pub location_text: Option<&'a str>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub is_complete: bool,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct ProfileEntity {
    pub rowid: i64,
    pub id: String,
    pub email: String,
    pub password: String,
    pub role: i16,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    pub organization_name: Option<String>,
    pub location_text: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub is_complete: bool,
    pub created_at: i64,
}
