use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Issue {
    pub id            : String,
    pub title         : String,
    pub description   : String,
    pub category      : String,
    pub priority      : Priority,
    pub status        : IssueStatus,
    pub location_text : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat           : Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng           : Option<f64>,
    pub photos        : Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_info  : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporter_id   : Option<String>,
    pub reporter_name : String,
    pub urgency_score : u8,
    pub created_at    : i64,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewIssue {
    pub title         : String,
    pub description   : String,
    pub category      : Option<String>,
    pub priority      : Option<String>,
    #[serde(default)]
    pub location_text : String,
    pub lat           : Option<f64>,
    pub lng           : Option<f64>,
    #[serde(default)]
    pub photos        : Vec<String>,
    pub contact_info  : Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct IssueStatusChange {
    pub status: IssueStatus,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    Open,
    InProgress,
    Resolved,
    Rejected,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Urgent,
    High,
    Medium,
    Low,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    User,
    Admin,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Profile {
    pub id                : String,
    pub email             : String,
    pub role              : UserRole,
    pub name              : Option<String>,
    pub phone             : Option<String>,
    pub avatar_url        : Option<String>,
    pub organization_name : Option<String>,
    pub location_text     : Option<String>,
    pub lat               : Option<f64>,
    pub lng               : Option<f64>,
    pub is_complete       : bool,
    pub created_at        : i64,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ProfileUpdate {
    pub name              : Option<String>,
    pub phone             : Option<String>,
    pub avatar_url        : Option<String>,
    pub organization_name : Option<String>,
    pub location_text     : Option<String>,
    pub lat               : Option<f64>,
    pub lng               : Option<f64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ProfileCompletion {
    pub role: String,
    #[serde(flatten)]
    pub profile: ProfileUpdate,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct JwtToken {
    pub token: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct GeocodingResult {
    pub lat: f64,
    pub lng: f64,
    pub formatted_address: String,
    pub place_id: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Prediction {
    pub description: String,
    pub place_id: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct PlaceDetails {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub formatted_address: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct LocationSelection {
    pub address: String,
    pub lat: f64,
    pub lng: f64,
}

/// A failed location lookup, e.g. `{"kind":"network_error", ...}`.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct GeocodingError {
    pub kind: String,
    pub message: String,
}

/// The position of the device as reported by the client.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct ReportedPosition {
    pub lat: f64,
    pub lng: f64,
    pub accuracy: Option<f64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct LocationQuery {
    pub input: String,
    /// Select the top suggestion instead of returning the list
    #[serde(default)]
    pub enter: bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LocationSearchResult {
    Idle,
    Selected { selection: LocationSelection },
    Predictions { predictions: Vec<Prediction> },
    Results { results: Vec<GeocodingResult> },
    Error { error: GeocodingError },
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct MapMarker {
    pub issue_id: String,
    pub lat: f64,
    pub lng: f64,
    pub title: String,
    pub icon: String,
    pub highlighted: bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct MapView {
    pub center: Coordinate,
    pub zoom: u8,
    pub markers: Vec<MapMarker>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct PhotoUpload {
    pub url: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct IssueList {
    pub issues: Vec<Issue>,
    pub active_filter_count: usize,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Error {
    /// HTTP status code
    pub http_status: u16,
    /// Error message
    pub message: String,
}

#[cfg(feature = "extra-derive")]
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.http_status)
    }
}

#[cfg(feature = "extra-derive")]
impl std::error::Error for Error {}
