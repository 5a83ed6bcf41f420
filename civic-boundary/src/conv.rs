use super::*;
use civic_entities as e;

impl From<e::geo::MapPoint> for Coordinate {
    fn from(from: e::geo::MapPoint) -> Self {
        Self {
            lat: from.lat(),
            lng: from.lng(),
        }
    }
}

impl From<e::issue::IssueStatus> for IssueStatus {
    fn from(from: e::issue::IssueStatus) -> Self {
        use e::issue::IssueStatus as E;
        match from {
            E::Open => Self::Open,
            E::InProgress => Self::InProgress,
            E::Resolved => Self::Resolved,
            E::Rejected => Self::Rejected,
        }
    }
}

impl From<IssueStatus> for e::issue::IssueStatus {
    fn from(from: IssueStatus) -> Self {
        use IssueStatus as B;
        match from {
            B::Open => Self::Open,
            B::InProgress => Self::InProgress,
            B::Resolved => Self::Resolved,
            B::Rejected => Self::Rejected,
        }
    }
}

impl From<e::issue::Priority> for Priority {
    fn from(from: e::issue::Priority) -> Self {
        use e::issue::Priority as E;
        match from {
            E::Urgent => Self::Urgent,
            E::High => Self::High,
            E::Medium => Self::Medium,
            E::Low => Self::Low,
        }
    }
}

impl From<e::profile::Role> for UserRole {
    fn from(from: e::profile::Role) -> Self {
        match from {
            e::profile::Role::User => Self::User,
            e::profile::Role::Admin => Self::Admin,
        }
    }
}

impl From<UserRole> for e::profile::Role {
    fn from(from: UserRole) -> Self {
        match from {
            UserRole::User => Self::User,
            UserRole::Admin => Self::Admin,
        }
    }
}

impl From<e::issue::Issue> for Issue {
    fn from(from: e::issue::Issue) -> Self {
        let urgency_score = from.urgency_score();
        let reporter_name = from.reporter.display_name().to_owned();
        let e::issue::Issue {
            id,
            title,
            description,
            category,
            priority,
            status,
            location_text,
            pos,
            photos,
            contact_info,
            reporter,
            created_at,
        } = from;
        Self {
            id: id.into(),
            title,
            description,
            category: category.to_string(),
            priority: priority.into(),
            status: status.into(),
            location_text,
            lat: pos.map(|p| p.lat()),
            lng: pos.map(|p| p.lng()),
            photos,
            contact_info,
            reporter_id: reporter.id.map(Into::into),
            reporter_name,
            urgency_score,
            created_at: created_at.as_millis(),
        }
    }
}

impl From<e::profile::Profile> for Profile {
    fn from(from: e::profile::Profile) -> Self {
        let e::profile::Profile {
            id,
            email,
            password: _,
            role,
            name,
            phone,
            avatar_url,
            organization_name,
            location_text,
            home_pos,
            is_complete,
            created_at,
        } = from;
        Self {
            id: id.into(),
            email: email.into_string(),
            role: role.into(),
            name,
            phone,
            avatar_url,
            organization_name,
            location_text,
            lat: home_pos.map(|p| p.lat()),
            lng: home_pos.map(|p| p.lng()),
            is_complete,
            created_at: created_at.as_millis(),
        }
    }
}

impl From<e::geocoding::GeocodingResult> for GeocodingResult {
    fn from(from: e::geocoding::GeocodingResult) -> Self {
        let e::geocoding::GeocodingResult {
            pos,
            formatted_address,
            place_id,
        } = from;
        Self {
            lat: pos.lat(),
            lng: pos.lng(),
            formatted_address,
            place_id,
        }
    }
}

impl From<e::geocoding::Prediction> for Prediction {
    fn from(from: e::geocoding::Prediction) -> Self {
        let e::geocoding::Prediction {
            description,
            place_id,
        } = from;
        Self {
            description,
            place_id,
        }
    }
}

impl From<e::geocoding::PlaceDetails> for PlaceDetails {
    fn from(from: e::geocoding::PlaceDetails) -> Self {
        let e::geocoding::PlaceDetails {
            pos,
            formatted_address,
        } = from;
        Self {
            lat: pos.map(|p| p.lat()),
            lng: pos.map(|p| p.lng()),
            formatted_address,
        }
    }
}

impl From<e::geocoding::LocationSelection> for LocationSelection {
    fn from(from: e::geocoding::LocationSelection) -> Self {
        let e::geocoding::LocationSelection { address, pos } = from;
        Self {
            address,
            lat: pos.lat(),
            lng: pos.lng(),
        }
    }
}

impl TryFrom<ReportedPosition> for e::geocoding::DevicePosition {
    type Error = e::geo::MapPointError;
    fn try_from(from: ReportedPosition) -> Result<Self, Self::Error> {
        let ReportedPosition { lat, lng, accuracy } = from;
        let pos = e::geo::MapPoint::try_from_lat_lng_deg(lat, lng)?;
        Ok(Self { pos, accuracy })
    }
}
