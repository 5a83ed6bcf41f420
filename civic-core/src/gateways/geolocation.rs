use crate::{
    entities::*,
    gateways::geocode::{GeocodingError, GeocodingErrorKind},
};

pub trait GeoLocationGateway {
    fn current_position(
        &self,
        options: &GeolocationOptions,
    ) -> Result<DevicePosition, GeocodingError>;
}

/// A position that was reported by a client along with its request.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportedPosition(pub Option<DevicePosition>);

impl GeoLocationGateway for ReportedPosition {
    fn current_position(&self, _: &GeolocationOptions) -> Result<DevicePosition, GeocodingError> {
        self.0.ok_or_else(|| {
            GeocodingError::new(
                GeocodingErrorKind::Unsupported,
                "Geolocation is not supported",
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_position_is_unsupported() {
        let err = ReportedPosition(None)
            .current_position(&Default::default())
            .unwrap_err();
        assert_eq!(GeocodingErrorKind::Unsupported, err.kind);
    }
}
