//! Error types for the location adapter layer.
//!
//! These cover the collaborator side of location delivery (authorization,
//! reverse geocoding, malformed fixes). The coordinate transforms themselves
//! never fail.

use thiserror::Error;

/// Error type for location operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocationError {
    /// The user denied (or the device restricts) location access.
    #[error("Location access denied")]
    AuthorizationDenied,

    /// Reverse geocoding failed.
    #[error("Geocode failed: {0}")]
    GeocodeFailed(String),

    /// Reverse geocoding succeeded but returned no placemark.
    #[error("No placemark found for location")]
    PlacemarkMissing,

    /// The platform delivered a non-finite or out-of-range fix.
    #[error("Invalid coordinate: ({latitude}, {longitude})")]
    InvalidCoordinate {
        /// Latitude as delivered.
        latitude: f64,
        /// Longitude as delivered.
        longitude: f64,
    },

    /// Settings failed validation.
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

/// Result type alias for location operations.
pub type Result<T> = std::result::Result<T, LocationError>;

impl From<serde_json::Error> for LocationError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidSettings(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorization_denied_display() {
        assert_eq!(
            LocationError::AuthorizationDenied.to_string(),
            "Location access denied"
        );
    }

    #[test]
    fn geocode_failed_display() {
        let err = LocationError::GeocodeFailed("network unreachable".to_string());
        assert_eq!(err.to_string(), "Geocode failed: network unreachable");
    }

    #[test]
    fn placemark_missing_display() {
        assert_eq!(
            LocationError::PlacemarkMissing.to_string(),
            "No placemark found for location"
        );
    }

    #[test]
    fn invalid_coordinate_display() {
        let err = LocationError::InvalidCoordinate {
            latitude: 91.0,
            longitude: 0.5,
        };
        assert_eq!(err.to_string(), "Invalid coordinate: (91, 0.5)");
    }

    #[test]
    fn serde_json_error_becomes_invalid_settings() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: LocationError = json_err.into();
        assert!(matches!(err, LocationError::InvalidSettings(_)));
    }
}
