//! Location data types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::authorization::SettingsPrompt;
use super::error::{LocationError, Result};
use crate::geo::{Coordinate, CoordinateStandard};

/// Accuracy the platform location service is asked for.
///
/// | Accuracy           | Typical source        |
/// |--------------------|-----------------------|
/// | `Best`             | GPS, highest power    |
/// | `NearestTenMeters` | GPS/Wi-Fi, balanced   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DesiredAccuracy {
    /// Best accuracy the device can provide.
    Best,
    /// Accuracy to within about ten metres (default).
    #[default]
    NearestTenMeters,
}

/// A human-readable place returned by reverse geocoding.
///
/// All fields are optional; geocoders fill in what they know.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Placemark {
    /// Name of the place (landmark, street address).
    pub name: Option<String>,
    /// City or town.
    pub locality: Option<String>,
    /// State or province.
    pub administrative_area: Option<String>,
    /// Country name.
    pub country: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    pub iso_country_code: Option<String>,
}

/// Result of processing one location fix.
///
/// Mirrors what a platform callback hands back to the app: a converted
/// coordinate, the resolved place, or an error. A fix whose place could not
/// be found still carries its coordinate alongside `PlacemarkMissing`.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationUpdate {
    /// Coordinate in `standard`, absent when the fix failed.
    pub coordinate: Option<Coordinate>,

    /// Standard `coordinate` is expressed in.
    pub standard: CoordinateStandard,

    /// Place resolved from the raw fix.
    pub placemark: Option<Placemark>,

    /// Error raised while processing the fix.
    pub error: Option<LocationError>,

    /// When the update was produced (UTC).
    pub timestamp: DateTime<Utc>,
}

impl LocationUpdate {
    /// Creates an update carrying a converted coordinate.
    #[must_use]
    pub fn with_coordinate(coordinate: Coordinate, standard: CoordinateStandard) -> Self {
        Self {
            coordinate: Some(coordinate),
            standard,
            placemark: None,
            error: None,
            timestamp: Utc::now(),
        }
    }

    /// Creates an update carrying only an error.
    #[must_use]
    pub fn failed(error: LocationError, standard: CoordinateStandard) -> Self {
        Self {
            coordinate: None,
            standard,
            placemark: None,
            error: Some(error),
            timestamp: Utc::now(),
        }
    }

    /// Returns true if the update has a coordinate and no error.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.coordinate.is_some() && self.error.is_none()
    }
}

/// Settings for location delivery.
///
/// These control which standard coordinates are reported in and what the
/// platform location service is asked for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationSettings {
    /// Standard reported coordinates are converted into (default WGS-84).
    pub standard: CoordinateStandard,

    /// Minimum movement in metres before the platform reports a new fix.
    pub distance_filter_meters: f64,

    /// Accuracy requested from the platform.
    pub desired_accuracy: DesiredAccuracy,

    /// Prompt shown when location access is denied or restricted.
    pub settings_prompt: SettingsPrompt,
}

impl Default for LocationSettings {
    fn default() -> Self {
        Self {
            standard: CoordinateStandard::default(),
            distance_filter_meters: 10.0,
            desired_accuracy: DesiredAccuracy::default(),
            settings_prompt: SettingsPrompt::default(),
        }
    }
}

impl LocationSettings {
    /// Creates default settings reporting coordinates in `standard`.
    ///
    /// # Examples
    ///
    /// ```
    /// use geoshift_core::geo::CoordinateStandard;
    /// use geoshift_core::location::LocationSettings;
    ///
    /// let settings = LocationSettings::for_standard(CoordinateStandard::ProviderOffset);
    /// assert_eq!(settings.distance_filter_meters, 10.0);
    /// ```
    #[must_use]
    pub fn for_standard(standard: CoordinateStandard) -> Self {
        Self {
            standard,
            ..Self::default()
        }
    }

    /// Checks that the settings are usable.
    ///
    /// # Errors
    ///
    /// Returns [`LocationError::InvalidSettings`] if the distance filter is
    /// negative or not finite.
    pub fn validate(&self) -> Result<()> {
        if !self.distance_filter_meters.is_finite() || self.distance_filter_meters < 0.0 {
            return Err(LocationError::InvalidSettings(format!(
                "distance filter must be a non-negative number of metres, got {}",
                self.distance_filter_meters
            )));
        }
        Ok(())
    }

    /// Parses and validates settings from JSON.
    ///
    /// Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the settings are invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Converts these settings to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails (extremely rare).
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
