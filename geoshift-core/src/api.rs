//! Entry point for hosts that only need coordinate conversion.

use crate::geo::{convert, Coordinate};
use crate::location::{LocationError, LocationSettings, LocationUpdate};

/// Core interface for GeoShift functionality.
///
/// Holds the location settings and converts raw fixes into the configured
/// coordinate standard. Hosts that also need reverse geocoding and the
/// authorization flow use [`LocationManager`](crate::location::LocationManager).
#[derive(Debug, Default)]
pub struct GeoShiftCore {
    settings: LocationSettings,
}

impl GeoShiftCore {
    /// Creates a new `GeoShiftCore` reporting WGS-84 coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// use geoshift_core::GeoShiftCore;
    /// use geoshift_core::geo::CoordinateStandard;
    ///
    /// let core = GeoShiftCore::new();
    /// assert_eq!(core.get_location_settings().standard, CoordinateStandard::International);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts a raw WGS-84 fix into the configured standard.
    ///
    /// Invalid coordinates (non-finite or out of range) produce an update
    /// carrying [`LocationError::InvalidCoordinate`].
    ///
    /// # Examples
    ///
    /// ```
    /// use geoshift_core::GeoShiftCore;
    /// use geoshift_core::geo::CoordinateStandard;
    /// use geoshift_core::location::LocationSettings;
    ///
    /// let mut core = GeoShiftCore::new();
    /// core.set_location_settings(LocationSettings::for_standard(CoordinateStandard::NationalOffset))
    ///     .unwrap();
    ///
    /// let update = core.update_location(39.9087, 116.3975);
    /// let gcj = update.coordinate.unwrap();
    /// assert!((gcj.latitude - 39.910_103).abs() < 1e-6);
    /// ```
    #[must_use]
    pub fn update_location(&self, latitude: f64, longitude: f64) -> LocationUpdate {
        let standard = self.settings.standard;
        let fix = Coordinate::new(latitude, longitude);
        if !fix.is_valid() {
            return LocationUpdate::failed(
                LocationError::InvalidCoordinate {
                    latitude,
                    longitude,
                },
                standard,
            );
        }
        LocationUpdate::with_coordinate(convert(fix, standard), standard)
    }

    /// Gets the current location settings.
    #[must_use]
    pub fn get_location_settings(&self) -> LocationSettings {
        self.settings.clone()
    }

    /// Updates the location settings.
    ///
    /// # Errors
    ///
    /// Returns [`LocationError::InvalidSettings`] if the settings fail
    /// validation; the current settings are kept.
    pub fn set_location_settings(&mut self, settings: LocationSettings) -> Result<(), LocationError> {
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }
}
