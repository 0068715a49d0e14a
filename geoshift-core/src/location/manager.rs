//! Location adapter that converts platform fixes into the configured standard.
//!
//! [`LocationManager`] sits between the platform location service and the
//! app. The platform owns the device handle and pushes fixes and
//! authorization changes in; the manager answers with [`LocationUpdate`]s
//! and [`AuthorizationAction`]s. Reverse geocoding is delegated to an
//! injected [`PlaceResolver`].

use log::{debug, info, warn};

use super::authorization::{
    authorization_action, AuthorizationAction, AuthorizationStatus, PromptOutcome, SettingsPrompt,
};
use super::error::{LocationError, Result};
use super::types::{LocationSettings, LocationUpdate, Placemark};
use crate::geo::{convert, Coordinate, CoordinateStandard};

/// Reverse-geocoding collaborator.
///
/// Implementations turn a raw WGS-84 coordinate into candidate placemarks,
/// best match first. Failures should be reported as
/// [`LocationError::GeocodeFailed`].
///
/// Closures of the right shape implement the trait:
///
/// ```
/// use geoshift_core::geo::Coordinate;
/// use geoshift_core::location::{LocationError, LocationManager, Placemark};
///
/// let manager = LocationManager::new(|_: Coordinate| -> Result<Vec<Placemark>, LocationError> {
///     Ok(vec![Placemark::default()])
/// });
/// ```
pub trait PlaceResolver {
    /// Resolves `coordinate` (WGS-84) into placemarks.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails.
    fn resolve(&self, coordinate: Coordinate) -> Result<Vec<Placemark>>;
}

impl<F> PlaceResolver for F
where
    F: Fn(Coordinate) -> Result<Vec<Placemark>>,
{
    fn resolve(&self, coordinate: Coordinate) -> Result<Vec<Placemark>> {
        self(coordinate)
    }
}

/// Adapter turning platform fixes into converted [`LocationUpdate`]s.
///
/// One manager per platform location handle; construct it with the resolver
/// the host provides.
///
/// # Example
///
/// ```
/// use geoshift_core::geo::{Coordinate, CoordinateStandard};
/// use geoshift_core::location::{
///     AuthorizationAction, AuthorizationStatus, LocationError, LocationManager, LocationSettings,
///     Placemark,
/// };
///
/// let resolver = |_: Coordinate| -> Result<Vec<Placemark>, LocationError> {
///     Ok(vec![Placemark {
///         locality: Some("Beijing".to_string()),
///         ..Placemark::default()
///     }])
/// };
/// let settings = LocationSettings::for_standard(CoordinateStandard::NationalOffset);
/// let mut manager = LocationManager::with_settings(resolver, settings).unwrap();
///
/// let action = manager.handle_authorization(AuthorizationStatus::AuthorizedWhenInUse);
/// assert_eq!(action, AuthorizationAction::StartUpdates);
///
/// let update = manager.handle_fixes(&[Coordinate::new(39.9087, 116.3975)]).unwrap();
/// assert!(update.is_success());
/// assert_eq!(update.standard, CoordinateStandard::NationalOffset);
/// ```
#[derive(Debug)]
pub struct LocationManager<R> {
    resolver: R,
    settings: LocationSettings,
    authorization: AuthorizationStatus,
}

impl<R: PlaceResolver> LocationManager<R> {
    /// Creates a manager with default settings (WGS-84 output).
    #[must_use]
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            settings: LocationSettings::default(),
            authorization: AuthorizationStatus::default(),
        }
    }

    /// Creates a manager with custom settings.
    ///
    /// # Errors
    ///
    /// Returns [`LocationError::InvalidSettings`] if the settings fail
    /// validation.
    pub fn with_settings(resolver: R, settings: LocationSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            resolver,
            settings,
            authorization: AuthorizationStatus::default(),
        })
    }

    /// Returns the injected place resolver.
    #[must_use]
    pub const fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Returns the current settings.
    #[must_use]
    pub const fn settings(&self) -> &LocationSettings {
        &self.settings
    }

    /// Replaces the settings.
    ///
    /// # Errors
    ///
    /// Returns [`LocationError::InvalidSettings`] if the new settings fail
    /// validation; the current settings are kept.
    pub fn set_settings(&mut self, settings: LocationSettings) -> Result<()> {
        settings.validate()?;
        info!(
            "location settings updated: standard={}, distance_filter={}m",
            settings.standard, settings.distance_filter_meters
        );
        self.settings = settings;
        Ok(())
    }

    /// Changes the standard reported coordinates are converted into.
    pub fn set_standard(&mut self, standard: CoordinateStandard) {
        debug!("location standard set to {standard}");
        self.settings.standard = standard;
    }

    /// Returns the last authorization status reported by the platform.
    #[must_use]
    pub const fn authorization_status(&self) -> AuthorizationStatus {
        self.authorization
    }

    /// Decides how to start positioning given the known authorization state.
    ///
    /// A previously denied manager goes straight to the settings prompt;
    /// otherwise authorization is requested (or updates start if already
    /// granted).
    #[must_use]
    pub const fn start(&self) -> AuthorizationAction {
        authorization_action(self.authorization)
    }

    /// Records an authorization change and returns the next action.
    pub fn handle_authorization(&mut self, status: AuthorizationStatus) -> AuthorizationAction {
        if status != self.authorization {
            info!(
                "location authorization changed: {:?} -> {:?}",
                self.authorization, status
            );
        }
        self.authorization = status;

        let action = authorization_action(status);
        if action == AuthorizationAction::PromptForSettings {
            warn!("location access {status:?}; settings prompt required");
        }
        action
    }

    /// Returns the prompt to show when access is denied.
    #[must_use]
    pub const fn settings_prompt(&self) -> &SettingsPrompt {
        &self.settings.settings_prompt
    }

    /// Handles the user's answer to the settings prompt.
    ///
    /// Returns true if the app should open the system settings.
    #[must_use]
    pub fn resolve_prompt(&self, outcome: PromptOutcome) -> bool {
        debug!("settings prompt resolved: {outcome:?}");
        outcome.opens_settings()
    }

    /// Converts a raw WGS-84 fix into the configured standard without
    /// geocoding.
    ///
    /// # Errors
    ///
    /// Returns [`LocationError::InvalidCoordinate`] if the fix is not a
    /// valid geographic coordinate.
    pub fn convert_fix(&self, fix: Coordinate) -> Result<Coordinate> {
        if !fix.is_valid() {
            return Err(LocationError::InvalidCoordinate {
                latitude: fix.latitude,
                longitude: fix.longitude,
            });
        }
        Ok(convert(fix, self.settings.standard))
    }

    /// Processes a batch of fixes delivered by the platform.
    ///
    /// Only the most recent fix (the last one) is used. Returns `None` for
    /// an empty batch.
    ///
    /// The raw fix is reverse geocoded first. If geocoding fails the update
    /// carries only the error. Otherwise the coordinate is converted to the
    /// configured standard and the first placemark attached; with no
    /// placemark the update carries both the coordinate and
    /// [`LocationError::PlacemarkMissing`].
    #[must_use]
    pub fn handle_fixes(&self, fixes: &[Coordinate]) -> Option<LocationUpdate> {
        let Some(&fix) = fixes.last() else {
            debug!("empty location batch ignored");
            return None;
        };
        let standard = self.settings.standard;

        if self.authorization.is_denied() {
            warn!("location fix received while access is {:?}", self.authorization);
            return Some(LocationUpdate::failed(
                LocationError::AuthorizationDenied,
                standard,
            ));
        }

        let converted = match self.convert_fix(fix) {
            Ok(converted) => converted,
            Err(err) => {
                warn!("discarding location fix: {err}");
                return Some(LocationUpdate::failed(err, standard));
            }
        };

        let placemarks = match self.resolver.resolve(fix) {
            Ok(placemarks) => placemarks,
            Err(err) => {
                warn!("reverse geocoding failed: {err}");
                return Some(LocationUpdate::failed(err, standard));
            }
        };

        let mut update = LocationUpdate::with_coordinate(converted, standard);
        match placemarks.into_iter().next() {
            Some(place) => update.placemark = Some(place),
            None => {
                debug!("no placemark for {fix}");
                update.error = Some(LocationError::PlacemarkMissing);
            }
        }
        Some(update)
    }
}
