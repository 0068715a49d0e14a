//! Location adapter layer.
//!
//! Connects a platform location service to the [`geo`](crate::geo)
//! transforms:
//! - Converts each raw WGS-84 fix into the configured coordinate standard
//! - Delegates reverse geocoding to an injected [`PlaceResolver`]
//! - Models the authorization and settings-prompt flow as plain values
//!
//! The platform side (device handle, permission dialogs, geocoding service)
//! stays with the host app; nothing here performs I/O.
//!
//! # Example Usage
//!
//! ```
//! use geoshift_core::geo::{Coordinate, CoordinateStandard};
//! use geoshift_core::location::{LocationError, LocationManager, Placemark};
//!
//! let geocoder = |_: Coordinate| -> Result<Vec<Placemark>, LocationError> {
//!     Err(LocationError::GeocodeFailed("offline".to_string()))
//! };
//! let mut manager = LocationManager::new(geocoder);
//! manager.set_standard(CoordinateStandard::ProviderOffset);
//!
//! let update = manager.handle_fixes(&[Coordinate::new(31.2304, 121.4737)]).unwrap();
//! assert!(update.coordinate.is_none());
//! println!("error: {:?}", update.error);
//! ```

pub mod authorization;
pub mod error;
pub mod manager;
pub mod types;

pub use authorization::{
    authorization_action, AuthorizationAction, AuthorizationStatus, PromptOutcome, SettingsPrompt,
};
pub use error::LocationError;
pub use manager::{LocationManager, PlaceResolver};
pub use types::{DesiredAccuracy, LocationSettings, LocationUpdate, Placemark};
