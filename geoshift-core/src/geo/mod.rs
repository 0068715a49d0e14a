//! Coordinate standards and the offset transforms between them.
//!
//! Converts WGS-84 positions into the GCJ-02 national offset standard and the
//! BD-09 provider offset standard. Everything here is pure: no I/O, no
//! shared state, safe to call from any thread.
//!
//! # Layers
//!
//! - [`constants`] - ellipsoid and provider-offset constants
//! - [`region`] - bounding box deciding where GCJ-02 applies
//! - [`transform`] - the two offset transforms
//! - [`convert`](fn@convert) - picks the transform chain for a target standard
//!
//! # Example Usage
//!
//! ```
//! use geoshift_core::geo::{convert, Coordinate, CoordinateStandard};
//!
//! let gps = Coordinate::new(39.9087, 116.3975);
//! let amap = convert(gps, CoordinateStandard::NationalOffset);
//! let baidu = convert(gps, CoordinateStandard::ProviderOffset);
//! println!("GCJ-02: {amap}, BD-09: {baidu}");
//! ```

pub mod constants;
mod convert;
pub mod error;
pub mod region;
pub mod transform;
mod types;

pub use convert::{convert, convert_all};
pub use error::GeoError;
pub use region::is_out_of_region;
pub use transform::{international_to_national, national_to_provider};
pub use types::{Coordinate, CoordinateStandard};
