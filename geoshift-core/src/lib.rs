//! GeoShift Core Library
//!
//! Converts GPS (WGS-84) coordinates into the GCJ-02 national offset standard
//! and the BD-09 provider offset standard used by domestic map providers.
//!
//! - [`geo`] holds the pure transforms
//! - [`location`] adapts platform location delivery onto them

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![deny(unsafe_code)]

mod api;
pub mod geo;
pub mod location;

pub use api::GeoShiftCore;
