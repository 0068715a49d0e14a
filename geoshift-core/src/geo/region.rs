//! Region classification for the national offset standard.

use super::types::Coordinate;

/// Western edge of the offset region (degrees longitude).
pub const REGION_MIN_LONGITUDE: f64 = 72.004;
/// Eastern edge of the offset region (degrees longitude).
pub const REGION_MAX_LONGITUDE: f64 = 137.8347;
/// Southern edge of the offset region (degrees latitude).
pub const REGION_MIN_LATITUDE: f64 = 0.8293;
/// Northern edge of the offset region (degrees latitude).
pub const REGION_MAX_LATITUDE: f64 = 55.8271;

/// Returns true if `coordinate` lies outside the region where the
/// national offset applies.
///
/// The region is a plain bounding box, not the national border, so points
/// near the border (and in neighbouring countries inside the box) are
/// classified by the box alone. Edges count as inside.
///
/// # Examples
///
/// ```
/// use geoshift_core::geo::{is_out_of_region, Coordinate};
///
/// assert!(!is_out_of_region(Coordinate::new(39.9087, 116.3975))); // Beijing
/// assert!(is_out_of_region(Coordinate::new(48.8566, 2.3522)));    // Paris
/// ```
#[must_use]
pub fn is_out_of_region(coordinate: Coordinate) -> bool {
    coordinate.longitude < REGION_MIN_LONGITUDE
        || coordinate.longitude > REGION_MAX_LONGITUDE
        || coordinate.latitude < REGION_MIN_LATITUDE
        || coordinate.latitude > REGION_MAX_LATITUDE
}
