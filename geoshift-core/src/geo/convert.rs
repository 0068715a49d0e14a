//! Conversion facade from WGS-84 into any supported standard.

use super::transform::{international_to_national, national_to_provider};
use super::types::{Coordinate, CoordinateStandard};

/// Converts a WGS-84 `coordinate` into the `target` standard.
///
/// The input is always taken to be WGS-84. BD-09 is reached through GCJ-02,
/// never directly. There is no inverse.
///
/// | Target           | Result                                           |
/// |------------------|--------------------------------------------------|
/// | `International`  | input unchanged                                  |
/// | `NationalOffset` | `international_to_national(input)`               |
/// | `ProviderOffset` | `national_to_provider(international_to_national(input))` |
///
/// # Examples
///
/// ```
/// use geoshift_core::geo::{convert, Coordinate, CoordinateStandard};
///
/// let raw = Coordinate::new(31.2304, 121.4737);
/// assert_eq!(convert(raw, CoordinateStandard::International), raw);
///
/// let bd = convert(raw, CoordinateStandard::ProviderOffset);
/// assert!((bd.latitude - 31.234_482).abs() < 1e-6);
/// assert!((bd.longitude - 121.484_921).abs() < 1e-6);
/// ```
#[must_use]
pub fn convert(coordinate: Coordinate, target: CoordinateStandard) -> Coordinate {
    match target {
        CoordinateStandard::International => coordinate,
        CoordinateStandard::NationalOffset => international_to_national(coordinate),
        CoordinateStandard::ProviderOffset => {
            national_to_provider(international_to_national(coordinate))
        }
    }
}

/// Converts every coordinate of a WGS-84 track into `target`, preserving order.
#[must_use]
pub fn convert_all(coordinates: &[Coordinate], target: CoordinateStandard) -> Vec<Coordinate> {
    coordinates.iter().map(|c| convert(*c, target)).collect()
}
