//! Coordinate value types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::GeoError;

/// Coordinate reference standard a position is expressed in.
///
/// | Variant          | Datum  | Used by                                  |
/// |------------------|--------|------------------------------------------|
/// | `International`  | WGS-84 | GPS modules, Google Earth                |
/// | `NationalOffset` | GCJ-02 | Domestic map providers (Amap, Tencent)   |
/// | `ProviderOffset` | BD-09  | Baidu Maps                               |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CoordinateStandard {
    /// WGS-84, the raw GPS standard.
    #[default]
    International,
    /// GCJ-02, the national offset standard.
    NationalOffset,
    /// BD-09, the provider offset layered on top of GCJ-02.
    ProviderOffset,
}

impl CoordinateStandard {
    /// All standards, in chaining order.
    pub const ALL: [Self; 3] = [
        Self::International,
        Self::NationalOffset,
        Self::ProviderOffset,
    ];

    /// Returns the conventional datum name (`WGS-84`, `GCJ-02`, `BD-09`).
    #[must_use]
    pub const fn datum_name(self) -> &'static str {
        match self {
            Self::International => "WGS-84",
            Self::NationalOffset => "GCJ-02",
            Self::ProviderOffset => "BD-09",
        }
    }
}

impl fmt::Display for CoordinateStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.datum_name())
    }
}

impl FromStr for CoordinateStandard {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "wgs84" | "wgs" | "international" => Ok(Self::International),
            "gcj02" | "gcj" | "nationaloffset" => Ok(Self::NationalOffset),
            "bd09" | "bd" | "provideroffset" => Ok(Self::ProviderOffset),
            _ => Err(GeoError::UnknownStandard(s.to_string())),
        }
    }
}

/// A geographic position in signed decimal degrees.
///
/// Transform functions take and return `Coordinate` by value and never
/// validate or clamp; see [`Coordinate::is_valid`] for callers that need to.
///
/// # Examples
///
/// ```
/// use geoshift_core::geo::{Coordinate, CoordinateStandard};
///
/// let tiananmen = Coordinate::new(39.9087, 116.3975);
/// let gcj = tiananmen.to_standard(CoordinateStandard::NationalOffset);
/// assert_ne!(gcj, tiananmen);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees, positive north.
    pub latitude: f64,
    /// Longitude in degrees, positive east.
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate from latitude and longitude in degrees.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns true if both components are finite and within the
    /// geographic ranges (latitude ±90, longitude ±180).
    ///
    /// ```
    /// use geoshift_core::geo::Coordinate;
    ///
    /// assert!(Coordinate::new(90.0, -180.0).is_valid());
    /// assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
    /// assert!(!Coordinate::new(0.0, 180.5).is_valid());
    /// ```
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Converts this WGS-84 coordinate into `target`.
    ///
    /// Method form of [`convert`](super::convert).
    #[must_use]
    pub fn to_standard(self, target: CoordinateStandard) -> Self {
        super::convert(self, target)
    }

    /// Encodes the coordinate as a geohash of `len` characters.
    ///
    /// Returns an empty string if encoding fails (invalid coordinate or
    /// unsupported length).
    ///
    /// ```
    /// use geoshift_core::geo::Coordinate;
    ///
    /// let hash = Coordinate::new(39.9087, 116.3975).geohash(7);
    /// assert_eq!(hash.len(), 7);
    /// assert!(hash.starts_with("wx4g"));
    /// ```
    #[must_use]
    pub fn geohash(&self, len: usize) -> String {
        geohash::encode(
            geohash::Coord {
                x: self.longitude,
                y: self.latitude,
            },
            len,
        )
        .unwrap_or_else(|_| String::new())
    }
}

impl From<(f64, f64)> for Coordinate {
    /// Builds a coordinate from a `(latitude, longitude)` tuple.
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}
