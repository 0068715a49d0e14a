//! Property-based tests for the coordinate transforms.
//!
//! These tests verify:
//! - T1: GCJ-02 is the identity outside the offset region
//! - T2: `convert` honours its identity and chaining laws
//! - T3: BD-09 is applied everywhere, and results are deterministic
//! - T4: Golden values against the reference formulas

use approx::assert_abs_diff_eq;
use geoshift_core::geo::{
    convert, convert_all, international_to_national, is_out_of_region, national_to_provider,
    Coordinate, CoordinateStandard,
};
use proptest::prelude::*;

fn any_standard() -> impl Strategy<Value = CoordinateStandard> {
    prop_oneof![
        Just(CoordinateStandard::International),
        Just(CoordinateStandard::NationalOffset),
        Just(CoordinateStandard::ProviderOffset),
    ]
}

fn any_coordinate() -> impl Strategy<Value = Coordinate> {
    (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(Coordinate::from)
}

/// Bitwise equality, so NaN results (BD-09 south of the equator) compare equal
/// when they come from the same computation.
fn same_bits(a: Coordinate, b: Coordinate) -> bool {
    a.latitude.to_bits() == b.latitude.to_bits() && a.longitude.to_bits() == b.longitude.to_bits()
}

fn in_region_coordinate() -> impl Strategy<Value = Coordinate> {
    (0.8293f64..=55.8271, 72.004f64..=137.8347).prop_map(Coordinate::from)
}

// ============================================================================
// T1: National offset identity outside the region
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: For any coordinate the bounding box excludes, the national
    /// offset returns the input unchanged.
    #[test]
    fn t1_identity_outside_region(c in any_coordinate()) {
        prop_assume!(is_out_of_region(c));
        prop_assert_eq!(international_to_national(c), c);
    }

    /// Property: Western hemisphere points are always outside the region.
    #[test]
    fn t1_western_hemisphere_untouched(
        lat in -90.0f64..=90.0,
        lon in -180.0f64..0.0,
    ) {
        let c = Coordinate::new(lat, lon);
        prop_assert_eq!(convert(c, CoordinateStandard::NationalOffset), c);
    }

    /// Property: Inside the region the shift is non-zero but stays within a
    /// kilometre-scale bound (well under 0.01 degrees).
    #[test]
    fn t1_shift_inside_region_is_small(c in in_region_coordinate()) {
        let shifted = international_to_national(c);
        let d_lat = (shifted.latitude - c.latitude).abs();
        let d_lon = (shifted.longitude - c.longitude).abs();

        prop_assert!(d_lat > 0.0 || d_lon > 0.0);
        prop_assert!(d_lat < 0.01, "latitude shift too large: {}", d_lat);
        prop_assert!(d_lon < 0.02, "longitude shift too large: {}", d_lon);
    }
}

// ============================================================================
// T2: Facade laws
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Property: Converting to the international standard is the identity.
    #[test]
    fn t2_international_is_identity(c in any_coordinate()) {
        prop_assert_eq!(convert(c, CoordinateStandard::International), c);
    }

    /// Property: The provider standard is always reached through the
    /// national standard.
    #[test]
    fn t2_provider_chains_through_national(c in any_coordinate()) {
        prop_assert!(same_bits(
            convert(c, CoordinateStandard::ProviderOffset),
            national_to_provider(international_to_national(c)),
        ));
    }

    /// Property: The method form agrees with the free function.
    #[test]
    fn t2_method_form_matches_convert(c in any_coordinate(), standard in any_standard()) {
        prop_assert!(same_bits(c.to_standard(standard), convert(c, standard)));
    }

    /// Property: Batch conversion matches element-wise conversion.
    #[test]
    fn t2_convert_all_matches_convert(
        track in prop::collection::vec(any_coordinate(), 0..32),
        standard in any_standard(),
    ) {
        let converted = convert_all(&track, standard);
        prop_assert_eq!(converted.len(), track.len());
        for (raw, out) in track.iter().zip(&converted) {
            prop_assert!(same_bits(*out, convert(*raw, standard)));
        }
    }
}

// ============================================================================
// T3: Provider offset is unconditional; determinism
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Property: The provider offset moves points outside the region too.
    ///
    /// Restricted to the northern hemisphere: the radius bias takes
    /// `sqrt(lat * pi)`, which is NaN for negative latitudes.
    #[test]
    fn t3_provider_applies_outside_region(
        lat in 1.0f64..=89.0,
        lon in -179.0f64..=60.0,
    ) {
        let c = Coordinate::new(lat, lon);
        prop_assert!(is_out_of_region(c));
        prop_assert_ne!(national_to_provider(c), c);
    }

    /// Property: Repeated conversions are bit-identical.
    #[test]
    fn t3_conversion_is_deterministic(c in any_coordinate(), standard in any_standard()) {
        prop_assert!(same_bits(convert(c, standard), convert(c, standard)));
    }
}

// ============================================================================
// T4: Golden values
// ============================================================================

/// Tiananmen Square, the reference point for the national offset.
#[test]
fn t4_tiananmen_golden_values() {
    let raw = Coordinate::new(39.9087, 116.3975);

    let gcj = convert(raw, CoordinateStandard::NationalOffset);
    assert_abs_diff_eq!(gcj.latitude, 39.910_103_499_344_76, epsilon = 1e-6);
    assert_abs_diff_eq!(gcj.longitude, 116.403_743_572_651_76, epsilon = 1e-6);

    let bd = convert(raw, CoordinateStandard::ProviderOffset);
    assert_abs_diff_eq!(bd.latitude, 39.916_280_130_414_17, epsilon = 1e-6);
    assert_abs_diff_eq!(bd.longitude, 116.410_419_757_730_51, epsilon = 1e-6);
}

/// Shanghai and Shenzhen, further from the warp origin.
#[test]
fn t4_coastal_city_golden_values() {
    let shanghai = convert(
        Coordinate::new(31.2304, 121.4737),
        CoordinateStandard::ProviderOffset,
    );
    assert_abs_diff_eq!(shanghai.latitude, 31.234_482_145_956_083, epsilon = 1e-6);
    assert_abs_diff_eq!(shanghai.longitude, 121.484_921_323_615_77, epsilon = 1e-6);

    let shenzhen = convert(
        Coordinate::new(22.5431, 114.0579),
        CoordinateStandard::ProviderOffset,
    );
    assert_abs_diff_eq!(shenzhen.latitude, 22.546_750_947_833_036, epsilon = 1e-6);
    assert_abs_diff_eq!(shenzhen.longitude, 114.069_612_805_162_75, epsilon = 1e-6);
}

/// Region edges are inclusive: points exactly on them are shifted.
#[test]
fn t4_region_edges_are_shifted() {
    for c in [
        Coordinate::new(30.0, 72.004),
        Coordinate::new(55.8271, 100.0),
        Coordinate::new(55.8271, 72.004),
    ] {
        assert!(!is_out_of_region(c));
        assert_ne!(international_to_national(c), c);
    }
}
