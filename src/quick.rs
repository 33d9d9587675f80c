// Copyright (c) 2024-2025 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The quick module contains the approximate polynomial conversions between
//! WGS-84 and LV95 published by swisstopo.
//!
//! Both directions are cubic polynomials in the offsets from the Bern origin,
//! fitted independently. They are accurate to about a metre over Switzerland
//! but are *not* exact inverses of each other: a round trip is only expected
//! to agree to around 1e-5 degrees.

#![allow(clippy::suboptimal_flops)]

use crate::angles::degrees_to_arc_seconds;
use crate::{Degrees, GeoPoint, ProjectedPoint};

/// The latitude of the Bern origin in arc seconds.
const ORIGIN_LAT_ARC_SECONDS: f64 = 169_028.66;
/// The longitude of the Bern origin in arc seconds.
const ORIGIN_LON_ARC_SECONDS: f64 = 26_782.5;
/// The scale of the auxiliary arc second values.
const ARC_SECONDS_SCALE: f64 = 10_000.0;

/// The scale of the auxiliary projected values.
const METRES_SCALE: f64 = 1_000_000.0;

/// The conversion from the reverse polynomial unit (10000 arc seconds) to degrees.
const POLYNOMIAL_UNIT_TO_DEGREES: f64 = 100.0 / 36.0;

/// Convert a WGS-84 position to LV95 using the approximate polynomial.
/// * `point` - the WGS-84 position.
///
/// returns the LV95 coordinates, accurate to about a metre in Switzerland.
/// # Examples
/// ```
/// use swiss_lv95::{quick, Degrees, GeoPoint};
///
/// let bern = GeoPoint::new(Degrees(46.94335), Degrees(7.45686));
/// let lv95 = quick::forward_quick(&bern);
/// assert_eq!(1_199_141.0, lv95.x().round());
/// assert_eq!(2_601_388.0, lv95.y().round());
/// ```
#[must_use]
pub fn forward_quick(point: &GeoPoint) -> ProjectedPoint {
    let phi =
        (degrees_to_arc_seconds(point.latitude()) - ORIGIN_LAT_ARC_SECONDS) / ARC_SECONDS_SCALE;
    let lambda =
        (degrees_to_arc_seconds(point.longitude()) - ORIGIN_LON_ARC_SECONDS) / ARC_SECONDS_SCALE;

    let phi_2 = phi * phi;
    let phi_3 = phi_2 * phi;
    let lambda_2 = lambda * lambda;
    let lambda_3 = lambda_2 * lambda;

    let x = 1_200_147.07 + 308_807.95 * phi + 3_745.25 * lambda_2 + 76.63 * phi_2
        - 194.56 * lambda_2 * phi
        + 119.79 * phi_3;
    let y = 2_600_072.37 + 211_455.93 * lambda
        - 10_938.51 * lambda * phi
        - 0.36 * lambda * phi_2
        - 44.54 * lambda_3;

    ProjectedPoint::new(x, y)
}

/// Convert an LV95 position to WGS-84 using the approximate polynomial.
/// * `point` - the LV95 position.
///
/// returns the WGS-84 position.
/// # Examples
/// ```
/// use swiss_lv95::{quick, ProjectedPoint};
///
/// let bern = quick::reverse_quick(&ProjectedPoint::new(1_199_141.0, 2_601_388.0));
/// assert!((46.94335 - bern.latitude().0).abs() < 1e-5);
/// assert!((7.45686 - bern.longitude().0).abs() < 1e-5);
/// ```
#[must_use]
pub fn reverse_quick(point: &ProjectedPoint) -> GeoPoint {
    let x = (point.x() - ProjectedPoint::FALSE_NORTHING) / METRES_SCALE;
    let y = (point.y() - ProjectedPoint::FALSE_EASTING) / METRES_SCALE;

    let x_2 = x * x;
    let x_3 = x_2 * x;
    let y_2 = y * y;
    let y_3 = y_2 * y;

    let lat = 16.902_389_2 + 3.238_272 * x
        - 0.270_978 * y_2
        - 0.002_528 * x_2
        - 0.044_7 * y_2 * x
        - 0.014_0 * x_3;
    let lon = 2.677_909_4 + 4.728_982 * y + 0.791_484 * y * x + 0.130_6 * y * x_2
        - 0.043_6 * y_3;

    GeoPoint::new(
        Degrees(lat * POLYNOMIAL_UNIT_TO_DEGREES),
        Degrees(lon * POLYNOMIAL_UNIT_TO_DEGREES),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_forward_quick_bern() {
        let bern = GeoPoint::new(Degrees(46.94335), Degrees(7.45686));
        let result = forward_quick(&bern);
        assert_eq!(1_199_141.0, result.x().round());
        assert_eq!(2_601_388.0, result.y().round());
        assert!(is_within_tolerance(1_199_140.502, result.x(), 1e-3));
        assert!(is_within_tolerance(2_601_387.763, result.y(), 1e-3));
    }

    #[test]
    fn test_forward_quick_origin() {
        // The polynomial constants are the LV95 coordinates of the origin.
        let origin = GeoPoint::new(
            Degrees(ORIGIN_LAT_ARC_SECONDS / 3600.0),
            Degrees(ORIGIN_LON_ARC_SECONDS / 3600.0),
        );
        let result = forward_quick(&origin);
        assert!(is_within_tolerance(1_200_147.07, result.x(), 1e-6));
        assert!(is_within_tolerance(2_600_072.37, result.y(), 1e-6));
    }

    #[test]
    fn test_reverse_quick_bern() {
        let result = reverse_quick(&ProjectedPoint::new(1_199_141.0, 2_601_388.0));
        assert!(is_within_tolerance(46.94335, result.latitude().0, 1e-5));
        assert!(is_within_tolerance(7.45686, result.longitude().0, 1e-5));
    }

    #[test]
    fn test_reverse_quick_false_origin() {
        let result = reverse_quick(&ProjectedPoint::new(
            ProjectedPoint::FALSE_NORTHING,
            ProjectedPoint::FALSE_EASTING,
        ));
        assert!(is_within_tolerance(
            16.902_389_2 * 100.0 / 36.0,
            result.latitude().0,
            1e-12
        ));
        assert!(is_within_tolerance(
            2.677_909_4 * 100.0 / 36.0,
            result.longitude().0,
            1e-12
        ));
    }

    #[test]
    fn test_quick_round_trip_is_approximate() {
        for lat in [45.9, 46.3, 46.8, 47.2, 47.7] {
            for lon in [6.0, 7.0, 8.0, 9.0, 10.4] {
                let point = GeoPoint::new(Degrees(lat), Degrees(lon));
                let result = reverse_quick(&forward_quick(&point));
                assert!(is_within_tolerance(lat, result.latitude().0, 1e-4));
                assert!(is_within_tolerance(lon, result.longitude().0, 1e-4));
            }
        }
    }

    #[test]
    fn test_quick_is_total() {
        for lat in (-90..=90).step_by(15) {
            for lon in (-180..=180).step_by(30) {
                let point = GeoPoint::new(Degrees(f64::from(lat)), Degrees(f64::from(lon)));
                let result = forward_quick(&point);
                assert!(result.x().is_finite() && result.y().is_finite());

                let geo = reverse_quick(&result);
                assert!(geo.latitude().0.is_finite() && geo.longitude().0.is_finite());
            }
        }
    }

    #[test]
    fn test_quick_is_deterministic() {
        let point = GeoPoint::new(Degrees(47.3769), Degrees(8.5417));
        let first = forward_quick(&point);
        let second = forward_quick(&point);
        assert_eq!(first.x().to_bits(), second.x().to_bits());
        assert_eq!(first.y().to_bits(), second.y().to_bits());
    }
}
