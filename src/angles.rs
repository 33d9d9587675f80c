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

//! The angles module contains the angle helpers shared by the converters.

use angle_sc::{Degrees, Radians};

/// Convert an angle given in degrees, minutes and seconds to decimal degrees.
/// * `degrees` - the whole degrees.
/// * `minutes` - the arc minutes.
/// * `seconds` - the arc seconds.
/// # Examples
/// ```
/// use swiss_lv95::angles::dms_to_degrees;
///
/// assert_eq!(7.44, dms_to_degrees(7.0, 26.0, 24.0).0);
/// ```
#[must_use]
pub fn dms_to_degrees(degrees: f64, minutes: f64, seconds: f64) -> Degrees {
    Degrees(degrees + minutes / 60.0 + seconds / 3600.0)
}

/// Convert decimal degrees to radians.
#[must_use]
pub fn degrees_to_radians(angle: Degrees) -> Radians {
    Radians(angle.0.to_radians())
}

/// Convert decimal degrees to arc seconds.
#[must_use]
pub fn degrees_to_arc_seconds(angle: Degrees) -> f64 {
    angle.0 * 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_dms_to_degrees() {
        assert_eq!(0.0, dms_to_degrees(0.0, 0.0, 0.0).0);
        assert_eq!(1.5, dms_to_degrees(1.0, 30.0, 0.0).0);
        assert_eq!(1.0, dms_to_degrees(0.0, 0.0, 3600.0).0);

        // Bern, the origin of the Swiss projection
        let lat = dms_to_degrees(46.0, 57.0, 8.66);
        assert!(is_within_tolerance(46.952_405_555_555_56, lat.0, 1e-12));
        let lon = dms_to_degrees(7.0, 26.0, 22.5);
        assert!(is_within_tolerance(7.439_583_333_333_333, lon.0, 1e-12));
    }

    #[test]
    fn test_degrees_to_radians() {
        assert_eq!(0.0, degrees_to_radians(Degrees(0.0)).0);
        assert!(is_within_tolerance(
            core::f64::consts::FRAC_PI_2,
            degrees_to_radians(Degrees(90.0)).0,
            f64::EPSILON
        ));
        assert!(is_within_tolerance(
            -core::f64::consts::PI,
            degrees_to_radians(Degrees(-180.0)).0,
            f64::EPSILON
        ));
    }

    #[test]
    fn test_degrees_to_arc_seconds() {
        assert_eq!(3600.0, degrees_to_arc_seconds(Degrees(1.0)));
        assert_eq!(-1800.0, degrees_to_arc_seconds(Degrees(-0.5)));
    }
}
