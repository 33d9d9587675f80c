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

//! The precise module contains the rigorous conversion from WGS-84 to LV95.
//!
//! The WGS-84 position is converted to geocentric coordinates, shifted to
//! the CH1903+ datum, converted to a geographic position on the Bessel 1841
//! ellipsoid and then projected with the [Swiss double projection](crate::projection).

use crate::angles::degrees_to_radians;
use crate::ellipsoid::Ellipsoid;
use crate::geocentric::{to_cartesian, to_geographic, wgs84_to_ch1903};
use crate::projection::BERN_PROJECTION;
use crate::{GeoPoint, Metres, ProjectedPoint};

/// Convert a WGS-84 position to LV95 using the rigorous ellipsoidal method.
/// * `point` - the WGS-84 position.
/// * `height` - the height above the WGS-84 ellipsoid, use `Metres(0.0)` if
///   it is not known.
///
/// returns the LV95 coordinates.
/// # Examples
/// ```
/// use swiss_lv95::{precise, Degrees, GeoPoint, Metres};
///
/// let bern = GeoPoint::new(Degrees(46.94335), Degrees(7.45686));
/// let lv95 = precise::forward_precise(&bern, Metres(0.0));
/// assert!((1_199_140.488 - lv95.x()).abs() < 1e-3);
/// assert!((2_601_387.782 - lv95.y()).abs() < 1e-3);
/// ```
#[must_use]
pub fn forward_precise(point: &GeoPoint, height: Metres) -> ProjectedPoint {
    let lat = degrees_to_radians(point.latitude());
    let lon = degrees_to_radians(point.longitude());

    let wgs84 = to_cartesian(lat, lon, height, &Ellipsoid::wgs84());
    let ch1903 = wgs84_to_ch1903(wgs84);
    let (phi, lambda) = to_geographic(&ch1903, &Ellipsoid::bessel1841());

    BERN_PROJECTION.project(phi, lambda)
}
