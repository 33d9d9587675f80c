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

//! The geocentric module contains the conversions between geographic and
//! geocentric Cartesian coordinates and the datum shift from WGS-84 to
//! CH1903+.

#![allow(clippy::many_single_char_names, clippy::suboptimal_flops)]

use crate::ellipsoid::Ellipsoid;
use crate::{Metres, Radians};
use core::ops::Sub;

/// A geocentric (Earth centred, Earth fixed) position in metres.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Cartesian3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Cartesian3d {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl Sub for Cartesian3d {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

/// The translation from the WGS-84 geocentre to the CH1903+ (Bessel 1841)
/// geocentre, subtracted from WGS-84 Cartesian coordinates.
pub(crate) const WGS84_TO_CH1903_SHIFT: Cartesian3d = Cartesian3d::new(674.374, 15.056, 405.346);

/// Convert a geographic position to geocentric Cartesian coordinates.
/// * `lat`, `lon` - the geodetic latitude and longitude.
/// * `height` - the height above the ellipsoid.
/// * `ellipsoid` - the ellipsoid of the geographic position.
pub(crate) fn to_cartesian(
    lat: Radians,
    lon: Radians,
    height: Metres,
    ellipsoid: &Ellipsoid,
) -> Cartesian3d {
    let (sin_lat, cos_lat) = (libm::sin(lat.0), libm::cos(lat.0));
    let (sin_lon, cos_lon) = (libm::sin(lon.0), libm::cos(lon.0));
    let n = ellipsoid.prime_vertical_radius(sin_lat).0;
    let h = height.0;

    Cartesian3d::new(
        (n + h) * cos_lat * cos_lon,
        (n + h) * cos_lat * sin_lon,
        (n * (1.0 - ellipsoid.e_2()) + h) * sin_lat,
    )
}

/// Shift a geocentric position from WGS-84 to the CH1903+ datum.
///
/// A three parameter translation: rotation and scale are ignored.
pub(crate) fn wgs84_to_ch1903(point: Cartesian3d) -> Cartesian3d {
    point - WGS84_TO_CH1903_SHIFT
}

/// Convert a geocentric position to geodetic latitude and longitude using
/// Bowring's closed form solution.
/// * `point` - the geocentric position.
/// * `ellipsoid` - the ellipsoid to recover the latitude on.
///
/// returns the geodetic latitude and longitude.
pub(crate) fn to_geographic(point: &Cartesian3d, ellipsoid: &Ellipsoid) -> (Radians, Radians) {
    let a = ellipsoid.a().0;
    let b = ellipsoid.b().0;

    let p = libm::sqrt(point.x * point.x + point.y * point.y);
    let q = libm::atan(point.z * a / (p * b));
    let sin_q = libm::sin(q);
    let cos_q = libm::cos(q);

    let lat = libm::atan(
        (point.z + ellipsoid.ep_2() * b * sin_q * sin_q * sin_q)
            / (p - ellipsoid.e_2() * a * cos_q * cos_q * cos_q),
    );
    let lon = libm::atan2(point.y, point.x);

    (Radians(lat), Radians(lon))
}
