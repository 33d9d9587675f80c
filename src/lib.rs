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

//! swiss-lv95
//!
//! A library for converting positions between the
//! [WGS-84](https://en.wikipedia.org/wiki/World_Geodetic_System) latitude and
//! longitude used by GPS and the Swiss national coordinate system
//! [LV95](https://www.swisstopo.admin.ch/en/the-swiss-coordinates-system)
//! (CH1903+), measured in metres from a false origin near Bern.
//!
//! LV95 is defined on the Bessel 1841 ellipsoid by a conformal double
//! projection: the ellipsoid is mapped onto a sphere, the sphere is rotated
//! so that its pole lies on the Bern meridian and the result is projected
//! with a Mercator projection. The false origin of 1,200,000 m north and
//! 2,600,000 m east keeps every coordinate in Switzerland positive, with the
//! easting always larger than the northing.
//!
//! ## Conversions
//!
//! The library provides two ways of converting from WGS-84 to LV95:
//!
//! - [`forward_quick`]: swisstopo's cubic polynomial approximation,
//!   accurate to about a metre over Switzerland;
//! - [`forward_precise`]: the rigorous method, which converts the position to
//!   geocentric coordinates, shifts it to the CH1903+ datum, converts it back
//!   to a geographic position on the Bessel 1841 ellipsoid and projects it.
//!   It takes the height above the WGS-84 ellipsoid into account.
//!
//! From LV95 to WGS-84 only the polynomial approximation, [`reverse_quick`],
//! is provided. The forward and reverse polynomials were fitted independently
//! so a round trip agrees to about 1e-5 degrees, not exactly.
//!
//! [`wgs84_to_lv95`] and [`lv95_to_wgs84`] provide a single entry point for
//! each direction.
//!
//! ## Design
//!
//! Every conversion is a pure function of its arguments: there is no state
//! and nothing can fail. Inputs are not validated; positions outside
//! Switzerland produce mathematically defined but geographically meaningless
//! coordinates. The [`Validate`] trait is implemented by [`GeoPoint`] and
//! [`ProjectedPoint`] so that callers can check their inputs if they wish.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Degrees` and
//!   `Radians`;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres`;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to convert
//!   to and from `LatLong`.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.

#![cfg_attr(not(test), no_std)]

extern crate angle_sc;
extern crate icao_units;
extern crate unit_sphere;

pub mod angles;
pub mod ellipsoid;
mod geocentric;
pub mod precise;
pub mod projection;
pub mod quick;

pub use angle_sc::{Degrees, Radians, Validate};
pub use icao_units::si::Metres;
pub use precise::forward_precise;
pub use quick::{forward_quick, reverse_quick};
pub use unit_sphere::LatLong;

/// A WGS-84 position: latitude and longitude in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    latitude: Degrees,
    longitude: Degrees,
}

impl GeoPoint {
    /// Constructor.
    /// * `latitude` - the latitude, north positive.
    /// * `longitude` - the longitude, east positive.
    #[must_use]
    pub const fn new(latitude: Degrees, longitude: Degrees) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// The latitude of the position.
    #[must_use]
    pub const fn latitude(&self) -> Degrees {
        self.latitude
    }

    /// The longitude of the position.
    #[must_use]
    pub const fn longitude(&self) -> Degrees {
        self.longitude
    }
}

impl Validate for GeoPoint {
    /// Test whether the latitude is in the range [-90, 90] degrees and the
    /// longitude is in the range [-180, 180] degrees.
    fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude.0) && (-180.0..=180.0).contains(&self.longitude.0)
    }
}

impl From<&LatLong> for GeoPoint {
    fn from(point: &LatLong) -> Self {
        Self::new(point.lat(), point.lon())
    }
}

impl From<&GeoPoint> for LatLong {
    fn from(point: &GeoPoint) -> Self {
        Self::new(point.latitude, point.longitude)
    }
}

/// An LV95 position in metres.
///
/// Following the Swiss convention `x` is the northing and `y` is the easting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedPoint {
    x: f64,
    y: f64,
}

impl ProjectedPoint {
    /// The northing of the projection origin at Bern.
    pub const FALSE_NORTHING: f64 = 1_200_000.0;
    /// The easting of the projection origin at Bern.
    pub const FALSE_EASTING: f64 = 2_600_000.0;

    /// Constructor.
    /// * `x` - the northing in metres.
    /// * `y` - the easting in metres.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The northing in metres.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The easting in metres.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }
}

impl Validate for ProjectedPoint {
    /// Test whether both coordinates are finite.
    fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Convert a WGS-84 position to LV95.
/// * `point` - the WGS-84 position.
/// * `precise` - use the rigorous method instead of the polynomial approximation.
/// * `height` - the height above the WGS-84 ellipsoid, zero if `None`.
///   It is only used by the rigorous method.
///
/// returns the LV95 coordinates.
/// # Examples
/// ```
/// use swiss_lv95::*;
///
/// let bern = GeoPoint::new(Degrees(46.94335), Degrees(7.45686));
///
/// let quick = wgs84_to_lv95(&bern, false, None);
/// println!("Bern, quick: {:?}", quick);
///
/// let precise = wgs84_to_lv95(&bern, true, Some(Metres(550.0)));
/// println!("Bern, precise: {:?}", precise);
/// ```
#[must_use]
pub fn wgs84_to_lv95(point: &GeoPoint, precise: bool, height: Option<Metres>) -> ProjectedPoint {
    if precise {
        forward_precise(point, height.unwrap_or(Metres(0.0)))
    } else {
        forward_quick(point)
    }
}

/// Convert an LV95 position to WGS-84 using the polynomial approximation.
/// * `point` - the LV95 position.
///
/// returns the WGS-84 position.
#[must_use]
pub fn lv95_to_wgs84(point: &ProjectedPoint) -> GeoPoint {
    reverse_quick(point)
}
