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

//! The projection module contains the Swiss double projection: the Bessel
//! 1841 ellipsoid is mapped conformally onto a sphere touching it at Bern,
//! the sphere is rotated so that its pole lies on the Bern meridian, and
//! the rotated sphere is projected with a Mercator projection.
//!
//! See: swisstopo, *Formulas and constants for the calculation of the Swiss
//! conformal cylindrical projection and for the transformation between
//! coordinate systems*.

#![allow(clippy::many_single_char_names, clippy::suboptimal_flops)]

use crate::angles::{degrees_to_radians, dms_to_degrees};
use crate::ellipsoid::Ellipsoid;
use crate::{ProjectedPoint, Radians};
use core::f64::consts::FRAC_PI_4;
use once_cell::sync::Lazy;

/// The parameters of a conformal double projection about an origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwissProjection {
    /// The Eccentricity of the ellipsoid.
    e: f64,
    /// The longitude of the origin.
    lambda_0: Radians,
    /// The radius of the conformal sphere.
    r: f64,
    /// The ratio of spherical to ellipsoidal longitudes.
    alpha: f64,
    /// The latitude of the origin on the sphere.
    b_0: Radians,
    /// The integration constant of the latitude mapping.
    k: f64,
}

impl SwissProjection {
    /// Constructor.
    /// * `ellipsoid` - the ellipsoid to project from.
    /// * `phi_0`, `lambda_0` - the ellipsoidal latitude and longitude of the
    ///   projection origin.
    #[must_use]
    pub fn new(ellipsoid: &Ellipsoid, phi_0: Radians, lambda_0: Radians) -> Self {
        let e_2 = ellipsoid.e_2();
        let e = ellipsoid.e();
        let sin_phi_0 = libm::sin(phi_0.0);
        let cos_phi_0 = libm::cos(phi_0.0);

        let r = ellipsoid.a().0 * libm::sqrt(1.0 - e_2) / (1.0 - e_2 * sin_phi_0 * sin_phi_0);
        let alpha = libm::sqrt(1.0 + e_2 / (1.0 - e_2) * libm::pow(cos_phi_0, 4.0));
        let b_0 = libm::asin(sin_phi_0 / alpha);
        let k = libm::log(libm::tan(FRAC_PI_4 + b_0 / 2.0))
            - alpha * libm::log(libm::tan(FRAC_PI_4 + phi_0.0 / 2.0))
            + alpha * e / 2.0 * libm::log((1.0 + e * sin_phi_0) / (1.0 - e * sin_phi_0));

        Self {
            e,
            lambda_0,
            r,
            alpha,
            b_0: Radians(b_0),
            k,
        }
    }

    /// Construct the LV95 projection on the Bessel 1841 ellipsoid about the
    /// old observatory of Bern, 46°57′08.66″ N 7°26′22.50″ E.
    #[must_use]
    pub fn bern() -> Self {
        Self::new(
            &Ellipsoid::bessel1841(),
            degrees_to_radians(dms_to_degrees(46.0, 57.0, 8.66)),
            degrees_to_radians(dms_to_degrees(7.0, 26.0, 22.5)),
        )
    }

    /// The radius of the conformal sphere in metres.
    #[must_use]
    pub const fn r(&self) -> f64 {
        self.r
    }

    /// The ratio of spherical to ellipsoidal longitudes.
    #[must_use]
    pub const fn alpha(&self) -> f64 {
        self.alpha
    }

    /// The latitude of the origin on the sphere.
    #[must_use]
    pub const fn b_0(&self) -> Radians {
        self.b_0
    }

    /// The integration constant of the latitude mapping.
    #[must_use]
    pub const fn k(&self) -> f64 {
        self.k
    }

    /// Map an ellipsoidal position onto the conformal sphere.
    /// * `phi`, `lambda` - the ellipsoidal latitude and longitude.
    ///
    /// returns the spherical latitude and the longitude from the origin meridian.
    #[must_use]
    pub fn to_sphere(&self, phi: Radians, lambda: Radians) -> (Radians, Radians) {
        let e_sin_phi = self.e * libm::sin(phi.0);
        let s = self.alpha * libm::log(libm::tan(FRAC_PI_4 + phi.0 / 2.0))
            - self.alpha * self.e / 2.0 * libm::log((1.0 + e_sin_phi) / (1.0 - e_sin_phi))
            + self.k;
        let b = 2.0 * (libm::atan(libm::exp(s)) - FRAC_PI_4);
        let l = self.alpha * (lambda.0 - self.lambda_0.0);

        (Radians(b), Radians(l))
    }

    /// Rotate a spherical position into the oblique system whose equator
    /// passes through the origin perpendicular to its meridian.
    /// * `b`, `l` - the spherical latitude and longitude from the origin meridian.
    ///
    /// returns the oblique latitude and longitude.
    #[must_use]
    pub fn to_oblique(&self, b: Radians, l: Radians) -> (Radians, Radians) {
        let sin_b_0 = libm::sin(self.b_0.0);
        let cos_b_0 = libm::cos(self.b_0.0);

        let l_oblique = libm::atan(
            libm::sin(l.0) / (sin_b_0 * libm::tan(b.0) + cos_b_0 * libm::cos(l.0)),
        );
        let b_oblique = libm::asin(
            cos_b_0 * libm::sin(b.0) - sin_b_0 * libm::cos(b.0) * libm::cos(l.0),
        );

        (Radians(b_oblique), Radians(l_oblique))
    }

    /// Project an oblique spherical position with the Mercator projection.
    /// * `b`, `l` - the oblique latitude and longitude.
    ///
    /// returns the northing and easting from the origin, in metres.
    #[must_use]
    pub fn to_plane(&self, b: Radians, l: Radians) -> (f64, f64) {
        let sin_b = libm::sin(b.0);
        let x = self.r / 2.0 * libm::log((1.0 + sin_b) / (1.0 - sin_b));
        let y = self.r * l.0;
        (x, y)
    }

    /// Project an ellipsoidal position to LV95 coordinates.
    /// * `phi`, `lambda` - the ellipsoidal latitude and longitude.
    #[must_use]
    pub fn project(&self, phi: Radians, lambda: Radians) -> ProjectedPoint {
        let (b, l) = self.to_sphere(phi, lambda);
        let (b, l) = self.to_oblique(b, l);
        let (x, y) = self.to_plane(b, l);
        ProjectedPoint::new(
            x + ProjectedPoint::FALSE_NORTHING,
            y + ProjectedPoint::FALSE_EASTING,
        )
    }
}

/// A static instance of the LV95 `SwissProjection`.
pub static BERN_PROJECTION: Lazy<SwissProjection> = Lazy::new(SwissProjection::bern);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angles::degrees_to_radians;
    use crate::Degrees;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_bern_parameters() {
        let projection = SwissProjection::bern();
        assert!(is_within_tolerance(6_378_815.903_647_575, projection.r(), 1e-6));
        assert!(is_within_tolerance(1.000_729_138_430_378, projection.alpha(), 1e-14));
        assert!(is_within_tolerance(0.818_694_358_581_768_4, projection.b_0().0, 1e-14));
        assert!(is_within_tolerance(0.003_066_732_377_273_35, projection.k(), 1e-14));

        assert_eq!(projection, *BERN_PROJECTION);
    }

    #[test]
    fn test_origin_projects_to_false_origin() {
        let projection = &*BERN_PROJECTION;
        let phi_0 = degrees_to_radians(dms_to_degrees(46.0, 57.0, 8.66));
        let lambda_0 = degrees_to_radians(dms_to_degrees(7.0, 26.0, 22.5));

        let (b, l) = projection.to_sphere(phi_0, lambda_0);
        assert!(is_within_tolerance(projection.b_0().0, b.0, 1e-14));
        assert_eq!(0.0, l.0);

        let (b, l) = projection.to_oblique(b, l);
        assert!(is_within_tolerance(0.0, b.0, 1e-14));
        assert_eq!(0.0, l.0);

        let result = projection.project(phi_0, lambda_0);
        assert!(is_within_tolerance(ProjectedPoint::FALSE_NORTHING, result.x(), 1e-6));
        assert!(is_within_tolerance(ProjectedPoint::FALSE_EASTING, result.y(), 1e-6));
    }

    #[test]
    fn test_to_plane() {
        let projection = &*BERN_PROJECTION;
        let (x, y) = projection.to_plane(Radians(0.0), Radians(0.01));
        assert_eq!(0.0, x);
        assert!(is_within_tolerance(projection.r() * 0.01, y, 1e-9));

        // North of the oblique equator, northing is positive.
        let (x, _) = projection.to_plane(Radians(0.01), Radians(0.0));
        assert!(0.0 < x);
        let (x, _) = projection.to_plane(Radians(-0.01), Radians(0.0));
        assert!(x < 0.0);
    }

    #[test]
    fn test_project_bessel_bern() {
        // The Bessel 1841 position of Bern's WGS-84 46.94335 N 7.45686 E.
        let phi = degrees_to_radians(Degrees(46.944_671_718_188_324));
        let lambda = degrees_to_radians(Degrees(7.457_813_585_534_318));
        let result = BERN_PROJECTION.project(phi, lambda);
        assert!(is_within_tolerance(1_199_140.488, result.x(), 1e-3));
        assert!(is_within_tolerance(2_601_387.782, result.y(), 1e-3));
    }
}
