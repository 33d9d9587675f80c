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

//! The ellipsoid module contains types and functions for defining an ellipsoid
//! given its Semimajor axis (the equivalent of its radius), flattening ratio
//! and square of the Eccentricity.
//!
//! Two ellipsoids are used by the Swiss conversions:
//! [WGS-84](wgs84) for the GPS input and [Bessel 1841](bessel) for the
//! Swiss reference frame CH1903+.

#![allow(clippy::suboptimal_flops)]

pub mod bessel;
pub mod wgs84;

use crate::Metres;

/// Calculate the Semiminor axis of an ellipsoid.
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use swiss_lv95::Metres;
/// use swiss_lv95::ellipsoid::{calculate_minor_axis, wgs84};
///
/// // The WGS 84 Semiminor axis measured in metres.
/// let b : Metres = Metres(6_356_752.314_245_179);
/// assert_eq!(b, calculate_minor_axis(wgs84::A, wgs84::F));
/// ```
#[must_use]
pub fn calculate_minor_axis(a: Metres, f: f64) -> Metres {
    Metres(a.0 * (1.0 - f))
}

/// Calculate the square of the Eccentricity of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use swiss_lv95::ellipsoid::{calculate_sq_eccentricity, wgs84};
///
/// // The WGS 84 sq_eccentricity.
/// assert_eq!(0.0066943799901413165, calculate_sq_eccentricity(wgs84::F));
/// ```
#[must_use]
pub fn calculate_sq_eccentricity(f: f64) -> f64 {
    f * (2.0 - f)
}

/// Calculate the square of the second Eccentricity of an ellipsoid from its
/// Semimajor and Semiminor axes.
/// * `a` - the Semimajor axis.
/// * `b` - the Semiminor axis.
#[must_use]
pub fn calculate_sq_2nd_eccentricity(a: Metres, b: Metres) -> f64 {
    (a.0 * a.0 - b.0 * b.0) / (b.0 * b.0)
}

/// The parameters of an `Ellipsoid`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    /// The Semimajor axis of the ellipsoid.
    a: Metres,
    /// The flattening of the ellipsoid, a ratio.
    f: f64,
    /// The square of the Eccentricity of the ellipsoid.
    e_2: f64,

    /// The Semiminor axis of the ellipsoid.
    b: Metres,
    /// The square of the second Eccentricity of the ellipsoid.
    ep_2: f64,
    /// The Eccentricity of the ellipsoid.
    e: f64,
}

impl Ellipsoid {
    /// Constructor.
    ///
    /// The square of the Eccentricity is taken as given rather than derived
    /// from `f`, since published datum parameters quote it to fewer digits.
    /// * `a` - the Semimajor axis of the `Ellipsoid`.
    /// * `f` - the flattening of the `Ellipsoid`, a ratio.
    /// * `e_2` - the square of the Eccentricity of the `Ellipsoid`.
    #[must_use]
    pub fn new(a: Metres, f: f64, e_2: f64) -> Self {
        let b = calculate_minor_axis(a, f);
        Self {
            a,
            f,
            e_2,
            b,
            ep_2: calculate_sq_2nd_eccentricity(a, b),
            e: libm::sqrt(e_2),
        }
    }

    /// Construct an `Ellipsoid` with the WGS-84 parameters.
    #[must_use]
    pub fn wgs84() -> Self {
        Self::new(wgs84::A, wgs84::F, wgs84::E_2)
    }

    /// Construct an `Ellipsoid` with the Bessel 1841 parameters.
    #[must_use]
    pub fn bessel1841() -> Self {
        Self::new(bessel::A, bessel::F, bessel::E_2)
    }

    /// The Semimajor axis of the ellipsoid.
    #[must_use]
    pub const fn a(&self) -> Metres {
        self.a
    }

    /// The flattening of the ellipsoid, a ratio.
    #[must_use]
    pub const fn f(&self) -> f64 {
        self.f
    }

    /// The Semiminor axis of the ellipsoid.
    #[must_use]
    pub const fn b(&self) -> Metres {
        self.b
    }

    /// The square of the Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn e_2(&self) -> f64 {
        self.e_2
    }

    /// The square of the second Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn ep_2(&self) -> f64 {
        self.ep_2
    }

    /// The Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn e(&self) -> f64 {
        self.e
    }

    /// The radius of curvature in the prime vertical at a geodetic latitude.
    /// * `sin_lat` - the sine of the geodetic latitude.
    #[must_use]
    pub fn prime_vertical_radius(&self, sin_lat: f64) -> Metres {
        Metres(self.a.0 / libm::sqrt(1.0 - self.e_2 * sin_lat * sin_lat))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_ellipsoid_wgs84() {
        let geoid = Ellipsoid::wgs84();
        assert_eq!(wgs84::A, geoid.a());
        assert_eq!(wgs84::F, geoid.f());
        assert_eq!(wgs84::E_2, geoid.e_2());
        assert_eq!(calculate_minor_axis(wgs84::A, wgs84::F), geoid.b());
        assert!(is_within_tolerance(
            calculate_sq_eccentricity(wgs84::F),
            geoid.e_2(),
            1e-13
        ));
        assert!(is_within_tolerance(0.006_739_496_742, geoid.ep_2(), 1e-12));
        assert!(is_within_tolerance(0.081_819_190_842_6, geoid.e(), 1e-12));
    }

    #[test]
    fn test_ellipsoid_bessel1841() {
        let geoid = Ellipsoid::bessel1841();
        assert_eq!(bessel::A, geoid.a());
        assert_eq!(bessel::F, geoid.f());
        assert_eq!(bessel::E_2, geoid.e_2());
        assert!(is_within_tolerance(6_356_078.962_821_751, geoid.b().0, 1e-6));
        assert!(is_within_tolerance(
            calculate_sq_eccentricity(bessel::F),
            geoid.e_2(),
            1e-13
        ));
        assert!(is_within_tolerance(0.006_719_218_798_046, geoid.ep_2(), 1e-12));
    }

    #[test]
    fn test_prime_vertical_radius() {
        let geoid = Ellipsoid::wgs84();
        // At the equator the radius is the Semimajor axis.
        assert_eq!(geoid.a(), geoid.prime_vertical_radius(0.0));
        // At the poles it is a^2/b.
        let polar = geoid.a().0 * geoid.a().0 / geoid.b().0;
        assert!(is_within_tolerance(
            polar,
            geoid.prime_vertical_radius(1.0).0,
            1e-6
        ));
    }

    #[test]
    fn test_ellipsoid_traits() {
        let geoid = Ellipsoid::bessel1841();

        let geoid_clone = geoid;
        assert!(geoid_clone == geoid);
        assert!(Ellipsoid::wgs84() != geoid);

        println!("Ellipsoid: {:?}", geoid);
    }
}
