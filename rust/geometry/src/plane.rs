// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Supporting plane of a boundary face.

use nalgebra::{Point3, Unit, Vector3};

/// An infinite plane defined by a point and a unit normal.
///
/// Two boundaries on opposite sides of the same wall carry opposite normals;
/// the coincidence test treats anti-parallel normals as the same plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    pub point: Point3<f64>,
    pub normal: Unit<Vector3<f64>>,
}

impl Plane {
    /// Builds a plane from a point and a (not necessarily unit) normal.
    /// Returns `None` for a near-zero normal.
    pub fn new(point: Point3<f64>, normal: Vector3<f64>) -> Option<Self> {
        Unit::try_new(normal, 1e-12).map(|normal| Self { point, normal })
    }

    /// Signed distance from `p` to the plane, positive on the normal side.
    pub fn signed_distance(&self, p: &Point3<f64>) -> f64 {
        self.normal.dot(&(p - self.point))
    }

    /// Tests whether two planes coincide within tolerance.
    ///
    /// `linear_tol` bounds the out-of-plane distance between the planes'
    /// anchor points (working units); `angular_tol` bounds the deviation of
    /// `|n1 · n2|` from 1.
    pub fn is_coincident(&self, other: &Plane, linear_tol: f64, angular_tol: f64) -> bool {
        let alignment = self.normal.dot(&other.normal).abs();
        if 1.0 - alignment > angular_tol {
            return false;
        }
        self.signed_distance(&other.point).abs() <= linear_tol
            && other.signed_distance(&self.point).abs() <= linear_tol
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const LIN: f64 = 1.0;
    const ANG: f64 = 1e-6;

    fn xy_plane_at(z: f64) -> Plane {
        Plane::new(Point3::new(0.0, 0.0, z), Vector3::new(0.0, 0.0, 1.0)).unwrap()
    }

    #[test]
    fn zero_normal_is_rejected() {
        assert!(Plane::new(Point3::origin(), Vector3::zeros()).is_none());
    }

    #[test]
    fn signed_distance_follows_normal() {
        let plane = xy_plane_at(0.0);
        assert_relative_eq!(plane.signed_distance(&Point3::new(5.0, -2.0, 3.0)), 3.0);
        assert_relative_eq!(plane.signed_distance(&Point3::new(0.0, 0.0, -4.0)), -4.0);
    }

    #[test]
    fn coincident_within_tolerance() {
        let a = xy_plane_at(0.0);
        let b = xy_plane_at(0.5);
        assert!(a.is_coincident(&b, LIN, ANG));
    }

    #[test]
    fn offset_planes_are_not_coincident() {
        let a = xy_plane_at(0.0);
        let b = xy_plane_at(10.0);
        assert!(!a.is_coincident(&b, LIN, ANG));
    }

    #[test]
    fn anti_parallel_normals_still_coincide() {
        let a = xy_plane_at(0.0);
        let b = Plane::new(Point3::new(3.0, 3.0, 0.0), Vector3::new(0.0, 0.0, -1.0)).unwrap();
        assert!(a.is_coincident(&b, LIN, ANG));
    }

    #[test]
    fn tilted_plane_is_not_coincident() {
        let a = xy_plane_at(0.0);
        let b = Plane::new(Point3::origin(), Vector3::new(0.0, 0.1, 1.0)).unwrap();
        assert!(!a.is_coincident(&b, LIN, ANG));
    }
}
