//! Rectangular faces spanned by two scaled basis vectors.
//!
//! A [`Face`] is four corners of a parallelogram, always in the order
//!
//! ```text
//! [offset, a + offset, b + offset, a + b + offset]
//! ```
//!
//! where `a = basis_a * scalar_a` and `b = basis_b * scalar_b`. Note that this
//! is not a winding order: corners 1 and 2 are adjacent to corner 0, corner 3
//! is opposite it.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::vector::Vector;

/// A coordinate triple `[i, j, k]`.
pub type Point = [f64; 3];

/// One planar quadrilateral side of a box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Face([Point; 4]);

impl Face {
    /// Build the face spanned by `basis_a * scalar_a` and
    /// `basis_b * scalar_b`, translated by `offset`.
    pub fn spanning(
        basis_a: Vector,
        scalar_a: f64,
        basis_b: Vector,
        scalar_b: f64,
        offset: Vector,
    ) -> Self {
        let a = basis_a.scale(scalar_a);
        let b = basis_b.scale(scalar_b);

        let corners = [Vector::zero(), a, b, a.add(b)].map(|v| v.add(offset).triple());
        Self(corners)
    }

    /// The four corners in construction order.
    pub fn points(&self) -> &[Point; 4] {
        &self.0
    }

    /// Corner `n` (0..4), or `None` when out of range.
    pub fn corner(&self, n: usize) -> Option<Point> {
        self.0.get(n).copied()
    }

    /// Cross product of the two spanning edges.
    ///
    /// Its length is the face area. The direction depends on the basis order
    /// used to build the face, so it is not guaranteed to point outward.
    pub fn normal(&self) -> Vector3<f64> {
        let origin = to_na(self.0[0]);
        let edge_a = to_na(self.0[1]) - origin;
        let edge_b = to_na(self.0[2]) - origin;
        edge_a.cross(&edge_b)
    }

    pub fn area(&self) -> f64 {
        self.normal().norm()
    }

    /// Mean of the four corners.
    pub fn centroid(&self) -> Point {
        let sum = self.0.iter().fold(Vector3::zeros(), |acc, p| acc + to_na(*p));
        Vector::from(sum / 4.0).triple()
    }
}

fn to_na(p: Point) -> Vector3<f64> {
    *Vector::from(p).as_nalgebra()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_corner_order_without_offset() {
        let face = Face::spanning(Vector::unit_i(), 2.0, Vector::unit_j(), 3.0, Vector::zero());
        assert_eq!(
            face.points(),
            &[
                [0.0, 0.0, 0.0],
                [2.0, 0.0, 0.0],
                [0.0, 3.0, 0.0],
                [2.0, 3.0, 0.0],
            ]
        );
    }

    #[test]
    fn test_offset_translates_every_corner() {
        let offset = Vector::unit_k().scale(4.0);
        let face = Face::spanning(Vector::unit_i(), 2.0, Vector::unit_j(), 3.0, offset);
        for p in face.points() {
            assert_eq!(p[2], 4.0);
        }
        assert_eq!(face.corner(3), Some([2.0, 3.0, 4.0]));
        assert_eq!(face.corner(4), None);
    }

    #[test]
    fn test_area_and_normal() {
        let face = Face::spanning(Vector::unit_j(), 3.0, Vector::unit_k(), 5.0, Vector::zero());
        assert_relative_eq!(face.area(), 15.0, epsilon = 1e-12);
        // j x k = i
        let n = face.normal();
        assert_relative_eq!(n.x, 15.0, epsilon = 1e-12);
        assert_relative_eq!(n.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(n.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_face_has_zero_area() {
        let face = Face::spanning(Vector::unit_i(), 0.0, Vector::unit_j(), 7.0, Vector::zero());
        assert_eq!(face.area(), 0.0);
    }

    #[test]
    fn test_centroid() {
        let offset = Vector::new(1.0, 1.0, 1.0);
        let face = Face::spanning(Vector::unit_i(), 2.0, Vector::unit_k(), 4.0, offset);
        let c = face.centroid();
        assert_relative_eq!(c[0], 2.0, epsilon = 1e-12);
        assert_relative_eq!(c[1], 1.0, epsilon = 1e-12);
        assert_relative_eq!(c[2], 3.0, epsilon = 1e-12);
    }
}
