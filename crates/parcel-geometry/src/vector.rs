//! Immutable three-component vectors.
//!
//! [`Vector`] is a thin value type over [`nalgebra::Vector3`]. Every
//! operation returns a fresh vector; nothing is mutated in place. The three
//! components are named `i`, `j`, `k` after the box's local axes
//! (length, width, height).

use std::ops::{Add, Mul};

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// A vector in the box's local frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector(Vector3<f64>);

impl Vector {
    /// Create a vector from its components.
    pub fn new(i: f64, j: f64, k: f64) -> Self {
        Self(Vector3::new(i, j, k))
    }

    /// The additive identity `(0, 0, 0)`.
    pub fn zero() -> Self {
        Self(Vector3::zeros())
    }

    /// Unit vector along the length axis.
    pub fn unit_i() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// Unit vector along the width axis.
    pub fn unit_j() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// Unit vector along the height axis.
    pub fn unit_k() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    pub fn i(&self) -> f64 {
        self.0.x
    }

    pub fn j(&self) -> f64 {
        self.0.y
    }

    pub fn k(&self) -> f64 {
        self.0.z
    }

    /// Component-wise sum.
    pub fn add(self, other: Vector) -> Vector {
        Self(self.0 + other.0)
    }

    /// Component-wise product with a scalar.
    pub fn scale(self, scalar: f64) -> Vector {
        Self(self.0 * scalar)
    }

    /// Project to an `[i, j, k]` coordinate triple.
    pub fn triple(self) -> [f64; 3] {
        [self.0.x, self.0.y, self.0.z]
    }

    /// Borrow the underlying nalgebra vector.
    pub fn as_nalgebra(&self) -> &Vector3<f64> {
        &self.0
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::add(self, rhs)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        self.scale(rhs)
    }
}

impl From<[f64; 3]> for Vector {
    fn from(triple: [f64; 3]) -> Self {
        Self::new(triple[0], triple[1], triple[2])
    }
}

impl From<Vector> for [f64; 3] {
    fn from(v: Vector) -> Self {
        v.triple()
    }
}

impl From<Vector3<f64>> for Vector {
    fn from(v: Vector3<f64>) -> Self {
        Self(v)
    }
}
