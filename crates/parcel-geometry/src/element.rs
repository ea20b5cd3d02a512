//! Box element synthesis.
//!
//! [`synthesize_element`] turns a [`Parcel`] into the six faces of the
//! axis-aligned box `[0, L] x [0, W] x [0, H]` in the parcel's local frame,
//! carrying its color and opacity alongside. Faces come in a fixed order,
//! listed by [`FaceSide::ALL`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::face::{Face, Point};
use crate::parcel::{Parcel, ParcelError};
use crate::vector::Vector;

/// The slot a face occupies in [`Element::faces`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceSide {
    /// Length x width at height 0.
    Bottom,
    /// Length x width at full height.
    Top,
    /// Length x height at width 0.
    Front,
    /// Length x height at full width.
    Back,
    /// Width x height at length 0.
    Left,
    /// Width x height at full length.
    Right,
}

impl FaceSide {
    /// All sides in synthesis order.
    pub const ALL: [FaceSide; 6] = [
        FaceSide::Bottom,
        FaceSide::Top,
        FaceSide::Front,
        FaceSide::Back,
        FaceSide::Left,
        FaceSide::Right,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// The geometric description of one parcel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub faces: [Face; 6],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl Element {
    pub fn face(&self, side: FaceSide) -> &Face {
        &self.faces[side.index()]
    }

    /// All face corners flattened into a single point string, face by face.
    pub fn points(&self) -> Vec<Point> {
        self.faces.iter().flat_map(|f| f.points().iter().copied()).collect()
    }

    /// Axis-aligned bounding box: returns (min_corner, max_corner).
    pub fn bounding_box(&self) -> (Point, Point) {
        let mut min = [f64::INFINITY; 3];
        let mut max = [f64::NEG_INFINITY; 3];
        for p in self.faces.iter().flat_map(|f| f.points()) {
            for axis in 0..3 {
                min[axis] = min[axis].min(p[axis]);
                max[axis] = max[axis].max(p[axis]);
            }
        }
        (min, max)
    }

    /// Sum of the six face areas.
    pub fn surface_area(&self) -> f64 {
        self.faces.iter().map(Face::area).sum()
    }
}

/// Build the six faces of a parcel's box.
pub fn synthesize_element(parcel: &Parcel) -> Element {
    let (l, w, h) = (parcel.length(), parcel.width(), parcel.height());

    let i = Vector::unit_i(); // length basis
    let j = Vector::unit_j(); // width basis
    let k = Vector::unit_k(); // height basis
    let origin = Vector::zero();

    let faces = [
        Face::spanning(i, l, j, w, origin),
        Face::spanning(i, l, j, w, k.scale(h)),
        Face::spanning(i, l, k, h, origin),
        Face::spanning(i, l, k, h, j.scale(w)),
        Face::spanning(j, w, k, h, origin),
        Face::spanning(j, w, k, h, i.scale(l)),
    ];

    log::trace!("Synthesised {}x{}x{} box (key={:?})", l, w, h, parcel.key());

    Element {
        faces,
        color: parcel.color().map(str::to_owned),
        opacity: parcel.opacity(),
    }
}

/// Validate an open record and synthesise its element.
pub fn synthesize_record(record: &Map<String, Value>) -> Result<Element, ParcelError> {
    let parcel = Parcel::from_record(record)?;
    Ok(synthesize_element(&parcel))
}
