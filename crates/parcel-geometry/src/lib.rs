//! # Parcel Geometry
//!
//! Turns rectangular parcel records into box geometry. This crate provides:
//!
//! - **Vectors** ([`vector`]) — An immutable three-component vector with
//!   zero, addition, and uniform scaling.
//! - **Faces** ([`face`]) — Four-corner rectangles spanned by two scaled
//!   basis vectors and an offset.
//! - **Parcels** ([`parcel`]) — Typed records with strict dimensions and
//!   lenient color/opacity attributes.
//! - **Elements** ([`element`]) — The six faces of a parcel's box plus its
//!   validated attributes.
//!
//! ```
//! use parcel_geometry::{synthesize_element, Parcel};
//!
//! let parcel = Parcel::new(2.0, 3.0, 4.0).unwrap().with_color("red");
//! let element = synthesize_element(&parcel);
//! assert_eq!(element.faces.len(), 6);
//! assert_eq!(element.color.as_deref(), Some("red"));
//! ```

pub mod element;
pub mod face;
pub mod parcel;
pub mod vector;

pub use element::{synthesize_element, synthesize_record, Element, FaceSide};
pub use face::{Face, Point};
pub use parcel::{Parcel, ParcelError};
pub use vector::Vector;
