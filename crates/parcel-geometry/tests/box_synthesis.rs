//! End-to-end checks of box synthesis from raw JSON records.

use approx::assert_relative_eq;
use parcel_geometry::{synthesize_element, synthesize_record, FaceSide, Parcel, ParcelError};
use serde_json::{json, Value};

fn synthesize(value: Value) -> Result<parcel_geometry::Element, ParcelError> {
    let parcel = Parcel::try_from(value)?;
    Ok(synthesize_element(&parcel))
}

#[test]
fn test_2x3x4_parcel() {
    let element = synthesize(json!({"length": 2, "width": 3, "height": 4})).unwrap();
    assert_eq!(element.faces.len(), 6);

    let bottom = element.face(FaceSide::Bottom);
    let top = element.face(FaceSide::Top);
    for p in bottom.points() {
        assert_eq!(p[2], 0.0);
    }
    for p in top.points() {
        assert_eq!(p[2], 4.0);
    }
    for face in [bottom, top] {
        let is: Vec<f64> = face.points().iter().map(|p| p[0]).collect();
        let js: Vec<f64> = face.points().iter().map(|p| p[1]).collect();
        assert_eq!(is.iter().cloned().fold(f64::INFINITY, f64::min), 0.0);
        assert_eq!(is.iter().cloned().fold(f64::NEG_INFINITY, f64::max), 2.0);
        assert_eq!(js.iter().cloned().fold(f64::INFINITY, f64::min), 0.0);
        assert_eq!(js.iter().cloned().fold(f64::NEG_INFINITY, f64::max), 3.0);
    }
}

#[test]
fn test_unit_cube_with_opacity() {
    let element =
        synthesize(json!({"length": 1, "width": 1, "height": 1, "opacity": 0.5})).unwrap();
    assert_eq!(element.opacity, Some(0.5));
    assert_eq!(element.color, None);
}

#[test]
fn test_color_type_guard() {
    let wrong = synthesize(json!({"length": 1, "width": 1, "height": 1, "color": 42})).unwrap();
    assert_eq!(wrong.color, None);

    let right = synthesize(json!({"length": 1, "width": 1, "height": 1, "color": "red"})).unwrap();
    assert_eq!(right.color.as_deref(), Some("red"));
}

#[test]
fn test_extents_span_the_box() {
    for &(l, w, h) in &[(1.0, 1.0, 1.0), (0.5, 12.0, 3.25), (100.0, 0.1, 7.0)] {
        let element = synthesize_element(&Parcel::new(l, w, h).unwrap());
        assert_eq!(element.points().len(), 24);
        for face in &element.faces {
            assert_eq!(face.points().len(), 4);
        }

        let (min, max) = element.bounding_box();
        assert_eq!(min, [0.0, 0.0, 0.0]);
        assert_relative_eq!(max[0], l, epsilon = 1e-12);
        assert_relative_eq!(max[1], w, epsilon = 1e-12);
        assert_relative_eq!(max[2], h, epsilon = 1e-12);

        let expected_area = 2.0 * (l * w + l * h + w * h);
        assert_relative_eq!(element.surface_area(), expected_area, max_relative = 1e-12);
    }
}

#[test]
fn test_every_corner_of_the_box_is_covered() {
    let (l, w, h) = (2.0, 3.0, 4.0);
    let element = synthesize_element(&Parcel::new(l, w, h).unwrap());
    let points = element.points();
    for &i in &[0.0, l] {
        for &j in &[0.0, w] {
            for &k in &[0.0, h] {
                let hits = points.iter().filter(|p| **p == [i, j, k]).count();
                // Each box corner touches exactly three faces.
                assert_eq!(hits, 3, "corner {:?}", [i, j, k]);
            }
        }
    }
}

#[test]
fn test_synthesis_is_deterministic() {
    let record = json!({"length": 2.5, "width": 1.5, "height": 0.75, "color": "teal"});
    let a = synthesize_record(record.as_object().unwrap()).unwrap();
    let b = synthesize_record(record.as_object().unwrap()).unwrap();
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn test_invalid_dimensions_are_reported() {
    assert_eq!(
        synthesize(json!({"width": 1, "height": 1})),
        Err(ParcelError::MissingDimension("length"))
    );
    assert_eq!(
        synthesize(json!({"length": 1, "width": null, "height": 1})),
        Err(ParcelError::NonNumericDimension {
            name: "width",
            found: "null"
        })
    );
    assert_eq!(
        synthesize(json!("not a record")),
        Err(ParcelError::NotAnObject("string"))
    );
}

#[test]
fn test_element_round_trips_through_json() {
    let element = synthesize(json!({
        "length": 2, "width": 3, "height": 4, "color": "red", "opacity": 0.25
    }))
    .unwrap();
    let json = serde_json::to_string(&element).expect("Serialisation failed");
    let back: parcel_geometry::Element =
        serde_json::from_str(&json).expect("Deserialisation failed");
    assert_eq!(back, element);
}

#[test]
fn test_serialised_parcel_synthesises_the_same_box() {
    let parcel = Parcel::new(2.0, 3.0, 4.0)
        .unwrap()
        .with_extra("length", json!(99))
        .with_extra("key", json!("first_parcel"));
    let json = serde_json::to_string(&parcel).unwrap();
    let back: Parcel = serde_json::from_str(&json).unwrap();
    assert_eq!(back, parcel);

    let (_, max) = synthesize_element(&back).bounding_box();
    assert_eq!(max, [2.0, 3.0, 4.0]);
}
