//! Typed parcel records.
//!
//! Parcels arrive as open JSON objects: three required numeric dimensions,
//! two optional visual attributes, and whatever else the host pipeline
//! chose to store. [`Parcel::from_record`] splits such a record into typed
//! fields and an opaque side-mapping of everything it does not recognise.
//!
//! Dimensions are strict: a missing, non-numeric or non-finite `length`,
//! `width` or `height` is a [`ParcelError`]. Visual attributes are lenient:
//! a `color` that is not a string or an `opacity` that is not a number is
//! dropped without error.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

const LENGTH: &str = "length";
const WIDTH: &str = "width";
const HEIGHT: &str = "height";
const COLOR: &str = "color";
const OPACITY: &str = "opacity";

/// Keys with a typed home on [`Parcel`]; never stored in `extra`.
const RESERVED: [&str; 5] = [LENGTH, WIDTH, HEIGHT, COLOR, OPACITY];

/// Errors raised while turning a record into a [`Parcel`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParcelError {
    #[error("Record is not an object (found {0})")]
    NotAnObject(&'static str),

    #[error("Missing required dimension '{0}'")]
    MissingDimension(&'static str),

    #[error("Dimension '{name}' must be a number, found {found}")]
    NonNumericDimension {
        name: &'static str,
        found: &'static str,
    },

    #[error("Dimension '{name}' must be finite, got {value}")]
    NonFiniteDimension { name: &'static str, value: f64 },
}

/// A rectangular parcel: dimensions, optional visual attributes, and
/// pass-through fields for the host pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Parcel {
    length: f64,
    width: f64,
    height: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    opacity: Option<f64>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Parcel {
    /// Create a parcel with no visual attributes.
    ///
    /// Fails if any dimension is NaN or infinite. Zero and negative values
    /// are accepted.
    pub fn new(length: f64, width: f64, height: f64) -> Result<Self, ParcelError> {
        Ok(Self {
            length: finite(LENGTH, length)?,
            width: finite(WIDTH, width)?,
            height: finite(HEIGHT, height)?,
            color: None,
            opacity: None,
            extra: Map::new(),
        })
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the opacity. A non-finite value leaves the parcel without one.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity).filter(|o| o.is_finite());
        self
    }

    /// Attach a pass-through field. Reserved keys (dimensions, `color`,
    /// `opacity`) are ignored; use the typed constructors for those.
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        let key = key.into();
        if RESERVED.contains(&key.as_str()) {
            log::debug!("Ignoring pass-through field '{}': reserved key", key);
        } else {
            self.extra.insert(key, value);
        }
        self
    }

    /// Convert an open record into a parcel.
    pub fn from_record(record: &Map<String, Value>) -> Result<Self, ParcelError> {
        let length = required_dimension(record, LENGTH)?;
        let width = required_dimension(record, WIDTH)?;
        let height = required_dimension(record, HEIGHT)?;

        let color = validated_color(record.get(COLOR));
        let opacity = validated_opacity(record.get(OPACITY));

        let extra = record
            .iter()
            .filter(|(k, _)| !RESERVED.contains(&k.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        Ok(Self {
            length,
            width,
            height,
            color,
            opacity,
            extra,
        })
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn opacity(&self) -> Option<f64> {
        self.opacity
    }

    /// Fields the parcel carries but does not interpret.
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// The record's primary key, if it has a string or numeric `key`.
    pub fn key(&self) -> Option<String> {
        match self.extra.get("key")? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Human-readable label (`description` field).
    pub fn description(&self) -> Option<&str> {
        self.extra.get("description").and_then(Value::as_str)
    }

    /// Classification the host assigns the parcel to (`category` field).
    pub fn category(&self) -> Option<&str> {
        self.extra.get("category").and_then(Value::as_str)
    }
}

impl TryFrom<Map<String, Value>> for Parcel {
    type Error = ParcelError;

    fn try_from(record: Map<String, Value>) -> Result<Self, Self::Error> {
        Parcel::from_record(&record)
    }
}

impl TryFrom<Value> for Parcel {
    type Error = ParcelError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(record) => Parcel::from_record(&record),
            other => Err(ParcelError::NotAnObject(type_name(&other))),
        }
    }
}

/// Keep `color` only when it is a string.
pub fn validated_color(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        other => {
            log::debug!("Ignoring color of type {}", type_name(other));
            None
        }
    }
}

/// Keep `opacity` only when it is a number.
pub fn validated_opacity(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64().filter(|o| o.is_finite()),
        other => {
            log::debug!("Ignoring opacity of type {}", type_name(other));
            None
        }
    }
}

fn required_dimension(record: &Map<String, Value>, name: &'static str) -> Result<f64, ParcelError> {
    let value = record.get(name).ok_or(ParcelError::MissingDimension(name))?;
    let number = value.as_f64().ok_or(ParcelError::NonNumericDimension {
        name,
        found: type_name(value),
    })?;
    finite(name, number)
}

fn finite(name: &'static str, value: f64) -> Result<f64, ParcelError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParcelError::NonFiniteDimension { name, value })
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
