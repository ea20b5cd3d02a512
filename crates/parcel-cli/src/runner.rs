//! Job runner: loads parcel records, synthesises elements, writes results.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use serde_json::Value;

use parcel_geometry::{synthesize_element, Element, Parcel, ParcelError, Point};

/// One synthesised parcel, tagged with the pass-through fields a host
/// needs to attach the geometry to its own object.
#[derive(Debug, Serialize)]
pub struct ElementRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(flatten)]
    pub element: Element,
}

/// The flattened point string of one element.
#[derive(Debug, Serialize)]
pub struct PointString {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub points: Vec<Point>,
}

/// A record that failed validation.
#[derive(Debug)]
pub struct RecordFailure {
    pub index: usize,
    pub key: Option<String>,
    pub error: ParcelError,
}

impl std::fmt::Display for RecordFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.key {
            Some(key) => write!(f, "record {} ('{}'): {}", self.index, key, self.error),
            None => write!(f, "record {}: {}", self.index, self.error),
        }
    }
}

/// Read the records file: either a bare array of records or an object
/// holding the array under `entity`.
pub fn load_records(path: &Path, entity: &str) -> Result<Vec<Value>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read records file {}", path.display()))?;
    let document: Value = serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in {}", path.display()))?;
    extract_records(document, entity)
}

fn extract_records(document: Value, entity: &str) -> Result<Vec<Value>> {
    match document {
        Value::Array(records) => Ok(records),
        Value::Object(mut map) => match map.remove(entity) {
            Some(Value::Array(records)) => Ok(records),
            Some(_) => bail!("'{}' must hold an array of records", entity),
            None => bail!("No '{}' records found", entity),
        },
        _ => bail!("Records file must contain an array or an object"),
    }
}

/// Convert every record into a parcel, collecting all failures.
pub fn validate_records(records: &[Value]) -> (Vec<Parcel>, Vec<RecordFailure>) {
    let mut parcels = Vec::with_capacity(records.len());
    let mut failures = Vec::new();

    for (index, record) in records.iter().enumerate() {
        let parcel = match record.as_object() {
            Some(map) => Parcel::from_record(map),
            None => Err(ParcelError::NotAnObject(json_type(record))),
        };
        match parcel {
            Ok(parcel) => parcels.push(parcel),
            Err(error) => failures.push(RecordFailure {
                index,
                key: record_key(record),
                error,
            }),
        }
    }

    (parcels, failures)
}

/// Synthesise every record, stopping at the first invalid one.
pub fn synthesize_records(records: &[Value]) -> Result<Vec<ElementRecord>> {
    let (parcels, failures) = validate_records(records);
    if let Some(first) = failures.first() {
        bail!("Invalid parcel {}", first);
    }

    let out = parcels
        .iter()
        .map(|parcel| ElementRecord {
            key: parcel.key(),
            description: parcel.description().map(str::to_owned),
            category: parcel.category().map(str::to_owned),
            element: synthesize_element(parcel),
        })
        .collect::<Vec<_>>();

    log::info!("Synthesised {} element(s)", out.len());
    Ok(out)
}

/// Write synthesised elements to a JSON file.
pub fn write_elements_json(elements: &[ElementRecord], path: &Path, pretty: bool) -> Result<()> {
    write_json(elements, path, pretty)?;
    println!("Elements written to: {}", path.display());
    Ok(())
}

/// Write each element's flattened point string to a JSON file.
pub fn write_points_json(elements: &[ElementRecord], path: &Path, pretty: bool) -> Result<()> {
    let strings: Vec<PointString> = elements
        .iter()
        .map(|e| PointString {
            key: e.key.clone(),
            points: e.element.points(),
        })
        .collect();
    write_json(&strings, path, pretty)?;
    println!("Point strings written to: {}", path.display());
    Ok(())
}

fn write_json<T: Serialize + ?Sized>(value: &T, path: &Path, pretty: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("JSON serialisation error")?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn record_key(record: &Value) -> Option<String> {
    match record.get("key")? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
