//! Validation of externally parsed initial conditions.
//!
//! A body record is a mapping holding exactly one body name, whose value holds
//! the `mass`, `pos`, `vel` and `colour` properties:
//!
//! ```json
//! { "Sun": { "mass": 2e30, "pos": [0, 0, 0], "vel": [0, 0, 0], "colour": "y" } }
//! ```
//!
//! A [`Body`] is only built from a record that passed every check.
use serde_json::{Map, Value};
use super::super::constants::REQUIRED_BODY_PROPERTIES;
use super::super::error::{Error, Result};
use super::{Axes, Body};

/// Build a body from a single-name record.
pub fn body_from_record(record: &Value) -> Result<Body> {
    let entries = match record.as_object() {
        Some(entries) => entries,
        None => return Err(Error::InvalidRecord(format!("expected a mapping from one body name to its properties, got {}", value_kind(record)))),
    };
    if entries.len() != 1 {
        return Err(Error::InvalidRecord(format!("expected exactly one body name per record, got {}", entries.len())));
    }
    match entries.iter().next() {
        Some((name, properties)) => body_from_properties(name, properties),
        None => Err(Error::InvalidRecord("empty record".to_string())),
    }
}

/// Build bodies from an ordered mapping `name -> properties`, preserving its order.
pub fn bodies_from_records(records: &Value) -> Result<Vec<Body>> {
    let entries = match records.as_object() {
        Some(entries) => entries,
        None => return Err(Error::InvalidRecord(format!("expected a mapping from body names to their properties, got {}", value_kind(records)))),
    };
    let mut bodies = Vec::with_capacity(entries.len());
    for (name, properties) in entries.iter() {
        bodies.push(body_from_properties(name, properties)?);
    }
    Ok(bodies)
}

pub fn body_from_properties(name: &str, properties: &Value) -> Result<Body> {
    let properties = match properties.as_object() {
        Some(properties) => properties,
        None => return Err(Error::InvalidRecord(format!("properties of body '{}' must be a mapping, got {}", name, value_kind(properties)))),
    };

    let missing: Vec<String> = REQUIRED_BODY_PROPERTIES.iter()
                                    .filter(|key| !properties.contains_key(**key))
                                    .map(|key| key.to_string())
                                    .collect();
    if !missing.is_empty() {
        return Err(Error::MissingProperties { body: name.to_string(), properties: missing });
    }
    let unexpected: Vec<String> = properties.keys()
                                    .filter(|key| !REQUIRED_BODY_PROPERTIES.contains(&key.as_str()))
                                    .cloned()
                                    .collect();
    if !unexpected.is_empty() {
        return Err(Error::UnexpectedProperties { body: name.to_string(), properties: unexpected });
    }

    let mass = read_mass(name, properties)?;
    let position = read_vector(name, properties, "pos")?;
    let velocity = read_vector(name, properties, "vel")?;
    let colour = match &properties["colour"] {
        Value::String(colour) => colour.clone(),
        other => return Err(invalid(name, "colour", format!("expected a string, got {}", value_kind(other)))),
    };
    Ok(Body::new(mass, position, velocity, colour))
}

fn read_mass(name: &str, properties: &Map<String, Value>) -> Result<f64> {
    match properties["mass"].as_f64() {
        Some(mass) if mass.is_finite() && mass > 0. => Ok(mass),
        Some(mass) => Err(invalid(name, "mass", format!("expected a finite number greater than zero, got {}", mass))),
        None => Err(invalid(name, "mass", format!("expected a number, got {}", value_kind(&properties["mass"])))),
    }
}

fn read_vector(name: &str, properties: &Map<String, Value>, property: &str) -> Result<Axes> {
    let components = match properties[property].as_array() {
        Some(components) => components,
        None => return Err(invalid(name, property, format!("expected a list of 3 numbers, got {}", value_kind(&properties[property])))),
    };
    if components.len() != 3 {
        return Err(invalid(name, property, format!("expected 3 components, got {}", components.len())));
    }
    let mut vector = [0.; 3];
    for (i, component) in components.iter().enumerate() {
        vector[i] = match component.as_f64() {
            Some(value) if value.is_finite() => value,
            _ => return Err(invalid(name, property, format!("component {} is not a finite number", i))),
        };
    }
    Ok(Axes::from(vector))
}

fn invalid(name: &str, property: &str, reason: String) -> Error {
    Error::InvalidProperty { body: name.to_string(), property: property.to_string(), reason: reason }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
