//! Case files: JSON description of the initial conditions of a system.
//!
//! ```json
//! {
//!     "gravitational_constant": 6.674e-11,
//!     "bodies": {
//!         "Sun": { "mass": 2e30, "pos": [0, 0, 0], "vel": [0, 0, 0], "colour": "y" },
//!         "Earth": { "mass": 6e24, "pos": [1.5e11, 0, 0], "vel": [0, 3e4, 0], "colour": "b" }
//!     }
//! }
//! ```
//!
//! `gravitational_constant` is optional (S.I. value by default). The order of the
//! bodies in the file is the order of the bodies in the system.
use std::fs::File;
use std::io::Read;
use std::path::Path;
use serde_json::Value;
use super::bodies::System;
use super::constants::G_SI;
use super::error::{Error, Result};

const CASE_KEYS : [&str; 2] = ["gravitational_constant", "bodies"];

pub fn load_case(case_path: &Path) -> Result<System> {
    let mut json_encoded = String::new();
    File::open(case_path)?.read_to_string(&mut json_encoded)?;
    parse_case(&json_encoded)
}

pub fn parse_case(json_encoded: &str) -> Result<System> {
    let case: Value = serde_json::from_str(json_encoded)?;
    let case = match case.as_object() {
        Some(case) => case,
        None => return Err(Error::InvalidCase("the top level must be a mapping".to_string())),
    };
    if let Some(key) = case.keys().find(|key| !CASE_KEYS.contains(&key.as_str())) {
        return Err(Error::InvalidCase(format!("unexpected key '{}'", key)));
    }

    let gravitational_constant = match case.get("gravitational_constant") {
        None => G_SI,
        Some(value) => match value.as_f64() {
            Some(g) if g.is_finite() && g > 0. => g,
            _ => return Err(Error::InvalidCase("'gravitational_constant' must be a positive number".to_string())),
        },
    };
    let records = match case.get("bodies") {
        Some(records) => records,
        None => return Err(Error::InvalidCase("missing 'bodies'".to_string())),
    };
    System::from_records_with_gravitational_constant(records, gravitational_constant)
}
