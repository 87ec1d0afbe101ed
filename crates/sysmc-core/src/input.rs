//! Input parsing for the dataset mapping.
//!
//! The expected layout is a two-level JSON object:
//!
//! ```json
//! {
//!   "dataset_a": {
//!     "comp_1": { "value": 100.0,
//!                 "corr":   { "m1s": 90.0, "p1s": 110.0 },
//!                 "uncorr": { "m1s": 95.0, "p1s": 105.0 } }
//!   }
//! }
//! ```
//!
//! Malformed-input policy: a component missing any required field aborts the
//! whole run with [`Error::MalformedInput`] naming the dataset and component.
//! Components are never skipped silently.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::types::Component;

/// Parsed input: dataset name → component name → component values.
///
/// `BTreeMap` keeps iteration order stable; ordering affects diagnostics
/// only, never numeric results.
pub type Datasets = BTreeMap<String, BTreeMap<String, Component>>;

/// Parse the dataset mapping from JSON text.
pub fn parse_datasets(json: &str) -> Result<Datasets> {
    // Deserialize the outer mapping leniently so a bad component can be
    // reported with its dataset/component names instead of a bare path.
    let raw: BTreeMap<String, BTreeMap<String, serde_json::Value>> = serde_json::from_str(json)?;

    let mut datasets = Datasets::new();
    for (ds_name, raw_components) in raw {
        let mut components = BTreeMap::new();
        for (comp_name, body) in raw_components {
            let component: Component = serde_json::from_value(body).map_err(|e| {
                Error::MalformedInput(format!(
                    "dataset '{}', component '{}': {}",
                    ds_name, comp_name, e
                ))
            })?;
            components.insert(comp_name, component);
        }
        datasets.insert(ds_name, components);
    }
    Ok(datasets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_datasets() {
        let json = r#"{
            "ds_a": {
                "det00": { "value": 100.0,
                           "corr":   { "m1s": 90.0, "p1s": 110.0 },
                           "uncorr": { "m1s": 95.0, "p1s": 105.0 } },
                "det01": { "value": 50.0,
                           "corr":   { "m1s": 48.0, "p1s": 52.0 },
                           "uncorr": { "m1s": 49.0, "p1s": 51.0 } }
            },
            "ds_b": {
                "det02": { "value": 7.0,
                           "corr":   { "m1s": 7.0, "p1s": 7.0 },
                           "uncorr": { "m1s": 7.0, "p1s": 7.0 } }
            }
        }"#;

        let datasets = parse_datasets(json).unwrap();
        assert_eq!(datasets.len(), 2);
        assert_eq!(datasets["ds_a"].len(), 2);
        assert_eq!(datasets["ds_a"]["det00"].value, 100.0);
        assert_eq!(datasets["ds_b"]["det02"].corr.p1s, 7.0);
    }

    #[test]
    fn test_missing_field_aborts_with_component_name() {
        // det01 lacks uncorr.p1s
        let json = r#"{
            "ds_a": {
                "det01": { "value": 50.0,
                           "corr":   { "m1s": 48.0, "p1s": 52.0 },
                           "uncorr": { "m1s": 49.0 } }
            }
        }"#;

        let err = parse_datasets(json).unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)));
        let msg = err.to_string();
        assert!(msg.contains("ds_a"));
        assert!(msg.contains("det01"));
    }

    #[test]
    fn test_invalid_toplevel_json_is_a_json_error() {
        let err = parse_datasets("not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
