//! Loading of target objects from YAML or JSON manifests.

use crate::error::{Result, ValidatorError};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Parse manifest text into an object tree.
///
/// JSON is accepted as a subset of YAML. For multi-document input the first
/// non-empty document is used.
pub fn parse_manifest(content: &str) -> Result<Value> {
    for document in serde_yaml::Deserializer::from_str(content) {
        let value = Value::deserialize(document)?;
        if !value.is_null() {
            return Ok(value);
        }
    }
    Err(ValidatorError::EmptyManifest)
}

/// Load a manifest from a file, or from stdin when `path` is `None` or `-`.
pub fn load_manifest(path: Option<&Path>) -> Result<Value> {
    let content = match path {
        Some(p) if p != Path::new("-") => {
            log::debug!("Reading manifest from {}", p.display());
            fs::read_to_string(p)?
        }
        _ => {
            log::debug!("Reading manifest from stdin");
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    parse_manifest(&content)
}
