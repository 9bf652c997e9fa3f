//! YAML data loading
//!
//! The data file becomes the template context, so it is parsed straight into
//! the template engine's value type.

use std::fs;
use std::path::Path;

use serde::de::IgnoredAny;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::AppError;

/// Read and parse a YAML data file
pub fn load(path: &Path) -> Result<Value, AppError> {
    let content = fs::read_to_string(path).map_err(|source| AppError::DataRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content, path)
}

/// Parse YAML text; `path` is only used in error messages
pub fn parse(content: &str, path: &Path) -> Result<Value, AppError> {
    if content.trim().is_empty() {
        debug!(path = %path.display(), "Empty data file, using empty context");
        return Ok(Value::Object(Map::new()));
    }

    let data: Value = serde_yaml::from_str(content).map_err(|source| data_error(content, path, source))?;

    match data {
        Value::Object(_) => Ok(data),
        Value::Null => Ok(Value::Object(Map::new())),
        _ => Err(AppError::DataShape {
            path: path.to_path_buf(),
        }),
    }
}

/// Well-formed YAML whose values do not fit the context is not a syntax error
fn data_error(content: &str, path: &Path, source: serde_yaml::Error) -> AppError {
    let well_formed = serde_yaml::from_str::<IgnoredAny>(content).is_ok();
    match source.location() {
        Some(location) if !well_formed => {
            warn!(
                line = location.line(),
                column = location.column(),
                "There was an error on line {}, column {} while trying to parse file {}",
                location.line(),
                location.column(),
                path.display()
            );
            AppError::DataSyntax {
                path: path.to_path_buf(),
                line: location.line(),
                column: location.column(),
                source,
            }
        }
        _ => {
            warn!(path = %path.display(), error = %source, "Data file holds values that cannot be used");
            AppError::DataInvalid {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}
