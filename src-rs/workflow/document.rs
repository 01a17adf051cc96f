use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{ManagerError, Result};

/// A workflow body as read from disk, ready to send to the service.
#[derive(Clone, Debug, PartialEq)]
pub struct WorkflowDocument {
    body: Value,
}

impl WorkflowDocument {
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self {
                body: unwrap_envelope(map),
            }),
            other => Err(ManagerError::InvalidDocument(format!(
                "expected a JSON object, found {}",
                kind(&other)
            ))),
        }
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    pub fn into_body(self) -> Value {
        self.body
    }
}

/// Exported files sometimes wrap the workflow as `{"data": {...}}`. A body that
/// already carries `nodes` is taken as-is.
fn unwrap_envelope(mut map: Map<String, Value>) -> Value {
    if !map.contains_key("nodes") {
        if let Some(inner) = map.remove("data") {
            return inner;
        }
    }
    Value::Object(map)
}

pub fn read_json_file(path: &Path) -> Result<Value> {
    let raw = fs::read_to_string(path).map_err(|err| ManagerError::io(path, err))?;
    Ok(serde_json::from_str(&raw)?)
}

pub fn load_document(path: &Path) -> Result<WorkflowDocument> {
    WorkflowDocument::from_value(read_json_file(path)?)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
