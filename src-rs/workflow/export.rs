use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::client::{WorkflowApi, WorkflowSummary};
use crate::error::{ManagerError, Result};
use crate::helpers::{pretty_json, safe_file_name};

#[derive(Clone, Debug, PartialEq)]
pub struct ExportedWorkflow {
    pub name: String,
    pub file_name: String,
    pub path: PathBuf,
}

pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|err| ManagerError::io(dir, err))
}

/// Some service versions wrap single-workflow responses in `data`.
pub fn full_workflow(response: Value) -> Value {
    match response {
        Value::Object(mut map) if map.get("data").map_or(false, Value::is_object) => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

pub fn file_name_for(name: &str, id: &str) -> String {
    let stem = safe_file_name(name);
    if stem.is_empty() {
        format!("workflow-{}.json", id)
    } else {
        format!("{}.json", stem)
    }
}

pub fn export_one(
    api: &dyn WorkflowApi,
    dir: &Path,
    summary: &WorkflowSummary,
) -> Result<ExportedWorkflow> {
    let full = full_workflow(api.get_workflow(&summary.id)?);
    let name = full
        .get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("workflow-{}", summary.id));
    let file_name = file_name_for(&name, &summary.id);
    let path = dir.join(&file_name);
    debug!(id = %summary.id, path = %path.display(), "writing workflow export");
    fs::write(&path, pretty_json(&full)).map_err(|err| ManagerError::io(&path, err))?;
    Ok(ExportedWorkflow {
        name,
        file_name,
        path,
    })
}
