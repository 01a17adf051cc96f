use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{json, Value};
use tracing::debug;

use super::document::{read_json_file, WorkflowDocument};
use crate::client::{WorkflowApi, WorkflowSummary};
use crate::error::{ManagerError, Result};
use crate::helpers::safe_file_name;

#[derive(Clone, Debug, PartialEq)]
pub enum ImportOutcome {
    Created { name: String, id: String },
    Updated { name: String, id: String },
}

impl ImportOutcome {
    pub fn name(&self) -> &str {
        match self {
            ImportOutcome::Created { name, .. } | ImportOutcome::Updated { name, .. } => name,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            ImportOutcome::Created { id, .. } | ImportOutcome::Updated { id, .. } => id,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub created: usize,
    pub updated: usize,
    pub failed: usize,
}

impl ImportSummary {
    pub fn ok(&self) -> usize {
        self.created + self.updated
    }

    pub fn record(&mut self, outcome: &ImportOutcome) {
        match outcome {
            ImportOutcome::Created { .. } => self.created += 1,
            ImportOutcome::Updated { .. } => self.updated += 1,
        }
    }
}

/// Webhook paths claimed so far in one import run.
#[derive(Debug, Default)]
pub struct WebhookPaths {
    used: HashSet<String>,
}

impl WebhookPaths {
    /// Trims the path and drops one leading `/`. An empty result takes
    /// `fallback`; a taken one gets `-alt` appended until it is free.
    pub fn claim(&mut self, raw: &str, fallback: &str) -> String {
        let trimmed = raw.trim();
        let trimmed = trimmed.strip_prefix('/').unwrap_or(trimmed);
        let mut path = if trimmed.is_empty() {
            fallback.to_string()
        } else {
            trimmed.to_string()
        };
        while self.used.contains(&path) {
            path.push_str("-alt");
        }
        self.used.insert(path.clone());
        path
    }
}

fn is_webhook(node: &Value) -> bool {
    node.get("type")
        .and_then(Value::as_str)
        .map_or(false, |kind| kind.contains("webhook"))
}

pub fn normalize_webhooks(body: &mut Value, paths: &mut WebhookPaths, name: &str) {
    let fallback = format!("auto-{}", safe_file_name(name));
    let nodes = match body.get_mut("nodes").and_then(Value::as_array_mut) {
        Some(nodes) => nodes,
        None => return,
    };
    for node in nodes.iter_mut().filter(|node| is_webhook(node)) {
        let raw = match node.pointer("/parameters/path").and_then(Value::as_str) {
            Some(raw) => raw.to_string(),
            None => continue,
        };
        node["parameters"]["path"] = Value::String(paths.claim(&raw, &fallback));
    }
}

/// Builds the body sent to the service. Only name, nodes, connections and
/// settings go out; `active` and server-side fields are dropped.
pub fn import_payload(value: Value, fallback_name: &str, paths: &mut WebhookPaths) -> Result<(String, Value)> {
    let mut body = WorkflowDocument::from_value(value)?.into_body();
    let name = body
        .get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .unwrap_or(fallback_name)
        .to_string();
    normalize_webhooks(&mut body, paths, &name);
    let take = |key: &str, default: Value| body.get(key).cloned().unwrap_or(default);
    let payload = json!({
        "name": name,
        "nodes": take("nodes", json!([])),
        "connections": take("connections", json!({})),
        "settings": take("settings", json!({})),
    });
    Ok((name, payload))
}

pub fn workflow_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|err| ManagerError::io(dir, err))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|err| ManagerError::io(dir, err))?.path();
        if path.is_file() && path.extension().map_or(false, |ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

pub fn index_by_name(workflows: Vec<WorkflowSummary>) -> HashMap<String, String> {
    workflows.into_iter().map(|w| (w.name, w.id)).collect()
}

/// Updates the workflow with the same name if the service has one, otherwise
/// creates it.
pub fn import_one(
    api: &dyn WorkflowApi,
    file: &Path,
    existing: &HashMap<String, String>,
    paths: &mut WebhookPaths,
) -> Result<ImportOutcome> {
    let stem = file
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let (name, payload) = import_payload(read_json_file(file)?, &stem, paths)?;
    match existing.get(&name) {
        Some(id) => {
            debug!(%name, %id, "updating existing workflow");
            api.update_workflow(id, &payload)?;
            Ok(ImportOutcome::Updated {
                name,
                id: id.clone(),
            })
        }
        None => {
            debug!(%name, "creating workflow");
            let id = api.create_workflow(&WorkflowDocument::from_value(payload)?)?;
            Ok(ImportOutcome::Created { name, id })
        }
    }
}
