use std::io::Write;
use std::path::Path;

use serde_json::Value;
use tracing::{info, warn};

use super::args::Command;
use super::render;
use crate::client::{Activation, WorkflowApi};
use crate::error::Result;
use crate::workflow::{export, import, load_document, read_json_file, ImportSummary, WebhookPaths};

/// Runs one command. Failures are printed to `out` and never escape, so the
/// process exit status does not depend on the service.
pub fn dispatch(api: &dyn WorkflowApi, command: &Command, out: &mut dyn Write) {
    let (context, result) = match command {
        Command::List => ("listing workflows", list(api, out)),
        Command::Get { id } => ("getting workflow", get(api, id, out)),
        Command::Create { file } => ("creating workflow", create(api, file, out)),
        Command::Update { id, file } => ("updating workflow", update(api, id, file, out)),
        Command::Activate { id } => (
            "setting activation",
            set_activation(api, id, Activation::Activate, out),
        ),
        Command::Deactivate { id } => (
            "setting activation",
            set_activation(api, id, Activation::Deactivate, out),
        ),
        Command::RunWebhook { url, data } => ("running webhook", run_webhook(api, url, data, out)),
        Command::Export { dir } => ("exporting workflows", export_all(api, dir, out)),
        Command::Import { dir } => ("importing workflows", import_all(api, dir, out)),
    };
    if let Err(err) = result {
        warn!(error = %err, local = err.is_local(), "{} failed", context);
        render::error(out, context, &err);
    }
}

fn list(api: &dyn WorkflowApi, out: &mut dyn Write) -> Result<()> {
    let workflows = api.list_workflows()?;
    render::workflows(out, &workflows)?;
    Ok(())
}

fn get(api: &dyn WorkflowApi, id: &str, out: &mut dyn Write) -> Result<()> {
    let workflow = api.get_workflow(id)?;
    render::json(out, &workflow)?;
    Ok(())
}

fn create(api: &dyn WorkflowApi, file: &Path, out: &mut dyn Write) -> Result<()> {
    let document = load_document(file)?;
    let id = api.create_workflow(&document)?;
    render::created(out, &id)?;
    Ok(())
}

fn update(api: &dyn WorkflowApi, id: &str, file: &Path, out: &mut dyn Write) -> Result<()> {
    let body = read_json_file(file)?;
    api.update_workflow(id, &body)?;
    render::updated(out, id)?;
    Ok(())
}

fn set_activation(
    api: &dyn WorkflowApi,
    id: &str,
    activation: Activation,
    out: &mut dyn Write,
) -> Result<()> {
    api.set_activation(id, activation)?;
    render::activation(out, id, activation)?;
    Ok(())
}

fn run_webhook(api: &dyn WorkflowApi, url: &str, data: &str, out: &mut dyn Write) -> Result<()> {
    let payload: Value = if data.is_empty() {
        Value::Object(Default::default())
    } else {
        serde_json::from_str(data)?
    };
    render::webhook_call(out, url)?;
    let reply = api.trigger_webhook(url, &payload)?;
    render::webhook_reply(out, &reply)?;
    Ok(())
}

fn export_all(api: &dyn WorkflowApi, dir: &Path, out: &mut dyn Write) -> Result<()> {
    export::ensure_dir(dir)?;
    let workflows = api.list_workflows()?;
    info!(count = workflows.len(), dir = %dir.display(), "exporting workflows");
    let mut exported = 0;
    for summary in &workflows {
        match export::export_one(api, dir, summary) {
            Ok(item) => {
                render::exported(out, &item)?;
                exported += 1;
            }
            Err(err) => {
                warn!(id = %summary.id, error = %err, "export failed");
                render::error(out, &format!("exporting {}", summary.name), &err);
            }
        }
    }
    render::export_done(out, exported)?;
    Ok(())
}

fn import_all(api: &dyn WorkflowApi, dir: &Path, out: &mut dyn Write) -> Result<()> {
    let files = import::workflow_files(dir)?;
    if files.is_empty() {
        writeln!(out, "No workflow files found in {}", dir.display())?;
        return Ok(());
    }
    let existing = import::index_by_name(api.list_workflows()?);
    info!(files = files.len(), existing = existing.len(), "importing workflows");
    let mut paths = WebhookPaths::default();
    let mut summary = ImportSummary::default();
    for file in &files {
        let label = file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        match import::import_one(api, file, &existing, &mut paths) {
            Ok(outcome) => {
                summary.record(&outcome);
                render::imported(out, &outcome)?;
                // Activation failures are reported but keep the import counted.
                if let Err(err) = api.set_activation(outcome.id(), Activation::Activate) {
                    warn!(id = %outcome.id(), error = %err, "activation after import failed");
                    render::error(out, &format!("activating {}", outcome.name()), &err);
                }
            }
            Err(err) => {
                summary.failed += 1;
                warn!(file = %label, error = %err, "import failed");
                render::error(out, &format!("importing {}", label), &err);
            }
        }
    }
    render::import_done(out, &summary)?;
    Ok(())
}
