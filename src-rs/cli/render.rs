use std::io::{self, Write};

use serde_json::Value;

use crate::client::{Activation, WebhookBody, WebhookReply, WorkflowSummary};
use crate::error::ManagerError;
use crate::helpers::pretty_json;
use crate::workflow::{ExportedWorkflow, ImportOutcome, ImportSummary};

pub fn workflows(out: &mut dyn Write, items: &[WorkflowSummary]) -> io::Result<()> {
    writeln!(out, "Found {} workflows:", items.len())?;
    for w in items {
        writeln!(out, "[{}] {} ({})", w.id, w.name, w.state_label())?;
    }
    Ok(())
}

pub fn json(out: &mut dyn Write, value: &Value) -> io::Result<()> {
    writeln!(out, "{}", pretty_json(value))
}

pub fn created(out: &mut dyn Write, id: &str) -> io::Result<()> {
    writeln!(out, "Workflow created. ID: {}", id)
}

pub fn updated(out: &mut dyn Write, id: &str) -> io::Result<()> {
    writeln!(out, "Workflow {} updated.", id)
}

pub fn activation(out: &mut dyn Write, id: &str, activation: Activation) -> io::Result<()> {
    writeln!(out, "Workflow {} {}.", id, activation.past_tense())
}

pub fn webhook_call(out: &mut dyn Write, url: &str) -> io::Result<()> {
    writeln!(out, "Calling webhook: {}", url)
}

pub fn webhook_reply(out: &mut dyn Write, reply: &WebhookReply) -> io::Result<()> {
    writeln!(out, "Status: {}", reply.status)?;
    match &reply.body {
        WebhookBody::Json(value) => json(out, value),
        WebhookBody::Text(text) => writeln!(out, "{}", text),
    }
}

pub fn exported(out: &mut dyn Write, item: &ExportedWorkflow) -> io::Result<()> {
    writeln!(out, "Exported: {} -> {}", item.name, item.file_name)
}

pub fn export_done(out: &mut dyn Write, count: usize) -> io::Result<()> {
    writeln!(out, "Exported {} workflows.", count)
}

pub fn imported(out: &mut dyn Write, outcome: &ImportOutcome) -> io::Result<()> {
    match outcome {
        ImportOutcome::Created { name, .. } => writeln!(out, "Created: {}", name),
        ImportOutcome::Updated { name, .. } => writeln!(out, "Updated: {}", name),
    }
}

pub fn import_done(out: &mut dyn Write, summary: &ImportSummary) -> io::Result<()> {
    writeln!(
        out,
        "Done. OK: {} (created: {}, updated: {}) failed: {}",
        summary.ok(),
        summary.created,
        summary.updated,
        summary.failed
    )
}

pub fn error(out: &mut dyn Write, context: &str, err: &ManagerError) {
    let _ = writeln!(out, "Error {}: {}", context, err);
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn rendered<F>(f: F) -> String
    where
        F: FnOnce(&mut dyn Write) -> io::Result<()>,
    {
        let mut buf: Vec<u8> = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn workflow_listing() {
        let items = vec![
            WorkflowSummary {
                id: "1".to_string(),
                name: "Issue".to_string(),
                active: true,
            },
            WorkflowSummary {
                id: "2".to_string(),
                name: "Verify".to_string(),
                active: false,
            },
        ];
        let text = rendered(|out| workflows(out, &items));
        assert_eq!(
            text,
            "Found 2 workflows:\n[1] Issue (Active)\n[2] Verify (Inactive)\n"
        );
    }

    #[test]
    fn webhook_reply_prints_json_or_text() {
        let text = rendered(|out| {
            webhook_reply(
                out,
                &WebhookReply {
                    status: 200,
                    body: WebhookBody::Json(json!({"ok": true})),
                },
            )
        });
        assert_eq!(text, "Status: 200\n{\n  \"ok\": true\n}\n");

        let text = rendered(|out| {
            webhook_reply(
                out,
                &WebhookReply {
                    status: 404,
                    body: WebhookBody::Text("not registered".to_string()),
                },
            )
        });
        assert_eq!(text, "Status: 404\nnot registered\n");
    }

    #[test]
    fn activation_messages() {
        assert_eq!(
            rendered(|out| activation(out, "7", Activation::Activate)),
            "Workflow 7 activated.\n"
        );
        assert_eq!(
            rendered(|out| activation(out, "7", Activation::Deactivate)),
            "Workflow 7 deactivated.\n"
        );
    }
}
