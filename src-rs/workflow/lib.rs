pub mod document;
pub mod export;
pub mod import;

pub use document::{load_document, read_json_file, WorkflowDocument};
pub use export::{export_one, ExportedWorkflow};
pub use import::{import_one, ImportOutcome, ImportSummary, WebhookPaths};
