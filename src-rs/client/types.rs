use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::helpers::deserialize_id;
use crate::workflow::WorkflowDocument;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkflowSummary {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub active: bool,
}

impl WorkflowSummary {
    pub fn state_label(&self) -> &'static str {
        if self.active {
            "Active"
        } else {
            "Inactive"
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct WorkflowList {
    #[serde(default)]
    pub data: Vec<WorkflowSummary>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    Activate,
    Deactivate,
}

impl Activation {
    pub fn endpoint(self) -> &'static str {
        match self {
            Activation::Activate => "activate",
            Activation::Deactivate => "deactivate",
        }
    }

    pub fn past_tense(self) -> &'static str {
        match self {
            Activation::Activate => "activated",
            Activation::Deactivate => "deactivated",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum WebhookBody {
    Json(Value),
    Text(String),
}

impl WebhookBody {
    pub fn from_text(text: String) -> Self {
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => WebhookBody::Json(value),
            Err(_) => WebhookBody::Text(text),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WebhookReply {
    pub status: u16,
    pub body: WebhookBody,
}

/// Operations against the workflow-management API plus direct webhook calls.
pub trait WorkflowApi {
    fn list_workflows(&self) -> Result<Vec<WorkflowSummary>>;
    fn get_workflow(&self, id: &str) -> Result<Value>;
    /// Returns the id the service assigned to the new workflow.
    fn create_workflow(&self, document: &WorkflowDocument) -> Result<String>;
    fn update_workflow(&self, id: &str, body: &Value) -> Result<()>;
    fn set_activation(&self, id: &str, activation: Activation) -> Result<()>;
    fn trigger_webhook(&self, url: &str, payload: &Value) -> Result<WebhookReply>;
}
