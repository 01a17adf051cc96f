pub mod http;
pub mod types;

pub use http::{N8nClient, API_KEY_HEADER};
pub use types::{Activation, WebhookBody, WebhookReply, WorkflowApi, WorkflowList, WorkflowSummary};
