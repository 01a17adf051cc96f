pub mod config;
pub mod error;
pub mod helpers;

#[path = "client/lib.rs"]
pub mod client;
#[path = "workflow/lib.rs"]
pub mod workflow;
#[path = "cli/lib.rs"]
pub mod cli;

pub use client::{N8nClient, WorkflowApi};
pub use config::ManagerConfig;
pub use error::{ManagerError, Result};
