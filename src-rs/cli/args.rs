use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "n8n-manager")]
#[command(about = "n8n Manager CLI")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Clone, Debug, PartialEq, Subcommand)]
pub enum Command {
    /// List workflows
    List,
    /// Print a workflow as JSON
    Get {
        /// Workflow ID
        id: String,
    },
    /// Create a workflow from a JSON file
    Create {
        /// JSON file path
        file: PathBuf,
    },
    /// Replace a workflow with the contents of a JSON file
    Update {
        /// Workflow ID
        id: String,
        /// JSON file path
        file: PathBuf,
    },
    /// Activate a workflow
    Activate {
        /// Workflow ID
        id: String,
    },
    /// Deactivate a workflow
    Deactivate {
        /// Workflow ID
        id: String,
    },
    /// POST a JSON payload to a webhook URL
    #[command(name = "run_webhook")]
    RunWebhook {
        /// Webhook URL
        url: String,
        /// JSON string data
        #[arg(long, default_value = "{}")]
        data: String,
    },
    /// Write every workflow to <dir> as one JSON file each
    Export {
        /// Output directory
        dir: PathBuf,
    },
    /// Create or update workflows from the JSON files in <dir>, then activate them
    Import {
        /// Directory of workflow JSON files
        dir: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn parse(args: &[&str]) -> Option<Command> {
        let mut argv = vec!["n8n-manager"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap().command
    }

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_parses_to_none() {
        assert_eq!(parse(&[]), None);
    }

    #[test]
    fn positional_arguments() {
        assert_eq!(parse(&["list"]), Some(Command::List));
        assert_eq!(
            parse(&["update", "42", "wf.json"]),
            Some(Command::Update {
                id: "42".to_string(),
                file: PathBuf::from("wf.json"),
            })
        );
        assert_eq!(
            parse(&["deactivate", "42"]),
            Some(Command::Deactivate {
                id: "42".to_string()
            })
        );
    }

    #[test]
    fn run_webhook_data_defaults_to_empty_object() {
        assert_eq!(
            parse(&["run_webhook", "http://hook"]),
            Some(Command::RunWebhook {
                url: "http://hook".to_string(),
                data: "{}".to_string(),
            })
        );
        assert_eq!(
            parse(&["run_webhook", "http://hook", "--data", r#"{"a":1}"#]),
            Some(Command::RunWebhook {
                url: "http://hook".to_string(),
                data: r#"{"a":1}"#.to_string(),
            })
        );
    }

    #[test]
    fn import_takes_a_directory() {
        assert_eq!(
            parse(&["import", "n8n/workflows"]),
            Some(Command::Import {
                dir: PathBuf::from("n8n/workflows"),
            })
        );
    }

    #[test]
    fn missing_positional_is_a_usage_error() {
        assert!(Cli::try_parse_from(["n8n-manager", "get"]).is_err());
        assert!(Cli::try_parse_from(["n8n-manager", "update", "42"]).is_err());
    }
}
