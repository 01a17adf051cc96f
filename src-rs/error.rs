use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("Environment variable {0} not set.")]
    MissingEnv(&'static str),

    #[error("Environment variable {name} is invalid: {reason}")]
    InvalidEnv { name: &'static str, reason: String },

    #[error("invalid url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("http {status}: {body}")]
    Http { status: u16, body: String },

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid workflow document: {0}")]
    InvalidDocument(String),

    #[error("response missing field `{0}`")]
    MissingField(&'static str),

    #[error("output: {0}")]
    Output(#[from] std::io::Error),
}

impl ManagerError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManagerError::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the failure happened on this machine rather than at the service.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            ManagerError::Io { .. }
                | ManagerError::InvalidDocument(_)
                | ManagerError::Output(_)
                | ManagerError::MissingEnv(_)
                | ManagerError::InvalidEnv { .. }
                | ManagerError::InvalidUrl { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ManagerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_env_message_names_variable() {
        let err = ManagerError::MissingEnv("N8N_BASE_URL");
        assert_eq!(err.to_string(), "Environment variable N8N_BASE_URL not set.");
        assert!(err.is_local());
    }

    #[test]
    fn http_error_is_remote() {
        let err = ManagerError::Http {
            status: 404,
            body: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "http 404: not found");
        assert!(!err.is_local());
    }
}
