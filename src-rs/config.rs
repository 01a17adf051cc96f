use std::env;
use std::time::Duration;

use crate::error::{ManagerError, Result};

pub const BASE_URL_VAR: &str = "N8N_BASE_URL";
pub const API_KEY_VAR: &str = "N8N_API_KEY";
pub const TIMEOUT_VAR: &str = "N8N_TIMEOUT_SECS";

#[derive(Clone, Debug, PartialEq)]
pub struct ManagerConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Option<Duration>,
}

impl ManagerConfig {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            timeout: None,
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = required(&lookup, BASE_URL_VAR)?;
        let api_key = required(&lookup, API_KEY_VAR)?;
        let mut cfg = Self::new(&base_url, &api_key);
        cfg.timeout = lookup(TIMEOUT_VAR)
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);
        Ok(cfg)
    }
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(ManagerError::MissingEnv(key)),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_base_url_fails() {
        let err = ManagerConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "secret")])).unwrap_err();
        assert!(matches!(err, ManagerError::MissingEnv(BASE_URL_VAR)));
    }

    #[test]
    fn missing_api_key_fails() {
        let err = ManagerConfig::from_lookup(lookup_from(&[(BASE_URL_VAR, "http://n8n")]))
            .unwrap_err();
        assert!(matches!(err, ManagerError::MissingEnv(API_KEY_VAR)));
    }

    #[test]
    fn blank_value_counts_as_missing() {
        let err = ManagerConfig::from_lookup(lookup_from(&[
            (BASE_URL_VAR, "   "),
            (API_KEY_VAR, "secret"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ManagerError::MissingEnv(BASE_URL_VAR)));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let cfg = ManagerConfig::from_lookup(lookup_from(&[
            (BASE_URL_VAR, "https://n8n.example.com/"),
            (API_KEY_VAR, "secret"),
        ]))
        .unwrap();
        assert_eq!(cfg.base_url, "https://n8n.example.com");
        assert_eq!(cfg.api_key, "secret");
        assert_eq!(cfg.timeout, None);
    }

    #[test]
    fn timeout_only_when_positive() {
        let cfg = ManagerConfig::from_lookup(lookup_from(&[
            (BASE_URL_VAR, "http://n8n"),
            (API_KEY_VAR, "secret"),
            (TIMEOUT_VAR, "15"),
        ]))
        .unwrap();
        assert_eq!(cfg.timeout, Some(Duration::from_secs(15)));

        let cfg = ManagerConfig::from_lookup(lookup_from(&[
            (BASE_URL_VAR, "http://n8n"),
            (API_KEY_VAR, "secret"),
            (TIMEOUT_VAR, "0"),
        ]))
        .unwrap();
        assert_eq!(cfg.timeout, None);

        let cfg = ManagerConfig::from_lookup(lookup_from(&[
            (BASE_URL_VAR, "http://n8n"),
            (API_KEY_VAR, "secret"),
            (TIMEOUT_VAR, "soon"),
        ]))
        .unwrap();
        assert_eq!(cfg.timeout, None);
    }
}
