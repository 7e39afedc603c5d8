use std::env;
use anyhow::{bail, Context, Result};

/// How a malformed JSON request body is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyPolicy {
    /// Log a warning and carry on with an empty object
    #[default]
    Lenient,
    /// Reject the request with 400 Bad Request
    Strict,
}

impl BodyPolicy {
    fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(BodyPolicy::Lenient),
            "strict" => Ok(BodyPolicy::Strict),
            other => bail!("BODY_POLICY must be 'lenient' or 'strict', got '{}'", other),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BodyPolicy::Lenient => "lenient",
            BodyPolicy::Strict => "strict",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
    pub body_policy: BodyPolicy,
    pub api_docs_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            service_port: 3000,
            service_host: "0.0.0.0".to_string(),
            body_policy: BodyPolicy::Lenient,
            api_docs_enabled: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup, so tests don't touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let service_port = lookup("SERVICE_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = lookup("SERVICE_HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string());

        let body_policy = match lookup("BODY_POLICY") {
            Some(value) => BodyPolicy::parse(&value)?,
            None => BodyPolicy::default(),
        };

        let api_docs_enabled = match lookup("API_DOCS_ENABLED") {
            Some(value) => parse_flag(&value)
                .context("API_DOCS_ENABLED must be one of: true, false, 1, 0")?,
            None => false,
        };

        Ok(Config {
            service_port,
            service_host,
            body_policy,
            api_docs_enabled,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Body policy: {}", self.body_policy.as_str());
        tracing::info!("  API docs: {}",
            if self.api_docs_enabled { "enabled at /swagger-ui" } else { "disabled" });
        tracing::info!("  Service listening on: {}", self.bind_address());
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => bail!("invalid boolean '{}'", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_config_with_all_vars() {
        let config = config_from(&[
            ("SERVICE_PORT", "8080"),
            ("SERVICE_HOST", "127.0.0.1"),
            ("BODY_POLICY", "Strict"),
            ("API_DOCS_ENABLED", "true"),
        ])
        .unwrap();

        assert_eq!(config.service_port, 8080);
        assert_eq!(config.service_host, "127.0.0.1");
        assert_eq!(config.body_policy, BodyPolicy::Strict);
        assert!(config.api_docs_enabled);
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_config_with_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.service_port, 3000);
        assert_eq!(config.service_host, "0.0.0.0");
        assert_eq!(config.body_policy, BodyPolicy::Lenient);
        assert!(!config.api_docs_enabled);
    }

    #[test]
    fn test_invalid_port() {
        let error = config_from(&[("SERVICE_PORT", "not-a-number")]).unwrap_err();
        assert!(error.to_string().contains("SERVICE_PORT"));
    }

    #[test]
    fn test_port_out_of_range() {
        assert!(config_from(&[("SERVICE_PORT", "99999")]).is_err());
    }

    #[test]
    fn test_invalid_body_policy() {
        let error = config_from(&[("BODY_POLICY", "paranoid")]).unwrap_err();
        assert!(error.to_string().contains("BODY_POLICY"));
    }

    #[test]
    fn test_api_docs_flag() {
        assert!(config_from(&[("API_DOCS_ENABLED", "1")]).unwrap().api_docs_enabled);
        assert!(!config_from(&[("API_DOCS_ENABLED", "FALSE")]).unwrap().api_docs_enabled);

        let error = config_from(&[("API_DOCS_ENABLED", "maybe")]).unwrap_err();
        assert!(error.to_string().contains("API_DOCS_ENABLED"));
    }

    #[test]
    fn test_default_matches_empty_env() {
        let from_env = config_from(&[]).unwrap();
        let default = Config::default();

        assert_eq!(from_env.bind_address(), default.bind_address());
        assert_eq!(from_env.body_policy, default.body_policy);
        assert_eq!(from_env.api_docs_enabled, default.api_docs_enabled);
    }
}
