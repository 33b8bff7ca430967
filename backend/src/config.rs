use std::path::PathBuf;

use thiserror::Error;

/// Trunk writes the built site here when run from the workspace root.
pub const DEFAULT_STATIC_DIR: &str = "frontend/dist";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be a port number, got '{0}'")]
    InvalidPort(String),
    #[error("STATIC_DIR must not be empty")]
    EmptyStaticDir,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub port: u16,
    pub static_dir: PathBuf,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let default_port = match lookup("ENVIRONMENT").as_deref() {
            Some("staging") => 3100,
            _ => 3000,
        };
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => default_port,
        };
        let static_dir = lookup("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string());
        if static_dir.trim().is_empty() {
            return Err(ConfigError::EmptyStaticDir);
        }
        Ok(Self {
            port,
            static_dir: PathBuf::from(static_dir),
        })
    }

    pub fn index_file(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<SiteConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SiteConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.static_dir, PathBuf::from("frontend/dist"));
        assert_eq!(config.index_file(), PathBuf::from("frontend/dist/index.html"));
    }

    #[test]
    fn staging_uses_its_own_port() {
        assert_eq!(config_from(&[("ENVIRONMENT", "staging")]).unwrap().port, 3100);
        assert_eq!(config_from(&[("ENVIRONMENT", "development")]).unwrap().port, 3000);
    }

    #[test]
    fn explicit_port_wins() {
        let config = config_from(&[("ENVIRONMENT", "staging"), ("PORT", " 8080 ")]).unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            config_from(&[("PORT", "eighty")]),
            Err(ConfigError::InvalidPort("eighty".to_string()))
        );
        assert_eq!(config_from(&[("PORT", "70000")]), Err(ConfigError::InvalidPort("70000".to_string())));
        assert_eq!(config_from(&[("STATIC_DIR", "  ")]), Err(ConfigError::EmptyStaticDir));
    }
}
