/// Admin console configuration
use crate::error::{AdminError, Result};
use atrium_client::ClientConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file read from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "atrium.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AdminConfig {
    #[serde(default = "default_api")]
    pub api: ApiSettings,

    #[serde(default = "default_session")]
    pub session: SessionSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionSettings {
    /// JSON file holding the persisted session
    #[serde(default = "default_session_path")]
    pub path: PathBuf,
}

impl AdminConfig {
    /// Load configuration from file and environment.
    ///
    /// `path` overrides the default `atrium.toml`; an explicit path must
    /// exist. Variables such as `ATRIUM_API__BASE_URL` override the file.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(AdminError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("ATRIUM")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        Ok(settings.build()?.try_deserialize()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api.timeout_secs == 0 {
            return Err(AdminError::Config(
                "api.timeout_secs must be positive".to_string(),
            ));
        }
        if self.api.connect_timeout_secs == 0 {
            return Err(AdminError::Config(
                "api.connect_timeout_secs must be positive".to_string(),
            ));
        }
        if self.session.path.as_os_str().is_empty() {
            return Err(AdminError::Config("session.path cannot be empty".to_string()));
        }

        self.client_config()
            .normalized()
            .map_err(|e| AdminError::Config(e.message))?;

        Ok(())
    }

    /// Settings for the API client.
    pub fn client_config(&self) -> ClientConfig {
        let mut client = ClientConfig::new(self.api.base_url.clone())
            .with_timeout(Duration::from_secs(self.api.timeout_secs));
        client.connect_timeout = Duration::from_secs(self.api.connect_timeout_secs);
        client
    }
}

// Default values
fn default_api() -> ApiSettings {
    ApiSettings {
        base_url: default_base_url(),
        timeout_secs: default_timeout_secs(),
        connect_timeout_secs: default_connect_timeout_secs(),
    }
}

fn default_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_session() -> SessionSettings {
    SessionSettings {
        path: default_session_path(),
    }
}

fn default_session_path() -> PathBuf {
    PathBuf::from("./data/session.json")
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            api: default_api(),
            session: default_session(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = AdminConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.session.path, PathBuf::from("./data/session.json"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[api]\nbase_url = \"https://admin.example.com/api/\"\ntimeout_secs = 5\n\n[session]\npath = \"/tmp/atrium-session.json\""
        )
        .unwrap();

        let config = AdminConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.api.base_url, "https://admin.example.com/api/");
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.api.connect_timeout_secs, 10);
        assert_eq!(config.session.path, PathBuf::from("/tmp/atrium-session.json"));

        let client = config.client_config().normalized().unwrap();
        assert_eq!(client.base_url, "https://admin.example.com/api");
        assert_eq!(client.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = AdminConfig::load(Some(Path::new("/nonexistent/atrium.toml"))).unwrap_err();
        assert!(matches!(err, AdminError::Config(_)));
    }

    #[test]
    fn test_validation() {
        let mut config = AdminConfig::default();
        config.api.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        let mut config = AdminConfig::default();
        config.api.timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}
