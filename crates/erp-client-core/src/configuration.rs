//! Loads the client settings from `configuration/` and the environment

use serde_aux::field_attributes::deserialize_number_from_string;
use std::path::{Path, PathBuf};

use crate::{Client, FileStore, SessionStore};

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ClientSettings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ServerSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub use_tls: bool,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct StorageSettings {
    /// Where the session file is kept
    pub directory: PathBuf,
    pub session_key: String,
}

impl ServerSettings {
    pub fn base_url(&self) -> String {
        let scheme = if self.use_tls { "https" } else { "http" };
        format!("{scheme}://{}:{}", self.host, self.port)
    }
}

impl StorageSettings {
    pub fn session_store(&self) -> SessionStore {
        SessionStore::with_key(FileStore::new(&self.directory), self.session_key.as_str())
    }
}

impl ClientSettings {
    pub fn build_client(&self) -> Client {
        Client::new(self.server.base_url(), self.storage.session_store())
    }
}

/// Reads `configuration/` in the current directory using `APP_ENVIRONMENT`
/// (defaults to `local`) to pick the environment file
pub fn get_configuration() -> Result<ClientSettings, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    get_configuration_from(&base_path.join("configuration"), environment)
}

pub fn get_configuration_from(
    configuration_directory: &Path,
    environment: Environment,
) -> Result<ClientSettings, config::ConfigError> {
    let environment_filename = format!("{}.toml", environment.as_str());
    let settings = config::Config::builder()
        .add_source(config::File::from(
            configuration_directory.join("base.toml"),
        ))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        // Add in settings from environment variables (with a prefix of APP and '__' as separator)
        // E.g. `APP_SERVER__PORT=5001 would set `ClientSettings.server.port`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<ClientSettings>()
}

/// The possible runtime environment for our application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{other} is not a supported environment. Use either `local` or `production`."
            )),
        }
    }
}
