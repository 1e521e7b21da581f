use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.yml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot locate executable directory: {0}")]
    Locate(#[source] std::io::Error),

    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid configuration format")]
    InvalidFormat,

    #[error("missing workspace_id")]
    MissingWorkspaceId,
}

#[derive(Clone, Deserialize)]
pub struct Config {
    // Server configuration
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    // Upstream application
    #[serde(default)]
    pub dashscope_key: String,
    #[serde(default)]
    pub app_id: String,
    pub workspace_id: String,
    #[serde(default = "default_upstream_base_url")]
    pub upstream_base_url: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_upstream_base_url() -> String {
    "https://dashscope.aliyuncs.com".to_string()
}

impl Config {
    /// Loads `config.yml` from the directory holding the running executable.
    pub fn load() -> Result<Self, ConfigError> {
        let exe = std::env::current_exe().map_err(ConfigError::Locate)?;
        let dir = exe.parent().unwrap_or_else(|| Path::new("."));
        Self::from_file(dir.join(CONFIG_FILE_NAME))
    }

    /// Reads and validates a configuration file. A relative `static_dir` is
    /// resolved against the file's own directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::from_yaml_str(&contents)?;
        if config.static_dir.is_relative() {
            if let Some(base) = path.parent() {
                config.static_dir = base.join(&config.static_dir);
            }
        }
        Ok(config)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        if contents.trim().is_empty() {
            return Err(ConfigError::InvalidFormat);
        }
        let value: serde_yaml::Value = serde_yaml::from_str(contents)?;
        let mapping = value.as_mapping().ok_or(ConfigError::InvalidFormat)?;

        let has_workspace = match mapping.get("workspace_id") {
            None | Some(serde_yaml::Value::Null) => false,
            Some(serde_yaml::Value::String(id)) => !id.is_empty(),
            Some(_) => true,
        };
        if !has_workspace {
            return Err(ConfigError::MissingWorkspaceId);
        }

        Ok(serde_yaml::from_value(value)?)
    }

    /// Full URL of the application's completion endpoint.
    pub fn completion_url(&self) -> String {
        format!(
            "{}/api/v1/apps/{}/completion",
            self.upstream_base_url.trim_end_matches('/'),
            self.app_id
        )
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("static_dir", &self.static_dir)
            .field("dashscope_key", &"<redacted>")
            .field("app_id", &self.app_id)
            .field("workspace_id", &self.workspace_id)
            .field("upstream_base_url", &self.upstream_base_url)
            .finish()
    }
}
