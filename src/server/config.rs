use std::path::PathBuf;

use crate::server::{
    bootstrap::{BaselineSource, BootstrapOptions},
    error::config::ConfigError,
    model::reference::DEFAULT_STUDIO_KEY,
};

pub struct Config {
    pub database_url: String,
    /// Folder of versioned SQL baseline scripts. When unset the embedded migrator is used.
    pub migrations_dir: Option<PathBuf>,
    pub studio_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let migrations_dir = lookup("MIGRATIONS_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        let studio_key = match lookup("STUDIO_KEY") {
            None => DEFAULT_STUDIO_KEY.to_string(),
            Some(key) if key.trim().is_empty() => {
                return Err(ConfigError::InvalidEnvValue {
                    var: "STUDIO_KEY".to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
            Some(key) => key.trim().to_string(),
        };

        Ok(Self {
            database_url,
            migrations_dir,
            studio_key,
        })
    }

    pub fn bootstrap_options(&self) -> BootstrapOptions {
        let baseline = match &self.migrations_dir {
            Some(dir) => BaselineSource::Directory(dir.clone()),
            None => BaselineSource::Embedded,
        };

        BootstrapOptions {
            baseline,
            studio_key: self.studio_key.clone(),
        }
    }
}
