use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to expand {field} in config: {reason}")]
    ExpandError { field: &'static str, reason: String },

    #[error("Environment variable {0} is not set")]
    MissingEnvVar(&'static str),

    #[error("No [notion] section configured and NOTION_API_TOKEN is not set")]
    MissingNotion,
}

pub const DEFAULT_THREAD_LIMIT: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlackConfig {
    pub bot_token: String,
    pub channel_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotionConfig {
    pub api_token: String,
    pub database_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub slack: SlackConfig,
    /// Only needed by commands that create pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notion: Option<NotionConfig>,
}

impl Config {
    pub fn notion(&self) -> Result<&NotionConfig, ConfigError> {
        self.notion.as_ref().ok_or(ConfigError::MissingNotion)
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Secrets are usually written as `$VAR` references rather than inline
        Ok(Some(config.expanded()?))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Builds a config from the process environment.
    ///
    /// `SLACK_CHANNEL_ID` falls back to `SLACK_DATABASE_ID`, the name older
    /// setups used for the channel. The Notion section is left out when
    /// neither `NOTION_*` variable is set; setting only one is an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let require = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::MissingEnvVar(key))
        };

        let present = |key: &str| lookup(key).is_some_and(|v| !v.is_empty());

        let channel_id = require("SLACK_CHANNEL_ID")
            .or_else(|_| require("SLACK_DATABASE_ID"))
            .map_err(|_| ConfigError::MissingEnvVar("SLACK_CHANNEL_ID"))?;

        Ok(Config {
            slack: SlackConfig {
                bot_token: require("SLACK_BOT_TOKEN")?,
                channel_id,
            },
            notion: if present("NOTION_API_TOKEN") || present("NOTION_DATABASE_ID") {
                Some(NotionConfig {
                    api_token: require("NOTION_API_TOKEN")?,
                    database_id: require("NOTION_DATABASE_ID")?,
                })
            } else {
                None
            },
        })
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/thread-digest");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expanded(self) -> Result<Self, ConfigError> {
        Ok(Config {
            slack: SlackConfig {
                bot_token: Self::expand_value("slack.bot_token", &self.slack.bot_token)?,
                channel_id: Self::expand_value("slack.channel_id", &self.slack.channel_id)?,
            },
            notion: self
                .notion
                .map(|notion| {
                    Ok::<_, ConfigError>(NotionConfig {
                        api_token: Self::expand_value("notion.api_token", &notion.api_token)?,
                        database_id: Self::expand_value(
                            "notion.database_id",
                            &notion.database_id,
                        )?,
                    })
                })
                .transpose()?,
        })
    }

    fn expand_value(field: &'static str, value: &str) -> Result<String, ConfigError> {
        shellexpand::full(value)
            .map(|v| v.into_owned())
            .map_err(|e| ConfigError::ExpandError {
                field,
                reason: e.to_string(),
            })
    }
}
