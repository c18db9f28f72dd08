use anyhow::Result;
use config::Config;
use serde::Deserialize;

/// Prefix for environment overrides, e.g. `CALFOLD__PARSER__MAX_DEPTH=16`.
pub const ENV_PREFIX: &str = "CALFOLD";

/// Optional TOML file consulted by [`Settings::load`].
pub const CONFIG_FILE: &str = "calfold.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub serializer: SerializerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    /// Maximum number of simultaneously open components, root included.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { max_depth: 64 }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineEnding {
    #[default]
    Crlf,
    Lf,
}

impl LineEnding {
    /// ## Summary
    /// Returns the terminator appended after every physical line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Crlf => "\r\n",
            Self::Lf => "\n",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SerializerConfig {
    #[serde(default)]
    pub line_ending: LineEnding,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `calfold.toml` and environment variables into a `Settings`.
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Self::load_from(environment())
    }

    fn load_from(env: config::Environment) -> Result<Self> {
        Ok(Config::builder()
            .set_default("parser.max_depth", 64)?
            .set_default("serializer.line_ending", "crlf")?
            .set_default("logging.level", "info")?
            // TOML file
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            .add_source(env)
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .ignore_empty(true)
        .try_parsing(true)
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
