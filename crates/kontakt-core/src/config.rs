use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::DEFAULT_MAX_LINE_OCTETS;
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub reader: ReaderConfig,
    #[serde(default)]
    pub writer: WriterConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Leniency knobs for the document reader.
#[derive(Debug, Clone, Deserialize)]
pub struct ReaderConfig {
    /// Skip lines whose property name mentions one of `binary_markers`,
    /// along with the space-led continuation lines after them.
    pub skip_binary_payloads: bool,
    pub binary_markers: Vec<String>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            skip_binary_payloads: true,
            binary_markers: vec!["X-CUSTOM".into(), "PHOTO".into(), "SOUND".into()],
        }
    }
}

impl ReaderConfig {
    /// ## Summary
    /// Returns whether a property name falls under the binary payload policy.
    ///
    /// Markers match case-insensitively. Empty markers never match.
    #[must_use]
    pub fn is_binary_payload(&self, property_name: &str) -> bool {
        if !self.skip_binary_payloads {
            return false;
        }

        let name = property_name.to_ascii_uppercase();
        self.binary_markers
            .iter()
            .filter(|marker| !marker.is_empty())
            .any(|marker| name.contains(&marker.to_ascii_uppercase()))
    }

    /// ## Summary
    /// Rejects marker lists that would match every property name.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` if a marker is empty.
    pub fn validate(&self) -> CoreResult<()> {
        if self.binary_markers.iter().any(String::is_empty) {
            return Err(CoreError::InvalidConfiguration(
                "reader.binary_markers must not contain empty markers".to_string(),
            ));
        }
        Ok(())
    }
}

/// Output options for the text serializer.
#[derive(Debug, Clone, Deserialize)]
pub struct WriterConfig {
    /// Fold lines longer than `max_line_octets`. Off by default.
    pub fold_lines: bool,
    pub max_line_octets: usize,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            fold_lines: false,
            max_line_octets: DEFAULT_MAX_LINE_OCTETS,
        }
    }
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

impl LoggingConfig {
    /// ## Summary
    /// Parses the configured level name.
    ///
    /// ## Errors
    /// Returns an error if the level is not a known `tracing` level.
    pub fn level(&self) -> CoreResult<tracing::Level> {
        self.level
            .parse()
            .map_err(|err| CoreError::ConfigError(format!("logging.level `{}`: {err}", self.level)))
    }
}

impl Settings {
    /// ## Summary
    /// Loads settings from defaults, `KONTAKT_*` environment variables and an
    /// optional `kontakt.toml`, then validates them.
    ///
    /// ## Errors
    /// Returns an error if building, deserializing or validating the
    /// configuration fails.
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("reader.skip_binary_payloads", true)?
            .set_default("reader.binary_markers", vec!["X-CUSTOM", "PHOTO", "SOUND"])?
            .set_default("writer.fold_lines", false)?
            .set_default("writer.max_line_octets", DEFAULT_MAX_LINE_OCTETS as u64)?
            .set_default("logging.level", "info")?
            .add_source(
                config::Environment::with_prefix("KONTAKT")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("reader.binary_markers")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .add_source(config::File::with_name("kontakt.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Checks cross-field constraints that serde cannot express.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` when the writer cannot fold at
    /// the configured width or a binary marker is empty, and
    /// `CoreError::ConfigError` for an unknown log level.
    pub fn validate(&self) -> CoreResult<()> {
        if self.writer.max_line_octets < 2 {
            return Err(CoreError::InvalidConfiguration(format!(
                "writer.max_line_octets must be at least 2, got {}",
                self.writer.max_line_octets
            )));
        }

        self.reader.validate()?;
        self.logging.level()?;
        Ok(())
    }
}

/// ## Summary
/// Loads settings from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
