use serde::Deserialize;
use config::{Config, ConfigError, Environment, File};
use std::convert::TryFrom;
use std::path::PathBuf;

pub const DEFAULT_SOURCE_FILES: [&str; 4] = [
    "src/flights1.json",
    "src/flights2.json",
    "src/flights3.json",
    "src/flights4.json",
];

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub source_files: Vec<PathBuf>,
    pub persist_retries: u32,
    pub payment_keyword: String,
}

impl AppConfig {
    /// Defaults, then the optional config file, then `APP_*` environment
    /// variables. `APP_SOURCE_FILES` takes a comma-separated list.
    pub fn new(config_file: Option<&str>) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Start off with default values
            .set_default("source_files", DEFAULT_SOURCE_FILES.to_vec())?
            .set_default("persist_retries", 1_i64)?
            .set_default("payment_keyword", "pay")?
            .add_source(File::with_name(config_file.unwrap_or("config")).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("source_files"),
            )
            .build()?;

        AppConfig::try_from(settings)
    }

    pub fn with_source_files(mut self, source_files: Vec<PathBuf>) -> Self {
        if !source_files.is_empty() {
            self.source_files = source_files;
        }
        self
    }
}

impl TryFrom<Config> for AppConfig {
    type Error = ConfigError;

    fn try_from(config: Config) -> Result<Self, Self::Error> {
        let payment_keyword = config.get_string("payment_keyword")?.trim().to_string();
        if payment_keyword.is_empty() {
            return Err(ConfigError::Message("payment_keyword must not be empty".to_string()));
        }

        let persist_retries = config.get_int("persist_retries")?;
        let persist_retries = u32::try_from(persist_retries).map_err(|_| {
            ConfigError::Message(format!(
                "persist_retries must be between 0 and {}, got {}",
                u32::MAX,
                persist_retries
            ))
        })?;

        Ok(Self {
            source_files: config
                .get::<Vec<String>>("source_files")?
                .into_iter()
                .map(PathBuf::from)
                .collect(),
            persist_retries,
            payment_keyword,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source_files: DEFAULT_SOURCE_FILES.iter().map(PathBuf::from).collect(),
            persist_retries: 1,
            payment_keyword: "pay".to_string(),
        }
    }
}
