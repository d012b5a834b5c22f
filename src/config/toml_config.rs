use crate::core::rank::DEFAULT_TOP_K;
use crate::core::ConfigProvider;
use crate::utils::error::{Result, RosterError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_DATA_FILE: &str = "resumes.txt";
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// File-based configuration. Every section is optional and falls back to the
/// built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub storage: StorageConfig,
    pub ranking: RankingConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_file: String,
    pub base_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: DEFAULT_DATA_FILE.to_string(),
            base_dir: ".".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    pub top_k: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl RosterConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RosterError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RosterError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ROSTER_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RosterError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn log_level(&self) -> &str {
        self.logging.level.as_deref().unwrap_or("info")
    }

    pub fn log_json(&self) -> bool {
        self.logging.json.unwrap_or(false)
    }
}

impl ConfigProvider for RosterConfig {
    fn data_file(&self) -> &str {
        &self.storage.data_file
    }

    fn base_dir(&self) -> &str {
        &self.storage.base_dir
    }

    fn top_k(&self) -> usize {
        self.ranking.top_k
    }
}

impl Validate for RosterConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_file_name("storage.data_file", &self.storage.data_file)?;
        validation::validate_path("storage.base_dir", &self.storage.base_dir)?;
        validation::validate_positive_number("ranking.top_k", self.ranking.top_k, 1)?;
        if let Some(level) = &self.logging.level {
            validation::validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }
        Ok(())
    }
}
