use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub spoonacular: SpoonacularConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub fallback: FallbackConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SpoonacularConfig {
    /// Empty means recipe search is not configured.
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_spoonacular_base_url")]
    pub base_url: String,
    #[serde(default = "default_results")]
    pub results: u32,
}

impl Default for SpoonacularConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_spoonacular_base_url(),
            results: default_results(),
        }
    }
}

fn default_spoonacular_base_url() -> String {
    "https://api.spoonacular.com".to_string()
}

fn default_results() -> u32 {
    5
}

#[derive(Debug, Deserialize, Clone)]
pub struct LlmConfig {
    #[serde(default = "default_llm_provider")]
    pub provider: String,
    /// Empty means the language model is unavailable and the local
    /// recommendation is used.
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_llm_base_url")]
    pub base_url: String,
    #[serde(default = "default_llm_model")]
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: default_llm_provider(),
            api_key: String::new(),
            base_url: default_llm_base_url(),
            model: default_llm_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

fn default_llm_provider() -> String {
    "zai".to_string()
}

fn default_llm_base_url() -> String {
    "https://api.zai.ai/v1".to_string()
}

fn default_llm_model() -> String {
    "zai-ai".to_string()
}

fn default_max_tokens() -> u32 {
    200
}

fn default_temperature() -> f32 {
    0.7
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct FallbackConfig {
    /// Fixed seed for tip selection in the local recommendation.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    #[serde(default = "default_storage_dir")]
    pub dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
        }
    }
}

fn default_storage_dir() -> String {
    "data".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy variables (SPOONACULAR_API_KEY, ZAI_API_KEY)
    /// 2. Environment variables (SMART_RECIPE__SPOONACULAR__API_KEY, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("spoonacular.base_url", default_spoonacular_base_url())?
            .set_default("spoonacular.results", 5)?
            .set_default("llm.provider", default_llm_provider())?
            .set_default("storage.dir", default_storage_dir())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("SMART_RECIPE")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(api_key) = env::var("SPOONACULAR_API_KEY") {
            builder = builder.set_override("spoonacular.api_key", api_key)?;
        }
        if let Ok(api_key) = env::var("ZAI_API_KEY") {
            builder = builder.set_override("llm.api_key", api_key)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.spoonacular.results == 0 {
            return Err("Spoonacular results must be at least 1".to_string());
        }
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err("LLM temperature must be between 0 and 2".to_string());
        }
        if self.storage.dir.trim().is_empty() {
            return Err("Storage directory must not be empty".to_string());
        }
        Ok(())
    }
}
