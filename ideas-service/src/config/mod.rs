use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Clone)]
pub struct IdeasConfig {
    pub common: core_config::Config,
    pub google: GoogleConfig,
    pub models: ModelConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone)]
pub struct GoogleConfig {
    /// `None` when `GEMINI_API_KEY` is unset; requests then fail with a 500.
    pub api_key: Option<Secret<String>>,
    pub api_base: String,
}

#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Model for idea generation (e.g., gemini-2.0-flash)
    pub text_model: String,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// Browser origins allowed to call `/api/*`.
    pub allowed_origins: Vec<String>,
}

impl IdeasConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;

        Ok(IdeasConfig {
            common: common_config,
            google: GoogleConfig {
                api_key: env::var("GEMINI_API_KEY")
                    .ok()
                    .filter(|key| !key.trim().is_empty())
                    .map(Secret::new),
                api_base: get_env("GEMINI_API_BASE", DEFAULT_API_BASE),
            },
            models: ModelConfig {
                text_model: get_env("GEMINI_MODEL", DEFAULT_TEXT_MODEL),
            },
            cors: CorsConfig {
                allowed_origins: parse_origins(&get_env(
                    "CORS_ALLOWED_ORIGINS",
                    DEFAULT_ALLOWED_ORIGIN,
                )),
            },
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.google.api_key.is_some()
    }
}

impl Default for IdeasConfig {
    fn default() -> Self {
        Self {
            common: core_config::Config::default(),
            google: GoogleConfig {
                api_key: None,
                api_base: DEFAULT_API_BASE.to_string(),
            },
            models: ModelConfig {
                text_model: DEFAULT_TEXT_MODEL.to_string(),
            },
            cors: CorsConfig {
                allowed_origins: vec![DEFAULT_ALLOWED_ORIGIN.to_string()],
            },
        }
    }
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|val| !val.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
