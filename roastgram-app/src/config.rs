use crate::infrastructure::gemini::{HarmBlockThreshold, HarmCategory, SafetySetting};
use roastgram_errors::AppError;
use std::time::Duration;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_PROFILE_API_BASE_URL: &str = "https://gramsnap.com";
const DEFAULT_RATE_LIMIT_MAX: u32 = 100;
const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 180;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub profile_api: ProfileApiConfig,
    pub gemini: GeminiConfig,
    pub rate_limit: RateLimitConfig,
}

#[derive(Debug, Clone)]
pub struct ProfileApiConfig {
    pub base_url: String,
}

#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub safety_settings: Vec<SafetySetting>,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"***")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("safety_settings", &self.safety_settings)
            .finish()
    }
}

impl GeminiConfig {
    /// Roasts are insulting on purpose, so harassment and hate-speech
    /// filtering is switched off for every request.
    pub fn roast_safety_settings() -> Vec<SafetySetting> {
        vec![
            SafetySetting::new(HarmCategory::Harassment, HarmBlockThreshold::BlockNone),
            SafetySetting::new(HarmCategory::HateSpeech, HarmBlockThreshold::BlockNone),
        ]
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RateLimitConfig {
    pub max_requests: u32,
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: DEFAULT_RATE_LIMIT_MAX,
            window: Duration::from_secs(DEFAULT_RATE_LIMIT_WINDOW_SECS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = var("GEMINI_API_KEY")
            .ok_or_else(|| AppError::Config("GEMINI_API_KEY must be set".to_string()))?;

        Ok(Self {
            bind_addr: var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            profile_api: ProfileApiConfig {
                base_url: var("PROFILE_API_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_PROFILE_API_BASE_URL.to_string()),
            },
            gemini: GeminiConfig {
                api_key,
                model: var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
                base_url: var("GEMINI_API_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
                safety_settings: GeminiConfig::roast_safety_settings(),
            },
            rate_limit: RateLimitConfig {
                max_requests: parse_or(
                    "RATE_LIMIT_MAX",
                    var("RATE_LIMIT_MAX"),
                    DEFAULT_RATE_LIMIT_MAX,
                ),
                window: Duration::from_secs(parse_or(
                    "RATE_LIMIT_WINDOW_SECS",
                    var("RATE_LIMIT_WINDOW_SECS"),
                    DEFAULT_RATE_LIMIT_WINDOW_SECS,
                )),
            },
        })
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    match raw {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid {} value '{}', using {}", key, raw, default);
            default
        }),
    }
}
