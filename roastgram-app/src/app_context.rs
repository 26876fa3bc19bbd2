use crate::application::{FetchProfile, GenerateRoast, ProfileSource, RoastModel};
use crate::config::AppConfig;
use crate::infrastructure::gemini::GeminiClient;
use crate::infrastructure::instagram::InstagramClient;
use crate::infrastructure::security::RateLimiter;
use roastgram_errors::AppError;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub fetch_profile: Arc<FetchProfile>,
    pub generate_roast: Arc<GenerateRoast>,
    pub rate_limiter: RateLimiter,
}

impl AppContext {
    pub fn new(
        profiles: Arc<dyn ProfileSource>,
        model: Arc<dyn RoastModel>,
        rate_limiter: RateLimiter,
    ) -> Self {
        Self {
            fetch_profile: Arc::new(FetchProfile::new(profiles)),
            generate_roast: Arc::new(GenerateRoast::new(model)),
            rate_limiter,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let profiles = InstagramClient::new(&config.profile_api)?;
        tracing::info!("Using profile API at {}", config.profile_api.base_url);
        tracing::info!("Using Gemini model {}", config.gemini.model);

        Ok(Self::new(
            Arc::new(profiles),
            Arc::new(GeminiClient::new(config.gemini.clone())),
            RateLimiter::from_config(&config.rate_limit),
        ))
    }
}
