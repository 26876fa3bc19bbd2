use crate::domain::Profile;
use async_trait::async_trait;
use roastgram_errors::AppError;

/// Looks up a public profile by handle.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_profile(&self, username: &str) -> Result<Profile, AppError>;
}

/// Generative model that turns a prompt into roast text.
#[async_trait]
pub trait RoastModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AppError>;
}
