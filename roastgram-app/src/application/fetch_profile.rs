use super::ProfileSource;
use crate::domain::Profile;
use roastgram_errors::AppError;
use std::sync::Arc;

pub struct FetchProfile {
    source: Arc<dyn ProfileSource>,
}

impl FetchProfile {
    pub fn new(source: Arc<dyn ProfileSource>) -> Self {
        Self { source }
    }

    pub async fn execute(&self, username: &str) -> Result<Profile, AppError> {
        let profile = self.source.fetch_profile(username).await?;
        tracing::info!("Fetched profile for {}", profile.username);
        Ok(profile)
    }
}
