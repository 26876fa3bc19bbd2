use super::types::UserInfoResponse;
use crate::application::ProfileSource;
use crate::config::ProfileApiConfig;
use crate::domain::Profile;
use async_trait::async_trait;
use roastgram_errors::AppError;
use url::Url;

pub struct InstagramClient {
    http_client: reqwest::Client,
    api_base: Url,
    media_base: String,
}

impl InstagramClient {
    pub fn new(config: &ProfileApiConfig) -> Result<Self, AppError> {
        let api_base = Url::parse(&config.base_url)
            .map_err(|e| AppError::Config(format!("PROFILE_API_BASE_URL: {}", e)))?;
        let host = api_base
            .host_str()
            .ok_or_else(|| AppError::Config("PROFILE_API_BASE_URL has no host".to_string()))?;
        let media_base = format!("https://media.{}/get", host);

        Ok(Self {
            http_client: reqwest::Client::new(),
            api_base,
            media_base,
        })
    }

    pub fn media_base(&self) -> &str {
        &self.media_base
    }

    pub fn user_info_url(&self, username: &str) -> Result<Url, AppError> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::Config("PROFILE_API_BASE_URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(["api", "ig", "userInfoByUsername", username]);
        Ok(url)
    }
}

#[async_trait]
impl ProfileSource for InstagramClient {
    async fn fetch_profile(&self, username: &str) -> Result<Profile, AppError> {
        let url = self.user_info_url(username)?;

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::ProfileFetch(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!("Profile API returned {} for {}", status, username);
            return Err(AppError::ProfileFetch(format!("API error: {}", status)));
        }

        let payload: UserInfoResponse = response
            .json()
            .await
            .map_err(|e| AppError::ProfileFetch(e.to_string()))?;

        let user = payload.into_user().ok_or(AppError::NotFound)?;
        Ok(user.into_profile(&self.media_base))
    }
}
