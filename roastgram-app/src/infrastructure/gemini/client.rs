use super::types::{GenerateContentRequest, GenerateContentResponse};
use crate::application::RoastModel;
use crate::config::GeminiConfig;
use async_trait::async_trait;
use roastgram_errors::AppError;

pub struct GeminiClient {
    http_client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl RoastModel for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        let request =
            GenerateContentRequest::new(prompt.to_string(), self.config.safety_settings.clone());

        let response = self
            .http_client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::Generation(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Gemini error: {} - {}", status, body);
            return Err(AppError::Generation(format!("API error: {}", status)));
        }

        let completion: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::Generation(e.to_string()))?;

        if let Some(reason) = completion.block_reason() {
            return Err(AppError::Generation(format!("prompt blocked: {}", reason)));
        }

        completion.text().ok_or_else(|| {
            let finish = completion
                .candidates
                .first()
                .and_then(|c| c.finish_reason.clone())
                .unwrap_or_else(|| "no candidates".to_string());
            AppError::Generation(format!("No response from AI ({})", finish))
        })
    }
}
