use super::RoastModel;
use crate::domain::{Biodata, Language, Roast};
use crate::infrastructure::gemini::prompt::{build_roast_prompt, format_biodata};
use roastgram_errors::AppError;
use std::sync::Arc;

pub struct GenerateRoast {
    model: Arc<dyn RoastModel>,
}

impl GenerateRoast {
    pub fn new(model: Arc<dyn RoastModel>) -> Self {
        Self { model }
    }

    pub async fn execute(
        &self,
        username: &str,
        language: Language,
        biodata: &Biodata,
    ) -> Result<Roast, AppError> {
        let biodata_text = format_biodata(biodata);
        let prompt = build_roast_prompt(username, language, &biodata_text);

        let roasting = self.model.generate(&prompt).await.map_err(|e| {
            tracing::error!("Error generating roast for {}: {}", username, e);
            match e {
                AppError::Generation(_) => e,
                other => AppError::Generation(other.to_string()),
            }
        })?;

        Ok(Roast::new(roasting))
    }
}
