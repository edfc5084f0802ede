use crate::config::AppConfig;
use crate::error::AskError;
use crate::openai_service::OpenAiService;

pub struct QuestionService {
    openai_service: Option<OpenAiService>,
    primary_model: String,
    fallback_model: String,
}

impl QuestionService {
    pub fn new(
        openai_service: Option<OpenAiService>,
        primary_model: &str,
        fallback_model: &str,
    ) -> Self {
        Self {
            openai_service,
            primary_model: primary_model.to_string(),
            fallback_model: fallback_model.to_string(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let openai_service = config
            .api_key
            .as_ref()
            .map(|key| OpenAiService::new(key.clone(), config.base_url.clone()));

        if openai_service.is_none() {
            log::warn!("OpenAI API key not properly configured!");
        }

        Self::new(openai_service, &config.primary_model, &config.fallback_model)
    }

    pub fn is_configured(&self) -> bool {
        self.openai_service.is_some()
    }

    /// Ask the primary model, falling back to the secondary model exactly once.
    pub async fn ask(&self, question: &str) -> Result<String, AskError> {
        let openai_service = self.openai_service.as_ref().ok_or(AskError::NotConfigured)?;

        let primary_error = match openai_service.complete(&self.primary_model, question).await {
            Ok(answer) => return Ok(answer),
            Err(e) => e,
        };
        log::error!("OpenAI API error ({}): {}", self.primary_model, primary_error);

        match openai_service.complete(&self.fallback_model, question).await {
            Ok(answer) => {
                log::info!("Answered with fallback model {}", self.fallback_model);
                Ok(answer)
            }
            Err(fallback_error) => {
                log::error!(
                    "Fallback OpenAI API error ({}): {}",
                    self.fallback_model,
                    fallback_error
                );
                Err(AskError::Upstream(primary_error.to_string()))
            }
        }
    }
}
