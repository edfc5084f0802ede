use thiserror::Error;

#[derive(Debug, Error)]
pub enum AskError {
    #[error("OpenAI API key not configured. Please set OPENAI_API_KEY in your .env file.")]
    NotConfigured,

    /// Both models failed; carries the primary model's failure.
    #[error("OpenAI API error: {0}")]
    Upstream(String),
}
