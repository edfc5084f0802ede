pub mod config;
pub mod error;
pub mod models;
pub mod openai_service;
pub mod question_service;

pub use config::AppConfig;
pub use error::AskError;
pub use models::*;
pub use openai_service::OpenAiService;
pub use question_service::QuestionService;
