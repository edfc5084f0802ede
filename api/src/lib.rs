mod handlers;
mod page;

use assistant_core::{AppConfig, QuestionService};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub use handlers::{ask_question, home, not_found};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub question_service: Arc<QuestionService>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let question_service = QuestionService::from_config(&config);

        Self {
            config: Arc::new(config),
            question_service: Arc::new(question_service),
        }
    }
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/ask", post(ask_question))
        .fallback(not_found)
        .with_state(state)
}
