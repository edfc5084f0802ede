use assistant_core::{AskError, ErrorResponse, QuestionRequest, QuestionResponse};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::page::IndexTemplate;
use crate::AppState;

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, detail: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            detail: detail.into(),
        }),
    )
}

pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    IndexTemplate {
        app_name: state.config.app_name.clone(),
        openai_configured: state.question_service.is_configured(),
    }
}

pub async fn ask_question(
    State(state): State<AppState>,
    payload: Result<Json<QuestionRequest>, JsonRejection>,
) -> Result<Json<QuestionResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        log::debug!("Rejected /ask body: {}", rejection.body_text());
        api_error(rejection.status(), rejection.body_text())
    })?;

    let answer = state
        .question_service
        .ask(&request.question)
        .await
        .map_err(|e| api_error(status_for(&e), e.to_string()))?;

    Ok(Json(QuestionResponse { answer }))
}

fn status_for(err: &AskError) -> StatusCode {
    match err {
        AskError::NotConfigured | AskError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub async fn not_found() -> impl IntoResponse {
    api_error(StatusCode::NOT_FOUND, "Not Found")
}
