//! Request handlers and wire types.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::analyzer::SentimentScores;

use super::AppState;

/// Body for `POST /analyze`. The `text` field is required and must be
/// a string; anything else is rejected before it reaches the scorer.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ApiMessage {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

/// `GET /` health message.
pub async fn home() -> Json<ApiMessage> {
    Json(ApiMessage {
        message: "Sentiment Analysis API is running!".to_string(),
    })
}

/// `POST /analyze`: score the supplied text.
///
/// A missing body, a non-JSON body, or a body without a string `text`
/// field all map to the same 400 response.
pub async fn analyze(
    State(analyzer): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Response {
    match payload {
        Ok(Json(request)) => {
            let scores: SentimentScores = analyzer.polarity_scores(&request.text);
            tracing::debug!(
                chars = request.text.len(),
                compound = scores.compound,
                "scored text"
            );
            Json(scores).into_response()
        }
        Err(rejection) => {
            tracing::debug!(%rejection, "rejected analyze request");
            (
                StatusCode::BAD_REQUEST,
                Json(ApiError {
                    error: "No text provided".to_string(),
                }),
            )
                .into_response()
        }
    }
}
