//! Screener handler - sanitize and classify free text

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::{ApiJson, AppError, AppResult};
use crate::logic::classify::ClassificationResult;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ScreenRequest {
    /// Either field carries the text; dashboards send "message", older
    /// callers send "query".
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
}

impl ScreenRequest {
    /// Pick the request text. An empty `message` defers to `query`, the
    /// same way the dashboard's falsy fallback behaves; all-empty is None.
    fn text(self) -> Option<String> {
        self.message
            .filter(|m| !m.is_empty())
            .or(self.query)
            .filter(|q| !q.is_empty())
    }
}

#[derive(Debug, Serialize)]
pub struct ScreenResponse {
    pub agent: &'static str,
    pub risk_analysis: ClassificationResult,
    pub sanitized_input: String,
}

pub async fn screen(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ScreenRequest>,
) -> AppResult<Json<ScreenResponse>> {
    let Some(raw) = req.text() else {
        return Err(AppError::ValidationError(
            "Missing 'message' or 'query' field in JSON".to_string(),
        ));
    };

    // PII is masked before the text leaves the process
    let clean = match &state.sanitizer {
        Some(sanitizer) => sanitizer.sanitize(&raw),
        None => raw,
    };

    let result = state.screener.classify(&clean).await;

    tracing::info!(
        "Screener classified intent={} impact={} confidence={:.2}",
        result.intent,
        result.impact,
        result.confidence
    );

    Ok(Json(ScreenResponse {
        agent: "Screener",
        risk_analysis: result,
        sanitized_input: clean,
    }))
}
