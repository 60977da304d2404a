//! Governor handler - policy fusion and enforcement

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::{ApiJson, AppResult};
use crate::logic::classify::{ClassificationResult, Impact};
use crate::logic::policy::{self, Decision};

#[derive(Debug, Deserialize)]
pub struct GovernRequest {
    /// Screener output; missing inner fields default to unknown/0.0 so a
    /// degraded upstream still gets a decision.
    #[serde(default)]
    pub intent_data: ClassificationResult,
    #[serde(default)]
    pub behavior_score: f32,
}

#[derive(Debug, Serialize)]
pub struct GovernResponse {
    pub agent: &'static str,
    pub decision: Decision,
    pub final_risk_score: f32,
    pub policy_violation: String,
    pub impact: Impact,
}

pub async fn govern(ApiJson(req): ApiJson<GovernRequest>) -> AppResult<Json<GovernResponse>> {
    let verdict = policy::fuse(&req.intent_data, req.behavior_score);

    tracing::info!(
        "Governor verdict: {} (risk {:.2}, violation: {})",
        verdict.decision,
        verdict.final_risk,
        verdict.policy_violation
    );

    Ok(Json(GovernResponse {
        agent: "Governor",
        decision: verdict.decision,
        final_risk_score: verdict.final_risk,
        policy_violation: verdict.policy_violation,
        impact: verdict.impact,
    }))
}
