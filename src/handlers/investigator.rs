//! Investigator handler - behavioral risk scoring

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::{ApiJson, AppResult};
use crate::logic::behavior;

#[derive(Debug, Deserialize)]
pub struct InvestigateRequest {
    /// Requests per window; unit is the caller's business
    #[serde(default)]
    pub velocity: f32,
    /// Distinct resources touched
    #[serde(default)]
    pub spread: f32,
}

#[derive(Debug, Serialize)]
pub struct BehaviorAnalysis {
    pub total_risk_score: f32,
    /// Normalized velocity. The dashboard wire format never carried
    /// normalized spread; keep the shape stable.
    pub velocity: f32,
}

#[derive(Debug, Serialize)]
pub struct InvestigateResponse {
    pub agent: &'static str,
    pub behavior_analysis: BehaviorAnalysis,
}

pub async fn investigate(
    ApiJson(req): ApiJson<InvestigateRequest>,
) -> AppResult<Json<InvestigateResponse>> {
    let score = behavior::score(req.velocity, req.spread);

    tracing::debug!(
        "Investigator scored velocity={} spread={} -> {}",
        req.velocity,
        req.spread,
        score.score
    );

    Ok(Json(InvestigateResponse {
        agent: "Investigator",
        behavior_analysis: BehaviorAnalysis {
            total_risk_score: score.score,
            velocity: score.normalized_velocity,
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_investigate_scores_and_echoes_velocity_only() {
        let res = investigate(ApiJson(InvestigateRequest {
            velocity: 50.0,
            spread: 10.0,
        }))
        .await
        .unwrap();

        assert_eq!(res.0.agent, "Investigator");
        assert_eq!(res.0.behavior_analysis.total_risk_score, 0.5);
        assert_eq!(res.0.behavior_analysis.velocity, 0.5);

        let json = serde_json::to_value(&res.0).unwrap();
        assert!(json["behavior_analysis"].get("spread").is_none());
    }
}
