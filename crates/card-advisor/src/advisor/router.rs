use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use super::{CardAdvisor, RecommendationView, ShortlistView};
use crate::error::AppError;
use crate::preferences::PreferenceForm;

/// Questionnaire answers plus an optional result size.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendationRequest {
    #[serde(flatten)]
    pub preferences: PreferenceForm,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationsResponse {
    pub max_score: f64,
    pub recommendations: Vec<RecommendationView>,
}

/// Router exposing the recommendation and shortlist endpoints.
pub fn recommendation_router(advisor: Arc<CardAdvisor>) -> Router {
    Router::new()
        .route("/api/v1/recommendations", post(recommend_handler))
        .route("/api/v1/recommendations/shortlist", post(shortlist_handler))
        .with_state(advisor)
}

pub(crate) async fn recommend_handler(
    State(advisor): State<Arc<CardAdvisor>>,
    Json(request): Json<RecommendationRequest>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let recommendations =
        advisor.recommend_form(&request.preferences, request.limit.unwrap_or(0))?;
    Ok(Json(RecommendationsResponse {
        max_score: advisor.max_score(),
        recommendations,
    }))
}

pub(crate) async fn shortlist_handler(
    State(advisor): State<Arc<CardAdvisor>>,
    Json(request): Json<RecommendationRequest>,
) -> Result<Json<ShortlistView>, AppError> {
    let shortlist = advisor.shortlist_form(&request.preferences, request.limit.unwrap_or(0))?;
    Ok(Json(shortlist))
}
