//! Request handlers and payload types for the HTTP surface.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use crate::catalog::ServiceDefinition;
use crate::recommend::GENERAL_CATEGORY;
use crate::server::AppState;

/// Title of the sentinel recommendation returned when nothing matched
/// confidently enough.
pub const NEED_MORE_INFO_TITLE: &str = "Need More Info";

const NEED_MORE_INFO_DESCRIPTION: &str = "We couldn't match your request to a specific \
     service. Please describe the problem in more detail or contact the shop directly.";

/// Body of `POST /recommend`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub query: Option<String>,
}

/// The recommended service surfaced to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
}

/// Response of `POST /recommend`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub recommendation: Recommendation,
    pub category: String,
    pub confidence: f64,
}

impl RecommendResponse {
    /// The generic non-answer: the engine degrades to this rather than
    /// erroring out on low-confidence input.
    pub fn need_more_info() -> Self {
        RecommendResponse {
            recommendation: Recommendation {
                title: NEED_MORE_INFO_TITLE.to_string(),
                description: NEED_MORE_INFO_DESCRIPTION.to_string(),
            },
            category: GENERAL_CATEGORY.to_string(),
            confidence: 0.0,
        }
    }
}

/// One category of the service catalog, for `GET /services`.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryGroup {
    pub category: String,
    pub services: Vec<ServiceDefinition>,
}

/// `POST /recommend`
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    body: Result<Json<RecommendRequest>, JsonRejection>,
) -> Response {
    let query = match body {
        Ok(Json(RecommendRequest { query: Some(query) })) if !query.trim().is_empty() => query,
        // Missing body, malformed JSON, and empty query all read as the
        // same caller mistake. Nothing is logged for rejected requests.
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Query is required" })),
            )
                .into_response();
        }
    };

    match state.recommend(&query) {
        Ok(response) => Json(response).into_response(),
        Err(e) => {
            error!("recommendation failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal server error" })),
            )
                .into_response()
        }
    }
}

/// `GET /analytics`
pub async fn analytics(State(state): State<Arc<AppState>>) -> Response {
    match state.analytics() {
        Ok(entries) => Json(entries).into_response(),
        Err(e) => {
            error!("failed to read analytics log: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to fetch analytics" })),
            )
                .into_response()
        }
    }
}

/// `GET /services`
pub async fn services(State(state): State<Arc<AppState>>) -> Json<Vec<CategoryGroup>> {
    let groups = state
        .catalog()
        .by_category()
        .into_iter()
        .map(|(category, services)| CategoryGroup {
            category: category.to_string(),
            services: services.into_iter().cloned().collect(),
        })
        .collect();

    Json(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn state() -> (TempDir, Arc<AppState>) {
        let dir = TempDir::new().unwrap();
        let state = Arc::new(AppState::initialize(dir.path()).unwrap());
        (dir, state)
    }

    fn request(query: Option<&str>) -> Result<Json<RecommendRequest>, JsonRejection> {
        Ok(Json(RecommendRequest {
            query: query.map(|q| q.to_string()),
        }))
    }

    #[tokio::test]
    async fn test_recommend_returns_ok_for_valid_query() {
        let (_dir, state) = state();

        let response = recommend(State(state), request(Some("my brakes are squealing"))).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_recommend_rejects_missing_query() {
        let (_dir, state) = state();

        let response = recommend(State(state.clone()), request(None)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // Rejected requests must not touch the log.
        assert!(state.analytics().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_recommend_rejects_blank_query() {
        let (_dir, state) = state();

        let response = recommend(State(state.clone()), request(Some("   "))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(state.analytics().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_analytics_lists_logged_queries() {
        let (_dir, state) = state();

        state.recommend("oil change please").unwrap();
        state.recommend("brakes are squealing").unwrap();

        let response = analytics(State(state)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_services_groups_by_category() {
        let (_dir, state) = state();

        let Json(groups) = services(State(state)).await;
        assert!(!groups.is_empty());
        assert_eq!(groups[0].category, "Maintenance");
    }
}
