//! Axum route handlers for writing assistance.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::assist::{generate_project_description, generate_summary, improve_bullet_points};
use crate::state::AppState;

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SummaryRequest {
    pub profession: String,
    pub experiences: Vec<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BulletsRequest {
    pub position: String,
    pub description: String,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectRequest {
    pub name: String,
    pub role: String,
    pub technologies: String,
}

#[derive(Debug, Serialize)]
pub struct AssistResponse {
    pub text: String,
}

/// POST /api/v1/assist/summary
pub async fn handle_summary(
    State(state): State<AppState>,
    Json(request): Json<SummaryRequest>,
) -> Json<AssistResponse> {
    let text = generate_summary(
        state.generator.as_ref(),
        &request.profession,
        &request.experiences,
    )
    .await;
    Json(AssistResponse { text })
}

/// POST /api/v1/assist/bullets
pub async fn handle_bullets(
    State(state): State<AppState>,
    Json(request): Json<BulletsRequest>,
) -> Json<AssistResponse> {
    let text =
        improve_bullet_points(state.generator.as_ref(), &request.position, &request.description)
            .await;
    Json(AssistResponse { text })
}

/// POST /api/v1/assist/project
pub async fn handle_project(
    State(state): State<AppState>,
    Json(request): Json<ProjectRequest>,
) -> Json<AssistResponse> {
    let text = generate_project_description(
        state.generator.as_ref(),
        &request.name,
        &request.role,
        &request.technologies,
    )
    .await;
    Json(AssistResponse { text })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::assist::testing::ScriptedGenerator;
    use crate::assist::SUMMARY_FALLBACK;
    use crate::state::AppState;

    #[tokio::test]
    async fn test_offline_summary_returns_fallback() {
        let state = AppState::in_memory();
        let Json(body) = handle_summary(
            State(state),
            Json(SummaryRequest {
                profession: "Nurse".into(),
                experiences: vec![],
            }),
        )
        .await;
        assert_eq!(body.text, SUMMARY_FALLBACK);
    }

    #[tokio::test]
    async fn test_bullets_pass_through_generator() {
        let state = AppState {
            generator: Arc::new(ScriptedGenerator::replying("- Cut costs 20%")),
            ..AppState::in_memory()
        };
        let Json(body) = handle_bullets(
            State(state),
            Json(BulletsRequest {
                position: "Buyer".into(),
                description: "- bought things".into(),
            }),
        )
        .await;
        assert_eq!(body.text, "- Cut costs 20%");
    }

    #[tokio::test]
    async fn test_offline_project_is_empty() {
        let Json(body) =
            handle_project(State(AppState::in_memory()), Json(ProjectRequest::default())).await;
        assert_eq!(body.text, "");
    }
}
