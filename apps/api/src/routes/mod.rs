pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::assist::handlers as assist;
use crate::ats::handlers as ats;
use crate::errors::AppError;
use crate::render::handlers as render;
use crate::resumes::handlers as resumes;
use crate::state::AppState;

async fn not_implemented() -> Result<(), AppError> {
    Err(AppError::NotImplemented)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Stateless: templates, preview rendering, analysis
        .route("/api/v1/templates", get(render::handle_list_templates))
        .route("/api/v1/render", post(render::handle_render))
        .route("/api/v1/score", post(ats::handle_score))
        .route("/api/v1/keywords", get(ats::handle_keywords))
        // Stored resumes
        .route(
            "/api/v1/resumes",
            get(resumes::handle_list_resumes).post(resumes::handle_save_resume),
        )
        .route("/api/v1/resumes/new", get(resumes::handle_new_resume))
        .route(
            "/api/v1/resumes/:id",
            get(resumes::handle_get_resume).delete(resumes::handle_delete_resume),
        )
        .route(
            "/api/v1/resumes/:id/render",
            get(resumes::handle_render_resume),
        )
        .route("/api/v1/resumes/:id/score", get(resumes::handle_score_resume))
        .route(
            "/api/v1/resumes/:id/keywords",
            get(resumes::handle_resume_keywords),
        )
        .route(
            "/api/v1/resumes/:id/template",
            put(resumes::handle_change_template),
        )
        // Writing assistance
        .route("/api/v1/assist/summary", post(assist::handle_summary))
        .route("/api/v1/assist/bullets", post(assist::handle_bullets))
        .route("/api/v1/assist/project", post(assist::handle_project))
        // PDF export and share links
        .route("/api/v1/resumes/:id/export", post(not_implemented))
        .route("/api/v1/resumes/:id/share", post(not_implemented))
        .with_state(state)
}
