//! Axum route handlers for stored resumes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::ats::keywords::{keyword_report, KeywordReport};
use crate::ats::{report, AtsReport};
use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::render::{render, Document};
use crate::resumes::change_template;
use crate::state::AppState;
use crate::storage::{delete_resume, require_resume, save_resume};

#[derive(Debug, Deserialize)]
pub struct TemplateChangeRequest {
    pub template: String,
}

/// GET /api/v1/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResumeData>>, AppError> {
    Ok(Json(state.store.load_all().await?))
}

/// GET /api/v1/resumes/new
/// A blank draft with id `"new"`; nothing is stored until it is saved.
pub async fn handle_new_resume() -> Json<ResumeData> {
    Json(ResumeData::new_draft())
}

/// POST /api/v1/resumes
pub async fn handle_save_resume(
    State(state): State<AppState>,
    Json(resume): Json<ResumeData>,
) -> Result<Json<ResumeData>, AppError> {
    let saved = save_resume(state.store.as_ref(), resume).await?;
    Ok(Json(saved))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ResumeData>, AppError> {
    Ok(Json(require_resume(state.store.as_ref(), &id).await?))
}

/// DELETE /api/v1/resumes/:id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if delete_resume(state.store.as_ref(), &id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Resume {id} not found")))
    }
}

/// GET /api/v1/resumes/:id/render
pub async fn handle_render_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Document>, AppError> {
    let resume = require_resume(state.store.as_ref(), &id).await?;
    Ok(Json(render(&resume)))
}

/// GET /api/v1/resumes/:id/score
pub async fn handle_score_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AtsReport>, AppError> {
    let resume = require_resume(state.store.as_ref(), &id).await?;
    Ok(Json(report(&resume)))
}

/// GET /api/v1/resumes/:id/keywords
/// Uses the resume's own `industry`.
pub async fn handle_resume_keywords(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<KeywordReport>, AppError> {
    let resume = require_resume(state.store.as_ref(), &id).await?;
    let industry = resume
        .industry
        .as_deref()
        .filter(|i| !i.trim().is_empty())
        .ok_or_else(|| AppError::Validation(format!("Resume {id} has no industry set")))?;
    let report = keyword_report(&resume, industry)
        .ok_or_else(|| AppError::NotFound(format!("No keyword list for industry '{industry}'")))?;
    Ok(Json(report))
}

/// PUT /api/v1/resumes/:id/template
pub async fn handle_change_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<TemplateChangeRequest>,
) -> Result<Json<ResumeData>, AppError> {
    let updated = change_template(state.store.as_ref(), &id, &request.template).await?;
    Ok(Json(updated))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::TemplateId;

    async fn saved(state: &AppState, resume: ResumeData) -> ResumeData {
        let Json(saved) = handle_save_resume(State(state.clone()), Json(resume))
            .await
            .unwrap();
        saved
    }

    #[tokio::test]
    async fn test_save_then_list_and_get() {
        let state = AppState::in_memory();
        let Json(draft) = handle_new_resume().await;
        assert!(draft.is_unsaved());

        let resume = saved(&state, draft).await;
        assert!(!resume.is_unsaved());

        let Json(all) = handle_list_resumes(State(state.clone())).await.unwrap();
        assert_eq!(all, vec![resume.clone()]);

        let Json(fetched) = handle_get_resume(State(state), Path(resume.id.clone()))
            .await
            .unwrap();
        assert_eq!(fetched, resume);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let state = AppState::in_memory();
        let err = handle_get_resume(State(state.clone()), Path("nope".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = handle_delete_resume(State(state), Path("nope".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_returns_no_content() {
        let state = AppState::in_memory();
        let resume = saved(&state, ResumeData::new_draft()).await;
        let status = handle_delete_resume(State(state.clone()), Path(resume.id))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);
        let Json(all) = handle_list_resumes(State(state)).await.unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn test_render_and_score_stored_resume() {
        let state = AppState::in_memory();
        let mut draft = ResumeData::new_draft();
        draft.template = "creative_bold".into();
        draft.personal_info.full_name = "Grace Hopper".into();
        let resume = saved(&state, draft).await;

        let Json(doc) = handle_render_resume(State(state.clone()), Path(resume.id.clone()))
            .await
            .unwrap();
        assert_eq!(doc.template, TemplateId::CreativeBold);
        assert_eq!(doc.header.name, "Grace Hopper");

        let Json(report) = handle_score_resume(State(state), Path(resume.id))
            .await
            .unwrap();
        assert_eq!(report.score, 10);
    }

    #[tokio::test]
    async fn test_keywords_need_an_industry() {
        let state = AppState::in_memory();
        let resume = saved(&state, ResumeData::new_draft()).await;
        let err = handle_resume_keywords(State(state.clone()), Path(resume.id.clone()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let mut with_industry = resume;
        with_industry.industry = Some("marketing".into());
        with_industry.skills = vec!["SEO".into()];
        let resume = saved(&state, with_industry).await;
        let Json(report) = handle_resume_keywords(State(state), Path(resume.id))
            .await
            .unwrap();
        assert_eq!(report.industry, "Marketing");
        assert!(report.keywords[0].present);
    }

    #[tokio::test]
    async fn test_change_template_validates_id() {
        let state = AppState::in_memory();
        let resume = saved(&state, ResumeData::new_draft()).await;

        let err = handle_change_template(
            State(state.clone()),
            Path(resume.id.clone()),
            Json(TemplateChangeRequest {
                template: "retro".into(),
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let Json(updated) = handle_change_template(
            State(state),
            Path(resume.id),
            Json(TemplateChangeRequest {
                template: "modern_sidebar".into(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(updated.template, "modern_sidebar");
    }
}
