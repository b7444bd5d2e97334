//! Axum route handlers for the template catalogue and ad-hoc rendering.

use axum::Json;
use serde::Serialize;

use crate::models::resume::ResumeData;
use crate::render::registry::{list_templates, AccentSwatch, TemplateInfo, ACCENT_COLORS};
use crate::render::{render, Document};

#[derive(Debug, Serialize)]
pub struct TemplateCatalogue {
    pub templates: &'static [TemplateInfo],
    pub accent_colors: &'static [AccentSwatch],
}

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<TemplateCatalogue> {
    Json(TemplateCatalogue {
        templates: list_templates(),
        accent_colors: &ACCENT_COLORS,
    })
}

/// POST /api/v1/render
/// Renders an unsaved resume snapshot, e.g. the editor's live preview.
pub async fn handle_render(Json(resume): Json<ResumeData>) -> Json<Document> {
    Json(render(&resume))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::TemplateId;

    #[tokio::test]
    async fn test_catalogue_lists_templates_and_palette() {
        let Json(body) = handle_list_templates().await;
        assert_eq!(body.templates.len(), 6);
        assert_eq!(body.accent_colors.len(), 10);
    }

    #[tokio::test]
    async fn test_render_snapshot_with_unknown_template() {
        let resume = ResumeData {
            template: "retro_wave".into(),
            ..ResumeData::new_draft()
        };
        let Json(doc) = handle_render(Json(resume)).await;
        assert_eq!(doc.template, TemplateId::MinimalClean);
    }
}
