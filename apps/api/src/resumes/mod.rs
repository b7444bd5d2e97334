//! Stored-resume workflows on top of `storage`: CRUD plus the render, score
//! and keyword views of a saved resume.

pub mod handlers;

use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::render::registry::apply_template;
use crate::render::TemplateId;
use crate::storage::{require_resume, save_resume, ResumeStore};

/// Switches a stored resume to `template_id`, resetting its accent color to
/// the template's default, and saves it.
pub async fn change_template(
    store: &dyn ResumeStore,
    id: &str,
    template_id: &str,
) -> Result<ResumeData, AppError> {
    let template = TemplateId::parse(template_id)
        .ok_or_else(|| AppError::Validation(format!("Unknown template '{template_id}'")))?;
    let mut resume = require_resume(store, id).await?;
    apply_template(&mut resume, template);
    save_resume(store, resume).await
}
