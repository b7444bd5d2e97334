// Template rendering engine.
// Pure and synchronous: ResumeData in, Document out. No I/O, no shared state,
// so it is safe to call on every edit and from any task.

pub mod composers;
pub mod dates;
pub mod document;
pub mod handlers;
pub mod registry;
pub mod sections;

use tracing::debug;

use crate::models::resume::ResumeData;

pub use document::{Document, SectionKind};
pub use registry::TemplateId;

/// Renders `resume` with the composer its `template` field names.
///
/// Unknown or empty template ids render with [`TemplateId::FALLBACK`]. Never
/// fails for any `ResumeData` value.
pub fn render(resume: &ResumeData) -> Document {
    let template = resolve_template(&resume.template);
    let composer = composers::composer_for(template);
    debug!(
        "Rendering resume {} with template {}",
        resume.id,
        template.as_str()
    );
    let sections = sections::render_sections(resume);
    composer.compose(resume, &sections)
}

/// Maps a stored template id to a known template, falling back when needed.
pub fn resolve_template(id: &str) -> TemplateId {
    TemplateId::parse(id).unwrap_or_else(|| {
        debug!(
            "Unknown template '{}', falling back to {}",
            id,
            TemplateId::FALLBACK.as_str()
        );
        TemplateId::FALLBACK
    })
}
