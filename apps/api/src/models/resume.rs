use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sentinel id carried by a resume that has never been saved.
pub const NEW_RESUME_ID: &str = "new";

pub const DEFAULT_TITLE: &str = "My Resume";
pub const DEFAULT_TEMPLATE: &str = "executive";
pub const DEFAULT_ACCENT_COLOR: &str = "#10B981";

/// Root aggregate for one resume.
///
/// Owned by the editing session and the store. The rendering core only ever
/// borrows it; nothing under `render` or `ats` mutates a `ResumeData`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    pub id: String,
    pub title: String,
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    /// Display order; never sorted or deduplicated.
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub languages: Vec<Language>,
    pub interests: String,
    pub references: Vec<Reference>,
    /// When set, the references section shows a placeholder and the
    /// `references` list is never consulted.
    pub references_on_request: bool,
    pub section_visibility: SectionVisibility,
    pub template: String,
    /// Opaque color value (normally `#rrggbb`). Not validated.
    pub accent_color: String,
    /// RFC 3339 timestamp stamped by the store on save.
    pub updated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub profession: String,
    pub linkedin: String,
    pub website: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    /// Overrides `end_date` everywhere it would be displayed.
    pub current: bool,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub gpa: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub ongoing: bool,
    pub url: String,
    /// Comma-joined, as typed by the user.
    pub technologies: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub credential_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Language {
    pub id: String,
    pub name: String,
    pub proficiency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Reference {
    pub id: String,
    pub name: String,
    pub title: String,
    pub company: String,
    pub relationship: String,
    pub email: String,
    pub phone: String,
}

/// Per-section visibility hints kept for round-tripping stored resumes.
/// Rendering gates on content, not on these flags (see DESIGN.md).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionVisibility {
    pub certifications: bool,
    pub languages: bool,
    pub interests: bool,
    pub references: bool,
}

impl ResumeData {
    /// A blank, unsaved resume as the editor creates it.
    pub fn new_draft() -> Self {
        Self {
            id: NEW_RESUME_ID.to_string(),
            title: DEFAULT_TITLE.to_string(),
            template: DEFAULT_TEMPLATE.to_string(),
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
            updated_at: chrono::Utc::now().to_rfc3339(),
            ..Self::default()
        }
    }

    pub fn is_unsaved(&self) -> bool {
        self.id.is_empty() || self.id == NEW_RESUME_ID
    }
}

/// Short, collision-tolerant id for resumes and their sub-records.
pub fn new_entity_id() -> String {
    Uuid::new_v4().simple().to_string()[..9].to_string()
}

/// True when the field holds something other than whitespace.
pub fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}
