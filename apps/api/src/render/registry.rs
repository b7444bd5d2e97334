//! Template registry: the fixed catalogue of layouts a resume can select.

use serde::Serialize;

use crate::models::resume::ResumeData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateId {
    Executive,
    ModernSidebar,
    MinimalClean,
    CreativeBold,
    ProfessionalClassic,
    TechDeveloper,
}

impl TemplateId {
    /// Used when a resume names a template this build does not know.
    pub const FALLBACK: TemplateId = TemplateId::MinimalClean;

    pub const ALL: [TemplateId; 6] = [
        TemplateId::Executive,
        TemplateId::ModernSidebar,
        TemplateId::MinimalClean,
        TemplateId::CreativeBold,
        TemplateId::ProfessionalClassic,
        TemplateId::TechDeveloper,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateId::Executive => "executive",
            TemplateId::ModernSidebar => "modern_sidebar",
            TemplateId::MinimalClean => "minimal_clean",
            TemplateId::CreativeBold => "creative_bold",
            TemplateId::ProfessionalClassic => "professional_classic",
            TemplateId::TechDeveloper => "tech_developer",
        }
    }

    /// Exact, case-sensitive match on the stored id.
    pub fn parse(id: &str) -> Option<TemplateId> {
        Self::ALL.into_iter().find(|t| t.as_str() == id)
    }

    pub fn info(self) -> &'static TemplateInfo {
        // ALL and TEMPLATES share order.
        let index = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        &TEMPLATES[index]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TemplateInfo {
    pub id: TemplateId,
    pub name: &'static str,
    pub description: &'static str,
    pub best_for: &'static [&'static str],
    pub default_accent_color: &'static str,
}

static TEMPLATES: [TemplateInfo; 6] = [
    TemplateInfo {
        id: TemplateId::Executive,
        name: "Executive",
        description: "Sophisticated design for senior leaders.",
        best_for: &["Management", "Finance", "Leadership"],
        default_accent_color: "#059669",
    },
    TemplateInfo {
        id: TemplateId::ModernSidebar,
        name: "Modern Sidebar",
        description: "Contemporary layout with a focused sidebar.",
        best_for: &["Tech", "Marketing", "Startups"],
        default_accent_color: "#10b981",
    },
    TemplateInfo {
        id: TemplateId::MinimalClean,
        name: "Minimal Clean",
        description: "Clean, spacious design that lets your experience speak.",
        best_for: &["Creative", "Design", "Media"],
        default_accent_color: "#059669",
    },
    TemplateInfo {
        id: TemplateId::CreativeBold,
        name: "Creative Bold",
        description: "Vibrant and eye-catching with gradients.",
        best_for: &["Design", "Arts", "Media"],
        default_accent_color: "#10b981",
    },
    TemplateInfo {
        id: TemplateId::ProfessionalClassic,
        name: "Professional Classic",
        description: "Traditional serif design for corporate success.",
        best_for: &["Legal", "Finance", "Academic"],
        default_accent_color: "#111827",
    },
    TemplateInfo {
        id: TemplateId::TechDeveloper,
        name: "Tech Developer",
        description: "Dark mode mono-spaced design for developers.",
        best_for: &["Software Eng", "DevOps", "Data Science"],
        default_accent_color: "#10b981",
    },
];

pub fn list_templates() -> &'static [TemplateInfo] {
    &TEMPLATES
}

/// A named accent swatch offered next to the template picker.
#[derive(Debug, Clone, Serialize)]
pub struct AccentSwatch {
    pub name: &'static str,
    pub value: &'static str,
}

pub static ACCENT_COLORS: [AccentSwatch; 10] = [
    AccentSwatch { name: "Blue", value: "#3B82F6" },
    AccentSwatch { name: "Indigo", value: "#6366F1" },
    AccentSwatch { name: "Purple", value: "#8B5CF6" },
    AccentSwatch { name: "Green", value: "#10B981" },
    AccentSwatch { name: "Red", value: "#EF4444" },
    AccentSwatch { name: "Orange", value: "#F97316" },
    AccentSwatch { name: "Teal", value: "#14B8A6" },
    AccentSwatch { name: "Pink", value: "#EC4899" },
    AccentSwatch { name: "Gray", value: "#6B7280" },
    AccentSwatch { name: "Black", value: "#111827" },
];

/// Switches a resume to `template`, replacing its accent color with the
/// template's default. Selection-time behavior; rendering never calls this.
pub fn apply_template(resume: &mut ResumeData, template: TemplateId) {
    let info = template.info();
    resume.template = template.as_str().to_string();
    resume.accent_color = info.default_accent_color.to_string();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_templates_in_catalogue_order() {
        let names: Vec<_> = list_templates().iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec![
                "Executive",
                "Modern Sidebar",
                "Minimal Clean",
                "Creative Bold",
                "Professional Classic",
                "Tech Developer"
            ]
        );
    }

    #[test]
    fn test_info_matches_id_for_every_template() {
        for id in TemplateId::ALL {
            assert_eq!(id.info().id, id);
        }
    }

    #[test]
    fn test_parse_round_trips_known_ids() {
        for id in TemplateId::ALL {
            assert_eq!(TemplateId::parse(id.as_str()), Some(id));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_and_empty() {
        assert_eq!(TemplateId::parse("nonexistent"), None);
        assert_eq!(TemplateId::parse(""), None);
        assert_eq!(TemplateId::parse("Executive"), None);
    }

    #[test]
    fn test_apply_template_overwrites_accent_color() {
        let mut resume = ResumeData::new_draft();
        resume.accent_color = "#EC4899".to_string();
        apply_template(&mut resume, TemplateId::ProfessionalClassic);
        assert_eq!(resume.template, "professional_classic");
        assert_eq!(resume.accent_color, "#111827");
    }

    #[test]
    fn test_template_id_serializes_as_stored_id() {
        let value = serde_json::to_value(TemplateId::TechDeveloper).unwrap();
        assert_eq!(value, "tech_developer");
    }
}
