//! Template composers: one per template, each arranging section outputs into
//! its own layout.
//!
//! Composers are independent: none reads another's layout, and the helpers
//! here only build leaf nodes. Adding a template means one new module, one
//! `TemplateId` variant and one arm in [`composer_for`].

pub mod creative_bold;
pub mod executive;
pub mod minimal_clean;
pub mod modern_sidebar;
pub mod professional_classic;
pub mod tech_developer;

use crate::models::resume::{is_filled, PersonalInfo, ResumeData};
use crate::render::document::{
    Avatar, Chip, ChipStyle, Color, Column, ContactItem, ContactKind, Content, Fill, Node,
};
use crate::render::registry::TemplateId;
use crate::render::sections::SectionOutputs;
use crate::render::Document;

pub trait Composer: Send + Sync {
    fn id(&self) -> TemplateId;

    fn compose(&self, resume: &ResumeData, sections: &SectionOutputs<'_>) -> Document;
}

pub fn composer_for(id: TemplateId) -> &'static dyn Composer {
    match id {
        TemplateId::Executive => &executive::Executive,
        TemplateId::ModernSidebar => &modern_sidebar::ModernSidebar,
        TemplateId::MinimalClean => &minimal_clean::MinimalClean,
        TemplateId::CreativeBold => &creative_bold::CreativeBold,
        TemplateId::ProfessionalClassic => &professional_classic::ProfessionalClassic,
        TemplateId::TechDeveloper => &tech_developer::TechDeveloper,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Identity helpers
// ────────────────────────────────────────────────────────────────────────────

/// Contact fields shown by most templates, in display order.
pub(crate) const STANDARD_CONTACTS: &[ContactKind] = &[
    ContactKind::Email,
    ContactKind::Phone,
    ContactKind::Location,
    ContactKind::Linkedin,
    ContactKind::Website,
];

pub(crate) fn accent_of(resume: &ResumeData) -> Color {
    Color::new(resume.accent_color.trim())
}

pub(crate) fn display_name(info: &PersonalInfo, placeholder: &str) -> String {
    let name = info.full_name.trim();
    if name.is_empty() {
        placeholder.to_string()
    } else {
        name.to_string()
    }
}

pub(crate) fn profession(info: &PersonalInfo) -> Option<String> {
    non_blank(&info.profession)
}

/// Contact items for `kinds`, skipping blank fields entirely.
pub(crate) fn contact_items(info: &PersonalInfo, kinds: &[ContactKind]) -> Vec<ContactItem> {
    kinds
        .iter()
        .filter_map(|&kind| {
            let value = match kind {
                ContactKind::Email => &info.email,
                ContactKind::Phone => &info.phone,
                ContactKind::Location => &info.location,
                ContactKind::Linkedin => &info.linkedin,
                ContactKind::Website => &info.website,
            };
            non_blank(value).map(|value| ContactItem { kind, value })
        })
        .collect()
}

/// Photo when one is set, otherwise the first letter of the name.
pub(crate) fn avatar(info: &PersonalInfo, fallback: char, background: Color) -> Avatar {
    if let Some(url) = info.photo_url.as_deref().and_then(non_blank) {
        return Avatar::Photo { url, background };
    }
    let letter = info.full_name.trim().chars().next().unwrap_or(fallback);
    Avatar::Monogram { letter, background }
}

// ────────────────────────────────────────────────────────────────────────────
// Leaf builders
// ────────────────────────────────────────────────────────────────────────────

pub(crate) fn chips(skills: &[&str], style: ChipStyle, color: &Color) -> Content {
    Content::Chips(
        skills
            .iter()
            .map(|s| Chip {
                label: s.to_string(),
                style,
                color: color.clone(),
            })
            .collect(),
    )
}

/// A side-by-side row; `None` when every column came out empty.
pub(crate) fn row(columns: Vec<Column>, divider: Option<Color>) -> Option<Node> {
    if columns.iter().all(|c| c.nodes.is_empty()) {
        return None;
    }
    Some(Node::Columns { columns, divider })
}

pub(crate) fn solid(color: &Color) -> Fill {
    Fill::Solid(color.clone())
}

pub(crate) fn non_blank(value: &str) -> Option<String> {
    is_filled(value).then(|| value.trim().to_string())
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::models::resume::{
        Certification, Education, Experience, Language, PersonalInfo, Project, Reference,
        ResumeData,
    };

    /// A resume with every section populated.
    pub fn full_resume(template: &str) -> ResumeData {
        ResumeData {
            id: "r1".into(),
            title: "Backend".into(),
            personal_info: PersonalInfo {
                full_name: "Ada Lovelace".into(),
                email: "ada@example.com".into(),
                phone: "+44 20 7946 0000".into(),
                location: "London".into(),
                profession: "Software Engineer".into(),
                linkedin: "linkedin.com/in/ada".into(),
                website: "ada.dev".into(),
                photo_url: None,
            },
            summary: "Engineer with a decade of experience building reliable distributed systems."
                .into(),
            experiences: vec![
                Experience {
                    id: "e1".into(),
                    company: "Analytical Engines".into(),
                    position: "Staff Engineer".into(),
                    start_date: "2021-03".into(),
                    end_date: "2020-05".into(),
                    current: true,
                    description: "Led the storage team.".into(),
                },
                Experience {
                    id: "e2".into(),
                    company: "Difference Ltd".into(),
                    position: "Engineer".into(),
                    start_date: "2016-01".into(),
                    end_date: "2021-02".into(),
                    current: false,
                    description: "Built the billing pipeline.".into(),
                },
            ],
            education: vec![Education {
                id: "d1".into(),
                institution: "University of London".into(),
                degree: "BSc".into(),
                field: "Mathematics".into(),
                location: "London".into(),
                start_date: "2012".into(),
                end_date: "2015".into(),
                current: false,
                gpa: "3.9".into(),
                description: "First class honours.".into(),
            }],
            skills: vec!["B".into(), "A".into(), "C".into()],
            projects: vec![Project {
                id: "p1".into(),
                name: "Ferrite".into(),
                start_date: "2023".into(),
                end_date: "2022".into(),
                ongoing: true,
                url: "github.com/ada/ferrite".into(),
                technologies: "Rust, tokio".into(),
                description: "Embedded key-value store.".into(),
                role: None,
                highlights: None,
            }],
            certifications: vec![Certification {
                id: "c1".into(),
                name: "CKA".into(),
                issuer: "CNCF".into(),
                date: "2022".into(),
                credential_id: "X-1".into(),
            }],
            languages: vec![Language {
                id: "l1".into(),
                name: "French".into(),
                proficiency: "Fluent".into(),
            }],
            interests: "Chess".into(),
            references: vec![Reference {
                id: "ref1".into(),
                name: "Charles Babbage".into(),
                title: "Director".into(),
                company: "Analytical Engines".into(),
                relationship: "Manager".into(),
                email: "cb@example.com".into(),
                phone: String::new(),
            }],
            references_on_request: false,
            template: template.into(),
            accent_color: "#3B82F6".into(),
            ..ResumeData::default()
        }
    }
}
