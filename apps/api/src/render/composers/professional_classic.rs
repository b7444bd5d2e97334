//! Professional Classic: centered serif, double rule under the header,
//! skills as one delimited line.

use crate::models::resume::ResumeData;
use crate::render::composers::{
    accent_of, contact_items, display_name, non_blank, profession, Composer, STANDARD_CONTACTS,
};
use crate::render::document::{
    Accent, Align, ColorScheme, ContactStyle, Content, Document, Entry, Header, HeaderPlacement,
    Node, Section, SectionKind, TextStyle, Theme, Typeface,
};
use crate::render::registry::TemplateId;
use crate::render::sections::SectionOutputs;

pub const SKILL_SEPARATOR: &str = " • ";

pub struct ProfessionalClassic;

impl Composer for ProfessionalClassic {
    fn id(&self) -> TemplateId {
        TemplateId::ProfessionalClassic
    }

    fn compose(&self, resume: &ResumeData, sections: &SectionOutputs<'_>) -> Document {
        let accent = accent_of(resume);
        let info = &resume.personal_info;
        let mut body: Vec<Node> = Vec::new();

        if let Some(summary) = sections.summary {
            body.push(
                Section::new(
                    SectionKind::Summary,
                    Content::Text {
                        text: summary.to_string(),
                        style: TextStyle::Italic,
                        marker_color: None,
                    },
                )
                .into(),
            );
        }

        if let Some(items) = &sections.experience {
            let entries = items
                .iter()
                .map(|e| Entry {
                    title: e.position.to_string(),
                    subtitle: non_blank(e.company),
                    subtitle_color: Some(accent.clone()),
                    dates: e.dates.text(),
                    body: non_blank(e.description),
                    ..Entry::default()
                })
                .collect();
            body.push(
                Section::new(SectionKind::Experience, Content::Entries(entries))
                    .titled("Professional Experience")
                    .into(),
            );
        }

        if let Some(items) = &sections.education {
            let entries = items
                .iter()
                .map(|e| Entry {
                    title: e.qualification(),
                    subtitle: non_blank(e.institution),
                    dates: e.dates.text(),
                    ..Entry::default()
                })
                .collect();
            body.push(
                Section::new(SectionKind::Education, Content::Entries(entries))
                    .titled("Academic Background")
                    .into(),
            );
        }

        if let Some(skills) = &sections.skills {
            body.push(
                Section::new(
                    SectionKind::Skills,
                    Content::Inline {
                        items: skills.iter().map(|s| s.to_string()).collect(),
                        separator: SKILL_SEPARATOR.to_string(),
                    },
                )
                .titled("Core Competencies")
                .into(),
            );
        }

        Document {
            template: self.id(),
            theme: Theme {
                typeface: Typeface::Serif,
                scheme: ColorScheme::Light,
                accent: accent.clone(),
            },
            header: Header {
                name: display_name(info, "Your Name"),
                profession: profession(info),
                profession_color: Some(accent.clone()),
                contacts: contact_items(info, STANDARD_CONTACTS),
                contact_style: ContactStyle::Inline,
                contact_separator: Some("•".to_string()),
                avatar: None,
                align: Align::Center,
                placement: HeaderPlacement::Top,
                accent: Some(Accent::DoubleRule(accent)),
            },
            body,
        }
    }
}
