//! Executive: serif, single column, heavy rule under the name.
//!
//! Order: Summary → Experience → Education → Skills.

use crate::models::resume::ResumeData;
use crate::render::composers::{
    accent_of, chips, contact_items, display_name, non_blank, profession, Composer,
    STANDARD_CONTACTS,
};
use crate::render::document::{
    Accent, Align, ChipStyle, ColorScheme, ContactStyle, Content, Document, Entry, Header,
    HeaderPlacement, Node, Section, SectionKind, Side, TextStyle, Theme, Typeface,
};
use crate::render::registry::TemplateId;
use crate::render::sections::SectionOutputs;

pub struct Executive;

impl Composer for Executive {
    fn id(&self) -> TemplateId {
        TemplateId::Executive
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
                .accent(Accent::Border {
                    side: Side::Left,
                    color: accent.clone(),
                })
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
                    subtitle: e.place(" | "),
                    dates: e.dates.text(),
                    details: non_blank(e.gpa)
                        .map(|gpa| vec![format!("GPA: {gpa}")])
                        .unwrap_or_default(),
                    body: non_blank(e.description),
                    ..Entry::default()
                })
                .collect();
            body.push(
                Section::new(SectionKind::Education, Content::Entries(entries))
                    .titled("Education")
                    .into(),
            );
        }

        if let Some(skills) = &sections.skills {
            body.push(
                Section::new(SectionKind::Skills, chips(skills, ChipStyle::Tinted, &accent))
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
                align: Align::Start,
                placement: HeaderPlacement::Top,
                accent: Some(Accent::Border {
                    side: Side::Bottom,
                    color: accent,
                }),
            },
            body,
        }
    }
}
