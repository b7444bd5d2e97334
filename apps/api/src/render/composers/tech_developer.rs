//! Tech Developer: dark monospace theme. Summary as a doc comment, then a
//! 2:1 split of Experience against the tech stack and Education.

use crate::models::resume::ResumeData;
use crate::render::composers::{
    accent_of, avatar, chips, contact_items, display_name, non_blank, profession, row, Composer,
};
use crate::render::document::{
    Accent, Align, ChipStyle, Color, ColorScheme, Column, ContactKind, ContactStyle, Content,
    Document, Entry, Header, HeaderPlacement, Node, Section, SectionKind, Side, TextStyle, Theme,
    Typeface,
};
use crate::render::registry::TemplateId;
use crate::render::sections::SectionOutputs;

const CONTACTS: &[ContactKind] = &[
    ContactKind::Email,
    ContactKind::Phone,
    ContactKind::Website,
    ContactKind::Linkedin,
];
const HEADER_RULE: &str = "#1e293b";

pub struct TechDeveloper;

impl Composer for TechDeveloper {
    fn id(&self) -> TemplateId {
        TemplateId::TechDeveloper
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
                        style: TextStyle::DocComment,
                        marker_color: Some(accent.clone()),
                    },
                )
                .accent(Accent::Border {
                    side: Side::Left,
                    color: accent.clone(),
                })
                .into(),
            );
        }

        let mut lead = Vec::new();
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
            lead.push(
                Section::new(SectionKind::Experience, Content::Entries(entries))
                    .titled("01. // Experience")
                    .title_color(accent.clone())
                    .into(),
            );
        }

        let mut aside = Vec::new();
        if let Some(skills) = &sections.skills {
            aside.push(
                Section::new(SectionKind::Skills, chips(skills, ChipStyle::Tinted, &accent))
                    .titled("02. // Tech-Stack")
                    .title_color(accent.clone())
                    .into(),
            );
        }
        if let Some(items) = &sections.education {
            let entries = items
                .iter()
                .map(|e| Entry {
                    title: e.degree.trim().to_string(),
                    subtitle: non_blank(e.institution),
                    dates: e.dates.text(),
                    dates_color: Some(accent.clone()),
                    ..Entry::default()
                })
                .collect();
            aside.push(
                Section::new(SectionKind::Education, Content::Entries(entries))
                    .titled("03. // Education")
                    .title_color(accent.clone())
                    .into(),
            );
        }

        body.extend(row(vec![Column::new(2, lead), Column::new(1, aside)], None));

        Document {
            template: self.id(),
            theme: Theme {
                typeface: Typeface::Mono,
                scheme: ColorScheme::Dark,
                accent: accent.clone(),
            },
            header: Header {
                name: display_name(info, "User.root"),
                profession: profession(info).map(|p| format!("// {p}")),
                profession_color: Some(accent.clone()),
                contacts: contact_items(info, CONTACTS),
                contact_style: ContactStyle::Annotated,
                contact_separator: None,
                avatar: Some(avatar(info, '>', accent)),
                align: Align::Start,
                placement: HeaderPlacement::Top,
                accent: Some(Accent::Border {
                    side: Side::Bottom,
                    color: Color::new(HEADER_RULE),
                }),
            },
            body,
        }
    }
}
