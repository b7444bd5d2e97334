//! Modern Sidebar: dark sidebar with identity, contact, skills and
//! languages; main column with Summary → Experience → Education → Projects.

use crate::models::resume::ResumeData;
use crate::render::composers::{
    accent_of, avatar, chips, contact_items, display_name, non_blank, profession, solid,
    Composer, STANDARD_CONTACTS,
};
use crate::render::document::{
    Accent, Align, ChipStyle, Color, ColorScheme, Column, ContactStyle, Content, Document, Entry,
    Header, HeaderPlacement, Node, Section, SectionKind, Side, TextStyle, Theme, Typeface,
};
use crate::render::registry::TemplateId;
use crate::render::sections::SectionOutputs;

const SIDEBAR_BACKGROUND: &str = "#1e293b";

pub struct ModernSidebar;

impl Composer for ModernSidebar {
    fn id(&self) -> TemplateId {
        TemplateId::ModernSidebar
    }

    fn compose(&self, resume: &ResumeData, sections: &SectionOutputs<'_>) -> Document {
        let accent = accent_of(resume);
        let info = &resume.personal_info;

        // Sidebar
        let mut sidebar: Vec<Node> = Vec::new();

        let contacts = contact_items(info, STANDARD_CONTACTS);
        if !contacts.is_empty() {
            sidebar.push(
                Section::new(SectionKind::Contact, Content::Contacts(contacts))
                    .titled("Contact")
                    .title_color(accent.clone())
                    .into(),
            );
        }

        if let Some(skills) = &sections.skills {
            sidebar.push(
                Section::new(SectionKind::Skills, chips(skills, ChipStyle::Tinted, &accent))
                    .titled("Skills")
                    .title_color(accent.clone())
                    .into(),
            );
        }

        if let Some(languages) = &sections.languages {
            let entries = languages
                .iter()
                .map(|l| Entry {
                    title: l.name.to_string(),
                    subtitle: non_blank(l.proficiency),
                    ..Entry::default()
                })
                .collect();
            sidebar.push(
                Section::new(SectionKind::Languages, Content::Entries(entries))
                    .titled("Languages")
                    .title_color(accent.clone())
                    .into(),
            );
        }

        // Main column
        let mut main: Vec<Node> = Vec::new();

        if let Some(summary) = sections.summary {
            main.push(
                Section::new(
                    SectionKind::Summary,
                    Content::Text {
                        text: summary.to_string(),
                        style: TextStyle::Plain,
                        marker_color: None,
                    },
                )
                .titled("Professional Summary")
                .title_color(accent.clone())
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
                    marker: Some(accent.clone()),
                    ..Entry::default()
                })
                .collect();
            main.push(
                Section::new(SectionKind::Experience, Content::Entries(entries))
                    .titled("Work Experience")
                    .title_color(accent.clone())
                    .accent(Accent::Border {
                        side: Side::Left,
                        color: accent.with_alpha("22"),
                    })
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
            main.push(
                Section::new(SectionKind::Education, Content::Entries(entries))
                    .titled("Education")
                    .title_color(accent.clone())
                    .into(),
            );
        }

        if let Some(items) = &sections.projects {
            let entries = items
                .iter()
                .map(|p| {
                    let mut details = Vec::new();
                    if !p.technologies.is_empty() {
                        details.push(p.technologies.join(", "));
                    }
                    if let Some(url) = non_blank(p.url) {
                        details.push(url);
                    }
                    Entry {
                        title: p.name.to_string(),
                        dates: p.dates.text(),
                        details,
                        detail_color: Some(accent.clone()),
                        body: non_blank(p.description),
                        ..Entry::default()
                    }
                })
                .collect();
            main.push(
                Section::new(SectionKind::Projects, Content::Entries(entries))
                    .titled("Projects")
                    .title_color(accent.clone())
                    .into(),
            );
        }

        // Always two columns: the sidebar carries the identity header even
        // when no section has content.
        let body = vec![Node::Columns {
            columns: vec![
                Column {
                    span: 1,
                    background: Some(solid(&Color::new(SIDEBAR_BACKGROUND))),
                    nodes: sidebar,
                },
                Column::new(2, main),
            ],
            divider: None,
        }];

        Document {
            template: self.id(),
            theme: Theme {
                typeface: Typeface::Sans,
                scheme: ColorScheme::Light,
                accent: accent.clone(),
            },
            header: Header {
                name: display_name(info, "Your Name"),
                profession: profession(info),
                profession_color: Some(accent.clone()),
                // Contact details live in the sidebar's Contact section.
                contacts: Vec::new(),
                contact_style: ContactStyle::Stacked,
                contact_separator: None,
                avatar: Some(avatar(info, '?', accent)),
                align: Align::Center,
                placement: HeaderPlacement::Sidebar,
                accent: None,
            },
            body,
        }
    }
}
