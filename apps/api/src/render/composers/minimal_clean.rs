//! Minimal Clean: spacious sans layout; also the fallback for unknown ids.
//!
//! Order: Summary → Experience → Projects → [Education | Skills] →
//! [Certifications | References]. The last row appears only when there are
//! certifications or references are offered on request.

use crate::models::resume::ResumeData;
use crate::render::composers::{
    accent_of, chips, contact_items, display_name, non_blank, profession, row, solid, Composer,
    STANDARD_CONTACTS,
};
use crate::render::document::{
    Accent, Align, ChipStyle, Color, ColorScheme, Column, ContactStyle, Content, Document, Entry,
    Header, HeaderPlacement, Node, Section, SectionKind, TextStyle, Theme, Typeface,
};
use crate::render::registry::TemplateId;
use crate::render::sections::{join_filled, References, SectionOutputs, REFERENCES_PLACEHOLDER};

const RULE_COLOR: &str = "#f3f4f6";

pub struct MinimalClean;

impl Composer for MinimalClean {
    fn id(&self) -> TemplateId {
        TemplateId::MinimalClean
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
                        style: TextStyle::Plain,
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
                    .titled("Experience")
                    .into(),
            );
        }

        if let Some(items) = &sections.projects {
            let entries = items
                .iter()
                .map(|p| Entry {
                    title: p.name.to_string(),
                    dates: p.dates.text(),
                    body: non_blank(p.description),
                    ..Entry::default()
                })
                .collect();
            body.push(
                Section::new(SectionKind::Projects, Content::Entries(entries))
                    .titled("Projects")
                    .into(),
            );
        }

        let mut education_column = Vec::new();
        if let Some(items) = &sections.education {
            let entries = items
                .iter()
                .map(|e| Entry {
                    title: e.degree.trim().to_string(),
                    subtitle: non_blank(e.institution),
                    dates: e.dates.text(),
                    ..Entry::default()
                })
                .collect();
            education_column.push(
                Section::new(SectionKind::Education, Content::Entries(entries))
                    .titled("Education")
                    .into(),
            );
        }
        let mut skills_column = Vec::new();
        if let Some(skills) = &sections.skills {
            skills_column.push(
                Section::new(SectionKind::Skills, chips(skills, ChipStyle::Outline, &accent))
                    .titled("Competencies")
                    .into(),
            );
        }
        body.extend(row(
            vec![Column::new(1, education_column), Column::new(1, skills_column)],
            None,
        ));

        let on_request = matches!(sections.references, Some(References::OnRequest));
        if sections.certifications.is_some() || on_request {
            let mut certification_column = Vec::new();
            if let Some(items) = &sections.certifications {
                let entries = items
                    .iter()
                    .map(|c| Entry {
                        title: c.name.to_string(),
                        subtitle: join_filled(&[c.issuer, c.date], " • "),
                        ..Entry::default()
                    })
                    .collect();
                certification_column.push(
                    Section::new(SectionKind::Certifications, Content::Entries(entries))
                        .titled("Certifications")
                        .into(),
                );
            }
            let mut reference_column = Vec::new();
            if let Some(references) = &sections.references {
                let content = match references {
                    References::OnRequest => Content::Notice(REFERENCES_PLACEHOLDER.to_string()),
                    References::Listed(items) => Content::Entries(
                        items
                            .iter()
                            .map(|r| Entry {
                                title: r.name.to_string(),
                                subtitle: join_filled(&[r.title, r.company], ", "),
                                details: [r.relationship, r.email, r.phone]
                                    .iter()
                                    .filter_map(|v| non_blank(v))
                                    .collect(),
                                ..Entry::default()
                            })
                            .collect(),
                    ),
                };
                reference_column.push(
                    Section::new(SectionKind::References, content)
                        .titled("References")
                        .into(),
                );
            }
            body.extend(row(
                vec![
                    Column::new(1, certification_column),
                    Column::new(1, reference_column),
                ],
                Some(Color::new(RULE_COLOR)),
            ));
        }

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
                contacts: contact_items(info, STANDARD_CONTACTS),
                contact_style: ContactStyle::Inline,
                contact_separator: None,
                avatar: None,
                align: Align::Start,
                placement: HeaderPlacement::Top,
                accent: Some(Accent::Bar(solid(&accent))),
            },
            body,
        }
    }
}
