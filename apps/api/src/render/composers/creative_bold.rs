//! Creative Bold: gradient banner header, then Summary and a 2:1 split of
//! Experience against Skills and Education.

use crate::models::resume::ResumeData;
use crate::render::composers::{
    accent_of, chips, contact_items, display_name, non_blank, profession, row, solid, Composer,
    STANDARD_CONTACTS,
};
use crate::render::document::{
    Accent, Align, ChipStyle, Color, ColorScheme, Column, ContactStyle, Content, Document, Entry,
    Fill, Header, HeaderPlacement, Node, Section, SectionKind, TextStyle, Theme, Typeface,
};
use crate::render::registry::TemplateId;
use crate::render::sections::SectionOutputs;

/// Second gradient stop; fixed regardless of accent.
const GRADIENT_END: &str = "#14b8a6";
const BANNER_SUBTITLE: &str = "#d1fae5";

pub struct CreativeBold;

impl Composer for CreativeBold {
    fn id(&self) -> TemplateId {
        TemplateId::CreativeBold
    }

    fn compose(&self, resume: &ResumeData, sections: &SectionOutputs<'_>) -> Document {
        let accent = accent_of(resume);
        let info = &resume.personal_info;
        let gradient = Fill::Gradient {
            from: accent.clone(),
            to: Color::new(GRADIENT_END),
        };
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
                .accent(Accent::Bar(gradient.clone()))
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
                    .titled("Professional Journey")
                    .accent(Accent::Background(solid(&accent)))
                    .into(),
            );
        }

        let mut aside = Vec::new();
        if let Some(skills) = &sections.skills {
            aside.push(
                Section::new(SectionKind::Skills, chips(skills, ChipStyle::Solid, &accent))
                    .titled("Expertise")
                    .accent(Accent::Bar(solid(&accent)))
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
            aside.push(
                Section::new(SectionKind::Education, Content::Entries(entries))
                    .titled("Education")
                    .accent(Accent::Bar(solid(&accent)))
                    .into(),
            );
        }

        body.extend(row(vec![Column::new(2, lead), Column::new(1, aside)], None));

        Document {
            template: self.id(),
            theme: Theme {
                typeface: Typeface::Sans,
                scheme: ColorScheme::Light,
                accent,
            },
            header: Header {
                name: display_name(info, "Your Name"),
                profession: profession(info),
                profession_color: Some(Color::new(BANNER_SUBTITLE)),
                contacts: contact_items(info, STANDARD_CONTACTS),
                contact_style: ContactStyle::Pills,
                contact_separator: None,
                avatar: None,
                align: Align::Start,
                placement: HeaderPlacement::Top,
                accent: Some(Accent::Background(gradient)),
            },
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::composers::fixtures::full_resume;
    use crate::render::sections::render_sections;

    fn compose(resume: &ResumeData) -> Document {
        CreativeBold.compose(resume, &render_sections(resume))
    }

    #[test]
    fn test_layout_order() {
        let doc = compose(&full_resume("creative_bold"));
        assert_eq!(
            doc.section_kinds(),
            vec![
                SectionKind::Summary,
                SectionKind::Experience,
                SectionKind::Skills,
                SectionKind::Education
            ]
        );
        match &doc.body[1] {
            Node::Columns { columns, .. } => {
                assert_eq!(columns[0].span, 2);
                assert_eq!(columns[1].span, 1);
            }
            other => panic!("expected columns, got {other:?}"),
        }
    }

    #[test]
    fn test_banner_gradient_starts_at_accent() {
        let resume = full_resume("creative_bold");
        let doc = compose(&resume);
        assert_eq!(
            doc.header.accent,
            Some(Accent::Background(Fill::Gradient {
                from: accent_of(&resume),
                to: Color::new(GRADIENT_END)
            }))
        );
        assert_eq!(doc.header.contact_style, ContactStyle::Pills);
    }

    #[test]
    fn test_projects_and_languages_not_shown() {
        let doc = compose(&full_resume("creative_bold"));
        assert!(doc.section(SectionKind::Projects).is_none());
        assert!(doc.section(SectionKind::Languages).is_none());
    }
}
