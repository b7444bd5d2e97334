//! Section renderers: decide which sections exist and what they contain.
//!
//! Each renderer is a pure function of the resume. A section is `None` when
//! its backing data is empty; composers never re-check emptiness themselves.
//! Input order is display order, always.

use crate::models::resume::{is_filled, Education, ResumeData};
use crate::render::dates::{DateRange, ProgressLabel};

pub const REFERENCES_PLACEHOLDER: &str = "Available upon request";

#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceItem<'a> {
    pub position: &'a str,
    pub company: &'a str,
    pub dates: DateRange,
    pub description: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EducationItem<'a> {
    pub degree: &'a str,
    pub field: &'a str,
    pub institution: &'a str,
    pub location: &'a str,
    pub gpa: &'a str,
    pub description: &'a str,
    pub dates: DateRange,
}

impl EducationItem<'_> {
    /// "Degree in Field", dropping whichever half is blank.
    pub fn qualification(&self) -> String {
        match (is_filled(self.degree), is_filled(self.field)) {
            (true, true) => format!("{} in {}", self.degree.trim(), self.field.trim()),
            (true, false) => self.degree.trim().to_string(),
            (false, true) => self.field.trim().to_string(),
            (false, false) => String::new(),
        }
    }

    /// "Institution | Location" with blanks omitted.
    pub fn place(&self, separator: &str) -> Option<String> {
        join_filled(&[self.institution, self.location], separator)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectItem<'a> {
    pub name: &'a str,
    pub technologies: Vec<&'a str>,
    pub url: &'a str,
    pub description: &'a str,
    pub dates: DateRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CertificationItem<'a> {
    pub name: &'a str,
    pub issuer: &'a str,
    pub date: &'a str,
    pub credential_id: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LanguageItem<'a> {
    pub name: &'a str,
    pub proficiency: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceItem<'a> {
    pub name: &'a str,
    pub title: &'a str,
    pub company: &'a str,
    pub relationship: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum References<'a> {
    /// Show [`REFERENCES_PLACEHOLDER`] and nothing else.
    OnRequest,
    Listed(Vec<ReferenceItem<'a>>),
}

/// Every section renderer's output for one resume, computed once per render.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SectionOutputs<'a> {
    pub summary: Option<&'a str>,
    pub experience: Option<Vec<ExperienceItem<'a>>>,
    pub education: Option<Vec<EducationItem<'a>>>,
    pub skills: Option<Vec<&'a str>>,
    pub projects: Option<Vec<ProjectItem<'a>>>,
    pub certifications: Option<Vec<CertificationItem<'a>>>,
    pub languages: Option<Vec<LanguageItem<'a>>>,
    pub references: Option<References<'a>>,
}

pub fn render_sections(resume: &ResumeData) -> SectionOutputs<'_> {
    SectionOutputs {
        summary: summary(resume),
        experience: experience(resume),
        education: education(resume),
        skills: skills(resume),
        projects: projects(resume),
        certifications: certifications(resume),
        languages: languages(resume),
        references: references(resume),
    }
}

pub fn summary(resume: &ResumeData) -> Option<&str> {
    let text = resume.summary.trim();
    (!text.is_empty()).then_some(text)
}

pub fn experience(resume: &ResumeData) -> Option<Vec<ExperienceItem<'_>>> {
    non_empty(
        resume
            .experiences
            .iter()
            .map(|e| ExperienceItem {
                position: e.position.as_str(),
                company: e.company.as_str(),
                dates: DateRange::new(&e.start_date, &e.end_date, e.current, ProgressLabel::Present),
                description: e.description.as_str(),
            })
            .collect(),
    )
}

pub fn education(resume: &ResumeData) -> Option<Vec<EducationItem<'_>>> {
    non_empty(resume.education.iter().map(education_item).collect())
}

fn education_item(e: &Education) -> EducationItem<'_> {
    EducationItem {
        degree: &e.degree,
        field: &e.field,
        institution: &e.institution,
        location: &e.location,
        gpa: &e.gpa,
        description: &e.description,
        dates: DateRange::new(&e.start_date, &e.end_date, e.current, ProgressLabel::Present),
    }
}

pub fn skills(resume: &ResumeData) -> Option<Vec<&str>> {
    non_empty(resume.skills.iter().map(String::as_str).collect())
}

pub fn projects(resume: &ResumeData) -> Option<Vec<ProjectItem<'_>>> {
    non_empty(
        resume
            .projects
            .iter()
            .map(|p| ProjectItem {
                name: &p.name,
                technologies: split_technologies(&p.technologies),
                url: &p.url,
                description: &p.description,
                dates: DateRange::new(&p.start_date, &p.end_date, p.ongoing, ProgressLabel::Ongoing),
            })
            .collect(),
    )
}

pub fn certifications(resume: &ResumeData) -> Option<Vec<CertificationItem<'_>>> {
    non_empty(
        resume
            .certifications
            .iter()
            .map(|c| CertificationItem {
                name: &c.name,
                issuer: &c.issuer,
                date: &c.date,
                credential_id: &c.credential_id,
            })
            .collect(),
    )
}

pub fn languages(resume: &ResumeData) -> Option<Vec<LanguageItem<'_>>> {
    non_empty(
        resume
            .languages
            .iter()
            .map(|l| LanguageItem {
                name: &l.name,
                proficiency: &l.proficiency,
            })
            .collect(),
    )
}

pub fn references(resume: &ResumeData) -> Option<References<'_>> {
    if resume.references_on_request {
        return Some(References::OnRequest);
    }
    non_empty(
        resume
            .references
            .iter()
            .map(|r| ReferenceItem {
                name: &r.name,
                title: &r.title,
                company: &r.company,
                relationship: &r.relationship,
                email: &r.email,
                phone: &r.phone,
            })
            .collect(),
    )
    .map(References::Listed)
}

/// Splits the comma-joined technologies field, dropping empty fragments.
pub fn split_technologies(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Joins the non-blank values with `separator`; `None` if all are blank.
pub fn join_filled(values: &[&str], separator: &str) -> Option<String> {
    let parts: Vec<&str> = values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .collect();
    (!parts.is_empty()).then(|| parts.join(separator))
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    (!items.is_empty()).then_some(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Experience, Project, Reference};

    fn reference(name: &str) -> Reference {
        Reference {
            id: name.to_lowercase(),
            name: name.to_string(),
            ..Reference::default()
        }
    }

    #[test]
    fn test_empty_resume_has_no_sections() {
        let resume = ResumeData::default();
        assert_eq!(render_sections(&resume), SectionOutputs::default());
    }

    #[test]
    fn test_blank_summary_is_absent() {
        let resume = ResumeData {
            summary: "   \n".to_string(),
            ..ResumeData::default()
        };
        assert_eq!(summary(&resume), None);
    }

    #[test]
    fn test_experience_keeps_input_order_and_current_override() {
        let resume = ResumeData {
            experiences: vec![
                Experience {
                    position: "Lead".into(),
                    start_date: "2020-06".into(),
                    end_date: "2020-05".into(),
                    current: true,
                    ..Experience::default()
                },
                Experience {
                    position: "Junior".into(),
                    start_date: "2015-01".into(),
                    end_date: "2020-05".into(),
                    ..Experience::default()
                },
            ],
            ..ResumeData::default()
        };
        let items = experience(&resume).unwrap();
        assert_eq!(items[0].position, "Lead");
        assert_eq!(items[0].dates.to_string(), "2020-06 – Present");
        assert_eq!(items[1].dates.to_string(), "2015-01 – 2020-05");
    }

    #[test]
    fn test_skills_preserve_order_and_duplicates() {
        let resume = ResumeData {
            skills: vec!["B".into(), "A".into(), "C".into(), "A".into()],
            ..ResumeData::default()
        };
        assert_eq!(skills(&resume).unwrap(), vec!["B", "A", "C", "A"]);
    }

    #[test]
    fn test_project_ongoing_and_technologies() {
        let resume = ResumeData {
            projects: vec![Project {
                name: "Ferrite".into(),
                technologies: "Rust, tokio,, axum ".into(),
                start_date: "2023".into(),
                end_date: "2022".into(),
                ongoing: true,
                ..Project::default()
            }],
            ..ResumeData::default()
        };
        let items = projects(&resume).unwrap();
        assert_eq!(items[0].technologies, vec!["Rust", "tokio", "axum"]);
        assert_eq!(items[0].dates.to_string(), "2023 – Ongoing");
    }

    #[test]
    fn test_references_on_request_ignores_entries() {
        let resume = ResumeData {
            references: vec![reference("Grace")],
            references_on_request: true,
            ..ResumeData::default()
        };
        assert_eq!(references(&resume), Some(References::OnRequest));
    }

    #[test]
    fn test_references_listed_when_not_on_request() {
        let resume = ResumeData {
            references: vec![reference("Grace"), reference("Alan")],
            ..ResumeData::default()
        };
        match references(&resume) {
            Some(References::Listed(items)) => {
                assert_eq!(items.len(), 2);
                assert_eq!(items[0].name, "Grace");
            }
            other => panic!("expected listed references, got {other:?}"),
        }
    }

    #[test]
    fn test_references_absent_when_empty() {
        assert_eq!(references(&ResumeData::default()), None);
    }

    #[test]
    fn test_qualification_omits_blank_halves() {
        let mut edu = Education {
            degree: "BSc".into(),
            field: "Physics".into(),
            ..Education::default()
        };
        assert_eq!(education_item(&edu).qualification(), "BSc in Physics");
        edu.field.clear();
        assert_eq!(education_item(&edu).qualification(), "BSc");
        edu.degree.clear();
        assert_eq!(education_item(&edu).qualification(), "");
    }

    #[test]
    fn test_join_filled() {
        assert_eq!(
            join_filled(&["MIT", " ", "Cambridge"], " | ").as_deref(),
            Some("MIT | Cambridge")
        );
        assert_eq!(join_filled(&["", ""], " | "), None);
    }
}
