//! Industry keyword suggestions for the editor's "recommended keywords" panel.
//!
//! Static lists per industry. A keyword counts as covered when it appears as a
//! whole word or phrase, case-insensitively, in the skills, summary,
//! experience or project text.

use serde::Serialize;

use crate::models::resume::ResumeData;

const INDUSTRY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Technology",
        &[
            "JavaScript", "React", "Node.js", "AWS", "Agile", "CI/CD", "Docker", "Kubernetes",
            "Python", "SQL",
        ],
    ),
    (
        "Finance",
        &[
            "Financial Modeling", "Risk Management", "Asset Allocation", "GAAP", "CFA", "Excel",
            "Trading", "Forecasting",
        ],
    ),
    (
        "Healthcare",
        &[
            "Patient Care", "Clinical Research", "HIPAA", "EMR", "Nursing", "Diagnostics",
            "Medical Ethics",
        ],
    ),
    (
        "Marketing",
        &[
            "SEO", "Content Strategy", "Social Media", "Analytics", "Brand Management", "PPC",
            "CRM", "Copywriting",
        ],
    ),
    (
        "Education",
        &[
            "Curriculum Design", "Lesson Planning", "Student Engagement", "STEM",
            "Special Education", "Assessment",
        ],
    ),
];

#[derive(Debug, Clone, Serialize)]
pub struct KeywordHit {
    pub keyword: &'static str,
    pub present: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct KeywordReport {
    pub industry: &'static str,
    pub keywords: Vec<KeywordHit>,
    pub coverage: f32,
}

pub fn industries() -> Vec<&'static str> {
    INDUSTRY_KEYWORDS.iter().map(|(name, _)| *name).collect()
}

/// Canonical industry name and its keyword list, matched case-insensitively.
pub fn keywords_for(industry: &str) -> Option<(&'static str, &'static [&'static str])> {
    let wanted = industry.trim();
    INDUSTRY_KEYWORDS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(wanted))
        .map(|(name, keywords)| (*name, *keywords))
}

/// Checks which of the industry's keywords the resume already mentions.
pub fn keyword_report(resume: &ResumeData, industry: &str) -> Option<KeywordReport> {
    let (industry, keywords) = keywords_for(industry)?;
    let corpus = searchable_text(resume);

    let keywords: Vec<KeywordHit> = keywords
        .iter()
        .map(|&keyword| KeywordHit {
            keyword,
            present: contains_phrase(&corpus, &keyword.to_lowercase()),
        })
        .collect();

    let covered = keywords.iter().filter(|k| k.present).count();
    let coverage = if keywords.is_empty() {
        0.0
    } else {
        covered as f32 / keywords.len() as f32
    };

    Some(KeywordReport {
        industry,
        keywords,
        coverage,
    })
}

/// True when `needle` occurs in `haystack` with no letter or digit directly
/// before or after it. Both sides are expected lowercased.
fn contains_phrase(haystack: &str, needle: &str) -> bool {
    haystack.match_indices(needle).any(|(start, matched)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + matched.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

fn searchable_text(resume: &ResumeData) -> String {
    let mut parts: Vec<&str> = Vec::new();
    parts.extend(resume.skills.iter().map(String::as_str));
    parts.push(&resume.summary);
    for e in &resume.experiences {
        parts.push(&e.position);
        parts.push(&e.description);
    }
    for p in &resume.projects {
        parts.push(&p.technologies);
        parts.push(&p.description);
    }
    parts.join("\n").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Experience, Project};

    #[test]
    fn test_industry_lookup_is_case_insensitive() {
        let (name, keywords) = keywords_for("  finance ").unwrap();
        assert_eq!(name, "Finance");
        assert_eq!(keywords[0], "Financial Modeling");
        assert!(keywords_for("Agriculture").is_none());
    }

    #[test]
    fn test_industries_in_declared_order() {
        assert_eq!(
            industries(),
            vec!["Technology", "Finance", "Healthcare", "Marketing", "Education"]
        );
    }

    #[test]
    fn test_report_marks_present_keywords() {
        let resume = ResumeData {
            skills: vec!["python".into(), "Docker".into()],
            experiences: vec![Experience {
                description: "Migrated services to Kubernetes on AWS".into(),
                ..Experience::default()
            }],
            projects: vec![Project {
                technologies: "React, Node.js".into(),
                ..Project::default()
            }],
            ..ResumeData::default()
        };
        let report = keyword_report(&resume, "technology").unwrap();
        let present: Vec<_> = report
            .keywords
            .iter()
            .filter(|k| k.present)
            .map(|k| k.keyword)
            .collect();
        assert_eq!(
            present,
            vec!["React", "Node.js", "AWS", "Docker", "Kubernetes", "Python"]
        );
        assert!((report.coverage - 0.6).abs() < f32::EPSILON);
    }

    #[test]
    fn test_keywords_inside_longer_words_do_not_count() {
        let resume = ResumeData {
            skills: vec!["PostgreSQL".into()],
            summary: "Excellent communicator; hardened fragile reactive systems.".into(),
            ..ResumeData::default()
        };
        let present = |industry: &str| -> Vec<&str> {
            keyword_report(&resume, industry)
                .unwrap()
                .keywords
                .into_iter()
                .filter(|k| k.present)
                .map(|k| k.keyword)
                .collect()
        };
        assert!(present("Technology").is_empty());
        assert!(present("Finance").is_empty());
    }

    #[test]
    fn test_phrases_match_at_punctuation_boundaries() {
        assert!(contains_phrase("built on node.js, react.", "node.js"));
        assert!(contains_phrase("built on node.js, react.", "react"));
        assert!(contains_phrase("ci/cd", "ci/cd"));
        assert!(contains_phrase("led social media campaigns", "social media"));
        assert!(!contains_phrase("postgresql", "sql"));
        assert!(!contains_phrase("excellent", "excel"));
    }

    #[test]
    fn test_report_unknown_industry() {
        assert!(keyword_report(&ResumeData::default(), "Mining").is_none());
    }
}
