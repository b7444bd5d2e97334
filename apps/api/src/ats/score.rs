//! ATS completeness score: advisory only; nothing blocks on it.
//!
//! Fixed additive checklist, no partial credit. Weights sum to 100.

use serde::Serialize;

use crate::models::resume::{is_filled, ResumeData};

const SUMMARY_MIN_CHARS: usize = 50;
const SKILLS_MIN: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    FullName,
    Email,
    Phone,
    Summary,
    Experience,
    Education,
    Skills,
}

impl Criterion {
    pub const ALL: [Criterion; 7] = [
        Criterion::FullName,
        Criterion::Email,
        Criterion::Phone,
        Criterion::Summary,
        Criterion::Experience,
        Criterion::Education,
        Criterion::Skills,
    ];

    pub fn weight(self) -> u8 {
        match self {
            Criterion::FullName | Criterion::Email | Criterion::Phone => 10,
            Criterion::Summary | Criterion::Education => 15,
            Criterion::Experience | Criterion::Skills => 20,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Criterion::FullName => "Full name",
            Criterion::Email => "Email address",
            Criterion::Phone => "Phone number",
            Criterion::Summary => "Professional summary (50+ characters)",
            Criterion::Experience => "Work experience",
            Criterion::Education => "Education",
            Criterion::Skills => "Skills (5+ recommended)",
        }
    }

    pub fn is_met(self, resume: &ResumeData) -> bool {
        let info = &resume.personal_info;
        match self {
            Criterion::FullName => is_filled(&info.full_name),
            Criterion::Email => is_filled(&info.email),
            Criterion::Phone => is_filled(&info.phone),
            Criterion::Summary => resume.summary.chars().count() > SUMMARY_MIN_CHARS,
            Criterion::Experience => !resume.experiences.is_empty(),
            Criterion::Education => !resume.education.is_empty(),
            Criterion::Skills => resume.skills.len() >= SKILLS_MIN,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AtsCheck {
    pub criterion: Criterion,
    pub label: &'static str,
    pub weight: u8,
    pub passed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AtsReport {
    pub score: u8,
    pub checks: Vec<AtsCheck>,
}

/// Completeness score in `0..=100`.
pub fn score(resume: &ResumeData) -> u8 {
    Criterion::ALL
        .iter()
        .filter(|c| c.is_met(resume))
        .map(|c| c.weight())
        .sum()
}

/// The score together with the checklist it was computed from.
pub fn report(resume: &ResumeData) -> AtsReport {
    let checks: Vec<AtsCheck> = Criterion::ALL
        .iter()
        .map(|&criterion| AtsCheck {
            criterion,
            label: criterion.label(),
            weight: criterion.weight(),
            passed: criterion.is_met(resume),
        })
        .collect();
    let score = checks.iter().filter(|c| c.passed).map(|c| c.weight).sum();
    AtsReport { score, checks }
}
