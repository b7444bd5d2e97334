// Advisory resume analysis: ATS completeness score and industry keywords.
// Pure functions over ResumeData; never gate saving or rendering.

pub mod handlers;
pub mod keywords;
pub mod score;

pub use score::{report, score, AtsReport};
