// Prompt text for the writing-assistance features.
// Each builder returns the user message; SYSTEM is shared.

pub const SYSTEM: &str = "You are an expert resume writer. \
    Reply with the requested resume text only. \
    Do not add a preamble, headings, or closing remarks.";

pub fn summary_prompt(profession: &str, experiences: &[String]) -> String {
    format!(
        "Generate a professional resume summary for a {profession}. \
         Here are some key experiences to include: {}. \
         Keep it under 100 words and make it high-impact.",
        experiences.join(", ")
    )
}

pub fn bullet_points_prompt(position: &str, description: &str) -> String {
    format!(
        "Improve these job description bullet points for a {position} position \
         to be more accomplishment-oriented and ATS-friendly: \n{description}"
    )
}

pub fn project_description_prompt(name: &str, role: &str, technologies: &str) -> String {
    format!(
        "Generate a professional project description for a resume. \
         Project Name: {name}, Role: {role}, Technologies: {technologies}. \
         Focus on outcomes and impact. Keep it concise."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_prompt_joins_experiences() {
        let p = summary_prompt("Data Engineer", &["Built ETL".into(), "Led migration".into()]);
        assert!(p.contains("for a Data Engineer."));
        assert!(p.contains("Built ETL, Led migration"));
        assert!(p.contains("under 100 words"));
    }

    #[test]
    fn test_bullet_prompt_keeps_description_on_its_own_line() {
        let p = bullet_points_prompt("SRE", "- kept things up");
        assert!(p.ends_with("\n- kept things up"));
    }
}
