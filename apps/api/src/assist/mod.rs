//! Writing assistance: AI-drafted summaries, bullet rewrites and project blurbs.
//!
//! Every operation has a fixed fallback, so a failed or blank model reply
//! never surfaces as an error. The backend is a `TextGenerator` held in
//! `AppState` as `Arc<dyn TextGenerator>`.

pub mod handlers;

use async_trait::async_trait;
use tracing::warn;

use crate::llm_client::{prompts, LlmClient, LlmError};

pub const SUMMARY_FALLBACK: &str = "Failed to generate summary. Please try again.";
pub const DEFAULT_PROFESSION: &str = "Professional";
pub const DEFAULT_PROJECT_NAME: &str = "Project";
pub const DEFAULT_PROJECT_ROLE: &str = "Contributor";

#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Generator backed by the Anthropic client.
pub struct LlmTextGenerator(pub LlmClient);

#[async_trait]
impl TextGenerator for LlmTextGenerator {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.0.complete(prompt, prompts::SYSTEM).await
    }
}

/// Used when no API key is configured. Every call yields the fallback.
pub struct OfflineTextGenerator;

#[async_trait]
impl TextGenerator for OfflineTextGenerator {
    async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
        Err(LlmError::Unavailable)
    }
}

pub async fn generate_summary(
    generator: &dyn TextGenerator,
    profession: &str,
    experiences: &[String],
) -> String {
    let profession = or_default(profession, DEFAULT_PROFESSION);
    let prompt = prompts::summary_prompt(profession, experiences);
    complete_or(generator, &prompt, "summary", SUMMARY_FALLBACK).await
}

/// Falls back to the original `description`.
pub async fn improve_bullet_points(
    generator: &dyn TextGenerator,
    position: &str,
    description: &str,
) -> String {
    let prompt = prompts::bullet_points_prompt(position, description);
    complete_or(generator, &prompt, "bullet points", description).await
}

/// Falls back to an empty string.
pub async fn generate_project_description(
    generator: &dyn TextGenerator,
    name: &str,
    role: &str,
    technologies: &str,
) -> String {
    let prompt = prompts::project_description_prompt(
        or_default(name, DEFAULT_PROJECT_NAME),
        or_default(role, DEFAULT_PROJECT_ROLE),
        technologies,
    );
    complete_or(generator, &prompt, "project description", "").await
}

async fn complete_or(
    generator: &dyn TextGenerator,
    prompt: &str,
    what: &str,
    fallback: &str,
) -> String {
    match generator.complete(prompt).await {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => {
            warn!("Empty {what} from text generator; using fallback");
            fallback.to_string()
        }
        Err(e) => {
            warn!("Error generating {what}: {e}");
            fallback.to_string()
        }
    }
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.trim().is_empty() {
        default
    } else {
        value
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::*;

    /// Replies with a canned text and records every prompt it saw.
    #[derive(Default)]
    pub struct ScriptedGenerator {
        pub reply: String,
        pub prompts: Mutex<Vec<String>>,
    }

    impl ScriptedGenerator {
        pub fn replying(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn last_prompt(&self) -> String {
            self.prompts.lock().unwrap().last().cloned().unwrap_or_default()
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(self.reply.clone())
        }
    }
}
