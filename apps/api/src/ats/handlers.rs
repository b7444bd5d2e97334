//! Axum route handlers for resume analysis.

use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};

use crate::ats::keywords::{industries, keywords_for};
use crate::ats::{report, AtsReport};
use crate::errors::AppError;
use crate::models::resume::ResumeData;

#[derive(Debug, Deserialize)]
pub struct KeywordQuery {
    pub industry: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum KeywordResponse {
    Industries {
        industries: Vec<&'static str>,
    },
    Keywords {
        industry: &'static str,
        keywords: &'static [&'static str],
    },
}

/// POST /api/v1/score
pub async fn handle_score(Json(resume): Json<ResumeData>) -> Json<AtsReport> {
    Json(report(&resume))
}

/// GET /api/v1/keywords?industry=
/// Without `industry`, lists the industries that have suggestions.
pub async fn handle_keywords(
    Query(params): Query<KeywordQuery>,
) -> Result<Json<KeywordResponse>, AppError> {
    let Some(industry) = params.industry else {
        return Ok(Json(KeywordResponse::Industries {
            industries: industries(),
        }));
    };
    let (industry, keywords) = keywords_for(&industry)
        .ok_or_else(|| AppError::NotFound(format!("No keyword list for industry '{industry}'")))?;
    Ok(Json(KeywordResponse::Keywords { industry, keywords }))
}
