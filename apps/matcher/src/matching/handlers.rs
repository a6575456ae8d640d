//! Axum route handlers for the match form and the JSON match API.

use anyhow::Context;
use axum::{response::Html, Form, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::normalizer::WordSet;
use crate::matching::page::{render_page, PageMessage, MISSING_PATHS_MESSAGE};
use crate::matching::service::{match_documents, match_or_empty, MatchConfig};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Body of both the form post and the JSON request.
#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub resume_path: String,
    #[serde(default)]
    pub job_description_path: String,
}

impl MatchRequest {
    fn has_both_paths(&self) -> bool {
        !self.resume_path.trim().is_empty() && !self.job_description_path.trim().is_empty()
    }

    fn to_config(&self) -> MatchConfig {
        MatchConfig::new(&self.resume_path, &self.job_description_path)
    }
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub common_words: WordSet,
    pub count: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
pub async fn handle_index() -> Html<String> {
    Html(render_page("", "", &PageMessage::Empty))
}

/// POST /match
///
/// Form submission. Always answers with the page; failures become messages under the form.
pub async fn handle_match_form(Form(request): Form<MatchRequest>) -> Result<Html<String>, AppError> {
    let message = if !request.has_both_paths() {
        PageMessage::MissingPaths
    } else {
        let config = request.to_config();
        let outcome = tokio::task::spawn_blocking(move || match_or_empty(&config))
            .await
            .context("match task failed")?;

        match outcome.error {
            Some(e) => PageMessage::NotFound(e.to_string()),
            None if outcome.is_empty() => PageMessage::NoCommonWords,
            None => PageMessage::CommonWords(outcome.common_words),
        }
    };

    Ok(Html(render_page(
        &request.resume_path,
        &request.job_description_path,
        &message,
    )))
}

/// POST /api/v1/match
///
/// Returns the common words, or 404 naming the first path that could not be read.
pub async fn handle_match(Json(request): Json<MatchRequest>) -> Result<Json<MatchResponse>, AppError> {
    if !request.has_both_paths() {
        return Err(AppError::Validation(MISSING_PATHS_MESSAGE.to_string()));
    }

    let config = request.to_config();
    let common_words = tokio::task::spawn_blocking(move || match_documents(&config))
        .await
        .context("match task failed")??;

    Ok(Json(MatchResponse {
        count: common_words.len(),
        common_words,
    }))
}
