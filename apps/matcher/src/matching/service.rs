//! Match Service: reads a resume and a job description and reports their shared words.
//!
//! Stateless: every call opens, reads and releases both files within the call.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::matching::file_reader::{read_document, NotFoundError};
use crate::matching::normalizer::{common_words, WordSet};

/// The two documents to compare.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub resume_path: PathBuf,
    pub job_description_path: PathBuf,
}

impl MatchConfig {
    pub fn new(resume_path: impl Into<PathBuf>, job_description_path: impl Into<PathBuf>) -> Self {
        Self {
            resume_path: resume_path.into(),
            job_description_path: job_description_path.into(),
        }
    }
}

/// Result of `match_or_empty`: the shared words, plus the error that emptied them if any.
#[derive(Debug, Clone, Default)]
pub struct MatchOutcome {
    pub common_words: WordSet,
    pub error: Option<NotFoundError>,
}

impl MatchOutcome {
    pub fn is_empty(&self) -> bool {
        self.common_words.is_empty()
    }
}

/// Reads the resume, then the job description, and intersects their word sets.
/// The first missing file aborts the match.
pub fn match_documents(config: &MatchConfig) -> Result<WordSet, NotFoundError> {
    let resume = read_document(&config.resume_path)?;
    let job_description = read_document(&config.job_description_path)?;

    let words = common_words(&resume.text, &job_description.text);
    info!(
        "Matched {} against {}: {} common words",
        resume.path.display(),
        job_description.path.display(),
        words.len()
    );
    Ok(words)
}

/// Same as `match_documents`, but a missing file yields an empty set with the error attached.
pub fn match_or_empty(config: &MatchConfig) -> MatchOutcome {
    match match_documents(config) {
        Ok(common_words) => MatchOutcome {
            common_words,
            error: None,
        },
        Err(e) => {
            warn!("Match failed: {e}");
            MatchOutcome {
                common_words: WordSet::new(),
                error: Some(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::{tempdir, TempDir};

    fn write_docs(resume: &str, jd: &str) -> (TempDir, MatchConfig) {
        let dir = tempdir().unwrap();
        let resume_path = dir.path().join("resume.txt");
        let jd_path = dir.path().join("job_description.txt");
        fs::write(&resume_path, resume).unwrap();
        fs::write(&jd_path, jd).unwrap();
        (dir, MatchConfig::new(resume_path, jd_path))
    }

    fn words(list: &[&str]) -> WordSet {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_match_returns_common_words() {
        let (_dir, config) = write_docs("Python Developer Engineer", "Looking for Python Engineer");
        let result = match_documents(&config).unwrap();
        assert_eq!(result, words(&["engineer", "python"]));
    }

    #[test]
    fn test_empty_resume_matches_nothing() {
        let (_dir, config) = write_docs("", "anything");
        let outcome = match_or_empty(&config);
        assert!(outcome.is_empty());
        assert!(outcome.error.is_none());
    }

    #[test]
    fn test_missing_resume_yields_empty_with_error() {
        let (dir, mut config) = write_docs("unused", "Rust engineer");
        config.resume_path = dir.path().join("missing_resume.txt");

        let outcome = match_or_empty(&config);
        assert!(outcome.is_empty());
        let err = outcome.error.expect("expected NotFoundError");
        assert_eq!(err.path, config.resume_path);
    }

    #[test]
    fn test_missing_job_description_yields_empty_with_error() {
        let (dir, mut config) = write_docs("Rust engineer", "unused");
        config.job_description_path = dir.path().join("missing_jd.txt");

        let outcome = match_or_empty(&config);
        assert!(outcome.is_empty());
        let err = outcome.error.expect("expected NotFoundError");
        assert_eq!(err.path, config.job_description_path);
    }

    #[test]
    fn test_resume_is_checked_before_job_description() {
        let config = MatchConfig::new("/nonexistent/resume.txt", "/nonexistent/jd.txt");
        let err = match_documents(&config).unwrap_err();
        assert_eq!(err.path, Path::new("/nonexistent/resume.txt"));
    }

    #[test]
    fn test_match_is_symmetric_across_files() {
        let (_dir, config) = write_docs("Rust Go SQL", "sql rust java");
        let swapped = MatchConfig::new(
            config.job_description_path.clone(),
            config.resume_path.clone(),
        );
        assert_eq!(
            match_documents(&config).unwrap(),
            match_documents(&swapped).unwrap()
        );
    }
}
