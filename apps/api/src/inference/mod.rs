//! Pretrained text classifiers: resume category and recommended job title.
//!
//! Models are trained offline and exported as JSON artifacts (see `tfidf`).
//! `AppState` holds them as `Arc<dyn TextClassifier>`, loaded once at startup.

use std::path::PathBuf;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

pub mod tfidf;

pub const CATEGORY_MODEL_FILE: &str = "category.json";
pub const JOB_MODEL_FILE: &str = "job_recommendation.json";

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed model artifact: {0}")]
    Format(#[from] serde_json::Error),

    #[error("inconsistent model artifact: {0}")]
    Shape(String),
}

/// A single-label text classifier. Prediction is infallible once loaded.
pub trait TextClassifier: Send + Sync {
    fn predict(&self, text: &str) -> String;
}

static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"http\S+\s").expect("valid url regex"));
static RT_CC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"RT|cc").expect("valid rt regex"));
static HASHTAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#\S+\s").expect("valid hashtag regex"));
static MENTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"@\S+").expect("valid mention regex"));
static PUNCT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r##"[!"#$%&'()*+,\-./:;<=>?@\[\\\]\^_`{|}~]"##).expect("valid punctuation regex")
});
static NON_ASCII_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\x00-\x7F]").expect("valid non-ascii regex"));
static SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid space regex"));

/// Normalizes resume text the same way the training corpus was normalized.
///
/// `RT` and `cc` are removed everywhere, including inside words; the models
/// were trained on text cleaned this way.
pub fn clean_resume(text: &str) -> String {
    let text = URL_RE.replace_all(text, " ");
    let text = RT_CC_RE.replace_all(&text, " ");
    let text = HASHTAG_RE.replace_all(&text, " ");
    let text = MENTION_RE.replace_all(&text, "  ");
    let text = PUNCT_RE.replace_all(&text, " ");
    let text = NON_ASCII_RE.replace_all(&text, " ");
    let text = SPACE_RE.replace_all(&text, " ");
    text.trim().to_string()
}
