//! TF-IDF + linear classifier loaded from a JSON artifact.
//!
//! The artifact mirrors a fitted scikit-learn `TfidfVectorizer` followed by a
//! linear model:
//!
//! ```json
//! {
//!   "labels": ["Data Science", "Web Designing"],
//!   "vocabulary": {"python": 0, "css": 1},
//!   "idf": [1.2, 1.5],
//!   "coefficients": [[0.9, -0.4], [-0.9, 0.4]],
//!   "intercepts": [0.0, 0.0],
//!   "ngram_range": [1, 1],
//!   "sublinear_tf": false,
//!   "stop_words": []
//! }
//! ```
//!
//! Tokenization follows the vectorizer defaults: lowercase, tokens of two or
//! more word characters, L2-normalized tf·idf.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use tracing::info;

use crate::inference::{ModelError, TextClassifier};

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("valid token regex"));

#[derive(Debug, Deserialize)]
pub struct ModelArtifact {
    pub labels: Vec<String>,
    pub vocabulary: HashMap<String, usize>,
    pub idf: Vec<f32>,
    /// One row per label, or a single row for binary models.
    pub coefficients: Vec<Vec<f32>>,
    pub intercepts: Vec<f32>,
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),
    #[serde(default)]
    pub sublinear_tf: bool,
    #[serde(default)]
    pub stop_words: Vec<String>,
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

#[derive(Debug)]
pub struct TfidfClassifier {
    labels: Vec<String>,
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
    coefficients: Vec<Vec<f32>>,
    intercepts: Vec<f32>,
    ngram_range: (usize, usize),
    sublinear_tf: bool,
    stop_words: HashSet<String>,
}

impl TfidfClassifier {
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let artifact: ModelArtifact = serde_json::from_str(&raw)?;
        let model = Self::from_artifact(artifact)?;
        info!(
            "Loaded classifier {} ({} labels, {} terms)",
            path.display(),
            model.labels.len(),
            model.vocabulary.len()
        );
        Ok(model)
    }

    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, ModelError> {
        let n_labels = artifact.labels.len();
        let n_terms = artifact.idf.len();

        if n_labels < 2 {
            return Err(ModelError::Shape(format!(
                "need at least 2 labels, got {n_labels}"
            )));
        }
        let binary = n_labels == 2 && artifact.coefficients.len() == 1;
        let expected_rows = if binary { 1 } else { n_labels };
        if artifact.coefficients.len() != expected_rows {
            return Err(ModelError::Shape(format!(
                "{} coefficient rows for {n_labels} labels",
                artifact.coefficients.len()
            )));
        }
        if artifact.intercepts.len() != expected_rows {
            return Err(ModelError::Shape(format!(
                "{} intercepts for {expected_rows} coefficient rows",
                artifact.intercepts.len()
            )));
        }
        if let Some(row) = artifact.coefficients.iter().find(|r| r.len() != n_terms) {
            return Err(ModelError::Shape(format!(
                "coefficient row has {} terms, idf has {n_terms}",
                row.len()
            )));
        }
        if let Some((term, idx)) = artifact.vocabulary.iter().find(|(_, idx)| **idx >= n_terms) {
            return Err(ModelError::Shape(format!(
                "term {term:?} maps to index {idx}, idf has {n_terms}"
            )));
        }
        let (min_n, max_n) = artifact.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(ModelError::Shape(format!(
                "invalid ngram_range ({min_n}, {max_n})"
            )));
        }

        Ok(Self {
            labels: artifact.labels,
            vocabulary: artifact.vocabulary,
            idf: artifact.idf,
            coefficients: artifact.coefficients,
            intercepts: artifact.intercepts,
            ngram_range: artifact.ngram_range,
            sublinear_tf: artifact.sublinear_tf,
            stop_words: artifact.stop_words.into_iter().collect(),
        })
    }

    /// Sparse, L2-normalized tf·idf vector as (term index, weight).
    fn vectorize(&self, text: &str) -> Vec<(usize, f32)> {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = TOKEN_RE
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|t| !self.stop_words.contains(*t))
            .collect();

        let mut counts: HashMap<usize, f32> = HashMap::new();
        let (min_n, max_n) = self.ngram_range;
        for n in min_n..=max_n {
            for window in tokens.windows(n) {
                let gram = window.join(" ");
                if let Some(&idx) = self.vocabulary.get(&gram) {
                    *counts.entry(idx).or_insert(0.0) += 1.0;
                }
            }
        }

        let mut weights: Vec<(usize, f32)> = counts
            .into_iter()
            .map(|(idx, tf)| {
                let tf = if self.sublinear_tf { 1.0 + tf.ln() } else { tf };
                (idx, tf * self.idf[idx])
            })
            .collect();

        let norm = weights.iter().map(|(_, w)| w * w).sum::<f32>().sqrt();
        if norm > 0.0 {
            for (_, w) in &mut weights {
                *w /= norm;
            }
        }
        weights
    }

    fn decision(&self, row: usize, x: &[(usize, f32)]) -> f32 {
        let coef = &self.coefficients[row];
        self.intercepts[row] + x.iter().map(|&(idx, w)| coef[idx] * w).sum::<f32>()
    }
}

impl TextClassifier for TfidfClassifier {
    fn predict(&self, text: &str) -> String {
        let x = self.vectorize(text);

        let best = if self.coefficients.len() == 1 {
            usize::from(self.decision(0, &x) > 0.0)
        } else {
            (0..self.coefficients.len())
                .map(|row| (row, self.decision(row, &x)))
                .fold((0, f32::NEG_INFINITY), |best, cur| {
                    if cur.1 > best.1 {
                        cur
                    } else {
                        best
                    }
                })
                .0
        };

        self.labels[best].clone()
    }
}
