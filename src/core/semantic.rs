use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use thiserror::Error;

/// Errors that can occur while loading a similarity model
///
/// Load failures are never fatal to the service: the engine runs without a
/// model and semantic scoring contributes zero.
#[derive(Debug, Error)]
pub enum SimilarityError {
    #[error("failed to read embeddings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse embeddings file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("embeddings file contains no vectors")]
    Empty,
}

/// Narrow capability interface for term-to-term similarity
///
/// The engine takes this as an optional injected dependency: present, it
/// enables semantic skill matching; absent, scoring degrades to
/// lexical-only without rescaling the lexical weight.
pub trait SimilarityModel: Send + Sync {
    /// Similarity between two skill terms, in [0, 1]
    fn similarity(&self, a: &str, b: &str) -> f64;
}

/// Word-embedding backed similarity model
///
/// Loads a JSON map of lower-cased term to vector. Multi-word terms that
/// have no entry of their own fall back to the mean of their known token
/// vectors; terms with no known tokens score 0 against everything.
pub struct EmbeddingModel {
    vectors: HashMap<String, Vec<f32>>,
    dims: usize,
}

impl EmbeddingModel {
    /// Load an embedding model from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SimilarityError> {
        let file = File::open(path)?;
        let vectors: HashMap<String, Vec<f32>> = serde_json::from_reader(BufReader::new(file))?;
        let dims = vectors
            .values()
            .map(|v| v.len())
            .next()
            .ok_or(SimilarityError::Empty)?;

        Ok(Self { vectors, dims })
    }

    /// Number of terms in the vocabulary
    pub fn vocabulary_size(&self) -> usize {
        self.vectors.len()
    }

    fn term_vector(&self, term: &str) -> Option<Vec<f32>> {
        let term = term.trim().to_lowercase();
        if let Some(v) = self.vectors.get(&term) {
            return Some(v.clone());
        }

        // Mean of known token vectors for multi-word terms
        let mut acc = vec![0.0f32; self.dims];
        let mut known = 0usize;
        for token in term.split_whitespace() {
            if let Some(v) = self.vectors.get(token) {
                for (a, b) in acc.iter_mut().zip(v) {
                    *a += b;
                }
                known += 1;
            }
        }

        if known == 0 {
            return None;
        }
        for a in acc.iter_mut() {
            *a /= known as f32;
        }
        Some(acc)
    }
}

impl SimilarityModel for EmbeddingModel {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let (va, vb) = match (self.term_vector(a), self.term_vector(b)) {
            (Some(va), Some(vb)) => (va, vb),
            _ => return 0.0,
        };

        cosine(&va, &vb).clamp(0.0, 1.0)
    }
}

/// Cosine similarity between two vectors; zero-norm vectors score 0
fn cosine(a: &[f32], b: &[f32]) -> f64 {
    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (x, y) in a.iter().zip(b) {
        dot += f64::from(*x) * f64::from(*y);
        norm_a += f64::from(*x) * f64::from(*x);
        norm_b += f64::from(*y) * f64::from(*y);
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}
