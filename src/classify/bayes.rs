//! Multinomial Naive Bayes model over token counts.
//!
//! The model is the trained artifact that gets persisted to disk: plain
//! counts plus a smoothing constant, all serde-serializable. Text
//! normalization happens outside; the model only ever sees token lists.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{GaragistError, Result};

/// Laplace smoothing constant applied to token and prior estimates.
const SMOOTHING: f64 = 1.0;

/// Multinomial Naive Bayes parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BayesModel {
    /// Labels in training order; scores are reported per label.
    labels: Vec<String>,
    /// Vocabulary: token -> column index.
    vocabulary: HashMap<String, usize>,
    /// Token counts per label, indexed `[label][token]`.
    token_counts: Vec<Vec<u32>>,
    /// Training documents per label.
    doc_counts: Vec<u32>,
    /// Total tokens seen per label.
    token_totals: Vec<u32>,
    /// Total training documents.
    total_docs: u32,
    /// Laplace smoothing constant used at fit time.
    smoothing: f64,
}

impl BayesModel {
    /// Fit a model from `(tokens, label)` training documents.
    pub fn fit(documents: &[(Vec<String>, String)]) -> Result<Self> {
        if documents.is_empty() {
            return Err(GaragistError::classifier("Training set cannot be empty"));
        }

        let mut labels: Vec<String> = Vec::new();
        let mut label_index: HashMap<&str, usize> = HashMap::new();
        for (_, label) in documents {
            if !label_index.contains_key(label.as_str()) {
                label_index.insert(label, labels.len());
                labels.push(label.clone());
            }
        }

        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        for (tokens, _) in documents {
            for token in tokens {
                if !vocabulary.contains_key(token) {
                    let idx = vocabulary.len();
                    vocabulary.insert(token.clone(), idx);
                }
            }
        }

        let mut token_counts = vec![vec![0u32; vocabulary.len()]; labels.len()];
        let mut doc_counts = vec![0u32; labels.len()];
        let mut token_totals = vec![0u32; labels.len()];

        for (tokens, label) in documents {
            let l = label_index[label.as_str()];
            doc_counts[l] += 1;
            for token in tokens {
                let t = vocabulary[token];
                token_counts[l][t] += 1;
                token_totals[l] += 1;
            }
        }

        Ok(BayesModel {
            labels,
            vocabulary,
            token_counts,
            doc_counts,
            token_totals,
            total_docs: documents.len() as u32,
            smoothing: SMOOTHING,
        })
    }

    /// Score every label for a tokenized query.
    ///
    /// Returns positive scores, one per label, renormalized so they sum
    /// to 1. Log joints are max-shifted before exponentiation so a long
    /// query cannot underflow to all-zero scores.
    pub fn scores(&self, tokens: &[String]) -> Vec<(String, f64)> {
        let n_labels = self.labels.len();
        let vocab_size = self.vocabulary.len() as f64;

        let mut log_scores = Vec::with_capacity(n_labels);
        for l in 0..n_labels {
            // log P(label)
            let prior = (self.doc_counts[l] as f64 + self.smoothing)
                / (self.total_docs as f64 + self.smoothing * n_labels as f64);
            let mut score = prior.ln();

            // sum of log P(token | label) over in-vocabulary tokens
            let denom = self.token_totals[l] as f64 + self.smoothing * vocab_size;
            for token in tokens {
                if let Some(&t) = self.vocabulary.get(token) {
                    let count = self.token_counts[l][t] as f64;
                    score += ((count + self.smoothing) / denom).ln();
                }
            }

            log_scores.push(score);
        }

        let max = log_scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let exp_scores: Vec<f64> = log_scores.iter().map(|s| (s - max).exp()).collect();
        let sum: f64 = exp_scores.iter().sum();

        self.labels
            .iter()
            .zip(exp_scores)
            .map(|(label, score)| (label.clone(), score / sum))
            .collect()
    }

    /// The best label and its renormalized score.
    pub fn best(&self, tokens: &[String]) -> (String, f64) {
        let scores = self.scores(tokens);
        scores
            .into_iter()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .expect("model always has at least one label")
    }

    /// Labels known to this model, in training order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Size of the training vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        text.split_whitespace().map(|t| t.to_string()).collect()
    }

    fn sample_model() -> BayesModel {
        BayesModel::fit(&[
            (tokens("oil change filter"), "Oil Change".to_string()),
            (tokens("oil leak drip"), "Oil Change".to_string()),
            (tokens("brake squeal grind"), "Brake Inspection".to_string()),
            (tokens("brake pedal soft"), "Brake Inspection".to_string()),
        ])
        .unwrap()
    }

    #[test]
    fn test_fit_rejects_empty_training_set() {
        assert!(BayesModel::fit(&[]).is_err());
    }

    #[test]
    fn test_scores_sum_to_one() {
        let model = sample_model();
        let scores = model.scores(&tokens("oil brake squeal"));

        let sum: f64 = scores.iter().map(|(_, s)| s).sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(scores.iter().all(|(_, s)| (0.0..=1.0).contains(s)));
    }

    #[test]
    fn test_best_label_matches_training_signal() {
        let model = sample_model();

        let (label, confidence) = model.best(&tokens("oil filter change"));
        assert_eq!(label, "Oil Change");
        assert!(confidence > 0.5);

        let (label, _) = model.best(&tokens("brake squeal"));
        assert_eq!(label, "Brake Inspection");
    }

    #[test]
    fn test_unseen_tokens_fall_back_to_priors() {
        let model = sample_model();

        // Nothing in vocabulary: scores collapse to the (uniform) priors.
        let scores = model.scores(&tokens("zzz qqq"));
        for (_, score) in &scores {
            assert!((score - 0.5).abs() < 1e-9);
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let model = sample_model();
        let json = serde_json::to_string(&model).unwrap();
        let restored: BayesModel = serde_json::from_str(&json).unwrap();

        let query = tokens("oil change");
        assert_eq!(model.best(&query), restored.best(&query));
    }
}
