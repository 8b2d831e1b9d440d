//! Classifier trait definition.

use crate::error::Result;

/// A prediction produced by a classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// The predicted service title.
    pub label: String,
    /// Renormalized confidence in `[0, 1]`: the winning label's score
    /// divided by the sum of scores across all labels.
    pub confidence: f64,
}

/// Classifier trait.
///
/// Implementations map a raw query to a service title with a confidence.
/// The match resolver depends on this trait rather than a concrete model
/// so the decision policy can be exercised with a stub.
pub trait Classifier: Send + Sync {
    /// Predict the best label for a given query.
    ///
    /// Must not fail on unseen input; a query with no known tokens
    /// degrades to a low-confidence prediction.
    fn classify(&self, query: &str) -> Result<Prediction>;

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}
