//! Trained service classifier with on-disk persistence.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::analysis::analyzer::Analyzer;
use crate::classify::bayes::BayesModel;
use crate::classify::classifier::{Classifier, Prediction};
use crate::classify::training::TrainingExample;
use crate::error::{GaragistError, Result};

/// A [`BayesModel`] paired with the analyzer that normalizes text.
///
/// The same analyzer instance is used for training examples and for
/// incoming queries, so both sides see identical stems. The model is
/// never mutated after construction.
pub struct ServiceClassifier {
    analyzer: Arc<dyn Analyzer>,
    model: BayesModel,
}

impl std::fmt::Debug for ServiceClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceClassifier")
            .field("analyzer", &self.analyzer.name())
            .field("labels", &self.model.labels().len())
            .field("vocabulary_size", &self.model.vocabulary_size())
            .finish()
    }
}

impl ServiceClassifier {
    /// Train a classifier from labeled examples.
    pub fn train(samples: &[TrainingExample], analyzer: Arc<dyn Analyzer>) -> Result<Self> {
        let mut documents = Vec::with_capacity(samples.len());
        for sample in samples {
            let tokens = normalize(&analyzer, &sample.text)?;
            documents.push((tokens, sample.label.clone()));
        }

        let model = BayesModel::fit(&documents)?;
        Ok(ServiceClassifier { analyzer, model })
    }

    /// Load a previously trained model artifact from disk.
    pub fn load(path: &Path, analyzer: Arc<dyn Analyzer>) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            GaragistError::classifier(format!(
                "Failed to read classifier artifact {}: {e}",
                path.display()
            ))
        })?;
        let model: BayesModel = serde_json::from_str(&content)?;
        Ok(ServiceClassifier { analyzer, model })
    }

    /// Serialize the trained model to disk.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(&self.model)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load the artifact at `path` if it exists, otherwise train from
    /// `samples` and persist the result for the next start.
    ///
    /// A persisted artifact is used as-is; it is not validated against
    /// the current catalog. Any failure here is fatal to the
    /// recommendation subsystem and is propagated to the caller.
    pub fn load_or_train(
        path: &Path,
        samples: &[TrainingExample],
        analyzer: Arc<dyn Analyzer>,
    ) -> Result<Self> {
        if path.exists() {
            let classifier = Self::load(path, analyzer)?;
            info!(
                path = %path.display(),
                labels = classifier.model.labels().len(),
                "loaded classifier artifact"
            );
            Ok(classifier)
        } else {
            let classifier = Self::train(samples, analyzer)?;
            classifier.save(path)?;
            info!(
                path = %path.display(),
                examples = samples.len(),
                "trained classifier and persisted artifact"
            );
            Ok(classifier)
        }
    }

    /// Labels the model can emit.
    pub fn labels(&self) -> &[String] {
        self.model.labels()
    }
}

impl Classifier for ServiceClassifier {
    fn classify(&self, query: &str) -> Result<Prediction> {
        let tokens = normalize(&self.analyzer, query)?;
        let (label, confidence) = self.model.best(&tokens);
        Ok(Prediction { label, confidence })
    }

    fn name(&self) -> &str {
        "bayes"
    }
}

fn normalize(analyzer: &Arc<dyn Analyzer>, text: &str) -> Result<Vec<String>> {
    Ok(analyzer.analyze(text)?.map(|token| token.text).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::StemmingAnalyzer;
    use crate::classify::training::builtin_training_set;
    use tempfile::TempDir;

    fn trained() -> ServiceClassifier {
        let analyzer = Arc::new(StemmingAnalyzer::new().unwrap());
        ServiceClassifier::train(&builtin_training_set(), analyzer).unwrap()
    }

    #[test]
    fn test_training_example_classifies_to_its_label() {
        let classifier = trained();

        let prediction = classifier.classify("Engine won't turn over").unwrap();
        assert_eq!(prediction.label, "Battery Replacement");
        assert!(prediction.confidence > 0.6);
    }

    #[test]
    fn test_paraphrase_still_resolves() {
        let classifier = trained();

        let prediction = classifier.classify("squealing noise when I brake").unwrap();
        assert_eq!(prediction.label, "Brake Inspection");
    }

    #[test]
    fn test_gibberish_has_low_confidence() {
        let classifier = trained();

        let prediction = classifier.classify("asdf qwer zxcv").unwrap();
        assert!(prediction.confidence < 0.15);
    }

    #[test]
    fn test_confidence_is_renormalized() {
        let classifier = trained();

        let prediction = classifier.classify("oil change please").unwrap();
        assert!((0.0..=1.0).contains(&prediction.confidence));
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("classifier.json");
        let classifier = trained();
        classifier.save(&path).unwrap();

        let analyzer = Arc::new(StemmingAnalyzer::new().unwrap());
        let restored = ServiceClassifier::load(&path, analyzer).unwrap();

        let a = classifier.classify("transmission is slipping").unwrap();
        let b = restored.classify("transmission is slipping").unwrap();
        assert_eq!(a.label, b.label);
        assert!((a.confidence - b.confidence).abs() < 1e-12);
    }

    #[test]
    fn test_load_or_train_creates_artifact() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("classifier.json");
        assert!(!path.exists());

        let analyzer = Arc::new(StemmingAnalyzer::new().unwrap());
        let _ = ServiceClassifier::load_or_train(&path, &builtin_training_set(), analyzer).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_load_missing_artifact_fails() {
        let analyzer = Arc::new(StemmingAnalyzer::new().unwrap());
        let result = ServiceClassifier::load(Path::new("/nonexistent/classifier.json"), analyzer);
        assert!(result.is_err());
    }
}
