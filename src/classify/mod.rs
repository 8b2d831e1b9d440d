//! Text classification for service recommendation.
//!
//! This module maps free-text customer complaints to service titles:
//!
//! - `Classifier` trait: the seam the match resolver talks to
//! - `BayesModel`: multinomial Naive Bayes parameters, the serializable
//!   training artifact
//! - `ServiceClassifier`: a `BayesModel` paired with the analyzer that
//!   normalizes both training examples and queries
//! - `TrainingExample`: one labeled training pair
//!
//! # Example
//!
//! ```rust,no_run
//! use garagist::analysis::analyzer::StemmingAnalyzer;
//! use garagist::classify::{builtin_training_set, Classifier, ServiceClassifier};
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let analyzer = Arc::new(StemmingAnalyzer::new()?);
//! let classifier = ServiceClassifier::train(&builtin_training_set(), analyzer)?;
//!
//! let prediction = classifier.classify("my brakes are squealing")?;
//! println!("{} ({:.2})", prediction.label, prediction.confidence);
//! # Ok(())
//! # }
//! ```

mod bayes;
mod classifier;
mod service;
mod training;

pub use bayes::BayesModel;
pub use classifier::{Classifier, Prediction};
pub use service::ServiceClassifier;
pub use training::{builtin_training_set, TrainingExample};
