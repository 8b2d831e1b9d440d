//! Match resolver: the decision policy combining classifier and keyword
//! signals.

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::catalog::{ServiceCatalog, ServiceDefinition};
use crate::classify::Classifier;
use crate::error::Result;
use crate::recommend::keyword::keyword_score;

/// Above this confidence the classifier's prediction is trusted outright
/// and no keyword scan happens.
pub const CLASSIFIER_TRUST_THRESHOLD: f64 = 0.6;

/// A keyword match must exceed this score to be considered a credible
/// fallback.
pub const KEYWORD_FALLBACK_THRESHOLD: f64 = 0.4;

/// Below this score the HTTP layer returns the generic "Need More Info"
/// response instead of a recommendation.
pub const DISPLAY_THRESHOLD: f64 = 0.15;

/// Category reported when no service could be matched at all.
pub const GENERAL_CATEGORY: &str = "General";

/// The outcome of resolving one query. Ephemeral, per-request.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    /// The matched service, if any.
    pub service: Option<ServiceDefinition>,
    /// Category of the matched service, or `"General"` when none matched.
    pub category: String,
    /// Combined score in `[0, 1]`: either the classifier confidence or
    /// the winning keyword overlap, depending on which signal won.
    pub score: f64,
}

impl MatchResult {
    /// The sentinel result for queries nothing could be matched against.
    fn need_more_info() -> Self {
        MatchResult {
            service: None,
            category: GENERAL_CATEGORY.to_string(),
            score: 0.0,
        }
    }
}

/// Combines classifier confidence and keyword overlap into one final
/// recommendation.
///
/// Decision policy, in order:
///
/// 1. If the classifier is confident (>= 0.6) and its predicted title
///    exists in the catalog, that service wins.
/// 2. Otherwise every service is keyword-scored and the best overlap is
///    considered credible when it exceeds 0.4; a credible keyword match
///    beats the classifier only when strictly greater than its
///    confidence, or when the predicted title resolved to nothing.
/// 3. Failing both, the classifier's match is returned as-is; if it
///    resolved to nothing the "Need More Info" sentinel is returned.
pub struct MatchResolver {
    catalog: Arc<ServiceCatalog>,
    classifier: Arc<dyn Classifier>,
    query_analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for MatchResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchResolver")
            .field("services", &self.catalog.len())
            .field("classifier", &self.classifier.name())
            .field("query_analyzer", &self.query_analyzer.name())
            .finish()
    }
}

impl MatchResolver {
    /// Create a resolver over a catalog and classifier. `query_analyzer`
    /// is the non-stemming pipeline used for keyword tokenization.
    pub fn new(
        catalog: Arc<ServiceCatalog>,
        classifier: Arc<dyn Classifier>,
        query_analyzer: Arc<dyn Analyzer>,
    ) -> Self {
        MatchResolver {
            catalog,
            classifier,
            query_analyzer,
        }
    }

    /// Resolve a query to a final recommendation.
    pub fn resolve(&self, query: &str) -> Result<MatchResult> {
        let prediction = self.classifier.classify(query)?;
        let classified = self.catalog.find_by_title(&prediction.label);

        if classified.is_none() || prediction.confidence < CLASSIFIER_TRUST_THRESHOLD {
            if let Some((keyword_service, score)) = self.best_keyword_match(query)? {
                if score > KEYWORD_FALLBACK_THRESHOLD {
                    // A credible keyword match loses to the classifier
                    // unless strictly greater than its confidence.
                    match classified {
                        Some(service) if prediction.confidence >= score => {
                            return Ok(classifier_result(service, prediction.confidence));
                        }
                        _ => {
                            return Ok(MatchResult {
                                category: keyword_service.category.clone(),
                                service: Some(keyword_service.clone()),
                                score,
                            });
                        }
                    }
                }
            }
        }

        match classified {
            Some(service) => Ok(classifier_result(service, prediction.confidence)),
            None => Ok(MatchResult::need_more_info()),
        }
    }

    /// Scan every service and return the highest keyword score.
    /// First-seen wins ties, so catalog order is significant.
    fn best_keyword_match(&self, query: &str) -> Result<Option<(&ServiceDefinition, f64)>> {
        let tokens: HashSet<String> = self
            .query_analyzer
            .analyze(query)?
            .map(|token| token.text)
            .collect();

        let mut best: Option<(&ServiceDefinition, f64)> = None;
        for service in self.catalog.services() {
            let score = keyword_score(&tokens, service);
            if best.is_none() || score > best.as_ref().map_or(0.0, |(_, s)| *s) {
                best = Some((service, score));
            }
        }

        Ok(best)
    }
}

fn classifier_result(service: &ServiceDefinition, confidence: f64) -> MatchResult {
    MatchResult {
        category: service.category.clone(),
        service: Some(service.clone()),
        score: confidence,
    }
}
