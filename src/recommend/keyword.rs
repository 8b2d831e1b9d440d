//! Keyword overlap scoring.

use std::collections::HashSet;

use crate::catalog::ServiceDefinition;

/// Score a query against a service's keyword list by token overlap.
///
/// Returns the fraction of the service's keywords found verbatim among
/// the query tokens, in `[0, 1]`. A service with no keywords scores 0
/// for every query. Pure and deterministic.
pub fn keyword_score(query_tokens: &HashSet<String>, service: &ServiceDefinition) -> f64 {
    if service.keywords.is_empty() {
        return 0.0;
    }

    let matches = service
        .keywords
        .iter()
        .filter(|keyword| query_tokens.contains(keyword.as_str()))
        .count();

    matches as f64 / service.keywords.len() as f64
}
