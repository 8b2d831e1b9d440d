//! Query-to-service match resolution.
//!
//! Combines two signals into one recommendation:
//!
//! - the trained classifier's prediction and confidence
//! - keyword overlap between the query and each service's keyword list
//!
//! The resolver applies a fixed threshold policy; the thresholds are
//! part of the observable contract and are pinned by tests.

mod keyword;
mod resolver;

pub use keyword::keyword_score;
pub use resolver::{
    MatchResolver, MatchResult, CLASSIFIER_TRUST_THRESHOLD, DISPLAY_THRESHOLD, GENERAL_CATEGORY,
    KEYWORD_FALLBACK_THRESHOLD,
};
