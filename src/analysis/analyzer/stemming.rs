use std::fmt::Debug;
use std::fmt::Formatter;
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stem::StemFilter;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::error::Result;

/// Analyzer that lowercases, splits, and Porter-stems text.
///
/// This is the normalization applied to classifier training examples and
/// to incoming queries. Training and inference must share one instance's
/// configuration so that both sides produce identical stems.
pub struct StemmingAnalyzer {
    inner: PipelineAnalyzer,
}

impl StemmingAnalyzer {
    pub fn new() -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::new()?);
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StemFilter::new()))
            .with_name("stemming".to_string());

        Ok(Self { inner: analyzer })
    }
}

impl Default for StemmingAnalyzer {
    fn default() -> Self {
        Self::new().expect("Stemming analyzer should be creatable with default settings")
    }
}

impl Analyzer for StemmingAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "stemming"
    }
}

impl Debug for StemmingAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StemmingAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_stemming_analyzer() {
        let analyzer = StemmingAnalyzer::new().unwrap();

        let tokens: Vec<Token> = analyzer
            .analyze("My brakes are squealing loudly")
            .unwrap()
            .collect();

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["my", "brake", "ar", "squeal", "loudli"]);
    }

    #[test]
    fn test_query_and_training_forms_collapse() {
        let analyzer = StemmingAnalyzer::new().unwrap();

        let stems = |text: &str| -> Vec<String> {
            analyzer.analyze(text).unwrap().map(|t| t.text).collect()
        };

        assert_eq!(stems("replacing batteries"), stems("replace battery"));
    }

    #[test]
    fn test_stemming_analyzer_name() {
        let analyzer = StemmingAnalyzer::new().unwrap();

        assert_eq!(analyzer.name(), "stemming");
    }
}
