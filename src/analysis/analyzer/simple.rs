use std::fmt::Debug;
use std::fmt::Formatter;
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::error::Result;

/// Analyzer that lowercases and splits text into word tokens.
///
/// This is the pipeline behind keyword matching: keywords are stored
/// lowercase and compared verbatim against these tokens, so no stemming
/// is applied.
pub struct SimpleAnalyzer {
    inner: PipelineAnalyzer,
}

impl SimpleAnalyzer {
    pub fn new() -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::new()?);
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("simple".to_string());

        Ok(Self { inner: analyzer })
    }
}

impl Default for SimpleAnalyzer {
    fn default() -> Self {
        Self::new().expect("Simple analyzer should be creatable with default settings")
    }
}

impl Analyzer for SimpleAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "simple"
    }
}

impl Debug for SimpleAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimpleAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}
