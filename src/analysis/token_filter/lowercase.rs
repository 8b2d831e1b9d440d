//! Lowercase filter implementation.
//!
//! Normalizes text casing so that matching is case-insensitive.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that converts tokens to lowercase.
///
/// # Examples
///
/// ```
/// use garagist::analysis::token_filter::Filter;
/// use garagist::analysis::token_filter::lowercase::LowercaseFilter;
/// use garagist::analysis::token::Token;
///
/// let filter = LowercaseFilter::new();
/// let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
/// let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
///
/// assert_eq!(filtered[0].text, "hello");
/// assert_eq!(filtered[1].text, "world");
/// ```
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                let lowered = token.text.to_lowercase();
                token.with_text(lowered)
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_lowercase_filter() {
        let filter = LowercaseFilter::new();
        let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[1].text, "world");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LowercaseFilter::new().name(), "lowercase");
    }
}
