//! Configuration options for parsing.

/// Configuration options for [`ParsingContext`](crate::expression::ParsingContext).
///
/// # Example
///
/// ```
/// use stylexpr_core::ParseOptions;
///
/// let options = ParseOptions { max_depth: 32 };
/// assert!(options.max_depth < ParseOptions::default().max_depth);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum nesting depth of an expression (for recursion protection).
    ///
    /// Default: 256
    pub max_depth: usize,
}

impl ParseOptions {
    pub const DEFAULT: ParseOptions = ParseOptions { max_depth: 256 };
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}
