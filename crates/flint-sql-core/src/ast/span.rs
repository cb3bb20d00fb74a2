//! Token-range tracking for AST nodes.

/// An inclusive range of token indices into the parsed token sequence.
///
/// Unlike [`crate::lexer::Span`], which is a byte range into the source
/// text, a `TokenSpan` identifies the tokens a node was built from:
/// `start` is the index of the first consumed token and `end` the index
/// of the last (both inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSpan {
    /// Index of the first token (inclusive).
    pub start: usize,
    /// Index of the last token (inclusive).
    pub end: usize,
}

impl TokenSpan {
    /// Creates a new token span.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the number of tokens covered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// A single-token span never covers zero tokens.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Merges two spans into one that covers both.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        let start = if self.start < other.start {
            self.start
        } else {
            other.start
        };
        let end = if self.end > other.end {
            self.end
        } else {
            other.end
        };
        Self { start, end }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_is_inclusive() {
        assert_eq!(TokenSpan::new(0, 0).len(), 1);
        assert_eq!(TokenSpan::new(2, 5).len(), 4);
    }

    #[test]
    fn test_merge() {
        let merged = TokenSpan::new(3, 7).merge(TokenSpan::new(0, 4));
        assert_eq!(merged, TokenSpan::new(0, 7));
    }
}
