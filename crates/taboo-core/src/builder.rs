//! Rule set construction from example sequences.
//!
//! Every adjacent pair `(prev, next)` in an example sequence becomes the
//! rule "`next` may not directly follow `prev`". The builder consumes
//! tokens one at a time, so examples can be streamed in pieces.

use tracing::debug;

use crate::rules::RuleSet;
use crate::token::Token;

/// Incremental rule set builder.
///
/// The preceding token is always the previous token pushed, never
/// influenced by any later filtering. Use [`RuleBuilder::break_chain`]
/// between unrelated example runs so the last token of one run is not
/// paired with the first token of the next.
#[derive(Debug, Clone)]
pub struct RuleBuilder<T> {
    rules: RuleSet<T>,
    last: Option<T>,
    seen: usize,
}

impl<T: Token> Default for RuleBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Token> RuleBuilder<T> {
    /// Create a builder with no rules.
    pub fn new() -> Self {
        Self {
            rules: RuleSet::new(),
            last: None,
            seen: 0,
        }
    }

    /// Feed the next example token.
    pub fn push(&mut self, token: T) {
        if let Some(prev) = self.last.take() {
            self.rules.forbid(prev, token.clone());
        }
        self.last = Some(token);
        self.seen += 1;
    }

    /// End the current example run.
    ///
    /// The next pushed token starts a fresh chain and records no
    /// adjacency with the token before the break.
    pub fn break_chain(&mut self) {
        self.last = None;
    }

    /// The most recently pushed token of the current run.
    pub fn last(&self) -> Option<&T> {
        self.last.as_ref()
    }

    /// Number of tokens pushed so far, across all runs.
    pub fn tokens_seen(&self) -> usize {
        self.seen
    }

    /// Finalize and return the rule set.
    pub fn finish(self) -> RuleSet<T> {
        debug!(
            tokens = self.seen,
            restricted = self.rules.len(),
            pairs = self.rules.pair_count(),
            "rule set built"
        );
        self.rules
    }
}

impl<T: Token> Extend<T> for RuleBuilder<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, tokens: I) {
        for token in tokens {
            self.push(token);
        }
    }
}

/// Build a rule set from one example sequence.
///
/// Empty and single-token sequences yield an empty rule set. The final
/// token never gets an entry of its own since nothing follows it.
///
/// ```
/// use taboo_core::build_rules;
///
/// let rules = build_rules(["a", "c", "a", "b"]);
/// assert!(rules.is_forbidden(&"a", &"c"));
/// assert!(rules.is_forbidden(&"a", &"b"));
/// assert!(rules.is_forbidden(&"c", &"a"));
/// assert!(rules.forbidden_successors(&"b").is_none());
/// ```
pub fn build_rules<T, I>(tokens: I) -> RuleSet<T>
where
    T: Token,
    I: IntoIterator<Item = T>,
{
    let mut builder = RuleBuilder::new();
    builder.extend(tokens);
    builder.finish()
}
