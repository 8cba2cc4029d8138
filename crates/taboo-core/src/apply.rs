//! Greedy rule application.
//!
//! Tokens are checked against the last token that survived filtering, not
//! the last token read. A skipped token never becomes the context for the
//! next check, so a long forbidden run collapses behind one retained
//! token.

use std::iter::FusedIterator;

use tracing::trace;

use crate::rules::RuleSet;
use crate::token::Token;

/// Counts from one application of a rule set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyStats {
    /// Tokens appended to the result.
    pub kept: usize,
    /// Tokens dropped because they were forbidden after the last kept one.
    pub skipped: usize,
}

impl ApplyStats {
    /// Number of input tokens examined.
    pub fn total(&self) -> usize {
        self.kept + self.skipped
    }
}

/// Filter `tokens` through `rules`, returning the retained tokens in order.
///
/// The result is a subsequence of the input. Tokens without an entry in
/// the rule set are never removed on their own account.
///
/// ```
/// use taboo_core::{apply_rules, build_rules};
///
/// let rules = build_rules(["a", "c", "a", "b"]);
/// let result = apply_rules(&rules, ["a", "c", "b", "x", "c", "a"]);
/// assert_eq!(result, vec!["a", "x", "c"]);
/// ```
pub fn apply_rules<T, I>(rules: &RuleSet<T>, tokens: I) -> Vec<T>
where
    T: Token,
    I: IntoIterator<Item = T>,
{
    apply_rules_with_stats(rules, tokens).0
}

/// Like [`apply_rules`], also reporting how many tokens were kept and
/// skipped.
pub fn apply_rules_with_stats<T, I>(rules: &RuleSet<T>, tokens: I) -> (Vec<T>, ApplyStats)
where
    T: Token,
    I: IntoIterator<Item = T>,
{
    let mut kept: Vec<T> = Vec::new();
    let mut stats = ApplyStats::default();

    for item in tokens {
        if let Some(last) = kept.last() {
            if rules.is_forbidden(last, &item) {
                stats.skipped += 1;
                trace!(position = stats.total() - 1, "skipped forbidden successor");
                continue;
            }
        }
        kept.push(item);
        stats.kept += 1;
    }

    (kept, stats)
}

/// Lazily filter `tokens` through `rules`.
///
/// Yields exactly what [`apply_rules`] would return, one token at a time.
pub fn apply_iter<T, I>(rules: &RuleSet<T>, tokens: I) -> Applier<'_, T, I::IntoIter>
where
    T: Token,
    I: IntoIterator<Item = T>,
{
    Applier::new(rules, tokens.into_iter())
}

/// Iterator adapter returned by [`apply_iter`] and [`TabooExt::taboo`].
#[derive(Debug, Clone)]
pub struct Applier<'r, T, I> {
    rules: &'r RuleSet<T>,
    tokens: I,
    last: Option<T>,
    stats: ApplyStats,
}

impl<'r, T: Token, I: Iterator<Item = T>> Applier<'r, T, I> {
    fn new(rules: &'r RuleSet<T>, tokens: I) -> Self {
        Self {
            rules,
            tokens,
            last: None,
            stats: ApplyStats::default(),
        }
    }

    /// Counts for the tokens consumed so far.
    pub fn stats(&self) -> ApplyStats {
        self.stats
    }
}

impl<T: Token, I: Iterator<Item = T>> Iterator for Applier<'_, T, I> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        for item in self.tokens.by_ref() {
            if let Some(last) = &self.last {
                if self.rules.is_forbidden(last, &item) {
                    self.stats.skipped += 1;
                    trace!(position = self.stats.total() - 1, "skipped forbidden successor");
                    continue;
                }
            }
            self.last = Some(item.clone());
            self.stats.kept += 1;
            return Some(item);
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.tokens.size_hint();
        (0, upper)
    }
}

impl<T: Token, I: FusedIterator<Item = T>> FusedIterator for Applier<'_, T, I> {}

/// Extension trait adding rule filtering to any token iterator.
pub trait TabooExt: Iterator + Sized
where
    Self::Item: Token,
{
    /// Drop tokens forbidden after the last retained token.
    ///
    /// ```
    /// use taboo_core::{build_rules, TabooExt};
    ///
    /// let rules = build_rules("aa".chars());
    /// let kept: String = "aaab".chars().taboo(&rules).collect();
    /// assert_eq!(kept, "ab");
    /// ```
    fn taboo(self, rules: &RuleSet<Self::Item>) -> Applier<'_, Self::Item, Self> {
        Applier::new(rules, self)
    }
}

impl<I> TabooExt for I
where
    I: Iterator,
    I::Item: Token,
{
}
