//! Convenience wrapper pairing a rule set with its filter.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::hash::Hash;

use crate::apply::{apply_iter, apply_rules, Applier};
use crate::builder::build_rules;
use crate::rules::RuleSet;
use crate::token::Token;

/// A rule set learned from one example sequence, ready to filter inputs.
///
/// Holds nothing beyond the rule set; every method is a thin call into
/// [`build_rules`] or [`apply_rules`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Taboo<T: Token> {
    rules: RuleSet<T>,
    none: HashSet<T>,
}

impl<T: Token> Taboo<T> {
    /// Learn rules from an example sequence.
    pub fn new<I: IntoIterator<Item = T>>(example: I) -> Self {
        Self::from_rules(build_rules(example))
    }

    /// Wrap an existing rule set.
    pub fn from_rules(rules: RuleSet<T>) -> Self {
        Self {
            rules,
            none: HashSet::new(),
        }
    }

    /// Tokens that may not directly follow `token`. Empty if unrestricted.
    pub fn no_follow<Q>(&self, token: &Q) -> &HashSet<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.rules.forbidden_successors(token).unwrap_or(&self.none)
    }

    /// Filter one input.
    pub fn reduce<I: IntoIterator<Item = T>>(&self, tokens: I) -> Vec<T> {
        apply_rules(&self.rules, tokens)
    }

    /// Filter one input lazily.
    pub fn reduce_iter<I: IntoIterator<Item = T>>(&self, tokens: I) -> Applier<'_, T, I::IntoIter> {
        apply_iter(&self.rules, tokens)
    }

    /// Filter each input independently with the same rules.
    pub fn reduce_all<I, S>(&self, inputs: I) -> Vec<Vec<T>>
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = T>,
    {
        inputs.into_iter().map(|input| self.reduce(input)).collect()
    }

    /// Borrow the rule set.
    pub fn rules(&self) -> &RuleSet<T> {
        &self.rules
    }

    /// Unwrap into the rule set.
    pub fn into_rules(self) -> RuleSet<T> {
        self.rules
    }
}

impl<T: Token> From<RuleSet<T>> for Taboo<T> {
    fn from(rules: RuleSet<T>) -> Self {
        Self::from_rules(rules)
    }
}
