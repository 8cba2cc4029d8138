//! Forbidden-successor rule sets.

use std::borrow::Borrow;
use std::collections::hash_map;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::error::RuleError;
use crate::token::Token;

/// Mapping from a preceding token to the tokens that may not follow it.
///
/// Every key maps to a non-empty set. A token with no entry carries no
/// restriction. Rule sets are read-only during filtering, so one rule set
/// can serve any number of inputs, including from several threads at once.
#[derive(Debug, Clone)]
pub struct RuleSet<T> {
    rules: HashMap<T, HashSet<T>>,
}

impl<T: Token> Default for RuleSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Token> PartialEq for RuleSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rules == other.rules
    }
}

impl<T: Token> Eq for RuleSet<T> {}

impl<T: Token> RuleSet<T> {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Wrap a hand-built mapping.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::EmptySuccessorSet`] if any key maps to an
    /// empty set.
    pub fn from_map(rules: HashMap<T, HashSet<T>>) -> Result<Self, RuleError> {
        let empty = rules.values().filter(|set| set.is_empty()).count();
        if empty > 0 {
            return Err(RuleError::EmptySuccessorSet(empty));
        }
        Ok(Self { rules })
    }

    /// Record that `next` may not directly follow `prev`.
    pub(crate) fn forbid(&mut self, prev: T, next: T) -> bool {
        self.rules.entry(prev).or_default().insert(next)
    }

    /// Forbidden successors of `token`, or `None` if it is unrestricted.
    pub fn forbidden_successors<Q>(&self, token: &Q) -> Option<&HashSet<T>>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.rules.get(token)
    }

    /// Check whether `next` may not directly follow `prev`.
    pub fn is_forbidden(&self, prev: &T, next: &T) -> bool {
        self.rules
            .get(prev)
            .is_some_and(|forbidden| forbidden.contains(next))
    }

    /// Number of restricted preceding tokens.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if no token carries a restriction.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Total number of forbidden (preceding, successor) pairs.
    pub fn pair_count(&self) -> usize {
        self.rules.values().map(HashSet::len).sum()
    }

    /// Iterate over restricted tokens and their forbidden successors.
    pub fn iter(&self) -> hash_map::Iter<'_, T, HashSet<T>> {
        self.rules.iter()
    }

    /// Borrow the underlying mapping.
    pub fn as_map(&self) -> &HashMap<T, HashSet<T>> {
        &self.rules
    }

    /// Unwrap into the underlying mapping.
    pub fn into_map(self) -> HashMap<T, HashSet<T>> {
        self.rules
    }

    /// Fold every restriction of `other` into this rule set.
    ///
    /// Forbidden sets only grow: nothing already forbidden is lifted.
    pub fn merge(&mut self, other: RuleSet<T>) {
        for (prev, forbidden) in other.rules {
            self.rules.entry(prev).or_default().extend(forbidden);
        }
    }
}

impl<T: Token> FromIterator<(T, T)> for RuleSet<T> {
    /// Collect explicit `(preceding, forbidden successor)` pairs.
    fn from_iter<I: IntoIterator<Item = (T, T)>>(pairs: I) -> Self {
        let mut rules = Self::new();
        for (prev, next) in pairs {
            rules.forbid(prev, next);
        }
        rules
    }
}

impl<'a, T> IntoIterator for &'a RuleSet<T> {
    type Item = (&'a T, &'a HashSet<T>);
    type IntoIter = hash_map::Iter<'a, T, HashSet<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
