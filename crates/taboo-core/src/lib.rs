//! Taboo: forbidden-adjacency filtering for token sequences.
//!
//! # Overview
//!
//! An example sequence teaches which tokens may not directly follow which;
//! those rules then filter other sequences in a single greedy pass.
//!
//! - **Rules from examples**: every adjacent pair `(prev, next)` in the
//!   example means `next` may not follow `prev`
//! - **Greedy and output-relative**: each token is checked against the
//!   last token *kept*, not the last token read
//! - **Order-preserving**: the result is always a subsequence of the input
//! - **Total**: building and applying rules cannot fail
//!
//! # Example
//!
//! ```
//! use taboo_core::{apply_rules, build_rules};
//!
//! let rules = build_rules(["a", "c", "a", "b"]);
//!
//! // `c` and `b` are forbidden after `a`; `a` is forbidden after `c`.
//! let result = apply_rules(&rules, ["a", "c", "b", "x", "c", "a"]);
//! assert_eq!(result, vec!["a", "x", "c"]);
//! ```
//!
//! # Reuse
//!
//! A [`RuleSet`] is never modified by filtering, so one set can be applied
//! to any number of inputs. [`Taboo`] bundles the two steps:
//!
//! ```
//! use taboo_core::Taboo;
//!
//! let taboo = Taboo::new("aa".chars());
//! assert_eq!(taboo.reduce("aaab".chars()), vec!['a', 'b']);
//! assert!(taboo.no_follow(&'a').contains(&'a'));
//! ```

pub mod apply;
pub mod builder;
pub mod error;
pub mod rules;
pub mod taboo;
pub mod token;

pub use apply::{apply_iter, apply_rules, apply_rules_with_stats, Applier, ApplyStats, TabooExt};
pub use builder::{build_rules, RuleBuilder};
pub use error::RuleError;
pub use rules::RuleSet;
pub use taboo::Taboo;
pub use token::Token;
