//! Error types for taboo rule sets.

use thiserror::Error;

/// Errors raised when a rule set is assembled from caller-supplied data.
///
/// Building rules from an example sequence and applying them never fail;
/// only hand-built mappings can break the rule set invariants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// A preceding token was mapped to an empty forbidden-successor set.
    ///
    /// The payload is the number of such entries found.
    #[error("{0} rule entries have an empty forbidden-successor set")]
    EmptySuccessorSet(usize),
}
