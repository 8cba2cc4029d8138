//! JSON encoding for taboo rule sets.
//!
//! Rule sets learned from large examples can be stored and shipped
//! instead of rebuilt. The document lists each restricted token with its
//! forbidden successors:
//!
//! ```json
//! {"version":1,"rules":[{"token":"a","forbidden":["b","c"]},{"token":"c","forbidden":["a"]}]}
//! ```
//!
//! Encoding sorts entries and successors, so equal rule sets always
//! produce identical text.
//!
//! ```
//! use taboo_serde::{from_json, to_json};
//! use taboo_serde::taboo_core::{build_rules, RuleSet};
//!
//! let rules = build_rules(["a", "c", "a", "b"].map(String::from));
//! let json = to_json(&rules).unwrap();
//! assert_eq!(
//!     json,
//!     r#"{"version":1,"rules":[{"token":"a","forbidden":["b","c"]},{"token":"c","forbidden":["a"]}]}"#
//! );
//!
//! let decoded: RuleSet<String> = from_json(&json).unwrap();
//! assert_eq!(decoded, rules);
//! ```

use std::collections::{HashMap, HashSet};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use taboo_core;

use taboo_core::{RuleError, RuleSet, Token};

/// Current document version.
pub const FORMAT_VERSION: u32 = 1;

/// Errors from encoding or decoding a rule set document.
#[derive(Debug, Error)]
pub enum SerdeError {
    /// Malformed JSON, or tokens that do not fit the target type.
    #[error("invalid rule set document: {0}")]
    Json(#[from] serde_json::Error),

    /// Document written by an incompatible format version.
    #[error("unsupported format version {0} (expected {expected})", expected = FORMAT_VERSION)]
    UnsupportedVersion(u32),

    /// The same preceding token appears in more than one entry.
    #[error("duplicate entry for a preceding token at index {0}")]
    DuplicateEntry(usize),

    /// Decoded entries break the rule set invariants.
    #[error(transparent)]
    Rules(#[from] RuleError),
}

#[derive(Serialize)]
struct DocumentRef<'a, T> {
    version: u32,
    rules: Vec<EntryRef<'a, T>>,
}

#[derive(Serialize)]
struct EntryRef<'a, T> {
    token: &'a T,
    forbidden: Vec<&'a T>,
}

#[derive(Deserialize)]
struct Document<T> {
    version: u32,
    rules: Vec<Entry<T>>,
}

#[derive(Deserialize)]
struct Entry<T> {
    token: T,
    forbidden: Vec<T>,
}

fn document<T: Token + Ord>(rules: &RuleSet<T>) -> DocumentRef<'_, T> {
    let mut entries: Vec<EntryRef<'_, T>> = rules
        .iter()
        .map(|(token, forbidden)| {
            let mut forbidden: Vec<&T> = forbidden.iter().collect();
            forbidden.sort_unstable();
            EntryRef { token, forbidden }
        })
        .collect();
    entries.sort_unstable_by(|a, b| a.token.cmp(b.token));

    DocumentRef {
        version: FORMAT_VERSION,
        rules: entries,
    }
}

/// Encode a rule set as compact JSON.
///
/// # Errors
///
/// Returns [`SerdeError::Json`] if a token fails to serialize.
pub fn to_json<T>(rules: &RuleSet<T>) -> Result<String, SerdeError>
where
    T: Token + Ord + Serialize,
{
    Ok(serde_json::to_string(&document(rules))?)
}

/// Encode a rule set as indented JSON.
///
/// # Errors
///
/// Returns [`SerdeError::Json`] if a token fails to serialize.
pub fn to_json_pretty<T>(rules: &RuleSet<T>) -> Result<String, SerdeError>
where
    T: Token + Ord + Serialize,
{
    Ok(serde_json::to_string_pretty(&document(rules))?)
}

/// Decode a rule set from JSON.
///
/// Duplicate successors within one entry are merged.
///
/// # Errors
///
/// Returns an error if:
/// - The text is not a valid document for token type `T`
/// - The version is not [`FORMAT_VERSION`]
/// - A preceding token has more than one entry
/// - An entry lists no forbidden successors
pub fn from_json<T>(json: &str) -> Result<RuleSet<T>, SerdeError>
where
    T: Token + DeserializeOwned,
{
    let doc: Document<T> = serde_json::from_str(json)?;
    if doc.version != FORMAT_VERSION {
        return Err(SerdeError::UnsupportedVersion(doc.version));
    }

    let mut map: HashMap<T, HashSet<T>> = HashMap::with_capacity(doc.rules.len());
    for (index, entry) in doc.rules.into_iter().enumerate() {
        let forbidden: HashSet<T> = entry.forbidden.into_iter().collect();
        if map.insert(entry.token, forbidden).is_some() {
            return Err(SerdeError::DuplicateEntry(index));
        }
    }

    let rules = RuleSet::from_map(map)?;
    debug!(
        restricted = rules.len(),
        pairs = rules.pair_count(),
        "rule set decoded"
    );
    Ok(rules)
}
