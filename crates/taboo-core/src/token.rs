//! Token bound for taboo sequences.
//!
//! Taboo places no constraint on what a token is beyond equality and
//! hashing. Equality granularity is the caller's choice: two tokens that
//! compare equal are the same token as far as the rules are concerned.

use std::hash::Hash;

/// A unit of a filtered sequence.
///
/// Implemented for every `Eq + Hash + Clone` type, so `char`, `&str`,
/// `String`, integers and caller enums all work without extra code.
/// `Clone` is needed because rule sets keep their own copies of the
/// example tokens they were built from.
pub trait Token: Eq + Hash + Clone {}

impl<T: Eq + Hash + Clone> Token for T {}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_token<T: Token>() {}

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    enum Move {
        Left,
        Right,
    }

    #[test]
    fn test_common_types_are_tokens() {
        assert_token::<char>();
        assert_token::<&str>();
        assert_token::<String>();
        assert_token::<u16>();
        assert_token::<(u8, u8)>();
    }

    #[test]
    fn test_caller_enum_is_token() {
        assert_token::<Move>();
        assert_ne!(Move::Left, Move::Right);
    }
}
