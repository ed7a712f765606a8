// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Upper bound for the resolved buffer, computed before anything is written.
//!
//! Every `#` is charged as if it started the longest directive (an absolute color),
//! whatever actually follows it, and every other byte is copied through as is. A
//! directive spans at least two format bytes and emits at most
//! [`MAX_DIRECTIVE_EXPANSION`] bytes, so the bound always holds. The trailing reset-all
//! is added on top.

use crate::{
    DIRECTIVE_ESCAPE, MAX_DIRECTIVE_EXPANSION, STYLE_SEQUENCE_LEN, TermGlyphError,
    TermGlyphResult,
};

pub const TRAILING_RESET_ALLOWANCE: usize = STYLE_SEQUENCE_LEN;

/// # Errors
///
/// Returns [`TermGlyphError::AllocationFailure`] if the estimate overflows `usize`.
pub fn estimate_buffer_size(format: &str) -> TermGlyphResult<usize> {
    let directive_escapes = format
        .bytes()
        .filter(|it| *it == DIRECTIVE_ESCAPE)
        .count();
    let literal_bytes = format.len() - directive_escapes;
    estimate_from_counts(directive_escapes, literal_bytes)
        .ok_or(TermGlyphError::AllocationFailure {
            requested: usize::MAX,
        })
}

fn estimate_from_counts(directive_escapes: usize, literal_bytes: usize) -> Option<usize> {
    directive_escapes
        .checked_mul(MAX_DIRECTIVE_EXPANSION)?
        .checked_add(literal_bytes)?
        .checked_add(TRAILING_RESET_ALLOWANCE)
}

/// Returns an empty buffer with room for exactly `capacity` bytes, or
/// [`TermGlyphError::AllocationFailure`] if the memory is not available.
///
/// # Errors
///
/// Returns [`TermGlyphError::AllocationFailure`] if the allocator refuses.
pub fn try_allocate_buffer(capacity: usize) -> TermGlyphResult<Vec<u8>> {
    let mut acc = Vec::new();
    acc.try_reserve_exact(capacity)
        .map_err(|_| TermGlyphError::AllocationFailure {
            requested: capacity,
        })?;
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("", 5 ; "empty")]
    #[test_case("hello", 10 ; "literal_only")]
    #[test_case("#", 24 ; "lone_escape")]
    #[test_case("##", 43 ; "doubled_escape")]
    #[test_case("#dfX", 19 + 3 + 5 ; "absolute_color")]
    #[test_case("%d #o", 4 + 19 + 5 ; "mixed")]
    fn estimates(format: &str, expected: usize) {
        assert_eq!(estimate_buffer_size(format).unwrap(), expected);
    }

    #[test]
    fn overflow_is_an_allocation_failure() {
        assert_eq!(estimate_from_counts(usize::MAX / 2, 0), None);
        assert_eq!(estimate_from_counts(0, usize::MAX - 4), None);
        assert_eq!(estimate_from_counts(1, 1), Some(25));
    }

    #[test]
    fn allocation_reserves_the_exact_capacity() {
        let buffer = try_allocate_buffer(64).unwrap();
        assert!(buffer.is_empty());
        assert!(buffer.capacity() >= 64);
    }

    #[test]
    fn impossible_allocation_fails_without_panicking() {
        let result = try_allocate_buffer(usize::MAX);
        assert!(matches!(
            result,
            Err(TermGlyphError::AllocationFailure {
                requested: usize::MAX
            })
        ));
    }
}
