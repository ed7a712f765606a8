// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Stack allocated containers that spill to the heap when they outgrow their inline
//! storage. Argument lists and short strings (scalar values, printf specs, parse
//! tokens) are tiny in practice, so these avoid a heap allocation per call.

use smallstr::SmallString;
use smallvec::SmallVec;

/// If you make this number too large, every [`crate::FormatArg`] gets bigger.
pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;

pub const DEFAULT_INLINE_VEC_SIZE: usize = 8;

pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;

pub type InlineVec<T> = SmallVec<[T; DEFAULT_INLINE_VEC_SIZE]>;
