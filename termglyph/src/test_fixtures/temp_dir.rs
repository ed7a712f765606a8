// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::InlineString;
use miette::IntoDiagnostic;
use rand::Rng;
use std::{
    fmt::{Display, Formatter, Write},
    ops::Deref,
    path::{Path, PathBuf},
};

const TINTS: [&str; 8] = [
    "amber", "cobalt", "crimson", "indigo", "ochre", "sepia", "teal", "umber",
];

const MARKS: [&str; 8] = [
    "glyph", "pixel", "raster", "ramp", "sample", "stroke", "tile", "dot",
];

/// A scratch directory that is deleted when dropped.
#[derive(Debug)]
pub struct TempDir {
    pub inner: PathBuf,
}

impl TempDir {
    #[must_use]
    pub fn join<P: AsRef<Path>>(&self, path: P) -> PathBuf { self.inner.join(path) }
}

/// Eg: `teal-pixel-0417`.
fn generate_friendly_random_id() -> InlineString {
    let mut rng = rand::rng();
    let tint = TINTS[rng.random_range(0..TINTS.len())];
    let mark = MARKS[rng.random_range(0..MARKS.len())];
    let number = rng.random_range(0..10_000);
    let mut acc = InlineString::new();
    // Writing to an in-memory string can't fail.
    _ = write!(acc, "{tint}-{mark}-{number:04}");
    acc
}

pub fn try_create_temp_dir() -> miette::Result<TempDir> {
    let root = std::env::temp_dir();
    let new_temp_dir = root.join(generate_friendly_random_id().as_str());
    std::fs::create_dir(&new_temp_dir).into_diagnostic()?;
    Ok(TempDir {
        inner: new_temp_dir,
    })
}

impl Drop for TempDir {
    fn drop(&mut self) { std::fs::remove_dir_all(&self.inner).ok(); }
}

impl Deref for TempDir {
    type Target = PathBuf;

    fn deref(&self) -> &Self::Target { &self.inner }
}

impl Display for TempDir {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_dir_is_removed_on_drop() {
        let temp_dir = try_create_temp_dir().unwrap();
        let path = temp_dir.inner.clone();
        assert!(path.is_dir());
        assert!(temp_dir.to_string().contains(path.file_name().unwrap().to_str().unwrap()));
        drop(temp_dir);
        assert!(!path.exists());
    }

    #[test]
    fn friendly_id_has_three_parts() {
        let id = generate_friendly_random_id();
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert!(TINTS.contains(&parts[0]));
        assert!(MARKS.contains(&parts[1]));
        assert_eq!(parts[2].len(), 4);
    }
}
