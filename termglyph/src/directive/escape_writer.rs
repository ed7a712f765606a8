// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{
    AbsoluteColorSequence, IndexedColor, Layer, RESET_ALL, ResetTarget, RgbColor, StyleKind,
};

/// Appends literal bytes and escape sequences to the resolved buffer, and keeps count
/// of the escape bytes so they can be excluded from the visible count.
#[derive(Debug)]
pub struct EscapeWriter {
    buffer: Vec<u8>,
    injected_escape_bytes: usize,
}

impl EscapeWriter {
    /// `buffer` should already have the capacity the caller expects to fill.
    #[must_use]
    pub fn new(buffer: Vec<u8>) -> Self {
        Self {
            buffer,
            injected_escape_bytes: 0,
        }
    }

    pub fn push_literal(&mut self, bytes: &[u8]) { self.buffer.extend_from_slice(bytes); }

    pub fn push_escape(&mut self, sequence: &[u8]) {
        self.buffer.extend_from_slice(sequence);
        self.injected_escape_bytes += sequence.len();
    }

    pub fn push_absolute_color(&mut self, layer: Layer, color: RgbColor) {
        self.push_escape(AbsoluteColorSequence::new(layer, color).as_bytes());
    }

    pub fn push_indexed_color(&mut self, layer: Layer, color: IndexedColor) {
        self.push_escape(&color.sequence(layer));
    }

    pub fn push_style(&mut self, kind: StyleKind) { self.push_escape(kind.enable_sequence()); }

    pub fn push_reset(&mut self, target: ResetTarget) {
        for sequence in target.sequences() {
            self.push_escape(*sequence);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize { self.buffer.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }

    #[must_use]
    pub fn injected_escape_bytes(&self) -> usize { self.injected_escape_bytes }

    /// Appends the closing reset-all and hands back the buffer along with the number of
    /// injected escape bytes.
    #[must_use]
    pub fn finish(mut self) -> (Vec<u8>, usize) {
        self.push_escape(RESET_ALL);
        (self.buffer, self.injected_escape_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tg_rgb;
    use pretty_assertions::assert_eq;

    #[test]
    fn counts_only_escape_bytes() {
        let mut writer = EscapeWriter::new(Vec::new());
        writer.push_literal(b"ab");
        writer.push_style(StyleKind::Bold);
        writer.push_absolute_color(Layer::Foreground, tg_rgb!(1, 2, 3));
        writer.push_indexed_color(Layer::Background, IndexedColor::BrightRed);
        writer.push_reset(ResetTarget::Colors);
        assert_eq!(writer.injected_escape_bytes(), 5 + 19 + 6 + 10);
        assert_eq!(writer.len(), 2 + 5 + 19 + 6 + 10);

        let (buffer, injected) = writer.finish();
        assert_eq!(injected, 5 + 19 + 6 + 10 + 5);
        assert_eq!(
            buffer,
            b"ab\x1b[01m\x1b[38;2;001;002;003m\x1b[101m\x1b[39m\x1b[49m\x1b[00m".to_vec()
        );
    }

    #[test]
    fn empty_writer_still_closes_with_reset() {
        let writer = EscapeWriter::new(Vec::new());
        assert!(writer.is_empty());
        let (buffer, injected) = writer.finish();
        assert_eq!(buffer, RESET_ALL.to_vec());
        assert_eq!(injected, 5);
    }
}
