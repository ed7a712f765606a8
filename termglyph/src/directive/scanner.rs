// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DIRECTIVE_ESCAPE, Layer, ResetTarget, StyleKind};
use std::fmt::{Display, Formatter, Result};

/// What a `#` and the 0 to 2 bytes after it stand for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveToken {
    /// `##`
    LiteralEscape,
    /// `#df` / `#db`
    AbsoluteColor(Layer),
    /// `#if` / `#ib`
    IndexedColor(Layer),
    StyleEnable(StyleKind),
    /// `#0`, optionally followed by the attribute to reset.
    StyleReset(ResetTarget),
    /// A `#` that starts no known directive.
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedDirective {
    pub token: DirectiveToken,
    /// Bytes taken from the input after the `#` itself.
    pub consumed: usize,
}

/// Classifies the directive whose `#` immediately precedes `rest`.
#[must_use]
pub fn classify_directive(rest: &[u8]) -> ClassifiedDirective {
    const UNRECOGNIZED: (DirectiveToken, usize) = (DirectiveToken::Unrecognized, 0);
    let second = rest.get(1).copied();
    let (token, consumed) = match rest.first().copied() {
        Some(DIRECTIVE_ESCAPE) => (DirectiveToken::LiteralEscape, 1),
        Some(b'd') => match second.and_then(Layer::from_directive_char) {
            Some(layer) => (DirectiveToken::AbsoluteColor(layer), 2),
            None => UNRECOGNIZED,
        },
        Some(b'i') => match second.and_then(Layer::from_directive_char) {
            Some(layer) => (DirectiveToken::IndexedColor(layer), 2),
            None => UNRECOGNIZED,
        },
        // A bare `#0` leaves the next byte alone.
        Some(b'0') => match second.and_then(ResetTarget::from_directive_char) {
            Some(target) => (DirectiveToken::StyleReset(target), 2),
            None => (DirectiveToken::StyleReset(ResetTarget::All), 1),
        },
        Some(other) => match StyleKind::from_directive_char(other) {
            Some(kind) => (DirectiveToken::StyleEnable(kind), 1),
            None => UNRECOGNIZED,
        },
        None => UNRECOGNIZED,
    };
    ClassifiedDirective { token, consumed }
}

impl Display for DirectiveToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            DirectiveToken::LiteralEscape => write!(f, "##"),
            DirectiveToken::AbsoluteColor(layer) => write!(f, "#d{}", layer.directive_char()),
            DirectiveToken::IndexedColor(layer) => write!(f, "#i{}", layer.directive_char()),
            DirectiveToken::StyleEnable(kind) => write!(f, "#{}", kind.directive_char()),
            DirectiveToken::StyleReset(target) => write!(f, "{target}"),
            DirectiveToken::Unrecognized => write!(f, "#"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("#", DirectiveToken::LiteralEscape, 1 ; "literal_escape")]
    #[test_case("df", DirectiveToken::AbsoluteColor(Layer::Foreground), 2 ; "absolute_fg")]
    #[test_case("db%c", DirectiveToken::AbsoluteColor(Layer::Background), 2 ; "absolute_bg_followed_by_conversion")]
    #[test_case("if", DirectiveToken::IndexedColor(Layer::Foreground), 2 ; "indexed_fg")]
    #[test_case("ib", DirectiveToken::IndexedColor(Layer::Background), 2 ; "indexed_bg")]
    #[test_case("o", DirectiveToken::StyleEnable(StyleKind::Bold), 1 ; "bold")]
    #[test_case("m", DirectiveToken::StyleEnable(StyleKind::Dim), 1 ; "dim")]
    #[test_case("t", DirectiveToken::StyleEnable(StyleKind::Italic), 1 ; "italic")]
    #[test_case("u", DirectiveToken::StyleEnable(StyleKind::Underline), 1 ; "underline")]
    #[test_case("k", DirectiveToken::StyleEnable(StyleKind::Blink), 1 ; "blink")]
    #[test_case("n", DirectiveToken::StyleEnable(StyleKind::Inverse), 1 ; "inverse")]
    #[test_case("w", DirectiveToken::StyleEnable(StyleKind::DoubleUnderline), 1 ; "double_underline")]
    #[test_case("h", DirectiveToken::StyleEnable(StyleKind::Hidden), 1 ; "hidden")]
    #[test_case("s", DirectiveToken::StyleEnable(StyleKind::Strikethrough), 1 ; "strikethrough")]
    #[test_case("0o", DirectiveToken::StyleReset(ResetTarget::Style(StyleKind::Bold)), 2 ; "reset_bold")]
    #[test_case("0s", DirectiveToken::StyleReset(ResetTarget::Style(StyleKind::Strikethrough)), 2 ; "reset_strikethrough")]
    #[test_case("0f", DirectiveToken::StyleReset(ResetTarget::Foreground), 2 ; "reset_fg")]
    #[test_case("0b", DirectiveToken::StyleReset(ResetTarget::Background), 2 ; "reset_bg")]
    #[test_case("0c", DirectiveToken::StyleReset(ResetTarget::Colors), 2 ; "reset_colors")]
    #[test_case("0", DirectiveToken::StyleReset(ResetTarget::All), 1 ; "reset_all_at_end")]
    #[test_case("0x", DirectiveToken::StyleReset(ResetTarget::All), 1 ; "reset_all_keeps_next_byte")]
    #[test_case("0 ", DirectiveToken::StyleReset(ResetTarget::All), 1 ; "reset_all_before_space")]
    #[test_case("z", DirectiveToken::Unrecognized, 0 ; "unknown_char")]
    #[test_case("d", DirectiveToken::Unrecognized, 0 ; "absolute_without_layer_at_end")]
    #[test_case("dx", DirectiveToken::Unrecognized, 0 ; "absolute_with_bad_layer")]
    #[test_case("i", DirectiveToken::Unrecognized, 0 ; "indexed_without_layer")]
    #[test_case("f", DirectiveToken::Unrecognized, 0 ; "bare_layer_char")]
    #[test_case("", DirectiveToken::Unrecognized, 0 ; "lone_escape_at_end")]
    #[test_case("é", DirectiveToken::Unrecognized, 0 ; "multibyte_char")]
    fn directive_table(rest: &str, token: DirectiveToken, consumed: usize) {
        assert_eq!(
            classify_directive(rest.as_bytes()),
            ClassifiedDirective { token, consumed }
        );
    }

    #[test]
    fn display_reproduces_the_directive_text() {
        assert_eq!(DirectiveToken::LiteralEscape.to_string(), "##");
        assert_eq!(DirectiveToken::AbsoluteColor(Layer::Foreground).to_string(), "#df");
        assert_eq!(DirectiveToken::IndexedColor(Layer::Background).to_string(), "#ib");
        assert_eq!(DirectiveToken::StyleEnable(StyleKind::Blink).to_string(), "#k");
        assert_eq!(
            DirectiveToken::StyleReset(ResetTarget::Colors).to_string(),
            "#0c"
        );
        assert_eq!(DirectiveToken::Unrecognized.to_string(), "#");
    }
}
