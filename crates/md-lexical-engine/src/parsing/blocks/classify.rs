use crate::lexical::ListKind;

use super::kinds::{BlockQuote, Heading, ImageLine, ListMarker, ThematicBreak};

/// Classification of a single trimmed, non-blank line.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. Variants borrow the text that
/// still needs inline resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    ListItem { kind: ListKind, text: &'a str },
    ThematicBreak,
    Heading { level: u8, text: &'a str },
    Quote { text: &'a str },
    Image { alt: &'a str, src: &'a str },
    Paragraph { text: &'a str },
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`]. First match wins, in order:
    /// list item, horizontal rule, heading, quote, image, paragraph.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let line = line.trim();

        if let Some((kind, text)) = ListMarker::parse(line) {
            return LineClass::ListItem { kind, text };
        }
        if ThematicBreak::matches(line) {
            return LineClass::ThematicBreak;
        }
        if let Some((level, text)) = Heading::parse(line) {
            return LineClass::Heading { level, text };
        }
        if let Some(text) = BlockQuote::strip_prefix(line) {
            return LineClass::Quote { text };
        }
        if let Some((alt, src)) = ImageLine::parse(line) {
            return LineClass::Image { alt, src };
        }
        LineClass::Paragraph { text: line }
    }
}
