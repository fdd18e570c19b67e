//! # Block Segmenter
//!
//! Two-phase block parsing over the trimmed, non-blank lines of a document.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    from local facts only (list marker, rule, heading, quote, whole-line image)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` holds the open list and
//!    emits `BlockNode`s, resolving inline markup for text-bearing blocks
//!
//! ## Modules
//!
//! - **`kinds`**: Block-specific types with owned delimiters (ListMarker, Heading,
//!   BlockQuote, ImageLine, ThematicBreak)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - A list is never empty; consecutive same-kind items share one list
//! - A list closes before the block that terminated it is appended
//! - Blank lines do not close a list
//! - All state is owned by one `BlockBuilder`, so conversions never interfere

pub mod builder;
pub mod classify;
pub mod kinds;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};

/// Returns the non-blank lines of `markdown`, trimmed, in document order.
///
/// The text is first cut into blocks at blank-line boundaries, then each
/// block into lines.
pub fn content_lines(markdown: &str) -> impl Iterator<Item = &str> {
    markdown
        .split("\n\n")
        .flat_map(str::lines)
        .map(str::trim)
        .filter(|line| !line.is_empty())
}
