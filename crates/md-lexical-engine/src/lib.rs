//! # md-lexical engine
//!
//! Converts Markdown text into a Lexical rich-document tree and its JSON
//! serialization.
//!
//! The pipeline has two stages: the block segmenter ([`parsing::segment`])
//! splits the text into top-level blocks and calls the inline resolver
//! ([`parsing::resolve_inline`]) once per text-bearing block. The resulting
//! [`DocumentRoot`] is turned into the wire shape with
//! [`DocumentRoot::to_lexical`].
//!
//! Conversion is pure and total: no I/O, no shared state, no failure mode.
//! Only JSON serialization returns a `Result`.

pub mod error;
pub mod lexical;
pub mod parsing;

pub use error::ConvertError;
pub use lexical::*;
pub use parsing::{resolve_inline, segment};

/// Converts Markdown into the Lexical wire tree.
pub fn markdown_to_lexical(markdown: &str) -> LexicalDocument {
    segment(markdown).to_lexical()
}

/// Converts Markdown into compact Lexical JSON text.
pub fn markdown_to_lexical_json(markdown: &str) -> Result<String, ConvertError> {
    markdown_to_lexical(markdown).to_json()
}
