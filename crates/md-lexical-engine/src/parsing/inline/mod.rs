//! # Inline Markup Resolver
//!
//! Cursor-based inline parsing over the text content of one block.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and has no knowledge of
//! block structure. The block builder calls [`resolve_inline`] once per
//! text-bearing block (paragraphs, headings, quotes, list items).
//!
//! The parser walks the text once, left to right. At each position it tries
//! an explicit, ordered list of matchers and the first success wins:
//!
//! 1. Link `[label](url)`: label resolved again without links
//! 2. Bold `**text**` / `__text__`: content is literal
//! 3. Italic `*text*`
//! 4. Code `` `text` ``: content is literal
//!
//! ## Modules
//!
//! - **`kinds`**: Inline-specific types with owned delimiters
//! - **`cursor`**: `Cursor` for byte-wise scanning with position tracking
//! - **`parser`**: `resolve_inline()` main entry point with `try_parse_*` helpers
//!
//! Styles never nest: a run is plain, bold, italic or code.

pub mod cursor;
pub mod kinds;
pub mod parser;

pub use parser::resolve_inline;
