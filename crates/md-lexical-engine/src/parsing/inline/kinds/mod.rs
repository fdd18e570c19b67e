//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Link`**: `OPEN = b'['`, `LABEL_CLOSE = "]("`, `CLOSE = ")"`
//! - **`Strong`**: `STARS = "**"`, `UNDERSCORES = "__"`
//! - **`Emphasis`**: `STAR = b'*'`
//! - **`CodeSpan`**: `TICK = b'\`'`
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.
//! The parser calls these constants; it never hardcodes `**` or `` ` ``.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strong};
pub use link::Link;
