//! # Lexical Document Model
//!
//! The typed node tree produced by one conversion and its JSON wire shape.
//!
//! ## Modules
//!
//! - **`nodes`**: `DocumentRoot`, `BlockNode`, `InlineNode` and `TextStyle`, the
//!   sum types the parser builds
//! - **`wire`**: `LexicalDocument` / `LexicalNode`, the serializable shape the
//!   publishing backend validates (`type`, `direction`, `format`, `indent`,
//!   `version` on every node)
//!
//! The wire tree is derived from the node tree in one pass; neither is mutated
//! after construction.

pub mod nodes;
pub mod wire;

pub use nodes::{
    BlockNode, DocumentRoot, Image, InlineNode, List, ListItem, ListKind, Paragraph, TextStyle,
    visible_text,
};
pub use wire::{Direction, LexicalDocument, LexicalNode, ListType, NodeType, Payload};
