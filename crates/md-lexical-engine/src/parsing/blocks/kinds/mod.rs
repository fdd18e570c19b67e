pub mod block_quote;
pub mod heading;
pub mod image;
pub mod list_marker;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use heading::Heading;
pub use image::ImageLine;
pub use list_marker::ListMarker;
pub use thematic_break::ThematicBreak;
