/// Inline link `[label](url)` with owned delimiter constants.
///
/// Labels may carry bold, italic or code spans but never another link.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    /// Closes the label and opens the destination in one step.
    pub const LABEL_CLOSE: &'static str = "](";
    pub const CLOSE: &'static str = ")";
    pub const LABEL_END: u8 = b']';
    /// A `[` right after this byte starts image syntax, not a link.
    pub const IMAGE_BANG: u8 = b'!';
}
