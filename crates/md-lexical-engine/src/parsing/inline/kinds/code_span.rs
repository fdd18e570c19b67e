/// Code span inline type with owned delimiter constant.
///
/// The content between backticks is taken verbatim.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';
    pub const TICK_STR: &'static str = "`";
}
