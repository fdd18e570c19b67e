/// Bold text, delimited by a doubled `*` or `_`.
pub struct Strong;

impl Strong {
    pub const STARS: &'static str = "**";
    pub const UNDERSCORES: &'static str = "__";
    /// Openers in the order they are tried.
    pub const DELIMITERS: [&'static str; 2] = [Self::STARS, Self::UNDERSCORES];
}

/// Italic text, delimited by a single `*` that is not part of a `**` run.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: u8 = b'*';
    pub const STAR_STR: &'static str = "*";
}

