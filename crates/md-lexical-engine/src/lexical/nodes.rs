/// Formatting of a text run. Exactly one style applies per run; styles are
/// never combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextStyle {
    #[default]
    Plain,
    Bold,
    Italic,
    Code,
}

impl TextStyle {
    /// Lexical's `IS_BOLD` text format bit.
    pub const BOLD: u32 = 1;
    /// Lexical's `IS_ITALIC` text format bit.
    pub const ITALIC: u32 = 1 << 1;
    /// Lexical's `IS_CODE` text format bit.
    pub const CODE: u32 = 1 << 4;

    /// The `format` value the receiving schema expects for this style.
    pub const fn format_code(self) -> u32 {
        match self {
            TextStyle::Plain => 0,
            TextStyle::Bold => Self::BOLD,
            TextStyle::Italic => Self::ITALIC,
            TextStyle::Code => Self::CODE,
        }
    }
}

/// A styled text or link fragment within a single block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    Text { content: String, style: TextStyle },
    Link { url: String, label: Vec<InlineNode> },
}

impl InlineNode {
    pub fn text(content: impl Into<String>, style: TextStyle) -> Self {
        InlineNode::Text {
            content: content.into(),
            style,
        }
    }

    pub fn plain(content: impl Into<String>) -> Self {
        Self::text(content, TextStyle::Plain)
    }

    pub fn link(url: impl Into<String>, label: Vec<InlineNode>) -> Self {
        InlineNode::Link {
            url: url.into(),
            label,
        }
    }

    /// Appends the visible text of this node (markup stripped) to `out`.
    pub fn push_visible_text(&self, out: &mut String) {
        match self {
            InlineNode::Text { content, .. } => out.push_str(content),
            InlineNode::Link { label, .. } => {
                for node in label {
                    node.push_visible_text(out);
                }
            }
        }
    }
}

/// Concatenates the visible text of an inline sequence.
pub fn visible_text(nodes: &[InlineNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        node.push_visible_text(&mut out);
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Paragraph {
    pub inline: Vec<InlineNode>,
}

impl Paragraph {
    pub fn new(inline: Vec<InlineNode>) -> Self {
        Self { inline }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Bullet,
    Ordered,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub paragraph: Paragraph,
}

/// A run of same-kind list items.
///
/// Only constructible from a first item, so a list is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    kind: ListKind,
    items: Vec<ListItem>,
}

impl List {
    pub fn new(kind: ListKind, first: ListItem) -> Self {
        Self {
            kind,
            items: vec![first],
        }
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn push(&mut self, item: ListItem) {
        self.items.push(item);
    }
}

/// A standalone image block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub src: String,
    pub alt_text: String,
}

impl Image {
    /// Images are always displayed at full content width.
    pub const DISPLAY_WIDTH: &'static str = "100%";
}

/// One top-level structural unit of the document.
///
/// List items only ever appear inside a [`List`], so they are not a
/// variant of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockNode {
    Paragraph(Paragraph),
    Heading { level: u8, inline: Vec<InlineNode> },
    /// A quote wraps exactly one paragraph.
    Quote(Paragraph),
    List(List),
    Image(Image),
    HorizontalRule,
}

/// The single top-level container produced by one conversion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocumentRoot {
    pub children: Vec<BlockNode>,
}

impl DocumentRoot {
    pub fn new(children: Vec<BlockNode>) -> Self {
        Self { children }
    }
}
