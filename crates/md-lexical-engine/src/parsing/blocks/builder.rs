use crate::{
    lexical::{BlockNode, Image, List, ListItem, Paragraph},
    parsing::inline::resolve_inline,
};

use super::classify::LineClass;

/// Phase 2 of block parsing: turns classified lines into block nodes.
///
/// The only state carried between lines is the open list. It is closed
/// (appended to the output) before any non-list block or any list item of
/// a different kind is appended.
pub struct BlockBuilder {
    open_list: Option<List>,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            open_list: None,
            out: vec![],
        }
    }

    pub fn push(&mut self, line: LineClass<'_>) {
        let block = match line {
            LineClass::ListItem { kind, text } => {
                let item = ListItem {
                    paragraph: Paragraph::new(resolve_inline(text)),
                };
                if let Some(list) = self.open_list.as_mut().filter(|l| l.kind() == kind) {
                    list.push(item);
                } else {
                    self.close_list();
                    self.open_list = Some(List::new(kind, item));
                }
                return;
            }
            LineClass::ThematicBreak => BlockNode::HorizontalRule,
            LineClass::Heading { level, text } => BlockNode::Heading {
                level,
                inline: resolve_inline(text),
            },
            LineClass::Quote { text } => BlockNode::Quote(Paragraph::new(resolve_inline(text))),
            LineClass::Image { alt, src } => BlockNode::Image(Image {
                src: src.to_string(),
                alt_text: alt.to_string(),
            }),
            LineClass::Paragraph { text } => {
                BlockNode::Paragraph(Paragraph::new(resolve_inline(text)))
            }
        };

        self.close_list();
        self.out.push(block);
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // EOF flush
        self.close_list();
        self.out
    }

    fn close_list(&mut self) {
        if let Some(list) = self.open_list.take() {
            log::trace!(
                "closing {:?} list with {} items",
                list.kind(),
                list.items().len()
            );
            self.out.push(BlockNode::List(list));
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
