use serde::Serialize;

use crate::error::ConvertError;

use super::nodes::{BlockNode, DocumentRoot, Image, InlineNode, ListItem, ListKind, Paragraph};

/// Structural fields every node in the receiving schema must carry.
pub const VERSION: u32 = 1;
pub const INDENT: u32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Root,
    Paragraph,
    Heading,
    Quote,
    List,
    ListItem,
    Image,
    HorizontalRule,
    Text,
    Link,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    Bullet,
    Number,
}

impl From<ListKind> for ListType {
    fn from(kind: ListKind) -> Self {
        match kind {
            ListKind::Bullet => ListType::Bullet,
            ListKind::Ordered => ListType::Number,
        }
    }
}

/// A serialized document: `{ "root": { ... } }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LexicalDocument {
    pub root: LexicalNode,
}

impl LexicalDocument {
    pub fn to_json(&self) -> Result<String, ConvertError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConvertError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// One node of the wire tree. The fixed structural fields come first,
/// followed by the payload keys of the node type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LexicalNode {
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub direction: Direction,
    pub format: u32,
    pub indent: u32,
    pub version: u32,
    #[serde(flatten)]
    pub payload: Payload,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Heading {
        tag: String,
        children: Vec<LexicalNode>,
    },
    List {
        #[serde(rename = "listType")]
        list_type: ListType,
        children: Vec<LexicalNode>,
    },
    Link {
        url: String,
        children: Vec<LexicalNode>,
    },
    Image {
        src: String,
        #[serde(rename = "altText")]
        alt_text: String,
        width: &'static str,
    },
    Text {
        text: String,
    },
    Children {
        children: Vec<LexicalNode>,
    },
    Empty {},
}

impl LexicalNode {
    fn new(node_type: NodeType, payload: Payload) -> Self {
        Self {
            node_type,
            direction: Direction::Ltr,
            format: 0,
            indent: INDENT,
            version: VERSION,
            payload,
        }
    }

    fn with_children(node_type: NodeType, children: Vec<LexicalNode>) -> Self {
        Self::new(node_type, Payload::Children { children })
    }

    pub fn children(&self) -> &[LexicalNode] {
        match &self.payload {
            Payload::Heading { children, .. }
            | Payload::List { children, .. }
            | Payload::Link { children, .. }
            | Payload::Children { children } => children,
            Payload::Image { .. } | Payload::Text { .. } | Payload::Empty {} => &[],
        }
    }
}

impl DocumentRoot {
    pub fn to_lexical(&self) -> LexicalDocument {
        LexicalDocument::from(self)
    }
}

impl From<&DocumentRoot> for LexicalDocument {
    fn from(doc: &DocumentRoot) -> Self {
        let children = doc.children.iter().map(LexicalNode::from).collect();
        LexicalDocument {
            root: LexicalNode::with_children(NodeType::Root, children),
        }
    }
}

impl From<&BlockNode> for LexicalNode {
    fn from(block: &BlockNode) -> Self {
        match block {
            BlockNode::Paragraph(p) => p.into(),
            BlockNode::Heading { level, inline } => LexicalNode::new(
                NodeType::Heading,
                Payload::Heading {
                    tag: format!("h{level}"),
                    children: inline_children(inline),
                },
            ),
            BlockNode::Quote(p) => LexicalNode::with_children(NodeType::Quote, vec![p.into()]),
            BlockNode::List(list) => LexicalNode::new(
                NodeType::List,
                Payload::List {
                    list_type: list.kind().into(),
                    children: list.items().iter().map(LexicalNode::from).collect(),
                },
            ),
            BlockNode::Image(image) => image.into(),
            BlockNode::HorizontalRule => {
                LexicalNode::new(NodeType::HorizontalRule, Payload::Empty {})
            }
        }
    }
}

impl From<&Paragraph> for LexicalNode {
    fn from(p: &Paragraph) -> Self {
        LexicalNode::with_children(NodeType::Paragraph, inline_children(&p.inline))
    }
}

impl From<&ListItem> for LexicalNode {
    fn from(item: &ListItem) -> Self {
        LexicalNode::with_children(NodeType::ListItem, vec![(&item.paragraph).into()])
    }
}

impl From<&Image> for LexicalNode {
    fn from(image: &Image) -> Self {
        LexicalNode::new(
            NodeType::Image,
            Payload::Image {
                src: image.src.clone(),
                alt_text: image.alt_text.clone(),
                width: Image::DISPLAY_WIDTH,
            },
        )
    }
}

impl From<&InlineNode> for LexicalNode {
    fn from(node: &InlineNode) -> Self {
        match node {
            InlineNode::Text { content, style } => LexicalNode {
                format: style.format_code(),
                ..LexicalNode::new(
                    NodeType::Text,
                    Payload::Text {
                        text: content.clone(),
                    },
                )
            },
            InlineNode::Link { url, label } => LexicalNode::new(
                NodeType::Link,
                Payload::Link {
                    url: url.clone(),
                    children: inline_children(label),
                },
            ),
        }
    }
}

fn inline_children(nodes: &[InlineNode]) -> Vec<LexicalNode> {
    nodes.iter().map(LexicalNode::from).collect()
}
