use crate::lexical::{InlineNode, TextStyle};

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Link, Strong},
};

/// A single construct recognizer. On success the cursor sits just past the
/// construct; on failure the cursor is left untouched.
type Matcher = fn(&mut Cursor<'_>) -> Option<InlineNode>;

/// Matchers tried at every scan position, in priority order.
const MATCHERS: &[Matcher] = &[
    try_parse_link,
    try_parse_strong,
    try_parse_emphasis,
    try_parse_code_span,
];

/// Link labels use the same matchers minus links.
const LABEL_MATCHERS: &[Matcher] = &[try_parse_strong, try_parse_emphasis, try_parse_code_span];

/// Resolves inline markup into a flat sequence of [`InlineNode`]s.
///
/// # Precedence
/// A single left-to-right pass tries every matcher at each position, so the
/// earliest-starting construct wins. When several could start at the same
/// position the order is link, bold, italic, code.
///
/// # Returns
/// Nodes covering the whole input. Text between constructs becomes one
/// plain `Text` node per gap; unmatched delimiters stay in that text. An
/// empty input yields no nodes.
pub fn resolve_inline(s: &str) -> Vec<InlineNode> {
    resolve_with(s, MATCHERS)
}

fn resolve_with(s: &str, matchers: &[Matcher]) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    // Helper to flush accumulated text as a plain Text node
    fn flush_text(out: &mut Vec<InlineNode>, s: &str, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::plain(&s[start..end]));
        }
    }

    'scan: while !cur.eof() {
        let start = cur.pos();
        for matcher in matchers {
            if let Some(node) = matcher(&mut cur) {
                flush_text(&mut out, s, text_start, start);
                out.push(node);
                text_start = cur.pos();
                continue 'scan;
            }
        }
        cur.bump_char();
    }

    flush_text(&mut out, s, text_start, cur.pos());
    out
}

/// Attempts to parse `[label](url)` at the current position.
///
/// The label runs to the first `]`, which must be followed directly by `(`;
/// the url runs to the first `)`. Both must be non-empty. Inline image
/// syntax `![alt](src)` is not a link and stays literal text.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(Link::OPEN) || cur.prev() == Some(Link::IMAGE_BANG) {
        return None;
    }

    let label_start = cur.pos() + 1;
    let label_end = cur.s[label_start..]
        .bytes()
        .position(|b| b == Link::LABEL_END)
        .map(|j| label_start + j)?;
    if label_end == label_start || !cur.s[label_end..].starts_with(Link::LABEL_CLOSE) {
        return None;
    }

    let url_start = label_end + Link::LABEL_CLOSE.len();
    let url_end = cur.find_from(url_start, Link::CLOSE)?;
    if url_end == url_start {
        return None;
    }

    let label = resolve_with(&cur.s[label_start..label_end], LABEL_MATCHERS);
    let url = &cur.s[url_start..url_end];
    cur.jump_to(url_end + Link::CLOSE.len());
    Some(InlineNode::link(url, label))
}

/// Attempts to parse `**text**` or `__text__` at the current position.
///
/// The content is taken literally up to the first matching closer; it is
/// not scanned for further markup.
fn try_parse_strong(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let delim = Strong::DELIMITERS
        .into_iter()
        .find(|d| cur.starts_with(d.as_bytes()))?;
    let inner_start = cur.pos() + delim.len();
    let inner_end = cur.find_from(inner_start, delim)?;
    if inner_end == inner_start {
        return None;
    }

    let content = &cur.s[inner_start..inner_end];
    cur.jump_to(inner_end + delim.len());
    Some(InlineNode::text(content, TextStyle::Bold))
}

/// Attempts to parse `*text*` at the current position.
///
/// Neither star may touch another star: `**` runs belong to bold, and a
/// star left over from a failed bold never opens italic.
fn try_parse_emphasis(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(Emphasis::STAR)
        || cur.prev() == Some(Emphasis::STAR)
        || matches!(cur.peek_at(1), None | Some(Emphasis::STAR))
    {
        return None;
    }

    let inner_start = cur.pos() + 1;
    let inner_end = cur.find_from(inner_start, Emphasis::STAR_STR)?;
    if cur.s.as_bytes().get(inner_end + 1) == Some(&Emphasis::STAR) {
        return None;
    }

    let content = &cur.s[inner_start..inner_end];
    cur.jump_to(inner_end + 1);
    Some(InlineNode::text(content, TextStyle::Italic))
}

/// Attempts to parse a code span starting at the current position.
///
/// Returns `None` if not at a backtick, or if the span is empty or unclosed.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let inner_start = cur.pos() + 1;
    let inner_end = cur.find_from(inner_start, CodeSpan::TICK_STR)?;
    if inner_end == inner_start {
        return None;
    }

    let content = &cur.s[inner_start..inner_end];
    cur.jump_to(inner_end + 1);
    Some(InlineNode::text(content, TextStyle::Code))
}
