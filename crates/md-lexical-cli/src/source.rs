//! Caller-side preparation of a note before conversion.
//!
//! The converter expects text without frontmatter and without the leading
//! feature image. Frontmatter is removed as an opaque block; its keys are
//! not interpreted here.

use md_lexical_engine::parsing::blocks::kinds::ImageLine;
use serde::Serialize;

const FRONTMATTER_FENCE: &str = "---";

#[derive(Debug, Clone, Copy)]
pub struct PrepareOptions {
    pub strip_frontmatter: bool,
    pub extract_feature_image: bool,
}

/// A leading standalone image, lifted out of the body.
///
/// Serializes with the same keys as a Lexical image node so callers can
/// attach it to post metadata unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureImage<'a> {
    pub src: &'a str,
    #[serde(rename = "altText")]
    pub alt: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedSource<'a> {
    pub feature_image: Option<FeatureImage<'a>>,
    pub body: &'a str,
}

pub fn prepare(text: &str, opts: PrepareOptions) -> PreparedSource<'_> {
    let mut body = text;
    if opts.strip_frontmatter {
        body = strip_frontmatter(body);
    }

    let mut feature_image = None;
    if opts.extract_feature_image {
        let trimmed = body.trim_start();
        let (first, rest) = trimmed.split_once('\n').unwrap_or((trimmed, ""));
        if let Some((alt, src)) = ImageLine::parse(first.trim()) {
            feature_image = Some(FeatureImage { alt, src });
            body = rest;
        }
    }

    PreparedSource {
        feature_image,
        body,
    }
}

/// Removes a `---` delimited block at the very start of `text`.
///
/// An unclosed block is left in place.
fn strip_frontmatter(text: &str) -> &str {
    let Some(rest) = text.strip_prefix(FRONTMATTER_FENCE) else {
        return text;
    };
    let Some((opener_tail, after)) = rest.split_once('\n') else {
        return text;
    };
    if !opener_tail.trim().is_empty() {
        return text;
    }

    let mut offset = 0;
    for line in after.split_inclusive('\n') {
        offset += line.len();
        if line.trim_end() == FRONTMATTER_FENCE {
            return &after[offset..];
        }
    }
    text
}
