pub mod blocks;
pub mod inline;

use blocks::{BlockBuilder, MarkdownLineClassifier, content_lines};

use crate::lexical::DocumentRoot;

pub use inline::resolve_inline;

/// Segments Markdown into a [`DocumentRoot`].
///
/// The input is expected to be stripped of frontmatter and any leading
/// feature image already. Never fails: anything unrecognized becomes a
/// plain paragraph.
pub fn segment(markdown: &str) -> DocumentRoot {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for line in content_lines(markdown) {
        builder.push(classifier.classify(line));
    }

    let children = builder.finish();
    log::debug!("segmented markdown into {} blocks", children.len());
    DocumentRoot::new(children)
}
