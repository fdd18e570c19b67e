use std::sync::OnceLock;

use regex::Regex;

use crate::lexical::ListKind;

/// List item markers: `-`/`*` for bullets, `N.` for ordered items.
pub struct ListMarker;

impl ListMarker {
    /// Returns the list kind and item text for a list item line.
    pub fn parse(line: &str) -> Option<(ListKind, &str)> {
        static BULLET_REGEX: OnceLock<Regex> = OnceLock::new();
        static ORDERED_REGEX: OnceLock<Regex> = OnceLock::new();
        let bullet = BULLET_REGEX
            .get_or_init(|| Regex::new(r"^[-*]\s+(.+)$").expect("Invalid bullet regex"));
        let ordered = ORDERED_REGEX
            .get_or_init(|| Regex::new(r"^(\d+)\.\s+(.+)$").expect("Invalid ordered regex"));

        if let Some(caps) = bullet.captures(line) {
            return Some((ListKind::Bullet, caps.get(1)?.as_str()));
        }
        let caps = ordered.captures(line)?;
        Some((ListKind::Ordered, caps.get(2)?.as_str()))
    }
}
