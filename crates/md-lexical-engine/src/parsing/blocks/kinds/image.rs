use std::sync::OnceLock;

use regex::Regex;

/// A line consisting solely of `![alt](src)`.
///
/// Only whole lines become image blocks; image syntax inside paragraph
/// text is left as literal text.
pub struct ImageLine;

impl ImageLine {
    /// Returns `(alt, src)` when the entire line is one image with a
    /// non-empty source.
    ///
    /// Brackets inside the alt text and parentheses inside the source are
    /// allowed as long as they are balanced, so `![a [b] c](x.png)` and
    /// `![Foo](https://w/Foo_(bar).png)` are images while
    /// `![a](b.png) ![c](d.png)` is not.
    pub fn parse(line: &str) -> Option<(&str, &str)> {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = IMAGE_REGEX.get_or_init(|| {
            Regex::new(r"^!\[(.*)\]\((.+)\)$").expect("Invalid image regex")
        });

        let caps = re.captures(line)?;
        let (alt, src) = (caps.get(1)?.as_str(), caps.get(2)?.as_str());
        (is_balanced(alt, b'[', b']') && is_balanced(src, b'(', b')')).then_some((alt, src))
    }
}

/// True when every `close` has an earlier matching `open` and none are left open.
fn is_balanced(s: &str, open: u8, close: u8) -> bool {
    let mut depth = 0usize;
    for b in s.bytes() {
        if b == open {
            depth += 1;
        } else if b == close {
            let Some(d) = depth.checked_sub(1) else {
                return false;
            };
            depth = d;
        }
    }
    depth == 0
}
