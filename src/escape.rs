//! Pure HTML escaping utilities.
//!
//! These functions append escaped bytes to an output buffer. They are the
//! primitives every renderer operation uses for text, attribute values and
//! link targets.

use std::ops::Range;

const NEEDS_ESCAPED: [bool; 256] = {
    let mut table = [false; 256];
    table[b'"' as usize] = true;
    table[b'&' as usize] = true;
    table[b'<' as usize] = true;
    table[b'>' as usize] = true;
    table
};

fn escaped(byte: u8) -> &'static [u8] {
    match byte {
        b'"' => b"&quot;",
        b'&' => b"&amp;",
        b'<' => b"&lt;",
        b'>' => b"&gt;",
        _ => unreachable!("byte is not in the escape table"),
    }
}

/// Escape `"`, `&`, `<` and `>` and append the result to `out`.
///
/// # Examples
///
/// ```
/// use hemline::escape::attr_escape;
///
/// let mut out = Vec::new();
/// attr_escape(&mut out, b"a < b & \"c\"");
/// assert_eq!(out, b"a &lt; b &amp; &quot;c&quot;");
/// ```
pub fn attr_escape(out: &mut Vec<u8>, src: &[u8]) {
    let mut offset = 0;
    for (i, &byte) in src.iter().enumerate() {
        if NEEDS_ESCAPED[byte as usize] {
            out.extend_from_slice(&src[offset..i]);
            out.extend_from_slice(escaped(byte));
            offset = i + 1;
        }
    }
    out.extend_from_slice(&src[offset..]);
}

/// Find HTML entity references of the form `&[a-z]{2,5};`.
///
/// Returned ranges are ordered and never overlap.
///
/// # Examples
///
/// ```
/// use hemline::escape::html_entity_ranges;
///
/// assert_eq!(html_entity_ranges(b"a &amp; b"), vec![2..7]);
/// assert!(html_entity_ranges(b"a & b").is_empty());
/// ```
pub fn html_entity_ranges(src: &[u8]) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut resume = 0;

    for start in memchr::memchr_iter(b'&', src) {
        if start < resume {
            continue;
        }
        let name_len = src[start + 1..]
            .iter()
            .take_while(|b| b.is_ascii_lowercase())
            .take(6)
            .count();
        let end = start + 1 + name_len;
        if (2..=5).contains(&name_len) && src.get(end) == Some(&b';') {
            ranges.push(start..end + 1);
            resume = end + 1;
        }
    }

    ranges
}

/// Attribute-escape `src`, copying the bytes inside `skip` verbatim.
///
/// `skip` must be ordered and non-overlapping, as produced by
/// [`html_entity_ranges`]. This keeps existing entity references intact
/// while escaping everything around them.
pub fn entity_escape_with_skip(out: &mut Vec<u8>, src: &[u8], skip: &[Range<usize>]) {
    let mut end = 0;
    for range in skip {
        attr_escape(out, &src[end..range.start]);
        out.extend_from_slice(&src[range.clone()]);
        end = range.end;
    }
    attr_escape(out, &src[end..]);
}

/// Check whether `tag` is an opening or closing HTML tag called `name`.
///
/// The comparison is ASCII case-insensitive and tolerates whitespace
/// between `<` (or `</`) and the name.
///
/// # Examples
///
/// ```
/// use hemline::escape::is_html_tag;
///
/// assert!(is_html_tag(b"<a href=\"x\">", "a"));
/// assert!(is_html_tag(b"</STYLE>", "style"));
/// assert!(!is_html_tag(b"<abbr>", "a"));
/// ```
pub fn is_html_tag(tag: &[u8], name: &str) -> bool {
    let Some(rest) = tag.strip_prefix(b"<") else {
        return false;
    };
    let rest = rest.strip_prefix(b"/").unwrap_or(rest).trim_ascii_start();

    let name = name.as_bytes();
    if rest.len() < name.len() || !rest[..name.len()].eq_ignore_ascii_case(name) {
        return false;
    }

    match rest.get(name.len()) {
        Some(&b) => b.is_ascii_whitespace() || b == b'>' || b == b'/',
        None => false,
    }
}

/// Separate block-level output from whatever precedes it.
///
/// Writes a newline unless the buffer is empty or already ends in one.
pub fn double_space(out: &mut Vec<u8>) {
    if out.last().is_some_and(|&b| b != b'\n') {
        out.push(b'\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escape(src: &[u8]) -> String {
        let mut out = Vec::new();
        attr_escape(&mut out, src);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_attr_escape_plain() {
        assert_eq!(escape(b"hello"), "hello");
        assert_eq!(escape(b""), "");
    }

    #[test]
    fn test_attr_escape_specials() {
        assert_eq!(escape(b"<a href=\"x\">"), "&lt;a href=&quot;x&quot;&gt;");
        assert_eq!(escape(b"AT&T"), "AT&amp;T");
    }

    #[test]
    fn test_attr_escape_keeps_utf8() {
        assert_eq!(escape("café & crème".as_bytes()), "café &amp; crème");
    }

    #[test]
    fn test_entity_ranges() {
        assert_eq!(html_entity_ranges(b"&lt;&gt;"), vec![0..4, 4..8]);
        assert_eq!(html_entity_ranges(b"x&quot;y"), vec![1..7]);
    }

    #[test]
    fn test_entity_ranges_rejects_bad_names() {
        // too short, too long, uppercase, numeric
        assert!(html_entity_ranges(b"&a;").is_empty());
        assert!(html_entity_ranges(b"&abcdef;").is_empty());
        assert!(html_entity_ranges(b"&AMP;").is_empty());
        assert!(html_entity_ranges(b"&#39;").is_empty());
        assert!(html_entity_ranges(b"&amp").is_empty());
    }

    #[test]
    fn test_entity_escape_with_skip() {
        let src = b"a&amp;b<c";
        let skip = html_entity_ranges(src);
        let mut out = Vec::new();
        entity_escape_with_skip(&mut out, src, &skip);
        assert_eq!(out, b"a&amp;b&lt;c");
    }

    #[test]
    fn test_entity_escape_without_ranges_matches_attr_escape() {
        let mut out = Vec::new();
        entity_escape_with_skip(&mut out, b"a&b", &[]);
        assert_eq!(out, b"a&amp;b");
    }

    #[test]
    fn test_is_html_tag() {
        assert!(is_html_tag(b"<img src=\"a.png\">", "img"));
        assert!(is_html_tag(b"< style>", "style"));
        assert!(is_html_tag(b"<br/>", "br"));
        assert!(!is_html_tag(b"<image>", "img"));
        assert!(!is_html_tag(b"<a", "a"));
        assert!(!is_html_tag(b"a>", "a"));
    }

    #[test]
    fn test_double_space() {
        let mut out = Vec::new();
        double_space(&mut out);
        assert!(out.is_empty());

        out.extend_from_slice(b"<p>x</p>");
        double_space(&mut out);
        assert_eq!(out, b"<p>x</p>\n");

        double_space(&mut out);
        assert_eq!(out, b"<p>x</p>\n");
    }
}
