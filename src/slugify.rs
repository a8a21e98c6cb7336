//! Pure slug generation for footnote anchors.

/// Generate an anchor slug from raw bytes.
///
/// ASCII alphanumerics are kept with their case, every run of other bytes
/// becomes a single hyphen, and leading/trailing hyphens are removed.
///
/// # Examples
///
/// ```
/// use hemline::slugify::slugify;
///
/// assert_eq!(slugify(b"Hello, World!"), b"Hello-World");
/// assert_eq!(slugify(b"  note 1  "), b"note-1");
/// assert_eq!(slugify(b"!!!"), b"");
/// ```
pub fn slugify(text: &[u8]) -> Vec<u8> {
    let mut slug = Vec::with_capacity(text.len());
    let mut in_symbol_run = false;

    for &b in text {
        if b.is_ascii_alphanumeric() {
            slug.push(b);
            in_symbol_run = false;
        } else if !in_symbol_run {
            slug.push(b'-');
            in_symbol_run = true;
        }
    }

    let start = slug.iter().position(|&b| b != b'-').unwrap_or(slug.len());
    let end = slug.iter().rposition(|&b| b != b'-').map_or(start, |i| i + 1);
    slug.truncate(end);
    slug.drain(..start);
    slug
}
