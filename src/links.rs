//! Link classification used by the link safety policy.

const SAFE_PATHS: [&[u8]; 3] = [b"/", b"./", b"../"];
const SAFE_SCHEMES: [&[u8]; 4] = [b"http://", b"https://", b"ftp://", b"mailto://"];

/// Kind of an autolink target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LinkKind {
    /// An ordinary URL.
    #[default]
    Normal,
    /// An email address, rendered with a `mailto:` href.
    Email,
}

/// Check whether a link target is safe to emit as a hyperlink.
///
/// Safe targets are local paths (`/`, `./`, `../`) and `http`, `https`,
/// `ftp` or `mailto://` URLs whose prefix is followed by an alphanumeric.
///
/// # Examples
///
/// ```
/// use hemline::links::is_safe_link;
///
/// assert!(is_safe_link(b"https://example.com"));
/// assert!(is_safe_link(b"./notes.html"));
/// assert!(!is_safe_link(b"javascript:alert(1)"));
/// ```
pub fn is_safe_link(link: &[u8]) -> bool {
    for path in SAFE_PATHS {
        if let Some(rest) = link.strip_prefix(path) {
            match rest.first() {
                None => return true,
                Some(b) if b.is_ascii_alphanumeric() => return true,
                Some(_) => {}
            }
        }
    }

    SAFE_SCHEMES.iter().any(|scheme| {
        link.len() > scheme.len()
            && link[..scheme.len()].eq_ignore_ascii_case(scheme)
            && link[scheme.len()].is_ascii_alphanumeric()
    })
}

/// Check whether a link target is relative to the current document.
///
/// Fragments (`#x`), rooted paths (`/x` but not `//x`), `./` and `../`
/// paths, and any target without a URI scheme count as relative.
///
/// # Examples
///
/// ```
/// use hemline::links::is_relative_link;
///
/// assert!(is_relative_link(b"#intro"));
/// assert!(is_relative_link(b"a/b"));
/// assert!(!is_relative_link(b"https://example.com"));
/// assert!(!is_relative_link(b"//cdn.example.com/x.js"));
/// ```
pub fn is_relative_link(link: &[u8]) -> bool {
    match link {
        [] => false,
        [b'#', ..] => true,
        [b'/', b'/', ..] => false,
        [b'/', ..] => true,
        _ if link.starts_with(b"./") || link.starts_with(b"../") => true,
        _ => !has_scheme(link),
    }
}

/// A scheme is `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )` followed by `:`,
/// appearing before any `/`, `?` or `#`.
fn has_scheme(link: &[u8]) -> bool {
    let Some(colon) = link.iter().position(|&b| matches!(b, b':' | b'/' | b'?' | b'#')) else {
        return false;
    };
    if link[colon] != b':' || colon == 0 {
        return false;
    }

    let scheme = &link[..colon];
    scheme[0].is_ascii_alphabetic()
        && scheme
            .iter()
            .all(|&b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'))
}
