//! Inline attribute sets attached to the next inline construct.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// An id, a set of classes and key/value pairs.
///
/// Classes and keys are kept sorted so the rendered attribute string is
/// deterministic.
///
/// # Examples
///
/// ```
/// use hemline::InlineAttr;
///
/// let attr = InlineAttr::new()
///     .with_id("eq1")
///     .with_class("numbered")
///     .with_attr("title", "Euler");
/// assert_eq!(attr.to_string(), r#"id="eq1" class="numbered" title="Euler""#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InlineAttr {
    pub id: String,
    pub classes: BTreeSet<String>,
    pub attrs: BTreeMap<String, String>,
}

impl InlineAttr {
    /// Create an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Add a class.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.insert(class.into());
        self
    }

    /// Add a key/value pair, replacing any previous value for `key`.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Whether the set carries nothing to render.
    pub fn is_empty(&self) -> bool {
        self.id.is_empty() && self.classes.is_empty() && self.attrs.is_empty()
    }
}

impl fmt::Display for InlineAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if !self.id.is_empty() {
            parts.push(format!("id=\"{}\"", escape_value(&self.id)));
        }
        if !self.classes.is_empty() {
            let classes: Vec<&str> = self.classes.iter().map(String::as_str).collect();
            parts.push(format!("class=\"{}\"", escape_value(&classes.join(" "))));
        }
        for (key, value) in &self.attrs {
            parts.push(format!("{key}=\"{}\"", escape_value(value)));
        }

        f.write_str(&parts.join(" "))
    }
}

fn escape_value(value: &str) -> String {
    let mut out = Vec::with_capacity(value.len());
    crate::escape::attr_escape(&mut out, value.as_bytes());
    // escaping only replaces ASCII bytes, so UTF-8 stays valid
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let attr = InlineAttr::new();
        assert!(attr.is_empty());
        assert_eq!(attr.to_string(), "");
    }

    #[test]
    fn test_classes_sorted() {
        let attr = InlineAttr::new().with_class("zeta").with_class("alpha");
        assert_eq!(attr.to_string(), r#"class="alpha zeta""#);
    }

    #[test]
    fn test_attrs_sorted_and_replaced() {
        let attr = InlineAttr::new()
            .with_attr("b", "1")
            .with_attr("a", "2")
            .with_attr("b", "3");
        assert_eq!(attr.to_string(), r#"a="2" b="3""#);
    }

    #[test]
    fn test_values_escaped() {
        let attr = InlineAttr::new().with_id("x\"y").with_attr("title", "a<b");
        assert_eq!(attr.to_string(), r#"id="x&quot;y" title="a&lt;b""#);
    }
}
