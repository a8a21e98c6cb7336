//! Rendering configuration.
//!
//! Every combination of fields is meaningful; nothing is validated. A few
//! combinations only have an effect together: `omit_contents` does nothing
//! without `toc`, and `css` is only written with `complete_page`.

/// Default label of the link from a footnote back to its reference.
pub const DEFAULT_RETURN_LINK_CONTENTS: &str = "<sup>[return]</sup>";

/// String parameters used while rendering links and footnotes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HtmlParameters {
    /// Prepended to relative link and image targets.
    pub absolute_prefix: String,
    /// Inserted into footnote anchors (`fn:PREFIXname`), to keep several
    /// documents on one page apart.
    pub footnote_anchor_prefix: String,
    /// Raw HTML label of footnote return links.
    pub footnote_return_link_contents: String,
}

impl Default for HtmlParameters {
    fn default() -> Self {
        Self {
            absolute_prefix: String::new(),
            footnote_anchor_prefix: String::new(),
            footnote_return_link_contents: DEFAULT_RETURN_LINK_CONTENTS.to_string(),
        }
    }
}

/// Configuration for [`HtmlRenderer`](crate::HtmlRenderer).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderOptions {
    /// Drop raw HTML blocks, comments and inline tags.
    pub skip_html: bool,
    /// Drop inline `<style>` tags.
    pub skip_style: bool,
    /// Drop images.
    pub skip_images: bool,
    /// Render every link as inert text.
    pub skip_links: bool,
    /// Render links with unsafe targets as inert text.
    pub safe_links_only: bool,
    /// Add `rel="nofollow"` to external links.
    pub nofollow_links: bool,
    /// Add `target="_blank"` to external links.
    pub href_target_blank: bool,
    /// Build a table of contents and splice it in at the document header.
    pub toc: bool,
    /// With `toc`, emit only the table of contents.
    pub omit_contents: bool,
    /// Add return links to footnotes.
    pub footnote_return_links: bool,
    /// Wrap the output in a complete HTML page.
    pub complete_page: bool,
    /// Emit XHTML-style self-closing tags.
    pub use_xhtml: bool,
    /// Page title, used with `complete_page`.
    pub title: String,
    /// Stylesheet URL, used with `complete_page`.
    pub css: String,
    pub parameters: HtmlParameters,
}

impl RenderOptions {
    /// Create options with every behavior switched off.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_toc(mut self, toc: bool) -> Self {
        self.toc = toc;
        self
    }

    pub fn with_complete_page(mut self, complete_page: bool) -> Self {
        self.complete_page = complete_page;
        self
    }

    pub fn with_xhtml(mut self, use_xhtml: bool) -> Self {
        self.use_xhtml = use_xhtml;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_css(mut self, css: impl Into<String>) -> Self {
        self.css = css.into();
        self
    }

    pub fn with_absolute_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.parameters.absolute_prefix = prefix.into();
        self
    }

    pub fn with_footnote_anchor_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.parameters.footnote_anchor_prefix = prefix.into();
        self
    }

    /// How singleton tags such as `<hr>` and `<br>` are terminated.
    pub fn close_tag(&self) -> &'static str {
        if self.use_xhtml { " />\n" } else { ">\n" }
    }
}
