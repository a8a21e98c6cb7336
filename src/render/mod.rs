//! Renderer interface and the HTML backend.
//!
//! A tree walker drives a [`Renderer`] by calling one method per document
//! construct, in document order. Inline operations receive content that
//! has already been rendered; block operations that may turn out empty
//! receive a [`Content`] producer instead and must discard their opening
//! markup when the producer reports that nothing was written.
//!
//! ```
//! use hemline::{HtmlRenderer, RenderOptions, Renderer};
//!
//! let mut renderer = HtmlRenderer::new(RenderOptions::default());
//! let mut out = Vec::new();
//!
//! renderer.paragraph(&mut out, &mut |r, out| {
//!     r.normal_text(out, b"fish & chips");
//!     true
//! });
//! renderer.paragraph(&mut out, &mut |_, _| false);
//!
//! assert_eq!(out, b"<p>fish &amp; chips</p>\n");
//! ```

mod document;
mod html;

pub use html::HtmlRenderer;

use crate::attr::InlineAttr;
use crate::links::LinkKind;
use crate::options::RenderOptions;

/// A deferred content producer.
///
/// It is invoked at most once with the renderer it belongs to and the
/// output buffer, writes nested content, and returns `true` if that content
/// should be kept.
pub type Content<'a> = &'a mut dyn FnMut(&mut dyn Renderer, &mut Vec<u8>) -> bool;

/// Numbering style of an ordered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OrderedStyle {
    #[default]
    Decimal,
    AlphaLower,
    AlphaUpper,
    RomanLower,
    RomanUpper,
}

/// Whether a list is bulleted or numbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ListKind {
    #[default]
    Unordered,
    Ordered(OrderedStyle),
}

impl ListKind {
    pub fn is_ordered(self) -> bool {
        matches!(self, ListKind::Ordered(_))
    }
}

/// Layout hints for a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListItemFlags {
    /// The item holds block content rather than a single inline run.
    pub contains_block: bool,
    /// The item is the first one of its list.
    pub beginning_of_list: bool,
}

impl ListItemFlags {
    fn needs_separation(self) -> bool {
        self.contains_block || self.beginning_of_list
    }
}

/// Horizontal alignment of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TableAlignment {
    #[default]
    None,
    Left,
    Right,
    Center,
}

impl TableAlignment {
    fn attribute(self) -> Option<&'static str> {
        match self {
            TableAlignment::None => None,
            TableAlignment::Left => Some("left"),
            TableAlignment::Right => Some("right"),
            TableAlignment::Center => Some("center"),
        }
    }
}

/// Book-style division markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DocumentMatter {
    Front,
    Main,
    Back,
}

/// One method per document construct.
///
/// Implementations write directly to `out`. Methods are called strictly in
/// document order and never concurrently.
pub trait Renderer {
    /// The configuration this renderer was created with.
    fn options(&self) -> &RenderOptions;

    // ------------------------------------------------------------------
    // Block-level constructs
    // ------------------------------------------------------------------

    fn header(&mut self, out: &mut Vec<u8>, content: Content<'_>, level: usize, id: &str);
    fn paragraph(&mut self, out: &mut Vec<u8>, content: Content<'_>);
    fn list(
        &mut self,
        out: &mut Vec<u8>,
        content: Content<'_>,
        kind: ListKind,
        start: usize,
        group: Option<&[u8]>,
    );
    fn list_item(&mut self, out: &mut Vec<u8>, text: &[u8], flags: ListItemFlags);
    fn comment_html(&mut self, out: &mut Vec<u8>, text: &[u8]);
    fn block_html(&mut self, out: &mut Vec<u8>, text: &[u8]);
    fn hrule(&mut self, out: &mut Vec<u8>);
    fn block_code(&mut self, out: &mut Vec<u8>, text: &[u8], lang: &str, caption: &[u8]);
    fn block_quote(&mut self, out: &mut Vec<u8>, text: &[u8], attribution: &[u8]);
    fn aside(&mut self, out: &mut Vec<u8>, text: &[u8]);
    fn note(&mut self, out: &mut Vec<u8>, text: &[u8]);
    fn table(
        &mut self,
        out: &mut Vec<u8>,
        header: &[u8],
        body: &[u8],
        footer: &[u8],
        columns: &[TableAlignment],
        caption: &[u8],
    );
    fn table_row(&mut self, out: &mut Vec<u8>, text: &[u8]);
    fn table_header_cell(&mut self, out: &mut Vec<u8>, text: &[u8], align: TableAlignment);
    fn table_cell(&mut self, out: &mut Vec<u8>, text: &[u8], align: TableAlignment);
    fn footnotes(&mut self, out: &mut Vec<u8>, content: Content<'_>);
    fn footnote_item(&mut self, out: &mut Vec<u8>, name: &[u8], text: &[u8], flags: ListItemFlags);

    /// A book part. Backends without a notion of parts may ignore it.
    fn part(&mut self, _out: &mut Vec<u8>, _content: Content<'_>, _id: &str) {}
    /// A document abstract. Backends without a notion of abstracts may ignore it.
    fn abstract_block(&mut self, _out: &mut Vec<u8>, _content: Content<'_>, _id: &str) {}
    fn document_matter(&mut self, _out: &mut Vec<u8>, _matter: DocumentMatter) {}

    // ------------------------------------------------------------------
    // Inline constructs
    // ------------------------------------------------------------------

    fn auto_link(&mut self, out: &mut Vec<u8>, link: &[u8], kind: LinkKind);
    fn link(&mut self, out: &mut Vec<u8>, link: &[u8], title: &[u8], content: &[u8]);
    fn image(&mut self, out: &mut Vec<u8>, link: &[u8], title: &[u8], alt: &[u8]);
    fn code_span(&mut self, out: &mut Vec<u8>, text: &[u8]);
    fn emphasis(&mut self, out: &mut Vec<u8>, text: &[u8]);
    fn double_emphasis(&mut self, out: &mut Vec<u8>, text: &[u8]);
    fn triple_emphasis(&mut self, out: &mut Vec<u8>, text: &[u8]);
    fn strike_through(&mut self, out: &mut Vec<u8>, text: &[u8]);
    fn subscript(&mut self, out: &mut Vec<u8>, text: &[u8]);
    fn superscript(&mut self, out: &mut Vec<u8>, text: &[u8]);
    fn line_break(&mut self, out: &mut Vec<u8>);
    fn abbreviation(&mut self, out: &mut Vec<u8>, abbr: &[u8], title: &[u8]);
    fn raw_html_tag(&mut self, out: &mut Vec<u8>, text: &[u8]);
    fn footnote_ref(&mut self, out: &mut Vec<u8>, reference: &[u8], id: usize);
    fn math(&mut self, out: &mut Vec<u8>, text: &[u8], display: bool);
    fn example(&mut self, out: &mut Vec<u8>, index: usize);
    fn entity(&mut self, out: &mut Vec<u8>, entity: &[u8]);
    fn normal_text(&mut self, out: &mut Vec<u8>, text: &[u8]);

    fn index(&mut self, _out: &mut Vec<u8>, _primary: &[u8], _secondary: &[u8], _is_primary: bool) {}
    fn citation(&mut self, _out: &mut Vec<u8>, _link: &[u8], _title: &[u8]) {}

    // ------------------------------------------------------------------
    // Document session
    // ------------------------------------------------------------------

    /// Start of a document section. Only the `first` section does any work.
    fn document_header(&mut self, out: &mut Vec<u8>, first: bool);
    /// End of a document section. Only the `first` section does any work.
    fn document_footer(&mut self, out: &mut Vec<u8>, first: bool);

    /// Attach attributes to the next inline construct that consumes them.
    fn set_inline_attr(&mut self, attr: InlineAttr);
    /// The pending attributes, or an empty set.
    fn inline_attr(&self) -> InlineAttr;
}
