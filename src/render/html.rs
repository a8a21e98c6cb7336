//! HTML backend.
//!
//! Block constructs that receive a content producer are emitted
//! all-or-nothing: the opening tag is written speculatively and the buffer
//! is truncated back to where the construct started if the producer
//! reports that it wrote nothing.

use std::io::Write;

use bstr::ByteSlice;

use super::{Content, ListItemFlags, ListKind, OrderedStyle, Renderer, TableAlignment};
use crate::attr::InlineAttr;
use crate::escape::{attr_escape, double_space, entity_escape_with_skip, html_entity_ranges, is_html_tag};
use crate::links::{LinkKind, is_relative_link, is_safe_link};
use crate::options::RenderOptions;
use crate::slugify::slugify;
use crate::toc::TocBuilder;

/// Renders document constructs to HTML.
///
/// One instance holds the state of one render session: the table of
/// contents under construction, the offset where it will be spliced in,
/// pending inline attributes and the footnote reference counter.
/// [`Renderer::document_header`] starts a fresh session.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    pub(super) options: RenderOptions,
    pub(super) close_tag: &'static str,
    pub(super) inline_attr: Option<InlineAttr>,
    pub(super) toc: TocBuilder,
    pub(super) toc_mark: Option<usize>,
    pub(super) footnote_refs: usize,
}

impl HtmlRenderer {
    /// Create a renderer for one document.
    pub fn new(options: RenderOptions) -> Self {
        let close_tag = options.close_tag();
        Self {
            options,
            close_tag,
            inline_attr: None,
            toc: TocBuilder::new(),
            toc_mark: None,
            footnote_refs: 0,
        }
    }

    /// Clear all per-document state so the renderer can start over.
    pub fn reset(&mut self) {
        self.inline_attr = None;
        self.toc.reset();
        self.toc_mark = None;
        self.footnote_refs = 0;
    }

    /// The table of contents built so far.
    pub fn toc(&self) -> &TocBuilder {
        &self.toc
    }

    /// Number of footnote references rendered in this session.
    pub fn footnote_refs(&self) -> usize {
        self.footnote_refs
    }

    /// Run `content`, and undo everything written since `marker` if it
    /// reports that nothing should be kept.
    fn produce(&mut self, out: &mut Vec<u8>, content: Content<'_>, marker: usize, what: &str) -> bool {
        if content(self, out) {
            return true;
        }
        tracing::trace!(
            construct = what,
            discarded = out.len().saturating_sub(marker),
            "elided empty block"
        );
        out.truncate(marker);
        false
    }

    fn write_absolute_prefix(&self, out: &mut Vec<u8>, link: &[u8]) {
        let prefix = &self.options.parameters.absolute_prefix;
        if !prefix.is_empty() && is_relative_link(link) {
            out.extend_from_slice(prefix.as_bytes());
            if link.first() != Some(&b'/') {
                out.push(b'/');
            }
        }
    }

    fn write_external_attributes(&self, out: &mut Vec<u8>, link: &[u8]) {
        if is_relative_link(link) {
            return;
        }
        if self.options.nofollow_links {
            out.extend_from_slice(b"\" rel=\"nofollow");
        }
        if self.options.href_target_blank {
            out.extend_from_slice(b"\" target=\"_blank");
        }
    }

    fn write_inert(&self, out: &mut Vec<u8>, text: &[u8]) {
        out.extend_from_slice(b"<tt>");
        attr_escape(out, text);
        out.extend_from_slice(b"</tt>");
    }

    fn write_wrapped(out: &mut Vec<u8>, open: &[u8], text: &[u8], close: &[u8]) {
        out.extend_from_slice(open);
        out.extend_from_slice(text);
        out.extend_from_slice(close);
    }

    fn write_cell(&self, out: &mut Vec<u8>, tag: &str, text: &[u8], align: TableAlignment) {
        double_space(out);
        out.push(b'<');
        out.extend_from_slice(tag.as_bytes());
        if let Some(align) = align.attribute() {
            let _ = write!(out, " align=\"{align}\"");
        }
        out.push(b'>');
        out.extend_from_slice(text);
        let _ = write!(out, "</{tag}>");
    }

    fn write_footnote_anchor(&self, out: &mut Vec<u8>, kind: &str, slug: &[u8]) {
        out.extend_from_slice(kind.as_bytes());
        attr_escape(out, self.options.parameters.footnote_anchor_prefix.as_bytes());
        out.extend_from_slice(slug);
    }
}

impl Renderer for HtmlRenderer {
    fn options(&self) -> &RenderOptions {
        &self.options
    }

    fn header(&mut self, out: &mut Vec<u8>, content: Content<'_>, level: usize, id: &str) {
        // there is no <h0> or <h7>
        let level = level.clamp(1, 6);
        let marker = out.len();
        double_space(out);

        let _ = write!(out, "<h{level}");
        if !id.is_empty() {
            out.extend_from_slice(b" id=\"");
            attr_escape(out, id.as_bytes());
            out.push(b'"');
        } else if self.options.toc {
            // the builder consumes this number when the heading is registered
            let _ = write!(out, " id=\"toc_{}\"", self.toc.header_count());
        }
        out.push(b'>');

        let text_start = out.len();
        if !self.produce(out, content, marker, "header") {
            return;
        }

        if self.options.toc {
            let text = out.get(text_start..).unwrap_or_default();
            self.toc.register(text, level, id);
        }

        let _ = write!(out, "</h{level}>\n");
    }

    fn paragraph(&mut self, out: &mut Vec<u8>, content: Content<'_>) {
        let marker = out.len();
        double_space(out);

        out.extend_from_slice(b"<p>");
        if !self.produce(out, content, marker, "paragraph") {
            return;
        }
        out.extend_from_slice(b"</p>\n");
    }

    fn list(
        &mut self,
        out: &mut Vec<u8>,
        content: Content<'_>,
        kind: ListKind,
        _start: usize,
        _group: Option<&[u8]>,
    ) {
        let marker = out.len();
        double_space(out);

        let open: &[u8] = match kind {
            ListKind::Unordered => b"<ul>",
            ListKind::Ordered(OrderedStyle::Decimal) => b"<ol>",
            ListKind::Ordered(OrderedStyle::AlphaLower) => b"<ol type=\"a\">",
            ListKind::Ordered(OrderedStyle::AlphaUpper) => b"<ol type=\"A\">",
            ListKind::Ordered(OrderedStyle::RomanLower) => b"<ol type=\"i\">",
            ListKind::Ordered(OrderedStyle::RomanUpper) => b"<ol type=\"I\">",
        };
        out.extend_from_slice(open);

        if !self.produce(out, content, marker, "list") {
            return;
        }

        if kind.is_ordered() {
            out.extend_from_slice(b"</ol>\n");
        } else {
            out.extend_from_slice(b"</ul>\n");
        }
    }

    fn list_item(&mut self, out: &mut Vec<u8>, text: &[u8], flags: ListItemFlags) {
        if flags.needs_separation() {
            double_space(out);
        }
        Self::write_wrapped(out, b"<li>", text, b"</li>\n");
    }

    fn comment_html(&mut self, out: &mut Vec<u8>, text: &[u8]) {
        self.block_html(out, text);
    }

    fn block_html(&mut self, out: &mut Vec<u8>, text: &[u8]) {
        if self.options.skip_html {
            return;
        }
        double_space(out);
        out.extend_from_slice(text);
        out.push(b'\n');
    }

    fn hrule(&mut self, out: &mut Vec<u8>) {
        double_space(out);
        out.extend_from_slice(b"<hr");
        out.extend_from_slice(self.close_tag.as_bytes());
    }

    fn block_code(&mut self, out: &mut Vec<u8>, text: &[u8], lang: &str, _caption: &[u8]) {
        double_space(out);

        let classes: Vec<&str> = lang
            .split_whitespace()
            .map(|word| word.strip_prefix('.').unwrap_or(word))
            .filter(|word| !word.is_empty())
            .collect();

        if classes.is_empty() {
            out.extend_from_slice(b"<pre><code>");
        } else {
            out.extend_from_slice(b"<pre><code class=\"language-");
            attr_escape(out, classes.join(" ").as_bytes());
            out.extend_from_slice(b"\">");
        }

        attr_escape(out, text);
        out.extend_from_slice(b"</code></pre>\n");
    }

    fn block_quote(&mut self, out: &mut Vec<u8>, text: &[u8], _attribution: &[u8]) {
        double_space(out);
        Self::write_wrapped(out, b"<blockquote>\n", text, b"</blockquote>\n");
    }

    fn aside(&mut self, out: &mut Vec<u8>, text: &[u8]) {
        self.block_quote(out, text, b"");
    }

    fn note(&mut self, out: &mut Vec<u8>, text: &[u8]) {
        self.block_quote(out, text, b"");
    }

    fn table(
        &mut self,
        out: &mut Vec<u8>,
        header: &[u8],
        body: &[u8],
        footer: &[u8],
        _columns: &[TableAlignment],
        caption: &[u8],
    ) {
        double_space(out);
        out.extend_from_slice(b"<table>\n");
        if !caption.is_empty() {
            Self::write_wrapped(out, b"<caption>\n", caption, b"\n</caption>\n");
        }
        Self::write_wrapped(out, b"<thead>\n", header, b"</thead>\n\n");
        Self::write_wrapped(out, b"<tbody>\n", body, b"</tbody>\n");
        if !footer.is_empty() {
            Self::write_wrapped(out, b"<tfoot>\n", footer, b"</tfoot>\n");
        }
        out.extend_from_slice(b"</table>\n");
    }

    fn table_row(&mut self, out: &mut Vec<u8>, text: &[u8]) {
        double_space(out);
        Self::write_wrapped(out, b"<tr>\n", text, b"\n</tr>\n");
    }

    fn table_header_cell(&mut self, out: &mut Vec<u8>, text: &[u8], align: TableAlignment) {
        self.write_cell(out, "th", text, align);
    }

    fn table_cell(&mut self, out: &mut Vec<u8>, text: &[u8], align: TableAlignment) {
        self.write_cell(out, "td", text, align);
    }

    fn footnotes(&mut self, out: &mut Vec<u8>, content: Content<'_>) {
        out.extend_from_slice(b"<div class=\"footnotes\">\n");
        self.hrule(out);
        self.list(out, content, ListKind::Ordered(OrderedStyle::Decimal), 1, None);
        out.extend_from_slice(b"</div>\n");
    }

    fn footnote_item(&mut self, out: &mut Vec<u8>, name: &[u8], text: &[u8], flags: ListItemFlags) {
        if flags.needs_separation() {
            double_space(out);
        }
        let slug = slugify(name);

        out.extend_from_slice(b"<li id=\"");
        self.write_footnote_anchor(out, "fn:", &slug);
        out.extend_from_slice(b"\">");
        out.extend_from_slice(text);

        if self.options.footnote_return_links {
            out.extend_from_slice(b" <a class=\"footnote-return\" href=\"#");
            self.write_footnote_anchor(out, "fnref:", &slug);
            out.extend_from_slice(b"\">");
            out.extend_from_slice(self.options.parameters.footnote_return_link_contents.as_bytes());
            out.extend_from_slice(b"</a>");
        }

        out.extend_from_slice(b"</li>\n");
    }

    fn auto_link(&mut self, out: &mut Vec<u8>, link: &[u8], kind: LinkKind) {
        if self.options.skip_links
            || (self.options.safe_links_only && kind != LinkKind::Email && !is_safe_link(link))
        {
            tracing::debug!(link = %link.as_bstr(), "autolink rendered as inert text");
            self.write_inert(out, link);
            return;
        }

        let skip = html_entity_ranges(link);

        out.extend_from_slice(b"<a href=\"");
        match kind {
            LinkKind::Email if !link.starts_with(b"mailto:") => out.extend_from_slice(b"mailto:"),
            LinkKind::Email => {}
            LinkKind::Normal => self.write_absolute_prefix(out, link),
        }
        entity_escape_with_skip(out, link, &skip);

        self.write_external_attributes(out, link);
        out.extend_from_slice(b"\">");

        // show the address, not the scheme
        if let Some(address) = link.strip_prefix(b"mailto://") {
            attr_escape(out, address);
        } else if let Some(address) = link.strip_prefix(b"mailto:") {
            attr_escape(out, address);
        } else {
            entity_escape_with_skip(out, link, &skip);
        }

        out.extend_from_slice(b"</a>");
    }

    fn link(&mut self, out: &mut Vec<u8>, link: &[u8], title: &[u8], content: &[u8]) {
        if self.options.skip_links || (self.options.safe_links_only && !is_safe_link(link)) {
            tracing::debug!(link = %link.as_bstr(), "link rendered as inert text");
            self.write_inert(out, content);
            return;
        }

        out.extend_from_slice(b"<a href=\"");
        self.write_absolute_prefix(out, link);
        attr_escape(out, link);
        if !title.is_empty() {
            out.extend_from_slice(b"\" title=\"");
            attr_escape(out, title);
        }
        self.write_external_attributes(out, link);

        out.extend_from_slice(b"\">");
        out.extend_from_slice(content);
        out.extend_from_slice(b"</a>");
    }

    fn image(&mut self, out: &mut Vec<u8>, link: &[u8], title: &[u8], alt: &[u8]) {
        if self.options.skip_images {
            return;
        }

        out.extend_from_slice(b"<img src=\"");
        self.write_absolute_prefix(out, link);
        attr_escape(out, link);
        out.extend_from_slice(b"\" alt=\"");
        attr_escape(out, alt);
        if !title.is_empty() {
            out.extend_from_slice(b"\" title=\"");
            attr_escape(out, title);
        }
        out.push(b'"');
        out.extend_from_slice(self.close_tag.as_bytes());
    }

    fn code_span(&mut self, out: &mut Vec<u8>, text: &[u8]) {
        out.extend_from_slice(b"<code>");
        attr_escape(out, text);
        out.extend_from_slice(b"</code>");
    }

    fn emphasis(&mut self, out: &mut Vec<u8>, text: &[u8]) {
        if text.is_empty() {
            return;
        }
        Self::write_wrapped(out, b"<em>", text, b"</em>");
    }

    fn double_emphasis(&mut self, out: &mut Vec<u8>, text: &[u8]) {
        Self::write_wrapped(out, b"<strong>", text, b"</strong>");
    }

    fn triple_emphasis(&mut self, out: &mut Vec<u8>, text: &[u8]) {
        Self::write_wrapped(out, b"<strong><em>", text, b"</em></strong>");
    }

    fn strike_through(&mut self, out: &mut Vec<u8>, text: &[u8]) {
        Self::write_wrapped(out, b"<del>", text, b"</del>");
    }

    fn subscript(&mut self, out: &mut Vec<u8>, text: &[u8]) {
        Self::write_wrapped(out, b"<sub>", text, b"</sub>");
    }

    fn superscript(&mut self, out: &mut Vec<u8>, text: &[u8]) {
        Self::write_wrapped(out, b"<sup>", text, b"</sup>");
    }

    fn line_break(&mut self, out: &mut Vec<u8>) {
        out.extend_from_slice(b"<br");
        out.extend_from_slice(self.close_tag.as_bytes());
    }

    fn abbreviation(&mut self, out: &mut Vec<u8>, abbr: &[u8], title: &[u8]) {
        if title.is_empty() {
            out.extend_from_slice(b"<abbr>");
        } else {
            out.extend_from_slice(b"<abbr title=\"");
            attr_escape(out, title);
            out.extend_from_slice(b"\">");
        }
        out.extend_from_slice(abbr);
        out.extend_from_slice(b"</abbr>");
    }

    fn raw_html_tag(&mut self, out: &mut Vec<u8>, text: &[u8]) {
        let options = &self.options;
        if options.skip_html
            || (options.skip_style && is_html_tag(text, "style"))
            || (options.skip_links && is_html_tag(text, "a"))
            || (options.skip_images && is_html_tag(text, "img"))
        {
            return;
        }
        out.extend_from_slice(text);
    }

    fn footnote_ref(&mut self, out: &mut Vec<u8>, reference: &[u8], id: usize) {
        let slug = slugify(reference);

        out.extend_from_slice(b"<sup class=\"footnote-ref\" id=\"");
        self.write_footnote_anchor(out, "fnref:", &slug);
        out.extend_from_slice(b"\"><a rel=\"footnote\" href=\"#");
        self.write_footnote_anchor(out, "fn:", &slug);
        let _ = write!(out, "\">{id}</a></sup>");

        self.footnote_refs += 1;
    }

    fn math(&mut self, out: &mut Vec<u8>, text: &[u8], display: bool) {
        let attr = self.inline_attr.take().unwrap_or_default();
        if display {
            out.extend_from_slice(b"<script ");
            if !attr.is_empty() {
                out.extend_from_slice(attr.to_string().as_bytes());
                out.push(b' ');
            }
            out.extend_from_slice(b"type=\"math/tex; mode=display\"> ");
        } else {
            out.extend_from_slice(b"<script type=\"math/tex\"> ");
        }
        out.extend_from_slice(text);
        out.extend_from_slice(b"</script>");
    }

    fn example(&mut self, out: &mut Vec<u8>, index: usize) {
        let _ = write!(out, "({index})");
    }

    fn entity(&mut self, out: &mut Vec<u8>, entity: &[u8]) {
        out.extend_from_slice(entity);
    }

    fn normal_text(&mut self, out: &mut Vec<u8>, text: &[u8]) {
        attr_escape(out, text);
    }

    fn document_header(&mut self, out: &mut Vec<u8>, first: bool) {
        if first {
            self.begin_document(out);
        }
    }

    fn document_footer(&mut self, out: &mut Vec<u8>, first: bool) {
        if first {
            self.end_document(out);
        }
    }

    fn set_inline_attr(&mut self, attr: InlineAttr) {
        self.inline_attr = Some(attr);
    }

    fn inline_attr(&self) -> InlineAttr {
        self.inline_attr.clone().unwrap_or_default()
    }
}
