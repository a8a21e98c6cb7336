//! Table-of-contents builder.
//!
//! Headings are registered in document order and accumulated as nested
//! `<ul>` lists keyed by heading level. Skipped levels produce naked
//! nested lists, and a shallower heading closes as many layers as needed
//! before its own item is written. [`TocBuilder::finalize`] closes whatever
//! is still open so the fragment is always balanced.

use std::io::Write;

use bstr::ByteSlice;

const ITEM_CLOSE: &[u8] = b"</li>\n";

/// Incremental builder for the TOC fragment of one render.
#[derive(Debug, Clone, Default)]
pub struct TocBuilder {
    buf: Vec<u8>,
    current_level: usize,
    header_count: usize,
}

impl TocBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number that the next auto-identified heading will receive.
    pub fn header_count(&self) -> usize {
        self.header_count
    }

    /// Depth of the currently open list nesting. Zero when no list is open.
    pub fn current_level(&self) -> usize {
        self.current_level
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// The TOC markup accumulated so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Register a heading.
    ///
    /// `text` is the already-rendered heading content and becomes the link
    /// label. The link target is `anchor` when non-empty, otherwise the
    /// generated `toc_<n>` id, which consumes one value of the header count.
    pub fn register(&mut self, text: &[u8], level: usize, anchor: &str) {
        // level 0 would write an item outside of any list
        let level = level.max(1);

        while level > self.current_level {
            if self.buf.ends_with_str(ITEM_CLOSE) {
                // reopen the previous item so the sublist nests inside it
                self.buf.truncate(self.buf.len() - ITEM_CLOSE.len());
            } else if self.current_level > 0 {
                self.buf.extend_from_slice(b"<li>");
            }
            if !self.buf.is_empty() {
                self.buf.push(b'\n');
            }
            self.buf.extend_from_slice(b"<ul>\n");
            self.current_level += 1;
        }

        while level < self.current_level {
            self.buf.extend_from_slice(b"</ul>");
            if self.current_level > 1 {
                self.buf.extend_from_slice(ITEM_CLOSE);
            }
            self.current_level -= 1;
        }

        self.buf.extend_from_slice(b"<li><a href=\"#");
        if anchor.is_empty() {
            let _ = write!(self.buf, "toc_{}", self.header_count);
            self.header_count += 1;
        } else {
            crate::escape::attr_escape(&mut self.buf, anchor.as_bytes());
        }
        self.buf.extend_from_slice(b"\">");
        self.buf.extend_from_slice(text);
        self.buf.extend_from_slice(b"</a>");
        self.buf.extend_from_slice(ITEM_CLOSE);

        tracing::trace!(level, depth = self.current_level, "registered toc heading");
    }

    /// Close every list and item that is still open.
    ///
    /// Safe to call more than once, and a no-op when no heading was
    /// registered.
    pub fn finalize(&mut self) {
        while self.current_level > 1 {
            self.buf.extend_from_slice(b"</ul></li>\n");
            self.current_level -= 1;
        }

        if self.current_level == 1 {
            self.buf.extend_from_slice(b"</ul>\n");
            self.current_level = 0;
        }
    }

    /// Discard all state, including the header count.
    pub fn reset(&mut self) {
        self.buf.clear();
        self.current_level = 0;
        self.header_count = 0;
    }
}
