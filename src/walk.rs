//! Drive a [`Renderer`] over a [`Document`] in document order.
//!
//! Inline content is rendered into scratch buffers and handed to the
//! enclosing construct as bytes. Headings, paragraphs and lists receive
//! content producers that report `false` when nothing was written, which
//! lets the renderer elide them entirely.

use std::collections::HashMap;

use crate::options::RenderOptions;
use crate::render::{HtmlRenderer, ListItemFlags, Renderer, TableAlignment};
use crate::tree::{Block, Document, Inline};

/// Render `doc` with `renderer` and return the output buffer.
pub fn render_document(doc: &Document, renderer: &mut dyn Renderer) -> Vec<u8> {
    let mut out = Vec::new();
    let mut walker = Walker::default();

    renderer.document_header(&mut out, true);
    walker.blocks(renderer, &mut out, &doc.blocks);

    if !doc.footnotes.is_empty() {
        renderer.footnotes(&mut out, &mut |r, out| {
            for (i, note) in doc.footnotes.iter().enumerate() {
                let mut body = Vec::new();
                walker.blocks(r, &mut body, &note.blocks);
                let flags = ListItemFlags {
                    contains_block: true,
                    beginning_of_list: i == 0,
                };
                r.footnote_item(out, note.name.as_bytes(), &body, flags);
            }
            true
        });
    }

    renderer.document_footer(&mut out, true);
    out
}

/// Render `doc` to an HTML string with a fresh [`HtmlRenderer`].
///
/// # Examples
///
/// ```
/// use hemline::tree::{Block, Document};
/// use hemline::{RenderOptions, render_html};
///
/// let doc = Document::new(vec![Block::heading(1, "Title"), Block::paragraph("Text")]);
/// let html = render_html(&doc, RenderOptions::new().with_toc(true));
/// assert!(html.starts_with("<nav>\n<ul>\n<li><a href=\"#toc_0\">Title</a></li>"));
/// ```
pub fn render_html(doc: &Document, options: RenderOptions) -> String {
    let mut renderer = HtmlRenderer::new(options);
    let out = render_document(doc, &mut renderer);
    String::from_utf8_lossy(&out).into_owned()
}

/// Walk state that spans the whole document.
#[derive(Debug, Default)]
struct Walker {
    /// Footnote numbers, assigned in order of first reference.
    footnote_ids: HashMap<String, usize>,
}

impl Walker {
    fn blocks(&mut self, r: &mut dyn Renderer, out: &mut Vec<u8>, blocks: &[Block]) {
        for block in blocks {
            self.block(r, out, block);
        }
    }

    fn block(&mut self, r: &mut dyn Renderer, out: &mut Vec<u8>, block: &Block) {
        match block {
            Block::Heading { level, id, content } => {
                r.header(out, &mut |r, out| self.inlines(r, out, content), *level, id);
            }

            Block::Paragraph { content } => {
                r.paragraph(out, &mut |r, out| self.inlines(r, out, content));
            }

            Block::List { kind, start, items } => {
                r.list(
                    out,
                    &mut |r, out| {
                        for (i, item) in items.iter().enumerate() {
                            let mut body = Vec::new();
                            let tight = match item.as_slice() {
                                [Block::Paragraph { content }] => {
                                    self.inlines(r, &mut body, content);
                                    true
                                }
                                _ => {
                                    self.blocks(r, &mut body, item);
                                    false
                                }
                            };
                            let flags = ListItemFlags {
                                contains_block: !tight,
                                beginning_of_list: i == 0,
                            };
                            r.list_item(out, &body, flags);
                        }
                        !items.is_empty()
                    },
                    *kind,
                    *start,
                    None,
                );
            }

            Block::BlockQuote {
                blocks,
                attribution,
            } => {
                let body = self.render_blocks(r, blocks);
                let attribution = self.render_inlines(r, attribution);
                r.block_quote(out, &body, &attribution);
            }

            Block::Aside { blocks } => {
                let body = self.render_blocks(r, blocks);
                r.aside(out, &body);
            }

            Block::Note { blocks } => {
                let body = self.render_blocks(r, blocks);
                r.note(out, &body);
            }

            Block::CodeBlock { language, code } => {
                r.block_code(out, code.as_bytes(), language, b"");
            }

            Block::Html { html } => r.block_html(out, html.as_bytes()),
            Block::Comment { html } => r.comment_html(out, html.as_bytes()),
            Block::Rule => r.hrule(out),

            Block::Table {
                alignments,
                header,
                rows,
                caption,
            } => {
                let align = |i: usize| alignments.get(i).copied().unwrap_or(TableAlignment::None);

                let mut cells = Vec::new();
                for (i, cell) in header.iter().enumerate() {
                    let text = self.render_inlines(r, cell);
                    r.table_header_cell(&mut cells, &text, align(i));
                }
                let mut head = Vec::new();
                r.table_row(&mut head, &cells);

                let mut body = Vec::new();
                for row in rows {
                    let mut cells = Vec::new();
                    for (i, cell) in row.iter().enumerate() {
                        let text = self.render_inlines(r, cell);
                        r.table_cell(&mut cells, &text, align(i));
                    }
                    r.table_row(&mut body, &cells);
                }

                let caption = self.render_inlines(r, caption);
                r.table(out, &head, &body, b"", alignments, &caption);
            }
        }
    }

    /// Render inline content into `out`, reporting whether anything was written.
    fn inlines(&mut self, r: &mut dyn Renderer, out: &mut Vec<u8>, content: &[Inline]) -> bool {
        let start = out.len();
        for inline in content {
            self.inline(r, out, inline);
        }
        out.len() > start
    }

    fn render_inlines(&mut self, r: &mut dyn Renderer, content: &[Inline]) -> Vec<u8> {
        let mut work = Vec::new();
        self.inlines(r, &mut work, content);
        work
    }

    fn render_blocks(&mut self, r: &mut dyn Renderer, blocks: &[Block]) -> Vec<u8> {
        let mut work = Vec::new();
        self.blocks(r, &mut work, blocks);
        work
    }

    fn inline(&mut self, r: &mut dyn Renderer, out: &mut Vec<u8>, inline: &Inline) {
        match inline {
            Inline::Text { text } => r.normal_text(out, text.as_bytes()),

            Inline::Emphasis { content } => {
                let work = self.render_inlines(r, content);
                r.emphasis(out, &work);
            }
            Inline::Strong { content } => {
                let work = self.render_inlines(r, content);
                r.double_emphasis(out, &work);
            }
            Inline::StrongEmphasis { content } => {
                let work = self.render_inlines(r, content);
                r.triple_emphasis(out, &work);
            }
            Inline::Strikethrough { content } => {
                let work = self.render_inlines(r, content);
                r.strike_through(out, &work);
            }
            Inline::Subscript { content } => {
                let work = self.render_inlines(r, content);
                r.subscript(out, &work);
            }
            Inline::Superscript { content } => {
                let work = self.render_inlines(r, content);
                r.superscript(out, &work);
            }

            Inline::Code { code } => r.code_span(out, code.as_bytes()),

            Inline::Link {
                url,
                title,
                content,
            } => {
                let work = self.render_inlines(r, content);
                r.link(out, url.as_bytes(), title.as_bytes(), &work);
            }
            Inline::AutoLink { url, kind } => r.auto_link(out, url.as_bytes(), *kind),
            Inline::Image { url, title, alt } => {
                r.image(out, url.as_bytes(), title.as_bytes(), alt.as_bytes());
            }

            Inline::LineBreak => r.line_break(out),
            Inline::Html { html } => r.raw_html_tag(out, html.as_bytes()),
            Inline::Entity { entity } => r.entity(out, entity.as_bytes()),

            Inline::FootnoteRef { name } => {
                let next = self.footnote_ids.len() + 1;
                let id = *self.footnote_ids.entry(name.clone()).or_insert(next);
                r.footnote_ref(out, name.as_bytes(), id);
            }

            Inline::Abbreviation { abbr, title } => {
                let mut work = Vec::new();
                r.normal_text(&mut work, abbr.as_bytes());
                r.abbreviation(out, &work, title.as_bytes());
            }

            Inline::Math {
                text,
                display,
                attr,
            } => {
                if let Some(attr) = attr {
                    r.set_inline_attr(attr.clone());
                }
                r.math(out, text.as_bytes(), *display);
            }

            Inline::Example { index } => r.example(out, *index),
        }
    }
}
