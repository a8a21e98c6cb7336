//! Document wrapper and table-of-contents splicing.
//!
//! The header records where the table of contents belongs. The TOC is only
//! complete once the last heading has been seen, so the footer moves the
//! body aside, writes the TOC at the recorded offset and puts the body
//! back after it.

use std::io::Write;

use super::HtmlRenderer;
use crate::escape::attr_escape;

const GENERATOR: &str = concat!("hemline HTML renderer v", env!("CARGO_PKG_VERSION"));

impl HtmlRenderer {
    pub(super) fn begin_document(&mut self, out: &mut Vec<u8>) {
        self.reset();

        if self.options.complete_page {
            self.write_page_head(out);
        }

        if self.options.toc {
            self.toc_mark = Some(out.len());
        }
    }

    pub(super) fn end_document(&mut self, out: &mut Vec<u8>) {
        if self.options.toc {
            self.splice_toc(out);
        }

        if self.options.complete_page {
            out.extend_from_slice(b"\n</body>\n</html>\n");
        }
    }

    fn write_page_head(&self, out: &mut Vec<u8>) {
        let ending = if self.options.use_xhtml {
            out.extend_from_slice(
                b"<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Transitional//EN\" \
                  \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd\">\n",
            );
            out.extend_from_slice(b"<html xmlns=\"http://www.w3.org/1999/xhtml\">\n");
            " /"
        } else {
            out.extend_from_slice(b"<!DOCTYPE html>\n<html>\n");
            ""
        };

        out.extend_from_slice(b"<head>\n  <title>");
        attr_escape(out, self.options.title.as_bytes());
        out.extend_from_slice(b"</title>\n");
        let _ = write!(out, "  <meta name=\"GENERATOR\" content=\"{GENERATOR}\"{ending}>\n");
        let _ = write!(out, "  <meta charset=\"utf-8\"{ending}>\n");
        if !self.options.css.is_empty() {
            out.extend_from_slice(b"  <link rel=\"stylesheet\" type=\"text/css\" href=\"");
            attr_escape(out, self.options.css.as_bytes());
            let _ = write!(out, "\"{ending}>\n");
        }
        out.extend_from_slice(b"</head>\n<body>\n");
    }

    fn splice_toc(&mut self, out: &mut Vec<u8>) {
        self.toc.finalize();

        let mark = match self.toc_mark.take() {
            Some(mark) => mark.min(out.len()),
            None => {
                tracing::debug!("no toc mark recorded, inserting toc at start of output");
                0
            }
        };

        let body = out.split_off(mark);
        let complete_page = self.options.complete_page;
        let omit_contents = self.options.omit_contents;

        if complete_page {
            out.push(b'\n');
        }

        out.extend_from_slice(b"<nav>\n");
        out.extend_from_slice(self.toc.as_bytes());
        out.extend_from_slice(b"</nav>\n");

        if !complete_page && !omit_contents {
            out.push(b'\n');
        }

        tracing::debug!(
            mark,
            body_len = body.len(),
            toc_len = self.toc.as_bytes().len(),
            omit_contents,
            "spliced table of contents"
        );

        if !omit_contents {
            out.extend_from_slice(&body);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::render::{Content, Renderer};
    use crate::{HtmlRenderer, RenderOptions};

    fn heading(r: &mut HtmlRenderer, out: &mut Vec<u8>, text: &'static str, level: usize) {
        let content: Content<'_> = &mut |r, out| {
            r.normal_text(out, text.as_bytes());
            true
        };
        r.header(out, content, level, "");
    }

    fn render(options: RenderOptions) -> String {
        let mut renderer = HtmlRenderer::new(options);
        let mut out = Vec::new();
        renderer.document_header(&mut out, true);
        heading(&mut renderer, &mut out, "One", 1);
        renderer.paragraph(&mut out, &mut |r, out| {
            r.normal_text(out, b"Body");
            true
        });
        renderer.document_footer(&mut out, true);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_no_toc_no_page() {
        assert_eq!(render(RenderOptions::default()), "<h1>One</h1>\n<p>Body</p>\n");
    }

    #[test]
    fn test_toc_splice() {
        assert_eq!(
            render(RenderOptions::new().with_toc(true)),
            concat!(
                "<nav>\n",
                "<ul>\n<li><a href=\"#toc_0\">One</a></li>\n</ul>\n",
                "</nav>\n",
                "\n",
                "<h1 id=\"toc_0\">One</h1>\n<p>Body</p>\n",
            )
        );
    }

    #[test]
    fn test_toc_only() {
        let options = RenderOptions {
            omit_contents: true,
            ..RenderOptions::new().with_toc(true)
        };
        assert_eq!(
            render(options),
            "<nav>\n<ul>\n<li><a href=\"#toc_0\">One</a></li>\n</ul>\n</nav>\n"
        );
    }

    #[test]
    fn test_complete_page_with_toc() {
        let options = RenderOptions::new()
            .with_toc(true)
            .with_complete_page(true)
            .with_title("A & B")
            .with_css("style.css");
        let html = render(options);

        assert!(html.starts_with("<!DOCTYPE html>\n<html>\n<head>\n  <title>A &amp; B</title>\n"));
        assert!(html.contains("<meta charset=\"utf-8\">\n"));
        assert!(html.contains("<link rel=\"stylesheet\" type=\"text/css\" href=\"style.css\">\n"));
        assert!(html.contains(concat!(
            "<body>\n",
            "\n<nav>\n<ul>\n<li><a href=\"#toc_0\">One</a></li>\n</ul>\n</nav>\n",
            "<h1 id=\"toc_0\">One</h1>\n<p>Body</p>\n",
            "\n</body>\n</html>\n",
        )));
    }

    #[test]
    fn test_complete_page_xhtml() {
        let options = RenderOptions::new()
            .with_complete_page(true)
            .with_xhtml(true);
        let html = render(options);

        assert!(html.starts_with("<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Transitional//EN\" "));
        assert!(html.contains("<html xmlns=\"http://www.w3.org/1999/xhtml\">\n"));
        assert!(html.contains("<meta charset=\"utf-8\" />\n"));
        assert!(!html.contains("stylesheet"));
        assert!(html.ends_with("<p>Body</p>\n\n</body>\n</html>\n"));
    }

    #[test]
    fn test_later_sections_are_ignored() {
        let mut renderer = HtmlRenderer::new(RenderOptions::new().with_toc(true).with_complete_page(true));
        let mut out = Vec::new();
        renderer.document_header(&mut out, false);
        renderer.document_footer(&mut out, false);
        assert!(out.is_empty());
    }

    #[test]
    fn test_footer_without_header_inserts_at_start() {
        let mut renderer = HtmlRenderer::new(RenderOptions::new().with_toc(true));
        let mut out = Vec::new();
        heading(&mut renderer, &mut out, "Only", 2);
        renderer.document_footer(&mut out, true);

        let html = String::from_utf8(out).unwrap();
        assert!(html.starts_with("<nav>\n<ul>\n<li>\n<ul>\n"));
        assert!(html.ends_with("</nav>\n\n<h2 id=\"toc_0\">Only</h2>\n"));
    }

    #[test]
    fn test_reuse_starts_fresh() {
        let mut renderer = HtmlRenderer::new(RenderOptions::new().with_toc(true));
        let mut first = Vec::new();
        renderer.document_header(&mut first, true);
        heading(&mut renderer, &mut first, "A", 3);
        renderer.document_footer(&mut first, true);

        let mut second = Vec::new();
        renderer.document_header(&mut second, true);
        heading(&mut renderer, &mut second, "B", 1);
        renderer.document_footer(&mut second, true);

        assert_eq!(
            String::from_utf8(second).unwrap(),
            "<nav>\n<ul>\n<li><a href=\"#toc_0\">B</a></li>\n</ul>\n</nav>\n\n<h1 id=\"toc_0\">B</h1>\n"
        );
    }
}
