//! # hemline
//!
//! A callback-driven HTML rendering backend for Markdown-like documents.
//!
//! ## Features
//!
//! - One [`Renderer`] method per document construct, driven by a parser or
//!   by the bundled [`tree`] walker
//! - Empty headings, paragraphs and lists are elided without a trace
//! - Table of contents built while rendering and spliced in at the top
//! - Link safety policy, absolute prefixes and footnote anchors
//! - Optional complete HTML or XHTML page wrapper
//!
//! ## Quick Start
//!
//! ```
//! use hemline::{Document, Block, RenderOptions, render_html};
//!
//! let doc = Document::new(vec![
//!     Block::heading(1, "Intro"),
//!     Block::paragraph("Fish & chips"),
//! ]);
//!
//! let html = render_html(&doc, RenderOptions::default());
//! assert_eq!(html, "<h1>Intro</h1>\n<p>Fish &amp; chips</p>\n");
//! ```
//!
//! ## Driving the Renderer Directly
//!
//! Block constructs take a content producer that writes the inner content
//! and reports whether anything was produced:
//!
//! ```
//! use hemline::{HtmlRenderer, RenderOptions, Renderer};
//!
//! let mut renderer = HtmlRenderer::new(RenderOptions::new().with_toc(true));
//! let mut out = Vec::new();
//!
//! renderer.document_header(&mut out, true);
//! renderer.header(&mut out, &mut |r, out| {
//!     r.normal_text(out, b"Usage");
//!     true
//! }, 2, "");
//! renderer.document_footer(&mut out, true);
//!
//! let html = String::from_utf8(out).unwrap();
//! assert!(html.starts_with("<nav>\n"));
//! assert!(html.ends_with("<h2 id=\"toc_0\">Usage</h2>\n"));
//! ```

pub mod attr;
pub mod error;
pub mod escape;
pub mod links;
pub mod options;
pub mod render;
pub mod slugify;
pub mod toc;
pub mod tree;
pub mod walk;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use attr::InlineAttr;
pub use error::{Error, Result};
pub use links::LinkKind;
pub use options::{HtmlParameters, RenderOptions};
pub use render::{Content, HtmlRenderer, Renderer};
pub use toc::TocBuilder;
pub use tree::{Block, Document, Inline};
pub use walk::{render_document, render_html};
