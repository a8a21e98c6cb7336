//! A minimal document tree.
//!
//! This is not a parser: it is the already-structured input that
//! [`crate::walk`] turns into renderer calls. With the `serde` feature the
//! tree can be loaded from JSON, where every node is an object tagged with
//! a snake_case `type`:
//!
//! ```json
//! {
//!   "blocks": [
//!     { "type": "heading", "level": 1, "content": [{ "type": "text", "text": "Intro" }] },
//!     { "type": "paragraph", "content": [{ "type": "text", "text": "Hello" }] }
//!   ]
//! }
//! ```

use crate::attr::InlineAttr;
use crate::error::{Error, Result};
use crate::links::LinkKind;
use crate::render::{ListKind, TableAlignment};

/// A whole document: body blocks followed by footnote definitions.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Document {
    pub blocks: Vec<Block>,
    pub footnotes: Vec<FootnoteDef>,
}

/// The body of a footnote, referenced from [`Inline::FootnoteRef`] by name.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FootnoteDef {
    pub name: String,
    pub blocks: Vec<Block>,
}

/// Block-level content.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Block {
    Heading {
        /// Heading level (1-6).
        level: usize,
        /// Explicit anchor id; empty for none.
        #[cfg_attr(feature = "serde", serde(default))]
        id: String,
        content: Vec<Inline>,
    },
    Paragraph {
        content: Vec<Inline>,
    },
    List {
        #[cfg_attr(feature = "serde", serde(default))]
        kind: ListKind,
        #[cfg_attr(feature = "serde", serde(default = "default_list_start"))]
        start: usize,
        /// Each item is a sequence of blocks. An item holding exactly one
        /// paragraph is rendered tight, without the `<p>` wrapper.
        items: Vec<Vec<Block>>,
    },
    BlockQuote {
        blocks: Vec<Block>,
        #[cfg_attr(feature = "serde", serde(default))]
        attribution: Vec<Inline>,
    },
    Aside {
        blocks: Vec<Block>,
    },
    Note {
        blocks: Vec<Block>,
    },
    CodeBlock {
        #[cfg_attr(feature = "serde", serde(default))]
        language: String,
        code: String,
    },
    Html {
        html: String,
    },
    Comment {
        html: String,
    },
    Rule,
    Table {
        #[cfg_attr(feature = "serde", serde(default))]
        alignments: Vec<TableAlignment>,
        header: Vec<Vec<Inline>>,
        rows: Vec<Vec<Vec<Inline>>>,
        #[cfg_attr(feature = "serde", serde(default))]
        caption: Vec<Inline>,
    },
}

#[cfg(feature = "serde")]
fn default_list_start() -> usize {
    1
}

/// Inline content.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Inline {
    Text {
        text: String,
    },
    Emphasis {
        content: Vec<Inline>,
    },
    Strong {
        content: Vec<Inline>,
    },
    StrongEmphasis {
        content: Vec<Inline>,
    },
    Strikethrough {
        content: Vec<Inline>,
    },
    Subscript {
        content: Vec<Inline>,
    },
    Superscript {
        content: Vec<Inline>,
    },
    Code {
        code: String,
    },
    Link {
        url: String,
        #[cfg_attr(feature = "serde", serde(default))]
        title: String,
        content: Vec<Inline>,
    },
    AutoLink {
        url: String,
        #[cfg_attr(feature = "serde", serde(default))]
        kind: LinkKind,
    },
    Image {
        url: String,
        #[cfg_attr(feature = "serde", serde(default))]
        title: String,
        #[cfg_attr(feature = "serde", serde(default))]
        alt: String,
    },
    LineBreak,
    Html {
        html: String,
    },
    Entity {
        entity: String,
    },
    FootnoteRef {
        name: String,
    },
    Abbreviation {
        abbr: String,
        #[cfg_attr(feature = "serde", serde(default))]
        title: String,
    },
    Math {
        text: String,
        #[cfg_attr(feature = "serde", serde(default))]
        display: bool,
        #[cfg_attr(feature = "serde", serde(default))]
        attr: Option<InlineAttr>,
    },
    Example {
        index: usize,
    },
}

impl Inline {
    pub fn text(text: impl Into<String>) -> Self {
        Inline::Text { text: text.into() }
    }

    pub fn link(url: impl Into<String>, content: Vec<Inline>) -> Self {
        Inline::Link {
            url: url.into(),
            title: String::new(),
            content,
        }
    }
}

impl Block {
    pub fn heading(level: usize, text: impl Into<String>) -> Self {
        Block::Heading {
            level,
            id: String::new(),
            content: vec![Inline::text(text)],
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph {
            content: vec![Inline::text(text)],
        }
    }
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self {
            blocks,
            footnotes: Vec::new(),
        }
    }

    /// Check the constraints the renderer relies on.
    ///
    /// Heading levels must be 1-6 and footnote names must not be empty.
    pub fn validate(&self) -> Result<()> {
        validate_blocks(&self.blocks)?;
        for note in &self.footnotes {
            if note.name.trim().is_empty() {
                return Err(Error::InvalidDocument("footnote with empty name".to_string()));
            }
            validate_blocks(&note.blocks)?;
        }
        Ok(())
    }

    /// Parse and validate a JSON document.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: Document = serde_json::from_str(json)?;
        doc.validate()?;
        Ok(doc)
    }

    /// Read, parse and validate a JSON document file.
    #[cfg(feature = "serde")]
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

fn validate_blocks(blocks: &[Block]) -> Result<()> {
    for block in blocks {
        match block {
            Block::Heading { level, .. } if !(1..=6).contains(level) => {
                return Err(Error::InvalidDocument(format!(
                    "heading level {level} is outside 1-6"
                )));
            }
            Block::List { items, .. } => {
                for item in items {
                    validate_blocks(item)?;
                }
            }
            Block::BlockQuote { blocks, .. } | Block::Aside { blocks } | Block::Note { blocks } => {
                validate_blocks(blocks)?;
            }
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_heading_levels() {
        assert!(Document::new(vec![Block::heading(1, "a"), Block::heading(6, "b")])
            .validate()
            .is_ok());

        let err = Document::new(vec![Block::heading(7, "deep")]).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidDocument(_)));
        assert!(Document::new(vec![Block::heading(0, "zero")]).validate().is_err());
    }

    #[test]
    fn test_validate_nested_heading() {
        let doc = Document::new(vec![Block::Aside {
            blocks: vec![Block::heading(9, "x")],
        }]);
        assert!(doc.validate().is_err());
    }

    #[test]
    fn test_validate_footnote_name() {
        let doc = Document {
            blocks: Vec::new(),
            footnotes: vec![FootnoteDef {
                name: " ".to_string(),
                blocks: vec![Block::paragraph("x")],
            }],
        };
        assert!(doc.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json() {
        let doc = Document::from_json(
            r#"{
                "blocks": [
                    {"type": "heading", "level": 2, "content": [{"type": "text", "text": "T"}]},
                    {"type": "list", "kind": {"ordered": "alpha_lower"}, "items": [
                        [{"type": "paragraph", "content": [{"type": "text", "text": "a"}]}]
                    ]},
                    {"type": "rule"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(doc.blocks.len(), 3);
        assert_eq!(doc.blocks[0], Block::heading(2, "T"));
        assert!(matches!(
            doc.blocks[1],
            Block::List {
                kind: ListKind::Ordered(crate::render::OrderedStyle::AlphaLower),
                start: 1,
                ..
            }
        ));
        assert_eq!(doc.blocks[2], Block::Rule);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_rejects_invalid() {
        let err = Document::from_json(r#"{"blocks": [{"type": "heading", "level": 0, "content": []}]}"#)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidDocument(_)));

        let err = Document::from_json("{not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
