//! Build [CommonMark] documents with a fluent API. [markdown_writer] takes care of
//! the spacing between blocks so every heading, paragraph, list, quote, code
//! fence, and table lands with exactly one blank line around it.
//!
//! [markdown_writer]: index.html
//! [CommonMark]: https://spec.commonmark.org/
//!
//! # Getting Started
//!
//! ```rust
//! use markdown_writer::{inline, ListItem, MarkdownWriter};
//!
//! let mut md = MarkdownWriter::new();
//! md.h1("Learn Rust Checklist!")
//!     .p(format!("Start with {}.", inline::link("The Book", "https://doc.rust-lang.org/book/")))
//!     .ol(
//!         [
//!             ListItem::from("Read the book"),
//!             ListItem::from("Write some code"),
//!             ListItem::sublist(["with tests", "and docs"]),
//!         ],
//!         false,
//!     );
//!
//! let expected = r##"# Learn Rust Checklist!
//!
//! Start with [The Book](https://doc.rust-lang.org/book/).
//!
//! 1. Read the book
//! 2. Write some code
//!     1. with tests
//!     2. and docs"##;
//!
//! assert_eq!(md.markdown(), expected);
//! ```
//!
//! # Nesting block quotes
//!
//! The callback form of [`MarkdownWriter::block_quote_with`] hands you a fresh
//! writer, so quotes can contain anything a document can, including more quotes.
//!
//! ```rust
//! use markdown_writer::MarkdownWriter;
//!
//! let mut md = MarkdownWriter::new();
//! md.block_quote_with(|md| {
//!     md.p("Outer").block_quote(["inner", "lines"]);
//! })
//! .h3("After the quote");
//!
//! // Empty lines inside a quote keep the trailing space of their `> ` prefix.
//! let expected = "> Outer\n> \n> > inner\n> > lines\n\n### After the quote";
//!
//! assert_eq!(md.markdown(), expected);
//! ```

mod block_quote;
mod code_block;
mod config;
mod error;
pub mod inline;
mod list;
mod paragraph;
mod table;
mod value;
mod writer;

use std::{borrow::Cow, fmt::Display, str::FromStr};

use itertools::Itertools;
use unicode_width::UnicodeWidthStr;

pub use block_quote::Source;
pub use config::{Config, CRLF, LF};
pub use error::{Error, Result};
pub use list::{ListItem, ListKind};
pub use writer::MarkdownWriter;
