use serde_json::Value;

use super::*;
use crate::value::value_text;
use crate::writer::trim_trailing_separators;

/// Each nesting level indents list items by 4 spaces.
const INDENTATION: &str = "    ";

/// Whether list items are numbered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListKind {
    /// Numbered items, `1.`, `2.`, ...
    Ordered,
    /// Bulleted items, `-`.
    Unordered,
}

impl ListKind {
    fn marker(self, ordinal: impl Display) -> String {
        match self {
            Self::Ordered => format!("{ordinal}."),
            Self::Unordered => "-".to_owned(),
        }
    }
}

impl FromStr for ListKind {
    type Err = Error;

    /// Parse a list kind tag, `ordered`/`ol` or `unordered`/`ul`, ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ordered" | "ol" => Ok(Self::Ordered),
            "unordered" | "ul" => Ok(Self::Unordered),
            _ => Err(Error::InvalidListKind(s.to_owned())),
        }
    }
}

/// One entry of a list passed to [`MarkdownWriter::ul`] or [`MarkdownWriter::ol`].
///
/// ```rust
/// # use markdown_writer::{ListItem, MarkdownWriter};
/// let mut md = MarkdownWriter::new();
/// md.ul(
///     [
///         ListItem::from("a"),
///         ListItem::from("b"),
///         ListItem::sublist(["c", "d"]),
///     ],
///     false,
/// );
/// assert_eq!(md.markdown(), "- a\n- b\n    - c\n    - d");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListItem {
    /// A single line of the list.
    Item(String),
    /// A list nested one level deeper, rendered in place.
    Sublist(Vec<ListItem>),
}

impl ListItem {
    /// A single list entry.
    pub fn item(text: impl Display) -> Self {
        Self::Item(text.to_string())
    }

    /// A nested list.
    pub fn sublist<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ListItem>,
    {
        Self::Sublist(items.into_iter().map(Into::into).collect())
    }
}

impl From<&str> for ListItem {
    fn from(value: &str) -> Self {
        Self::Item(value.to_owned())
    }
}

impl From<String> for ListItem {
    fn from(value: String) -> Self {
        Self::Item(value)
    }
}

impl<T: Into<ListItem>> From<Vec<T>> for ListItem {
    fn from(value: Vec<T>) -> Self {
        Self::sublist(value)
    }
}

impl<T: Into<ListItem>, const N: usize> From<[T; N]> for ListItem {
    fn from(value: [T; N]) -> Self {
        Self::sublist(value)
    }
}

/// Arrays become sublists, everything else a single item.
impl From<&Value> for ListItem {
    fn from(value: &Value) -> Self {
        match value {
            Value::Array(items) => Self::Sublist(items.iter().map(Self::from).collect()),
            other => Self::Item(value_text(other)),
        }
    }
}

impl From<Value> for ListItem {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}

/// Render `items` at nesting `depth`, appending one line per item to `output`.
///
/// Every nested list restarts its numbering at 1, and the parent's numbering
/// is not advanced by the nested list.
fn render_list(
    output: &mut String,
    kind: ListKind,
    items: &[ListItem],
    depth: usize,
    loose: bool,
    line_separator: &str,
) {
    let mut ordinal = 1;
    for item in items {
        match item {
            ListItem::Sublist(sublist) => {
                render_list(output, kind, sublist, depth + 1, loose, line_separator)
            }
            ListItem::Item(text) => {
                output.push_str(&item_line(text, depth, &kind.marker(ordinal)));
                output.push_str(line_separator);
                if loose {
                    output.push_str(line_separator);
                }
                if kind == ListKind::Ordered {
                    ordinal += 1;
                }
            }
        }
    }
}

fn item_line(text: impl Display, tabs: usize, marker: &str) -> String {
    let indentation = INDENTATION.repeat(tabs);
    format!("{indentation}{marker} {text}")
}

impl MarkdownWriter {
    /// Write a list of `kind` as one block.
    ///
    /// Loose lists put a blank line after every item, nested items included.
    /// A list without any item, even one made of empty sublists, writes nothing.
    pub fn list<I>(&mut self, kind: ListKind, items: I, loose: bool) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<ListItem>,
    {
        let items = items.into_iter().map(Into::into).collect::<Vec<ListItem>>();
        if items.is_empty() {
            return self;
        }
        tracing::debug!(?kind, items = items.len(), loose, "list");
        let mut rendered = String::new();
        render_list(
            &mut rendered,
            kind,
            &items,
            0,
            loose,
            self.line_separator(),
        );
        let rendered = trim_trailing_separators(&rendered, self.line_separator()).to_owned();
        if rendered.is_empty() {
            // Only empty sublists, no line was rendered.
            return self;
        }
        self.block(rendered)
    }

    /// Write an unordered list.
    pub fn ul<I>(&mut self, items: I, loose: bool) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<ListItem>,
    {
        self.list(ListKind::Unordered, items, loose)
    }

    /// Write an ordered list.
    pub fn ol<I>(&mut self, items: I, loose: bool) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<ListItem>,
    {
        self.list(ListKind::Ordered, items, loose)
    }

    /// Write a single unordered item indented by `tabs` levels.
    ///
    /// No blank line is added before the item, so consecutive calls build a
    /// list by hand.
    pub fn ul_item(&mut self, text: impl Display, tabs: usize) -> &mut Self {
        let line = item_line(text, tabs, &ListKind::Unordered.marker(""));
        self.write(line).nl(1)
    }

    /// Write a single ordered item indented by `tabs` levels.
    ///
    /// `ordinal` is written as given, so any numbering scheme works.
    pub fn ol_item(&mut self, text: impl Display, tabs: usize, ordinal: impl Display) -> &mut Self {
        let line = item_line(text, tabs, &ListKind::Ordered.marker(ordinal));
        self.write(line).nl(1)
    }
}
