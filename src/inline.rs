//! Inline formatting.
//!
//! These functions only wrap their input in Markdown delimiters, they never
//! escape delimiters already present in the input. The same functions are
//! available as methods on [`MarkdownWriter`] for convenience.
//!
//! ```rust
//! use markdown_writer::inline::{bold, link};
//!
//! assert_eq!(bold("rust"), "**rust**");
//! assert_eq!(link("docs", "https://docs.rs"), "[docs](https://docs.rs)");
//! ```

use super::*;

/// `*text*`
pub fn italic(text: impl Display) -> String {
    format!("*{text}*")
}

/// `**text**`
pub fn bold(text: impl Display) -> String {
    format!("**{text}**")
}

/// `^text^`
pub fn superscript(text: impl Display) -> String {
    format!("^{text}^")
}

/// `~text~`
pub fn subscript(text: impl Display) -> String {
    format!("~{text}~")
}

/// `` `text` ``
pub fn code(text: impl Display) -> String {
    format!("`{text}`")
}

/// `~~text~~`
pub fn strikethrough(text: impl Display) -> String {
    format!("~~{text}~~")
}

/// An inline link, `[text](url)`.
pub fn link(text: impl Display, url: impl Display) -> String {
    format!("[{text}]({url})")
}

/// An inline image, `![alt](url)`.
pub fn image(alt: impl Display, url: impl Display) -> String {
    format!("![{alt}]({url})")
}

impl MarkdownWriter {
    /// See [`inline::italic`](italic).
    pub fn italic(&self, text: impl Display) -> String {
        italic(text)
    }

    /// See [`inline::bold`](bold).
    pub fn bold(&self, text: impl Display) -> String {
        bold(text)
    }

    /// See [`inline::superscript`](superscript).
    pub fn superscript(&self, text: impl Display) -> String {
        superscript(text)
    }

    /// See [`inline::subscript`](subscript).
    pub fn subscript(&self, text: impl Display) -> String {
        subscript(text)
    }

    /// See [`inline::code`](code).
    pub fn code(&self, text: impl Display) -> String {
        code(text)
    }

    /// See [`inline::strikethrough`](strikethrough).
    pub fn strikethrough(&self, text: impl Display) -> String {
        strikethrough(text)
    }

    /// See [`inline::link`](link).
    pub fn link(&self, text: impl Display, url: impl Display) -> String {
        link(text, url)
    }

    /// See [`inline::image`](image).
    pub fn image(&self, alt: impl Display, url: impl Display) -> String {
        image(alt, url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_in_delimiters() {
        assert_eq!(italic("test"), "*test*");
        assert_eq!(bold("test"), "**test**");
        assert_eq!(superscript("test"), "^test^");
        assert_eq!(subscript("test"), "~test~");
        assert_eq!(code("test"), "`test`");
        assert_eq!(strikethrough("test"), "~~test~~");
    }

    #[test]
    fn links_and_images() {
        assert_eq!(
            link("My Link", "http://example.com"),
            "[My Link](http://example.com)"
        );
        assert_eq!(
            image("My Image", "http://example.com"),
            "![My Image](http://example.com)"
        );
    }

    #[test]
    fn delimiters_in_input_are_not_escaped() {
        assert_eq!(bold("a*b"), "**a*b**");
        assert_eq!(code("`tick`"), "``tick``");
    }

    #[test]
    fn methods_do_not_touch_the_document() {
        let md = MarkdownWriter::new();
        assert_eq!(md.bold("x"), "**x**");
        assert_eq!(md.link("t", "u"), "[t](u)");
        assert_eq!(md.image("a", "u"), "![a](u)");
        assert!(md.is_empty());
    }

    #[test]
    fn empty_input() {
        assert_eq!(italic(""), "**");
        assert_eq!(link("", ""), "[]()");
    }
}
