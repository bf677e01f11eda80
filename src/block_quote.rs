use super::*;

/// Content of a block quote or code block.
///
/// Strings convert to [`Source::Text`] and arrays or vectors of strings to
/// [`Source::Lines`]. Use [`Source::generator`] (or
/// [`MarkdownWriter::block_quote_with`]) to build the content with a writer.
pub enum Source<'a> {
    /// Text used as is.
    Text(String),
    /// Lines joined with the line separator.
    Lines(Vec<String>),
    /// Callback filling a fresh writer, whose document becomes the text.
    Generator(Box<dyn FnOnce(&mut MarkdownWriter) + 'a>),
}

impl<'a> Source<'a> {
    /// Content produced by `generate` on a fresh writer.
    pub fn generator(generate: impl FnOnce(&mut MarkdownWriter) + 'a) -> Self {
        Self::Generator(Box::new(generate))
    }

    /// Collapse the source into a single text using `writer`'s configuration.
    ///
    /// The generator gets an independent writer, so nothing it writes ends up
    /// in `writer`.
    pub(crate) fn resolve(self, writer: &MarkdownWriter) -> String {
        match self {
            Self::Text(text) => text,
            Self::Lines(lines) => lines.join(writer.line_separator()),
            Self::Generator(generate) => {
                let mut nested = writer.spawn();
                generate(&mut nested);
                nested.markdown()
            }
        }
    }
}

impl std::fmt::Debug for Source<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Lines(lines) => f.debug_tuple("Lines").field(lines).finish(),
            Self::Generator(_) => f.write_str("Generator"),
        }
    }
}

impl From<&str> for Source<'_> {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Source<'_> {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Display> From<Vec<T>> for Source<'_> {
    fn from(value: Vec<T>) -> Self {
        Self::Lines(value.iter().map(ToString::to_string).collect())
    }
}

impl<T: Display, const N: usize> From<[T; N]> for Source<'_> {
    fn from(value: [T; N]) -> Self {
        Self::Lines(value.iter().map(ToString::to_string).collect())
    }
}

impl<T: Display> From<&[T]> for Source<'_> {
    fn from(value: &[T]) -> Self {
        Self::Lines(value.iter().map(ToString::to_string).collect())
    }
}

/// Prefix every line of `text`, empty ones included, with `> `.
fn quote(text: &str, line_separator: &str) -> String {
    if line_separator.is_empty() {
        return format!("> {text}");
    }
    text.split(line_separator)
        .map(|line| format!("> {line}"))
        .join(line_separator)
}

impl MarkdownWriter {
    /// Write a block quote.
    ///
    /// ```rust
    /// # use markdown_writer::MarkdownWriter;
    /// let mut md = MarkdownWriter::new();
    /// md.block_quote("line1\n\nline2");
    /// assert_eq!(md.markdown(), "> line1\n> \n> line2");
    /// ```
    pub fn block_quote<'a>(&mut self, source: impl Into<Source<'a>>) -> &mut Self {
        let text = source.into().resolve(self);
        let quoted = quote(&text, self.line_separator());
        tracing::trace!(len = quoted.len(), "block quote");
        self.block(quoted)
    }

    /// Write a block quote whose content is written by `generate`.
    ///
    /// `generate` receives an empty writer with the same configuration, so
    /// it can use every block writer, including this one for nested quotes.
    pub fn block_quote_with(&mut self, generate: impl FnOnce(&mut MarkdownWriter)) -> &mut Self {
        self.block_quote(Source::generator(generate))
    }
}
