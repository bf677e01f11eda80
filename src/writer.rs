use super::*;

const MIN_HEADING_LEVEL: usize = 1;
const MAX_HEADING_LEVEL: usize = 6;

/// Accumulates a Markdown document one block at a time.
///
/// Block writers return `&mut Self`, so calls chain. Call
/// [`markdown`](Self::markdown) (or use [`Display`]) to get the document.
///
/// ```rust
/// # use markdown_writer::MarkdownWriter;
/// let mut md = MarkdownWriter::new();
/// md.h2("Notes").p("first").hr().p("second");
/// assert_eq!(md.markdown(), "## Notes\n\nfirst\n\n---\n\nsecond");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MarkdownWriter {
    buffer: String,
    config: Config,
}

impl MarkdownWriter {
    /// Create an empty writer with the default [`Config`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty writer with a custom [`Config`].
    ///
    /// ```rust
    /// # use markdown_writer::{Config, MarkdownWriter};
    /// let md = MarkdownWriter::with_config(Config {
    ///     max_width: Some(80),
    ///     ..Default::default()
    /// });
    /// assert_eq!(md.config().max_width(), Some(80));
    /// ```
    pub fn with_config(config: Config) -> Self {
        Self {
            buffer: String::new(),
            config,
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Line separator used by every write from now on.
    ///
    /// Content already in the document keeps the separator it was written with.
    pub fn set_line_separator(&mut self, separator: impl Into<Cow<'static, str>>) -> &mut Self {
        self.config.set_line_separator(separator);
        self
    }

    /// The configured line separator.
    pub fn line_separator(&self) -> &str {
        self.config.line_separator()
    }

    /// Configure the max width when writing paragraphs.
    ///
    /// When set to [None], the default, paragraph text is left unchanged.
    pub fn max_width(&mut self, max_width: Option<usize>) -> &mut Self {
        self.config.set_max_width(max_width);
        self
    }

    /// Nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Append `text` verbatim, without any spacing.
    pub fn write(&mut self, text: impl Display) -> &mut Self {
        let text = text.to_string();
        tracing::trace!(len = text.len(), "write");
        self.buffer.push_str(&text);
        self
    }

    /// Append the line separator `times` times.
    pub fn new_line(&mut self, times: usize) -> &mut Self {
        for _ in 0..times {
            self.buffer.push_str(&self.config.line_separator);
        }
        self
    }

    /// Shorthand for [`new_line`](Self::new_line).
    pub fn nl(&mut self, times: usize) -> &mut Self {
        self.new_line(times)
    }

    /// Write `text` as its own block.
    ///
    /// Unless the document is empty, a line separator goes first so the block
    /// is preceded by a blank line. One line separator always follows.
    pub fn block(&mut self, text: impl Display) -> &mut Self {
        if !self.is_empty() {
            self.nl(1);
        }
        self.write(text).nl(1)
    }

    /// Write an ATX heading with `level` leading `#`s.
    ///
    /// `level` is clamped to `1..=6`, the levels CommonMark recognizes.
    pub fn heading(&mut self, level: usize, text: impl Display) -> &mut Self {
        let hashes = "#".repeat(level.clamp(MIN_HEADING_LEVEL, MAX_HEADING_LEVEL));
        self.block(format!("{hashes} {text}"))
    }

    /// Write a level 1 heading.
    pub fn h1(&mut self, text: impl Display) -> &mut Self {
        self.heading(1, text)
    }

    /// Write a level 2 heading.
    pub fn h2(&mut self, text: impl Display) -> &mut Self {
        self.heading(2, text)
    }

    /// Write a level 3 heading.
    pub fn h3(&mut self, text: impl Display) -> &mut Self {
        self.heading(3, text)
    }

    /// Write a level 4 heading.
    pub fn h4(&mut self, text: impl Display) -> &mut Self {
        self.heading(4, text)
    }

    /// Write a level 5 heading.
    pub fn h5(&mut self, text: impl Display) -> &mut Self {
        self.heading(5, text)
    }

    /// Write a level 6 heading.
    pub fn h6(&mut self, text: impl Display) -> &mut Self {
        self.heading(6, text)
    }

    /// Write a paragraph, wrapped to [`Config::max_width`] when one is set.
    pub fn p(&mut self, text: impl Display) -> &mut Self {
        let text = text.to_string();
        let paragraph = match self.config.max_width {
            Some(max_width) => {
                paragraph::wrap(&text, max_width, &self.config.line_separator).into_owned()
            }
            None => text,
        };
        self.block(paragraph)
    }

    /// Write a horizontal rule.
    pub fn hr(&mut self) -> &mut Self {
        self.block("---")
    }

    /// The document so far, without trailing line separators.
    ///
    /// Does not change the writer, so calling it twice gives the same result.
    pub fn markdown(&self) -> String {
        self.trimmed().to_owned()
    }

    /// Empty writer sharing this writer's configuration.
    pub(crate) fn spawn(&self) -> Self {
        Self::with_config(self.config.clone())
    }

    fn trimmed(&self) -> &str {
        trim_trailing_separators(&self.buffer, self.line_separator())
    }
}

/// Strip every trailing occurrence of `separator` from `text`.
pub(crate) fn trim_trailing_separators<'a>(text: &'a str, separator: &str) -> &'a str {
    let mut text = text;
    if separator.is_empty() {
        return text;
    }
    while let Some(rest) = text.strip_suffix(separator) {
        text = rest;
    }
    text
}

impl std::fmt::Display for MarkdownWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.trimmed())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn write_appends_verbatim() {
        let mut md = MarkdownWriter::new();
        md.write("test").write(42);
        assert_eq!(md.markdown(), "test42");
    }

    #[test]
    fn new_line_repeats_the_separator() {
        let mut md = MarkdownWriter::new();
        md.nl(1).write("test");
        assert_eq!(md.markdown(), "\ntest");

        let mut md = MarkdownWriter::new();
        md.new_line(2).write("test");
        assert_eq!(md.markdown(), "\n\ntest");
    }

    #[test]
    fn line_separator_getter_and_setter() {
        let mut md = MarkdownWriter::new();
        assert_eq!(md.line_separator(), "\n");
        md.set_line_separator("test");
        assert_eq!(md.line_separator(), "test");
    }

    #[test]
    fn changing_the_separator_keeps_existing_content() {
        let mut md = MarkdownWriter::new();
        md.p("one").set_line_separator("\r\n").p("two");
        assert_eq!(md.markdown(), "one\n\r\ntwo");
    }

    #[test]
    fn headings() {
        let mut md = MarkdownWriter::new();
        md.h1("heading")
            .h2("heading")
            .h3("heading")
            .h4("heading")
            .h5("heading")
            .h6("heading");
        assert_eq!(
            md.markdown(),
            "# heading\n\n## heading\n\n### heading\n\n#### heading\n\n##### heading\n\n###### heading"
        );
    }

    #[test]
    fn heading_level_is_clamped() {
        let mut md = MarkdownWriter::new();
        md.heading(0, "zero").heading(3, "three").heading(9, "nine");
        assert_eq!(md.markdown(), "# zero\n\n### three\n\n###### nine");
    }

    #[test]
    fn paragraphs_and_rules_are_blocks() {
        let mut md = MarkdownWriter::new();
        md.p("paragraph 1").p("paragraph 2");
        assert_eq!(md.markdown(), "paragraph 1\n\nparagraph 2");

        let mut md = MarkdownWriter::new();
        md.hr().hr();
        assert_eq!(md.markdown(), "---\n\n---");
    }

    #[test]
    fn first_block_has_no_leading_separator() {
        let mut md = MarkdownWriter::new();
        md.block("thing 1").block("thing 2");
        assert_eq!(md.markdown(), "thing 1\n\nthing 2");
    }

    #[test]
    fn block_after_raw_write_starts_on_the_next_line() {
        let mut md = MarkdownWriter::new();
        md.p("para").write("appended").hr();
        assert_eq!(md.markdown(), "para\nappended\n---");
    }

    #[test]
    fn materialization_trims_trailing_separators_and_is_idempotent() {
        let mut md = MarkdownWriter::new();
        md.p("text").nl(3);
        assert_eq!(md.markdown(), "text");
        assert_eq!(md.markdown(), md.markdown());
        assert_eq!(md.to_string(), "text");
    }

    #[test]
    fn materialization_with_empty_separator() {
        let mut md = MarkdownWriter::new();
        md.set_line_separator("").p("a").p("b");
        assert_eq!(md.markdown(), "ab");
    }

    #[test]
    fn empty_writer() {
        let md = MarkdownWriter::new();
        assert!(md.is_empty());
        assert_eq!(md.markdown(), "");
    }

    #[test]
    fn spawned_writer_shares_config_but_not_content() {
        let mut md = MarkdownWriter::new();
        md.set_line_separator("\r\n").p("parent");
        let child = md.spawn();
        assert!(child.is_empty());
        assert_eq!(child.line_separator(), "\r\n");
    }

    #[test]
    fn wraps_paragraphs_to_max_width() {
        let mut md = MarkdownWriter::new();
        md.max_width(Some(10)).p("the quick brown fox").h1("a long heading stays");
        assert_eq!(md.markdown(), "the quick\nbrown fox\n\n# a long heading stays");
    }
}
