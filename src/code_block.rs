use super::*;

const FENCE: &str = "```";

impl MarkdownWriter {
    /// Write a fenced code block.
    ///
    /// `language` is written right after the opening fence; pass `""` for a
    /// bare fence.
    ///
    /// ```rust
    /// # use markdown_writer::MarkdownWriter;
    /// let mut md = MarkdownWriter::new();
    /// md.code_block("fn main() {}", "rust");
    /// assert_eq!(md.markdown(), "```rust\nfn main() {}\n```");
    /// ```
    pub fn code_block<'a>(&mut self, source: impl Into<Source<'a>>, language: &str) -> &mut Self {
        let code = source.into().resolve(self);
        let line_separator = self.line_separator();
        let fenced = format!("{FENCE}{language}{line_separator}{code}{line_separator}{FENCE}");
        tracing::trace!(language, len = code.len(), "code block");
        self.block(fenced)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn code_block_string() {
        let mut md = MarkdownWriter::new();
        md.code_block("This is some code", "");
        assert_eq!(md.markdown(), "```\nThis is some code\n```");
    }

    #[test]
    fn code_block_string_with_language() {
        let mut md = MarkdownWriter::new();
        md.code_block("x", "go");
        assert_eq!(md.markdown(), "```go\nx\n```");
    }

    #[test]
    fn code_block_lines() {
        let mut md = MarkdownWriter::new();
        md.code_block(
            [
                "this is some code",
                "",
                "but this uses an array to write the block",
            ],
            "toml",
        );
        assert_eq!(
            md.markdown(),
            "```toml\nthis is some code\n\nbut this uses an array to write the block\n```"
        );
    }

    #[test]
    fn code_block_from_generator() {
        let mut md = MarkdownWriter::new();
        md.code_block(
            Source::generator(|md| {
                md.h1("Title").ul(["a"], false);
            }),
            "markdown",
        );
        assert_eq!(md.markdown(), "```markdown\n# Title\n\n- a\n```");
    }

    #[test]
    fn code_blocks_are_blocks() {
        let mut md = MarkdownWriter::new();
        md.code_block("a", "").code_block("b", "sh");
        assert_eq!(md.markdown(), "```\na\n```\n\n```sh\nb\n```");
    }
}
