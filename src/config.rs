use super::*;

/// Unix line separator, the default.
pub const LF: &str = "\n";
/// Windows line separator.
pub const CRLF: &str = "\r\n";

/// Settings shared by a [`MarkdownWriter`] and every writer it spawns for
/// nested content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// String appended for every line break. Defaults to [`LF`].
    pub line_separator: Cow<'static, str>,
    /// Wrap paragraphs written with [`MarkdownWriter::p`] to this width.
    ///
    /// When set to [None], the default, paragraph text is left unchanged.
    pub max_width: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            line_separator: LF.into(),
            max_width: None,
        }
    }
}

impl Config {
    /// Default settings with `\r\n` line separators.
    pub fn crlf() -> Self {
        Self {
            line_separator: CRLF.into(),
            ..Default::default()
        }
    }

    /// The configured line separator.
    pub fn line_separator(&self) -> &str {
        &self.line_separator
    }

    /// The configured paragraph width, if any.
    pub fn max_width(&self) -> Option<usize> {
        self.max_width
    }

    pub(crate) fn set_line_separator(&mut self, value: impl Into<Cow<'static, str>>) {
        self.line_separator = value.into();
    }

    pub(crate) fn set_max_width(&mut self, value: Option<usize>) {
        self.max_width = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_unix_newlines_without_wrapping() {
        let config = Config::default();
        assert_eq!(config.line_separator(), "\n");
        assert_eq!(config.max_width(), None);
    }

    #[test]
    fn crlf_only_changes_the_separator() {
        let config = Config::crlf();
        assert_eq!(config.line_separator(), "\r\n");
        assert_eq!(config.max_width(), None);
    }
}
