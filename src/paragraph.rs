use textwrap::{Options as TextWrapOptions, WordSeparator, WrapAlgorithm};

use super::*;

/// Reflow paragraph `text` so lines fit in `max_width` columns.
///
/// Markdown hard breaks (two spaces before a line separator) are kept, every
/// other line break is treated as a soft break and reflowed. Words longer than
/// `max_width` are never split.
pub(crate) fn wrap<'a>(text: &'a str, max_width: usize, line_separator: &str) -> Cow<'a, str> {
    if line_separator.is_empty() {
        return text.into();
    }

    let all_lines_within_max_width = text
        .split(line_separator)
        .all(|line| line.width() <= max_width);

    if all_lines_within_max_width {
        // Don't need to wrap any lines
        return text.into();
    }

    let hard_break = format!("  {line_separator}");
    let wrap_options = TextWrapOptions::new(max_width)
        .break_words(false)
        .word_separator(WordSeparator::AsciiSpace)
        .wrap_algorithm(WrapAlgorithm::FirstFit);

    let mut output = String::with_capacity(text.len());
    let mut split_on_hard_breaks = text.split(hard_break.as_str()).peekable();

    while let Some(segment) = split_on_hard_breaks.next() {
        let has_next = split_on_hard_breaks.peek().is_some();
        let reflowed = segment
            .split(line_separator)
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .join(" ");
        let wrapped = textwrap::wrap(&reflowed, wrap_options.clone());
        tracing::trace!(max_width, lines = wrapped.len(), "wrap paragraph");
        output.push_str(&wrapped.iter().join(line_separator));
        if has_next {
            output.push_str(&hard_break);
        }
    }

    output.into()
}
