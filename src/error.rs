use thiserror::Error;

/// Invalid arguments rejected by a [`MarkdownWriter`](crate::MarkdownWriter).
///
/// A rejected call never writes anything, so the document is left exactly as
/// it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A list kind tag other than `ordered`/`ol` or `unordered`/`ul`.
    #[error("invalid list kind `{0}`, expected `ordered` or `unordered`")]
    InvalidListKind(String),

    /// Dynamic table input that is not an array of rows.
    #[error("table must be an array of rows")]
    TableNotSequence,

    /// A dynamic table row that is not an array of cells.
    #[error("table row {row} must be an array of cells")]
    TableRowNotSequence {
        /// Zero based index of the offending row, the header being row 0.
        row: usize,
    },
}

/// Shorthand for results carrying an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
