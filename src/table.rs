use serde_json::Value;

use super::*;
use crate::value::value_text;

/// Cells are never narrower than the `---` of the delimiter row.
const MIN_CELL_WIDTH: usize = 3;

fn pad_cell(cell: &str, cell_width: usize) -> String {
    let padding = cell_width.saturating_sub(cell.width());
    format!("{cell}{}", " ".repeat(padding))
}

fn format_row<S: AsRef<str>>(cells: impl IntoIterator<Item = S>, cell_width: usize) -> String {
    let cells = cells
        .into_iter()
        .map(|cell| pad_cell(cell.as_ref(), cell_width))
        .join("|");
    format!("|{cells}|")
}

impl MarkdownWriter {
    /// Write a table. The first row is the header.
    ///
    /// Every column gets the same width: the widest cell, and at least 3.
    /// An empty table writes nothing.
    ///
    /// ```rust
    /// # use markdown_writer::MarkdownWriter;
    /// let mut md = MarkdownWriter::new();
    /// md.table([["c1", "column2", "c3"], ["val1", "val2", "val3"]]);
    /// assert_eq!(
    ///     md.markdown(),
    ///     "|c1     |column2|c3     |\n|-------|-------|-------|\n|val1   |val2   |val3   |"
    /// );
    /// ```
    pub fn table<R>(&mut self, rows: R) -> &mut Self
    where
        R: IntoIterator,
        R::Item: IntoIterator,
        <R::Item as IntoIterator>::Item: Display,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(|cell| cell.to_string()).collect())
            .collect::<Vec<Vec<String>>>();
        self.write_table(&rows)
    }

    /// Write a table from a JSON array of row arrays.
    ///
    /// Cells are stringified, with strings used as is. Input that is not an
    /// array of arrays is rejected without writing anything.
    ///
    /// ```rust
    /// # use markdown_writer::{Error, MarkdownWriter};
    /// let mut md = MarkdownWriter::new();
    /// let rows = serde_json::json!([["name", "stars"], ["serde", 9000]]);
    /// md.table_value(&rows)?;
    /// assert_eq!(md.markdown(), "|name |stars|\n|-----|-----|\n|serde|9000 |");
    ///
    /// let err = md.table_value(&serde_json::json!([["ok"], "oops"])).unwrap_err();
    /// assert_eq!(err, Error::TableRowNotSequence { row: 1 });
    /// # Ok::<(), Error>(())
    /// ```
    pub fn table_value(&mut self, table: &Value) -> Result<&mut Self> {
        let Value::Array(rows) = table else {
            return Err(Error::TableNotSequence);
        };
        let rows = rows
            .iter()
            .enumerate()
            .map(|(row, value)| match value {
                Value::Array(cells) => Ok(cells.iter().map(value_text).collect()),
                _ => Err(Error::TableRowNotSequence { row }),
            })
            .collect::<Result<Vec<Vec<String>>>>()?;
        Ok(self.write_table(&rows))
    }

    fn write_table(&mut self, rows: &[Vec<String>]) -> &mut Self {
        let Some((header, body)) = rows.split_first() else {
            return self;
        };

        let cell_width = rows
            .iter()
            .flatten()
            .map(|cell| cell.width())
            .fold(MIN_CELL_WIDTH, usize::max);
        tracing::debug!(cell_width, rows = rows.len(), "table");

        let header_row = format_row(header, cell_width);
        let delimiter_row = format_row(header.iter().map(|_| "-".repeat(cell_width)), cell_width);
        let table = [header_row, delimiter_row]
            .into_iter()
            .chain(body.iter().map(|row| format_row(row, cell_width)))
            .join(self.line_separator());
        self.block(table)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn header_only() {
        let mut md = MarkdownWriter::new();
        md.table([["c1", "c2", "c3"]]);
        assert_eq!(md.markdown(), "|c1 |c2 |c3 |\n|---|---|---|");
    }

    #[test]
    fn widest_cell_sets_every_column_width() {
        let mut md = MarkdownWriter::new();
        md.table([["c1", "column2", "c3"]]);
        assert_eq!(md.markdown(), "|c1     |column2|c3     |\n|-------|-------|-------|");
    }

    #[test]
    fn body_rows() {
        let mut md = MarkdownWriter::new();
        md.table(vec![
            vec!["c1", "column2", "c3"],
            vec!["val1", "val2", "val3"],
        ]);
        assert_eq!(
            md.markdown(),
            "|c1     |column2|c3     |\n|-------|-------|-------|\n|val1   |val2   |val3   |"
        );
    }

    #[test]
    fn cells_are_stringified() {
        let mut md = MarkdownWriter::new();
        md.table([[1, 22], [333, 4444]]);
        assert_eq!(md.markdown(), "|1   |22  |\n|----|----|\n|333 |4444|");
    }

    #[test]
    fn width_is_measured_in_columns() {
        let mut md = MarkdownWriter::new();
        md.table([["名前", "x"]]);
        assert_eq!(md.markdown(), "|名前|x   |\n|----|----|");
    }

    #[test]
    fn empty_table_writes_nothing() {
        let mut md = MarkdownWriter::new();
        md.p("text").table(Vec::<Vec<String>>::new());
        assert_eq!(md.markdown(), "text");
    }

    #[test]
    fn tables_are_blocks() {
        let mut md = MarkdownWriter::new();
        md.p("before").table([["a"]]).p("after");
        assert_eq!(md.markdown(), "before\n\n|a  |\n|---|\n\nafter");
    }

    #[test]
    fn table_value() {
        let mut md = MarkdownWriter::new();
        md.table_value(&json!([["col", "flag"], ["x", true], [null, 1.5]]))
            .unwrap();
        assert_eq!(
            md.markdown(),
            "|col |flag|\n|----|----|\n|x   |true|\n|    |1.5 |"
        );
    }

    #[test]
    fn table_value_rejects_scalar_rows_without_writing() {
        let mut md = MarkdownWriter::new();
        md.p("before");
        let err = md
            .table_value(&json!([["a", "b"], ["c", "d"], "oops"]))
            .unwrap_err();
        assert_eq!(err, Error::TableRowNotSequence { row: 2 });
        assert_eq!(md.markdown(), "before");
        md.p("after");
        assert_eq!(md.markdown(), "before\n\nafter");
    }

    #[test]
    fn table_value_rejects_non_arrays() {
        let mut md = MarkdownWriter::new();
        assert_eq!(
            md.table_value(&json!({"rows": []})).unwrap_err(),
            Error::TableNotSequence
        );
        assert!(md.is_empty());
    }

    #[test]
    fn table_value_empty_array_writes_nothing() {
        let mut md = MarkdownWriter::new();
        md.table_value(&json!([])).unwrap();
        assert!(md.is_empty());
    }
}
