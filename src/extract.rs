//! Table cell extraction from a document's structural elements.
//!
//! Walks the fixed shape of the Docs object model:
//!
//! 1. Skip every top-level element that is not a table
//! 2. Iterate rows in order, then cells in order within each row
//! 3. Concatenate the text runs of every paragraph in the cell
//! 4. Trim the result and tag it with `(x, y)` = (cell index, row index)
//!
//! Nested tables inside a cell are not recursed into, and cell content
//! blocks other than paragraphs contribute nothing.

use serde::Serialize;

use crate::document::{StructuralElement, Table, TableCell};

/// One table cell's position and trimmed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableCellRecord {
    /// Column index within the row (0-based).
    pub x: usize,
    /// Row index within the table (0-based).
    pub y: usize,
    /// Trimmed cell text.
    pub char: String,
}

/// Flatten every top-level table into cell records, in row-major order.
///
/// Coordinates restart at `(0, 0)` for each table.
pub fn extract_table_cells(elements: &[StructuralElement]) -> Vec<TableCellRecord> {
    let mut records = Vec::new();

    for table in tables(elements) {
        for (y, row) in table.table_rows.iter().enumerate() {
            for (x, cell) in row.table_cells.iter().enumerate() {
                records.push(TableCellRecord {
                    x,
                    y,
                    char: cell_text(cell),
                });
            }
        }
    }

    records
}

/// Concatenated text of all paragraph runs in a cell, trimmed.
///
/// A run without content contributes an empty string.
pub fn cell_text(cell: &TableCell) -> String {
    let mut text = String::new();

    for block in &cell.content {
        let Some(paragraph) = &block.paragraph else {
            continue;
        };
        for element in &paragraph.elements {
            if let Some(run) = &element.text_run {
                text.push_str(run.content.as_deref().unwrap_or(""));
            }
        }
    }

    text.trim().to_string()
}

/// Cell text of one table: `rows[row_idx][col_idx]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextTable {
    pub rows: Vec<Vec<String>>,
}

impl TextTable {
    fn from_table(table: &Table) -> Self {
        let rows = table
            .table_rows
            .iter()
            .map(|row| row.table_cells.iter().map(cell_text).collect())
            .collect();
        Self { rows }
    }

    /// Render this table as a GitHub-flavored markdown table.
    ///
    /// The first row is the header. Short rows are padded with empty cells.
    pub fn to_markdown(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }

        let col_count = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        if col_count == 0 {
            return String::new();
        }

        let mut md = String::new();

        push_markdown_row(&mut md, &self.rows[0], col_count);

        md.push('|');
        for _ in 0..col_count {
            md.push_str(" --- |");
        }
        md.push('\n');

        for row in self.rows.iter().skip(1) {
            push_markdown_row(&mut md, row, col_count);
        }

        md
    }
}

fn push_markdown_row(md: &mut String, row: &[String], col_count: usize) {
    md.push('|');
    for col in 0..col_count {
        let cell = row.get(col).map_or("", String::as_str);
        // Pipes and newlines would break the table layout
        let cell = cell.replace('|', "\\|").replace('\n', " ");
        md.push_str(&format!(" {cell} |"));
    }
    md.push('\n');
}

/// Cell text of every top-level table, in document order.
pub fn extract_tables(elements: &[StructuralElement]) -> Vec<TextTable> {
    tables(elements).map(TextTable::from_table).collect()
}

fn tables(elements: &[StructuralElement]) -> impl Iterator<Item = &Table> {
    elements.iter().filter_map(|e| e.table.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Paragraph, ParagraphElement, TableRow, TextRun};

    fn run(text: &str) -> ParagraphElement {
        ParagraphElement {
            text_run: Some(TextRun {
                content: Some(text.to_string()),
            }),
        }
    }

    fn paragraph(runs: Vec<ParagraphElement>) -> StructuralElement {
        StructuralElement {
            paragraph: Some(Paragraph { elements: runs }),
            table: None,
        }
    }

    fn cell(runs: Vec<ParagraphElement>) -> TableCell {
        TableCell {
            content: vec![paragraph(runs)],
        }
    }

    fn table(rows: &[&[&str]]) -> StructuralElement {
        let table_rows = rows
            .iter()
            .map(|row| TableRow {
                table_cells: row.iter().map(|text| cell(vec![run(text)])).collect(),
            })
            .collect();
        StructuralElement {
            paragraph: None,
            table: Some(Table {
                rows: rows.len(),
                columns: rows.first().map_or(0, |r| r.len()),
                table_rows,
            }),
        }
    }

    fn single_cell_table(cell: TableCell) -> StructuralElement {
        StructuralElement {
            paragraph: None,
            table: Some(Table {
                rows: 1,
                columns: 1,
                table_rows: vec![TableRow {
                    table_cells: vec![cell],
                }],
            }),
        }
    }

    #[test]
    fn no_tables_yields_empty_list() {
        let elements = vec![paragraph(vec![run("Just text\n")])];
        assert!(extract_table_cells(&elements).is_empty());
        assert!(extract_table_cells(&[]).is_empty());
    }

    #[test]
    fn rectangular_table_covers_every_coordinate_once() {
        let elements = vec![table(&[
            &["A1", "B1", "C1"],
            &["A2", "B2", "C2"],
        ])];

        let records = extract_table_cells(&elements);
        assert_eq!(records.len(), 6);

        let mut coords: Vec<(usize, usize)> = records.iter().map(|r| (r.x, r.y)).collect();
        coords.sort_unstable();
        coords.dedup();
        assert_eq!(coords.len(), 6);

        for record in &records {
            let expected = format!("{}{}", ["A", "B", "C"][record.x], record.y + 1);
            assert_eq!(record.char, expected);
        }
    }

    #[test]
    fn records_are_row_major() {
        let records = extract_table_cells(&[table(&[&["a", "b"], &["c", "d"]])]);
        let order: Vec<&str> = records.iter().map(|r| r.char.as_str()).collect();
        assert_eq!(order, ["a", "b", "c", "d"]);
        assert_eq!((records[1].x, records[1].y), (1, 0));
        assert_eq!((records[2].x, records[2].y), (0, 1));
    }

    #[test]
    fn cell_text_is_trimmed() {
        let records = extract_table_cells(&[table(&[&["  A1  "]])]);
        assert_eq!(records[0].char, "A1");
    }

    #[test]
    fn paragraph_without_runs_is_empty() {
        let records = extract_table_cells(&[single_cell_table(cell(vec![]))]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].char, "");
    }

    #[test]
    fn run_without_content_is_empty() {
        let empty = ParagraphElement {
            text_run: Some(TextRun { content: None }),
        };
        let records = extract_table_cells(&[single_cell_table(cell(vec![empty, run("x")]))]);
        assert_eq!(records[0].char, "x");
    }

    #[test]
    fn multiple_runs_are_concatenated_before_trim() {
        let records =
            extract_table_cells(&[single_cell_table(cell(vec![run("Hello"), run(" World\n")]))]);
        assert_eq!(records[0].char, "Hello World");
    }

    #[test]
    fn multiple_paragraphs_in_cell_are_concatenated() {
        let cell = TableCell {
            content: vec![paragraph(vec![run("one\n")]), paragraph(vec![run("two\n")])],
        };
        let records = extract_table_cells(&[single_cell_table(cell)]);
        assert_eq!(records[0].char, "one\ntwo");
    }

    #[test]
    fn non_table_elements_do_not_shift_indices() {
        let elements = vec![
            paragraph(vec![run("Heading\n")]),
            table(&[&["a", "b"]]),
            paragraph(vec![run("Footer\n")]),
        ];
        let records = extract_table_cells(&elements);
        assert_eq!(records.len(), 2);
        assert_eq!((records[0].x, records[0].y), (0, 0));
        assert_eq!((records[1].x, records[1].y), (1, 0));
    }

    #[test]
    fn second_table_restarts_at_origin() {
        let elements = vec![
            table(&[&["a", "b"], &["c", "d"]]),
            paragraph(vec![run("between\n")]),
            table(&[&["e"]]),
        ];
        let records = extract_table_cells(&elements);
        assert_eq!(records.len(), 5);
        assert_eq!(
            records[4],
            TableCellRecord {
                x: 0,
                y: 0,
                char: "e".into()
            }
        );
    }

    #[test]
    fn ragged_rows_emit_one_record_per_cell() {
        let records = extract_table_cells(&[table(&[&["a", "b", "c"], &["d"]])]);
        assert_eq!(records.len(), 4);
        assert_eq!((records[3].x, records[3].y), (0, 1));
    }

    #[test]
    fn nested_tables_are_not_recursed() {
        let inner = table(&[&["inner"]]);
        let outer_cell = TableCell {
            content: vec![paragraph(vec![run("outer")]), inner],
        };
        let records = extract_table_cells(&[single_cell_table(outer_cell)]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].char, "outer");
    }

    #[test]
    fn extract_tables_keeps_table_boundaries() {
        let elements = vec![table(&[&[" a ", "b"]]), table(&[&["c"], &["d"]])];
        let tables = extract_tables(&elements);
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].rows, vec![vec!["a".to_string(), "b".to_string()]]);
        assert_eq!(tables[1].rows.len(), 2);
    }

    #[test]
    fn to_markdown_empty() {
        assert_eq!(TextTable::default().to_markdown(), "");
    }

    #[test]
    fn to_markdown_simple() {
        let table = TextTable {
            rows: vec![
                vec!["Name".into(), "Age".into()],
                vec!["Alice".into(), "30".into()],
            ],
        };
        let md = table.to_markdown();
        assert!(md.contains("| Name | Age |"));
        assert!(md.contains("| --- | --- |"));
        assert!(md.contains("| Alice | 30 |"));
    }

    #[test]
    fn to_markdown_ragged_rows() {
        let table = TextTable {
            rows: vec![
                vec!["A".into(), "B".into(), "C".into()],
                vec!["1".into(), "2".into()],
            ],
        };
        let md = table.to_markdown();
        assert!(md.contains("| A | B | C |"));
        assert!(md.contains("| 1 | 2 |  |"));
    }

    #[test]
    fn to_markdown_escapes_pipes() {
        let table = TextTable {
            rows: vec![vec!["a|b".into()]],
        };
        assert!(table.to_markdown().starts_with("| a\\|b |"));
    }
}
