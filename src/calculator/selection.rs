use std::str::FromStr;

use thiserror::Error;

/// An inclusive rectangular block of cells, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    pub top: usize,
    pub left: usize,
    pub bottom: usize,
    pub right: usize,
}

impl CellRange {
    /// Creates a range from two opposite corners, in any order.
    #[must_use]
    pub fn new(top: usize, left: usize, bottom: usize, right: usize) -> Self {
        Self {
            top: top.min(bottom),
            left: left.min(right),
            bottom: top.max(bottom),
            right: left.max(right),
        }
    }

    /// A range covering a single cell.
    #[must_use]
    pub fn cell(row: usize, column: usize) -> Self {
        Self::new(row, column, row, column)
    }

    /// The part of this range inside a grid of `rows` by `columns` cells.
    ///
    /// Returns `None` if the range starts outside the grid.
    #[must_use]
    pub fn clamped(self, rows: usize, columns: usize) -> Option<Self> {
        if self.top >= rows || self.left >= columns {
            return None;
        }
        Some(Self {
            bottom: self.bottom.min(rows - 1),
            right: self.right.min(columns - 1),
            ..self
        })
    }
}

/// Error returned when text is not a `TOP:LEFT:BOTTOM:RIGHT` range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid cell range {input:?}, expected TOP:LEFT:BOTTOM:RIGHT")]
pub struct ParseCellRangeError {
    input: String,
}

impl FromStr for CellRange {
    type Err = ParseCellRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCellRangeError {
            input: s.to_owned(),
        };

        let parts = s
            .split(':')
            .map(|part| part.trim().parse::<usize>().map_err(|_| err()))
            .collect::<Result<Vec<_>, _>>()?;

        match parts.as_slice() {
            &[top, left, bottom, right] => Ok(Self::new(top, left, bottom, right)),
            _ => Err(err()),
        }
    }
}

/// Exports the selected cells as tab-separated text.
///
/// Ranges are exported in the order given. Within a range, each row becomes
/// one line: cells joined by tabs, terminated by a newline.
///
/// Each range is first clipped to the grid, which is as wide as its longest
/// row. Ranges starting outside the grid are skipped. A cell inside the grid
/// that a short row lacks exports as an empty string.
///
/// Returns `None` when no range overlaps the grid, meaning there is nothing
/// to copy.
///
/// ```
/// use gear_tables::calculator::{CellRange, copy_selection};
///
/// let cells = [["15T", "3.33"], ["16T", "3.13"]];
/// let text = copy_selection(&cells, &[CellRange::new(0, 0, 1, 1)]);
/// assert_eq!(text.as_deref(), Some("15T\t3.33\n16T\t3.13\n"));
/// ```
#[must_use]
pub fn copy_selection<R, S>(cells: &[R], ranges: &[CellRange]) -> Option<String>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let rows = cells.len();
    let columns = cells
        .iter()
        .map(|row| row.as_ref().len())
        .max()
        .unwrap_or(0);

    let ranges: Vec<CellRange> = ranges
        .iter()
        .filter_map(|range| range.clamped(rows, columns))
        .collect();
    if ranges.is_empty() {
        return None;
    }

    let mut text = String::new();
    for range in ranges {
        for row in range.top..=range.bottom {
            let line = (range.left..=range.right)
                .map(|column| {
                    cells
                        .get(row)
                        .and_then(|cells| cells.as_ref().get(column))
                        .map_or("", AsRef::as_ref)
                })
                .collect::<Vec<_>>()
                .join("\t");
            text.push_str(&line);
            text.push('\n');
        }
    }
    Some(text)
}
