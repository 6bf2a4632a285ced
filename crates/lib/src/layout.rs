//! Stack columns and the layout model builder.

#[cfg(test)]
mod tests;

use core::fmt;

use arrayvec::ArrayVec;

use crate::row::{CrateCell, Row};

/// Upper bound on crates in a single column.
pub const MAX_DEPTH: usize = 128;

/// Alignment slack between a label offset and its column offset.
const TOLERANCE: usize = 1;

/// One crate stack: id, horizontal offset in the source text, and the crate
/// labels bottom-to-top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackColumn {
    pub id: u32,
    pub offset: usize,
    pub elements: ArrayVec<char, MAX_DEPTH>,
}

impl StackColumn {
    /// The top crate, if any.
    #[inline]
    pub fn top(&self) -> Option<char> {
        self.elements.last().copied()
    }
}

/// Malformed layout section.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum LayoutError {
    /// The layout section held no id row.
    MissingIds,
    /// The line closest to the section break was not the id row.
    IdsExpected,
    /// A second id row among the crate rows.
    SecondIds,
    /// The same id declared for two columns.
    DuplicateId { id: u32 },
    /// A crate with no column at its offset.
    Unaligned { label: char, offset: usize },
    /// A crate whose offset fits more than one column.
    Ambiguous { label: char, offset: usize },
    /// A column stacked deeper than [`MAX_DEPTH`].
    Depth { id: u32 },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::MissingIds => {
                write!(f, "layout section holds no id row")
            }
            LayoutError::IdsExpected => {
                write!(f, "expected the id row closest to the section break, found a crate row")
            }
            LayoutError::SecondIds => {
                write!(f, "expected a crate row, found a second id row")
            }
            LayoutError::DuplicateId { id } => {
                write!(f, "column id {id} declared twice")
            }
            LayoutError::Unaligned { label, offset } => {
                write!(f, "crate {label:?} at offset {offset} matches no column")
            }
            LayoutError::Ambiguous { label, offset } => {
                write!(f, "crate {label:?} at offset {offset} matches more than one column")
            }
            LayoutError::Depth { id } => {
                write!(f, "column {id} stacked deeper than {MAX_DEPTH}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Build the ordered column list by draining the buffered layout rows.
///
/// The rows arrive as a stack: the id row was pushed last, so it pops
/// first, and the crate rows then pop from the one nearest the id row —
/// the bottom-most — upwards. Columns therefore stack up in exactly pop
/// order, with no separate reversal pass.
pub(crate) fn build(rows: &mut Vec<Row>) -> Result<Vec<StackColumn>, LayoutError> {
    let Some(row) = rows.pop() else {
        return Err(LayoutError::MissingIds);
    };

    let Row::Ids(ids) = row else {
        return Err(LayoutError::IdsExpected);
    };

    let mut columns = Vec::with_capacity(ids.len());

    for cell in ids {
        if columns.iter().any(|c: &StackColumn| c.id == cell.id) {
            return Err(LayoutError::DuplicateId { id: cell.id });
        }

        columns.push(StackColumn {
            id: cell.id,
            offset: cell.offset,
            elements: ArrayVec::new(),
        });
    }

    while let Some(row) = rows.pop() {
        let Row::Crates(cells) = row else {
            return Err(LayoutError::SecondIds);
        };

        for cell in cells {
            push_cell(&mut columns, cell)?;
        }
    }

    Ok(columns)
}

/// Stack one crate onto the column matching its offset.
fn push_cell(columns: &mut [StackColumn], cell: CrateCell) -> Result<(), LayoutError> {
    let mut it = columns
        .iter_mut()
        .filter(|c| c.offset.abs_diff(cell.offset) <= TOLERANCE);

    let Some(column) = it.next() else {
        return Err(LayoutError::Unaligned {
            label: cell.label,
            offset: cell.offset,
        });
    };

    if it.next().is_some() {
        return Err(LayoutError::Ambiguous {
            label: cell.label,
            offset: cell.offset,
        });
    }

    if column.elements.try_push(cell.label).is_err() {
        return Err(LayoutError::Depth { id: column.id });
    }

    Ok(())
}
