//! Crane simulation over the column model.


use core::fmt;

use crate::command::MoveCommand;
use crate::ext::SliceExt;
use crate::layout::{StackColumn, MAX_DEPTH};

/// How the crane transfers the crates of a single command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveModel {
    /// One crate at a time; the moved run ends up reversed.
    PerCrate,
    /// The whole run in one grab; relative order is preserved.
    Batch,
}

impl fmt::Display for MoveModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveModel::PerCrate => "per-crate".fmt(f),
            MoveModel::Batch => "batch".fmt(f),
        }
    }
}

/// A command the column model cannot satisfy. `index` is the 1-based
/// position of the command in the move list.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum SimError {
    /// `from` and `to` do not name two distinct columns.
    BadPair { index: usize, from: u32, to: u32 },
    /// More crates requested than the source column holds.
    Underflow { index: usize, quantity: u32, depth: usize },
    /// The destination column cannot hold the moved run.
    Depth { index: usize, id: u32 },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::BadPair { index, from, to } => {
                write!(f, "move {index}: `{from}` and `{to}` do not name two distinct columns")
            }
            SimError::Underflow { index, quantity, depth } => {
                write!(f, "move {index}: cannot take {quantity} crates from a stack of {depth}")
            }
            SimError::Depth { index, id } => {
                write!(f, "move {index}: column {id} cannot stack deeper than {MAX_DEPTH}")
            }
        }
    }
}

impl std::error::Error for SimError {}

/// Apply `moves` in order under the selected model, mutating `columns` in
/// place.
///
/// Commands address columns by 1-based position. A command that cannot be
/// satisfied fails the run before touching either column.
pub fn rearrange(
    columns: &mut [StackColumn],
    moves: &[MoveCommand],
    model: MoveModel,
) -> Result<(), SimError> {
    for (n, m) in moves.iter().enumerate() {
        let index = n + 1;

        let pair = m
            .from
            .checked_sub(1)
            .zip(m.to.checked_sub(1))
            .and_then(|(from, to)| columns.pair_mut(from as usize, to as usize));

        let Some((from, to)) = pair else {
            return Err(SimError::BadPair {
                index,
                from: m.from,
                to: m.to,
            });
        };

        let quantity = m.quantity as usize;

        let Some(at) = from.elements.len().checked_sub(quantity) else {
            return Err(SimError::Underflow {
                index,
                quantity: m.quantity,
                depth: from.elements.len(),
            });
        };

        if to.elements.remaining_capacity() < quantity {
            return Err(SimError::Depth { index, id: to.id });
        }

        match model {
            MoveModel::PerCrate => to.elements.extend(from.elements.drain(at..).rev()),
            MoveModel::Batch => to.elements.extend(from.elements.drain(at..)),
        }
    }

    Ok(())
}

/// Top crate of every column in column order; a column with no crates
/// contributes a space. Read-only.
pub fn top_crates(columns: &[StackColumn]) -> String {
    columns.iter().map(|c| c.top().unwrap_or(' ')).collect()
}
