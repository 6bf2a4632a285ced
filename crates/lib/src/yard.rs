//! Two-phase grouped parsing of a yard description.


use core::fmt;
use std::io::Read;

use crate::command::{CommandError, MoveCommand};
use crate::layout::{self, LayoutError, StackColumn};
use crate::line::{LineError, LineReader};
use crate::pool::{self, CharPool, DecodeError};
use crate::row::{Row, RowError};

type Result<T, E = ParseError> = core::result::Result<T, E>;

/// Parse phase: the stack diagram first, commands after the blank line.
#[derive(Debug, Clone, Copy)]
enum Section {
    Layout,
    Commands,
}

/// A parsed yard description: the ordered columns and the move list.
#[derive(Debug, Clone)]
pub struct Yard {
    pub columns: Vec<StackColumn>,
    pub moves: Vec<MoveCommand>,
}

/// Fatal parse failure, tagged with the 1-based input line it was raised
/// on. No partial result survives it.
#[derive(Debug)]
pub struct ParseError {
    line: usize,
    kind: ParseErrorKind,
}

impl ParseError {
    fn new<K>(line: usize, kind: K) -> Self
    where
        ParseErrorKind: From<K>,
    {
        Self {
            line,
            kind: kind.into(),
        }
    }

    /// The 1-based line the failure was raised on.
    pub fn line(&self) -> usize {
        self.line
    }

    /// What went wrong.
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ParseErrorKind::Line(e) => Some(e),
            ParseErrorKind::Decode(e) => Some(e),
            ParseErrorKind::Row(e) => Some(e),
            ParseErrorKind::Layout(e) => Some(e),
            ParseErrorKind::Command(e) => Some(e),
            ParseErrorKind::MissingSeparator => None,
        }
    }
}

/// The stage a [`ParseError`] came out of.
#[derive(Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    Line(LineError),
    Decode(DecodeError),
    Row(RowError),
    Layout(LayoutError),
    Command(CommandError),
    /// Input ended before the blank line separating the sections.
    MissingSeparator,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::Line(e) => e.fmt(f),
            ParseErrorKind::Decode(e) => e.fmt(f),
            ParseErrorKind::Row(e) => e.fmt(f),
            ParseErrorKind::Layout(e) => e.fmt(f),
            ParseErrorKind::Command(e) => e.fmt(f),
            ParseErrorKind::MissingSeparator => {
                write!(f, "input ended before the blank separator line")
            }
        }
    }
}

macro_rules! kinds {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for ParseErrorKind {
                #[inline]
                fn from(error: $ty) -> Self {
                    Self::$variant(error)
                }
            }
        )*
    }
}

kinds! {
    Line(LineError),
    Decode(DecodeError),
    Row(RowError),
    Layout(LayoutError),
    Command(CommandError),
}

/// Parse a complete yard description from a chunked byte source.
///
/// One pass: layout lines are buffered last-in-first-out, the first blank
/// line materializes the columns and switches to the command phase, command
/// lines parse in input order. Blank lines after the switch are skipped. A
/// source that ends while still in the layout phase is malformed.
///
/// # Examples
///
/// ```
/// let input = b"[B]    \n[A] [C]\n 1   2 \n\nmove 1 from 2 to 1\n";
///
/// let yard = lib::parse(&input[..])?;
/// assert_eq!(yard.columns.len(), 2);
/// assert_eq!(yard.moves.len(), 1);
/// # Ok::<_, lib::ParseError>(())
/// ```
pub fn parse<R>(source: R) -> Result<Yard>
where
    R: Read,
{
    let pool = CharPool::new();
    let mut reader: LineReader<R> = LineReader::new(source);

    // Layout lines buffer as a stack: the id row is written last, so it
    // pops first, then the crate rows from the bottom-most up.
    let mut rows = Vec::new();
    let mut columns = None;
    let mut moves = Vec::new();
    let mut section = Section::Layout;
    let mut n = 0;

    loop {
        let raw = match reader.next_line() {
            Ok(Some(raw)) => raw,
            Ok(None) => break,
            Err(e) => return Err(ParseError::new(n + 1, e)),
        };

        n += 1;

        // Rides the pool; goes back when it drops at the end of the
        // iteration, whatever the record parse below does.
        let chars = pool::decode(&pool, raw).map_err(|e| ParseError::new(n, e))?;

        match section {
            Section::Layout => {
                if chars.is_empty() {
                    let built = layout::build(&mut rows).map_err(|e| ParseError::new(n, e))?;
                    log::debug!("{} columns after {} layout lines", built.len(), n - 1);
                    columns = Some(built);
                    section = Section::Commands;
                } else {
                    let row = Row::parse(&chars).map_err(|e| ParseError::new(n, e))?;
                    rows.push(row);
                }
            }
            Section::Commands => {
                if !chars.is_empty() {
                    let m = MoveCommand::parse(&chars).map_err(|e| ParseError::new(n, e))?;
                    moves.push(m);
                }
            }
        }
    }

    let Some(columns) = columns else {
        return Err(ParseError::new(n, ParseErrorKind::MissingSeparator));
    };

    log::debug!("{} moves", moves.len());

    Ok(Yard { columns, moves })
}
