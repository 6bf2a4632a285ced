//! Streaming parser and crane simulator for crate-stack yard descriptions.
//!
//! The input is a stack diagram, a blank line, and a list of crane moves.
//! Bytes flow strictly downstream: chunks from the source are segmented
//! into lines, each line decodes into pooled character storage, layout
//! rows buffer last-in-first-out until the blank line materializes the
//! columns, and the moves then replay against them under either of two
//! crane models.
//!
//! ```
//! use lib::prelude::*;
//!
//! let input = b"    [D]    \n[N] [C]    \n[Z] [M] [P]\n 1   2   3 \n\nmove 1 from 2 to 1\n";
//!
//! let yard = lib::parse(&input[..])?;
//!
//! let mut columns = yard.columns.clone();
//! rearrange(&mut columns, &yard.moves, MoveModel::PerCrate)?;
//! assert_eq!(top_crates(&columns), "DCP");
//! # Ok::<_, anyhow::Error>(())
//! ```

mod buf;
pub mod cli;
mod command;
mod ext;
mod layout;
mod line;
mod pool;
mod row;
mod sim;
mod yard;

pub use self::buf::Buf;
pub use self::command::{CommandError, MoveCommand};
pub use self::layout::{LayoutError, StackColumn, MAX_DEPTH};
pub use self::line::{LineError, LineReader, DEFAULT_CAPACITY};
pub use self::pool::{decode, CharPool, Chars, DecodeError, Rented, INLINE};
pub use self::row::RowError;
pub use self::sim::{rearrange, top_crates, MoveModel, SimError};
pub use self::yard::{parse, ParseError, ParseErrorKind, Yard};

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::sim::{rearrange, top_crates, MoveModel};
    pub use crate::yard::{parse, Yard};
    pub use anyhow::{anyhow, bail, Context, Result};
}
