//! Crane move commands.

#[cfg(test)]
mod tests;

use core::fmt;

/// One crane move, parsed from `move <quantity> from <from> to <to>`.
///
/// `from` and `to` are 1-based column positions. Immutable once parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCommand {
    pub quantity: u32,
    pub from: u32,
    pub to: u32,
}

/// Command line deviating from the literal pattern.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum CommandError {
    /// A literal keyword was not where it should be.
    Keyword { expected: &'static str, offset: usize },
    /// Expected exactly one space.
    Space { offset: usize },
    /// A field was not a positive decimal integer.
    Integer { field: &'static str, offset: usize },
    /// Bytes left over after the last field.
    Trailing { offset: usize },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Keyword { expected, offset } => {
                write!(f, "expected `{expected}` at offset {offset}")
            }
            CommandError::Space { offset } => {
                write!(f, "expected exactly one space at offset {offset}")
            }
            CommandError::Integer { field, offset } => {
                write!(f, "expected positive integer {field} at offset {offset}")
            }
            CommandError::Trailing { offset } => {
                write!(f, "unexpected trailing input at offset {offset}")
            }
        }
    }
}

impl std::error::Error for CommandError {}

impl MoveCommand {
    /// Parse the strict literal form: the keywords `move`, `from` and `to`,
    /// each element separated by exactly one space, fields positive decimal
    /// integers, nothing after the last field.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::MoveCommand;
    ///
    /// let line = "move 3 from 1 to 2".chars().collect::<Vec<_>>();
    /// let m = MoveCommand::parse(&line)?;
    ///
    /// assert_eq!(m, MoveCommand { quantity: 3, from: 1, to: 2 });
    /// # Ok::<_, lib::CommandError>(())
    /// ```
    pub fn parse(line: &[char]) -> Result<Self, CommandError> {
        let mut s = Scan { line, at: 0 };

        s.keyword("move")?;
        s.space()?;
        let quantity = s.integer("quantity")?;
        s.space()?;
        s.keyword("from")?;
        s.space()?;
        let from = s.integer("from")?;
        s.space()?;
        s.keyword("to")?;
        s.space()?;
        let to = s.integer("to")?;
        s.end()?;

        Ok(Self { quantity, from, to })
    }
}

/// Cursor over one decoded command line.
struct Scan<'a> {
    line: &'a [char],
    at: usize,
}

impl Scan<'_> {
    fn keyword(&mut self, word: &'static str) -> Result<(), CommandError> {
        let offset = self.at;

        for expected in word.chars() {
            if self.line.get(self.at) != Some(&expected) {
                return Err(CommandError::Keyword { expected: word, offset });
            }

            self.at += 1;
        }

        Ok(())
    }

    fn space(&mut self) -> Result<(), CommandError> {
        if self.line.get(self.at) != Some(&' ') {
            return Err(CommandError::Space { offset: self.at });
        }

        self.at += 1;
        Ok(())
    }

    fn integer(&mut self, field: &'static str) -> Result<u32, CommandError> {
        let offset = self.at;
        let mut value = 0u32;
        let mut digits = 0;

        while let Some(d) = self.line.get(self.at).and_then(|c| c.to_digit(10)) {
            value = value
                .checked_mul(10)
                .and_then(|value| value.checked_add(d))
                .ok_or(CommandError::Integer { field, offset })?;

            self.at += 1;
            digits += 1;
        }

        if digits == 0 || value == 0 {
            return Err(CommandError::Integer { field, offset });
        }

        Ok(value)
    }

    fn end(&mut self) -> Result<(), CommandError> {
        if self.at != self.line.len() {
            return Err(CommandError::Trailing { offset: self.at });
        }

        Ok(())
    }
}
