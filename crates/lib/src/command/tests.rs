use super::{CommandError, MoveCommand};

fn parse(s: &str) -> Result<MoveCommand, CommandError> {
    MoveCommand::parse(&s.chars().collect::<Vec<_>>())
}

#[test]
fn test_basic() {
    assert_eq!(
        parse("move 1 from 2 to 1"),
        Ok(MoveCommand { quantity: 1, from: 2, to: 1 })
    );
}

#[test]
fn test_multi_digit_fields() {
    assert_eq!(
        parse("move 12 from 10 to 3"),
        Ok(MoveCommand { quantity: 12, from: 10, to: 3 })
    );
}

#[test]
fn test_missing_keyword() {
    assert_eq!(
        parse("shift 1 from 2 to 1"),
        Err(CommandError::Keyword { expected: "move", offset: 0 })
    );
    assert_eq!(
        parse("move 1 From 2 to 1"),
        Err(CommandError::Keyword { expected: "from", offset: 7 })
    );
}

#[test]
fn test_exactly_one_space() {
    assert_eq!(parse("move  1 from 2 to 1"), Err(CommandError::Integer { field: "quantity", offset: 5 }));
    assert_eq!(parse("move 1  from 2 to 1"), Err(CommandError::Keyword { expected: "from", offset: 7 }));
}

#[test]
fn test_missing_field() {
    assert_eq!(
        parse("move from 2 to 1"),
        Err(CommandError::Integer { field: "quantity", offset: 5 })
    );
    assert_eq!(
        parse("move 1 from 2 to "),
        Err(CommandError::Integer { field: "to", offset: 17 })
    );
}

#[test]
fn test_zero_is_rejected() {
    assert_eq!(
        parse("move 0 from 2 to 1"),
        Err(CommandError::Integer { field: "quantity", offset: 5 })
    );
    assert_eq!(
        parse("move 1 from 0 to 1"),
        Err(CommandError::Integer { field: "from", offset: 12 })
    );
}

#[test]
fn test_trailing_input() {
    assert_eq!(
        parse("move 1 from 2 to 1 "),
        Err(CommandError::Trailing { offset: 18 })
    );
    assert_eq!(
        parse("move 1 from 2 to 1x"),
        Err(CommandError::Trailing { offset: 18 })
    );
}

#[test]
fn test_overflow() {
    assert_eq!(
        parse("move 99999999999 from 2 to 1"),
        Err(CommandError::Integer { field: "quantity", offset: 5 })
    );
}
