use super::{build, LayoutError, StackColumn};
use crate::row::Row;

fn rows(lines: &[&str]) -> Vec<Row> {
    lines
        .iter()
        .map(|line| Row::parse(&line.chars().collect::<Vec<_>>()).unwrap())
        .collect()
}

fn tops(columns: &[StackColumn]) -> String {
    columns.iter().map(|c| c.top().unwrap_or(' ')).collect()
}

#[test]
fn test_build_from_popped_rows() {
    // Pushed in input order; the id row lands on top of the buffer.
    let mut buffered = rows(&[
        "    [D]    ",
        "[N] [C]    ",
        "[Z] [M] [P]",
        " 1   2   3 ",
    ]);

    let columns = build(&mut buffered).unwrap();

    assert_eq!(columns.len(), 3);
    assert!(buffered.is_empty());

    assert_eq!(columns[0].id, 1);
    assert_eq!(columns[0].offset, 1);
    assert_eq!(&columns[0].elements[..], ['Z', 'N']);

    assert_eq!(columns[1].id, 2);
    assert_eq!(columns[1].offset, 5);
    assert_eq!(&columns[1].elements[..], ['M', 'C', 'D']);

    assert_eq!(columns[2].id, 3);
    assert_eq!(columns[2].offset, 9);
    assert_eq!(&columns[2].elements[..], ['P']);

    assert_eq!(tops(&columns), "NDP");
}

#[test]
fn test_depth_matches_bracket_count_per_offset() {
    let mut buffered = rows(&["[A]        ", "[B]     [C]", " 1   2   3 "]);
    let columns = build(&mut buffered).unwrap();

    assert_eq!(
        columns.iter().map(|c| c.elements.len()).collect::<Vec<_>>(),
        [2, 0, 1]
    );
}

#[test]
fn test_empty_buffer_misses_ids() {
    assert_eq!(build(&mut Vec::new()), Err(LayoutError::MissingIds));
}

#[test]
fn test_crate_row_in_id_position() {
    let mut buffered = rows(&[" 1 ", "[A]"]);
    assert_eq!(build(&mut buffered), Err(LayoutError::IdsExpected));
}

#[test]
fn test_second_id_row() {
    let mut buffered = rows(&[" 1 ", "[A]", " 1 "]);
    assert_eq!(build(&mut buffered), Err(LayoutError::SecondIds));
}

#[test]
fn test_duplicate_ids() {
    let mut buffered = rows(&[" 1   1 "]);
    assert_eq!(build(&mut buffered), Err(LayoutError::DuplicateId { id: 1 }));
}

#[test]
fn test_unaligned_crate() {
    // The only column sits at offset 1; the crate label sits at offset 5.
    let mut buffered = rows(&["    [A]", " 1 "]);

    assert_eq!(
        build(&mut buffered),
        Err(LayoutError::Unaligned { label: 'A', offset: 5 })
    );
}

#[test]
fn test_alignment_tolerance() {
    // Label at offset 2, column at offset 1: off by one, still matched.
    let mut buffered = rows(&[" [A]", " 1 "]);
    let columns = build(&mut buffered).unwrap();

    assert_eq!(&columns[0].elements[..], ['A']);
}

#[test]
fn test_ambiguous_crate() {
    // Columns at offsets 0 and 2; a label at offset 1 fits both.
    let mut buffered = rows(&["[A]", "1 2"]);

    assert_eq!(
        build(&mut buffered),
        Err(LayoutError::Ambiguous { label: 'A', offset: 1 })
    );
}
