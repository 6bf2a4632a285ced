use super::{decode, CharPool, Chars, INLINE};

#[test]
fn test_rent_and_return() {
    let pool = CharPool::new();
    assert_eq!(pool.idle(), 0);

    {
        let mut a = pool.rent(4);
        let mut b = pool.rent(4);
        a.push('a');
        b.push('b');
        assert_eq!(pool.idle(), 0);
    }

    assert_eq!(pool.idle(), 2);

    // A fresh checkout comes back cleared.
    let c = pool.rent(4);
    assert!(c.is_empty());
    assert_eq!(pool.idle(), 1);
}

#[test]
fn test_short_line_decodes_inline() {
    let pool = CharPool::new();

    let chars = decode(&pool, b"move 1 from 2 to 1").unwrap();
    assert!(matches!(chars, Chars::Inline(..)));
    assert_eq!(chars.iter().collect::<String>(), "move 1 from 2 to 1");
    assert_eq!(pool.idle(), 0);
}

#[test]
fn test_long_line_rents_from_pool() {
    let pool = CharPool::new();
    let long = vec![b'x'; INLINE + 1];

    {
        let chars = decode(&pool, &long).unwrap();
        assert!(matches!(chars, Chars::Rented(..)));
        assert_eq!(chars.len(), INLINE + 1);
        assert_eq!(pool.idle(), 0);
    }

    // The buffer is back even though no record parse ran.
    assert_eq!(pool.idle(), 1);
}

#[test]
fn test_released_on_failed_record_parse() {
    fn parse_record(chars: &[char]) -> Result<(), ()> {
        if chars.first() == Some(&'x') {
            return Err(());
        }

        Ok(())
    }

    let pool = CharPool::new();
    let long = vec![b'x'; INLINE + 1];

    let result = {
        let chars = decode(&pool, &long).unwrap();
        parse_record(&chars)
    };

    assert!(result.is_err());
    assert_eq!(pool.idle(), 1);
}

#[test]
fn test_trailing_carriage_return_is_trimmed() {
    let pool = CharPool::new();

    let chars = decode(&pool, b"abc\r").unwrap();
    assert_eq!(&chars[..], ['a', 'b', 'c']);

    // Only a single trailing one.
    let chars = decode(&pool, b"abc\r\r").unwrap();
    assert_eq!(&chars[..], ['a', 'b', 'c', '\r']);

    // A bare carriage return is a blank line.
    let chars = decode(&pool, b"\r").unwrap();
    assert!(chars.is_empty());
}

#[test]
fn test_invalid_utf8_is_fatal() {
    let pool = CharPool::new();

    let error = decode(&pool, b"ab\xffcd").unwrap_err();
    assert_eq!(error.valid_up_to(), 2);
}

#[test]
fn test_buffers_are_reused_across_lines() {
    let pool = CharPool::new();
    let long = vec![b'y'; INLINE + 16];

    for _ in 0..16 {
        let chars = decode(&pool, &long).unwrap();
        assert_eq!(chars.len(), INLINE + 16);
    }

    // One buffer served all sixteen lines.
    assert_eq!(pool.idle(), 1);
}
