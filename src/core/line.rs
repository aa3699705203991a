// Line-oriented consumption loop driving the token scanner across one buffer.

use bstr::BStr;

use crate::core::cursor::Cursor;
use crate::core::error::{Error, ErrorKind};
use crate::core::pow10::Pow10Cache;
use crate::core::scan::scan_number;

/// Parses every number on `line` into `values`, enforcing space/newline
/// separators between tokens. End of buffer after a complete token counts
/// as a terminator, so a final line without a trailing newline is valid.
pub fn process_line(
    values: &mut Vec<f64>,
    line: &[u8],
    pow10: &mut Pow10Cache,
) -> Result<(), Error> {
    let mut cursor = Cursor::new(line);
    while !cursor.at_end() {
        values.push(scan_number(&mut cursor, pow10)?);
        match cursor.peek() {
            None | Some(b' ') | Some(b'\n') => {}
            Some(other) => {
                return Err(Error::new(ErrorKind::Separator)
                    .with_message(format!(
                        "Expected whitespace but found {}",
                        BStr::new(&[other])
                    ))
                    .with_column(cursor.pos()));
            }
        }
        while matches!(cursor.peek(), Some(b' ') | Some(b'\n')) {
            cursor.advance();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{process_line, ErrorKind, Pow10Cache};

    fn parse(line: &[u8]) -> Result<Vec<f64>, super::Error> {
        let mut values = Vec::new();
        let mut pow10 = Pow10Cache::new();
        process_line(&mut values, line, &mut pow10)?;
        Ok(values)
    }

    #[test]
    fn parses_space_separated_numbers() {
        assert_eq!(parse(b"1 2 3\n").expect("three values"), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn comma_separator_is_a_separator_error() {
        let err = parse(b"1,2\n").expect_err("comma");
        assert_eq!(err.kind(), ErrorKind::Separator);
        assert_eq!(err.message(), Some("Expected whitespace but found ,"));
    }

    #[test]
    fn trailing_token_without_newline_is_valid() {
        assert_eq!(parse(b"1 2").expect("two values"), vec![1.0, 2.0]);
    }

    #[test]
    fn runs_of_separators_are_skipped() {
        assert_eq!(parse(b"1  2 \n").expect("two values"), vec![1.0, 2.0]);
    }

    #[test]
    fn empty_buffer_yields_no_values() {
        assert_eq!(parse(b"").expect("no values"), Vec::<f64>::new());
    }

    #[test]
    fn bare_newline_fails_the_number_scanner() {
        let err = parse(b"\n").expect_err("blank line");
        assert_eq!(err.kind(), ErrorKind::Number);
    }

    #[test]
    fn leading_space_fails_the_number_scanner() {
        let err = parse(b" 1\n").expect_err("leading space");
        assert_eq!(err.kind(), ErrorKind::Number);
    }

    #[test]
    fn mixed_forms_parse_on_one_line() {
        let values = parse(b"-2 .5 5. 1.5e-2 1e3\n").expect("five values");
        let expected = [-2.0, 0.5, 5.0, 0.015, 1000.0];
        assert_eq!(values.len(), expected.len());
        for (value, want) in values.iter().zip(expected) {
            assert!((value - want).abs() < 1e-12, "{value} vs {want}");
        }
    }
}
