//! Purpose: Hand-rolled numeric token scanning over a byte cursor.
//! Exports: `scan_number`, `ScannedInt`, `MAX_EXPONENT`.
//! Role: The custom parsing strategy's inner loop; no allocation, one pass.
//! Invariants: The cursor is left immediately past the last consumed byte.
//! Invariants: Digit accumulation wraps beyond `i64` range rather than
//! checking for overflow; very long digit runs are an accepted limitation.

use crate::core::cursor::Cursor;
use crate::core::error::{Error, ErrorKind};
use crate::core::pow10::Pow10Cache;

/// Largest exponent magnitude accepted by [`scan_number`].
pub const MAX_EXPONENT: i64 = 300;

/// One integer scan: accumulated value, digits consumed, and whether a
/// leading `-` was present. Zero digits consumed means "no integer here"
/// and is not an error; callers must check `digits`, not `value`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScannedInt {
    pub value: i64,
    pub digits: usize,
    pub negative: bool,
}

/// Consumes a maximal run of ASCII digits, accumulating base-10.
pub(crate) fn scan_unsigned(cursor: &mut Cursor<'_>) -> ScannedInt {
    let mut value: i64 = 0;
    let mut digits = 0;
    while let Some(byte @ b'0'..=b'9') = cursor.peek() {
        value = value.wrapping_mul(10).wrapping_add(i64::from(byte - b'0'));
        cursor.advance();
        digits += 1;
    }
    ScannedInt {
        value,
        digits,
        negative: false,
    }
}

/// Consumes an optional `+`/`-` then a digit run. The digit count excludes
/// the sign byte.
pub(crate) fn scan_signed(cursor: &mut Cursor<'_>) -> ScannedInt {
    let negative = if cursor.eat(b'-') {
        true
    } else {
        let _ = cursor.eat(b'+');
        false
    };
    let run = scan_unsigned(cursor);
    let value = if negative {
        run.value.wrapping_neg()
    } else {
        run.value
    };
    ScannedInt {
        value,
        digits: run.digits,
        negative,
    }
}

/// Scans one floating-point token: signed whole part, optional `.` fraction,
/// optional `e`/`E` signed exponent. A token must contain at least one digit
/// before or after the point. The fractional contribution carries the
/// token's sign, so `-2.5` scans to -2.5.
pub fn scan_number(cursor: &mut Cursor<'_>, pow10: &mut Pow10Cache) -> Result<f64, Error> {
    let whole = scan_signed(cursor);
    let mut value = whole.value as f64;

    if cursor.eat(b'.') {
        let fraction = scan_unsigned(cursor);
        if whole.digits == 0 && fraction.digits == 0 {
            return Err(number_error(
                cursor,
                "Found period with no digits either before or after",
            ));
        }
        if fraction.digits > 0 {
            let magnitude = fraction.value as f64 * pow10.negative(fraction.digits);
            value += if whole.negative { -magnitude } else { magnitude };
        }
    } else if whole.digits == 0 {
        return Err(number_error(cursor, "Found neither whole part nor period"));
    }

    if matches!(cursor.peek(), Some(b'e' | b'E')) {
        cursor.advance();
        let exponent = scan_signed(cursor);
        if exponent.digits == 0 {
            return Err(number_error(cursor, "Found exponent char but no exponent"));
        }
        if exponent.value > MAX_EXPONENT || exponent.value < -MAX_EXPONENT {
            return Err(number_error(cursor, "Exponent out of range"));
        }
        if exponent.value > 0 {
            value *= pow10.positive(exponent.value as usize);
        } else if exponent.value < 0 {
            value *= pow10.negative(exponent.value.unsigned_abs() as usize);
        }
    }

    Ok(value)
}

fn number_error(cursor: &Cursor<'_>, message: &str) -> Error {
    Error::new(ErrorKind::Number)
        .with_message(message)
        .with_column(cursor.pos())
}
