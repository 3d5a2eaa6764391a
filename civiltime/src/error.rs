use core::fmt::Display;
use thiserror::Error;

/// Errors returned for parsing, conversion, and printer construction.
#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid length, expected {expected} bytes of input but found {found}")]
    InvalidLength { expected: usize, found: usize },
    #[error("expected an ASCII digit at offset {offset}")]
    ExpectedDigit { offset: usize },
    #[error("expected {expected:?} at offset {offset}")]
    ExpectedSeparator { expected: char, offset: usize },
    #[error("expected at least one fractional digit at offset {offset}")]
    EmptyFraction { offset: usize },
    #[error("unexpected trailing input at offset {offset}")]
    TrailingInput { offset: usize },
    #[error("{field} value {value} is outside of the range {min}..={max}")]
    FieldOutOfRange {
        field: Field,
        value: i64,
        min: i64,
        max: i64,
    },
    #[error("{year:04}-{month:02}-{day:02} is not a valid calendar date")]
    InvalidDate { year: i32, month: i32, day: i32 },
    #[error("the value is outside of the representable range")]
    Overflow,
    #[error("a negative span can not be converted to an unsigned duration")]
    NegativeSpan,
    #[error("invalid precision of {digits} fractional digits, must be at most 9")]
    InvalidPrecision { digits: u8 },
    #[error("invalid separator {separator:?}, must be 'T' or ' '")]
    InvalidSeparator { separator: char },
}

/// Names one of the civil fields in an [`Error::FieldOutOfRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Nanosecond,
}

impl Field {
    const fn name(&self) -> &'static str {
        match self {
            Field::Month => "month",
            Field::Day => "day",
            Field::Hour => "hour",
            Field::Minute => "minute",
            Field::Second => "second",
            Field::Nanosecond => "nanosecond",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.name().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let e = Error::FieldOutOfRange {
            field: Field::Month,
            value: 13,
            min: 1,
            max: 12,
        };
        assert_eq!(e.to_string(), "month value 13 is outside of the range 1..=12");

        let e = Error::InvalidDate {
            year: 2026,
            month: 2,
            day: 30,
        };
        assert_eq!(e.to_string(), "2026-02-30 is not a valid calendar date");

        let e = Error::ExpectedSeparator {
            expected: '-',
            offset: 4,
        };
        assert_eq!(e.to_string(), "expected '-' at offset 4");
    }

    #[test]
    fn field_names() {
        let names: Vec<String> = [
            Field::Month,
            Field::Day,
            Field::Hour,
            Field::Minute,
            Field::Second,
            Field::Nanosecond,
        ]
        .iter()
        .map(|f| f.to_string())
        .collect();
        assert_eq!(names, ["month", "day", "hour", "minute", "second", "nanosecond"]);
    }
}
