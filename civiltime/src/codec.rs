//! Parsing and printing of the text form.
//!
//! The parsers here only check syntax and coarse field ranges. They do not
//! know about month lengths or leap years, so `2026-02-30` parses fine and is
//! rejected later, when the fields are converted into an [`EpochTime`].
//!
//! The accepted grammar is:
//!
//! ```text
//! date     = YYYY "-" MM "-" DD
//! time     = HH ":" MM ":" SS
//! datetime = date ( "T" | " " ) time [ "." 1*DIGIT ] [ "Z" ]
//! ```
//!
//! Fractional seconds shorter than nine digits are scaled up to nanoseconds,
//! so `.5` is half a second. Digits past the ninth are consumed and dropped
//! without rounding.

use core::fmt::Write;
use log::debug;

use crate::calendar::check_range;
use crate::*;

const DATE_LEN: usize = 10;
const TIME_LEN: usize = 8;
const DATETIME_MIN_LEN: usize = DATE_LEN + 1 + TIME_LEN;
const MAX_PRECISION: u8 = 9;

/// Parse `YYYY-MM-DD` into `(year, month, day)` with no range checks.
pub fn parse_date(text: &str) -> Option<(i32, i32, i32)> {
    try_parse_date(text).ok()
}

/// Parse `YYYY-MM-DD` into `(year, month, day)` with no range checks,
/// reporting where the input is malformed.
pub fn try_parse_date(text: &str) -> Result<(i32, i32, i32), Error> {
    let bytes = text.as_bytes();
    expect_len(bytes, DATE_LEN)?;
    ymd(bytes, 0)
}

/// Parse `HH:MM:SS` into `(hour, minute, second)` with no range checks.
pub fn parse_time(text: &str) -> Option<(i32, i32, i32)> {
    try_parse_time(text).ok()
}

/// Parse `HH:MM:SS` into `(hour, minute, second)` with no range checks,
/// reporting where the input is malformed.
pub fn try_parse_time(text: &str) -> Result<(i32, i32, i32), Error> {
    let bytes = text.as_bytes();
    expect_len(bytes, TIME_LEN)?;
    hms(bytes, 0)
}

/// Parse a datetime, falling back to [`CivilFields::EPOCH`] on any syntax or
/// range error.
pub fn parse_datetime(text: &str) -> CivilFields {
    match try_parse_datetime(text) {
        Ok(fields) => fields,
        Err(e) => {
            debug!("failed to parse datetime {text:?}: {e}, using the epoch");
            CivilFields::EPOCH
        }
    }
}

/// Parse a datetime and apply the coarse range check. The calendar validity
/// of the date is not checked.
pub fn try_parse_datetime(text: &str) -> Result<CivilFields, Error> {
    let bytes = text.as_bytes();
    if bytes.len() < DATETIME_MIN_LEN {
        return Err(Error::InvalidLength {
            expected: DATETIME_MIN_LEN,
            found: bytes.len(),
        });
    }

    let (year, month, day) = ymd(bytes, 0)?;

    match bytes[DATE_LEN] {
        b'T' | b' ' => {}
        _ => {
            return Err(Error::ExpectedSeparator {
                expected: 'T',
                offset: DATE_LEN,
            })
        }
    }

    let (hour, minute, second) = hms(bytes, DATE_LEN + 1)?;

    let mut pos = DATETIME_MIN_LEN;
    let mut nanosecond = 0;

    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        let start = pos;
        let mut digits = 0;
        while let Some(b) = bytes.get(pos).filter(|b| b.is_ascii_digit()) {
            if digits < MAX_PRECISION {
                nanosecond = nanosecond * 10 + (b - b'0') as i32;
                digits += 1;
            }
            pos += 1;
        }
        if pos == start {
            return Err(Error::EmptyFraction { offset: start });
        }
        nanosecond *= 10_i32.pow((MAX_PRECISION - digits) as u32);
    }

    if bytes.get(pos) == Some(&b'Z') {
        pos += 1;
    }

    if pos != bytes.len() {
        return Err(Error::TrailingInput { offset: pos });
    }

    check_range(Field::Month, month, 1, 12)?;
    check_range(Field::Day, day, 1, 31)?;
    check_range(Field::Hour, hour, 0, 23)?;
    check_range(Field::Minute, minute, 0, 59)?;
    check_range(Field::Second, second, 0, 60)?;

    Ok(CivilFields {
        year,
        month,
        day,
        hour,
        minute,
        second,
        nanosecond,
    })
}

/// Print `YYYY-MM-DD`, zero padded. The fields are not validated.
pub fn format_date(year: i32, month: i32, day: i32) -> String {
    let mut out = String::with_capacity(DATE_LEN);
    let _ = write_date(&mut out, year, month, day);
    out
}

/// Print the canonical `YYYY-MM-DDTHH:MM:SS[.nnnnnnnnn]Z` form. The fraction
/// is printed with nine digits, and only when the nanosecond field is
/// nonzero. The fields are not validated.
pub fn format_datetime_utc(fields: &CivilFields) -> String {
    Printer::default().format(fields)
}

fn write_date<W: Write>(out: &mut W, year: i32, month: i32, day: i32) -> core::fmt::Result {
    write!(out, "{year:04}-{month:02}-{day:02}")
}

fn expect_len(bytes: &[u8], expected: usize) -> Result<(), Error> {
    if bytes.len() != expected {
        return Err(Error::InvalidLength {
            expected,
            found: bytes.len(),
        });
    }
    Ok(())
}

fn ymd(bytes: &[u8], offset: usize) -> Result<(i32, i32, i32), Error> {
    let year = digits(bytes, offset, 4)?;
    separator(bytes, offset + 4, b'-')?;
    let month = digits(bytes, offset + 5, 2)?;
    separator(bytes, offset + 7, b'-')?;
    let day = digits(bytes, offset + 8, 2)?;
    Ok((year, month, day))
}

fn hms(bytes: &[u8], offset: usize) -> Result<(i32, i32, i32), Error> {
    let hour = digits(bytes, offset, 2)?;
    separator(bytes, offset + 2, b':')?;
    let minute = digits(bytes, offset + 3, 2)?;
    separator(bytes, offset + 5, b':')?;
    let second = digits(bytes, offset + 6, 2)?;
    Ok((hour, minute, second))
}

// callers have already checked the input is long enough
fn digits(bytes: &[u8], offset: usize, width: usize) -> Result<i32, Error> {
    let mut value = 0;
    for (i, b) in bytes[offset..offset + width].iter().enumerate() {
        if !b.is_ascii_digit() {
            return Err(Error::ExpectedDigit { offset: offset + i });
        }
        value = value * 10 + (b - b'0') as i32;
    }
    Ok(value)
}

fn separator(bytes: &[u8], offset: usize, expected: u8) -> Result<(), Error> {
    if bytes[offset] != expected {
        return Err(Error::ExpectedSeparator {
            expected: expected as char,
            offset,
        });
    }
    Ok(())
}

/// How many fractional second digits a [`Printer`] writes.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub enum Precision {
    /// Nine digits when the nanosecond field is nonzero, otherwise none.
    #[default]
    Auto,
    /// Exactly this many digits, truncating. Zero means no fraction at all.
    Fixed(u8),
}

/// A configurable datetime printer.
///
/// The default printer writes the canonical form. For in range fields with a
/// four digit year, every form a printer can write is accepted by
/// [`parse_datetime`].
///
/// ```
/// use civiltime::{CivilFields, Precision, Printer};
///
/// let printer = Printer::builder()
///     .separator(' ')
///     .precision(Precision::Fixed(3))
///     .zulu(false)
///     .build()
///     .unwrap();
///
/// let fields = CivilFields::new(2026, 2, 7, 10, 30, 15, 123_456_789);
/// assert_eq!(printer.format(&fields), "2026-02-07 10:30:15.123");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Printer {
    separator: char,
    precision: Precision,
    zulu: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self {
            separator: 'T',
            precision: Precision::Auto,
            zulu: true,
        }
    }
}

impl Printer {
    pub fn builder() -> PrinterBuilder {
        PrinterBuilder::new()
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn zulu(&self) -> bool {
        self.zulu
    }

    /// Print the fields into a new string.
    pub fn format(&self, fields: &CivilFields) -> String {
        let mut out = String::with_capacity(DATETIME_MIN_LEN + 11);
        let _ = self.write(&mut out, fields);
        out
    }

    /// Print the fields into the provided writer.
    pub fn write<W: Write>(&self, out: &mut W, fields: &CivilFields) -> core::fmt::Result {
        write_date(out, fields.year, fields.month, fields.day)?;
        write!(
            out,
            "{}{:02}:{:02}:{:02}",
            self.separator, fields.hour, fields.minute, fields.second
        )?;

        match self.precision {
            Precision::Auto => {
                if fields.nanosecond != 0 {
                    write!(out, ".{:09}", fields.nanosecond)?;
                }
            }
            Precision::Fixed(0) => {}
            Precision::Fixed(digits) => {
                let scale = 10_i32.pow((MAX_PRECISION - digits) as u32);
                write!(
                    out,
                    ".{:0width$}",
                    fields.nanosecond / scale,
                    width = digits as usize
                )?;
            }
        }

        if self.zulu {
            out.write_char('Z')?;
        }

        Ok(())
    }
}

/// Builds a [`Printer`]. Options that are never set keep the canonical
/// defaults.
#[derive(Copy, Clone, Debug)]
pub struct PrinterBuilder {
    separator: char,
    precision: Precision,
    zulu: bool,
}

impl Default for PrinterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PrinterBuilder {
    fn new() -> Self {
        let printer = Printer::default();
        Self {
            separator: printer.separator,
            precision: printer.precision,
            zulu: printer.zulu,
        }
    }

    /// Set the character between the date and the time. Must be `'T'` or
    /// `' '`.
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Set how many fractional second digits are printed.
    pub fn precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    /// Set whether the trailing `Z` is printed.
    pub fn zulu(mut self, zulu: bool) -> Self {
        self.zulu = zulu;
        self
    }

    /// Consumes this `PrinterBuilder` and produces a `Printer`.
    pub fn build(self) -> Result<Printer, Error> {
        if self.separator != 'T' && self.separator != ' ' {
            return Err(Error::InvalidSeparator {
                separator: self.separator,
            });
        }

        if let Precision::Fixed(digits) = self.precision {
            if digits > MAX_PRECISION {
                return Err(Error::InvalidPrecision { digits });
            }
        }

        Ok(Printer {
            separator: self.separator,
            precision: self.precision,
            zulu: self.zulu,
        })
    }
}
