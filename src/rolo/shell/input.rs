//! Console input primitives.
//!
//! Each reader repeats until it gets a satisfying line, printing a guidance
//! message on every rejected attempt. Input format errors are therefore
//! never surfaced as program failures. The only error these functions
//! return is loss of the input stream itself (EOF or an I/O failure), which
//! ends the session.

use crate::error::{Result, RoloError};
use chrono::NaiveDate;
use std::io::{self, BufRead, Write};

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Write an inline prompt without a trailing newline.
pub fn prompt<W: Write>(output: &mut W, text: &str) -> Result<()> {
    write!(output, "{text}")?;
    output.flush()?;
    Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    let bytes = input.read_line(&mut line)?;
    if bytes == 0 {
        return Err(RoloError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "the input stream closed",
        )));
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

/// Read one line as-is (newline stripped). Empty input is accepted.
pub fn read_free_text<R: BufRead>(input: &mut R) -> Result<String> {
    read_line(input)
}

/// Read an integer within the inclusive `[min, max]` range.
pub fn read_int_in_range<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    min: i64,
    max: i64,
) -> Result<i64> {
    loop {
        let line = read_line(input)?;
        let value: i64 = match line.trim().parse() {
            Ok(v) => v,
            Err(_) => {
                writeln!(output, "Could not read that as a number. Try again.")?;
                continue;
            }
        };

        if value < min || value > max {
            writeln!(
                output,
                "The value must be between {min} and {max}. Try again."
            )?;
            continue;
        }

        return Ok(value);
    }
}

/// Read a calendar date in `YYYY-MM-DD` form.
pub fn read_date<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<NaiveDate> {
    loop {
        let line = read_line(input)?;
        match NaiveDate::parse_from_str(line.trim(), DATE_FORMAT) {
            Ok(date) => return Ok(date),
            Err(_) => {
                writeln!(
                    output,
                    "Could not read that as a date. Use the YYYY-MM-DD format \
                     (for example, 1995-02-24). Try again."
                )?;
            }
        }
    }
}

/// Read a line that is not empty or all whitespace; the result is trimmed.
pub fn read_non_empty<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    loop {
        let line = read_line(input)?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            writeln!(output, "The text cannot be empty. Try again.")?;
            continue;
        }
        return Ok(trimmed.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn cursor(script: &str) -> Cursor<Vec<u8>> {
        Cursor::new(script.as_bytes().to_vec())
    }

    fn text(buf: &[u8]) -> String {
        String::from_utf8(buf.to_vec()).unwrap()
    }

    #[test]
    fn int_retries_until_numeric() {
        let mut input = cursor("abc\n12\n");
        let mut output = Vec::new();

        let value = read_int_in_range(&mut input, &mut output, 1, 20).unwrap();

        assert_eq!(value, 12);
        assert!(text(&output).contains("Could not read that as a number"));
    }

    #[test]
    fn int_announces_both_bounds_on_out_of_range() {
        let mut input = cursor("0\n6\n3\n");
        let mut output = Vec::new();

        let value = read_int_in_range(&mut input, &mut output, 1, 5).unwrap();

        assert_eq!(value, 3);
        assert!(text(&output).contains("between 1 and 5"));
    }

    #[test]
    fn date_retries_until_iso_format() {
        let mut input = cursor("24.02.1995\n1995-02-24\n");
        let mut output = Vec::new();

        let date = read_date(&mut input, &mut output).unwrap();

        assert_eq!(date, NaiveDate::from_ymd_opt(1995, 2, 24).unwrap());
        assert!(text(&output).contains("YYYY-MM-DD"));
    }

    #[test]
    fn non_empty_rejects_blank_lines_and_trims() {
        let mut input = cursor("\n   \n  anna  \n");
        let mut output = Vec::new();

        let value = read_non_empty(&mut input, &mut output).unwrap();

        assert_eq!(value, "anna");
        assert!(text(&output).contains("cannot be empty"));
    }

    #[test]
    fn free_text_accepts_empty_and_keeps_inner_whitespace() {
        let mut input = cursor("\n");
        assert_eq!(read_free_text(&mut input).unwrap(), "");

        let mut input = cursor(" spaced out \n");
        assert_eq!(read_free_text(&mut input).unwrap(), " spaced out ");
    }

    #[test]
    fn eof_is_an_io_error() {
        let mut input = cursor("");
        let mut output = Vec::new();

        let err = read_int_in_range(&mut input, &mut output, 1, 5).unwrap_err();
        match err {
            RoloError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof),
            other => panic!("expected an IO error, got {other:?}"),
        }
    }

    #[test]
    fn windows_line_endings_are_stripped() {
        let mut input = cursor("Ivan Petrov\r\n");
        assert_eq!(read_free_text(&mut input).unwrap(), "Ivan Petrov");
    }
}
