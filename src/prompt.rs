use std::io::{BufRead, Write};

use crate::error::{Error, Result};

pub const BOUNDARY_PROMPT: &str = "Enter boundary size (integer): ";
pub const NODE_COUNT_PROMPT: &str = "Enter node count (integer): ";

/// Drops single `_` separators between digits, as in `1_000`.
fn strip_digit_separators(text: &str) -> Option<String> {
    let digits = text
        .strip_prefix('-')
        .or_else(|| text.strip_prefix('+'))
        .unwrap_or(text);
    if digits.starts_with('_') || digits.ends_with('_') || digits.contains("__") {
        return None;
    }
    Some(text.replace('_', ""))
}

/// Parses one answer, ignoring surrounding whitespace.
pub fn parse_integer(input: &str) -> Result<i64> {
    let text = input.trim();
    strip_digit_separators(text)
        .and_then(|digits| digits.parse().ok())
        .ok_or_else(|| Error::InvalidInteger {
            input: text.to_string(),
        })
}

/// Prints `prompt` without a newline and reads one line as an integer.
pub fn prompt_integer<R, W>(input: &mut R, output: &mut W, prompt: &'static str) -> Result<i64>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::EndOfInput(prompt.trim_end()));
    }
    parse_integer(&line)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn parses_padded_integers() {
        assert_eq!(parse_integer(" 42 \n").unwrap(), 42);
        assert_eq!(parse_integer("-7").unwrap(), -7);
        assert_eq!(parse_integer("+3").unwrap(), 3);
    }

    #[test]
    fn accepts_digit_separators() {
        assert_eq!(parse_integer("1_000").unwrap(), 1000);
        assert_eq!(parse_integer("-1_0_0").unwrap(), -100);
        for bad in ["_1", "1_", "1__0", "-_1"] {
            assert!(parse_integer(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn rejects_non_integers() {
        for bad in ["abc", "", "1.5", "10 20", "99999999999999999999"] {
            assert!(matches!(
                parse_integer(bad),
                Err(Error::InvalidInteger { .. })
            ));
        }
    }

    #[test]
    fn prompts_then_reads_line() {
        let mut input = Cursor::new("12\n5\n");
        let mut output = Vec::new();

        let first = prompt_integer(&mut input, &mut output, BOUNDARY_PROMPT).unwrap();
        let second = prompt_integer(&mut input, &mut output, NODE_COUNT_PROMPT).unwrap();

        assert_eq!((first, second), (12, 5));
        assert_eq!(
            String::from_utf8(output).unwrap(),
            format!("{BOUNDARY_PROMPT}{NODE_COUNT_PROMPT}")
        );
    }

    #[test]
    fn eof_is_reported() {
        let mut input = Cursor::new("");
        let result = prompt_integer(&mut input, &mut Vec::new(), NODE_COUNT_PROMPT);
        assert!(matches!(result, Err(Error::EndOfInput(_))));
    }
}
