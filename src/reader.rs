use crate::errors::{CalcError, SessionError};
use crate::number::Number;
use std::io::{BufRead, Write};
use std::num::IntErrorKind;
use tracing::{debug, trace};

pub const INVALID_NUMBER_MSG: &str = "ERROR: Invalid number.";

/// Writes `prompt` and returns the next input line, trimmed. Bytes that
/// are not UTF-8 come through as replacement characters.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String, SessionError> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Err(SessionError::EndOfInput);
    }
    let line = String::from_utf8_lossy(&buf);
    trace!(prompt = prompt.trim(), line = line.trim(), "read line");
    Ok(line.trim().to_string())
}

/// Parses interactive input: text with a decimal point is a float,
/// anything else must be an integer. Integers too large for `i64` are
/// kept as floats.
fn parse_typed(text: &str) -> Option<Number> {
    if text.contains('.') {
        return text.parse::<f64>().ok().map(Number::Float);
    }
    match text.parse::<i64>() {
        Ok(n) => Some(Number::Integer(n)),
        Err(err)
            if matches!(
                err.kind(),
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
            ) =>
        {
            text.parse::<f64>().ok().map(Number::Float)
        }
        Err(_) => None,
    }
}

/// Prompts until the user types a valid number.
///
/// Malformed input is reported on `output` and the prompt repeats; only
/// I/O failures and end of input are returned as errors.
pub fn read_number<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Number, SessionError> {
    loop {
        let text = prompt_line(input, output, prompt)?;
        match parse_typed(&text) {
            Some(n) => return Ok(n),
            None => {
                debug!(input = %text, "rejected number");
                writeln!(output, "{INVALID_NUMBER_MSG}")?;
            }
        }
    }
}

/// Parses `text` without prompting. Whole values come back as integers.
pub fn parse_number(text: &str) -> Result<Number, CalcError> {
    text.trim()
        .parse::<f64>()
        .map(Number::normalized)
        .map_err(|_| CalcError::InvalidNumber(text.to_string()))
}
