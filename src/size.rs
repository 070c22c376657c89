use crate::error::{ResizeError, Result};
use regex::Regex;
use std::fmt;
use std::io::{BufRead, Write};
use std::sync::LazyLock;

/// Grammar of a human-entered size token: digits, then at most one space,
/// then an optional literal `px` unit. Valid: `1200`, `1200px`, `1200 px`.
static SIZE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s?(px)?$").unwrap());

/// A validated pixel bound for the largest dimension of a resized image.
///
/// Always strictly positive: a bound of zero would mean a 0x0 thumbnail,
/// so tokens parsing to 0 are rejected alongside malformed ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ResizeTarget(u32);

impl ResizeTarget {
    /// Parses a size token such as `"1200"`, `"1200px"` or `"1200 px"`.
    ///
    /// # Returns
    /// * `Ok(ResizeTarget)` for a token matching the grammar with a positive value
    /// * `Err(ResizeError::InvalidSize)` for everything else, including `"0"`
    ///   and values that do not fit in a `u32`
    pub fn parse(token: &str) -> Result<Self> {
        let digits = SIZE_TOKEN
            .captures(token)
            .and_then(|caps| caps.get(1))
            .ok_or_else(|| ResizeError::InvalidSize(token.to_string()))?;

        match digits.as_str().parse::<u32>() {
            Ok(value) if value > 0 => Ok(ResizeTarget(value)),
            _ => Err(ResizeError::InvalidSize(token.to_string())),
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ResizeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Asks the operator for the new largest dimension until a valid token is read.
///
/// Displays `prompt`, reads a line and tries [`ResizeTarget::parse`]. On a bad
/// token it prints `error_template` with `{input_value}` replaced by the
/// rejected token, then re-prompts with `try_again_prompt` (or `prompt` again
/// when the retry prompt is empty). Loops until valid input arrives; there is
/// no timeout. Running out of input (EOF) is an I/O error.
pub fn prompt_until_valid<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    error_template: &str,
    try_again_prompt: &str,
) -> Result<ResizeTarget> {
    let retry = if try_again_prompt.is_empty() {
        prompt
    } else {
        try_again_prompt
    };

    let mut token = read_token(input, output, prompt)?;
    loop {
        match ResizeTarget::parse(&token) {
            Ok(target) => return Ok(target),
            Err(_) => {
                let message = error_template.replace("{input_value}", &token);
                writeln!(output, "{}", message)?;
                token = read_token(input, output, retry)?;
            }
        }
    }
}

fn read_token<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "no more input while waiting for a size",
        )
        .into());
    }

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
