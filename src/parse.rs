use crate::error::InvalidInput;

/// Parses a whitespace separated line of numbers. A blank line yields an empty list.
pub fn parse_numbers(line: &str) -> Result<Vec<f64>, InvalidInput> {
    line.split_whitespace().map(parse_number).collect()
}

fn parse_number(token: &str) -> Result<f64, InvalidInput> {
    let value: f64 = token
        .parse()
        .map_err(|_| InvalidInput::UnparsableToken {
            token: token.to_string(),
        })?;

    // `str::parse` accepts "nan", "inf" and "infinity".
    if !value.is_finite() {
        return Err(InvalidInput::NonFinite {
            value: token.to_string(),
        });
    }

    Ok(value)
}
