use std::fmt;

/// Money is represented as integer cents to avoid floating-point precision
/// issues. $50.00 = 5000 cents. Balances may go negative; individual
/// amounts entered by the user are validated elsewhere to be positive.
pub type Cents = i64;

/// Format cents as a dollar string: 5000 -> "$50.00", -1234 -> "$-12.34".
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.abs();
    format!("${}{}.{:02}", sign, abs / 100, abs % 100)
}

/// Parse a decimal amount string into cents.
/// Accepts "50", "50.0", "50.00" and a leading '-'; anything with more
/// than two decimal places or non-numeric content is rejected.
pub fn parse_cents(input: &str) -> Result<Cents, ParseCentsError> {
    let input = input.trim();
    let (negative, digits) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    let (units_str, frac_str) = match digits.split_once('.') {
        Some((u, f)) => (u, f),
        None => (digits, ""),
    };

    if units_str.is_empty() && frac_str.is_empty() {
        return Err(ParseCentsError::InvalidFormat);
    }
    // The sign was stripped above; any remaining sign (e.g. "1.-5") is
    // malformed, so both components must be plain digit runs.
    if !is_digits(units_str) || !is_digits(frac_str) {
        return Err(ParseCentsError::InvalidFormat);
    }

    let units: i64 = if units_str.is_empty() {
        0
    } else {
        units_str.parse().map_err(|_| ParseCentsError::InvalidFormat)?
    };

    let frac: i64 = match frac_str.len() {
        0 => 0,
        1 => frac_str.parse::<i64>().map_err(|_| ParseCentsError::InvalidFormat)? * 10,
        2 => frac_str.parse().map_err(|_| ParseCentsError::InvalidFormat)?,
        _ => return Err(ParseCentsError::InvalidFormat),
    };

    // Checked arithmetic: amounts near i64::MAX units would otherwise
    // overflow the cents conversion.
    let cents = units
        .checked_mul(100)
        .and_then(|c| c.checked_add(frac))
        .ok_or(ParseCentsError::InvalidFormat)?;
    Ok(if negative { -cents } else { cents })
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCentsError {
    InvalidFormat,
}

impl fmt::Display for ParseCentsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCentsError::InvalidFormat => write!(f, "invalid amount format"),
        }
    }
}

impl std::error::Error for ParseCentsError {}
