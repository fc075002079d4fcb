//! Leaderboard limit coercion
//!
//! Turns the raw `limit` query value into an entry count.

/// Default number of leaderboard entries returned when none is requested.
pub const DEFAULT_SCORE_LIMIT: usize = 10;

/// Resolved top-N request size
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreLimit(pub usize);

impl ScoreLimit {
    /// Coerce a raw query value.
    ///
    /// The value is read as a decimal, exponent or `0x`/`0o`/`0b` literal, or
    /// as `Infinity`, which returns every entry. Missing, blank, non-numeric,
    /// zero and negative values fall back to `default`. Positive values are
    /// floored, so `"0.5"` asks for no entries at all.
    pub fn from_query(raw: Option<&str>, default: usize) -> Self {
        match raw.and_then(parse_number) {
            Some(v) if v == f64::INFINITY => Self(usize::MAX),
            // saturating float-to-int cast
            Some(v) if v > 0.0 => Self(v.floor() as usize),
            _ => Self(default),
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for ScoreLimit {
    fn default() -> Self {
        Self(DEFAULT_SCORE_LIMIT)
    }
}

/// Numeric reading of a query string value; `None` when it is not a number.
fn parse_number(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &s[2..];
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return None;
        }
        return u128::from_str_radix(digits, radix).ok().map(|v| v as f64);
    }

    // `f64::from_str` also takes "inf" and "nan" spellings
    if s.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return None;
    }
    s.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::{ScoreLimit, DEFAULT_SCORE_LIMIT};

    fn coerce(raw: Option<&str>) -> usize {
        ScoreLimit::from_query(raw, DEFAULT_SCORE_LIMIT).get()
    }

    #[test]
    fn absent_or_garbage_uses_default() {
        assert_eq!(coerce(None), 10);
        assert_eq!(coerce(Some("")), 10);
        assert_eq!(coerce(Some("  ")), 10);
        assert_eq!(coerce(Some("ten")), 10);
        assert_eq!(coerce(Some("NaN")), 10);
        assert_eq!(coerce(Some("inf")), 10);
        assert_eq!(coerce(Some("infinity")), 10);
        assert_eq!(coerce(Some("0x")), 10);
        assert_eq!(coerce(Some("0xfg")), 10);
        assert_eq!(coerce(Some("0x+3")), 10);
    }

    #[test]
    fn zero_and_negative_use_default() {
        assert_eq!(coerce(Some("0")), 10);
        assert_eq!(coerce(Some("0x0")), 10);
        assert_eq!(coerce(Some("-3")), 10);
        assert_eq!(coerce(Some("-Infinity")), 10);
    }

    #[test]
    fn positive_values_are_floored() {
        assert_eq!(coerce(Some("3")), 3);
        assert_eq!(coerce(Some(" 25 ")), 25);
        assert_eq!(coerce(Some("2.9")), 2);
        assert_eq!(coerce(Some("0.5")), 0);
        assert_eq!(coerce(Some("1e2")), 100);
    }

    #[test]
    fn radix_literals_are_numbers() {
        assert_eq!(coerce(Some("0x3")), 3);
        assert_eq!(coerce(Some("0XA")), 10);
        assert_eq!(coerce(Some("0o17")), 15);
        assert_eq!(coerce(Some("0b101")), 5);
    }

    #[test]
    fn infinity_returns_everything() {
        assert_eq!(coerce(Some("Infinity")), usize::MAX);
        assert_eq!(coerce(Some("+Infinity")), usize::MAX);
    }

    #[test]
    fn custom_default_is_respected() {
        assert_eq!(ScoreLimit::from_query(None, 25).get(), 25);
        assert_eq!(ScoreLimit::default().get(), DEFAULT_SCORE_LIMIT);
    }
}
