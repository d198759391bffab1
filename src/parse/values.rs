//! Conversion of matched tokens into action field values

use regex::Regex;

use crate::models::Money;

/// Amount syntax accepted wherever a money value is expected.
///
/// An optional leading sign and a single currency symbol, then a decimal
/// number with up to two fractional digits, then an optional three-letter
/// currency code (`$12.50`, `-€3`, `12.50USD`, `7.5 CAD`). The `number`
/// group holds the part handed to [`Money::parse`].
pub const AMOUNT_PATTERN: &str =
    r#"(?P<sign>-)?[^\w\s.,'"|-]?(?P<number>-?\d+(?:\.\d{1,2})?)(?:\W?[A-Z]{3})?"#;

/// Compile [`AMOUNT_PATTERN`] for value extraction
pub fn amount_regex() -> Result<Regex, regex::Error> {
    Regex::new(AMOUNT_PATTERN)
}

/// Trim surrounding whitespace and any leftover quote characters
pub fn item_name_value(token: &str) -> String {
    token
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .trim()
        .to_string()
}

/// Extract a money amount from a token.
///
/// Anything that does not hold a recognizable amount becomes zero.
pub fn money_value(token: &str, amount: &Regex) -> Money {
    let Some(captures) = amount.captures(token.trim()) else {
        return Money::zero();
    };
    let Some(number) = captures.name("number") else {
        return Money::zero();
    };

    let value = Money::parse(number.as_str()).unwrap_or_default();
    if captures.name("sign").is_some() {
        Money::from_cents(-value.cents())
    } else {
        value
    }
}
