//! Character variety section - one point per character class present.

use super::SectionScore;

/// Scores uppercase, lowercase, digit and symbol presence, one point each.
///
/// Letter and digit checks are ASCII only; anything that is not an ASCII
/// letter or digit counts as a symbol, including non-ASCII letters.
pub fn character_variety_section(password: &str) -> SectionScore {
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| !c.is_ascii_alphanumeric());

    [has_upper, has_lower, has_digit, has_symbol]
        .iter()
        .filter(|&&present| present)
        .count() as SectionScore
}
