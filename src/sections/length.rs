//! Length section - rewards long passwords.

use super::SectionScore;

const LONG_LENGTH: usize = 12;
const LONG_BONUS: SectionScore = 2;

/// Awards 2 points to passwords of at least 12 characters.
///
/// Length is counted in UTF-16 code units, so a character outside the
/// Basic Multilingual Plane (most emoji) counts twice.
pub fn length_section(password: &str) -> SectionScore {
    if password.encode_utf16().count() >= LONG_LENGTH {
        return LONG_BONUS;
    }
    0
}
