//! Strength labels, results and the score threshold table.

use std::fmt;

/// Highest score the rules can award (2 for length, 1 per character class).
///
/// Exceeds the nominal 0-5 range; scores are never capped and a 6 resolves
/// through the `>=` lookup to [`StrengthLabel::VeryStrong`].
pub const MAX_SCORE: u8 = 6;

/// Qualitative tier of a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StrengthLabel {
    NoPassword,
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

/// Minimum score per tier, highest first. The first row the score meets
/// or exceeds wins.
const STRENGTH_THRESHOLDS: [(u8, StrengthLabel); 5] = [
    (5, StrengthLabel::VeryStrong),
    (4, StrengthLabel::Strong),
    (3, StrengthLabel::Medium),
    (2, StrengthLabel::Weak),
    (0, StrengthLabel::VeryWeak),
];

impl StrengthLabel {
    /// Maps the score of a non-empty password to its tier.
    pub fn from_score(score: u8) -> Self {
        STRENGTH_THRESHOLDS
            .iter()
            .find(|(threshold, _)| score >= *threshold)
            .map(|&(_, label)| label)
            .unwrap_or(StrengthLabel::VeryWeak)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::NoPassword => "No Password",
            StrengthLabel::VeryWeak => "Very Weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score and tier of a classified password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StrengthResult {
    pub score: u8,
    pub label: StrengthLabel,
}

impl StrengthResult {
    /// Result for the empty password.
    pub const NO_PASSWORD: StrengthResult = StrengthResult {
        score: 0,
        label: StrengthLabel::NoPassword,
    };

    pub fn from_score(score: u8) -> Self {
        Self {
            score,
            label: StrengthLabel::from_score(score),
        }
    }
}
