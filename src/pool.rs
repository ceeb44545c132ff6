//! Character pool assembly from the enabled character classes.

use crate::generator::GenerationError;
use crate::options::GenerationOptions;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const NUMBERS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// One of the four fixed alphabets a password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

impl CharacterClass {
    /// All classes in pool construction order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Numbers,
        CharacterClass::Symbols,
    ];

    /// The literal alphabet of this class.
    ///
    /// The symbol set is a fixed selection and deliberately leaves out
    /// backtick, tilde, quotes, backslash and slash.
    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Numbers => NUMBERS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }
}

/// The alphabet sampled by a single generation call.
///
/// Always non-empty: the only constructor fails when no class is enabled.
/// Characters are laid out uppercase, lowercase, numbers, symbols, each
/// block present only if its class is enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool {
    chars: Vec<u8>,
}

impl CharacterPool {
    /// Builds the pool for `options`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::EmptyPool`] if every class flag is off.
    pub fn from_options(options: &GenerationOptions) -> Result<Self, GenerationError> {
        let chars: Vec<u8> = options
            .enabled_classes()
            .flat_map(|class| class.alphabet().bytes())
            .collect();

        if chars.is_empty() {
            return Err(GenerationError::EmptyPool);
        }

        Ok(Self { chars })
    }

    /// Number of characters in the pool.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).map(|&b| b as char)
    }

    /// Whether `c` belongs to the pool.
    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.chars.contains(&(c as u8))
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.chars
    }

    /// Iterates the pool in construction order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().map(|&b| b as char)
    }
}
