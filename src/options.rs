//! Generation options and environment configuration.

use std::env::VarError;
use std::ops::RangeInclusive;
use thiserror::Error;

use crate::pool::CharacterClass;

/// Length bounds offered to users. Not enforced by the generator.
pub const RECOMMENDED_LENGTH: RangeInclusive<usize> = 8..=32;

/// Length used when nothing else is configured.
pub const DEFAULT_LENGTH: usize = 16;

pub const ENV_LENGTH: &str = "PWD_GEN_LENGTH";
pub const ENV_UPPERCASE: &str = "PWD_GEN_UPPERCASE";
pub const ENV_LOWERCASE: &str = "PWD_GEN_LOWERCASE";
pub const ENV_NUMBERS: &str = "PWD_GEN_NUMBERS";
pub const ENV_SYMBOLS: &str = "PWD_GEN_SYMBOLS";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// What a generated password may contain and how long it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
    pub length: usize,
    pub use_uppercase: bool,
    pub use_lowercase: bool,
    pub use_numbers: bool,
    pub use_symbols: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            use_uppercase: true,
            use_lowercase: true,
            use_numbers: true,
            use_symbols: true,
        }
    }
}

impl GenerationOptions {
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    pub fn with_uppercase(mut self, enabled: bool) -> Self {
        self.use_uppercase = enabled;
        self
    }

    pub fn with_lowercase(mut self, enabled: bool) -> Self {
        self.use_lowercase = enabled;
        self
    }

    pub fn with_numbers(mut self, enabled: bool) -> Self {
        self.use_numbers = enabled;
        self
    }

    pub fn with_symbols(mut self, enabled: bool) -> Self {
        self.use_symbols = enabled;
        self
    }

    /// Whether `class` is switched on.
    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.use_uppercase,
            CharacterClass::Lowercase => self.use_lowercase,
            CharacterClass::Numbers => self.use_numbers,
            CharacterClass::Symbols => self.use_symbols,
        }
    }

    /// Enabled classes, in pool construction order.
    pub fn enabled_classes(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(move |&class| self.is_enabled(class))
    }

    /// Whether `length` falls inside [`RECOMMENDED_LENGTH`].
    pub fn is_recommended_length(&self) -> bool {
        RECOMMENDED_LENGTH.contains(&self.length)
    }

    /// Builds options from the environment, falling back to the defaults
    /// for any variable that is unset.
    ///
    /// # Environment Variables
    ///
    /// - `PWD_GEN_LENGTH`: password length (non-negative integer)
    /// - `PWD_GEN_UPPERCASE`, `PWD_GEN_LOWERCASE`, `PWD_GEN_NUMBERS`,
    ///   `PWD_GEN_SYMBOLS`: `true/false`, `1/0`, `yes/no` or `on/off`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a set variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let options = Self {
            length: read_env(ENV_LENGTH, parse_length)?.unwrap_or(defaults.length),
            use_uppercase: read_env(ENV_UPPERCASE, parse_flag)?.unwrap_or(defaults.use_uppercase),
            use_lowercase: read_env(ENV_LOWERCASE, parse_flag)?.unwrap_or(defaults.use_lowercase),
            use_numbers: read_env(ENV_NUMBERS, parse_flag)?.unwrap_or(defaults.use_numbers),
            use_symbols: read_env(ENV_SYMBOLS, parse_flag)?.unwrap_or(defaults.use_symbols),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            length = options.length,
            uppercase = options.use_uppercase,
            lowercase = options.use_lowercase,
            numbers = options.use_numbers,
            symbols = options.use_symbols,
            "Generation options loaded from environment"
        );

        Ok(options)
    }
}

fn read_env<T>(
    key: &'static str,
    parse: fn(&str) -> Option<T>,
) -> Result<Option<T>, ConfigError> {
    let raw = match std::env::var(key) {
        Ok(raw) => raw,
        Err(VarError::NotPresent) => return Ok(None),
        Err(VarError::NotUnicode(raw)) => {
            return Err(ConfigError::InvalidValue {
                key,
                value: raw.to_string_lossy().into_owned(),
            });
        }
    };

    match parse(raw.trim()) {
        Some(value) => Ok(Some(value)),
        None => {
            #[cfg(feature = "tracing")]
            tracing::error!("Invalid configuration value for {}", key);
            Err(ConfigError::InvalidValue { key, value: raw })
        }
    }
}

fn parse_length(raw: &str) -> Option<usize> {
    raw.parse().ok()
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
