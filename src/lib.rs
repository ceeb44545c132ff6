//! Password generation and strength classification library
//!
//! This library generates random passwords from selectable character
//! classes using the operating system's secure random source, and
//! classifies any password into a coarse strength tier.
//!
//! # Features
//!
//! - `async` (default): Enables channel delivery with debounce and cancellation
//! - `tracing`: Enables logging via tracing crate (passwords are never logged)
//!
//! # Environment Variables
//!
//! Read by [`GenerationOptions::from_env`]:
//!
//! - `PWD_GEN_LENGTH`: password length (default: 16)
//! - `PWD_GEN_UPPERCASE`, `PWD_GEN_LOWERCASE`, `PWD_GEN_NUMBERS`,
//!   `PWD_GEN_SYMBOLS`: enable or disable a character class (default: enabled)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_gen::{GenerationOptions, StrengthLabel, classify_strength, generate};
//!
//! let options = GenerationOptions::default().with_length(20).with_symbols(false);
//! let password = generate(&options).expect("Failed to generate password");
//!
//! let strength = classify_strength(&password);
//! println!("Score: {}", strength.score);
//! println!("Strength: {}", strength.label);
//! assert_ne!(strength.label, StrengthLabel::NoPassword);
//! ```

// Internal modules
mod evaluator;
mod generator;
mod options;
mod pool;
mod sampler;
mod sections;
mod strength;

// Public API
pub use evaluator::classify_strength;
pub use generator::{GenerationError, generate, generate_with_rng};
pub use options::{
    ConfigError, DEFAULT_LENGTH, ENV_LENGTH, ENV_LOWERCASE, ENV_NUMBERS, ENV_SYMBOLS,
    ENV_UPPERCASE, GenerationOptions, RECOMMENDED_LENGTH,
};
pub use pool::{CharacterClass, CharacterPool};
pub use sampler::sample_password;
pub use strength::{MAX_SCORE, StrengthLabel, StrengthResult};

#[cfg(feature = "async")]
pub use evaluator::classify_strength_tx;

#[cfg(feature = "async")]
pub use generator::{DEBOUNCE, generate_tx};
