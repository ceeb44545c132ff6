//! Password generator - entry point tying the pool builder to the sampler.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use thiserror::Error;

#[cfg(feature = "async")]
use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::options::GenerationOptions;
use crate::pool::CharacterPool;
use crate::sampler::sample_password;

/// Delay before an async request is served, so that rapid option changes
/// collapse into the last one.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

#[derive(Error, Debug)]
pub enum GenerationError {
    /// No character class is enabled. User-correctable.
    #[error("Please select at least one character type")]
    EmptyPool,
    /// The platform secure random source failed. Not retried.
    #[error("Secure random source unavailable: {0}")]
    EntropySource(#[source] rand::Error),
}

/// Generates a password for `options` from the operating system's secure
/// random source.
///
/// # Errors
///
/// - [`GenerationError::EmptyPool`] if no character class is enabled
/// - [`GenerationError::EntropySource`] if the OS source fails
pub fn generate(options: &GenerationOptions) -> Result<String, GenerationError> {
    generate_with_rng(options, &mut OsRng)
}

/// Same as [`generate`], drawing from the supplied secure source.
pub fn generate_with_rng<R>(
    options: &GenerationOptions,
    rng: &mut R,
) -> Result<String, GenerationError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let pool = CharacterPool::from_options(options)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        length = options.length,
        pool_size = pool.len(),
        recommended = options.is_recommended_length(),
        "Generating password"
    );

    sample_password(&pool, options.length, rng)
}

/// Async version that delivers the generated password via channel.
///
/// Waits [`DEBOUNCE`] first; if `token` is cancelled by then, nothing is
/// sent.
#[cfg(feature = "async")]
pub async fn generate_tx(
    options: GenerationOptions,
    token: CancellationToken,
    tx: mpsc::Sender<Result<SecretString, GenerationError>>,
) {
    tokio::time::sleep(DEBOUNCE).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("Generation request superseded");
        return;
    }

    let result = generate(&options).map(|password| SecretString::new(password.into()));

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send generated password: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::CharacterClass;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn all_flag_combinations() -> impl Iterator<Item = GenerationOptions> {
        (1u8..16).map(|bits| {
            GenerationOptions::default()
                .with_uppercase(bits & 1 != 0)
                .with_lowercase(bits & 2 != 0)
                .with_numbers(bits & 4 != 0)
                .with_symbols(bits & 8 != 0)
        })
    }

    fn expected_pool(options: &GenerationOptions) -> String {
        options.enabled_classes().map(CharacterClass::alphabet).collect()
    }

    #[test]
    fn test_generate_length_and_membership_for_every_combination() {
        for options in all_flag_combinations() {
            let pool = expected_pool(&options);
            for length in [1, 8, 16, 32] {
                let password = generate(&options.with_length(length)).unwrap();
                assert_eq!(password.chars().count(), length);
                assert!(
                    password.chars().all(|c| pool.contains(c)),
                    "{:?} produced a character outside its pool",
                    options
                );
            }
        }
    }

    #[test]
    fn test_generate_all_disabled_fails() {
        let options = GenerationOptions::default()
            .with_uppercase(false)
            .with_lowercase(false)
            .with_numbers(false)
            .with_symbols(false);
        let result = generate(&options);
        assert!(matches!(result, Err(GenerationError::EmptyPool)));
    }

    #[test]
    fn test_generate_all_disabled_fails_even_for_zero_length() {
        let options = GenerationOptions {
            length: 0,
            use_uppercase: false,
            use_lowercase: false,
            use_numbers: false,
            use_symbols: false,
        };
        assert!(matches!(generate(&options), Err(GenerationError::EmptyPool)));
    }

    #[test]
    fn test_generate_zero_length_is_empty() {
        let password = generate(&GenerationOptions::default().with_length(0)).unwrap();
        assert_eq!(password, "");
    }

    #[test]
    fn test_generate_accepts_lengths_outside_recommended_range() {
        let short = generate(&GenerationOptions::default().with_length(3)).unwrap();
        let long = generate(&GenerationOptions::default().with_length(128)).unwrap();
        assert_eq!(short.len(), 3);
        assert_eq!(long.len(), 128);
    }

    #[test]
    fn test_generate_with_seeded_rng_is_reproducible() {
        let options = GenerationOptions::default();
        let a = generate_with_rng(&options, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate_with_rng(&options, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_uniform_over_full_pool() {
        const PER_CHAR: usize = 2_000;
        let options = GenerationOptions::default();
        let pool = expected_pool(&options);
        let password = generate(&options.with_length(pool.len() * PER_CHAR)).unwrap();

        for c in pool.chars() {
            let count = password.chars().filter(|&p| p == c).count();
            assert!(
                count.abs_diff(PER_CHAR) < 300,
                "{:?} drawn {} times, expected about {}",
                c,
                count,
                PER_CHAR
            );
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GenerationError::EmptyPool.to_string(),
            "Please select at least one character type"
        );
        let err = GenerationError::EntropySource(rand::Error::new("no device"));
        assert!(err.to_string().starts_with("Secure random source unavailable"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
