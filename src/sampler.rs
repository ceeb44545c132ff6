//! Secure sampler - draws password characters uniformly from a pool.
//!
//! Each character consumes one 32-bit word from a cryptographically secure
//! source. A word `r` selects `pool[r % m]`, except that words at or above
//! the largest multiple of `m` that fits in 2^32 are discarded and redrawn,
//! which removes the modulo bias a bare remainder would introduce.

use rand::{CryptoRng, RngCore};

use crate::generator::GenerationError;
use crate::pool::CharacterPool;

const WORD_BYTES: usize = 4;
const DRAW_SPACE: u64 = 1 << 32;

/// Samples `length` characters from `pool` using `rng`.
///
/// A `length` of zero yields an empty string without touching `rng`.
///
/// # Errors
///
/// Returns [`GenerationError::EntropySource`] as soon as the source fails.
/// Failed draws are never retried and never replaced by a weaker source.
pub fn sample_password<R>(
    pool: &CharacterPool,
    length: usize,
    rng: &mut R,
) -> Result<String, GenerationError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    if length == 0 {
        return Ok(String::new());
    }

    let alphabet = pool.as_bytes();
    let modulus = alphabet.len() as u64;
    let zone = DRAW_SPACE - DRAW_SPACE % modulus;

    let mut password = String::with_capacity(length);
    let mut buf = vec![0u8; length * WORD_BYTES];
    #[cfg(feature = "tracing")]
    let mut rejected = 0usize;

    // Pool is ASCII, so byte length equals character count.
    while password.len() < length {
        let wanted = length - password.len();
        let draws = &mut buf[..wanted * WORD_BYTES];

        if let Err(e) = rng.try_fill_bytes(draws) {
            #[cfg(feature = "tracing")]
            tracing::error!("Secure random source failed: {}", e);
            return Err(GenerationError::EntropySource(e));
        }

        for word in draws.chunks_exact(WORD_BYTES) {
            let r = u32::from_le_bytes([word[0], word[1], word[2], word[3]]) as u64;
            if r >= zone {
                #[cfg(feature = "tracing")]
                {
                    rejected += 1;
                }
                continue;
            }
            password.push(alphabet[(r % modulus) as usize] as char);
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(length, pool_size = modulus, rejected, "Sampling complete");

    Ok(password)
}
