//! Password strength classifier - main scoring logic.

#[cfg(feature = "async")]
use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{SectionScore, character_variety_section, length_section};
use crate::strength::StrengthResult;

#[cfg(feature = "async")]
use crate::generator::DEBOUNCE;

/// Classifies a password into a strength tier.
///
/// Total over all inputs: the empty string yields
/// [`StrengthResult::NO_PASSWORD`], anything else is scored by every
/// section and mapped through the threshold table.
pub fn classify_strength(password: &str) -> StrengthResult {
    if password.is_empty() {
        return StrengthResult::NO_PASSWORD;
    }

    // Orchestrator: sum all sections
    let sections: [(&str, fn(&str) -> SectionScore); 2] = [
        ("length", length_section),
        ("variety", character_variety_section),
    ];

    let mut score: SectionScore = 0;
    for (_section_name, section_fn) in sections {
        let points = section_fn(password);

        #[cfg(feature = "tracing")]
        tracing::trace!(section = _section_name, points, "Section scored");

        score += points;
    }

    StrengthResult::from_score(score)
}

/// Async version that sends the classification via channel.
///
/// Waits [`DEBOUNCE`] first; if `token` is cancelled by then, nothing is
/// sent.
#[cfg(feature = "async")]
pub async fn classify_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthResult>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("classification is about to start...");

    tokio::time::sleep(DEBOUNCE).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("Classification request superseded");
        return;
    }

    let result = classify_strength(password.expose_secret());

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send strength classification: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;
    use crate::strength::StrengthLabel;

    #[tokio::test(start_paused = true)]
    async fn test_classify_strength_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        let pwd = SecretString::new("Ab1!Ab1!Ab1!".to_string().into());

        classify_strength_tx(&pwd, token, tx).await;

        let result = rx.recv().await.expect("Should receive classification");
        assert_eq!(result.label, StrengthLabel::VeryStrong);
    }

    #[tokio::test(start_paused = true)]
    async fn test_classify_strength_tx_cancelled() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        let pwd = SecretString::new("SomePassword123!".to_string().into());
        classify_strength_tx(&pwd, token, tx).await;

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_classify_strength_tx_empty_password() {
        let (tx, mut rx) = mpsc::channel(1);

        let pwd = SecretString::new(String::new().into());
        classify_strength_tx(&pwd, CancellationToken::new(), tx).await;

        let result = rx.recv().await.expect("Should receive classification");
        assert_eq!(result, StrengthResult::NO_PASSWORD);
    }
}
