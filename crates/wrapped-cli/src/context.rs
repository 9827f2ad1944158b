use std::path::Path;
use wrapped_core::{WrappedConfig, WrappedError, WrappedResult};
use wrapped_domain::Deck;

pub struct CliContext {
    pub config: WrappedConfig,
    pub deck: Deck,
}

impl CliContext {
    /// Load config and deck. A missing deck is fatal: nothing is rendered.
    pub fn load(deck_path: Option<&Path>, config_path: Option<&Path>) -> WrappedResult<Self> {
        let config = match config_path {
            Some(path) => WrappedConfig::load_from(path),
            None => WrappedConfig::load(),
        };

        let deck_path = deck_path.ok_or_else(|| {
            WrappedError::MissingInput("no deck given (pass DECK or set WRAPPED_DECK)".to_string())
        })?;
        let deck = Deck::load(deck_path)?;
        tracing::info!("Loaded {} cards from {}", deck.len(), deck_path.display());

        Ok(Self { config, deck })
    }
}
