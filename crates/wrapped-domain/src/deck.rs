use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use wrapped_core::{WrappedError, WrappedResult};

use crate::card::{Card, CardKind};

/// The ordered, immutable sequence of cards shown in one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeckSummary {
    pub slide_count: usize,
    pub intro: usize,
    pub ranked_list: usize,
    pub big_highlight: usize,
    pub comparison: usize,
    pub unknown: usize,
    pub unknown_tags: Vec<String>,
}

impl Deck {
    pub fn new(cards: Vec<Card>) -> WrappedResult<Self> {
        if cards.is_empty() {
            return Err(WrappedError::MissingInput(
                "deck contains no cards".to_string(),
            ));
        }
        Ok(Self { cards })
    }

    /// Accepts either a bare array of card records or an object with a
    /// `cards` array.
    pub fn from_json_str(json: &str) -> WrappedResult<Self> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| WrappedError::Serialization(e.to_string()))?;
        Self::from_value(value)
    }

    pub fn from_json_slice(bytes: &[u8]) -> WrappedResult<Self> {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|e| WrappedError::Serialization(e.to_string()))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> WrappedResult<Self> {
        let records = match value {
            Value::Array(records) => records,
            Value::Object(mut map) => match map.remove("cards") {
                Some(Value::Array(records)) => records,
                _ => {
                    return Err(WrappedError::Serialization(
                        "expected a `cards` array".to_string(),
                    ))
                }
            },
            _ => {
                return Err(WrappedError::Serialization(
                    "deck must be an array of cards".to_string(),
                ))
            }
        };

        let cards: Vec<Card> = records.into_iter().map(Card::from_value).collect();
        tracing::debug!("Loaded deck with {} cards", cards.len());
        Self::new(cards)
    }

    pub fn load(path: &Path) -> WrappedResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                WrappedError::MissingInput(format!("deck file not found: {}", path.display()))
            }
            _ => WrappedError::Io(e),
        })?;
        Self::from_json_slice(&bytes)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false for a constructed deck.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.cards.len().saturating_sub(1)
    }

    pub fn summary(&self) -> DeckSummary {
        let mut summary = DeckSummary {
            slide_count: self.cards.len(),
            ..DeckSummary::default()
        };
        for card in &self.cards {
            match card.kind() {
                CardKind::Intro => summary.intro += 1,
                CardKind::RankedList => summary.ranked_list += 1,
                CardKind::BigHighlight => summary.big_highlight += 1,
                CardKind::Comparison => summary.comparison += 1,
                CardKind::Unknown => summary.unknown += 1,
            }
            if let Card::Unknown(unknown) = card {
                summary.unknown_tags.push(unknown.type_tag.clone());
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DECK: &str = r#"[
        {"type": "intro", "title": "2025", "subtitle": "Wrapped", "theme": "theme-intro"},
        {"type": "mystery", "theme": "theme-1"},
        {"type": "comparison", "title": "Pairs", "items": [], "theme": "theme-5"}
    ]"#;

    #[test]
    fn test_bare_array() {
        let deck = Deck::from_json_str(DECK).unwrap();
        assert_eq!(deck.len(), 3);
        assert_eq!(deck.last_index(), 2);
    }

    #[test]
    fn test_wrapped_object() {
        let json = format!(r#"{{"year": 2025, "cards": {}}}"#, DECK);
        let deck = Deck::from_json_str(&json).unwrap();
        assert_eq!(deck.len(), 3);
    }

    #[test]
    fn test_empty_deck_is_missing_input() {
        assert!(matches!(
            Deck::from_json_str("[]"),
            Err(WrappedError::MissingInput(_))
        ));
    }

    #[test]
    fn test_non_array_is_rejected() {
        assert!(matches!(
            Deck::from_json_str("42"),
            Err(WrappedError::Serialization(_))
        ));
        assert!(matches!(
            Deck::from_json_str(r#"{"slides": []}"#),
            Err(WrappedError::Serialization(_))
        ));
        assert!(matches!(
            Deck::from_json_str("not json"),
            Err(WrappedError::Serialization(_))
        ));
    }

    #[test]
    fn test_summary_counts_kinds() {
        let deck = Deck::from_json_str(DECK).unwrap();
        let summary = deck.summary();
        assert_eq!(summary.slide_count, 3);
        assert_eq!(summary.intro, 1);
        assert_eq!(summary.comparison, 1);
        assert_eq!(summary.unknown, 1);
        assert_eq!(summary.unknown_tags, vec!["mystery".to_string()]);
    }

    #[test]
    fn test_load_missing_file() {
        let result = Deck::load(Path::new("/nonexistent/deck.json"));
        assert!(matches!(result, Err(WrappedError::MissingInput(_))));
    }
}
