use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::theme::Theme;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub label: String,
    pub value: String,
}

/// Extra entry on a highlight card's podium.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodiumEntry {
    pub name: String,
    #[serde(default)]
    pub stat: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

impl PodiumEntry {
    /// `stat` if present, else `value`, else empty.
    pub fn display_stat(&self) -> &str {
        self.stat
            .as_deref()
            .or(self.value.as_deref())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntroCard {
    pub title: String,
    pub subtitle: String,
    pub theme: Theme,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedListCard {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub items: Vec<ListItem>,
    pub theme: Theme,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BigHighlightCard {
    pub title: String,
    pub name: String,
    pub stat: String,
    pub description: String,
    #[serde(rename = "extraPlayers", default)]
    pub extra_players: Option<Vec<PodiumEntry>>,
    pub theme: Theme,
}

impl BigHighlightCard {
    /// Podium entries, empty when the record has none.
    pub fn podium(&self) -> &[PodiumEntry] {
        self.extra_players.as_deref().unwrap_or(&[])
    }

    pub fn has_podium(&self) -> bool {
        !self.podium().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonCard {
    pub title: String,
    pub items: Vec<ListItem>,
    pub theme: Theme,
}

/// A record whose tag is not recognized, or whose fields did not match its tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnknownCard {
    pub type_tag: String,
    pub theme: Theme,
    /// Why a known tag failed to load. `None` for unrecognized tags.
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    Intro,
    RankedList,
    BigHighlight,
    Comparison,
    Unknown,
}

impl CardKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardKind::Intro => "intro",
            CardKind::RankedList => "ranked_list",
            CardKind::BigHighlight => "big_highlight",
            CardKind::Comparison => "comparison",
            CardKind::Unknown => "unknown",
        }
    }
}

/// One unit of content in the deck, rendered as exactly one slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Card {
    Intro(IntroCard),
    RankedList(RankedListCard),
    BigHighlight(BigHighlightCard),
    Comparison(ComparisonCard),
    Unknown(UnknownCard),
}

impl Card {
    /// Build a card from one raw record. Never fails: anything that does not
    /// load as a known variant becomes [`Card::Unknown`].
    pub fn from_value(value: Value) -> Self {
        let type_tag = value
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let parsed = match type_tag.as_str() {
            "intro" => parse_variant(&value, Card::Intro),
            "ranked_list" => parse_variant(&value, Card::RankedList),
            "big_highlight" => parse_variant(&value, Card::BigHighlight),
            "comparison" => parse_variant(&value, Card::Comparison),
            _ => {
                tracing::warn!("Unrecognized card type: {:?}", type_tag);
                return Card::Unknown(UnknownCard {
                    theme: theme_of(&value),
                    type_tag,
                    error: None,
                });
            }
        };

        parsed.unwrap_or_else(|e| {
            tracing::warn!("Malformed {} card: {}", type_tag, e);
            Card::Unknown(UnknownCard {
                theme: theme_of(&value),
                type_tag,
                error: Some(e.to_string()),
            })
        })
    }

    pub fn kind(&self) -> CardKind {
        match self {
            Card::Intro(_) => CardKind::Intro,
            Card::RankedList(_) => CardKind::RankedList,
            Card::BigHighlight(_) => CardKind::BigHighlight,
            Card::Comparison(_) => CardKind::Comparison,
            Card::Unknown(_) => CardKind::Unknown,
        }
    }

    pub fn theme(&self) -> &Theme {
        match self {
            Card::Intro(card) => &card.theme,
            Card::RankedList(card) => &card.theme,
            Card::BigHighlight(card) => &card.theme,
            Card::Comparison(card) => &card.theme,
            Card::Unknown(card) => &card.theme,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Card::Intro(card) => Some(&card.title),
            Card::RankedList(card) => Some(&card.title),
            Card::BigHighlight(card) => Some(&card.title),
            Card::Comparison(card) => Some(&card.title),
            Card::Unknown(_) => None,
        }
    }

    /// Items shown through pagination, if this kind paginates.
    pub fn paged_items(&self) -> Option<&[ListItem]> {
        match self {
            Card::RankedList(card) => Some(&card.items),
            Card::Comparison(card) => Some(&card.items),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Card::from_value(value))
    }
}

fn parse_variant<T, F>(value: &Value, wrap: F) -> Result<Card, serde_json::Error>
where
    T: DeserializeOwned,
    F: FnOnce(T) -> Card,
{
    T::deserialize(value).map(wrap)
}

fn theme_of(value: &Value) -> Theme {
    value
        .get("theme")
        .and_then(Value::as_str)
        .map(Theme::new)
        .unwrap_or_else(Theme::unknown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_intro_card() {
        let card = Card::from_value(json!({
            "type": "intro",
            "title": "2025",
            "subtitle": "Kali Teeri Wrapped",
            "theme": "theme-intro"
        }));
        match card {
            Card::Intro(intro) => {
                assert_eq!(intro.title, "2025");
                assert_eq!(intro.theme.class_name(), "theme-intro");
            }
            other => panic!("expected intro, got {:?}", other),
        }
    }

    #[test]
    fn test_ranked_list_optional_description() {
        let card = Card::from_value(json!({
            "type": "ranked_list",
            "title": "Boldest Bidders",
            "items": [{"label": "Reena", "value": "211.1 pts"}],
            "theme": "theme-2",
            "generatedBy": "ignored"
        }));
        let Card::RankedList(list) = card else {
            panic!("expected ranked list");
        };
        assert!(list.description.is_none());
        assert_eq!(list.items.len(), 1);
    }

    #[test]
    fn test_big_highlight_podium() {
        let card = Card::from_value(json!({
            "type": "big_highlight",
            "title": "Top Scorer",
            "name": "Samir",
            "stat": "4200 pts",
            "description": "Consistent.",
            "extraPlayers": [
                {"name": "Rajen", "stat": "4100 pts"},
                {"name": "Jesal", "value": "3900 pts"},
                {"name": "Mital"}
            ],
            "theme": "3"
        }));
        let Card::BigHighlight(highlight) = card else {
            panic!("expected big highlight");
        };
        assert!(highlight.has_podium());
        let stats: Vec<&str> = highlight.podium().iter().map(|p| p.display_stat()).collect();
        assert_eq!(stats, vec!["4100 pts", "3900 pts", ""]);
    }

    #[test]
    fn test_empty_extra_players_is_no_podium() {
        let card = Card::from_value(json!({
            "type": "big_highlight",
            "title": "t", "name": "n", "stat": "s", "description": "d",
            "extraPlayers": [],
            "theme": "theme-1"
        }));
        let Card::BigHighlight(highlight) = card else {
            panic!("expected big highlight");
        };
        assert!(!highlight.has_podium());
    }

    #[test]
    fn test_unrecognized_type_falls_back() {
        let card = Card::from_value(json!({"type": "timeline", "theme": "theme-4"}));
        assert_eq!(card.kind(), CardKind::Unknown);
        let Card::Unknown(unknown) = card else {
            panic!("expected unknown");
        };
        assert_eq!(unknown.type_tag, "timeline");
        assert_eq!(unknown.theme.class_name(), "theme-4");
        assert!(unknown.error.is_none());
    }

    #[test]
    fn test_known_type_with_missing_fields_falls_back() {
        let card = Card::from_value(json!({"type": "comparison", "title": "x"}));
        let Card::Unknown(unknown) = card else {
            panic!("expected unknown");
        };
        assert_eq!(unknown.type_tag, "comparison");
        assert_eq!(unknown.theme, Theme::unknown());
        assert!(unknown.error.is_some());
    }

    #[test]
    fn test_paged_items_only_for_list_kinds() {
        let list = Card::from_value(json!({
            "type": "comparison",
            "title": "Partnerships",
            "items": [{"label": "Rajen", "value": "→ Paresh"}],
            "theme": "theme-5"
        }));
        assert_eq!(list.paged_items().map(|items| items.len()), Some(1));

        let intro = Card::from_value(json!({
            "type": "intro", "title": "a", "subtitle": "b", "theme": "c"
        }));
        assert!(intro.paged_items().is_none());
    }
}
