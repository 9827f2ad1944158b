pub mod card;
pub mod deck;
pub mod render_state;
pub mod theme;

pub use card::{
    BigHighlightCard, Card, CardKind, ComparisonCard, IntroCard, ListItem, PodiumEntry,
    RankedListCard, UnknownCard,
};
pub use deck::{Deck, DeckSummary};
pub use render_state::{CardInstanceId, RenderState, RenderStateMap};
pub use theme::Theme;
