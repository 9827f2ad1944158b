//! Card templates. One markup fragment per card, dispatched on the variant.

use wrapped_core::{PageLayout, WrappedResult};
use wrapped_domain::{
    BigHighlightCard, Card, CardInstanceId, CardKind, ComparisonCard, Deck, IntroCard,
    ListItem, RankedListCard, RenderState, UnknownCard,
};

use crate::ids::IdSource;
use crate::markup::escape_html;
use crate::paginate::{paginate, pagination_controls};

/// Items per page on ranked-list and comparison cards.
pub const ITEMS_PER_PAGE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCard {
    pub markup: String,
    /// Identifier and page layout of a paginated card.
    pub pagination: Option<(CardInstanceId, PageLayout)>,
}

impl RenderedCard {
    fn plain(markup: String) -> Self {
        Self {
            markup,
            pagination: None,
        }
    }
}

/// One card wrapped in its slide element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSlide {
    pub index: usize,
    pub kind: CardKind,
    pub theme_class: String,
    pub markup: String,
    pub state: Option<RenderState>,
}

pub fn render_card(card: &Card, ids: &mut dyn IdSource) -> WrappedResult<RenderedCard> {
    match card {
        Card::Intro(card) => Ok(RenderedCard::plain(render_intro(card))),
        Card::RankedList(card) => render_ranked_list(card, ids),
        Card::BigHighlight(card) => Ok(RenderedCard::plain(render_big_highlight(card))),
        Card::Comparison(card) => render_comparison(card, ids),
        Card::Unknown(card) => Ok(RenderedCard::plain(render_unknown(card))),
    }
}

pub fn render_slide(
    card: &Card,
    index: usize,
    ids: &mut dyn IdSource,
) -> WrappedResult<RenderedSlide> {
    let rendered = render_card(card, ids)?;
    let theme_class = card.theme().class_name();
    let markup = format!(
        r#"<div class="swiper-slide {theme_class}" data-slide-index="{index}">{}</div>"#,
        rendered.markup
    );
    let state = rendered
        .pagination
        .map(|(card_id, layout)| RenderState::new(card_id, layout, index));

    Ok(RenderedSlide {
        index,
        kind: card.kind(),
        theme_class,
        markup,
        state,
    })
}

/// Render every card of the deck, in deck order.
pub fn render_deck(deck: &Deck, ids: &mut dyn IdSource) -> WrappedResult<Vec<RenderedSlide>> {
    deck.cards()
        .iter()
        .enumerate()
        .map(|(index, card)| render_slide(card, index, ids))
        .collect()
}

fn render_intro(card: &IntroCard) -> String {
    format!(
        concat!(
            r#"<div class="card card-intro">"#,
            r#"<div class="card-suit">♠</div>"#,
            r#"<div class="title">{}</div>"#,
            r#"<div class="subtitle">{}</div>"#,
            r#"</div>"#
        ),
        escape_html(&card.title),
        escape_html(&card.subtitle)
    )
}

fn render_ranked_list(
    card: &RankedListCard,
    ids: &mut dyn IdSource,
) -> WrappedResult<RenderedCard> {
    let card_id = ids.next_id("ranked");

    let paged = paginate(&card.items, ITEMS_PER_PAGE, |item: &ListItem, global, _| {
        let rank = global + 1;
        format!(
            concat!(
                r#"<div class="ranked-item" data-rank="{rank}">"#,
                r#"<span class="rank">#{rank}</span>"#,
                r#"<span class="label">{label}</span>"#,
                r#"<span class="value">{value}</span>"#,
                r#"</div>"#
            ),
            rank = rank,
            label = escape_html(&item.label),
            value = escape_html(&item.value)
        )
    })?;

    let description = card
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .map(|d| format!(r#"<div class="description">{}</div>"#, escape_html(d)))
        .unwrap_or_default();

    let markup = format!(
        concat!(
            r#"<div class="card card-ranked-list" data-card-id="{id}">"#,
            r#"<div class="title">{title}</div>"#,
            "{description}",
            r#"<div class="items-viewport ranked-items-viewport">{pages}</div>"#,
            "{controls}",
            r#"</div>"#
        ),
        id = card_id,
        title = escape_html(&card.title),
        description = description,
        pages = paged.pages_html,
        controls = pagination_controls(&card_id, paged.layout.total_pages())
    );

    Ok(RenderedCard {
        markup,
        pagination: Some((card_id, paged.layout)),
    })
}

fn render_big_highlight(card: &BigHighlightCard) -> String {
    let podium = if card.has_podium() {
        let players: String = card
            .podium()
            .iter()
            .enumerate()
            .map(|(i, player)| {
                // The headline subject holds rank 1.
                let rank = i + 2;
                format!(
                    concat!(
                        r#"<div class="podium-player" data-rank="{rank}">"#,
                        r#"<div class="podium-rank">#{rank}</div>"#,
                        r#"<div class="podium-name">{name}</div>"#,
                        r#"<div class="podium-stat">{stat}</div>"#,
                        r#"</div>"#
                    ),
                    rank = rank,
                    name = escape_html(&player.name),
                    stat = escape_html(player.display_stat())
                )
            })
            .collect();
        format!(r#"<div class="podium-players">{players}</div>"#)
    } else {
        String::new()
    };

    let class = if card.has_podium() {
        "card card-big-highlight has-podium"
    } else {
        "card card-big-highlight"
    };

    format!(
        concat!(
            r#"<div class="{class}">"#,
            r#"<div class="title">{title}</div>"#,
            r#"<div class="name">{name}</div>"#,
            r#"<div class="stat">{stat}</div>"#,
            "{podium}",
            r#"<div class="description">{description}</div>"#,
            r#"</div>"#
        ),
        class = class,
        title = escape_html(&card.title),
        name = escape_html(&card.name),
        stat = escape_html(&card.stat),
        podium = podium,
        description = escape_html(&card.description)
    )
}

fn render_comparison(
    card: &ComparisonCard,
    ids: &mut dyn IdSource,
) -> WrappedResult<RenderedCard> {
    let card_id = ids.next_id("comparison");

    let paged = paginate(&card.items, ITEMS_PER_PAGE, |item: &ListItem, _, _| {
        format!(
            concat!(
                r#"<div class="comparison-item">"#,
                r#"<div class="label">{}</div>"#,
                r#"<div class="value">{}</div>"#,
                r#"</div>"#
            ),
            escape_html(&item.label),
            escape_html(&item.value)
        )
    })?;

    let markup = format!(
        concat!(
            r#"<div class="card card-comparison" data-card-id="{id}">"#,
            r#"<div class="title">{title}</div>"#,
            r#"<div class="items-viewport comparison-items-viewport">{pages}</div>"#,
            "{controls}",
            r#"</div>"#
        ),
        id = card_id,
        title = escape_html(&card.title),
        pages = paged.pages_html,
        controls = pagination_controls(&card_id, paged.layout.total_pages())
    );

    Ok(RenderedCard {
        markup,
        pagination: Some((card_id, paged.layout)),
    })
}

fn render_unknown(card: &UnknownCard) -> String {
    match card.error {
        None => format!(
            r#"<div class="card card-unknown">Unknown card type: {}</div>"#,
            escape_html(&card.type_tag)
        ),
        Some(_) => format!(
            r#"<div class="card card-unknown">Malformed card: {}</div>"#,
            escape_html(&card.type_tag)
        ),
    }
}
