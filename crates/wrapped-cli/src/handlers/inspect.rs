use serde::Serialize;
use wrapped_domain::{CardKind, DeckSummary};
use wrapped_web::{render_deck, SequentialIdSource};

use crate::context::CliContext;
use crate::output;

#[derive(Serialize)]
struct SlideReport {
    index: usize,
    kind: CardKind,
    theme: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_pages: Option<usize>,
}

#[derive(Serialize)]
struct InspectReport {
    summary: DeckSummary,
    slides: Vec<SlideReport>,
}

pub fn handle(ctx: &CliContext) -> anyhow::Result<()> {
    let slides = render_deck(&ctx.deck, &mut SequentialIdSource::new())?;
    let slides = slides
        .into_iter()
        .map(|slide| SlideReport {
            index: slide.index,
            kind: slide.kind,
            theme: slide.theme_class,
            total_pages: slide.state.map(|state| state.total_pages()),
        })
        .collect();

    output::output_success(InspectReport {
        summary: ctx.deck.summary(),
        slides,
    })
}
