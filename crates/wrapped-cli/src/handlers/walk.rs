use serde::Serialize;
use std::str::FromStr;
use std::time::Duration;
use tokio::sync::mpsc;
use wrapped_core::PageDirection;
use wrapped_domain::CardInstanceId;
use wrapped_web::carousel::SwipeDirection;
use wrapped_web::{
    run_session, CarouselConfig, ClickEvent, MemorySurface, NavigationInput, SequentialIdSource,
    Session, SessionEvent, SessionOptions, VirtualCarousel,
};

use crate::context::CliContext;
use crate::output;

/// One scripted interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum WalkStep {
    Navigate(NavigationInput),
    Page { slide: usize, direction: PageDirection },
    ReturnToStart,
    Wait(Duration),
}

impl FromStr for WalkStep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "down" => return Ok(WalkStep::Navigate(NavigationInput::Swipe(SwipeDirection::Up))),
            "up" => return Ok(WalkStep::Navigate(NavigationInput::Swipe(SwipeDirection::Down))),
            "top" => return Ok(WalkStep::ReturnToStart),
            _ => {}
        }

        if let Some(ms) = s.strip_prefix("wait:") {
            let ms: u64 = ms.parse().map_err(|_| format!("invalid wait: {s}"))?;
            return Ok(WalkStep::Wait(Duration::from_millis(ms)));
        }

        let (direction, slide) = s
            .split_once('@')
            .ok_or_else(|| format!("unknown step: {s}"))?;
        let direction = direction
            .parse::<PageDirection>()
            .map_err(|e| e.to_string())?;
        let slide = slide
            .parse::<usize>()
            .map_err(|_| format!("invalid slide index: {s}"))?;
        Ok(WalkStep::Page { slide, direction })
    }
}

#[derive(Serialize)]
struct CardPageReport {
    card_id: CardInstanceId,
    slide: usize,
    current_page: usize,
    total_pages: usize,
    indicator: String,
}

#[derive(Serialize)]
struct WalkReport {
    current_slide: usize,
    return_to_start_visible: bool,
    scroll_hint_visible: bool,
    events: usize,
    tasks_fired: usize,
    cards: Vec<CardPageReport>,
}

pub async fn handle(ctx: CliContext, steps: &[WalkStep]) -> anyhow::Result<()> {
    let options = SessionOptions::from_config(&ctx.config);
    let widget = VirtualCarousel::new(CarouselConfig::from_config(&ctx.config), ctx.deck.len());
    let mut session = Session::start(
        ctx.deck,
        MemorySurface::new(),
        widget,
        options,
        &mut SequentialIdSource::new(),
    )?;

    let script: Vec<Option<SessionEvent>> = steps
        .iter()
        .map(|step| to_event(&session, step))
        .collect();
    let waits: Vec<Option<Duration>> = steps
        .iter()
        .map(|step| match step {
            WalkStep::Wait(duration) => Some(*duration),
            _ => None,
        })
        .collect();
    // Let the last transition and the scroll hint land before stopping.
    let settle = options.fade_delay.max(options.scroll_hint_delay) + Duration::from_millis(10);

    let (tx, rx) = mpsc::unbounded_channel();
    let driver = tokio::spawn(async move {
        for (event, wait) in script.into_iter().zip(waits) {
            if let Some(wait) = wait {
                tokio::time::sleep(wait).await;
            }
            if let Some(event) = event {
                if tx.send(event).is_err() {
                    return;
                }
            }
        }
        tokio::time::sleep(settle).await;
        let _ = tx.send(SessionEvent::Shutdown);
    });

    let stats = run_session(&mut session, rx).await;
    driver.await?;

    let mut cards: Vec<CardPageReport> = session
        .render_states()
        .iter()
        .map(|state| CardPageReport {
            card_id: state.card_id.clone(),
            slide: state.slide_index,
            current_page: state.current_page(),
            total_pages: state.total_pages(),
            indicator: state.indicator(),
        })
        .collect();
    cards.sort_by_key(|card| card.slide);

    output::output_success(WalkReport {
        current_slide: session.current_slide_index(),
        return_to_start_visible: session.surface().return_to_start_visible(),
        scroll_hint_visible: session.surface().scroll_hint_visible(),
        events: stats.events,
        tasks_fired: stats.tasks_fired,
        cards,
    })
}

fn to_event(
    session: &Session<MemorySurface, VirtualCarousel>,
    step: &WalkStep,
) -> Option<SessionEvent> {
    match step {
        WalkStep::Navigate(input) => Some(SessionEvent::Navigate(*input)),
        WalkStep::ReturnToStart => Some(SessionEvent::Click(ClickEvent::return_to_start())),
        WalkStep::Page { slide, direction } => {
            let card_id = session
                .render_states()
                .for_slide(*slide)
                .map(|state| state.card_id.clone())
                .unwrap_or_else(|| {
                    tracing::warn!("Slide {} has no paginated card", slide);
                    CardInstanceId::new("slide", &slide.to_string())
                });
            Some(SessionEvent::Click(ClickEvent::pagination(&card_id, *direction)))
        }
        WalkStep::Wait(_) => None,
    }
}
