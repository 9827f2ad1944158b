//! Session context: the deck, its render states, the carousel and the
//! deferred work of one running slideshow.

use std::collections::HashMap;
use std::time::Duration;

use wrapped_core::{PageDirection, TaskId, TimerQueue, WrappedConfig, WrappedError, WrappedResult};
use wrapped_domain::{CardInstanceId, Deck, RenderState, RenderStateMap};

use crate::carousel::{CarouselAdapter, CarouselWidget, NavigationInput};
use crate::ids::IdSource;
use crate::renderer::{render_deck, RenderedSlide};
use crate::surface::{PageVisibility, ViewSurface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Settle delay between fading out a page and swapping in the next.
    pub fade_delay: Duration,
    /// Delay before the scroll hint is attached to the first slide.
    pub scroll_hint_delay: Duration,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self::from_config(&WrappedConfig::default())
    }
}

impl SessionOptions {
    pub fn from_config(config: &WrappedConfig) -> Self {
        Self {
            fade_delay: config.effective_fade_delay(),
            scroll_hint_delay: config.effective_scroll_hint_delay(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Deferred {
    SwapPage {
        card_id: CardInstanceId,
        direction: PageDirection,
        from: usize,
        to: usize,
    },
    AttachScrollHint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    UnknownCard,
    InFlight,
    OutOfRange,
    MissingPage,
    TornDown,
}

/// Result of asking a card to change page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    /// Fade-out started; the swap happens once the settle delay elapses.
    Accepted { from: usize, to: usize },
    Ignored(IgnoreReason),
}

pub struct Session<S, W> {
    deck: Deck,
    slides: Vec<RenderedSlide>,
    states: RenderStateMap,
    carousel: CarouselAdapter<W>,
    surface: S,
    timers: TimerQueue<Deferred>,
    in_flight: HashMap<CardInstanceId, TaskId>,
    options: SessionOptions,
    torn_down: bool,
}

impl<S: ViewSurface, W: CarouselWidget> Session<S, W> {
    /// Render the deck into `surface`, hand the slides to the carousel and
    /// schedule the scroll hint.
    pub fn start(
        deck: Deck,
        mut surface: S,
        widget: W,
        options: SessionOptions,
        ids: &mut dyn IdSource,
    ) -> WrappedResult<Self> {
        if widget.slide_count() != deck.len() {
            return Err(WrappedError::Validation(format!(
                "carousel has {} slides but the deck has {} cards",
                widget.slide_count(),
                deck.len()
            )));
        }

        let slides = render_deck(&deck, ids)?;
        let mut states = RenderStateMap::new();
        for slide in &slides {
            surface.mount_slide(slide);
            if let Some(state) = &slide.state {
                states.insert(state.clone());
            }
        }
        tracing::info!(
            "Rendered {} slides ({} paginated)",
            slides.len(),
            states.len()
        );

        let mut carousel = CarouselAdapter::new(widget);
        carousel.init(&mut surface);

        let mut timers = TimerQueue::new();
        timers.schedule(options.scroll_hint_delay, Deferred::AttachScrollHint);

        Ok(Self {
            deck,
            slides,
            states,
            carousel,
            surface,
            timers,
            in_flight: HashMap::new(),
            options,
            torn_down: false,
        })
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn slides(&self) -> &[RenderedSlide] {
        &self.slides
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn carousel(&self) -> &CarouselAdapter<W> {
        &self.carousel
    }

    pub fn options(&self) -> SessionOptions {
        self.options
    }

    pub fn render_state(&self, card_id: &CardInstanceId) -> Option<&RenderState> {
        self.states.get(card_id)
    }

    pub fn render_states(&self) -> &RenderStateMap {
        &self.states
    }

    pub fn current_slide_index(&self) -> usize {
        self.carousel.current_index()
    }

    pub fn is_transitioning(&self, card_id: &CardInstanceId) -> bool {
        self.in_flight.contains_key(card_id)
    }

    /// Virtual time elapsed since the session started.
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    pub fn time_until_next_task(&self) -> Option<Duration> {
        self.timers.time_until_next()
    }

    pub fn pending_tasks(&self) -> usize {
        self.timers.pending()
    }

    /// Start a page transition on a paginated card.
    pub fn request_page(
        &mut self,
        card_id: &CardInstanceId,
        direction: PageDirection,
    ) -> PageRequest {
        if self.torn_down {
            return PageRequest::Ignored(IgnoreReason::TornDown);
        }
        let Some(state) = self.states.get(card_id) else {
            tracing::debug!("Page request for unknown card {}", card_id);
            return PageRequest::Ignored(IgnoreReason::UnknownCard);
        };
        if self.in_flight.contains_key(card_id) {
            return PageRequest::Ignored(IgnoreReason::InFlight);
        }
        let from = state.current_page();
        let Some(to) = state.target(direction) else {
            return PageRequest::Ignored(IgnoreReason::OutOfRange);
        };
        if !self.surface.has_page(card_id, from) || !self.surface.has_page(card_id, to) {
            tracing::debug!("Card {} is missing page {} or {}", card_id, from, to);
            return PageRequest::Ignored(IgnoreReason::MissingPage);
        }

        self.surface
            .set_page_visibility(card_id, from, PageVisibility::FadingOut);
        let task = self.timers.schedule(
            self.options.fade_delay,
            Deferred::SwapPage {
                card_id: card_id.clone(),
                direction,
                from,
                to,
            },
        );
        self.in_flight.insert(card_id.clone(), task);
        tracing::debug!("Card {} paging {} -> {}", card_id, from, to);

        PageRequest::Accepted { from, to }
    }

    /// Advance the session clock, running every deferred task that comes due,
    /// in order. Returns how many tasks ran.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let target = self.timers.now() + elapsed;
        let mut fired = 0;

        while let Some(deadline) = self.timers.next_deadline().filter(|d| *d <= target) {
            for task in self.timers.advance_to(deadline) {
                self.run_task(task);
                fired += 1;
            }
        }
        self.timers.advance_to(target);
        fired
    }

    /// Run all pending tasks by advancing to the last deadline.
    pub fn settle(&mut self) -> usize {
        let mut fired = 0;
        while let Some(wait) = self.timers.time_until_next() {
            fired += self.advance(wait);
        }
        fired
    }

    pub fn navigate(&mut self, input: NavigationInput) -> Option<usize> {
        if self.torn_down {
            return None;
        }
        self.carousel.navigate(input, &mut self.surface)
    }

    /// Slide-change notification from a widget that reports asynchronously.
    pub fn on_slide_change(&mut self, index: usize) {
        if self.torn_down {
            return;
        }
        self.carousel.on_slide_change(index, &mut self.surface);
    }

    pub fn return_to_start(&mut self) -> Option<usize> {
        if self.torn_down {
            return None;
        }
        self.carousel.jump_to_first(&mut self.surface)
    }

    /// Cancel all deferred work. The session ignores input afterwards.
    pub fn teardown(&mut self) {
        let cancelled = self.timers.cancel_all();
        self.in_flight.clear();
        self.torn_down = true;
        tracing::debug!("Session torn down, {} pending tasks cancelled", cancelled);
    }

    fn run_task(&mut self, task: Deferred) {
        match task {
            Deferred::SwapPage {
                card_id,
                direction,
                from,
                to,
            } => self.swap_page(&card_id, direction, from, to),
            Deferred::AttachScrollHint => {
                if self.carousel.scroll_hint_suppressed() {
                    return;
                }
                self.surface.attach_scroll_hint();
            }
        }
    }

    fn swap_page(
        &mut self,
        card_id: &CardInstanceId,
        direction: PageDirection,
        from: usize,
        to: usize,
    ) {
        self.in_flight.remove(card_id);
        let Some(state) = self.states.get_mut(card_id) else {
            return;
        };
        if state.step(direction) != Some(to) {
            tracing::warn!("Card {} left page {} before the swap", card_id, from);
            return;
        }

        self.surface
            .set_page_visibility(card_id, from, PageVisibility::Hidden);
        self.surface
            .set_page_visibility(card_id, to, PageVisibility::FadingIn);
        let info = state.page_info();
        self.surface
            .set_control_visible(card_id, PageDirection::Prev, info.has_prev);
        self.surface
            .set_control_visible(card_id, PageDirection::Next, info.has_next);
        self.surface.set_indicator(card_id, &info.indicator());

        self.carousel.refresh_layout();
    }
}
