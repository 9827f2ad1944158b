//! The visual side of a session: where slides are mounted and where page,
//! control and affordance visibility changes land.

use std::collections::HashMap;
use wrapped_core::PageDirection;
use wrapped_domain::CardInstanceId;

use crate::renderer::RenderedSlide;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageVisibility {
    Hidden,
    Visible,
    /// Still displayed, on its way out.
    FadingOut,
    /// Displayed and active, fading in.
    FadingIn,
}

impl PageVisibility {
    pub fn is_displayed(&self) -> bool {
        !matches!(self, PageVisibility::Hidden)
    }
}

pub trait ViewSurface {
    /// Append a rendered slide to the container, in deck order.
    fn mount_slide(&mut self, slide: &RenderedSlide);

    /// Whether the page container exists for this card.
    fn has_page(&self, card: &CardInstanceId, page: usize) -> bool;

    fn set_page_visibility(
        &mut self,
        card: &CardInstanceId,
        page: usize,
        visibility: PageVisibility,
    );

    fn set_control_visible(
        &mut self,
        card: &CardInstanceId,
        direction: PageDirection,
        visible: bool,
    );

    fn set_indicator(&mut self, card: &CardInstanceId, text: &str);

    /// Attach the one-time scroll hint to the first slide.
    fn attach_scroll_hint(&mut self);

    fn suppress_scroll_hint(&mut self);

    fn set_return_to_start_visible(&mut self, visible: bool);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlState {
    pub prev_visible: bool,
    pub next_visible: bool,
    pub indicator: String,
}

/// In-memory surface mirroring what the generated markup would display.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    slides: Vec<RenderedSlide>,
    pages: HashMap<CardInstanceId, Vec<PageVisibility>>,
    controls: HashMap<CardInstanceId, ControlState>,
    scroll_hint_attached: bool,
    scroll_hint_suppressed: bool,
    return_to_start_visible: bool,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slides(&self) -> &[RenderedSlide] {
        &self.slides
    }

    pub fn pages(&self, card: &CardInstanceId) -> Option<&[PageVisibility]> {
        self.pages.get(card).map(Vec::as_slice)
    }

    /// Pages currently on screen for a card.
    pub fn displayed_pages(&self, card: &CardInstanceId) -> Vec<usize> {
        self.pages
            .get(card)
            .map(|pages| {
                pages
                    .iter()
                    .enumerate()
                    .filter(|(_, v)| v.is_displayed())
                    .map(|(i, _)| i)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn controls(&self, card: &CardInstanceId) -> Option<&ControlState> {
        self.controls.get(card)
    }

    pub fn scroll_hint_visible(&self) -> bool {
        self.scroll_hint_attached && !self.scroll_hint_suppressed
    }

    pub fn scroll_hint_attached(&self) -> bool {
        self.scroll_hint_attached
    }

    pub fn return_to_start_visible(&self) -> bool {
        self.return_to_start_visible
    }
}

impl ViewSurface for MemorySurface {
    fn mount_slide(&mut self, slide: &RenderedSlide) {
        if let Some(state) = &slide.state {
            let pages = (0..state.total_pages())
                .map(|page| {
                    if page == 0 {
                        PageVisibility::Visible
                    } else {
                        PageVisibility::Hidden
                    }
                })
                .collect();
            self.pages.insert(state.card_id.clone(), pages);

            if state.has_controls() {
                self.controls.insert(
                    state.card_id.clone(),
                    ControlState {
                        prev_visible: false,
                        next_visible: true,
                        indicator: state.indicator(),
                    },
                );
            }
        }
        self.slides.push(slide.clone());
    }

    fn has_page(&self, card: &CardInstanceId, page: usize) -> bool {
        self.pages
            .get(card)
            .is_some_and(|pages| page < pages.len())
    }

    fn set_page_visibility(
        &mut self,
        card: &CardInstanceId,
        page: usize,
        visibility: PageVisibility,
    ) {
        if let Some(slot) = self.pages.get_mut(card).and_then(|pages| pages.get_mut(page)) {
            *slot = visibility;
        }
    }

    fn set_control_visible(
        &mut self,
        card: &CardInstanceId,
        direction: PageDirection,
        visible: bool,
    ) {
        if let Some(controls) = self.controls.get_mut(card) {
            match direction {
                PageDirection::Prev => controls.prev_visible = visible,
                PageDirection::Next => controls.next_visible = visible,
            }
        }
    }

    fn set_indicator(&mut self, card: &CardInstanceId, text: &str) {
        if let Some(controls) = self.controls.get_mut(card) {
            controls.indicator = text.to_string();
        }
    }

    fn attach_scroll_hint(&mut self) {
        if !self.slides.is_empty() {
            self.scroll_hint_attached = true;
        }
    }

    fn suppress_scroll_hint(&mut self) {
        self.scroll_hint_suppressed = true;
    }

    fn set_return_to_start_visible(&mut self, visible: bool) {
        self.return_to_start_visible = visible;
    }
}
