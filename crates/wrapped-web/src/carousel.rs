//! Vertical one-slide-per-view carousel.
//!
//! The widget itself is external and only reached through [`CarouselWidget`].
//! [`CarouselAdapter`] owns the current slide index and reacts to slide
//! changes; [`VirtualCarousel`] is an in-process widget for headless sessions.

use serde::{Deserialize, Serialize};
use wrapped_core::WrappedConfig;

use crate::surface::ViewSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Vertical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MousewheelConfig {
    pub enabled: bool,
    pub sensitivity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyboardConfig {
    pub enabled: bool,
    /// Handle keys even when the carousel is not in the viewport or focused.
    pub only_in_viewport: bool,
}

/// Options handed to the widget at initialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselConfig {
    pub direction: Direction,
    pub slides_per_view: u32,
    pub space_between: u32,
    /// Transition duration in milliseconds.
    pub speed: u64,
    pub mousewheel: MousewheelConfig,
    pub touch_events_target: String,
    pub keyboard: KeyboardConfig,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            direction: Direction::Vertical,
            slides_per_view: 1,
            space_between: 0,
            speed: wrapped_core::config::DEFAULT_CAROUSEL_SPEED_MS,
            mousewheel: MousewheelConfig {
                enabled: true,
                sensitivity: 1.0,
            },
            touch_events_target: "container".to_string(),
            keyboard: KeyboardConfig {
                enabled: true,
                only_in_viewport: false,
            },
        }
    }
}

impl CarouselConfig {
    pub fn from_config(config: &WrappedConfig) -> Self {
        Self {
            speed: config.effective_carousel_speed_ms(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowUp,
    ArrowDown,
    PageUp,
    PageDown,
    Home,
    End,
}

/// User input the carousel navigates on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavigationInput {
    /// Positive delta scrolls towards later slides.
    Wheel { delta_y: f64 },
    Swipe(SwipeDirection),
    Key(NavKey),
}

/// Contract of the external carousel widget. Methods that move the carousel
/// return the new active index when a slide change happened, which is the
/// widget's slide-change notification.
#[cfg_attr(test, mockall::automock)]
pub trait CarouselWidget {
    fn slide_count(&self) -> usize;

    fn active_index(&self) -> usize;

    /// Recompute layout after slide content changed.
    fn update(&mut self);

    fn slide_to(&mut self, index: usize) -> Option<usize>;

    fn navigate(&mut self, input: NavigationInput) -> Option<usize>;
}

#[derive(Debug, Clone)]
pub struct VirtualCarousel {
    config: CarouselConfig,
    slide_count: usize,
    active: usize,
    layout_updates: usize,
}

impl VirtualCarousel {
    pub fn new(config: CarouselConfig, slide_count: usize) -> Self {
        Self {
            config,
            slide_count,
            active: 0,
            layout_updates: 0,
        }
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// How many times layout was recomputed.
    pub fn layout_updates(&self) -> usize {
        self.layout_updates
    }

    fn last_index(&self) -> usize {
        self.slide_count.saturating_sub(1)
    }

    fn move_to(&mut self, index: usize) -> Option<usize> {
        let target = index.min(self.last_index());
        if target == self.active || self.slide_count == 0 {
            return None;
        }
        self.active = target;
        Some(target)
    }

    fn step(&mut self, forward: bool) -> Option<usize> {
        if forward {
            self.move_to(self.active + 1)
        } else {
            self.move_to(self.active.checked_sub(1)?)
        }
    }
}

impl CarouselWidget for VirtualCarousel {
    fn slide_count(&self) -> usize {
        self.slide_count
    }

    fn active_index(&self) -> usize {
        self.active
    }

    fn update(&mut self) {
        self.layout_updates += 1;
    }

    fn slide_to(&mut self, index: usize) -> Option<usize> {
        self.move_to(index)
    }

    fn navigate(&mut self, input: NavigationInput) -> Option<usize> {
        match input {
            NavigationInput::Wheel { delta_y } => {
                let scaled = delta_y * self.config.mousewheel.sensitivity;
                if !self.config.mousewheel.enabled || scaled == 0.0 {
                    return None;
                }
                self.step(scaled > 0.0)
            }
            NavigationInput::Swipe(SwipeDirection::Up) => self.step(true),
            NavigationInput::Swipe(SwipeDirection::Down) => self.step(false),
            NavigationInput::Key(key) => {
                if !self.config.keyboard.enabled {
                    return None;
                }
                match key {
                    NavKey::ArrowDown | NavKey::PageDown => self.step(true),
                    NavKey::ArrowUp | NavKey::PageUp => self.step(false),
                    NavKey::Home => self.move_to(0),
                    NavKey::End => self.move_to(self.last_index()),
                }
            }
        }
    }
}

/// Owns the current slide index and keeps the scroll hint and the
/// return-to-start affordance in step with it.
#[derive(Debug)]
pub struct CarouselAdapter<W> {
    widget: W,
    current_index: usize,
    hint_suppressed: bool,
}

impl<W: CarouselWidget> CarouselAdapter<W> {
    pub fn new(widget: W) -> Self {
        let current_index = widget.active_index();
        Self {
            widget,
            current_index,
            hint_suppressed: false,
        }
    }

    /// Apply the visibility rules for the starting slide.
    pub fn init(&mut self, surface: &mut dyn ViewSurface) {
        let index = self.widget.active_index();
        self.on_slide_change(index, surface);
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn slide_count(&self) -> usize {
        self.widget.slide_count()
    }

    pub fn is_last_slide(&self) -> bool {
        self.current_index + 1 == self.widget.slide_count()
    }

    pub fn scroll_hint_suppressed(&self) -> bool {
        self.hint_suppressed
    }

    pub fn on_slide_change(&mut self, index: usize, surface: &mut dyn ViewSurface) {
        tracing::debug!("Slide changed: {} -> {}", self.current_index, index);
        self.current_index = index;

        if index != 0 && !self.hint_suppressed {
            self.hint_suppressed = true;
            surface.suppress_scroll_hint();
        }

        surface.set_return_to_start_visible(self.is_last_slide());
    }

    pub fn navigate(
        &mut self,
        input: NavigationInput,
        surface: &mut dyn ViewSurface,
    ) -> Option<usize> {
        let index = self.widget.navigate(input)?;
        self.on_slide_change(index, surface);
        Some(index)
    }

    pub fn jump_to_first(&mut self, surface: &mut dyn ViewSurface) -> Option<usize> {
        let index = self.widget.slide_to(0)?;
        self.on_slide_change(index, surface);
        Some(index)
    }

    pub fn refresh_layout(&mut self) {
        self.widget.update();
    }
}
