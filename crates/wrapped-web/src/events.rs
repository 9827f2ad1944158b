//! Delegated click handling.
//!
//! A click arrives as the path from the clicked element up through its
//! ancestors. Pagination buttons are found by searching that path, the same
//! way a document-wide listener would use `closest()`.

use std::collections::BTreeMap;

use wrapped_core::PageDirection;
use wrapped_domain::CardInstanceId;

use crate::carousel::CarouselWidget;
use crate::session::{PageRequest, Session};
use crate::surface::ViewSurface;

pub const PAGINATION_BUTTON_CLASS: &str = "pagination-button";
pub const RETURN_TO_START_ID: &str = "backToTop";

/// The parts of an element the coordinator looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementRef {
    pub id: Option<String>,
    pub classes: Vec<String>,
    /// `data-*` attributes, keyed without the `data-` prefix.
    pub data: BTreeMap<String, String>,
}

impl ElementRef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn with_data(mut self, key: &str, value: &str) -> Self {
        self.data.insert(key.to_string(), value.to_string());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn data(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickEvent {
    /// Target first, then each ancestor up to the document root.
    pub path: Vec<ElementRef>,
}

impl ClickEvent {
    pub fn new(path: Vec<ElementRef>) -> Self {
        Self { path }
    }

    /// Click on the label inside a pagination button of `card_id`.
    pub fn pagination(card_id: &CardInstanceId, direction: PageDirection) -> Self {
        let button = ElementRef::new()
            .with_class(PAGINATION_BUTTON_CLASS)
            .with_class(match direction {
                PageDirection::Prev => "pagination-prev",
                PageDirection::Next => "pagination-next",
            })
            .with_data("card-id", card_id.as_str())
            .with_data("direction", direction.as_str());
        let controls = ElementRef::new()
            .with_class("pagination-controls")
            .with_data("card-id", card_id.as_str());
        Self::new(vec![ElementRef::new(), button, controls])
    }

    pub fn return_to_start() -> Self {
        Self::new(vec![ElementRef::new()
            .with_id(RETURN_TO_START_ID)
            .with_class("back-to-top")])
    }

    /// Nearest element on the path (target included) matching `predicate`.
    pub fn closest<P>(&self, predicate: P) -> Option<&ElementRef>
    where
        P: Fn(&ElementRef) -> bool,
    {
        self.path.iter().find(|element| predicate(element))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Page(PageRequest),
    ReturnToStart { moved: bool },
    Unhandled,
}

impl<S: ViewSurface, W: CarouselWidget> Session<S, W> {
    pub fn handle_click(&mut self, event: &ClickEvent) -> ClickOutcome {
        if let Some(button) = event.closest(|e| e.has_class(PAGINATION_BUTTON_CLASS)) {
            let card_id = button.data("card-id").map(CardInstanceId::from);
            let direction = button
                .data("direction")
                .and_then(|d| d.parse::<PageDirection>().ok());
            return match (card_id, direction) {
                (Some(card_id), Some(direction)) => {
                    ClickOutcome::Page(self.request_page(&card_id, direction))
                }
                _ => {
                    tracing::debug!("Pagination button without card id or direction");
                    ClickOutcome::Unhandled
                }
            };
        }

        if event
            .closest(|e| e.id.as_deref() == Some(RETURN_TO_START_ID))
            .is_some()
        {
            let moved = self.return_to_start().is_some();
            return ClickOutcome::ReturnToStart { moved };
        }

        ClickOutcome::Unhandled
    }
}
