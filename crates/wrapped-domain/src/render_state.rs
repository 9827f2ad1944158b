//! Per-card pagination state, keyed by an opaque instance identifier.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;
use wrapped_core::{PageDirection, PageInfo, PageLayout};

/// Opaque identifier of one rendered paginated card, e.g. `ranked-<uuid>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CardInstanceId(String);

impl CardInstanceId {
    pub fn new(kind: &str, unique: &str) -> Self {
        Self(format!("{}-{}", kind, unique))
    }

    pub fn random(kind: &str) -> Self {
        Self::new(kind, &Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardInstanceId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl fmt::Display for CardInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderState {
    pub card_id: CardInstanceId,
    layout: PageLayout,
    current_page: usize,
    /// Slide the card was rendered on.
    pub slide_index: usize,
}

impl RenderState {
    pub fn new(card_id: CardInstanceId, layout: PageLayout, slide_index: usize) -> Self {
        Self {
            card_id,
            layout,
            current_page: 0,
            slide_index,
        }
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.layout.total_pages()
    }

    pub fn has_controls(&self) -> bool {
        self.total_pages() > 1
    }

    /// Position, range and neighbours of the current page.
    pub fn page_info(&self) -> PageInfo {
        self.layout.page_info(self.current_page)
    }

    pub fn can_step(&self, direction: PageDirection) -> bool {
        self.target(direction).is_some()
    }

    /// Page reached by one step in `direction`, if legal.
    pub fn target(&self, direction: PageDirection) -> Option<usize> {
        self.layout.step(self.current_page, direction)
    }

    /// Move one page. Illegal steps leave the state untouched and return `None`.
    pub fn step(&mut self, direction: PageDirection) -> Option<usize> {
        let target = self.target(direction)?;
        self.current_page = target;
        Some(target)
    }

    pub fn indicator(&self) -> String {
        self.page_info().indicator()
    }
}

#[derive(Debug, Clone, Default)]
pub struct RenderStateMap {
    states: HashMap<CardInstanceId, RenderState>,
}

impl RenderStateMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, state: RenderState) -> Option<RenderState> {
        self.states.insert(state.card_id.clone(), state)
    }

    pub fn get(&self, id: &CardInstanceId) -> Option<&RenderState> {
        self.states.get(id)
    }

    pub fn get_mut(&mut self, id: &CardInstanceId) -> Option<&mut RenderState> {
        self.states.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RenderState> {
        self.states.values()
    }

    /// The state rendered on `slide_index`, if that slide paginates.
    pub fn for_slide(&self, slide_index: usize) -> Option<&RenderState> {
        self.states.values().find(|s| s.slide_index == slide_index)
    }
}
