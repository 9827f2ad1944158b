pub mod carousel;
pub mod events;
pub mod ids;
pub mod markup;
pub mod page;
pub mod paginate;
pub mod renderer;
pub mod runtime;
pub mod session;
pub mod surface;

pub use carousel::{
    CarouselAdapter, CarouselConfig, CarouselWidget, NavigationInput, VirtualCarousel,
};
pub use events::{ClickEvent, ClickOutcome, ElementRef};
pub use ids::{IdSource, SequentialIdSource, UuidIdSource};
pub use page::{render_document, DocumentOptions};
pub use paginate::{paginate, PagedMarkup};
pub use renderer::{render_card, render_deck, RenderedCard, RenderedSlide, ITEMS_PER_PAGE};
pub use runtime::{run_session, RunStats, SessionEvent};
pub use session::{IgnoreReason, PageRequest, Session, SessionOptions};
pub use surface::{MemorySurface, PageVisibility, ViewSurface};
