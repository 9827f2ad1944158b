pub mod inspect;
pub mod render;
pub mod walk;
