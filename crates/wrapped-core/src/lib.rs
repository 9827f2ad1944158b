pub mod config;
pub mod error;
pub mod pagination;
pub mod result;
pub mod timer;

pub use config::WrappedConfig;
pub use error::WrappedError;
pub use pagination::{PageDirection, PageInfo, PageLayout};
pub use result::WrappedResult;
pub use timer::{TaskId, TimerQueue};
