#![forbid(unsafe_code)]

pub mod model;
pub mod pagination;
pub mod render;
pub mod session;

pub use pagination::{PageSize, PageSizeError};
pub use render::{PageModel, render_page};
pub use session::{BrowserSession, Navigation};
