//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`library`]: Filterable algorithm list with category and search query
//! - [`visual`]: The scene recorded in the current step
//! - [`details`]: Description, complexity, use cases, insights and Python code
//! - [`status`]: Status bar with step progress, speed and keybindings
//!
//! Each pane exports a `render_*` function that is a pure function of the
//! data handed to it; all state lives in [`crate::ui::App`].

pub mod details;
pub mod library;
pub mod status;
pub mod visual;

pub use details::{render_details_pane, DetailsView};
pub use library::{render_library_pane, LibraryRenderData};
pub use status::render_status_bar;
pub use visual::render_visual_pane;
