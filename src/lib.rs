//! Core of the `shortcut` cheat-sheet viewer.
//!
//! [`render`] turns the page markup into styled terminal text. [`pages`] and
//! [`update`] manage the local page store the binary reads from.

pub mod app_dirs;
pub mod logging;
pub mod pages;
pub mod render;
pub mod update;

pub use pages::{PageError, PageStore};
pub use render::{
	Colour, LossyLines, Palette, RenderError, RenderOptions, RenderReport, Renderer, Role,
	SpanClose, render_path,
};
pub use update::{UpdateError, UpdateSummary, Updater};
