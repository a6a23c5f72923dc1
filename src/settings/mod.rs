//! Configuration loading and resolution.
//!
//! Sources are merged in order: default config files, `--config` files,
//! `SHORTCUT__*` environment variables, then CLI flags. `load` returns the
//! [`ResolvedConfig`] the workflow runs with.

mod colour;
mod loader;
mod raw;
mod resolved;
mod sources;

pub use colour::ColourMode;
pub use loader::load;
pub use resolved::ResolvedConfig;
