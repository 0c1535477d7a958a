//! Ratatui rendering of the core view model.
mod render;
mod theme;

pub use render::render;
