//! Terminal front end for the pathgrid shortest-path finder.
//!
//! Draws the grid with [crossterm], lets the user place a start, an end and
//! barriers with the mouse, and animates the A* search step by step.

pub mod app;
pub mod config;
pub mod editor;
pub mod input;
pub mod palette;
pub mod screen;

pub use app::run;
pub use config::Config;
pub use editor::{Action, Editor};
pub use palette::Palette;
