//! Windowed front end.
//!
//! winit delivers keyboard and window events, which are forwarded to the
//! session over a channel; each finished frame is shown through `pixels`.

mod app;
pub mod keymap;

pub use app::run_gui;
