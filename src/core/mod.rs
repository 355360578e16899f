//! Pure domain logic: plane geometry, timing, the zoom engine and fractal
//! evaluation. Nothing here touches threads, files or windows.

pub mod actions;
pub mod clock;
pub mod data;
pub mod fractals;
pub mod zoom;
