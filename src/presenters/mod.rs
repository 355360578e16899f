//! Adapters that implement the session's render port.

pub mod cpu;
#[cfg(feature = "gui")]
pub mod pixels;
