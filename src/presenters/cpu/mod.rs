pub mod renderer;

pub use renderer::{CpuRenderer, ERROR_INDICATOR};
