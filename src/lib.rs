pub mod config;
pub mod controllers;
pub mod core;
pub mod input;
pub mod launcher;
pub mod logging;
pub mod presenters;
pub mod storage;

pub use config::{Cli, SessionConfig};
pub use controllers::capture::{CapturePipeline, CaptureReport};
pub use controllers::session::{Session, SessionOutcome, SessionSummary};
#[cfg(feature = "gui")]
pub use input::gui::run_gui;
