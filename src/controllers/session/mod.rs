//! The per-frame session loop and the ports it drives.

pub mod errors;
pub mod events;
pub mod ports;
mod session_loop;
pub mod settings;

pub use errors::RenderError;
pub use events::{InputEvent, Key};
pub use ports::{FrameRenderer, InputSource};
pub use session_loop::{Session, SessionOutcome, SessionSummary, StepOutcome};
pub use settings::SessionSettings;
