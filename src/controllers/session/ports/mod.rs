//! Collaborators the session loop drives but does not implement.

pub mod input;
pub mod renderer;

pub use input::InputSource;
pub use renderer::FrameRenderer;
