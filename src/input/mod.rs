//! Input adapters for the session loop.
//!
//! This module contains adapters that receive input from various sources
//! and translate them into session events.

pub mod channel;
#[cfg(feature = "gui")]
pub mod gui;
pub mod scripted;

pub use channel::ChannelInput;
pub use scripted::ScriptedInput;
