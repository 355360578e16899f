//! Asynchronous frame capture.
//!
//! The render thread hands frames to a [`FrameStore`] and pokes a
//! [`CaptureSignal`]; a single writer thread drains the store to a raw
//! stream. Two locks, never nested: the store's slot lock and the signal's
//! flag lock.

pub mod errors;
pub mod frame_store;
pub mod pipeline;
pub mod signal;

#[cfg(test)]
pub(crate) mod test_sinks;

pub use errors::CaptureError;
pub use frame_store::FrameStore;
pub use pipeline::{CapturePipeline, CaptureReport};
pub use signal::{CaptureSignal, Wake};
