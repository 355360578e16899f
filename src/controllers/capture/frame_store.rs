use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::controllers::capture::errors::CaptureError;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::resolution::Resolution;

struct StoredFrame {
    pixels: PixelBuffer,
    /// Bumped on every write; 0 means nothing has been stored yet.
    sequence: u64,
}

/// Single-slot frame hand-off between the render thread and the capture
/// writer. A new frame overwrites whatever is there, read or not.
pub struct FrameStore {
    slot: Mutex<StoredFrame>,
    frame_len: usize,
}

impl FrameStore {
    #[must_use]
    pub fn new(resolution: Resolution) -> Self {
        let pixels = PixelBuffer::new(resolution);
        let frame_len = pixels.buffer_size();

        Self {
            slot: Mutex::new(StoredFrame {
                pixels,
                sequence: 0,
            }),
            frame_len,
        }
    }

    #[must_use]
    pub fn frame_len(&self) -> usize {
        self.frame_len
    }

    /// Copies `pixels` into the slot and returns the new sequence number.
    pub fn write(&self, pixels: &[u8]) -> Result<u64, CaptureError> {
        if pixels.len() != self.frame_len {
            return Err(CaptureError::FrameSize {
                expected: self.frame_len,
                actual: pixels.len(),
            });
        }

        let mut frame = self.lock();
        frame.pixels.buffer_mut().copy_from_slice(pixels);
        frame.sequence += 1;
        Ok(frame.sequence)
    }

    /// Copies the current frame into `out` and returns its sequence number.
    /// The lock is held only for the copy.
    pub fn read_into(&self, out: &mut Vec<u8>) -> u64 {
        let frame = self.lock();
        out.clear();
        out.extend_from_slice(frame.pixels.buffer());
        frame.sequence
    }

    #[must_use]
    pub fn sequence(&self) -> u64 {
        self.lock().sequence
    }

    fn lock(&self) -> MutexGuard<'_, StoredFrame> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> FrameStore {
        FrameStore::new(Resolution::new(2, 2).unwrap())
    }

    #[test]
    fn test_empty_store_reports_sequence_zero() {
        let store = store();
        let mut out = Vec::new();

        assert_eq!(store.read_into(&mut out), 0);
        assert_eq!(out.len(), store.frame_len());
    }

    #[test]
    fn test_writes_overwrite_and_bump_sequence() {
        let store = store();
        let mut out = Vec::new();

        assert_eq!(store.write(&[1; 16]).unwrap(), 1);
        assert_eq!(store.write(&[2; 16]).unwrap(), 2);

        assert_eq!(store.read_into(&mut out), 2);
        assert_eq!(out, vec![2; 16]);
    }

    #[test]
    fn test_wrong_size_is_rejected_without_bumping_sequence() {
        let store = store();

        let result = store.write(&[0; 3]);

        assert!(matches!(
            result,
            Err(CaptureError::FrameSize {
                expected: 16,
                actual: 3
            })
        ));
        assert_eq!(store.sequence(), 0);
    }
}
