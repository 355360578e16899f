use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread::{self, JoinHandle};

use crate::controllers::capture::errors::CaptureError;
use crate::controllers::capture::frame_store::FrameStore;
use crate::controllers::capture::signal::{CaptureSignal, Wake};
use crate::core::data::resolution::Resolution;
use crate::storage::raw_stream::create_raw_stream;

struct SharedState {
    store: FrameStore,
    signal: CaptureSignal,
    failed: AtomicBool,
    frames_written: AtomicU64,
}

/// Summary of a finished capture.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CaptureReport {
    pub frames_submitted: u64,
    pub frames_written: u64,
    pub bytes_written: u64,
    /// Set when a write failure ended the capture early.
    pub failure: Option<String>,
}

impl CaptureReport {
    /// Frames overwritten in the slot before the writer got to them.
    #[must_use]
    pub fn frames_dropped(&self) -> u64 {
        self.frames_submitted.saturating_sub(self.frames_written)
    }
}

/// Background writer that appends submitted frames to a raw stream.
///
/// Submission copies into a single shared slot and signals the writer; it
/// never waits on I/O. If the writer falls behind, only the newest frame is
/// kept.
pub struct CapturePipeline {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<CaptureReport>>,
}

impl CapturePipeline {
    /// Opens `path` for writing and starts the writer thread.
    pub fn start(path: impl AsRef<Path>, resolution: Resolution) -> Result<Self, CaptureError> {
        let path = path.as_ref();
        let stream = create_raw_stream(path).map_err(|source| CaptureError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(
            path = %path.display(),
            width = resolution.width(),
            height = resolution.height(),
            "recording raw rgba frames (encode with: ffmpeg -f rawvideo -pix_fmt rgba -s {}x{} -i {})",
            resolution.width(),
            resolution.height(),
            path.display(),
        );

        Ok(Self::with_writer(stream, resolution))
    }

    /// Starts the writer thread over any byte sink.
    pub fn with_writer<W>(writer: W, resolution: Resolution) -> Self
    where
        W: Write + Send + 'static,
    {
        let shared = Arc::new(SharedState {
            store: FrameStore::new(resolution),
            signal: CaptureSignal::new(),
            failed: AtomicBool::new(false),
            frames_written: AtomicU64::new(0),
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::Builder::new()
            .name("capture-writer".to_string())
            .spawn(move || Self::writer_loop(&worker_shared, writer));

        let worker = match worker {
            Ok(handle) => Some(handle),
            Err(err) => {
                tracing::error!(error = %err, "failed to spawn capture writer");
                shared.failed.store(true, Ordering::Release);
                None
            }
        };

        Self { shared, worker }
    }

    /// Copies `pixels` into the shared slot and wakes the writer.
    ///
    /// Returns the frame's sequence number. Fails with
    /// [`CaptureError::WriterStopped`] once the pipeline has been stopped or
    /// a write has failed.
    pub fn submit_frame(&self, pixels: &[u8]) -> Result<u64, CaptureError> {
        self.ensure_active()?;
        let sequence = self.shared.store.write(pixels)?;
        self.shared.signal.notify_ready();
        Ok(sequence)
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.worker.is_some() && !self.shared.failed.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn frames_written(&self) -> u64 {
        self.shared.frames_written.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn frame_len(&self) -> usize {
        self.shared.store.frame_len()
    }

    /// Asks the writer to finish, waits for it and returns its report.
    ///
    /// A frame already submitted is written before the writer exits, and the
    /// sink is dropped (closing the file) on the writer thread before this
    /// returns. Later calls return `None`.
    pub fn stop(&mut self) -> Option<CaptureReport> {
        let handle = self.worker.take()?;

        self.shared.signal.request_shutdown();

        let mut report = match handle.join() {
            Ok(report) => report,
            Err(_) => CaptureReport {
                frames_written: self.frames_written(),
                failure: Some("capture writer panicked".to_string()),
                ..CaptureReport::default()
            },
        };
        report.frames_submitted = self.shared.store.sequence();

        tracing::info!(
            frames_written = report.frames_written,
            frames_dropped = report.frames_dropped(),
            bytes_written = report.bytes_written,
            "capture stopped"
        );

        Some(report)
    }

    fn ensure_active(&self) -> Result<(), CaptureError> {
        if self.is_active() {
            Ok(())
        } else {
            Err(CaptureError::WriterStopped)
        }
    }

    fn writer_loop<W: Write>(shared: &SharedState, mut writer: W) -> CaptureReport {
        let mut report = CaptureReport::default();
        let mut scratch = Vec::with_capacity(shared.store.frame_len());
        let mut last_written = 0;

        loop {
            match shared.signal.wait() {
                Wake::Shutdown => break,
                Wake::Drain => {
                    let sequence = shared.store.read_into(&mut scratch);

                    // Already picked up when the slot was refilled between
                    // the wake and the copy.
                    if sequence == last_written {
                        continue;
                    }

                    if let Err(err) = writer.write_all(&scratch) {
                        tracing::error!(error = %err, sequence, "capture write failed, recording stopped");
                        shared.failed.store(true, Ordering::Release);
                        report.failure = Some(err.to_string());
                        return report;
                    }

                    last_written = sequence;
                    report.frames_written += 1;
                    report.bytes_written += scratch.len() as u64;
                    shared
                        .frames_written
                        .store(report.frames_written, Ordering::Release);
                    tracing::trace!(sequence, "frame written");
                }
            }
        }

        if let Err(err) = writer.flush() {
            tracing::error!(error = %err, "capture flush failed");
            shared.failed.store(true, Ordering::Release);
            report.failure = Some(err.to_string());
        }

        report
    }
}

impl Drop for CapturePipeline {
    fn drop(&mut self) {
        self.stop();
    }
}
