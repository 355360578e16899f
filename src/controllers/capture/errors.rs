use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("could not open capture output {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("frame is {actual} bytes but capture expects {expected}")]
    FrameSize { expected: usize, actual: usize },

    #[error("capture writer has stopped")]
    WriterStopped,
}
