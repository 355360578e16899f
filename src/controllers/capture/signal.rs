use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct SignalState {
    ready: bool,
    shutdown: bool,
}

/// Why the writer woke up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wake {
    Drain,
    Shutdown,
}

/// Ready/shutdown flags plus the condition variable the writer sleeps on.
///
/// Separate from the frame store's lock. Neither thread ever holds both.
#[derive(Debug, Default)]
pub struct CaptureSignal {
    state: Mutex<SignalState>,
    wake: Condvar,
}

impl CaptureSignal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notify_ready(&self) {
        self.lock().ready = true;
        self.wake.notify_one();
    }

    pub fn request_shutdown(&self) {
        self.lock().shutdown = true;
        self.wake.notify_one();
    }

    /// Blocks until `ready || shutdown` holds, re-checking the predicate after
    /// every wake-up.
    ///
    /// A pending frame wins over shutdown so a frame submitted before `stop`
    /// is still written. Consuming `Drain` clears the ready flag; a frame
    /// submitted while the writer is busy sets it again.
    pub fn wait(&self) -> Wake {
        let guard = self.lock();
        let mut state = self
            .wake
            .wait_while(guard, |state| !state.ready && !state.shutdown)
            .unwrap_or_else(PoisonError::into_inner);

        if state.ready {
            state.ready = false;
            Wake::Drain
        } else {
            Wake::Shutdown
        }
    }

    fn lock(&self) -> MutexGuard<'_, SignalState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
