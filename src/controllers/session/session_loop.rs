use crate::controllers::capture::{CaptureError, CapturePipeline, CaptureReport};
use crate::controllers::session::errors::RenderError;
use crate::controllers::session::events::{InputEvent, Key};
use crate::controllers::session::ports::{FrameRenderer, InputSource};
use crate::controllers::session::settings::SessionSettings;
use crate::core::clock::Clock;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_buffer::resolution_to_buffer_size;
use crate::core::data::viewport::Viewport;
use crate::core::zoom::{ZoomOutcome, ZoomRequest, advance};

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Quit,
    /// Fixed-step zoom reached the usable precision limit.
    PrecisionLimit,
    FrameLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    Finished(SessionOutcome),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub outcome: SessionOutcome,
    pub frames_rendered: u64,
    pub capture: Option<CaptureReport>,
}

/// Per-frame orchestration: zoom, render, capture, input.
pub struct Session<R, I, C> {
    renderer: R,
    input: I,
    clock: C,
    settings: SessionSettings,
    viewport: Viewport,
    target: Complex,
    speed: f64,
    capture: Option<CapturePipeline>,
    capture_report: Option<CaptureReport>,
    frames_rendered: u64,
}

impl<R, I, C> Session<R, I, C>
where
    R: FrameRenderer,
    I: InputSource,
    C: Clock,
{
    pub fn new(renderer: R, input: I, clock: C, settings: SessionSettings) -> Self {
        let viewport = Viewport::new(clock.now_millis());

        Self {
            renderer,
            input,
            clock,
            target: settings.target,
            speed: settings.speed,
            settings,
            viewport,
            capture: None,
            capture_report: None,
            frames_rendered: 0,
        }
    }

    /// Hands every rendered frame to `pipeline` until the session ends or
    /// the pipeline fails.
    ///
    /// Fails with [`CaptureError::FrameSize`] when the pipeline was started
    /// for a different resolution than the renderer produces.
    pub fn with_capture(mut self, pipeline: CapturePipeline) -> Result<Self, CaptureError> {
        let frame_len = resolution_to_buffer_size(self.renderer.resolution());
        if pipeline.frame_len() != frame_len {
            return Err(CaptureError::FrameSize {
                expected: pipeline.frame_len(),
                actual: frame_len,
            });
        }

        self.capture = Some(pipeline);
        Ok(self)
    }

    /// Runs one iteration of the loop.
    pub fn step(&mut self) -> StepOutcome {
        let request = ZoomRequest {
            target: self.target,
            speed: self.speed,
            timing: self.settings.timing,
            min_width: self.settings.min_width,
        };

        match advance(
            &mut self.viewport,
            &request,
            self.clock.now_millis(),
            &self.settings.zoom_limits,
        ) {
            ZoomOutcome::Zooming => {}
            ZoomOutcome::Reset => {
                tracing::info!(frame = self.frames_rendered, "precision limit reached, view reset");
            }
            ZoomOutcome::LimitReached => {
                tracing::info!(
                    frame = self.frames_rendered,
                    zoom_factor = self.viewport.zoom_factor,
                    "precision limit reached, ending session"
                );
                return StepOutcome::Finished(SessionOutcome::PrecisionLimit);
            }
        }

        self.render();
        self.frames_rendered += 1;
        self.submit_capture();

        for event in self.input.poll_events() {
            if self.apply_event(event) {
                return StepOutcome::Finished(SessionOutcome::Quit);
            }
        }

        match self.settings.frame_limit {
            Some(limit) if self.frames_rendered >= limit => {
                StepOutcome::Finished(SessionOutcome::FrameLimit)
            }
            _ => StepOutcome::Continue,
        }
    }

    /// Steps until the session ends, then shuts capture down.
    pub fn run(mut self) -> SessionSummary {
        let outcome = loop {
            if let StepOutcome::Finished(outcome) = self.step() {
                break outcome;
            }
        };

        self.finish(outcome)
    }

    /// Stops capture (if any) and summarises the session. Safe to call more
    /// than once; capture is only stopped the first time.
    pub fn finish(&mut self, outcome: SessionOutcome) -> SessionSummary {
        self.stop_capture();

        SessionSummary {
            outcome,
            frames_rendered: self.frames_rendered,
            capture: self.capture_report.clone(),
        }
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn target(&self) -> Complex {
        self.target
    }

    #[must_use]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    #[must_use]
    pub fn is_recording(&self) -> bool {
        self.capture.as_ref().is_some_and(CapturePipeline::is_active)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    fn render(&mut self) {
        let result = self
            .viewport
            .bounds()
            .map_err(|err| RenderError::new(err.to_string()))
            .and_then(|region| self.renderer.render(&region));

        if let Err(err) = result {
            tracing::warn!(error = %err, frame = self.frames_rendered, "showing error frame");
            self.renderer.render_error_indicator();
        }
    }

    fn submit_capture(&mut self) {
        let Some(capture) = &self.capture else {
            return;
        };

        if let Err(err) = capture.submit_frame(self.renderer.frame()) {
            tracing::warn!(error = %err, "recording stopped, continuing without capture");
            self.stop_capture();
            if let Some(report) = &mut self.capture_report {
                report.failure.get_or_insert_with(|| err.to_string());
            }
        }
    }

    fn stop_capture(&mut self) {
        if let Some(mut capture) = self.capture.take() {
            self.capture_report = capture.stop();
        }
    }

    /// Applies one input event; returns `true` when the session should end.
    fn apply_event(&mut self, event: InputEvent) -> bool {
        let key = match event {
            InputEvent::Quit => return true,
            InputEvent::KeyDown(key) => key,
        };

        let pan = self.settings.pan_step / self.viewport.zoom_factor;

        match key {
            Key::Escape => return true,
            Key::Up => self.target.imag += pan,
            Key::Down => self.target.imag -= pan,
            Key::Right => self.target.real += pan,
            Key::Left => self.target.real -= pan,
            Key::SpeedUp => self.speed += self.settings.speed_step,
            Key::SpeedDown => self.speed -= self.settings.speed_step,
            Key::Reset => {
                self.viewport.reset();
                tracing::debug!("view reset");
            }
            Key::Other => {}
        }

        false
    }
}
