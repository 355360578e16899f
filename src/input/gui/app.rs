//! Main GUI application loop.

use std::sync::mpsc::Sender;

use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Fullscreen, Window, WindowBuilder},
};

use crate::config::SessionConfig;
use crate::controllers::session::{FrameRenderer, InputEvent, SessionOutcome, SessionSummary, StepOutcome};
use crate::core::clock::MonotonicClock;
use crate::input::channel::ChannelInput;
use crate::input::gui::keymap::session_key;
use crate::launcher::{InitializationError, build_session, start_capture};
use crate::presenters::pixels::PixelsPresenter;

/// Runs an interactive session in a window.
///
/// Returns once the session ends: Escape, closing the window, a frame
/// limit, or the precision limit of a recording.
pub fn run_gui(config: &SessionConfig) -> anyhow::Result<SessionSummary> {
    let event_loop = EventLoop::new().map_err(|err| InitializationError::Renderer(err.to_string().into()))?;

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Fractal Zoom")
            .with_inner_size(LogicalSize::new(
                f64::from(config.resolution.width()),
                f64::from(config.resolution.height()),
            ))
            .build(&event_loop)
            .map_err(|err| InitializationError::Renderer(err.to_string().into()))?,
    ));

    if config.fullscreen {
        window.set_fullscreen(Some(Fullscreen::Borderless(None)));
    }

    let mut presenter = PixelsPresenter::new(window, config.resolution)
        .map_err(|err| InitializationError::Renderer(Box::new(err)))?;

    let mut config = config.clone();
    let capture = start_capture(&mut config);
    let (events, input) = ChannelInput::channel();
    let mut session = build_session(&config, capture, input, MonotonicClock::new())?;

    let mut summary: Option<SessionSummary> = None;
    let mut failure: Option<anyhow::Error> = None;

    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop
        .run(|event, elwt| match event {
            Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => forward(&events, InputEvent::Quit),
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            physical_key: PhysicalKey::Code(code),
                            state: ElementState::Pressed,
                            ..
                        },
                    ..
                } => forward(&events, InputEvent::KeyDown(session_key(code))),
                WindowEvent::Resized(size) => {
                    if let Err(err) = presenter.resize_surface(size.width, size.height) {
                        tracing::warn!(error = %err, "surface resize failed");
                    }
                }
                WindowEvent::RedrawRequested => {
                    if summary.is_some() {
                        return;
                    }

                    let step = session.step();

                    if let Err(err) = presenter.present(session.renderer().frame()) {
                        failure = Some(anyhow::Error::new(err).context("cannot present frame"));
                        summary = Some(session.finish(SessionOutcome::Quit));
                        elwt.exit();
                        return;
                    }

                    if let StepOutcome::Finished(outcome) = step {
                        summary = Some(session.finish(outcome));
                        elwt.exit();
                    }
                }
                _ => {}
            },
            Event::AboutToWait => window.request_redraw(),
            _ => {}
        })
        .map_err(|err| anyhow::anyhow!("event loop error: {err}"))?;

    if let Some(err) = failure {
        return Err(err);
    }

    Ok(summary.unwrap_or_else(|| session.finish(SessionOutcome::Quit)))
}

fn forward(events: &Sender<InputEvent>, event: InputEvent) {
    if events.send(event).is_err() {
        tracing::debug!("session input closed, event dropped");
    }
}
