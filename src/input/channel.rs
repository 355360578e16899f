use std::sync::mpsc::{self, Receiver, Sender};

use crate::controllers::session::events::InputEvent;
use crate::controllers::session::ports::InputSource;

/// Input fed from another part of the program, typically a window event
/// handler, through an mpsc channel.
#[derive(Debug)]
pub struct ChannelInput {
    receiver: Receiver<InputEvent>,
}

impl ChannelInput {
    #[must_use]
    pub fn channel() -> (Sender<InputEvent>, Self) {
        let (sender, receiver) = mpsc::channel();
        (sender, Self { receiver })
    }
}

impl InputSource for ChannelInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.receiver.try_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::session::events::Key;

    #[test]
    fn test_drains_everything_sent_since_last_poll() {
        let (sender, mut input) = ChannelInput::channel();

        sender.send(InputEvent::KeyDown(Key::SpeedUp)).unwrap();
        sender.send(InputEvent::KeyDown(Key::Reset)).unwrap();

        assert_eq!(
            input.poll_events(),
            vec![InputEvent::KeyDown(Key::SpeedUp), InputEvent::KeyDown(Key::Reset)]
        );
        assert!(input.poll_events().is_empty());
    }

    #[test]
    fn test_disconnected_sender_yields_no_events() {
        let (sender, mut input) = ChannelInput::channel();
        drop(sender);

        assert!(input.poll_events().is_empty());
    }
}
