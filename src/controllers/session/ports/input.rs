use crate::controllers::session::events::InputEvent;

pub trait InputSource {
    /// Every event since the previous poll, oldest first. Never blocks.
    fn poll_events(&mut self) -> Vec<InputEvent>;
}
