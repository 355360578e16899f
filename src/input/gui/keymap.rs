use winit::keyboard::KeyCode;

use crate::controllers::session::Key;

/// Maps a physical key to the session's key vocabulary.
#[must_use]
pub fn session_key(code: KeyCode) -> Key {
    match code {
        KeyCode::ArrowUp => Key::Up,
        KeyCode::ArrowDown => Key::Down,
        KeyCode::ArrowLeft => Key::Left,
        KeyCode::ArrowRight => Key::Right,
        KeyCode::KeyW => Key::SpeedUp,
        KeyCode::KeyS => Key::SpeedDown,
        KeyCode::Space => Key::Reset,
        KeyCode::Escape => Key::Escape,
        _ => Key::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_pan() {
        assert_eq!(session_key(KeyCode::ArrowUp), Key::Up);
        assert_eq!(session_key(KeyCode::ArrowDown), Key::Down);
        assert_eq!(session_key(KeyCode::ArrowLeft), Key::Left);
        assert_eq!(session_key(KeyCode::ArrowRight), Key::Right);
    }

    #[test]
    fn test_w_and_s_change_speed() {
        assert_eq!(session_key(KeyCode::KeyW), Key::SpeedUp);
        assert_eq!(session_key(KeyCode::KeyS), Key::SpeedDown);
    }

    #[test]
    fn test_space_resets_and_escape_quits() {
        assert_eq!(session_key(KeyCode::Space), Key::Reset);
        assert_eq!(session_key(KeyCode::Escape), Key::Escape);
    }

    #[test]
    fn test_unmapped_keys_are_other() {
        assert_eq!(session_key(KeyCode::KeyQ), Key::Other);
        assert_eq!(session_key(KeyCode::Enter), Key::Other);
    }
}
