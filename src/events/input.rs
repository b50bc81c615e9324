//! Discrete input events.
//!
//! [`poll_input_events`](crate::systems::input::poll_input_events) turns the
//! window's keyboard state into these messages once per frame and writes
//! them to `Messages<InputEvent>`. The render loop drains them in order.

use bevy_ecs::message::Message;

use crate::components::player::Direction;

/// Keys the scene distinguishes. Anything that is not an arrow key is
/// [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Left,
    Down,
    Right,
    Other,
}

impl Key {
    /// Facing direction for arrow keys.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Key::Up => Some(Direction::Up),
            Key::Left => Some(Direction::Left),
            Key::Down => Some(Direction::Down),
            Key::Right => Some(Direction::Right),
            Key::Other => None,
        }
    }
}

impl From<Direction> for Key {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => Key::Up,
            Direction::Left => Key::Left,
            Direction::Down => Key::Down,
            Direction::Right => Key::Right,
        }
    }
}

#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A key went down, or is held and repeating.
    KeyDown(Key),
    KeyUp(Key),
    /// The window was asked to close.
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_map_to_directions() {
        for direction in [Direction::Up, Direction::Left, Direction::Down, Direction::Right] {
            assert_eq!(Key::from(direction).direction(), Some(direction));
        }
        assert_eq!(Key::Other.direction(), None);
    }
}
