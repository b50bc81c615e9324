//! Keyboard input resources.
//!
//! - [`KeyBindings`] – which physical keys mean which [`Direction`]
//! - [`HeldKeys`] – unbound keys currently held down
//!
//! raylib reports key *state*; the player expects a stream of key down/up
//! events. Bound keys are polled directly, but raylib has no "next released
//! key" query, so unbound keys that went down are remembered in [`HeldKeys`]
//! until they come back up.
use bevy_ecs::prelude::*;
use raylib::prelude::KeyboardKey;
use smallvec::SmallVec;

use crate::components::player::Direction;

/// Physical key for each facing direction.
#[derive(Resource, Debug, Clone)]
pub struct KeyBindings {
    bindings: [(KeyboardKey, Direction); 4],
}

impl Default for KeyBindings {
    /// Arrow keys.
    fn default() -> Self {
        Self {
            bindings: [
                (KeyboardKey::KEY_UP, Direction::Up),
                (KeyboardKey::KEY_LEFT, Direction::Left),
                (KeyboardKey::KEY_DOWN, Direction::Down),
                (KeyboardKey::KEY_RIGHT, Direction::Right),
            ],
        }
    }
}

impl KeyBindings {
    pub fn iter(&self) -> impl Iterator<Item = (KeyboardKey, Direction)> + '_ {
        self.bindings.iter().copied()
    }

    pub fn direction_of(&self, key: KeyboardKey) -> Option<Direction> {
        self.iter().find(|(k, _)| *k == key).map(|(_, d)| d)
    }

    pub fn is_bound(&self, key: KeyboardKey) -> bool {
        self.direction_of(key).is_some()
    }
}

/// Unbound keys that went down and have not been released yet.
#[derive(Resource, Debug, Clone, Default)]
pub struct HeldKeys {
    others: SmallVec<[KeyboardKey; 4]>,
}

impl HeldKeys {
    pub fn press(&mut self, key: KeyboardKey) {
        if !self.others.contains(&key) {
            self.others.push(key);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = KeyboardKey> + '_ {
        self.others.iter().copied()
    }

    /// Forget the keys for which `released` is true. Returns how many were
    /// released.
    pub fn release(&mut self, mut released: impl FnMut(KeyboardKey) -> bool) -> usize {
        let before = self.others.len();
        self.others.retain(|key| !released(*key));
        before - self.others.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings_are_arrows() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.direction_of(KeyboardKey::KEY_RIGHT), Some(Direction::Right));
        assert_eq!(bindings.direction_of(KeyboardKey::KEY_UP), Some(Direction::Up));
        assert!(!bindings.is_bound(KeyboardKey::KEY_W));
    }

    #[test]
    fn test_held_keys_tracked_until_released() {
        let mut held = HeldKeys::default();
        held.press(KeyboardKey::KEY_A);
        held.press(KeyboardKey::KEY_A);
        held.press(KeyboardKey::KEY_B);
        assert_eq!(held.iter().count(), 2);

        let released = held.release(|key| key == KeyboardKey::KEY_A);
        assert_eq!(released, 1);
        assert_eq!(held.iter().collect::<Vec<_>>(), vec![KeyboardKey::KEY_B]);
        assert_eq!(held.release(|_| false), 0);
    }
}
