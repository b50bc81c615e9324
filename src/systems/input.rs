//! Input systems.
//!
//! - [`poll_input_events`] reads the keyboard once per frame and writes
//!   [`InputEvent`] messages.
//! - [`dispatch_input`] drains them: `Quit` raises the loop's exit flag,
//!   every other event goes to each [`Player`].
use bevy_ecs::prelude::*;
use log::{debug, info};
use raylib::prelude::{KeyboardKey, RaylibHandle};
use smallvec::SmallVec;

use crate::canvas::Canvas;
use crate::components::player::Player;
use crate::events::input::{InputEvent, Key};
use crate::resources::input::{HeldKeys, KeyBindings};
use crate::resources::loopstate::LoopState;

/// Keyboard and window state as seen by [`poll_input_events`].
pub trait KeySource {
    fn close_requested(&self) -> bool;
    fn is_pressed(&self, key: KeyboardKey) -> bool;
    /// The platform's auto-repeat fired for a held key this frame.
    fn is_pressed_repeat(&self, key: KeyboardKey) -> bool;
    fn is_released(&self, key: KeyboardKey) -> bool;
    /// Next key from this frame's press queue.
    fn next_pressed(&mut self) -> Option<KeyboardKey>;
}

impl KeySource for RaylibHandle {
    fn close_requested(&self) -> bool {
        self.window_should_close()
    }

    fn is_pressed(&self, key: KeyboardKey) -> bool {
        self.is_key_pressed(key)
    }

    fn is_pressed_repeat(&self, key: KeyboardKey) -> bool {
        self.is_key_pressed_repeat(key)
    }

    fn is_released(&self, key: KeyboardKey) -> bool {
        self.is_key_released(key)
    }

    fn next_pressed(&mut self) -> Option<KeyboardKey> {
        self.get_key_pressed()
    }
}

/// Turn this frame's keyboard state into [`InputEvent`] messages.
///
/// Keys produce `KeyDown` on press and again on every platform auto-repeat,
/// and `KeyUp` on release. Unbound keys report as [`Key::Other`]. A close
/// request produces `Quit`.
pub fn poll_input_events<K: KeySource>(keys: &mut K, world: &mut World) {
    let bindings = world.resource::<KeyBindings>().clone();
    let mut events: SmallVec<[InputEvent; 8]> = SmallVec::new();

    if keys.close_requested() {
        events.push(InputEvent::Quit);
    }

    for (key, direction) in bindings.iter() {
        if keys.is_pressed(key) || keys.is_pressed_repeat(key) {
            events.push(InputEvent::KeyDown(direction.into()));
        }
        if keys.is_released(key) {
            events.push(InputEvent::KeyUp(direction.into()));
        }
    }

    {
        let mut held = world.resource_mut::<HeldKeys>();
        for key in held.iter() {
            if keys.is_pressed_repeat(key) {
                events.push(InputEvent::KeyDown(Key::Other));
            }
        }
        while let Some(key) = keys.next_pressed() {
            if !bindings.is_bound(key) {
                held.press(key);
                events.push(InputEvent::KeyDown(Key::Other));
            }
        }
        let released = held.release(|key| keys.is_released(key));
        for _ in 0..released {
            events.push(InputEvent::KeyUp(Key::Other));
        }
    }

    let mut messages = world.resource_mut::<Messages<InputEvent>>();
    for event in events {
        debug!("input event {:?}", event);
        messages.write(event);
    }
}

/// Deliver every pending input message, oldest first.
///
/// Players may move (and redraw) on `canvas` while handling their events.
pub fn dispatch_input<C>(world: &mut World, canvas: &mut C)
where
    C: Canvas,
    C::Texture: Send + Sync + 'static,
{
    let events: SmallVec<[InputEvent; 8]> = world
        .resource_mut::<Messages<InputEvent>>()
        .drain()
        .collect();
    if events.is_empty() {
        return;
    }

    let mut players = world.query::<&mut Player<C::Texture>>();
    for event in events {
        if event == InputEvent::Quit {
            info!("Quit requested");
            world.resource_mut::<LoopState>().quit = true;
            continue;
        }
        for mut player in players.iter_mut(world) {
            player.handle_input(canvas, &event);
        }
    }
}
