//! Keyboard-driven walking character.
//!
//! A [`Player`] composes a [`TexturedSprite`] (what is drawn and where) with
//! a [`FrameAnimator`] (which frame of the walk cycle to show). Arrow-key
//! presses turn and move it; any key release makes it idle.

use bevy_ecs::prelude::Component;
use log::trace;

use crate::canvas::Canvas;
use crate::components::animation::FrameAnimator;
use crate::components::sprite::TexturedSprite;
use crate::drawable::{Animatable, Drawable, Transformable, Updatable};
use crate::events::input::InputEvent;

/// Facing direction. The value is the sprite sheet row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Up = 0,
    Left = 1,
    #[default]
    Down = 2,
    Right = 3,
}

impl Direction {
    pub fn row(self) -> i32 {
        self as i32
    }

    /// Unit step on screen (y grows downwards).
    pub fn step(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Down => (0, 1),
            Direction::Right => (1, 0),
        }
    }
}

/// Default pixels moved per key event.
pub const DEFAULT_MOVE_SPEED: i32 = 2;

#[derive(Component, Debug)]
pub struct Player<T: Send + Sync + 'static> {
    pub sprite: TexturedSprite<T>,
    pub animator: FrameAnimator,
    move_speed: i32,
    direction: Direction,
    idle: bool,
}

impl<T: Send + Sync + 'static> Player<T> {
    /// Player facing down and idle.
    pub fn new(sprite: TexturedSprite<T>, animator: FrameAnimator, move_speed: i32) -> Self {
        Self {
            sprite,
            animator,
            move_speed,
            direction: Direction::Down,
            idle: true,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn is_idle(&self) -> bool {
        self.idle
    }

    pub fn move_speed(&self) -> i32 {
        self.move_speed
    }

    /// Position of the sprite's top-left corner.
    pub fn position(&self) -> (i32, i32) {
        (self.sprite.x, self.sprite.y)
    }

    /// React to one input event.
    ///
    /// Key down clears the idle flag, and arrow keys also turn the player and
    /// move it by `move_speed` (redrawing the sprite). Any key up sets the
    /// idle flag, whichever key was released.
    pub fn handle_input<C>(&mut self, canvas: &mut C, event: &InputEvent)
    where
        C: Canvas<Texture = T>,
    {
        match *event {
            InputEvent::KeyDown(key) => {
                self.idle = false;
                if let Some(direction) = key.direction() {
                    self.set_direction(direction);
                    let (dx, dy) = direction.step();
                    self.sprite
                        .translate(canvas, dx * self.move_speed, dy * self.move_speed);
                }
            }
            InputEvent::KeyUp(_) => self.idle = true,
            InputEvent::Quit => {}
        }
    }

    /// Tick the animator and apply the new frame, if any.
    pub fn advance(&mut self, now_ms: u64) {
        if let Some(src) = self.animator.tick(now_ms, self.direction, self.idle) {
            trace!("player frame {:?}", src);
            self.sprite.set_src_rect(src.x, src.y, src.w, src.h);
        }
    }
}

impl<C: Canvas> Updatable<C> for Player<C::Texture>
where
    C::Texture: Send + Sync + 'static,
{
    fn update(&mut self, canvas: &mut C, now_ms: u64) {
        self.advance(now_ms);
        self.sprite.draw(canvas);
    }
}

impl<C: Canvas> Drawable<C> for Player<C::Texture>
where
    C::Texture: Send + Sync + 'static,
{
    fn draw(&self, canvas: &mut C) {
        self.sprite.draw(canvas);
    }
}

impl<C: Canvas> Transformable<C> for Player<C::Texture>
where
    C::Texture: Send + Sync + 'static,
{
    fn translate(&mut self, canvas: &mut C, dx: i32, dy: i32) {
        self.sprite.translate(canvas, dx, dy);
    }

    fn rotate(&mut self, canvas: &mut C, angle: f32) {
        self.sprite.rotate(canvas, angle);
    }

    fn scale(&mut self, canvas: &mut C, factor: f32) {
        self.sprite.scale(canvas, factor);
    }
}

// Frame advance needs the clock, so it lives in `advance`.
impl<T: Send + Sync + 'static> Animatable for Player<T> {}
