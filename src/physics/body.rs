//! Physics body: authoritative float position plus derived integer view.

use bevy::prelude::*;

use super::resolver::{self, CollisionFlags, PixelRect, Ramp};

/// Trigger sub-rectangle, offset relative to the owning body's top-left.
/// Used for gameplay overlap checks only, never for terrain collision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hitbox {
    pub offset_x: i32,
    pub offset_y: i32,
    pub w: i32,
    pub h: i32,
}

/// One actor's collision state. Velocity is not stored here; the body only
/// consumes a displacement per `step` call.
#[derive(Component, Debug)]
pub struct PhysicsBody {
    pos: Vec2,
    rect: PixelRect,
    hitbox: Option<Hitbox>,
}

impl PhysicsBody {
    pub fn new(x: f32, y: f32, w: i32, h: i32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            rect: PixelRect::new(x as i32, y as i32, w, h),
            hitbox: None,
        }
    }

    pub fn with_hitbox(mut self, hitbox: Hitbox) -> Self {
        self.hitbox = Some(hitbox);
        self
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn rect(&self) -> PixelRect {
        self.rect
    }

    /// Hard teleport, bypassing collision. Used for spawn and respawn.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.pos = Vec2::new(x, y);
        self.rect.x = x as i32;
        self.rect.y = y as i32;
    }

    /// Horizontal teleport only; used for world border clamping.
    pub fn set_x(&mut self, x: f32) {
        self.pos.x = x;
        self.rect.x = x as i32;
    }

    /// The trigger rectangle in map space.
    ///
    /// # Panics
    ///
    /// Reading the hitbox before one was configured is a programming error,
    /// not a recoverable condition.
    pub fn hitbox(&self) -> PixelRect {
        let hb = self
            .hitbox
            .as_ref()
            .expect("hitbox read before it was configured");
        PixelRect::new(
            self.pos.x as i32 + hb.offset_x,
            self.pos.y as i32 + hb.offset_y,
            hb.w,
            hb.h,
        )
    }

    /// Advances the body by `movement` and reports which sides collided.
    pub fn step(
        &mut self,
        movement: Vec2,
        solids: &[PixelRect],
        ramps: &[Ramp],
    ) -> CollisionFlags {
        resolver::resolve(&mut self.pos, &mut self.rect, movement, solids, ramps)
    }
}
