//! Movement domain: player and trigger components.

use bevy::prelude::*;

use crate::physics::CollisionFlags;

#[derive(Component, Debug)]
pub struct Player;

/// Marker for the level's finish trigger.
#[derive(Component, Debug)]
pub struct FinishMarker;

/// Persistent per-frame velocity accumulator. The physics body is stateless
/// about velocity; it only consumes the displacement built from this.
#[derive(Component, Debug, Default)]
pub struct Momentum(pub Vec2);

/// Displacement handed to the resolver this tick. Derived from momentum and
/// input before the collision pass, read by the pose systems after it.
#[derive(Component, Debug, Default)]
pub struct FrameMovement(pub Vec2);

/// Jump charges, air time, spin, and death state for one actor.
#[derive(Component, Debug)]
pub struct PlayerStatus {
    pub jumps: u8,
    /// Consecutive frames since the last ground or ramp contact.
    pub air_time: u32,
    /// Remaining spin frames; sign encodes direction.
    pub spin_timer: i32,
    pub dead: bool,
}

impl Default for PlayerStatus {
    fn default() -> Self {
        Self {
            jumps: 2,
            air_time: 0,
            spin_timer: 0,
            dead: false,
        }
    }
}

/// Render-facing orientation: horizontal flip plus an unclamped rotation in
/// degrees. The renderer wraps the angle; the model does not.
#[derive(Component, Debug, Default)]
pub struct Pose {
    pub flip: bool,
    pub rotation: f32,
}

/// Flags returned by the most recent collision pass, kept around for the
/// debug overlay.
#[derive(Component, Debug, Default)]
pub struct LastCollision(pub CollisionFlags);
