//! Movement domain: camera follow with border clamping.

use bevy::prelude::*;

use crate::core::{VIEW_HEIGHT, VIEW_WIDTH};
use crate::movement::{CameraFocus, MovementTuning, Player, PlayerStatus};
use crate::physics::PhysicsBody;
use crate::world::WorldMap;

/// Offset from the player's top-left to the point the camera centers on.
const FOCUS_OFFSET: Vec2 = Vec2::new(7.0, 14.0);

/// Eases the camera toward the player. Runs before the collision pass so the
/// candidate tile window matches what this tick renders. The first simulated
/// frame snaps; a dead player is no longer followed.
pub(crate) fn camera_follow(
    map: Res<WorldMap>,
    tuning: Res<MovementTuning>,
    mut focus: ResMut<CameraFocus>,
    players: Query<(&PhysicsBody, &PlayerStatus), With<Player>>,
) {
    for (body, status) in &players {
        let bounds = map.bounds;
        let view = Vec2::new(VIEW_WIDTH as f32, VIEW_HEIGHT as f32);
        let mut target = body.pos() - view / 2.0 + FOCUS_OFFSET;

        if target.x < bounds.min_x as f32 {
            target.x = bounds.min_x as f32;
        }
        if target.x + view.x > bounds.max_x as f32 {
            target.x = bounds.max_x as f32 - view.x;
        }
        if target.y + view.y > bounds.floor_y as f32 {
            target.y = bounds.floor_y as f32 - view.y;
        }

        if !focus.snapped {
            focus.offset = target;
            focus.snapped = true;
        }
        if !status.dead {
            let delta = (target - focus.offset) / tuning.camera_smoothing;
            focus.offset += delta;
        }
    }
}
