//! Movement domain: the per-tick collision pass and its flag state machine.

use bevy::prelude::*;

use crate::movement::{
    CameraFocus, FrameMovement, LastCollision, Momentum, MovementTuning, Player, PlayerStatus,
    Pose,
};
use crate::physics::{CollisionFlags, PhysicsBody};
use crate::world::{TileAttributeIndex, WorldMap};

/// Interprets one tick's collision flags. Ground contact refills jumps,
/// zeroes air time and rotation, and kills vertical momentum; ramp contact
/// does the same except vertical momentum is left alone, which keeps slides
/// smooth. Anything else counts as air time.
pub(crate) fn apply_collision_flags(
    flags: &CollisionFlags,
    status: &mut PlayerStatus,
    momentum: &mut Momentum,
    pose: &mut Pose,
    tuning: &MovementTuning,
) {
    if flags.bottom {
        status.jumps = tuning.max_jumps;
        momentum.0.y = 0.0;
        status.air_time = 0;
        pose.rotation = 0.0;
    } else if flags.slant_bottom {
        status.jumps = tuning.max_jumps;
        status.air_time = 0;
        pose.rotation = 0.0;
    } else {
        status.air_time += 1;
    }
}

/// Moves the player through the resolver against the camera-local terrain.
/// A dead player collides with nothing and keeps drifting under gravity.
pub(crate) fn resolve_player_collisions(
    map: Res<WorldMap>,
    attributes: Res<TileAttributeIndex>,
    focus: Res<CameraFocus>,
    tuning: Res<MovementTuning>,
    mut players: Query<
        (
            &mut PhysicsBody,
            &FrameMovement,
            &mut PlayerStatus,
            &mut Momentum,
            &mut Pose,
            &mut LastCollision,
        ),
        With<Player>,
    >,
) {
    let window = map.terrain_near(focus.offset.as_ivec2(), &attributes);

    for (mut body, movement, mut status, mut momentum, mut pose, mut last) in &mut players {
        let flags = if status.dead {
            body.step(movement.0, &[], &[])
        } else {
            body.step(movement.0, &window.solids, &window.ramps)
        };

        apply_collision_flags(&flags, &mut status, &mut momentum, &mut pose, &tuning);
        last.0 = flags;
    }
}
