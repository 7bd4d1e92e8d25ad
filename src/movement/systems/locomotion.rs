//! Movement domain: jump handling, momentum integration, pose selection,
//! world bounds, and the finish trigger.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::{
    FinishMarker, FrameMovement, Momentum, MovementInput, MovementTuning, Player, PlayerStatus,
    Pose,
};
use crate::physics::{PhysicsBody, TILE_SIZE};
use crate::sprites::{
    ActorAnimation, AnimationLibrary, EffectKind, PLAYER_IDLE, PLAYER_JUMP_IMAGE, PLAYER_RUN,
    PLAYER_SPIN_IMAGE, SpawnEffect,
};
use crate::world::WorldMap;

/// Offset from the spawn tile's top-left to the player's top-left.
pub(crate) const PLAYER_SPAWN_OFFSET: Vec2 = Vec2::new(2.0, -7.0);

/// Right-border clearance, a fixed value rather than the body width.
const BORDER_MARGIN: f32 = 15.0;

/// Steps `value` toward zero by `step`, snapping to zero inside the band.
pub(crate) fn decay_toward_zero(value: f32, step: f32) -> f32 {
    if value > step {
        value - step
    } else if value < -step {
        value + step
    } else {
        0.0
    }
}

/// Gravity with the terminal clamp.
pub(crate) fn apply_gravity(vertical: f32, tuning: &MovementTuning) -> f32 {
    (vertical + tuning.gravity).min(tuning.terminal_velocity)
}

/// Consumes one jump charge if any remain. Depleting the last charge arms
/// the spin: the spin image takes over and the timer's sign follows facing.
/// Returns whether a jump happened.
pub(crate) fn try_jump(
    status: &mut PlayerStatus,
    momentum: &mut Momentum,
    pose: &Pose,
    animation: &mut ActorAnimation,
    tuning: &MovementTuning,
) -> bool {
    if status.dead || status.jumps == 0 {
        return false;
    }
    status.jumps -= 1;
    momentum.0.y = tuning.jump_velocity;
    if status.jumps == 0 {
        animation.set_image(PLAYER_SPIN_IMAGE);
        status.spin_timer = if pose.flip {
            -tuning.spin_frames
        } else {
            tuning.spin_frames
        };
    }
    true
}

/// Marks the player dead and applies the launch impulse, exactly once.
pub(crate) fn enter_death(
    status: &mut PlayerStatus,
    momentum: &mut Momentum,
    tuning: &MovementTuning,
) {
    if status.dead {
        return;
    }
    status.dead = true;
    momentum.0 = Vec2::from(tuning.death_impulse);
}

pub(crate) fn begin_jump(
    mut input: ResMut<MovementInput>,
    tuning: Res<MovementTuning>,
    mut effects: MessageWriter<SpawnEffect>,
    mut players: Query<
        (&mut PlayerStatus, &mut Momentum, &Pose, &mut ActorAnimation),
        With<Player>,
    >,
) {
    if !input.jump_pressed {
        return;
    }
    input.jump_pressed = false;

    for (mut status, mut momentum, pose, mut animation) in &mut players {
        if try_jump(&mut status, &mut momentum, pose, &mut animation, &tuning) {
            effects.write(SpawnEffect {
                kind: EffectKind::Jump,
                flip: false,
            });
            debug!("jump: charges left {}", status.jumps);
        }
    }
}

/// Builds this tick's displacement from momentum and held input, then
/// integrates friction and gravity. The gravity increment lands after the
/// displacement is built, so it first moves the body next tick.
pub(crate) fn integrate_momentum(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut players: Query<(&PlayerStatus, &mut Momentum, &mut FrameMovement), With<Player>>,
) {
    for (status, mut momentum, mut movement) in &mut players {
        movement.0 = momentum.0;

        if !status.dead {
            momentum.0.x = decay_toward_zero(momentum.0.x, tuning.friction);
            if momentum.0.x.abs() < tuning.run_speed {
                if input.right {
                    movement.0.x += tuning.run_speed;
                }
                if input.left {
                    movement.0.x -= tuning.run_speed;
                }
            }
        }

        momentum.0.y = apply_gravity(momentum.0.y, &tuning);
    }
}

/// Chooses the pose for this tick: run/idle sequence by horizontal intent,
/// the airborne image after enough air time, flip by movement sign, and the
/// spin/death rotations.
pub(crate) fn update_pose(
    tuning: Res<MovementTuning>,
    library: Res<AnimationLibrary>,
    mut players: Query<
        (&FrameMovement, &mut PlayerStatus, &mut Pose, &mut ActorAnimation),
        With<Player>,
    >,
) {
    for (movement, mut status, mut pose, mut animation) in &mut players {
        if movement.0.x != 0.0 {
            animation.play(PLAYER_RUN);
        } else {
            animation.play(PLAYER_IDLE);
        }
        if status.air_time > tuning.airborne_after {
            animation.clear_sequence();
        }

        if movement.0.x < 0.0 {
            pose.flip = true;
        } else if movement.0.x > 0.0 {
            pose.flip = false;
        }

        if status.spin_timer > 0 {
            status.spin_timer -= 1;
            pose.rotation -= tuning.spin_step;
        } else if status.spin_timer < 0 {
            status.spin_timer += 1;
            pose.rotation += tuning.spin_step;
        } else {
            animation.set_image(PLAYER_JUMP_IMAGE);
        }

        animation.change_frame(1, &library);

        if status.dead {
            pose.rotation -= tuning.spin_step;
        }
    }
}

/// Kill plane and horizontal border clamping.
pub(crate) fn apply_world_bounds(
    map: Res<WorldMap>,
    tuning: Res<MovementTuning>,
    mut players: Query<(&mut PhysicsBody, &mut PlayerStatus, &mut Momentum), With<Player>>,
) {
    for (mut body, mut status, mut momentum) in &mut players {
        let bounds = map.bounds;

        if body.pos().y > bounds.floor_y as f32 && !status.dead {
            enter_death(&mut status, &mut momentum, &tuning);
            info!("player fell below the floor at {:?}", body.pos());
        }

        if body.pos().x < bounds.min_x as f32 {
            body.set_x(bounds.min_x as f32);
        }
        if body.pos().x + BORDER_MARGIN > bounds.max_x as f32 {
            body.set_x(bounds.max_x as f32 - BORDER_MARGIN);
        }
    }
}

/// Touching the finish teleports the player back to spawn with cleared
/// momentum.
pub(crate) fn check_finish(
    map: Res<WorldMap>,
    mut players: Query<(&mut PhysicsBody, &mut Momentum), With<Player>>,
    finishes: Query<&PhysicsBody, (With<FinishMarker>, Without<Player>)>,
) {
    for (mut body, mut momentum) in &mut players {
        for finish in &finishes {
            if body.rect().overlaps(&finish.rect()) {
                let spawn = (map.spawn * TILE_SIZE).as_vec2() + PLAYER_SPAWN_OFFSET;
                body.set_position(spawn.x, spawn.y);
                momentum.0 = Vec2::ZERO;
                info!("finish reached; respawning");
            }
        }
    }
}
