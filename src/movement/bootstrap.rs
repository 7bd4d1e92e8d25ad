//! Movement domain: player and finish entity bootstrap.

use bevy::prelude::*;

use crate::movement::systems::locomotion::PLAYER_SPAWN_OFFSET;
use crate::movement::{
    FinishMarker, FrameMovement, LastCollision, Momentum, Player, PlayerStatus, Pose,
};
use crate::physics::{Hitbox, PhysicsBody, TILE_SIZE};
use crate::sprites::{ActorAnimation, PLAYER_IDLE, PLAYER_JUMP_IMAGE};
use crate::world::WorldMap;

const PLAYER_SIZE: (i32, i32) = (12, 15);
const FINISH_OFFSET: Vec2 = Vec2::new(1.0, -6.0);

pub(crate) fn spawn_actors(
    mut commands: Commands,
    map: Res<WorldMap>,
    existing: Query<Entity, With<Player>>,
) {
    // Re-entering Playing after a pause must not respawn.
    if !existing.is_empty() {
        return;
    }

    let spawn = (map.spawn * TILE_SIZE).as_vec2() + PLAYER_SPAWN_OFFSET;
    info!("spawning player at {:?}", spawn);

    commands.spawn((
        Player,
        PhysicsBody::new(spawn.x, spawn.y, PLAYER_SIZE.0, PLAYER_SIZE.1).with_hitbox(Hitbox {
            offset_x: 4,
            offset_y: 10,
            w: 7,
            h: 7,
        }),
        Momentum::default(),
        FrameMovement::default(),
        PlayerStatus::default(),
        Pose::default(),
        LastCollision::default(),
        ActorAnimation::new(PLAYER_IDLE)
            .looping(true)
            .with_image(PLAYER_JUMP_IMAGE),
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(Vec2::new(PLAYER_SIZE.0 as f32, PLAYER_SIZE.1 as f32)),
            ..default()
        },
        Transform::default(),
    ));

    let finish = (map.finish * TILE_SIZE).as_vec2() + FINISH_OFFSET;
    commands.spawn((
        FinishMarker,
        PhysicsBody::new(finish.x, finish.y, TILE_SIZE, TILE_SIZE),
        Sprite {
            color: Color::srgb(0.95, 0.8, 0.3),
            custom_size: Some(Vec2::splat(TILE_SIZE as f32)),
            ..default()
        },
        Transform::default(),
    ));
}
