//! Presentation layer: colored quads for tiles and actors.
//!
//! The simulation runs in map space with y growing downward; everything here
//! negates y into Bevy's y-up space. No simulation state is written.

use bevy::prelude::*;

use crate::core::{GameState, VIEW_HEIGHT, VIEW_WIDTH};
use crate::movement::{CameraFocus, Pose};
use crate::physics::{PhysicsBody, TILE_SIZE};
use crate::sprites::{
    ActorAnimation, AnimationLibrary, PLAYER_JUMP_IMAGE, PLAYER_RUN, PLAYER_SPIN_IMAGE,
};
use crate::world::{TileAttributeIndex, WorldMap};

/// Fixed world-space anchor for entities that have no physics body
/// (one-shot effects). `pos` is the top-left corner in map space.
#[derive(Component, Debug)]
pub struct WorldAnchor {
    pub pos: Vec2,
    pub size: Vec2,
}

#[derive(Component, Debug)]
struct TileQuad;

pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::srgb_u8(0, 230, 255)))
            .add_systems(OnEnter(GameState::Playing), spawn_tile_quads)
            .add_systems(
                Update,
                (sync_bodies, sync_anchors, sync_camera)
                    .run_if(not(in_state(GameState::Loading))),
            );
    }
}

/// Center of a map-space rectangle, converted to Bevy space.
fn render_translation(top_left: Vec2, size: Vec2, z: f32) -> Vec3 {
    Vec3::new(
        top_left.x + size.x / 2.0,
        -(top_left.y + size.y / 2.0),
        z,
    )
}

/// Deterministic per-tileset tint so distinct tilesets read apart without
/// decoded atlas art.
fn tileset_color(tileset: &str) -> Color {
    match tileset {
        "spawn" => return Color::srgba(0.0, 0.0, 0.0, 0.0),
        "finish" => return Color::srgba(0.0, 0.0, 0.0, 0.0),
        _ => {}
    }
    let hash: u32 = tileset
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32));
    Color::hsl((hash % 360) as f32, 0.45, 0.4)
}

fn spawn_tile_quads(
    mut commands: Commands,
    map: Res<WorldMap>,
    attributes: Res<TileAttributeIndex>,
    existing: Query<Entity, With<TileQuad>>,
) {
    // Re-entering Playing after a pause must not duplicate the world.
    if !existing.is_empty() {
        return;
    }

    let mut spawned = 0usize;
    for (pos, placements) in map.cells() {
        for placement in placements {
            let attrs = attributes.get(&placement.tileset, placement.tile);
            if attrs.invisible {
                continue;
            }
            let top_left = (pos * TILE_SIZE + attrs.offset).as_vec2();
            let size = Vec2::splat(TILE_SIZE as f32);
            commands.spawn((
                TileQuad,
                Sprite {
                    color: tileset_color(&placement.tileset),
                    custom_size: Some(size),
                    ..default()
                },
                Transform::from_translation(render_translation(
                    top_left,
                    size,
                    placement.depth as f32,
                )),
            ));
            spawned += 1;
        }
    }
    info!("spawned {} tile quads", spawned);
}

/// Player-ish pose colors per animation key family; a stand-in for atlas
/// frames, which are out of scope.
fn frame_color(key: &str) -> Color {
    if key.starts_with(PLAYER_RUN) {
        Color::srgb(0.85, 0.95, 1.0)
    } else if key == PLAYER_SPIN_IMAGE {
        Color::srgb(1.0, 0.8, 0.9)
    } else if key == PLAYER_JUMP_IMAGE {
        Color::srgb(0.8, 0.9, 1.0)
    } else {
        Color::srgb(0.9, 0.9, 0.9)
    }
}

fn sync_bodies(
    library: Res<AnimationLibrary>,
    mut bodies: Query<(
        &PhysicsBody,
        &mut Transform,
        Option<&Pose>,
        Option<&ActorAnimation>,
        &mut Sprite,
    )>,
) {
    for (body, mut transform, pose, animation, mut sprite) in &mut bodies {
        let rect = body.rect();
        transform.translation = render_translation(
            Vec2::new(rect.x as f32, rect.y as f32),
            Vec2::new(rect.w as f32, rect.h as f32),
            10.0,
        );
        if let Some(pose) = pose {
            transform.rotation = Quat::from_rotation_z(pose.rotation.to_radians());
            sprite.flip_x = pose.flip;
        }
        if let Some(animation) = animation
            && let Some(key) = animation.current_key(&library)
        {
            sprite.color = frame_color(key);
        }
    }
}

fn sync_anchors(mut anchors: Query<(&WorldAnchor, &mut Transform)>) {
    for (anchor, mut transform) in &mut anchors {
        transform.translation = render_translation(anchor.pos, anchor.size, 20.0);
    }
}

fn sync_camera(
    focus: Res<CameraFocus>,
    mut cameras: Query<&mut Transform, With<Camera2d>>,
) {
    let view = Vec2::new(VIEW_WIDTH as f32, VIEW_HEIGHT as f32);
    for mut transform in &mut cameras {
        // The focus offset is the viewport's top-left in map space.
        let center = focus.offset.as_ivec2().as_vec2() + view / 2.0;
        transform.translation = Vec3::new(center.x, -center.y, transform.translation.z);
    }
}
