//! Sprites domain: one-shot effect animations (turn and jump puffs).

use bevy::ecs::message::{Message, MessageReader};
use bevy::prelude::*;

use crate::movement::Player;
use crate::physics::PhysicsBody;
use crate::render::WorldAnchor;

use super::animation::{AnimationLibrary, FX_JUMP, FX_TURN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    Turn,
    Jump,
}

impl EffectKind {
    fn sequence_id(self) -> &'static str {
        match self {
            EffectKind::Turn => FX_TURN,
            EffectKind::Jump => FX_JUMP,
        }
    }
}

/// Request to spawn an effect centered on the player.
#[derive(Debug)]
pub struct SpawnEffect {
    pub kind: EffectKind,
    pub flip: bool,
}

impl Message for SpawnEffect {}

/// A playing effect; despawned when its sequence runs out.
#[derive(Component, Debug)]
pub struct EffectAnim {
    pub sequence: String,
    pub frame: i32,
    pub flip: bool,
}

/// Offset from the player's top-left to the effect anchor point.
const EFFECT_OFFSET: Vec2 = Vec2::new(8.0, 2.0);
const EFFECT_SIZE: Vec2 = Vec2::new(16.0, 16.0);

pub(crate) fn handle_effect_requests(
    mut commands: Commands,
    mut requests: MessageReader<SpawnEffect>,
    players: Query<&PhysicsBody, With<Player>>,
) {
    for request in requests.read() {
        for body in &players {
            let anchor = body.pos() + EFFECT_OFFSET - EFFECT_SIZE / 2.0;
            commands.spawn((
                EffectAnim {
                    sequence: request.kind.sequence_id().to_string(),
                    frame: 0,
                    flip: request.flip,
                },
                WorldAnchor {
                    pos: anchor,
                    size: EFFECT_SIZE,
                },
                Sprite {
                    color: Color::srgba(1.0, 1.0, 1.0, 0.8),
                    custom_size: Some(EFFECT_SIZE),
                    flip_x: request.flip,
                    ..default()
                },
                Transform::default(),
            ));
        }
    }
}

pub(crate) fn advance_effects(
    mut commands: Commands,
    library: Res<AnimationLibrary>,
    mut effects: Query<(Entity, &mut EffectAnim)>,
) {
    for (entity, mut effect) in &mut effects {
        effect.frame += 1;
        let finished = library
            .get(&effect.sequence)
            .is_none_or(|sequence| effect.frame >= sequence.len());
        if finished {
            commands.entity(entity).despawn();
        }
    }
}
