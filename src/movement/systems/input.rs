//! Movement domain: keyboard sampling into movement intents.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::MovementInput;
use crate::sprites::{EffectKind, SpawnEffect};

pub(crate) fn sample_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut input: ResMut<MovementInput>,
    mut effects: MessageWriter<SpawnEffect>,
) {
    input.right = keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight);
    input.left = keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft);

    // Latched; the fixed-step jump system clears it once consumed.
    if keyboard.just_pressed(KeyCode::Space) {
        input.jump_pressed = true;
    }

    if keyboard.just_pressed(KeyCode::KeyD) || keyboard.just_pressed(KeyCode::ArrowRight) {
        effects.write(SpawnEffect {
            kind: EffectKind::Turn,
            flip: false,
        });
    }
    if keyboard.just_pressed(KeyCode::KeyA) || keyboard.just_pressed(KeyCode::ArrowLeft) {
        effects.write(SpawnEffect {
            kind: EffectKind::Turn,
            flip: true,
        });
    }
}
