//! Sprites domain: animation playback and effect spawning.

mod animation;
mod effects;


pub use animation::{
    ActorAnimation, AnimationLibrary, AnimationSequence, FX_JUMP, FX_TURN, PLAYER_IDLE,
    PLAYER_JUMP_IMAGE, PLAYER_RUN, PLAYER_SPIN_IMAGE,
};
pub use effects::{EffectAnim, EffectKind, SpawnEffect};

use bevy::prelude::*;

use crate::core::GameState;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AnimationLibrary>()
            .add_message::<SpawnEffect>()
            .add_systems(Startup, animation::build_library)
            .add_systems(
                FixedUpdate,
                (effects::handle_effect_requests, effects::advance_effects)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
