//! Movement domain: the fixed-step frame controller driving one actor
//! through momentum integration, collision resolution, and the resulting
//! state transitions.

mod bootstrap;
mod components;
mod resources;
mod systems;


pub use components::{
    FinishMarker, FrameMovement, LastCollision, Momentum, Player, PlayerStatus, Pose,
};
pub use resources::{CameraFocus, MovementInput, MovementTuning};

use bevy::prelude::*;

use crate::core::GameState;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .init_resource::<CameraFocus>()
            .add_systems(OnEnter(GameState::Playing), bootstrap::spawn_actors)
            .add_systems(
                Update,
                systems::sample_input.run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                FixedUpdate,
                (
                    systems::camera_follow,
                    systems::begin_jump,
                    systems::integrate_momentum,
                    systems::resolve_player_collisions,
                    systems::update_pose,
                    systems::apply_world_bounds,
                    systems::check_finish,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
