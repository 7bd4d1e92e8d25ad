//! Core domain: app states, camera setup, and session controls.

use bevy::camera::ScalingMode;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

/// Logical viewport, in map pixels. Drives both the projection and the
/// camera-local tile window used for collision candidates.
pub const VIEW_WIDTH: i32 = 480;
pub const VIEW_HEIGHT: i32 = 270;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    /// World and attribute files are being read.
    #[default]
    Loading,
    Playing,
    Paused,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, (toggle_pause, quit_on_key));
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::from(OrthographicProjection {
            scaling_mode: ScalingMode::Fixed {
                width: VIEW_WIDTH as f32,
                height: VIEW_HEIGHT as f32,
            },
            ..OrthographicProjection::default_2d()
        }),
    ));
}

fn toggle_pause(
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if !keyboard.just_pressed(KeyCode::Escape) {
        return;
    }
    match state.get() {
        GameState::Playing => next_state.set(GameState::Paused),
        GameState::Paused => next_state.set(GameState::Playing),
        GameState::Loading => {}
    }
}

fn quit_on_key(keyboard: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keyboard.just_pressed(KeyCode::F1) {
        exit.write(AppExit::Success);
    }
}
