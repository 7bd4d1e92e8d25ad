//! Movement domain: tuning, input, and camera resources.

use bevy::prelude::*;
use serde::Deserialize;

/// Per-tick movement constants. Defaults match the shipped feel; an
/// `assets/tuning.ron` file overrides the whole set at startup.
#[derive(Resource, Debug, Clone, Deserialize)]
pub struct MovementTuning {
    /// Displacement added per tick while a direction is held.
    pub run_speed: f32,
    /// Step by which horizontal momentum decays toward zero each tick.
    pub friction: f32,
    /// Vertical momentum gained per tick.
    pub gravity: f32,
    /// Terminal fall speed.
    pub terminal_velocity: f32,
    /// Vertical momentum applied on jump (negative is up).
    pub jump_velocity: f32,
    /// Jump charges restored on ground or ramp contact.
    pub max_jumps: u8,
    /// Frames the double-jump spin lasts.
    pub spin_frames: i32,
    /// Degrees of rotation per spin frame.
    pub spin_step: f32,
    /// Momentum applied once when crossing the kill plane.
    pub death_impulse: [f32; 2],
    /// Air-time frames after which the airborne image replaces the run/idle
    /// sequences.
    pub airborne_after: u32,
    /// Camera follow divisor; larger is lazier.
    pub camera_smoothing: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            run_speed: 4.0,
            friction: 0.25,
            gravity: 0.45,
            terminal_velocity: 7.0,
            jump_velocity: -6.0,
            max_jumps: 2,
            spin_frames: 15,
            spin_step: 24.0,
            death_impulse: [3.0, -8.0],
            airborne_after: 6,
            camera_smoothing: 13.0,
        }
    }
}

/// Boolean movement intents sampled from the keyboard each render frame.
/// `jump_pressed` is edge-latched and cleared by the fixed-step consumer so
/// a press between ticks is never lost.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub left: bool,
    pub right: bool,
    pub jump_pressed: bool,
}

/// Camera scroll offset in map space (top-left of the viewport). Snaps to
/// the follow target on the first simulated frame, then eases toward it.
#[derive(Resource, Debug, Default)]
pub struct CameraFocus {
    pub offset: Vec2,
    pub snapped: bool,
}
