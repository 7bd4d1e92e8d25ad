//! Movement domain: system modules for the fixed-step frame controller.

pub(crate) mod camera;
pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod locomotion;

pub(crate) use camera::camera_follow;
pub(crate) use collisions::resolve_player_collisions;
pub(crate) use input::sample_input;
pub(crate) use locomotion::{
    apply_world_bounds, begin_jump, check_finish, integrate_momentum, update_pose,
};
