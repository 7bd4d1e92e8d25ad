//! Movement/collision core: swept AABB resolution against static tile
//! geometry, with special-cased ramp tiles.
//!
//! Everything in here runs in map pixel space, where y grows downward and a
//! tile is `TILE_SIZE` units on a side. The float position is authoritative;
//! the integer rectangle is a derived view that is re-synchronized from the
//! float position before every pass.

mod body;
mod resolver;

#[cfg(test)]
mod tests;

pub use body::{Hitbox, PhysicsBody};
pub use resolver::{CollisionFlags, PixelRect, Ramp, Slope, TILE_SIZE, resolve};
