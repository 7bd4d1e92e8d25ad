//! Separate-axis sweep-and-clamp collision resolution.

use bevy::prelude::*;

/// Side length of one grid cell, in map pixels.
pub const TILE_SIZE: i32 = 20;

/// Integer rectangle in map space (y down).
///
/// Overlap uses exclusive edges: rectangles that merely touch do not collide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl PixelRect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn set_left(&mut self, left: i32) {
        self.x = left;
    }

    pub fn set_right(&mut self, right: i32) {
        self.x = right - self.w;
    }

    pub fn set_top(&mut self, top: i32) {
        self.y = top;
    }

    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.h;
    }

    pub fn overlaps(&self, other: &PixelRect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Which sides of the box made contact during one `resolve` call.
///
/// All flags reset at the start of every call. `slant_bottom` is an
/// independent bit; callers must not assume it is exclusive with `bottom`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionFlags {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
    pub slant_bottom: bool,
}

/// Slope direction of a ramp tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slope {
    /// Floor rises toward the cell's right edge.
    RisingRight,
    /// Floor rises toward the cell's left edge.
    RisingLeft,
}

/// One diagonal-floor tile occupying a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ramp {
    pub x: i32,
    pub y: i32,
    pub slope: Slope,
}

impl Ramp {
    pub fn new(x: i32, y: i32, slope: Slope) -> Self {
        Self { x, y, slope }
    }

    pub fn cell(&self) -> PixelRect {
        PixelRect::new(self.x, self.y, TILE_SIZE, TILE_SIZE)
    }
}

fn hit_list(rect: &PixelRect, solids: &[PixelRect]) -> Vec<PixelRect> {
    solids.iter().filter(|s| rect.overlaps(s)).copied().collect()
}

/// Sweeps `rect` by `movement` against `solids` and `ramps`, clamping the
/// horizontal axis fully before the vertical axis, then resolving ramps.
///
/// The axis ordering is part of the contract: a diagonal move into an inside
/// corner resolves x first, so corner cases favor horizontal resolution.
/// Zero displacement on an axis never clamps, even if the box already
/// overlaps a solid; floor contact is therefore re-acquired one frame late
/// after the vertical displacement resumes.
///
/// Ramps are each evaluated with no early exit; when several ramps claim the
/// box, the last one in `ramps` wins. That ordering comes from the caller.
pub fn resolve(
    pos: &mut Vec2,
    rect: &mut PixelRect,
    movement: Vec2,
    solids: &[PixelRect],
    ramps: &[Ramp],
) -> CollisionFlags {
    let mut flags = CollisionFlags::default();

    pos.x += movement.x;
    rect.x = pos.x as i32;
    for block in hit_list(rect, solids) {
        if movement.x > 0.0 {
            rect.set_right(block.left());
            flags.right = true;
        } else if movement.x < 0.0 {
            rect.set_left(block.right());
            flags.left = true;
        }
        pos.x = rect.x as f32;
    }

    pos.y += movement.y;
    rect.y = pos.y as i32;
    for block in hit_list(rect, solids) {
        if movement.y > 0.0 {
            rect.set_bottom(block.top());
            flags.bottom = true;
        } else if movement.y < 0.0 {
            rect.set_top(block.bottom());
            flags.top = true;
        }
        pos.y = rect.y as f32;
    }

    for ramp in ramps {
        if !rect.overlaps(&ramp.cell()) {
            continue;
        }
        // Horizontal intrusion into the cell, measured from the rising side.
        let intrusion = match ramp.slope {
            Slope::RisingRight => rect.right() - ramp.x,
            Slope::RisingLeft => ramp.x + TILE_SIZE - rect.left(),
        };
        if intrusion + (rect.bottom() - ramp.y) > TILE_SIZE {
            rect.set_bottom(ramp.y + TILE_SIZE - intrusion);
            pos.y = rect.y as f32;
            flags.slant_bottom = true;
        }
    }

    flags
}
