//! Physics core: tests for the sweep-and-clamp resolver and the body.

use bevy::prelude::*;

use super::{CollisionFlags, Hitbox, PhysicsBody, PixelRect, Ramp, Slope, TILE_SIZE, resolve};

fn tile(x: i32, y: i32) -> PixelRect {
    PixelRect::new(x, y, TILE_SIZE, TILE_SIZE)
}

// -----------------------------------------------------------------------------
// PixelRect tests
// -----------------------------------------------------------------------------

#[test]
fn test_rect_touching_edges_do_not_overlap() {
    let a = PixelRect::new(0, 0, 20, 20);
    let b = PixelRect::new(20, 0, 20, 20);
    let c = PixelRect::new(0, 20, 20, 20);
    assert!(!a.overlaps(&b));
    assert!(!a.overlaps(&c));
    assert!(a.overlaps(&PixelRect::new(19, 19, 20, 20)));
}

#[test]
fn test_rect_edge_setters() {
    let mut r = PixelRect::new(5, 5, 12, 15);
    r.set_right(100);
    assert_eq!(r.x, 88);
    r.set_bottom(100);
    assert_eq!(r.y, 85);
    r.set_left(3);
    assert_eq!(r.right(), 15);
    r.set_top(7);
    assert_eq!(r.bottom(), 22);
}

// -----------------------------------------------------------------------------
// Resolver: axis passes
// -----------------------------------------------------------------------------

#[test]
fn test_pure_horizontal_move_never_sets_vertical_flags() {
    // Solid directly below the box: a horizontal slide across it must not
    // report any vertical contact.
    let mut pos = Vec2::new(0.0, 10.0);
    let mut rect = PixelRect::new(0, 10, 10, 10);
    let solids = [tile(0, 20)];

    let flags = resolve(&mut pos, &mut rect, Vec2::new(3.0, 0.0), &solids, &[]);

    assert!(!flags.top);
    assert!(!flags.bottom);
    assert!(!flags.slant_bottom);
    assert_eq!(pos, Vec2::new(3.0, 10.0));
}

#[test]
fn test_rightward_clamp_against_solid() {
    let mut pos = Vec2::new(70.0, 0.0);
    let mut rect = PixelRect::new(70, 0, 10, 10);
    let solids = [tile(100, 0)];

    let flags = resolve(&mut pos, &mut rect, Vec2::new(40.0, 0.0), &solids, &[]);

    assert!(flags.right);
    assert!(!flags.left);
    assert_eq!(rect.right(), 100);
    assert_eq!(rect.x, 90);
    // Float position resynchronized from the clamped integer rectangle.
    assert_eq!(pos.x, 90.0);
}

#[test]
fn test_leftward_clamp_against_solid() {
    let mut pos = Vec2::new(130.0, 0.0);
    let mut rect = PixelRect::new(130, 0, 10, 10);
    let solids = [tile(100, 0)];

    let flags = resolve(&mut pos, &mut rect, Vec2::new(-40.0, 0.0), &solids, &[]);

    assert!(flags.left);
    assert_eq!(rect.left(), 120);
    assert_eq!(pos.x, 120.0);
}

#[test]
fn test_horizontal_resolves_before_vertical() {
    // Box falling down-right past a ledge corner at (20, 20). Resolving x
    // first leaves the box clear of the tile horizontally mid-pass, so only
    // the vertical clamp lands. The reverse order would clamp x to 10 and
    // leave y at 18.
    let mut pos = Vec2::new(5.0, 8.0);
    let mut rect = PixelRect::new(5, 8, 10, 10);
    let solids = [tile(20, 20)];

    let flags = resolve(&mut pos, &mut rect, Vec2::new(10.0, 10.0), &solids, &[]);

    assert!(!flags.right);
    assert!(flags.bottom);
    assert_eq!(pos, Vec2::new(15.0, 10.0));
    assert_eq!(rect.bottom(), 20);
}

#[test]
fn test_diagonal_move_into_inside_corner_clamps_both_axes() {
    // L-shaped pair: a wall to the right and a floor below. The horizontal
    // pass clamps against the wall first, then the vertical pass lands the
    // box on the floor.
    let mut pos = Vec2::new(5.0, 5.0);
    let mut rect = PixelRect::new(5, 5, 10, 10);
    let solids = [tile(20, 0), tile(0, 20)];

    let flags = resolve(&mut pos, &mut rect, Vec2::new(10.0, 10.0), &solids, &[]);

    assert!(flags.right);
    assert!(flags.bottom);
    assert_eq!(pos, Vec2::new(10.0, 10.0));
    assert_eq!(rect.right(), 20);
    assert_eq!(rect.bottom(), 20);
}

#[test]
fn test_zero_displacement_never_collides() {
    // Already overlapping at rest: no push-out, no flags. The only side
    // effect is the float position truncating to the derived rectangle.
    let mut pos = Vec2::new(5.7, 5.3);
    let mut rect = PixelRect::new(5, 5, 10, 10);
    let solids = [tile(0, 0)];

    let flags = resolve(&mut pos, &mut rect, Vec2::ZERO, &solids, &[]);

    assert_eq!(flags, CollisionFlags::default());
    assert_eq!(pos, Vec2::new(5.0, 5.0));
}

// -----------------------------------------------------------------------------
// Resolver: ramps
// -----------------------------------------------------------------------------

#[test]
fn test_rising_right_ramp_floor_at_cell_midpoint() {
    // Ramp at the origin, box right edge at the cell midpoint: the
    // interpolated floor sits at half the cell height.
    let mut pos = Vec2::new(-2.0, -1.0);
    let mut rect = PixelRect::new(-2, -1, 12, 15);
    let ramps = [Ramp::new(0, 0, Slope::RisingRight)];

    let flags = resolve(&mut pos, &mut rect, Vec2::ZERO, &[], &ramps);

    assert!(flags.slant_bottom);
    assert!(!flags.bottom);
    assert_eq!(rect.bottom(), TILE_SIZE / 2);
    assert_eq!(pos.y, -5.0);
}

#[test]
fn test_rising_left_ramp_mirrors_rising_right() {
    // Left edge at the cell midpoint gives the same floor height as the
    // mirrored case above.
    let mut pos = Vec2::new(10.0, -1.0);
    let mut rect = PixelRect::new(10, -1, 12, 15);
    let ramps = [Ramp::new(0, 0, Slope::RisingLeft)];

    let flags = resolve(&mut pos, &mut rect, Vec2::ZERO, &[], &ramps);

    assert!(flags.slant_bottom);
    assert_eq!(rect.bottom(), TILE_SIZE / 2);
    assert_eq!(pos.y, -5.0);
}

#[test]
fn test_ramp_depth_check_gates_resolution() {
    // Same geometry as the midpoint case but the box floats just above the
    // interpolated floor: intrusion sums to exactly the cell size, which the
    // strict inequality rejects.
    let mut pos = Vec2::new(-2.0, -5.0);
    let mut rect = PixelRect::new(-2, -5, 12, 15);
    let ramps = [Ramp::new(0, 0, Slope::RisingRight)];

    let flags = resolve(&mut pos, &mut rect, Vec2::ZERO, &[], &ramps);

    assert!(!flags.slant_bottom);
    assert_eq!(pos.y, -5.0);
}

#[test]
fn test_last_overlapping_ramp_wins() {
    // Two ramps both claim the box; each is evaluated against the rectangle
    // as left by the previous one, and the later entry overrides.
    let mut pos = Vec2::new(4.0, 10.0);
    let mut rect = PixelRect::new(4, 10, 12, 15);
    let ramps = [
        Ramp::new(0, 0, Slope::RisingRight),
        Ramp::new(0, -10, Slope::RisingRight),
    ];

    let flags = resolve(&mut pos, &mut rect, Vec2::ZERO, &[], &ramps);

    assert!(flags.slant_bottom);
    // First ramp would leave the bottom at 4; the second, processed last,
    // lifts it to -6.
    assert_eq!(rect.bottom(), -6);
    assert_eq!(pos.y, -21.0);
}

// -----------------------------------------------------------------------------
// End-to-end sweep
// -----------------------------------------------------------------------------

#[test]
fn test_diagonal_sweep_into_tile_corner() {
    // Box (12x15) at (95,90), one solid tile at (100,100), displacement
    // (5,5). The horizontal pass lands on x=100 where the columns already
    // overlap, so the right edge clamps to the tile's left edge (x=88).
    // The vertical pass then runs from x=88, where the columns no longer
    // overlap, so y advances freely to 95.
    let mut body = PhysicsBody::new(95.0, 90.0, 12, 15);
    let solids = [tile(100, 100)];

    let flags = body.step(Vec2::new(5.0, 5.0), &solids, &[]);

    assert!(flags.right);
    assert!(!flags.left);
    assert!(!flags.top);
    assert!(!flags.bottom);
    assert!(!flags.slant_bottom);
    assert_eq!(body.pos(), Vec2::new(88.0, 95.0));
    assert_eq!(body.rect(), PixelRect::new(88, 95, 12, 15));
}

// -----------------------------------------------------------------------------
// PhysicsBody tests
// -----------------------------------------------------------------------------

#[test]
fn test_set_position_bypasses_collision() {
    let mut body = PhysicsBody::new(0.0, 0.0, 12, 15);
    body.set_position(42.5, -7.0);
    assert_eq!(body.pos(), Vec2::new(42.5, -7.0));
    assert_eq!(body.rect(), PixelRect::new(42, -7, 12, 15));
}

#[test]
fn test_hitbox_follows_body() {
    let body = PhysicsBody::new(40.0, 60.0, 12, 15).with_hitbox(Hitbox {
        offset_x: 4,
        offset_y: 10,
        w: 7,
        h: 7,
    });
    assert_eq!(body.hitbox(), PixelRect::new(44, 70, 7, 7));
}

#[test]
#[should_panic(expected = "hitbox read before it was configured")]
fn test_hitbox_read_without_setup_panics() {
    let body = PhysicsBody::new(0.0, 0.0, 12, 15);
    let _ = body.hitbox();
}
