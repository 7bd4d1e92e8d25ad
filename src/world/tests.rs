//! World domain: tests for the attribute parser, map derivation, and the
//! camera-local terrain window.

use std::collections::HashMap;

use bevy::prelude::*;

use super::data::{TileAttributeIndex, TileAttributes, TileCell, WorldMap};
use super::loader::parse_attribute_line;
use crate::physics::{PixelRect, Ramp, Slope, TILE_SIZE};

// -----------------------------------------------------------------------------
// Attribute parsing
// -----------------------------------------------------------------------------

#[test]
fn test_parse_ramp_attribute() {
    let (tileset, tile, attrs) = parse_attribute_line("tileset_grass:1=ramp:1;").unwrap();
    assert_eq!(tileset, "tileset_grass");
    assert_eq!(tile, 1);
    assert!(attrs.solid);
    assert_eq!(attrs.slope, Some(Slope::RisingRight));

    let (_, _, attrs) = parse_attribute_line("tileset_grass:2=ramp:2;").unwrap();
    assert_eq!(attrs.slope, Some(Slope::RisingLeft));
}

#[test]
fn test_parse_marker_attributes() {
    let (_, _, attrs) = parse_attribute_line("spawn:0=no_collide:1;invisible:1;").unwrap();
    assert!(!attrs.solid);
    assert!(attrs.invisible);
    assert_eq!(attrs.slope, None);
}

#[test]
fn test_parse_render_offsets() {
    let (_, _, attrs) = parse_attribute_line("deco:2=offset_x:3;offset_y:-5;").unwrap();
    assert_eq!(attrs.offset, IVec2::new(3, -5));
    assert!(attrs.solid);
}

#[test]
fn test_parse_rejects_malformed_lines() {
    assert!(parse_attribute_line("no equals sign here").is_err());
    assert!(parse_attribute_line("grass:x=ramp:1;").is_err());
    assert!(parse_attribute_line("grass:0=ramp:abc;").is_err());
    assert!(parse_attribute_line("grass:0=ramp:3;").is_err());
}

#[test]
fn test_attribute_lookup_miss_yields_defaults() {
    let index = TileAttributeIndex::default();
    let attrs = index.get("never_loaded", 7);
    assert_eq!(attrs, TileAttributes::default());
    assert!(attrs.solid);
}

// -----------------------------------------------------------------------------
// Map derivation
// -----------------------------------------------------------------------------

fn tiny_world() -> WorldMap {
    let json = r#"{
        "0;2": {"pos": [0, 2], "tiles": [{"tileset": "tileset_grass", "tile": 0, "depth": 0}]},
        "1;2": {"pos": [1, 2], "tiles": [{"tileset": "tileset_grass", "tile": 0, "depth": 0}]},
        "4;2": {"pos": [4, 2], "tiles": [{"tileset": "tileset_grass", "tile": 0, "depth": 0}]},
        "1;1": {"pos": [1, 1], "tiles": [{"tileset": "spawn", "tile": 0, "depth": 0}]},
        "3;1": {"pos": [3, 1], "tiles": [{"tileset": "finish", "tile": 0, "depth": 0}]}
    }"#;
    let raw: HashMap<String, TileCell> = serde_json::from_str(json).unwrap();
    WorldMap::from_cells(raw)
}

#[test]
fn test_map_derives_markers_and_bounds() {
    let map = tiny_world();
    assert_eq!(map.cell_count(), 5);
    assert_eq!(map.spawn, IVec2::new(1, 1));
    assert_eq!(map.finish, IVec2::new(3, 1));
    // Bounds carry one tile of margin on the floor and right edges.
    assert_eq!(map.bounds.min_x, 0);
    assert_eq!(map.bounds.floor_y, 3 * TILE_SIZE);
    assert_eq!(map.bounds.max_x, 5 * TILE_SIZE);
}

// -----------------------------------------------------------------------------
// Terrain window
// -----------------------------------------------------------------------------

#[test]
fn test_terrain_near_splits_solids_and_ramps() {
    let json = r#"{
        "0;0": {"pos": [0, 0], "tiles": [{"tileset": "tileset_grass", "tile": 0, "depth": 0}]},
        "1;0": {"pos": [1, 0], "tiles": [{"tileset": "tileset_grass", "tile": 1, "depth": 0}]},
        "2;0": {"pos": [2, 0], "tiles": [{"tileset": "spawn", "tile": 0, "depth": 0}]}
    }"#;
    let raw: HashMap<String, TileCell> = serde_json::from_str(json).unwrap();
    let map = WorldMap::from_cells(raw);

    let mut attributes = TileAttributeIndex::default();
    attributes.insert(
        "tileset_grass",
        1,
        TileAttributes {
            slope: Some(Slope::RisingRight),
            ..default()
        },
    );
    attributes.insert(
        "spawn",
        0,
        TileAttributes {
            solid: false,
            invisible: true,
            ..default()
        },
    );

    let window = map.terrain_near(IVec2::ZERO, &attributes);

    assert_eq!(window.solids, vec![PixelRect::new(0, 0, 20, 20)]);
    assert_eq!(window.ramps, vec![Ramp::new(20, 0, Slope::RisingRight)]);
}

#[test]
fn test_terrain_near_is_camera_local() {
    let json = r#"{
        "0;0": {"pos": [0, 0], "tiles": [{"tileset": "tileset_grass", "tile": 0, "depth": 0}]},
        "40;0": {"pos": [40, 0], "tiles": [{"tileset": "tileset_grass", "tile": 0, "depth": 0}]}
    }"#;
    let raw: HashMap<String, TileCell> = serde_json::from_str(json).unwrap();
    let map = WorldMap::from_cells(raw);
    let attributes = TileAttributeIndex::default();

    // Camera at the origin: the window spans columns -4..25, so the tile at
    // column 40 is not a candidate.
    let window = map.terrain_near(IVec2::ZERO, &attributes);
    assert_eq!(window.solids, vec![PixelRect::new(0, 0, 20, 20)]);

    // Scrolled right, the far tile enters the window and the near one drops.
    let window = map.terrain_near(IVec2::new(40 * TILE_SIZE, 0), &attributes);
    assert_eq!(window.solids, vec![PixelRect::new(40 * TILE_SIZE, 0, 20, 20)]);
}
