//! World domain: tile map and attribute data model.

use std::collections::HashMap;

use bevy::prelude::*;
use serde::Deserialize;

use crate::core::{VIEW_HEIGHT, VIEW_WIDTH};
use crate::physics::{PixelRect, Ramp, Slope, TILE_SIZE};

/// One visual layer stacked in a grid cell.
#[derive(Debug, Clone, Deserialize)]
pub struct TilePlacement {
    pub tileset: String,
    pub tile: usize,
    pub depth: i32,
}

/// One entry of the serialized world file.
#[derive(Debug, Clone, Deserialize)]
pub struct TileCell {
    pub pos: [i32; 2],
    pub tiles: Vec<TilePlacement>,
}

/// Immutable per-tile attribute record. Absence of an entry in the index
/// yields this type's default: solid, flat, no offset, visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileAttributes {
    pub solid: bool,
    pub slope: Option<Slope>,
    pub offset: IVec2,
    pub invisible: bool,
}

impl Default for TileAttributes {
    fn default() -> Self {
        Self {
            solid: true,
            slope: None,
            offset: IVec2::ZERO,
            invisible: false,
        }
    }
}

/// Lookup table from (tileset name, tile index) to attributes. Built once at
/// load, read-only afterwards.
#[derive(Resource, Debug, Default)]
pub struct TileAttributeIndex {
    entries: HashMap<String, HashMap<usize, TileAttributes>>,
}

impl TileAttributeIndex {
    pub fn insert(&mut self, tileset: &str, tile: usize, attributes: TileAttributes) {
        self.entries
            .entry(tileset.to_string())
            .or_default()
            .insert(tile, attributes);
    }

    /// Lookup failure is not an error; it yields the default attribute set.
    pub fn get(&self, tileset: &str, tile: usize) -> TileAttributes {
        self.entries
            .get(tileset)
            .and_then(|tiles| tiles.get(&tile))
            .copied()
            .unwrap_or_default()
    }
}

/// Pixel-space world extremes: `floor_y` is the kill-plane threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorldBounds {
    pub min_x: i32,
    pub floor_y: i32,
    pub max_x: i32,
}

/// Solid rectangles and ramp descriptors gathered near the camera for one
/// simulation tick.
#[derive(Debug, Default)]
pub struct TerrainWindow {
    pub solids: Vec<PixelRect>,
    pub ramps: Vec<Ramp>,
}

/// Sparse tile grid plus the spawn/finish markers and bounds derived from it.
/// Built once at level load, read-only for the rest of the process.
#[derive(Resource, Debug)]
pub struct WorldMap {
    cells: HashMap<IVec2, Vec<TilePlacement>>,
    pub spawn: IVec2,
    pub finish: IVec2,
    pub bounds: WorldBounds,
}

impl WorldMap {
    /// Builds the map from the deserialized world file, deriving spawn,
    /// finish, and bounds in one pass over the placements.
    pub fn from_cells(raw: HashMap<String, TileCell>) -> Self {
        let mut cells = HashMap::new();
        let mut spawn = IVec2::ZERO;
        let mut finish = IVec2::ZERO;
        let (mut min_x, mut max_y, mut max_x) = (9999, -9999, -9999);

        for (key, cell) in raw {
            if key.is_empty() {
                continue;
            }
            let pos = IVec2::new(cell.pos[0], cell.pos[1]);
            for placement in &cell.tiles {
                match placement.tileset.as_str() {
                    "spawn" => spawn = pos,
                    "finish" => finish = pos,
                    _ => {}
                }
                min_x = min_x.min(pos.x);
                max_x = max_x.max(pos.x);
                max_y = max_y.max(pos.y);
            }
            cells.insert(pos, cell.tiles);
        }

        Self {
            cells,
            spawn,
            finish,
            bounds: WorldBounds {
                min_x: min_x * TILE_SIZE,
                floor_y: max_y * TILE_SIZE + TILE_SIZE,
                max_x: max_x * TILE_SIZE + TILE_SIZE,
            },
        }
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> impl Iterator<Item = (IVec2, &[TilePlacement])> {
        self.cells.iter().map(|(pos, tiles)| (*pos, tiles.as_slice()))
    }

    /// Collects the camera-local terrain for one tick, visiting the same
    /// tile window the renderer covers (viewport plus a margin) in depth
    /// order. The resulting order feeds straight into ramp resolution, where
    /// the last overlapping ramp wins.
    pub fn terrain_near(&self, camera: IVec2, attributes: &TileAttributeIndex) -> TerrainWindow {
        let columns = VIEW_WIDTH / TILE_SIZE + 5;
        let rows = VIEW_HEIGHT / TILE_SIZE + 6;
        let origin = camera / TILE_SIZE - IVec2::splat(4);

        let mut visible: Vec<(i32, i32, i32, &TilePlacement)> = Vec::new();
        for row in 0..rows {
            for column in 0..columns {
                let pos = origin + IVec2::new(column, row);
                let Some(tiles) = self.cells.get(&pos) else {
                    continue;
                };
                for placement in tiles {
                    visible.push((placement.depth, pos.y, pos.x, placement));
                }
            }
        }
        visible.sort_by_key(|(depth, y, x, _)| (*depth, *y, *x));

        let mut window = TerrainWindow::default();
        for (_, ty, tx, placement) in visible {
            let attrs = attributes.get(&placement.tileset, placement.tile);
            if !attrs.solid {
                continue;
            }
            let (px, py) = (tx * TILE_SIZE, ty * TILE_SIZE);
            match attrs.slope {
                Some(slope) => window.ramps.push(Ramp::new(px, py, slope)),
                None => window
                    .solids
                    .push(PixelRect::new(px, py, TILE_SIZE, TILE_SIZE)),
            }
        }
        window
    }
}
