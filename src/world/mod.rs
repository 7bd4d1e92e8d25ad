//! World domain: tile map model, attribute index, and startup loaders.

mod data;
mod loader;

#[cfg(test)]
mod tests;

pub use data::{
    TerrainWindow, TileAttributeIndex, TileAttributes, TileCell, TilePlacement, WorldBounds,
    WorldMap,
};
pub use loader::WorldLoadError;

use std::path::Path;

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::MovementTuning;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_world);
    }
}

/// Loads the world file and tileset attributes, applies the optional tuning
/// override, and hands control to the simulation. Any failure here is fatal:
/// the simulation never sees partially loaded data.
fn load_world(
    mut commands: Commands,
    mut tuning: ResMut<MovementTuning>,
    mut next_state: ResMut<NextState<GameState>>,
) -> Result {
    let base = Path::new("assets");

    let map = loader::load_world_map(&base.join("worlds/save1.json"))?;
    let attributes = loader::load_tile_attributes(&base.join("tilesets/tileset_data.txt"))?;
    if let Some(override_tuning) = loader::load_tuning(&base.join("tuning.ron"))? {
        info!("movement tuning overridden from tuning.ron");
        *tuning = override_tuning;
    }

    info!(
        "world loaded: {} cells, bounds {:?}, spawn {:?}, finish {:?}",
        map.cell_count(),
        map.bounds,
        map.spawn,
        map.finish
    );

    commands.insert_resource(attributes);
    commands.insert_resource(map);
    next_state.set(GameState::Playing);
    Ok(())
}
