//! World domain: startup loaders for the world file, tileset attributes, and
//! the optional tuning override.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use bevy::prelude::*;
use ron::Options;

use crate::movement::MovementTuning;
use crate::physics::Slope;

use super::data::{TileAttributeIndex, TileAttributes, TileCell, WorldMap};

/// Error type for world loading failures.
#[derive(Debug)]
pub struct WorldLoadError {
    pub file: String,
    pub message: String,
}

impl WorldLoadError {
    fn new(path: &Path, message: impl Into<String>) -> Self {
        Self {
            file: path.display().to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for WorldLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for WorldLoadError {}

/// Loads the serialized tile map and derives spawn/finish/bounds.
pub fn load_world_map(path: &Path) -> Result<WorldMap, WorldLoadError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| WorldLoadError::new(path, format!("IO error: {}", e)))?;
    let raw: HashMap<String, TileCell> = serde_json::from_str(&contents)
        .map_err(|e| WorldLoadError::new(path, format!("Parse error: {}", e)))?;
    Ok(WorldMap::from_cells(raw))
}

/// Loads the tileset attribute file. Each non-empty line reads
/// `name:index=key:value;key:value;`.
pub fn load_tile_attributes(path: &Path) -> Result<TileAttributeIndex, WorldLoadError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| WorldLoadError::new(path, format!("IO error: {}", e)))?;

    let mut index = TileAttributeIndex::default();
    for line in contents.lines() {
        if line.is_empty() {
            continue;
        }
        let (tileset, tile, attributes) =
            parse_attribute_line(line).map_err(|message| WorldLoadError::new(path, message))?;
        index.insert(&tileset, tile, attributes);
    }
    Ok(index)
}

pub(super) fn parse_attribute_line(
    line: &str,
) -> Result<(String, usize, TileAttributes), String> {
    let (name_part, changes_part) = line
        .split_once('=')
        .ok_or_else(|| format!("missing '=' in line {:?}", line))?;
    let (tileset, tile) = name_part
        .split_once(':')
        .ok_or_else(|| format!("missing tile index in line {:?}", line))?;
    let tile: usize = tile
        .parse()
        .map_err(|_| format!("bad tile index {:?} in line {:?}", tile, line))?;

    let mut attributes = TileAttributes::default();
    for change in changes_part.split(';') {
        if change.is_empty() {
            continue;
        }
        let (key, value) = change
            .split_once(':')
            .ok_or_else(|| format!("malformed attribute {:?} in line {:?}", change, line))?;
        let value: i32 = value
            .parse()
            .map_err(|_| format!("bad value {:?} for attribute {:?}", value, key))?;
        match key {
            "no_collide" => attributes.solid = false,
            "ramp" => {
                attributes.slope = Some(match value {
                    1 => Slope::RisingRight,
                    2 => Slope::RisingLeft,
                    other => return Err(format!("unknown ramp direction {}", other)),
                })
            }
            "offset_x" => attributes.offset.x = value,
            "offset_y" => attributes.offset.y = value,
            "invisible" => attributes.invisible = true,
            other => warn!("ignoring unknown tile attribute {:?}", other),
        }
    }
    Ok((tileset.to_string(), tile, attributes))
}

/// Loads a tuning override if the file exists; a missing file is not an
/// error, a malformed one is.
pub fn load_tuning(path: &Path) -> Result<Option<MovementTuning>, WorldLoadError> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path)
        .map_err(|e| WorldLoadError::new(path, format!("IO error: {}", e)))?;
    let tuning = ron_options()
        .from_str(&contents)
        .map_err(|e| WorldLoadError::new(path, format!("Parse error: {}", e)))?;
    Ok(Some(tuning))
}

fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}
