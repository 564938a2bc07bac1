//! Tileset loader: the external-interface boundary between a directory of
//! named assets and the core.
//!
//! Turns a directory of named assets into the ordered tile alphabet the
//! core consumes. Tile identifiers are assigned by enumeration order of the
//! directory listing; edge labels come from fixed character positions of
//! the asset's filename stem. This module deliberately does not decode any
//! image data -- raster composition is out of scope -- so a "named asset"
//! here is just a filename whose stem carries the four edge labels.

use std::path::{Path, PathBuf};

use crate::error::TilesetError;
use crate::tile::{Tile, TileId};

/// Load an ordered tile alphabet from `dir`.
///
/// Enumeration order is the lexicographic order of directory entries'
/// filenames (stable and platform-independent, unlike raw `read_dir`
/// order), assigning ids `0..n` in that order. Each filename stem's first
/// four characters are read as the north, south, east, and west edge
/// labels respectively.
pub fn load(dir: &Path) -> Result<Vec<Tile>, TilesetError> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| TilesetError::MissingDirectory(dir.to_path_buf(), e))?;

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| TilesetError::MissingDirectory(dir.to_path_buf(), e))?;
        if entry.path().is_file() {
            paths.push(entry.path());
        }
    }
    paths.sort();

    if paths.is_empty() {
        return Err(TilesetError::Empty(dir.to_path_buf()));
    }

    paths
        .into_iter()
        .enumerate()
        .map(|(index, path)| tile_from_path(index as TileId, &path))
        .collect()
}

fn tile_from_path(id: TileId, path: &Path) -> Result<Tile, TilesetError> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| TilesetError::MalformedName(path.to_path_buf()))?;

    let chars: Vec<char> = stem.chars().collect();
    if chars.len() < 4 {
        return Err(TilesetError::MalformedName(path.to_path_buf()));
    }

    let [north, south, east, west] = [chars[0], chars[1], chars[2], chars[3]];
    if [north, south, east, west].iter().any(|c| !c.is_ascii()) {
        return Err(TilesetError::NonCharacterLabel(path.to_path_buf()));
    }

    Ok(Tile::new(id, north, south, east, west))
}
