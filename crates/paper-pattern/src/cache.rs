//! Memoized tile generation
//!
//! Tiles are pure functions of their keys, so a cache keyed on the full
//! key can never serve a stale tile. Only the latest key of each kind is
//! kept: an edit to any input replaces the previous tile.

use crate::background::{BackgroundKey, generate_background_tile};
use crate::pattern::{TileKey, generate_tile};
use crate::tile::PatternTile;
use std::sync::Arc;

/// Most recent key and its tile. A `None` tile is a cached blank.
type Slot<K> = Option<(K, Option<Arc<PatternTile>>)>;

#[derive(Debug, Default)]
pub struct TileCache {
    main: Slot<TileKey>,
    background: Slot<BackgroundKey>,
}

impl TileCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn main_tile(&mut self, key: &TileKey) -> Option<Arc<PatternTile>> {
        if let Some((cached, tile)) = &self.main {
            if cached == key {
                return tile.clone();
            }
        }
        log::debug!("Generating tile {}", key.tile_id());
        let tile = generate_tile(key).map(Arc::new);
        self.main = Some((key.clone(), tile.clone()));
        tile
    }

    pub fn background_tile(&mut self, key: &BackgroundKey) -> Option<Arc<PatternTile>> {
        if let Some((cached, tile)) = &self.background {
            if cached == key {
                return tile.clone();
            }
        }
        let tile = generate_background_tile(key).map(Arc::new);
        self.background = Some((key.clone(), tile.clone()));
        tile
    }

    /// Number of occupied slots, at most one per tile kind
    pub fn len(&self) -> usize {
        usize::from(self.main.is_some()) + usize::from(self.background.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.main = None;
        self.background = None;
    }
}
