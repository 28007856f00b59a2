//! The sandbox's side of the tile display contract.

use std::collections::HashMap;

use bevy::prelude::*;

use tile_display::{
    FontMetrics, GlyphAdvanceMetrics, InteractionLookup, TileCoord, TileHost, TileInstance,
    TileTextures, TileTypeId,
};

use crate::content::ContentRegistry;
use crate::mining::HitTileIndex;
use crate::world::{generate_world, TileGrid};

/// Everything the sandbox knows about its world and the local player.
#[derive(Resource)]
pub struct SandboxWorld {
    pub grid: TileGrid,
    pub registry: ContentRegistry,
    pub hits: HitTileIndex,
    /// Cell under the player's cursor.
    pub target: TileCoord,
    pub metrics: GlyphAdvanceMetrics,
    /// Sprite sheet per tile type, filled in once images are built.
    pub sheets: HashMap<TileTypeId, Handle<Image>>,
}

impl SandboxWorld {
    /// Build the default content and generate terrain for `seed`.
    pub fn generate(seed: u64, font_size: f32) -> Self {
        let mut registry = ContentRegistry::default();
        if let Err(err) = registry.register_defaults() {
            error!("Failed to register default tiles: {err}");
        }
        let grid = generate_world(&registry, seed);
        info!(
            "Generated {}x{} world (seed {seed}) with {} tile types",
            grid.width,
            grid.height,
            registry.len()
        );

        Self {
            grid,
            registry,
            hits: HitTileIndex::default(),
            target: TileCoord::default(),
            metrics: GlyphAdvanceMetrics::new(font_size),
            sheets: HashMap::new(),
        }
    }
}

impl TileHost for SandboxWorld {
    fn target_cell(&self) -> TileCoord {
        self.target
    }

    fn tile_at(&self, cell: TileCoord) -> Option<TileInstance> {
        self.grid.get(cell)
    }

    fn tile_name(&self, tile_type: TileTypeId) -> Option<&str> {
        self.registry.get(tile_type).map(|kind| kind.name.as_str())
    }

    fn owning_pack(&self, tile_type: TileTypeId) -> Option<&str> {
        self.registry.get(tile_type)?.pack.as_deref()
    }

    fn is_frame_important(&self, tile_type: TileTypeId) -> bool {
        self.registry
            .get(tile_type)
            .is_some_and(|kind| kind.frame_important)
    }

    fn find_interaction(&self, cell: TileCoord, search_distance: u32) -> InteractionLookup {
        self.hits.find(cell, search_distance)
    }
}

impl FontMetrics for SandboxWorld {
    fn measure(&self, text: &str, scale: f32) -> Vec2 {
        self.metrics.measure(text, scale)
    }
}

impl TileTextures for SandboxWorld {
    fn tile_texture(&self, tile_type: TileTypeId) -> Handle<Image> {
        self.sheets.get(&tile_type).cloned().unwrap_or_default()
    }
}
