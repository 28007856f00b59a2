//! The tile grid and its procedural generation.
//!
//! Terrain is a noise-driven surface line with dirt over stone, carved by a
//! second noise field for caves. Ores, explosives and torches are scattered
//! with a seeded `ChaCha8Rng`, so a seed always produces the same world.

use bevy::prelude::*;
use fastnoise_lite::{FastNoiseLite, FractalType, NoiseType};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use tile_display::config::SHEET_STRIDE;
use tile_display::{TileCoord, TileInstance, TileTypeId};

use crate::content::ContentRegistry;

pub const WORLD_WIDTH: usize = 160;
pub const WORLD_HEIGHT: usize = 90;
/// World units per tile.
pub const TILE_SIZE: f32 = 16.0;

const SURFACE_BASE: f32 = 28.0;
const SURFACE_AMPLITUDE: f32 = 8.0;
const SURFACE_FREQUENCY: f32 = 0.03;
const DIRT_DEPTH: i32 = 6;
const CAVE_FREQUENCY: f32 = 0.06;
const CAVE_THRESHOLD: f32 = 0.45;
/// Caves only open up this far below the surface.
const CAVE_MIN_DEPTH: i32 = 10;

const ORE_CHANCE: f64 = 0.03;
const CRYSTAL_MIN_DEPTH: i32 = 35;
const TNT_CHANCE: f64 = 0.002;
const TORCH_CHANCE: f64 = 0.08;
/// Sheet columns/rows used for random per-tile variation.
const VARIANTS: u16 = 3;

/// Row-major grid of optional tiles. `(0, 0)` is the top-left corner.
#[derive(Debug, Clone)]
pub struct TileGrid {
    pub width: usize,
    pub height: usize,
    tiles: Vec<Option<TileInstance>>,
}

impl TileGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![None; width * height],
        }
    }

    fn index(&self, cell: TileCoord) -> Option<usize> {
        let x = usize::try_from(cell.x).ok()?;
        let y = usize::try_from(cell.y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    pub fn in_bounds(&self, cell: TileCoord) -> bool {
        self.index(cell).is_some()
    }

    pub fn get(&self, cell: TileCoord) -> Option<TileInstance> {
        self.index(cell).and_then(|i| self.tiles[i])
    }

    pub fn set(&mut self, cell: TileCoord, tile: TileInstance) {
        if let Some(i) = self.index(cell) {
            self.tiles[i] = Some(tile);
        }
    }

    pub fn remove(&mut self, cell: TileCoord) -> Option<TileInstance> {
        self.index(cell).and_then(|i| self.tiles[i].take())
    }

    /// Every occupied cell with its tile.
    pub fn iter(&self) -> impl Iterator<Item = (TileCoord, TileInstance)> + '_ {
        let width = self.width;
        self.tiles.iter().enumerate().filter_map(move |(i, tile)| {
            tile.map(|tile| (TileCoord::new((i % width) as i32, (i / width) as i32), tile))
        })
    }
}

/// Center of `cell` in world space (y up).
pub fn cell_to_world(cell: TileCoord) -> Vec2 {
    Vec2::new(
        (cell.x as f32 + 0.5) * TILE_SIZE,
        -(cell.y as f32 + 0.5) * TILE_SIZE,
    )
}

/// Cell containing world-space point `pos`.
pub fn world_to_cell(pos: Vec2) -> TileCoord {
    TileCoord::new(
        (pos.x / TILE_SIZE).floor() as i32,
        (-pos.y / TILE_SIZE).floor() as i32,
    )
}

/// Terrain height (row of the topmost solid tile) of each column.
pub fn surface_heights(width: usize, seed: i32) -> Vec<i32> {
    let mut noise = FastNoiseLite::with_seed(seed);
    noise.set_noise_type(Some(NoiseType::OpenSimplex2));
    noise.set_frequency(Some(SURFACE_FREQUENCY));
    noise.set_fractal_type(Some(FractalType::FBm));
    noise.set_fractal_octaves(Some(3));

    (0..width)
        .map(|x| {
            let raw = noise.get_noise_2d(x as f32, 0.0);
            (SURFACE_BASE + raw * SURFACE_AMPLITUDE).round() as i32
        })
        .collect()
}

fn tile(tile_type: TileTypeId, rng: &mut ChaCha8Rng) -> TileInstance {
    let stride = SHEET_STRIDE as u16;
    TileInstance {
        tile_type,
        frame_x: rng.gen_range(0..VARIANTS) * stride,
        frame_y: rng.gen_range(0..VARIANTS) * stride,
    }
}

/// Generate a world from `seed` using the types in `registry`.
///
/// Types missing from the registry are simply left out.
pub fn generate_world(registry: &ContentRegistry, seed: u64) -> TileGrid {
    let mut grid = TileGrid::new(WORLD_WIDTH, WORLD_HEIGHT);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let noise_seed = seed as i32;

    let grass = registry.id_of("Grass");
    let dirt = registry.id_of("DirtBlock");
    let stone = registry.id_of("StoneBlock");
    let ores = [registry.id_of("CopperOre"), registry.id_of("IronOre")];
    let crystal = registry.id_of("SilicateCrystal");
    let tnt = registry.id_of("TNT");
    let torch = registry.id_of("Torches");

    let mut caves = FastNoiseLite::with_seed(noise_seed.wrapping_add(7919));
    caves.set_noise_type(Some(NoiseType::OpenSimplex2));
    caves.set_frequency(Some(CAVE_FREQUENCY));

    let surface = surface_heights(WORLD_WIDTH, noise_seed);

    for (x, &top) in surface.iter().enumerate() {
        let x = x as i32;
        for y in top.max(0)..WORLD_HEIGHT as i32 {
            let depth = y - top;
            let cell = TileCoord::new(x, y);

            if depth >= CAVE_MIN_DEPTH && caves.get_noise_2d(x as f32, y as f32) > CAVE_THRESHOLD {
                continue;
            }

            let kind = if depth == 0 {
                grass
            } else if depth <= DIRT_DEPTH {
                dirt
            } else if y >= top + CRYSTAL_MIN_DEPTH && rng.gen_bool(ORE_CHANCE) {
                crystal
            } else if rng.gen_bool(ORE_CHANCE) {
                ores[rng.gen_range(0..ores.len())]
            } else if rng.gen_bool(TNT_CHANCE) {
                tnt
            } else {
                stone
            };

            if let Some(kind) = kind {
                grid.set(cell, tile(kind, &mut rng));
            }
        }

        // Torches stand on the grass, one row above the surface.
        if top > 0 && rng.gen_bool(TORCH_CHANCE) {
            if let Some(torch) = torch {
                let variant = rng.gen_range(0..VARIANTS) * SHEET_STRIDE as u16;
                grid.set(
                    TileCoord::new(x, top - 1),
                    TileInstance {
                        tile_type: torch,
                        frame_x: variant,
                        frame_y: 0,
                    },
                );
            }
        }
    }

    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ContentRegistry {
        let mut registry = ContentRegistry::default();
        registry.register_defaults().unwrap();
        registry
    }

    #[test]
    fn test_grid_bounds() {
        let mut grid = TileGrid::new(4, 3);
        let tile = TileInstance {
            tile_type: TileTypeId(0),
            frame_x: 0,
            frame_y: 0,
        };
        assert!(grid.in_bounds(TileCoord::new(3, 2)));
        assert!(!grid.in_bounds(TileCoord::new(4, 0)));
        assert!(!grid.in_bounds(TileCoord::new(-1, 0)));

        grid.set(TileCoord::new(-1, 0), tile);
        assert_eq!(grid.iter().count(), 0);

        grid.set(TileCoord::new(1, 1), tile);
        assert_eq!(grid.get(TileCoord::new(1, 1)), Some(tile));
        assert_eq!(grid.remove(TileCoord::new(1, 1)), Some(tile));
        assert_eq!(grid.get(TileCoord::new(1, 1)), None);
    }

    #[test]
    fn test_world_cell_round_trip() {
        for cell in [TileCoord::new(0, 0), TileCoord::new(12, 40), TileCoord::new(159, 89)] {
            assert_eq!(world_to_cell(cell_to_world(cell)), cell);
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let registry = registry();
        let a = generate_world(&registry, 42);
        let b = generate_world(&registry, 42);
        assert!(a.iter().eq(b.iter()));
    }

    #[test]
    fn test_surface_is_grass_with_sky_above() {
        let registry = registry();
        let grass = registry.id_of("Grass").unwrap();
        let grid = generate_world(&registry, 7);
        let surface = surface_heights(WORLD_WIDTH, 7);

        for (x, &top) in surface.iter().enumerate() {
            let x = x as i32;
            assert_eq!(
                grid.get(TileCoord::new(x, top)).map(|t| t.tile_type),
                Some(grass),
                "column {x}"
            );
            for y in 0..top - 1 {
                assert_eq!(grid.get(TileCoord::new(x, y)), None, "column {x} row {y}");
            }
        }
    }

    #[test]
    fn test_world_has_add_on_content() {
        let registry = registry();
        let crystal = registry.id_of("SilicateCrystal").unwrap();
        let grid = generate_world(&registry, 42);
        assert!(grid.iter().any(|(_, tile)| tile.tile_type == crystal));
    }
}
