use std::collections::HashMap;

use bevy::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tile_display::{
    format_tile_name, FontMetrics, GlyphAdvanceMetrics, InteractionLookup, TileCoord,
    TileDisplayConfig, TileDisplayWidget, TileHost, TileInstance, TileTypeId,
};

struct BenchHost {
    target: TileCoord,
    tiles: HashMap<TileCoord, TileInstance>,
    metrics: GlyphAdvanceMetrics,
}

impl BenchHost {
    fn new() -> Self {
        let mut tiles = HashMap::new();
        for x in 0..64 {
            for y in 0..64 {
                tiles.insert(
                    TileCoord::new(x, y),
                    TileInstance {
                        tile_type: TileTypeId((x % 4) as u16),
                        frame_x: 0,
                        frame_y: 0,
                    },
                );
            }
        }
        Self {
            target: TileCoord::new(0, 0),
            tiles,
            metrics: GlyphAdvanceMetrics::default(),
        }
    }
}

impl TileHost for BenchHost {
    fn target_cell(&self) -> TileCoord {
        self.target
    }
    fn tile_at(&self, cell: TileCoord) -> Option<TileInstance> {
        self.tiles.get(&cell).copied()
    }
    fn tile_name(&self, tile_type: TileTypeId) -> Option<&str> {
        ["DirtBlock", "StoneBlock", "CopperOre", "SilicateCrystal"]
            .get(usize::from(tile_type.0))
            .copied()
    }
    fn owning_pack(&self, tile_type: TileTypeId) -> Option<&str> {
        (tile_type.0 == 3).then_some("Silicate Extras")
    }
    fn is_frame_important(&self, _tile_type: TileTypeId) -> bool {
        false
    }
    fn find_interaction(&self, cell: TileCoord, _search_distance: u32) -> InteractionLookup {
        if cell.x % 2 == 0 {
            InteractionLookup::Damage(40.0)
        } else {
            InteractionLookup::Missing
        }
    }
}

impl FontMetrics for BenchHost {
    fn measure(&self, text: &str, scale: f32) -> Vec2 {
        self.metrics.measure(text, scale)
    }
}

fn bench_widget_update(c: &mut Criterion) {
    let mut host = BenchHost::new();
    let config = TileDisplayConfig::default();
    let mut widget = TileDisplayWidget::default();
    let mut frame = 0i32;

    c.bench_function("widget_update_sweeping_target", |b| {
        b.iter(|| {
            frame = frame.wrapping_add(1);
            host.target = TileCoord::new(frame.rem_euclid(80), 5);
            widget.update(black_box(&host), &config);
        });
    });
}

fn bench_format_tile_name(c: &mut Criterion) {
    c.bench_function("format_tile_name", |b| {
        b.iter(|| format_tile_name(black_box("LihzahrdBrickWallUnsafe")));
    });
}

criterion_group!(benches, bench_widget_update, bench_format_tile_name);
criterion_main!(benches);
