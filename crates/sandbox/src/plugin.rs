use bevy::prelude::*;

use tile_display::{TileDisplayConfig, TileDisplaySet};

use crate::host::SandboxWorld;
use crate::input;
use crate::render::{self, TileBroken, TileSprites};

/// World generation, input and tile rendering for the sandbox.
///
/// Reads the font size from [`TileDisplayConfig`], which must exist by
/// startup.
pub struct SandboxPlugin {
    pub seed: u64,
}

impl Plugin for SandboxPlugin {
    fn build(&self, app: &mut App) {
        let seed = self.seed;
        app.add_event::<TileBroken>()
            .init_resource::<TileSprites>()
            .add_systems(
                Startup,
                (
                    move |mut commands: Commands, config: Res<TileDisplayConfig>| {
                        commands.insert_resource(SandboxWorld::generate(seed, config.font_size));
                    },
                    render::build_tile_sheets,
                    render::spawn_tile_sprites,
                )
                    .chain(),
            )
            .add_systems(Startup, render::setup_camera)
            .add_systems(
                Update,
                (
                    input::pan_camera,
                    input::update_target_cell,
                    input::mine_target,
                    input::age_hit_records,
                )
                    .chain()
                    .before(TileDisplaySet::Update),
            )
            .add_systems(
                Update,
                (render::despawn_broken_tiles, render::move_target_highlight)
                    .after(input::age_hit_records),
            );
    }
}
