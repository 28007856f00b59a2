//! Images owned by the tile display itself.

use bevy::image::{ImageLoaderSettings, ImageSampler};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Asset paths for the panel art, handed to the plugin by the host.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileDisplayAssetPaths {
    pub panel: String,
    pub progress: String,
    pub left_cap: String,
    pub right_cap: String,
    pub unknown: String,
}

impl Default for TileDisplayAssetPaths {
    fn default() -> Self {
        Self {
            panel: "ui/panel.png".to_string(),
            progress: "ui/progress.png".to_string(),
            left_cap: "ui/panel_left.png".to_string(),
            right_cap: "ui/panel_right.png".to_string(),
            unknown: "ui/unknown.png".to_string(),
        }
    }
}

/// Loaded handles for the panel art.
#[derive(Resource, Debug, Clone, Default)]
pub struct TileDisplayAssets {
    pub panel: Handle<Image>,
    pub progress: Handle<Image>,
    pub left_cap: Handle<Image>,
    pub right_cap: Handle<Image>,
    pub unknown: Handle<Image>,
}

/// Startup system: request every panel image with point sampling.
///
/// Skipped when the host already inserted `TileDisplayAssets`.
pub fn load_tile_display_assets(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    paths: Res<TileDisplayAssetPaths>,
) {
    commands.insert_resource(TileDisplayAssets {
        panel: load_pixel_art(&asset_server, &paths.panel),
        progress: load_pixel_art(&asset_server, &paths.progress),
        left_cap: load_pixel_art(&asset_server, &paths.left_cap),
        right_cap: load_pixel_art(&asset_server, &paths.right_cap),
        unknown: load_pixel_art(&asset_server, &paths.unknown),
    });
}

fn load_pixel_art(asset_server: &AssetServer, path: &str) -> Handle<Image> {
    asset_server.load_with_settings(path.to_string(), |settings: &mut ImageLoaderSettings| {
        settings.sampler = ImageSampler::nearest();
    })
}
