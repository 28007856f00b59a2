//! Silicate tile display.
//!
//! A heads-up panel at the top of the screen naming the tile under the
//! player's cursor, the content pack it comes from, and how far along mining
//! it is. The panel fades in and out and resizes smoothly as the target
//! changes.
//!
//! The host game exposes its world to the panel by implementing
//! [`TileHost`], [`FontMetrics`] and [`TileTextures`] on one of its
//! resources and registering [`TileDisplayPlugin`] for that resource type.
//! Host systems that move the player's target should run before
//! [`TileDisplaySet::Update`].

use std::marker::PhantomData;

use bevy::prelude::*;

pub mod assets;
pub mod colors;
pub mod config;
pub mod host;
pub mod naming;
pub mod smoothing;
pub mod spawn;
pub mod systems;
pub mod widget;

pub use assets::{TileDisplayAssetPaths, TileDisplayAssets};
pub use config::TileDisplayConfig;
pub use host::{
    FontMetrics, GlyphAdvanceMetrics, InteractionLookup, TileCoord, TileHost, TileInstance,
    TileTextures, TileTypeId,
};
pub use naming::format_tile_name;
pub use spawn::TileDisplayNodes;
pub use widget::{DisplayState, TileDisplayWidget, TileIcon};

/// Ordering of the panel's per-frame work.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileDisplaySet {
    /// Poll the host and advance the animation.
    Update,
    /// Mirror the widget into its UI nodes and place the caps.
    Render,
}

/// Registers the tile display for host resource `H`.
pub struct TileDisplayPlugin<H> {
    asset_paths: TileDisplayAssetPaths,
    config: TileDisplayConfig,
    _host: PhantomData<fn() -> H>,
}

impl<H> TileDisplayPlugin<H> {
    pub fn new(asset_paths: TileDisplayAssetPaths) -> Self {
        Self {
            asset_paths,
            config: TileDisplayConfig::default(),
            _host: PhantomData,
        }
    }

    pub fn with_config(mut self, config: TileDisplayConfig) -> Self {
        self.config = config;
        self
    }
}

impl<H> Default for TileDisplayPlugin<H> {
    fn default() -> Self {
        Self::new(TileDisplayAssetPaths::default())
    }
}

impl<H> Plugin for TileDisplayPlugin<H>
where
    H: TileHost + FontMetrics + TileTextures + Resource,
{
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone().sanitized())
            .insert_resource(self.asset_paths.clone())
            .init_resource::<TileDisplayWidget>()
            .configure_sets(
                Update,
                (TileDisplaySet::Update, TileDisplaySet::Render).chain(),
            )
            .add_systems(
                Startup,
                (
                    assets::load_tile_display_assets
                        .run_if(not(resource_exists::<TileDisplayAssets>)),
                    spawn::spawn_tile_display,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                systems::update_tile_display::<H>
                    .in_set(TileDisplaySet::Update)
                    .run_if(resource_exists::<H>),
            )
            .add_systems(
                Update,
                (
                    systems::sync_tile_display_nodes::<H>,
                    systems::place_decorations,
                )
                    .chain()
                    .in_set(TileDisplaySet::Render)
                    .run_if(resource_exists::<H>)
                    .run_if(resource_exists::<TileDisplayNodes>),
            );
    }
}
