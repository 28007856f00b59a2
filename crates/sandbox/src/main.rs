//! Silicate sandbox: a small mineable tile world with the tile display on top.
//!
//! Move the cursor over tiles to target them, hold the left mouse button to
//! mine, pan with WASD or the arrow keys, and press F3 for the debug window.

use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy_egui::EguiPlugin;

use tile_display::TileDisplayPlugin;

mod content;
mod debug_panel;
mod host;
mod input;
mod mining;
mod plugin;
mod render;
mod settings;
mod world;

use host::SandboxWorld;
use plugin::SandboxPlugin;
use settings::{load_settings_or_default, SETTINGS_FILE};

fn main() {
    let settings = load_settings_or_default(SETTINGS_FILE);

    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Silicate Sandbox".to_string(),
                    resolution: (settings.window_width, settings.window_height).into(),
                    present_mode: PresentMode::AutoVsync,
                    ..default()
                }),
                ..default()
            })
            .set(ImagePlugin::default_nearest()),
    )
    .add_plugins(EguiPlugin)
    .add_plugins((
        TileDisplayPlugin::<SandboxWorld>::new(settings.ui_assets.clone())
            .with_config(settings.display.clone()),
        SandboxPlugin {
            seed: settings.seed,
        },
    ))
    .init_resource::<debug_panel::DebugPanelVisible>()
    .add_systems(
        Update,
        (
            debug_panel::toggle_debug_panel,
            debug_panel::debug_panel_ui.after(tile_display::TileDisplaySet::Update),
        ),
    )
    .insert_resource(settings);

    app.run();
}
