//! F3 debug window: what the tile display is looking at and how it is
//! animating.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use tile_display::{InteractionLookup, TileDisplayConfig, TileDisplayWidget, TileHost};

use crate::host::SandboxWorld;

/// Whether the debug window is visible.
#[derive(Resource, Default)]
pub struct DebugPanelVisible(pub bool);

pub fn toggle_debug_panel(keys: Res<ButtonInput<KeyCode>>, mut visible: ResMut<DebugPanelVisible>) {
    if keys.just_pressed(KeyCode::F3) {
        visible.0 = !visible.0;
    }
}

fn lookup_label(lookup: InteractionLookup) -> String {
    match lookup {
        InteractionLookup::Missing => "no record".to_string(),
        InteractionLookup::Empty => "record, no damage data".to_string(),
        InteractionLookup::Damage(damage) => format!("{damage:.1} damage"),
    }
}

pub fn debug_panel_ui(
    mut contexts: EguiContexts,
    mut visible: ResMut<DebugPanelVisible>,
    world: Res<SandboxWorld>,
    widget: Res<TileDisplayWidget>,
    config: Res<TileDisplayConfig>,
) {
    if !visible.0 {
        return;
    }

    let target = world.target_cell();
    let tile = world.tile_at(target);
    let lookup = world.find_interaction(target, config.interaction_search_distance);
    let state = widget.state();

    let mut open = true;
    egui::Window::new("Tile Debug")
        .open(&mut open)
        .resizable(false)
        .default_width(240.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.heading(format!("Target ({}, {})", target.x, target.y));
            match tile {
                Some(tile) => {
                    let name = world.tile_name(tile.tile_type).unwrap_or("?");
                    ui.label(format!("{name} (type {})", tile.tile_type.0));
                    ui.label(format!("frame ({}, {})", tile.frame_x, tile.frame_y));
                }
                None => {
                    ui.label("empty");
                }
            }
            ui.label(format!("Interaction: {}", lookup_label(lookup)));
            ui.label(format!("Active hit records: {}", world.hits.active()));

            ui.separator();
            ui.label(format!("Shown: \"{}\" / \"{}\"", widget.name(), widget.pack()));
            ui.label(format!("Opacity: {:.3}", state.opacity));
            ui.label(format!("Width: {:.0}px", state.width));
            ui.label(format!("Progress: {:.1}px", state.progress));
        });

    if !open {
        visible.0 = false;
    }
}
