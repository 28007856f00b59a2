//! Frame systems: poll the host, then mirror the widget into its UI nodes.

use bevy::prelude::*;

use crate::assets::TileDisplayAssets;
use crate::config::TileDisplayConfig;
use crate::host::{FontMetrics, TileHost, TileTextures};
use crate::spawn::TileDisplayNodes;
use crate::widget::{TileDisplayWidget, TileIcon};

/// Advance the widget one frame against the host's current world state.
pub fn update_tile_display<H>(
    host: Res<H>,
    config: Res<TileDisplayConfig>,
    mut widget: ResMut<TileDisplayWidget>,
) where
    H: TileHost + FontMetrics + Resource,
{
    widget.update(&*host, &config);
}

/// Write sizes, text, icon and colors into the spawned panel.
pub fn sync_tile_display_nodes<H>(
    widget: Res<TileDisplayWidget>,
    nodes: Res<TileDisplayNodes>,
    assets: Res<TileDisplayAssets>,
    host: Res<H>,
    mut layout_q: Query<&mut Node>,
    mut image_q: Query<&mut ImageNode>,
    mut text_q: Query<(&mut Text, &mut TextColor)>,
) where
    H: TileTextures + Resource,
{
    let state = widget.state();
    let colors = widget.colors();

    set_width(&mut layout_q, nodes.anchor, state.width);
    set_width(&mut layout_q, nodes.progress, state.progress);

    if let Ok(mut panel) = image_q.get_mut(nodes.panel) {
        panel.color = colors.panel;
    }
    if let Ok(mut progress) = image_q.get_mut(nodes.progress) {
        progress.color = colors.progress;
    }

    if let Ok(mut icon) = image_q.get_mut(nodes.icon) {
        let (image, rect) = match widget.icon() {
            TileIcon::Tile { tile_type, frame } => (host.tile_texture(tile_type), Some(frame)),
            TileIcon::Unknown => (assets.unknown.clone(), None),
        };
        if icon.image != image {
            icon.image = image;
        }
        if icon.rect != rect {
            icon.rect = rect;
        }
        icon.color = colors.icon;
    }

    set_label(&mut text_q, nodes.name, widget.name(), colors.name);
    set_label(&mut text_q, nodes.pack, widget.pack(), colors.pack);
}

/// Pin the cap images to the panel edges and fade them with it.
///
/// The caps sit outside the panel's clip rect so they stay fully visible.
pub fn place_decorations(
    widget: Res<TileDisplayWidget>,
    nodes: Res<TileDisplayNodes>,
    mut layout_q: Query<&mut Node>,
    mut image_q: Query<&mut ImageNode>,
) {
    let layout = widget.decoration_layout();
    let color = widget.colors().decoration;

    for (entity, offset) in [(nodes.left_cap, layout.left), (nodes.right_cap, layout.right)] {
        if let Ok(mut node) = layout_q.get_mut(entity) {
            if node.left != Val::Px(offset.x) {
                node.left = Val::Px(offset.x);
            }
            if node.top != Val::Px(offset.y) {
                node.top = Val::Px(offset.y);
            }
        }
        if let Ok(mut image) = image_q.get_mut(entity) {
            image.color = color;
        }
    }
}

fn set_width(layout_q: &mut Query<&mut Node>, entity: Entity, width: f32) {
    if let Ok(mut node) = layout_q.get_mut(entity) {
        if node.width != Val::Px(width) {
            node.width = Val::Px(width);
        }
    }
}

fn set_label(
    text_q: &mut Query<(&mut Text, &mut TextColor)>,
    entity: Entity,
    value: &str,
    color: Color,
) {
    if let Ok((mut text, mut text_color)) = text_q.get_mut(entity) {
        if text.0 != value {
            text.0 = value.to_string();
        }
        text_color.0 = color;
    }
}
