//! Builds the panel's `bevy_ui` hierarchy.
//!
//! ```text
//! root            full-width row, centers the anchor
//! └─ anchor       panel origin, sized to the animated width, not clipped
//!    ├─ panel     background, clips its children
//!    │  ├─ icon
//!    │  ├─ name label
//!    │  ├─ pack label
//!    │  └─ progress bar
//!    ├─ left cap  outside the clip, left of the origin
//!    └─ right cap outside the clip, at the panel's right edge
//! ```

use bevy::prelude::*;

use crate::assets::TileDisplayAssets;
use crate::config::{
    TileDisplayConfig, DECORATION_WIDTH, ICON_FRAME_SIZE, LABEL_INSET, LABEL_MARGIN, NAME_SCALE,
    PACK_SCALE, PANEL_HEIGHT, PANEL_TOP, PROGRESS_HEIGHT, PROGRESS_OVERHANG,
};
use crate::widget::TileDisplayWidget;

/// Entities of the spawned panel, in the order the sync systems touch them.
#[derive(Resource, Debug, Clone, Copy)]
pub struct TileDisplayNodes {
    pub root: Entity,
    pub anchor: Entity,
    pub panel: Entity,
    pub icon: Entity,
    pub name: Entity,
    pub pack: Entity,
    pub progress: Entity,
    pub left_cap: Entity,
    pub right_cap: Entity,
}

/// Startup system: spawn the (initially invisible) panel.
pub fn spawn_tile_display(
    mut commands: Commands,
    assets: Res<TileDisplayAssets>,
    config: Res<TileDisplayConfig>,
    widget: Res<TileDisplayWidget>,
) {
    let colors = widget.colors();
    let width = widget.state().width;

    let root = commands
        .spawn((
            Name::new("Tile Display"),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(PANEL_TOP),
                left: Val::Px(0.0),
                width: Val::Percent(100.0),
                height: Val::Px(PANEL_HEIGHT),
                justify_content: JustifyContent::Center,
                ..default()
            },
        ))
        .id();

    let anchor = commands
        .spawn(Node {
            width: Val::Px(width),
            height: Val::Percent(100.0),
            ..default()
        })
        .id();

    let panel = commands
        .spawn((
            ImageNode::new(assets.panel.clone()).with_color(colors.panel),
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                overflow: Overflow::clip(),
                ..default()
            },
        ))
        .id();

    let icon = commands
        .spawn((
            ImageNode::new(assets.unknown.clone()).with_color(colors.icon),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px((PANEL_HEIGHT - ICON_FRAME_SIZE) * 0.5),
                width: Val::Px(ICON_FRAME_SIZE),
                height: Val::Px(ICON_FRAME_SIZE),
                ..default()
            },
        ))
        .id();

    let name = commands
        .spawn((
            Text::new(widget.name()),
            TextFont {
                font_size: config.font_size * NAME_SCALE,
                ..default()
            },
            TextColor(colors.name),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(LABEL_INSET),
                top: Val::Px(LABEL_MARGIN),
                ..default()
            },
        ))
        .id();

    let pack = commands
        .spawn((
            Text::new(widget.pack()),
            TextFont {
                font_size: config.font_size * PACK_SCALE,
                ..default()
            },
            TextColor(colors.pack),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(LABEL_INSET),
                bottom: Val::Px(LABEL_MARGIN),
                ..default()
            },
        ))
        .id();

    let progress = commands
        .spawn((
            ImageNode::new(assets.progress.clone()).with_color(colors.progress),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(-PROGRESS_OVERHANG),
                bottom: Val::Px(0.0),
                width: Val::Px(widget.state().progress),
                height: Val::Px(PROGRESS_HEIGHT),
                ..default()
            },
        ))
        .id();

    let layout = widget.decoration_layout();
    let left_cap = commands
        .spawn((
            ImageNode::new(assets.left_cap.clone()).with_color(colors.decoration),
            cap_node(layout.left),
        ))
        .id();
    let right_cap = commands
        .spawn((
            ImageNode::new(assets.right_cap.clone()).with_color(colors.decoration),
            cap_node(layout.right),
        ))
        .id();

    commands
        .entity(panel)
        .add_children(&[icon, name, pack, progress]);
    commands
        .entity(anchor)
        .add_children(&[panel, left_cap, right_cap]);
    commands.entity(root).add_child(anchor);

    commands.insert_resource(TileDisplayNodes {
        root,
        anchor,
        panel,
        icon,
        name,
        pack,
        progress,
        left_cap,
        right_cap,
    });

    info!("Tile display spawned");
}

/// Absolutely positioned cap at `offset` from the panel origin.
fn cap_node(offset: Vec2) -> Node {
    Node {
        position_type: PositionType::Absolute,
        left: Val::Px(offset.x),
        top: Val::Px(offset.y),
        width: Val::Px(DECORATION_WIDTH),
        height: Val::Percent(100.0),
        ..default()
    }
}
