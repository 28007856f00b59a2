//! Per-frame state machine of the tile display.
//!
//! `TileDisplayWidget::update` is the whole behavior of the panel: it polls
//! the host for the targeted cell, resolves what to show, and advances the
//! animated properties one smoothing step. It knows nothing about UI
//! entities; `systems::sync_tile_display_nodes` mirrors the result into the
//! spawned `bevy_ui` tree afterwards.

use bevy::prelude::*;

use crate::colors::WidgetColors;
use crate::config::{
    TileDisplayConfig, DECORATION_WIDTH, DEFAULT_ICON_COLUMN, DEFAULT_ICON_ROW, ICON_FRAME_SIZE,
    MAX_DAMAGE, NAME_SCALE, PACK_SCALE, PROGRESS_OVERHANG, SHEET_STRIDE,
};
use crate::host::{FontMetrics, InteractionLookup, TileCoord, TileHost, TileInstance, TileTypeId};
use crate::naming::format_tile_name;
use crate::smoothing::smooth;

/// Animated view state. The only part of the widget that lives across frames.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DisplayState {
    /// 0 = hidden, 1 = fully visible.
    pub opacity: f32,
    /// Panel width in logical pixels (whole pixels after each update).
    pub width: f32,
    /// Progress bar width in logical pixels.
    pub progress: f32,
}

/// What the icon frame shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TileIcon {
    /// A 16x16 cell of a tile type's sheet.
    Tile { tile_type: TileTypeId, frame: Rect },
    /// The placeholder image, shown whole.
    Unknown,
}

/// Identity of the targeted tile, resolved fresh each frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CellIdentity {
    pub tile: TileInstance,
    pub name: String,
    pub pack: String,
}

impl CellIdentity {
    /// Resolve the tile at `cell`. `None` for empty cells and for tile types
    /// the host cannot name.
    pub fn resolve<H: TileHost + ?Sized>(
        host: &H,
        cell: TileCoord,
        config: &TileDisplayConfig,
    ) -> Option<Self> {
        let tile = host.tile_at(cell)?;
        let raw_name = host.tile_name(tile.tile_type)?;
        let pack = host
            .owning_pack(tile.tile_type)
            .unwrap_or(config.base_game_name.as_str());

        Some(Self {
            tile,
            name: format_tile_name(raw_name),
            pack: pack.to_string(),
        })
    }
}

/// Sheet rectangle used as the icon of `tile`.
pub fn icon_frame<H: TileHost + ?Sized>(host: &H, tile: &TileInstance) -> Rect {
    let (x, y) = if host.is_frame_important(tile.tile_type) {
        (f32::from(tile.frame_x), f32::from(tile.frame_y))
    } else {
        (
            DEFAULT_ICON_COLUMN * SHEET_STRIDE,
            DEFAULT_ICON_ROW * SHEET_STRIDE,
        )
    };
    Rect::new(x, y, x + ICON_FRAME_SIZE, y + ICON_FRAME_SIZE)
}

/// Target width of the progress bar for a panel of width `panel_width`.
pub fn progress_target(panel_width: f32, damage: f32) -> f32 {
    (panel_width + PROGRESS_OVERHANG) * damage / MAX_DAMAGE
}

/// Cap positions relative to the panel's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecorationLayout {
    pub left: Vec2,
    pub right: Vec2,
}

impl DecorationLayout {
    pub fn for_width(panel_width: f32) -> Self {
        Self {
            left: Vec2::new(-DECORATION_WIDTH, 0.0),
            right: Vec2::new(panel_width, 0.0),
        }
    }
}

/// The tile display: animated state plus what it currently shows.
#[derive(Resource, Debug, Clone)]
pub struct TileDisplayWidget {
    state: DisplayState,
    name: String,
    pack: String,
    icon: TileIcon,
    colors: WidgetColors,
    shown: Option<TileTypeId>,
}

impl Default for TileDisplayWidget {
    fn default() -> Self {
        let state = DisplayState::default();
        Self {
            state,
            name: String::new(),
            pack: String::new(),
            icon: TileIcon::Unknown,
            colors: WidgetColors::derive(&state),
            shown: None,
        }
    }
}

impl TileDisplayWidget {
    pub fn state(&self) -> DisplayState {
        self.state
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pack(&self) -> &str {
        &self.pack
    }

    pub fn icon(&self) -> TileIcon {
        self.icon
    }

    pub fn colors(&self) -> WidgetColors {
        self.colors
    }

    pub fn decoration_layout(&self) -> DecorationLayout {
        DecorationLayout::for_width(self.state.width)
    }

    /// Run one frame: panel contents and size, progress bar, then colors.
    pub fn update<H>(&mut self, host: &H, config: &TileDisplayConfig)
    where
        H: TileHost + FontMetrics + ?Sized,
    {
        let target = host.target_cell();
        self.update_panel(host, target, config);
        self.update_progress(host, target, config);
        self.colors = WidgetColors::derive(&self.state);
    }

    fn update_panel<H>(&mut self, host: &H, target: TileCoord, config: &TileDisplayConfig)
    where
        H: TileHost + FontMetrics + ?Sized,
    {
        let Some(identity) = CellIdentity::resolve(host, target, config) else {
            if self.shown.take().is_some() {
                debug!("Tile display hiding: no tile at {:?}", target);
            }
            self.name.clear();
            self.pack.clear();
            self.icon = TileIcon::Unknown;
            self.state.opacity = smooth(self.state.opacity, 0.0, config.smoothing);
            return;
        };

        let tile_type = identity.tile.tile_type;
        if self.shown != Some(tile_type) {
            debug!(
                "Tile display showing {} ({}) at {:?}",
                identity.name, identity.pack, target
            );
            self.shown = Some(tile_type);
        }

        let frame = icon_frame(host, &identity.tile);
        let name_width = host.measure(&identity.name, NAME_SCALE).x;
        let pack_width = host.measure(&identity.pack, PACK_SCALE).x;
        let desired = name_width.max(pack_width) + frame.width();

        self.state.width = smooth(self.state.width, desired, config.smoothing).ceil();
        self.state.opacity = smooth(self.state.opacity, 1.0, config.smoothing);

        self.name = identity.name;
        self.pack = identity.pack;
        self.icon = TileIcon::Tile { tile_type, frame };
    }

    fn update_progress<H>(&mut self, host: &H, target: TileCoord, config: &TileDisplayConfig)
    where
        H: TileHost + ?Sized,
    {
        let goal = match host.find_interaction(target, config.interaction_search_distance) {
            InteractionLookup::Missing => 0.0,
            // A matched slot without data leaves the bar where it is.
            InteractionLookup::Empty => return,
            InteractionLookup::Damage(damage) => progress_target(self.state.width, damage),
        };
        self.state.progress = smooth(self.state.progress, goal, config.smoothing);
    }
}
