use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::smoothing::DEFAULT_SMOOTHING;

/// Distance of the panel's top edge from the top of the screen.
pub const PANEL_TOP: f32 = 24.0;
/// Fixed panel height in logical pixels.
pub const PANEL_HEIGHT: f32 = 48.0;

/// Icon frames are 16x16 cells laid out on an 18 px stride (2 px gutter).
pub const ICON_FRAME_SIZE: f32 = 16.0;
pub const SHEET_STRIDE: f32 = 18.0;
/// Sheet cell used as the representative icon of a tile type.
pub const DEFAULT_ICON_COLUMN: f32 = 9.0;
pub const DEFAULT_ICON_ROW: f32 = 3.0;

/// Labels start right after the icon frame.
pub const LABEL_INSET: f32 = ICON_FRAME_SIZE;
pub const LABEL_MARGIN: f32 = 8.0;
pub const NAME_SCALE: f32 = 0.8;
pub const PACK_SCALE: f32 = 0.6;

/// The progress bar hangs this far past the panel's left edge and is this
/// much wider than the panel when full.
pub const PROGRESS_OVERHANG: f32 = 2.0;
pub const PROGRESS_HEIGHT: f32 = 2.0;

/// Width of the left/right cap decorations.
pub const DECORATION_WIDTH: f32 = 4.0;

/// Damage value at which a tile breaks.
pub const MAX_DAMAGE: f32 = 100.0;

/// Tunable behavior of the tile display.
///
/// Loadable from JSON; any missing field takes its default.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileDisplayConfig {
    /// Fraction of the remaining distance covered per update. Must be in (0, 1].
    pub smoothing: f32,
    /// Pack label shown for tiles that belong to the base game.
    pub base_game_name: String,
    /// Search distance passed to the host's interaction index.
    pub interaction_search_distance: u32,
    /// Base font size; labels render at this times their scale.
    pub font_size: f32,
}

impl Default for TileDisplayConfig {
    fn default() -> Self {
        Self {
            smoothing: DEFAULT_SMOOTHING,
            base_game_name: "Terraria".to_string(),
            interaction_search_distance: 1,
            font_size: 20.0,
        }
    }
}

impl TileDisplayConfig {
    /// Clamp out-of-range values back into something the widget can use.
    pub fn sanitized(mut self) -> Self {
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            warn!(
                "Tile display smoothing {} is outside (0, 1]; using {}",
                self.smoothing, DEFAULT_SMOOTHING
            );
            self.smoothing = DEFAULT_SMOOTHING;
        }
        if !(self.font_size > 0.0) {
            warn!("Tile display font size {} is not positive; using 20", self.font_size);
            self.font_size = 20.0;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = TileDisplayConfig::default();
        assert_eq!(config.smoothing, 0.2);
        assert_eq!(config.base_game_name, "Terraria");
        assert_eq!(config.interaction_search_distance, 1);
    }

    #[test]
    fn test_sanitized_keeps_valid_values() {
        let config = TileDisplayConfig {
            smoothing: 0.5,
            ..Default::default()
        };
        assert_eq!(config.clone().sanitized(), config);
    }

    #[test]
    fn test_sanitized_resets_bad_smoothing() {
        for bad in [0.0, -0.3, 1.5, f32::NAN] {
            let config = TileDisplayConfig {
                smoothing: bad,
                ..Default::default()
            }
            .sanitized();
            assert_eq!(config.smoothing, DEFAULT_SMOOTHING, "input {bad}");
        }
    }

    #[test]
    fn test_sanitized_resets_bad_font_size() {
        let config = TileDisplayConfig {
            font_size: 0.0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(config.font_size, 20.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: TileDisplayConfig =
            serde_json::from_str(r#"{ "base_game_name": "Sandbox" }"#).expect("valid json");
        assert_eq!(config.base_game_name, "Sandbox");
        assert_eq!(config.smoothing, DEFAULT_SMOOTHING);
        assert_eq!(config.font_size, 20.0);
    }
}
