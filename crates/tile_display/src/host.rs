//! The embedding contract with the host game.
//!
//! The widget never reaches into global game state. Everything it needs per
//! frame is asked of the host through these traits, which the host
//! implements on one of its resources (see `TileDisplayPlugin`).

use bevy::prelude::*;

/// A world grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TileCoord {
    pub x: i32,
    pub y: i32,
}

impl TileCoord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance (8-neighbourhood steps) to `other`.
    pub fn chebyshev(self, other: TileCoord) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

/// Identifier of a registered tile type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileTypeId(pub u16);

/// A tile placed in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileInstance {
    pub tile_type: TileTypeId,
    /// Pixel offset of this instance's frame on its type's sprite sheet.
    pub frame_x: u16,
    pub frame_y: u16,
}

/// Result of looking up a tile-interaction (mining) record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionLookup {
    /// No record near the cell.
    Missing,
    /// A record slot matched but holds no damage data.
    Empty,
    /// Accumulated damage on a 0..=100 scale.
    Damage(f32),
}

/// Read-only world queries the widget makes once per frame.
pub trait TileHost {
    /// The cell the local player is aiming at.
    fn target_cell(&self) -> TileCoord;

    /// The tile at `cell`, or `None` for an empty (or out of bounds) cell.
    fn tile_at(&self, cell: TileCoord) -> Option<TileInstance>;

    /// Raw identifier of a tile type, e.g. `StoneBlock`.
    fn tile_name(&self, tile_type: TileTypeId) -> Option<&str>;

    /// Display name of the content pack that registered `tile_type`.
    /// `None` means the type belongs to the base game.
    fn owning_pack(&self, tile_type: TileTypeId) -> Option<&str>;

    /// Whether the type's look depends on the per-instance frame.
    fn is_frame_important(&self, tile_type: TileTypeId) -> bool;

    /// Look up the interaction record for `cell` in the local player's index.
    fn find_interaction(&self, cell: TileCoord, search_distance: u32) -> InteractionLookup;
}

/// Text measurement at a given label scale.
pub trait FontMetrics {
    fn measure(&self, text: &str, scale: f32) -> Vec2;
}

/// Sprite sheets for tile icons.
pub trait TileTextures {
    fn tile_texture(&self, tile_type: TileTypeId) -> Handle<Image>;
}

/// Per-character advance of Fira Mono, the font bundled by Bevy's
/// `default_font` feature, in ems.
pub const DEFAULT_FONT_ADVANCE: f32 = 0.6;

/// Fixed-advance approximation of a font, for hosts without a glyph cache.
///
/// The defaults match the monospace font the labels render with when no
/// other font is set, so measured widths equal rendered widths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphAdvanceMetrics {
    pub font_size: f32,
    /// Horizontal advance per character as a fraction of the font size.
    pub advance: f32,
    /// Line height as a fraction of the font size.
    pub line_height: f32,
}

impl GlyphAdvanceMetrics {
    pub fn new(font_size: f32) -> Self {
        Self {
            font_size,
            advance: DEFAULT_FONT_ADVANCE,
            line_height: 1.2,
        }
    }
}

impl Default for GlyphAdvanceMetrics {
    fn default() -> Self {
        Self::new(20.0)
    }
}

impl FontMetrics for GlyphAdvanceMetrics {
    fn measure(&self, text: &str, scale: f32) -> Vec2 {
        let size = self.font_size * scale;
        let chars = text.chars().count() as f32;
        let height = if text.is_empty() {
            0.0
        } else {
            size * self.line_height
        };
        Vec2::new(chars * size * self.advance, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chebyshev_distance() {
        let origin = TileCoord::new(0, 0);
        assert_eq!(origin.chebyshev(origin), 0);
        assert_eq!(origin.chebyshev(TileCoord::new(1, 1)), 1);
        assert_eq!(origin.chebyshev(TileCoord::new(-3, 2)), 3);
    }

    #[test]
    fn test_glyph_metrics_scale_with_text_and_scale() {
        let metrics = GlyphAdvanceMetrics::new(20.0);
        assert_eq!(metrics.measure("", 1.0), Vec2::ZERO);
        assert!((metrics.measure("Dirt", 1.0).x - 48.0).abs() < 1e-3);
        assert!((metrics.measure("Dirt", 0.5).x - 24.0).abs() < 1e-3);
        assert!(metrics.measure("Dirt", 1.0).y > 0.0);
    }

    #[test]
    fn test_default_metrics_match_rendered_label_width() {
        // A label at font size 16 in the bundled monospace font is 0.6 em
        // per character wide.
        let metrics = GlyphAdvanceMetrics::new(20.0);
        let rendered = "Silicate Crystal".chars().count() as f32 * 16.0 * 0.6;
        let measured = metrics.measure("Silicate Crystal", 0.8).x;
        assert!((measured - rendered).abs() < 1e-3, "measured = {measured}");
    }
}
