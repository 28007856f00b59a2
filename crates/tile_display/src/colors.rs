//! Render colors derived from the current display state.

use bevy::prelude::*;

use crate::config::PROGRESS_OVERHANG;
use crate::widget::DisplayState;

/// Muted blue-violet used for the content pack label.
pub const PACK_LABEL_RGB: [u8; 3] = [88, 88, 173];

/// Tint a color by opacity (scales its alpha).
pub fn tinted(base: Color, opacity: f32) -> Color {
    base.with_alpha(base.alpha() * opacity)
}

/// Gray level of the progress bar: black when empty, white when it spans
/// the full panel.
pub fn progress_fill_ratio(state: &DisplayState) -> f32 {
    let span = state.width + PROGRESS_OVERHANG;
    if span <= 0.0 {
        return 0.0;
    }
    (state.progress / span).clamp(0.0, 1.0)
}

/// Colors for every part of the panel, recomputed after each update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidgetColors {
    pub panel: Color,
    pub icon: Color,
    pub name: Color,
    pub pack: Color,
    pub progress: Color,
    pub decoration: Color,
}

impl WidgetColors {
    pub fn derive(state: &DisplayState) -> Self {
        let opacity = state.opacity;
        let [r, g, b] = PACK_LABEL_RGB;
        let level = progress_fill_ratio(state);

        Self {
            panel: tinted(Color::WHITE, opacity),
            icon: tinted(Color::WHITE, opacity),
            name: tinted(Color::WHITE, opacity),
            pack: tinted(Color::srgb_u8(r, g, b), opacity),
            progress: tinted(Color::srgb(level, level, level), opacity),
            decoration: tinted(Color::WHITE, opacity),
        }
    }
}

impl Default for WidgetColors {
    fn default() -> Self {
        Self::derive(&DisplayState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(opacity: f32, width: f32, progress: f32) -> DisplayState {
        DisplayState {
            opacity,
            width,
            progress,
        }
    }

    #[test]
    fn test_hidden_state_is_fully_transparent() {
        let colors = WidgetColors::derive(&state(0.0, 100.0, 0.0));
        for color in [
            colors.panel,
            colors.icon,
            colors.name,
            colors.pack,
            colors.progress,
            colors.decoration,
        ] {
            assert_eq!(color.alpha(), 0.0);
        }
    }

    #[test]
    fn test_opacity_tints_alpha() {
        let colors = WidgetColors::derive(&state(0.5, 100.0, 0.0));
        assert_eq!(colors.panel.alpha(), 0.5);
        assert_eq!(colors.name.to_srgba().red, 1.0);
    }

    #[test]
    fn test_pack_label_color() {
        let colors = WidgetColors::derive(&state(1.0, 100.0, 0.0));
        let expected = Color::srgb_u8(88, 88, 173).to_srgba();
        let actual = colors.pack.to_srgba();
        assert_eq!(actual.red, expected.red);
        assert_eq!(actual.green, expected.green);
        assert_eq!(actual.blue, expected.blue);
        assert_eq!(actual.alpha, 1.0);
    }

    #[test]
    fn test_progress_empty_reads_black() {
        let colors = WidgetColors::derive(&state(1.0, 100.0, 0.0));
        let progress = colors.progress.to_srgba();
        assert_eq!((progress.red, progress.green, progress.blue), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_progress_full_reads_white() {
        let colors = WidgetColors::derive(&state(1.0, 100.0, 102.0));
        let progress = colors.progress.to_srgba();
        assert_eq!((progress.red, progress.green, progress.blue), (1.0, 1.0, 1.0));
    }

    #[test]
    fn test_progress_half_reads_mid_gray() {
        let colors = WidgetColors::derive(&state(1.0, 98.0, 50.0));
        let progress = colors.progress.to_srgba();
        assert!((progress.red - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_fill_ratio_is_clamped() {
        assert_eq!(progress_fill_ratio(&state(1.0, 10.0, 500.0)), 1.0);
        assert_eq!(progress_fill_ratio(&state(1.0, 10.0, -5.0)), 0.0);
    }
}
