use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Platform;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Platform colours
// ---------------------------------------------------------------------------

/// Fixed colour per platform, shared by every chart and legend.
#[derive(Debug, Clone)]
pub struct PlatformColors {
    colors: [Color32; 4],
}

impl Default for PlatformColors {
    fn default() -> Self {
        let palette = generate_palette(Platform::ALL.len());
        let mut colors = [Color32::GRAY; 4];
        for (slot, c) in colors.iter_mut().zip(palette) {
            *slot = c;
        }
        PlatformColors { colors }
    }
}

impl PlatformColors {
    pub fn color_for(&self, platform: Platform) -> Color32 {
        self.colors[platform.flag_index()]
    }

    /// Same hue with reduced opacity, for overlapping fills.
    pub fn fill_for(&self, platform: Platform) -> Color32 {
        self.color_for(platform).gamma_multiply(0.35)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_is_distinct() {
        let palette = generate_palette(4);
        assert_eq!(palette.len(), 4);
        for (i, a) in palette.iter().enumerate() {
            for b in &palette[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn test_each_platform_has_its_own_colour() {
        let colors = PlatformColors::default();
        assert_ne!(
            colors.color_for(Platform::Netflix),
            colors.color_for(Platform::Hulu)
        );
        assert_ne!(colors.color_for(Platform::DisneyPlus), Color32::GRAY);
    }
}
