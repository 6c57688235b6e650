use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::derive::{COLOR_NEGATIVE, COLOR_NON_NEGATIVE};

// ---------------------------------------------------------------------------
// Sentiment colors
// ---------------------------------------------------------------------------

/// "skyblue", the non-negative sentiment color.
pub const SKYBLUE: Color32 = Color32::from_rgb(135, 206, 235);
/// "orange", the negative sentiment color.
pub const ORANGE: Color32 = Color32::from_rgb(255, 165, 0);

/// Resolve a derived `display_color` name to a paint color. Anything
/// unexpected renders gray rather than being dropped.
pub fn display_color32(name: &str) -> Color32 {
    match name {
        COLOR_NEGATIVE => ORANGE,
        COLOR_NON_NEGATIVE => SKYBLUE,
        _ => Color32::GRAY,
    }
}

// ---------------------------------------------------------------------------
// Category palette
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colors using evenly spaced hues, for the
/// per-type bar chart.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{ORANGE, SKYBLUE, display_color32, generate_palette};

    #[test]
    fn display_color_names_resolve_to_the_fixed_hues() {
        assert_eq!(display_color32("orange"), ORANGE);
        assert_eq!(display_color32("skyblue"), SKYBLUE);
        assert_ne!(display_color32("chartreuse"), ORANGE);
    }

    #[test]
    fn palette_has_one_distinct_color_per_category() {
        let colors = generate_palette(4);
        assert_eq!(colors.len(), 4);
        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
        assert!(generate_palette(0).is_empty());
    }
}
