use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Fixed series colours
// ---------------------------------------------------------------------------

/// Average salary line.
pub const AVG_SALARY: Color32 = Color32::from_rgb(0x82, 0xca, 0x9d);

/// Total jobs line.
pub const TOTAL_JOBS: Color32 = Color32::from_rgb(0x88, 0x84, 0xd8);

/// Title text in the header.
pub const BRAND: Color32 = Color32::from_rgb(0x69, 0x41, 0xc6);

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
            let hsl = Hsl::new(hue, 0.65, 0.6);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0).round() as u8,
                (rgb.green * 255.0).round() as u8,
                (rgb.blue * 255.0).round() as u8,
            )
        })
        .collect()
}
