//! Intensity shades for heatmap cells.

/// Hex shades for levels 0-4, darkest (no activity) to brightest.
const LEVEL_SHADES: [&str; 5] = ["#161b22", "#0e4429", "#006d32", "#26a641", "#39d353"];

/// Shade for an intensity level. Out-of-range levels map to the level-0
/// background shade, so padding cells and unexpected source values render
/// as empty.
pub fn level_color(level: u8) -> &'static str {
    LEVEL_SHADES
        .get(level as usize)
        .copied()
        .unwrap_or(LEVEL_SHADES[0])
}
