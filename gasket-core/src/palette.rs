//! Colors and the repeating palette used to paint gasket faces.
use serde::Deserialize;

use crate::error::{GasketError, Result};

/// An RGB color with components in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "[f32; 3]")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const RED: Color = Color::new(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0);
    pub const PURPLE: Color = Color::new(1.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Scale every component by `factor`, clamping the result to `[0, 1]`
    pub fn shaded(self, factor: f32) -> Self {
        Self::new(
            (self.r * factor).clamp(0.0, 1.0),
            (self.g * factor).clamp(0.0, 1.0),
            (self.b * factor).clamp(0.0, 1.0),
        )
    }

    fn in_unit_range(&self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }
}

impl From<[f32; 3]> for Color {
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self::new(r, g, b)
    }
}

/// Number of entries in the reference palette
pub const PALETTE_SIZE: usize = 5;

/// A fixed, ordered color cycle.
///
/// Lookups wrap modulo the palette length, so any integer index is valid and
/// `color_at(k) == color_at(k + len)` for every `k`.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Build a palette, rejecting an empty list or out-of-range components
    pub fn new(colors: Vec<Color>) -> Result<Self> {
        if colors.is_empty() {
            return Err(GasketError::EmptyPalette);
        }
        if let Some((index, c)) = colors.iter().enumerate().find(|(_, c)| !c.in_unit_range()) {
            return Err(GasketError::ColorOutOfRange {
                index,
                r: c.r,
                g: c.g,
                b: c.b,
            });
        }
        Ok(Self { colors })
    }

    /// Red, green, blue, yellow, purple
    pub fn reference() -> Self {
        Self {
            colors: vec![
                Color::RED,
                Color::GREEN,
                Color::BLUE,
                Color::YELLOW,
                Color::PURPLE,
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `index`, wrapping modulo the palette size
    pub fn color_at(&self, index: i64) -> Color {
        let slot = index.rem_euclid(self.colors.len() as i64) as usize;
        self.colors[slot]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_palette_order() {
        let palette = Palette::reference();
        assert_eq!(palette.len(), PALETTE_SIZE);
        assert_eq!(palette.color_at(0), Color::RED);
        assert_eq!(palette.color_at(1), Color::GREEN);
        assert_eq!(palette.color_at(2), Color::BLUE);
        assert_eq!(palette.color_at(3), Color::YELLOW);
        assert_eq!(palette.color_at(4), Color::PURPLE);
    }

    #[test]
    fn test_color_at_wraps() {
        let palette = Palette::reference();
        assert_eq!(palette.color_at(5), Color::RED);
        assert_eq!(palette.color_at(7), Color::BLUE);
        assert_eq!(palette.color_at(-1), Color::PURPLE);
    }

    #[test]
    fn test_empty_palette_rejected() {
        assert!(matches!(Palette::new(vec![]), Err(GasketError::EmptyPalette)));
    }

    #[test]
    fn test_out_of_range_color_rejected() {
        let result = Palette::new(vec![Color::RED, Color::new(0.5, 1.5, 0.0)]);
        assert!(matches!(
            result,
            Err(GasketError::ColorOutOfRange { index: 1, .. })
        ));
    }

    #[test]
    fn test_shaded_clamps() {
        let c = Color::new(0.8, 0.4, 0.0).shaded(2.0);
        assert_eq!(c, Color::new(1.0, 0.8, 0.0));
    }
}
