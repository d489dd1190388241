use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SvgDrawOptions {
    #[serde(default)]
    pub theme: SvgTheme,
    /// Fraction of the bounding box width/height added as viewport margin
    pub margin_frac: f64,
    pub stroke_width_multiplier: f64,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgTheme::default(),
            margin_frac: 0.05,
            stroke_width_multiplier: 2.0,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize, Default)]
pub enum SvgTheme {
    #[default]
    EarthTones,
    Gray,
}

impl SvgTheme {
    pub fn fill(&self) -> &'static str {
        match self {
            SvgTheme::EarthTones => "#FFC879",
            SvgTheme::Gray => "#C3C3C3",
        }
    }

    pub fn stroke(&self) -> &'static str {
        match self {
            SvgTheme::EarthTones => "#2D2D2D",
            SvgTheme::Gray => "#636363",
        }
    }
}
