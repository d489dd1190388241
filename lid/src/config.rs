use serde::{Deserialize, Serialize};

use crate::io::svg_util::SvgDrawOptions;

/// Configuration for the `lid` binary
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct LidConfig {
    /// Percentage of the initial vertex count the polygon is decimated down to
    pub target_percent: u64,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for LidConfig {
    fn default() -> Self {
        Self {
            target_percent: 50,
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
