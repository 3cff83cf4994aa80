use cubepuzzle::Color;
use serde::{Deserialize, Serialize};

use crate::Rgb;

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct StylePreferences {
    pub background: Rgb,
    /// Display color for each facelet color, indexed by starting face.
    pub face_colors: [Rgb; 6],
    pub border_color: Rgb,
    /// Color of the cut surfaces exposed while a slice is turning.
    pub inner_color: Rgb,
    pub line_width: f32,
    /// Size of the specular highlight on each sticker. Zero gives flat
    /// stickers.
    pub shininess: f32,
}

impl StylePreferences {
    /// Returns the display color of a facelet color.
    pub fn face_color(&self, color: Color) -> Rgb {
        self.face_colors
            .get(color.index())
            .copied()
            .unwrap_or(self.inner_color)
    }
}
