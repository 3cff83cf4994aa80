use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct InteractionPreferences {
    /// Radians of free-look rotation per pixel of mouse movement.
    pub look_sensitivity: f32,
    /// Whether free-look rotates about the cube's own axes instead of the
    /// screen axes.
    pub smart_rotation: bool,
    /// Pixels the pointer must travel along a slice before a drag commits to
    /// twisting it.
    pub twist_drag_threshold: f32,
}
