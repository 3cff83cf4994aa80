use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct ViewPreferences {
    /// Initial horizontal free-look angle, in radians.
    pub initial_yaw: f32,
    /// Initial vertical free-look angle, in radians.
    pub initial_pitch: f32,
    pub zoom: f32,
}
