use serde::{Deserialize, Serialize};
use web_time::Duration;

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct AnimationPreferences {
    /// Duration of one quarter turn, in seconds.
    pub twist_duration: f32,
    pub twist_easing: TwistEasing,
}

impl AnimationPreferences {
    /// Returns the duration of one quarter turn. Negative or non-finite values
    /// are treated as zero.
    pub fn twist_duration(&self) -> Duration {
        Duration::try_from_secs_f32(self.twist_duration).unwrap_or(Duration::ZERO)
    }
}

/// Shape of the angle-over-time curve of an animated quarter turn.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    strum::VariantArray,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TwistEasing {
    /// Constant angular speed.
    #[default]
    Linear,
    /// Accelerates out of rest and decelerates into it, fastest halfway.
    Smooth,
}

impl TwistEasing {
    /// Maps the phase of a turn to the fraction of the quarter turn that has
    /// been drawn. Both range from 0.0 to 1.0.
    pub fn ease(self, phase: f32) -> f32 {
        let t = phase.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Smooth => t * t * (3.0 - 2.0 * t),
        }
    }
}
