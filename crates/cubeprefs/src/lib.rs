//! User preferences.
//!
//! Preferences are layered: the embedded `default.yaml` is loaded first, and
//! any user-supplied YAML overrides individual keys on top of it.

#![allow(missing_docs)] // fields are documented in `default.yaml`

#[macro_use]
extern crate lazy_static;

use std::path::Path;

use serde::{Deserialize, Serialize};

mod animation;
mod color;
mod interaction;
mod style;
mod view;

pub use animation::*;
pub use color::Rgb;
pub use interaction::*;
pub use style::*;
pub use view::*;

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

lazy_static! {
    pub static ref DEFAULT_PREFS: Preferences =
        serde_norway::from_str(DEFAULT_PREFS_STR).expect("error loading default preferences");
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Preferences {
    pub cube: CubePreferences,
    pub animation: AnimationPreferences,
    pub interaction: InteractionPreferences,
    pub view: ViewPreferences,
    pub style: StylePreferences,
}

impl Default for Preferences {
    fn default() -> Self {
        DEFAULT_PREFS.clone()
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct CubePreferences {
    /// Number of layers along each axis.
    pub size: usize,
}

impl Preferences {
    /// Loads preferences from the YAML file at `path`, layered over the
    /// defaults. If the file is missing, the defaults are used. If loading
    /// fails, a warning is logged and the defaults are returned.
    pub fn load(path: Option<&Path>) -> Self {
        lazy_static::initialize(&DEFAULT_PREFS);

        let mut config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT));

        // Load user preferences.
        if let Some(path) = path {
            config = config.add_source(
                config::File::from(path)
                    .format(PREFS_FILE_FORMAT)
                    .required(false),
            );
        }

        config_to_prefs(config).unwrap_or_else(|e| {
            log::warn!("Error loading preferences: {e}");
            DEFAULT_PREFS.clone()
        })
    }

    /// Parses user preferences from a YAML string, layered over the defaults.
    pub fn from_yaml_str(user_prefs: &str) -> eyre::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT))
            .add_source(config::File::from_str(user_prefs, PREFS_FILE_FORMAT));
        config_to_prefs(config)
    }

    /// Serializes the preferences to a YAML string.
    pub fn to_yaml_string(&self) -> eyre::Result<String> {
        Ok(serde_norway::to_string(self)?)
    }

    /// Returns an error if any preference is out of range.
    pub fn validate(&self) -> eyre::Result<()> {
        let Self {
            cube,
            animation,
            interaction,
            view,
            style,
        } = self;

        eyre::ensure!(cube.size >= 1, "cube size must be at least 1");
        eyre::ensure!(
            animation.twist_duration.is_finite() && animation.twist_duration >= 0.0,
            "twist duration must be nonnegative",
        );
        eyre::ensure!(
            interaction.look_sensitivity.is_finite(),
            "look sensitivity must be finite",
        );
        eyre::ensure!(
            interaction.twist_drag_threshold >= 0.0,
            "twist drag threshold must be nonnegative",
        );
        eyre::ensure!(
            view.initial_yaw.is_finite() && view.initial_pitch.is_finite(),
            "initial view angles must be finite",
        );
        eyre::ensure!(
            view.zoom.is_finite() && view.zoom > 0.0,
            "zoom must be positive",
        );
        eyre::ensure!(
            style.shininess.is_finite() && style.shininess >= 0.0,
            "shininess must be nonnegative",
        );
        eyre::ensure!(style.line_width >= 0.0, "line width must be nonnegative");
        Ok(())
    }
}

fn config_to_prefs(
    config: config::ConfigBuilder<config::builder::DefaultState>,
) -> eyre::Result<Preferences> {
    let prefs: Preferences = config.build()?.try_deserialize()?;
    prefs.validate()?;
    Ok(prefs)
}
