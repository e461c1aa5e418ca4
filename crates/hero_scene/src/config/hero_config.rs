//! # Hero Scene Configuration
//!
//! Every tunable of the hero scene lives here. The defaults reproduce the
//! portfolio hero exactly: two groups of three labels, a 4 s group cycle and a
//! 1.5 s highlight cycle.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{Config, ConfigError};
use crate::activation::Group;
use crate::foundation::math::Color;

/// Periods of the two activation timers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// How often the active group flips, in milliseconds
    pub group_period_ms: u64,
    /// How often the highlighted index advances, in milliseconds
    pub index_period_ms: u64,
}

impl TimingConfig {
    /// Group timer period
    pub fn group_period(&self) -> Duration {
        Duration::from_millis(self.group_period_ms)
    }

    /// Index timer period
    pub fn index_period(&self) -> Duration {
        Duration::from_millis(self.index_period_ms)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            group_period_ms: 4000,
            index_period_ms: 1500,
        }
    }
}

/// Per-frame motion and emphasis constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Radians added to every node's Y rotation each tick
    pub rotation_step: f32,
    /// Amplitude of the active node's X tilt, in radians
    pub tilt_amplitude: f32,
    /// Amplitude of the active node's scale pulse
    pub pulse_amplitude: f32,
    /// Emissive intensity of active or hovered nodes
    pub emissive_high: f32,
    /// Emissive intensity of every other node
    pub emissive_low: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            rotation_step: 0.005,
            tilt_amplitude: 0.1,
            pulse_amplitude: 0.05,
            emissive_high: 0.4,
            emissive_low: 0.2,
        }
    }
}

/// Placement of groups and nodes in world space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Distance of each group from the origin along X
    pub group_spacing: f32,
    /// Vertical distance between neighbouring nodes in a group
    pub node_spacing: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            group_spacing: 3.0,
            node_spacing: 1.2,
        }
    }
}

/// One thematic group of labels plus the overlay copy shown while it is active
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupConfig {
    /// Headline shown while the group is active
    pub title: String,
    /// Supporting sentence shown under the headline
    pub tagline: String,
    /// Node labels, top to bottom
    pub labels: Vec<String>,
    /// Base material color
    pub color: Color,
    /// Emissive color
    pub glow_color: Color,
}

impl GroupConfig {
    /// Default frontend group
    pub fn frontend() -> Self {
        Self {
            title: "Frontend Developer".to_string(),
            tagline: "Crafting immersive user experiences with cutting-edge technologies. \
                      Bringing designs to life with pixel-perfect precision and smooth animations."
                .to_string(),
            labels: vec!["REACT".to_string(), "JS".to_string(), "TS".to_string()],
            color: Color::rgb(0x00, 0xD9, 0xFF),
            glow_color: Color::rgb(0x39, 0xFF, 0x14),
        }
    }

    /// Default backend group
    pub fn backend() -> Self {
        Self {
            title: "Backend Developer".to_string(),
            tagline: "Building robust server architectures and scalable systems. \
                      Powering applications with efficient APIs and secure database solutions."
                .to_string(),
            labels: vec!["NODE".to_string(), "PYTHON".to_string(), "API".to_string()],
            color: Color::rgb(0x9D, 0x4E, 0xDD),
            glow_color: Color::rgb(0xFF, 0x2D, 0x92),
        }
    }
}

/// The two groups, keyed by [`Group`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupsConfig {
    /// Left-hand group
    pub frontend: GroupConfig,
    /// Right-hand group
    pub backend: GroupConfig,
}

impl GroupsConfig {
    /// Config for one group
    pub fn get(&self, group: Group) -> &GroupConfig {
        match group {
            Group::Frontend => &self.frontend,
            Group::Backend => &self.backend,
        }
    }
}

impl Default for GroupsConfig {
    fn default() -> Self {
        Self {
            frontend: GroupConfig::frontend(),
            backend: GroupConfig::backend(),
        }
    }
}

/// Top-level hero scene configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    /// Fallback log filter when `RUST_LOG` is unset
    pub log_level: String,
    /// Activation timer periods
    pub timing: TimingConfig,
    /// Motion and emphasis constants
    pub animation: AnimationConfig,
    /// World-space placement
    pub layout: LayoutConfig,
    /// Group contents
    pub groups: GroupsConfig,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            timing: TimingConfig::default(),
            animation: AnimationConfig::default(),
            layout: LayoutConfig::default(),
            groups: GroupsConfig::default(),
        }
    }
}

impl HeroConfig {
    /// Number of nodes in each group
    pub fn nodes_per_group(&self) -> usize {
        self.groups.frontend.labels.len()
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timing.group_period_ms == 0 || self.timing.index_period_ms == 0 {
            return Err(ConfigError::Invalid("timer periods must be at least 1 ms".to_string()));
        }

        let anim = &self.animation;
        if !anim.rotation_step.is_finite() || anim.rotation_step < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "rotation_step must be finite and non-negative, got {}",
                anim.rotation_step
            )));
        }
        if !anim.tilt_amplitude.is_finite() || !anim.pulse_amplitude.is_finite() {
            return Err(ConfigError::Invalid("motion amplitudes must be finite".to_string()));
        }
        for (name, value) in [("emissive_high", anim.emissive_high), ("emissive_low", anim.emissive_low)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!("{name} must be finite and non-negative, got {value}")));
            }
        }

        for (name, value) in [
            ("group_spacing", self.layout.group_spacing),
            ("node_spacing", self.layout.node_spacing),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }

        let frontend = self.groups.frontend.labels.len();
        let backend = self.groups.backend.labels.len();
        if frontend == 0 || backend == 0 {
            return Err(ConfigError::Invalid("every group needs at least one label".to_string()));
        }
        if frontend != backend {
            return Err(ConfigError::Invalid(format!(
                "groups must have the same number of labels (frontend {frontend}, backend {backend})"
            )));
        }

        Ok(())
    }
}

impl Config for HeroConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = HeroConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.nodes_per_group(), 3);
        assert_eq!(config.timing.group_period(), Duration::from_millis(4000));
        assert_eq!(config.timing.index_period(), Duration::from_millis(1500));
    }

    #[test]
    fn test_zero_period_rejected() {
        let mut config = HeroConfig::default();
        config.timing.index_period_ms = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_mismatched_labels_rejected() {
        let mut config = HeroConfig::default();
        config.groups.backend.labels.pop();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_empty_group_rejected() {
        let mut config = HeroConfig::default();
        config.groups.frontend.labels.clear();
        config.groups.backend.labels.clear();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_bad_animation_values_rejected() {
        let mut config = HeroConfig::default();
        config.animation.rotation_step = -0.1;
        assert!(config.validate().is_err());

        let mut config = HeroConfig::default();
        config.animation.emissive_low = f32::NAN;
        assert!(config.validate().is_err());

        let mut config = HeroConfig::default();
        config.layout.node_spacing = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: HeroConfig = toml::from_str(
            r##"
            log_level = "debug"

            [timing]
            index_period_ms = 1000

            [groups.backend]
            title = "Systems"
            tagline = "Low level"
            labels = ["RUST", "GO", "C"]
            color = "#112233"
            glow_color = "#AABBCC"
            "##,
        )
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.timing.group_period_ms, 4000);
        assert_eq!(config.timing.index_period_ms, 1000);
        assert_eq!(config.groups.frontend, GroupConfig::frontend());
        assert_eq!(config.groups.backend.color, Color::rgb(0x11, 0x22, 0x33));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bad_color_fails_to_parse() {
        let result: Result<GroupConfig, _> = toml::from_str(
            r##"
            title = "x"
            tagline = "y"
            labels = ["A"]
            color = "blue"
            glow_color = "#000000"
            "##,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = std::env::temp_dir();
        let toml_path = dir.join(format!("hero_config_test_{}.toml", std::process::id()));
        let ron_path = dir.join(format!("hero_config_test_{}.ron", std::process::id()));

        let mut config = HeroConfig::default();
        config.layout.group_spacing = 4.5;

        config.save_to_file(&toml_path).unwrap();
        config.save_to_file(&ron_path).unwrap();

        assert_eq!(HeroConfig::load_from_file(&toml_path).unwrap(), config);
        assert_eq!(HeroConfig::load_from_file(&ron_path).unwrap(), config);

        let _ = std::fs::remove_file(toml_path);
        let _ = std::fs::remove_file(ron_path);
    }

    #[test]
    fn test_unsupported_extension() {
        let err = HeroConfig::default().save_to_file("scene.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }
}
