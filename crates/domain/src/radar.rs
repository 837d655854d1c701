//! Radar chart configuration and layout for player skill attributes.
//!
//! `RadarChartSpec` is the declarative description (labels, values, scale);
//! `RadarGeometry` turns it into plain coordinates that any renderer can
//! draw. Both are pure.

use std::f64::consts::PI;

use crate::Player;

/// A skill field that can be plotted on the radar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillAttribute {
    Pace,
    Shooting,
    Passing,
    Dribbling,
    Defending,
    Physical,
}

impl SkillAttribute {
    /// Internal field name on the player record
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Pace => "pace",
            Self::Shooting => "shooting",
            Self::Passing => "passing",
            Self::Dribbling => "dribbling",
            Self::Defending => "defending",
            Self::Physical => "physical",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pace => "Pace",
            Self::Shooting => "Shooting",
            Self::Passing => "Passing",
            Self::Dribbling => "Dribbling",
            Self::Defending => "Defending",
            Self::Physical => "Physical",
        }
    }

    pub fn value_of(&self, player: &Player) -> Option<u8> {
        match self {
            Self::Pace => player.pace,
            Self::Shooting => player.shooting,
            Self::Passing => player.passing,
            Self::Dribbling => player.dribbling,
            Self::Defending => player.defending,
            Self::Physical => player.physical,
        }
    }
}

/// A named, fixed group of attributes shown together on one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkillCategory {
    #[default]
    MainSkills,
}

impl SkillCategory {
    pub fn all() -> &'static [SkillCategory] {
        &[SkillCategory::MainSkills]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::MainSkills => "Main Skills",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.name() == name)
    }

    pub fn attributes(&self) -> &'static [SkillAttribute] {
        match self {
            Self::MainSkills => &[
                SkillAttribute::Pace,
                SkillAttribute::Shooting,
                SkillAttribute::Passing,
                SkillAttribute::Dribbling,
                SkillAttribute::Defending,
                SkillAttribute::Physical,
            ],
        }
    }
}

/// Declarative radar chart configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadarChartSpec {
    pub title: String,
    pub dataset_label: String,
    pub labels: Vec<String>,
    pub values: Vec<u8>,
    pub min: u8,
    pub max: u8,
    pub step: u8,
}

impl RadarChartSpec {
    /// Chart of `category` for `player`. Missing skill fields plot as 0.
    pub fn for_player(player: &Player, category: SkillCategory) -> Self {
        let attributes = category.attributes();
        Self {
            title: format!("{} - {}", player.long_name, category.name()),
            dataset_label: player.long_name.clone(),
            labels: attributes.iter().map(|a| a.label().to_string()).collect(),
            values: attributes
                .iter()
                .map(|a| a.value_of(player).unwrap_or(0))
                .collect(),
            min: 0,
            max: 100,
            step: 20,
        }
    }

    /// Tick values of the radial scale, excluding the origin.
    pub fn ticks(&self) -> Vec<u8> {
        if self.step == 0 || self.max <= self.min {
            return Vec::new();
        }
        (self.min..=self.max)
            .step_by(self.step as usize)
            .filter(|t| *t > self.min)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadarAxis {
    pub label: String,
    pub end: RadarPoint,
    pub label_at: RadarPoint,
}

/// Coordinates for drawing a radar chart inside a `size` x `size` box.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarGeometry {
    pub size: f64,
    pub center: RadarPoint,
    pub radius: f64,
    pub axes: Vec<RadarAxis>,
    /// One closed polygon per scale tick, innermost first
    pub rings: Vec<Vec<RadarPoint>>,
    pub polygon: Vec<RadarPoint>,
}

/// Fraction of the half-size used by the plot; the rest holds labels.
const PLOT_FRACTION: f64 = 0.7;
const LABEL_OFFSET: f64 = 1.15;

impl RadarGeometry {
    pub fn layout(spec: &RadarChartSpec, size: f64) -> Self {
        let center = RadarPoint {
            x: size / 2.0,
            y: size / 2.0,
        };
        let radius = size / 2.0 * PLOT_FRACTION;
        let n = spec.labels.len();
        let span = f64::from(spec.max.saturating_sub(spec.min)).max(1.0);

        let at = |index: usize, r: f64| -> RadarPoint {
            // First axis points straight up, then clockwise.
            let angle = -PI / 2.0 + 2.0 * PI * index as f64 / n as f64;
            RadarPoint {
                x: center.x + r * angle.cos(),
                y: center.y + r * angle.sin(),
            }
        };

        let axes = spec
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| RadarAxis {
                label: label.clone(),
                end: at(i, radius),
                label_at: at(i, radius * LABEL_OFFSET),
            })
            .collect();

        let rings = if n == 0 {
            Vec::new()
        } else {
            spec.ticks()
                .into_iter()
                .map(|tick| {
                    let r = radius * f64::from(tick - spec.min) / span;
                    (0..n).map(|i| at(i, r)).collect()
                })
                .collect()
        };

        let polygon = spec
            .values
            .iter()
            .take(n)
            .enumerate()
            .map(|(i, value)| {
                let clamped = (*value).clamp(spec.min, spec.max);
                at(i, radius * f64::from(clamped - spec.min) / span)
            })
            .collect();

        Self {
            size,
            center,
            radius,
            axes,
            rings,
            polygon,
        }
    }
}
