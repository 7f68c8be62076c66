//! Discrete quality levels and the static cost profile each one implies.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// Quality level, ordered from most to least expensive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QualityTier {
    High,
    Medium,
    Low,
}

/// Construction and budget parameters tied to a tier.
#[derive(Clone, Debug, PartialEq)]
pub struct TierProfile {
    pub friction: f64,
    pub decay: Range<f64>,
    /// Radius range in CSS pixels; scaled by pixel density at spawn.
    pub radius: Range<f64>,
    pub glow: bool,
    pub batch_scale: f64,
    pub label_cap: usize,
    pub population_ceiling: usize,
    /// Reference count the controller measures headroom against.
    pub comfort_ceiling: usize,
    pub audio: bool,
    pub labels: bool,
}

impl QualityTier {
    pub const ALL: [QualityTier; 3] = [QualityTier::High, QualityTier::Medium, QualityTier::Low];

    #[inline]
    pub fn index(self) -> u8 {
        match self {
            QualityTier::High => 0,
            QualityTier::Medium => 1,
            QualityTier::Low => 2,
        }
    }

    #[inline]
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(QualityTier::High),
            1 => Some(QualityTier::Medium),
            2 => Some(QualityTier::Low),
            _ => None,
        }
    }

    /// One step cheaper, or `None` at the floor.
    #[inline]
    pub fn degraded(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// One step richer, or `None` at the top.
    #[inline]
    pub fn upgraded(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn profile(self) -> TierProfile {
        match self {
            QualityTier::High => TierProfile {
                friction: 0.992,
                decay: 0.012..0.024,
                radius: 1.8..3.4,
                glow: true,
                batch_scale: 1.0,
                label_cap: 12,
                population_ceiling: 500,
                comfort_ceiling: 800,
                audio: true,
                labels: true,
            },
            QualityTier::Medium => TierProfile {
                friction: 0.989,
                decay: 0.016..0.03,
                radius: 1.6..3.0,
                glow: false,
                batch_scale: 0.4,
                label_cap: 8,
                population_ceiling: 300,
                comfort_ceiling: 600,
                audio: true,
                labels: true,
            },
            QualityTier::Low => TierProfile {
                friction: 0.985,
                decay: 0.028..0.042,
                radius: 1.2..2.2,
                glow: false,
                batch_scale: 0.2,
                label_cap: 5,
                population_ceiling: 160,
                comfort_ceiling: 420,
                audio: false,
                labels: false,
            },
        }
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QualityTier::High => "high",
            QualityTier::Medium => "medium",
            QualityTier::Low => "low",
        };
        f.write_str(name)
    }
}

impl FromStr for QualityTier {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" | "0" => Ok(QualityTier::High),
            "medium" | "1" => Ok(QualityTier::Medium),
            "low" | "2" => Ok(QualityTier::Low),
            other => Err(anyhow::anyhow!("unknown quality tier {:?}", other)),
        }
    }
}
