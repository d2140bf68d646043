//! Colorblindness simulation.
//!
//! Simplified channel-blend transforms — educational approximations of
//! how colors collapse for each dichromatic condition, not clinical
//! cone-response models. Results truncate to integers.

use luma_term::color::Rgb;

/// Deuteranopia blends red and green with these weights.
const DEUTERANOPIA_RED_WEIGHT: f64 = 0.75;
const DEUTERANOPIA_GREEN_WEIGHT: f64 = 0.25;

/// A dichromatic color vision condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    /// Missing L-cones (red-green, type 1).
    Protanopia,
    /// Missing M-cones (red-green, type 2).
    Deuteranopia,
    /// Missing S-cones (blue-yellow).
    Tritanopia,
}

impl Condition {
    /// All conditions, in report order.
    pub const ALL: [Self; 3] = [Self::Protanopia, Self::Deuteranopia, Self::Tritanopia];

    /// The string token this condition parses from.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Protanopia => "protanopia",
            Self::Deuteranopia => "deuteranopia",
            Self::Tritanopia => "tritanopia",
        }
    }

    /// Human-readable name for reports.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Protanopia => "Protanopia (Red-Green Type 1)",
            Self::Deuteranopia => "Deuteranopia (Red-Green Type 2)",
            Self::Tritanopia => "Tritanopia (Blue-Yellow)",
        }
    }

    /// Look up a condition by its string token.
    ///
    /// Returns `None` if the token is not recognized.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "protanopia" => Some(Self::Protanopia),
            "deuteranopia" => Some(Self::Deuteranopia),
            "tritanopia" => Some(Self::Tritanopia),
            _ => None,
        }
    }
}

/// Simulate how a color appears under a colorblind condition.
#[must_use]
pub fn simulate(color: Rgb, condition: Condition) -> Rgb {
    match condition {
        Condition::Protanopia => {
            // Red and green collapse to their mean.
            let rg = ((u16::from(color.r) + u16::from(color.g)) / 2) as u8;
            Rgb::new(rg, rg, color.b)
        }
        Condition::Deuteranopia => {
            // Red and green collapse to a red-weighted blend.
            let rg = (DEUTERANOPIA_RED_WEIGHT * f64::from(color.r)
                + DEUTERANOPIA_GREEN_WEIGHT * f64::from(color.g)) as u8;
            Rgb::new(rg, rg, color.b)
        }
        Condition::Tritanopia => {
            // Blue collapses toward green.
            let b = ((u16::from(color.g) + u16::from(color.b)) / 2) as u8;
            Rgb::new(color.r, color.g, b)
        }
    }
}

/// Simulate a condition given by its string token.
///
/// Unknown tokens are an identity transform — the color comes back
/// unchanged, by definition rather than by error.
#[must_use]
pub fn simulate_tag(color: Rgb, token: &str) -> Rgb {
    Condition::parse(token).map_or(color, |condition| simulate(color, condition))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
