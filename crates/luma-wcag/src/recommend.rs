//! Contrast adjustment guidance.
//!
//! Buckets the gap between a measured contrast ratio and a target into
//! one of three recommendations, each with a fixed user-facing message.

use std::fmt;

/// Gap at or below this is a minor adjustment; above it, significant.
const MINOR_GAP: f64 = 1.5;

/// How far a contrast ratio sits from its target, bucketed for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Adjustment {
    /// The current ratio already meets or exceeds the target.
    MeetsTarget,
    /// Small gap — nudging the colors further apart is enough.
    Minor,
    /// Large gap — the pairing needs substantially different colors.
    Significant,
}

impl Adjustment {
    /// The user-facing recommendation message.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::MeetsTarget => "Contrast ratio already meets target",
            Self::Minor => "Increase contrast by making colors more different",
            Self::Significant => {
                "Significant contrast improvement needed - consider much darker or lighter colors"
            }
        }
    }
}

impl fmt::Display for Adjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Categorize the gap between a current and a target contrast ratio.
///
/// A gap of exactly 1.5 is still [`Adjustment::Minor`].
#[must_use]
pub fn recommend(current: f64, target: f64) -> Adjustment {
    if current >= target {
        Adjustment::MeetsTarget
    } else if target - current <= MINOR_GAP {
        Adjustment::Minor
    } else {
        Adjustment::Significant
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn above_target_meets() {
        assert_eq!(recommend(5.0, 4.5), Adjustment::MeetsTarget);
    }

    #[test]
    fn exactly_at_target_meets() {
        assert_eq!(recommend(3.0, 3.0), Adjustment::MeetsTarget);
    }

    #[test]
    fn gap_of_exactly_one_point_five_is_minor() {
        assert_eq!(recommend(3.0, 4.5), Adjustment::Minor);
    }

    #[test]
    fn small_gap_is_minor() {
        assert_eq!(recommend(3.1, 4.5), Adjustment::Minor);
    }

    #[test]
    fn just_past_the_boundary_is_significant() {
        assert_eq!(recommend(2.9, 4.5), Adjustment::Significant);
    }

    #[test]
    fn large_gap_is_significant() {
        assert_eq!(recommend(2.0, 7.0), Adjustment::Significant);
    }

    #[test]
    fn display_uses_fixed_messages() {
        assert_eq!(
            Adjustment::MeetsTarget.to_string(),
            "Contrast ratio already meets target"
        );
        assert_eq!(
            Adjustment::Minor.to_string(),
            "Increase contrast by making colors more different"
        );
        assert!(Adjustment::Significant.to_string().starts_with("Significant"));
    }
}
