//! Gray-background sweeps.
//!
//! Two questions a designer asks about a text color:
//!
//! - How many standard gray backgrounds work with it? ([`gray_compatibility`])
//! - What is the darkest gray that still works? ([`accessible_gray_background`])
//!
//! Both sweep achromatic colors against the AA-normal threshold (4.5:1).
//! The sweeps are bounded — 52 coarse levels, at most 255 refinement
//! steps — so termination is structural.

use luma_term::color::Rgb;

use crate::contrast::contrast_ratio;
use crate::level::WcagLevel;

/// Step between gray levels in the coarse sweeps.
///
/// 255 is 5 × 51, so stepping by 5 lands exactly on both endpoints:
/// 0, 5, …, 250, 255 — 52 levels.
const GRAY_STEP: usize = 5;

/// Count the gray levels (0, 5, …, 255) that meet AA-normal contrast
/// against `color`.
///
/// Returns a value in [0, 52].
#[must_use]
pub fn gray_compatibility(color: Rgb) -> u32 {
    let threshold = WcagLevel::AaNormal.threshold();
    let mut passing = 0;

    for level in (0u16..=255).step_by(GRAY_STEP) {
        if contrast_ratio(color, Rgb::gray(level as u8)) >= threshold {
            passing += 1;
        }
    }

    passing
}

/// Find the darkest gray background that still meets AA-normal contrast
/// against `text`.
///
/// Two phases: a coarse scan from white toward black in steps of 5 keeps
/// the darkest qualifying level; a refinement pass then walks down one
/// level at a time until contrast first drops below the threshold. The
/// coarse step alone can overshoot the true boundary by up to 4 levels —
/// the refinement pass closes that gap.
///
/// Returns 255 when no gray qualifies. That fallback is indistinguishable
/// from a genuine answer of 255; in practice the coarse scan starts at
/// 255, so a passing white background always refines darker.
#[must_use]
pub fn accessible_gray_background(text: Rgb) -> u8 {
    let threshold = WcagLevel::AaNormal.threshold();

    // Coarse: lightest to darkest, so the last qualifying level wins.
    let mut darkest = 255u8;
    for level in (0u16..=255).step_by(GRAY_STEP).rev() {
        if contrast_ratio(text, Rgb::gray(level as u8)) >= threshold {
            darkest = level as u8;
        }
    }

    // Refine: walk down one level at a time, stopping before the first
    // failure.
    let mut level = i32::from(darkest);
    while level >= 0 {
        if contrast_ratio(text, Rgb::gray(level as u8)) < threshold {
            break;
        }
        darkest = level as u8;
        level -= 1;
    }

    darkest
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // ── Gray compatibility count ────────────────────────────────────

    #[test]
    fn black_text_counts_light_grays() {
        assert_eq!(gray_compatibility(Rgb::BLACK), 28);
    }

    #[test]
    fn white_text_counts_dark_grays() {
        assert_eq!(gray_compatibility(Rgb::WHITE), 24);
    }

    #[test]
    fn mid_gray_has_few_partners() {
        assert_eq!(gray_compatibility(Rgb::gray(128)), 5);
    }

    #[test]
    fn purple_count() {
        assert_eq!(gray_compatibility(Rgb::new(100, 50, 150)), 14);
    }

    #[test]
    fn pure_green_count() {
        assert_eq!(gray_compatibility(Rgb::new(0, 255, 0)), 20);
    }

    #[test]
    fn pure_red_count() {
        assert_eq!(gray_compatibility(Rgb::new(255, 0, 0)), 5);
    }

    #[test]
    fn count_never_exceeds_sweep_size() {
        for color in [Rgb::BLACK, Rgb::WHITE, Rgb::gray(117), Rgb::new(13, 201, 77)] {
            assert!(gray_compatibility(color) <= 52);
        }
    }

    // ── Darkest accessible gray ─────────────────────────────────────

    #[test]
    fn white_text_reaches_black_background() {
        assert_eq!(accessible_gray_background(Rgb::WHITE), 0);
    }

    #[test]
    fn black_text_refines_past_coarse_boundary() {
        // The step-5 scan bottoms out at 120; refinement finds 117.
        assert_eq!(accessible_gray_background(Rgb::BLACK), 117);
    }

    #[test]
    fn dim_gray_text_needs_light_background() {
        // Gray 100 is too dim for any dark background; only near-white
        // grays qualify, and refinement stops at 225.
        assert_eq!(accessible_gray_background(Rgb::gray(100)), 225);
    }

    #[test]
    fn mid_gray_text_reaches_black() {
        // Black itself clears 4.5:1 against gray 128, so the refinement
        // walks all the way down.
        assert_eq!(accessible_gray_background(Rgb::gray(128)), 0);
    }

    #[test]
    fn bright_primaries_reach_black() {
        assert_eq!(accessible_gray_background(Rgb::new(255, 0, 0)), 0);
        assert_eq!(accessible_gray_background(Rgb::new(0, 255, 0)), 0);
    }

    #[test]
    fn result_actually_passes_when_not_fallback() {
        let threshold = WcagLevel::AaNormal.threshold();
        for color in [Rgb::BLACK, Rgb::WHITE, Rgb::new(255, 0, 0), Rgb::gray(128)] {
            let gray = accessible_gray_background(color);
            let ratio = contrast_ratio(color, Rgb::gray(gray));
            assert!(ratio >= threshold, "Gray {gray} fails for {color}: {ratio}");
        }
    }
}
