//! Perceived brightness and the minimum-brightness step search.
//!
//! Brightness here is Rec. 601 luma — `0.299 R + 0.587 G + 0.114 B` —
//! truncated to an integer in [0, 255]. It is a different measure from
//! WCAG relative luminance: no gamma expansion, and it weights the raw
//! 8-bit channels directly.

use luma_term::color::Rgb;

// Rec. 601 luma weights.
const RED_WEIGHT: f64 = 0.299;
const GREEN_WEIGHT: f64 = 0.587;
const BLUE_WEIGHT: f64 = 0.114;

/// Per-step increment applied to each channel by the step search.
const STEP_INCREMENT: u8 = 1;

/// Compute the perceived brightness of a color, 0 (black) to 255 (white).
///
/// The weighted sum is truncated, not rounded: pure green `(0, 255, 0)`
/// is 149, not 150.
#[must_use]
pub fn brightness(color: Rgb) -> u8 {
    let luma = RED_WEIGHT * f64::from(color.r)
        + GREEN_WEIGHT * f64::from(color.g)
        + BLUE_WEIGHT * f64::from(color.b);
    luma as u8
}

/// Count the steps needed to reach a minimum brightness by incrementing
/// all three channels together.
///
/// The target is clamped into [0, 255] first. Each step adds 1 to every
/// channel (each saturating at 255); the count grows until the brightness
/// reaches the target or all channels saturate. A saturated color caps at
/// brightness 255, so the loop always terminates — but the returned count
/// alone does not say whether the target was actually met or the channels
/// ran out first.
#[must_use]
pub fn min_brightness_steps(color: Rgb, target: i32) -> u32 {
    let target = target.clamp(0, i32::from(u8::MAX)) as u8;

    if brightness(color) >= target {
        return 0;
    }

    let Rgb {
        mut r,
        mut g,
        mut b,
    } = color;
    let mut steps = 0;

    while brightness(Rgb::new(r, g, b)) < target {
        r = r.saturating_add(STEP_INCREMENT);
        g = g.saturating_add(STEP_INCREMENT);
        b = b.saturating_add(STEP_INCREMENT);
        steps += 1;

        // Saturation guard: nothing gets brighter past (255, 255, 255).
        if r == u8::MAX && g == u8::MAX && b == u8::MAX {
            break;
        }
    }

    steps
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // ── Brightness ──────────────────────────────────────────────────

    #[test]
    fn brightness_extremes() {
        assert_eq!(brightness(Rgb::WHITE), 255);
        assert_eq!(brightness(Rgb::BLACK), 0);
    }

    #[test]
    fn brightness_pure_channels() {
        assert_eq!(brightness(Rgb::new(255, 0, 0)), 76);
        assert_eq!(brightness(Rgb::new(0, 255, 0)), 149);
        assert_eq!(brightness(Rgb::new(0, 0, 255)), 29);
    }

    #[test]
    fn brightness_truncates() {
        // 0.587 * 255 = 149.685 — truncation keeps 149.
        assert_eq!(brightness(Rgb::new(0, 255, 0)), 149);
    }

    #[test]
    fn brightness_mid_gray() {
        assert_eq!(brightness(Rgb::gray(128)), 127);
    }

    // ── Step search ─────────────────────────────────────────────────

    #[test]
    fn steps_zero_when_already_bright() {
        assert_eq!(min_brightness_steps(Rgb::gray(100), 50), 0);
    }

    #[test]
    fn steps_from_black() {
        // Each step raises gray brightness by about one unit.
        assert_eq!(min_brightness_steps(Rgb::BLACK, 50), 50);
    }

    #[test]
    fn steps_can_overshoot_target_value() {
        // Truncation puts gray 128 at brightness 127, so reaching 128
        // from black costs 129 steps, not 128.
        assert_eq!(min_brightness_steps(Rgb::BLACK, 128), 129);
    }

    #[test]
    fn steps_mixed_color() {
        assert_eq!(min_brightness_steps(Rgb::new(10, 20, 30), 100), 82);
    }

    #[test]
    fn steps_negative_target_clamps_to_zero() {
        assert_eq!(min_brightness_steps(Rgb::gray(50), -20), 0);
    }

    #[test]
    fn steps_oversized_target_clamps_to_255() {
        // Target 300 clamps to 255; channels saturate after 15 steps.
        assert_eq!(min_brightness_steps(Rgb::gray(240), 300), 15);
    }

    #[test]
    fn steps_zero_target_on_black() {
        assert_eq!(min_brightness_steps(Rgb::BLACK, 0), 0);
    }

    #[test]
    fn steps_saturation_terminates() {
        // Near the ceiling the walk ends exactly when all channels hit 255.
        assert_eq!(min_brightness_steps(Rgb::gray(250), 255), 5);
    }

    #[test]
    fn steps_unbalanced_channels_saturate_together() {
        // Red starts saturated; green and blue walk the full range.
        assert_eq!(min_brightness_steps(Rgb::new(255, 0, 0), 255), 255);
    }
}
