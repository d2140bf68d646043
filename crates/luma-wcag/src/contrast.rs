//! WCAG relative luminance and contrast ratio.
//!
//! The two formulas everything else builds on, straight from WCAG 2.x:
//!
//! - Relative luminance: gamma-expand each channel, then weight
//!   `L = 0.2126 R + 0.7152 G + 0.0722 B`.
//! - Contrast ratio: `(L_lighter + 0.05) / (L_darker + 0.05)`,
//!   always in [1.0, 21.0].
//!
//! WCAG 2.x publishes the 0.03928 gamma branch point (inherited from an
//! early sRGB draft; the modern sRGB standard says 0.04045). Downstream
//! contrast ratios are sensitive to the branch, so the constants below
//! follow the WCAG text exactly.

use luma_term::color::Rgb;

// Gamma expansion (sRGB → linear light), WCAG form.
const GAMMA_THRESHOLD: f64 = 0.03928;
const GAMMA_DIVISOR: f64 = 12.92;
const GAMMA_OFFSET: f64 = 0.055;
const GAMMA_SCALE: f64 = 1.055;
const GAMMA_EXPONENT: f64 = 2.4;

// Luminance weights for the linearized channels.
const RED_WEIGHT: f64 = 0.2126;
const GREEN_WEIGHT: f64 = 0.7152;
const BLUE_WEIGHT: f64 = 0.0722;

/// Offset added to both luminances in the contrast quotient.
const CONTRAST_OFFSET: f64 = 0.05;

/// Gamma-expand one normalized channel into linear light.
#[inline]
fn linearize(channel: f64) -> f64 {
    if channel <= GAMMA_THRESHOLD {
        channel / GAMMA_DIVISOR
    } else {
        ((channel + GAMMA_OFFSET) / GAMMA_SCALE).powf(GAMMA_EXPONENT)
    }
}

/// Compute the relative luminance of a color per WCAG 2.x.
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    let r = linearize(f64::from(color.r) / 255.0);
    let g = linearize(f64::from(color.g) / 255.0);
    let b = linearize(f64::from(color.b) / 255.0);
    RED_WEIGHT.mul_add(r, GREEN_WEIGHT.mul_add(g, BLUE_WEIGHT * b))
}

/// Compute the WCAG contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0]. The lighter luminance is always the
/// numerator, so the result is the same regardless of argument order.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + CONTRAST_OFFSET) / (darker + CONTRAST_OFFSET)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
