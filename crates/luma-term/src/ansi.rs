// SPDX-License-Identifier: MIT
//
// ANSI escape sequence generation.
//
// Pure functions that write escape sequences to any `impl Write`. No state,
// no capability probing — callers decide what to emit. This module just
// knows the byte-level encoding of the few terminal commands the analyzer
// uses: truecolor SGR for swatches, and OSC 8 for clickable color links.
//
// All functions return `io::Result` propagated from the underlying writer.
// In practice they never fail when writing to a `Vec<u8>`-backed buffer.

use std::io::{self, Write};

use crate::color::Rgb;

// ─── SGR Color ───────────────────────────────────────────────────────────────

/// Set the foreground (text) color using 24-bit truecolor SGR.
#[inline]
pub fn fg(w: &mut impl Write, color: Rgb) -> io::Result<()> {
    write!(w, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
}

/// Set the background color using 24-bit truecolor SGR.
#[inline]
pub fn bg(w: &mut impl Write, color: Rgb) -> io::Result<()> {
    write!(w, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b)
}

/// Reset all SGR attributes to terminal defaults (SGR 0).
#[inline]
pub fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

/// Write an inline color swatch: two background-colored cells, then reset.
///
/// Renders as a small block of the color in any truecolor terminal.
pub fn swatch(w: &mut impl Write, color: Rgb) -> io::Result<()> {
    bg(w, color)?;
    w.write_all(b"  ")?;
    reset(w)
}

// ─── OSC 8 Hyperlinks ────────────────────────────────────────────────────────

/// Open an OSC 8 hyperlink. Everything written until [`hyperlink_close`]
/// becomes the link text.
///
/// Supported by iTerm2, `WezTerm`, Kitty, VS Code, Windows Terminal and
/// most other modern emulators; older terminals show the text unlinked.
#[inline]
pub fn hyperlink_open(w: &mut impl Write, url: &str) -> io::Result<()> {
    write!(w, "\x1b]8;;{url}\x1b\\")
}

/// Close the current OSC 8 hyperlink.
#[inline]
pub fn hyperlink_close(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b]8;;\x1b\\")
}

/// Write `text` as a clickable hyperlink to `url`.
pub fn hyperlink(w: &mut impl Write, url: &str, text: &str) -> io::Result<()> {
    hyperlink_open(w, url)?;
    w.write_all(text.as_bytes())?;
    hyperlink_close(w)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// Run a writer function against a fresh buffer, returning the bytes
    /// as a string.
    fn emit(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn fg_truecolor_sequence() {
        let out = emit(|w| fg(w, Rgb::new(255, 128, 0)));
        assert_eq!(out, "\x1b[38;2;255;128;0m");
    }

    #[test]
    fn bg_truecolor_sequence() {
        let out = emit(|w| bg(w, Rgb::new(0, 0, 255)));
        assert_eq!(out, "\x1b[48;2;0;0;255m");
    }

    #[test]
    fn reset_sequence() {
        let out = emit(reset);
        assert_eq!(out, "\x1b[0m");
    }

    #[test]
    fn swatch_is_bg_cells_reset() {
        let out = emit(|w| swatch(w, Rgb::new(10, 20, 30)));
        assert_eq!(out, "\x1b[48;2;10;20;30m  \x1b[0m");
    }

    #[test]
    fn hyperlink_wraps_text() {
        let out = emit(|w| hyperlink(w, "https://example.com", "View"));
        assert_eq!(out, "\x1b]8;;https://example.com\x1b\\View\x1b]8;;\x1b\\");
    }

    #[test]
    fn hyperlink_open_close_match() {
        let out = emit(|w| {
            hyperlink_open(w, "https://example.com")?;
            hyperlink_close(w)
        });
        assert_eq!(out, "\x1b]8;;https://example.com\x1b\\\x1b]8;;\x1b\\");
    }
}
