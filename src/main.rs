// SPDX-License-Identifier: MIT
//
// luma — a terminal color accessibility analyzer.
//
// This is the main binary that wires together the crates:
//
//   luma-term → sRGB color values, hex parsing, ANSI swatches and links
//   luma-wcag → luminance, contrast, WCAG levels, the gray searches
//
// The app is a line-buffered menu loop. Each selection flows through:
//
//   stdin line → menu dispatch → validated hex prompts
//   → luma-wcag metrics → report sections on stdout
//
// Every report line is written through the Analyzer's writer, so the
// whole session can run against scripted input and a byte buffer in
// tests. End of input anywhere means a clean exit, never a hang.

use std::env;
use std::io::{self, BufRead, Write};
use std::process;
use std::sync::LazyLock;

use regex::Regex;

use luma_term::ansi;
use luma_term::color::Rgb;
use luma_wcag::brightness::{brightness, min_brightness_steps};
use luma_wcag::colorblind::{Condition, simulate};
use luma_wcag::contrast::{contrast_ratio, relative_luminance};
use luma_wcag::grays::{accessible_gray_background, gray_compatibility};
use luma_wcag::level::WcagLevel;
use luma_wcag::recommend::recommend;

// ─── Input validation ───────────────────────────────────────────────────────

/// Accepted hex color input: 3 or 6 hex digits, `#` optional.
static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex pattern compiles")
});

// ─── Report formatting ──────────────────────────────────────────────────────

/// Heavy rule around section headers.
const RULE: &str = "==================================================";

/// Light rule between menu rounds.
const THIN_RULE: &str = "--------------------------------------------------";

/// Brightness target used by the gray-compatibility report (mid-scale).
const MEDIUM_BRIGHTNESS: i32 = 128;

/// Number of gray levels the compatibility sweep tests.
const GRAY_LEVELS: u32 = 52;

/// Five-band label for a brightness value.
const fn brightness_band(value: u8) -> &'static str {
    match value {
        201..=255 => "Very Bright",
        151..=200 => "Bright",
        101..=150 => "Medium",
        51..=100 => "Dark",
        0..=50 => "Very Dark",
    }
}

/// External page showing the color, for terminals without link support.
fn swatch_url(color: Rgb) -> String {
    format!(
        "https://www.color-hex.com/color/{:02x}{:02x}{:02x}",
        color.r, color.g, color.b
    )
}

/// Whether the terminal is known to render OSC 8 hyperlinks.
///
/// iTerm2 and VS Code advertise via `TERM_PROGRAM`; Windows Terminal
/// sets `WT_SESSION`.
fn supports_hyperlinks() -> bool {
    let term_program = env::var("TERM_PROGRAM").unwrap_or_default();
    matches!(term_program.as_str(), "iTerm.app" | "vscode")
        || env::var("WT_SESSION").is_ok_and(|session| !session.is_empty())
}

/// Write a "View Color" link for the color: an OSC 8 hyperlink when the
/// terminal supports it, the plain URL otherwise.
fn write_swatch_link(w: &mut impl Write, color: Rgb) -> io::Result<()> {
    let url = swatch_url(color);
    if supports_hyperlinks() {
        ansi::hyperlink(w, &url, "View Color")
    } else {
        w.write_all(url.as_bytes())
    }
}

// ─── Analyzer ───────────────────────────────────────────────────────────────

/// The interactive analyzer session.
///
/// Generic over its reader and writer so tests can feed scripted lines
/// and capture the rendered report.
struct Analyzer<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Analyzer<R, W> {
    const fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Read one line, trimmed. `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt for a hex color until a valid one is entered.
    ///
    /// `None` when input ends mid-prompt.
    fn prompt_hex(&mut self, description: &str) -> io::Result<Option<Rgb>> {
        writeln!(self.out, "\nEnter {description} color:")?;
        loop {
            write!(self.out, "Hex color (e.g., #FF8040 or FF8040): ")?;
            self.out.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if HEX_COLOR.is_match(&line) {
                if let Some(color) = Rgb::hex(&line) {
                    return Ok(Some(color));
                }
            }
            writeln!(
                self.out,
                "Invalid hex format. Use format like #FF8040 or FF8040."
            )?;
        }
    }

    /// Write a section header between heavy rules.
    fn section(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out, "\n{RULE}")?;
        writeln!(self.out, "        {title}")?;
        writeln!(self.out, "{RULE}")
    }

    /// Write one color's identity line: label, hex, channels, swatch, link.
    fn color_line(&mut self, color: Rgb, label: &str) -> io::Result<()> {
        let (r, g, b) = color.channels();
        write!(self.out, "{label}: {color} | RGB({r}, {g}, {b}) ")?;
        ansi::swatch(&mut self.out, color)?;
        write!(self.out, " | ")?;
        write_swatch_link(&mut self.out, color)?;
        writeln!(self.out)
    }

    /// One color's vital signs: identity line plus brightness and luminance.
    fn color_info(&mut self, color: Rgb, label: &str) -> io::Result<()> {
        self.color_line(color, label)?;
        let value = brightness(color);
        writeln!(
            self.out,
            "  Brightness: {value}/255 ({})",
            brightness_band(value)
        )?;
        writeln!(self.out, "  Luminance: {:.3}", relative_luminance(color))
    }

    // ── Menu actions ────────────────────────────────────────────────────

    /// Option 1 — contrast check between two colors, with a compliance
    /// report and a recommendation.
    fn check_contrast(&mut self) -> io::Result<()> {
        self.section("WCAG CONTRAST CHECKER")?;

        let Some(fg) = self.prompt_hex("text")? else {
            return Ok(());
        };
        let Some(bg) = self.prompt_hex("background")? else {
            return Ok(());
        };

        let ratio = contrast_ratio(fg, bg);

        self.section("CONTRAST RESULTS")?;
        self.color_info(fg, "Text")?;
        self.color_info(bg, "Background")?;
        writeln!(self.out, "\nContrast Ratio: {ratio:.1}:1\n")?;

        writeln!(self.out, "WCAG COMPLIANCE:")?;
        for level in WcagLevel::ALL {
            if level.passes(ratio) {
                writeln!(self.out, "✓ {} - PASS", level.description())?;
            } else {
                writeln!(self.out, "✗ {} - FAIL", level.description())?;
            }
        }

        writeln!(self.out)?;
        let aa = WcagLevel::AaNormal.threshold();
        let aaa = WcagLevel::AaaNormal.threshold();
        if ratio < aa {
            writeln!(self.out, "RECOMMENDATION:")?;
            writeln!(self.out, "{}", recommend(ratio, aa))?;
        } else if ratio >= aaa {
            writeln!(self.out, "OUTSTANDING: Exceeds all accessibility standards!")?;
        } else {
            writeln!(self.out, "GOOD: Meets basic web accessibility requirements.")?;
        }
        Ok(())
    }

    /// Option 2 — single-color analysis with gray-sweep results and
    /// brightness-band design suggestions.
    fn analyze_color(&mut self) -> io::Result<()> {
        self.section("COLOR ANALYZER")?;
        let Some(color) = self.prompt_hex("the")? else {
            return Ok(());
        };

        self.section("ANALYSIS RESULTS")?;
        self.color_info(color, "Color")?;

        let compatible = gray_compatibility(color);
        let best_gray = Rgb::gray(accessible_gray_background(color));

        writeln!(self.out, "\nWEB ACCESSIBILITY ANALYSIS:")?;
        writeln!(
            self.out,
            "Gray backgrounds meeting WCAG AA: {compatible} out of {GRAY_LEVELS}"
        )?;
        write!(self.out, "Darkest accessible gray: {best_gray} ")?;
        ansi::swatch(&mut self.out, best_gray)?;
        write!(self.out, " | ")?;
        write_swatch_link(&mut self.out, best_gray)?;
        writeln!(self.out)?;

        writeln!(self.out, "\nWEB DESIGN SUGGESTIONS:")?;
        let value = brightness(color);
        if value > 180 {
            writeln!(self.out, "- Good for page backgrounds")?;
            writeln!(self.out, "- Pair with dark text colors")?;
        } else if value < 80 {
            writeln!(self.out, "- Ideal for text and headings")?;
            writeln!(self.out, "- Use on light backgrounds")?;
        } else {
            writeln!(self.out, "- Versatile mid-tone color")?;
            writeln!(self.out, "- Test contrast with intended backgrounds")?;
        }
        Ok(())
    }

    /// Option 3 — how the color appears under each colorblind condition.
    fn simulate_view(&mut self) -> io::Result<()> {
        self.section("COLORBLIND SIMULATOR")?;
        let Some(color) = self.prompt_hex("the")? else {
            return Ok(());
        };

        self.section("SIMULATION RESULTS")?;
        self.color_line(color, "Original")?;

        writeln!(self.out, "\nHow this appears to colorblind users:")?;
        for condition in Condition::ALL {
            let seen = simulate(color, condition);
            self.color_line(seen, condition.description())?;
        }
        Ok(())
    }

    /// Option 4 — gray-background compatibility report for a text color.
    fn gray_report(&mut self) -> io::Result<()> {
        self.section("GRAY COMPATIBILITY TESTER")?;
        let Some(color) = self.prompt_hex("text")? else {
            return Ok(());
        };

        let compatible = gray_compatibility(color);
        let best_gray = Rgb::gray(accessible_gray_background(color));
        let steps = min_brightness_steps(color, MEDIUM_BRIGHTNESS);

        self.section("COMPATIBILITY RESULTS")?;
        self.color_info(color, "Text Color")?;

        writeln!(self.out, "\nGRAY BACKGROUND COMPATIBILITY:")?;
        writeln!(
            self.out,
            "Compatible grays: {compatible} out of {GRAY_LEVELS} tested"
        )?;
        write!(self.out, "Darkest usable: {best_gray} ")?;
        ansi::swatch(&mut self.out, best_gray)?;
        write!(self.out, " | ")?;
        write_swatch_link(&mut self.out, best_gray)?;
        writeln!(self.out)?;

        if steps == 0 {
            writeln!(
                self.out,
                "Text brightness: Already above medium ({MEDIUM_BRIGHTNESS})"
            )?;
        } else {
            writeln!(self.out, "Steps to medium brightness: {steps}")?;
        }

        writeln!(self.out, "\nWEB DESIGN RECOMMENDATIONS:")?;
        if compatible > 35 {
            writeln!(self.out, "- Highly versatile text color")?;
            writeln!(self.out, "- Works with wide range of backgrounds")?;
        } else if compatible > 20 {
            writeln!(self.out, "- Good text color with decent flexibility")?;
            writeln!(self.out, "- Test specific gray combinations")?;
        } else if compatible > 10 {
            writeln!(self.out, "- Limited gray compatibility")?;
            writeln!(self.out, "- Consider alternative text colors")?;
        } else {
            writeln!(self.out, "- Poor gray compatibility")?;
            writeln!(self.out, "- Use with carefully chosen backgrounds only")?;
        }
        Ok(())
    }

    // ── Menu loop ───────────────────────────────────────────────────────

    fn menu(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n{RULE}")?;
        writeln!(self.out, "     WEB ACCESSIBILITY ANALYZER")?;
        writeln!(self.out, "{RULE}")?;
        writeln!(self.out, "1. Check WCAG contrast compliance")?;
        writeln!(self.out, "2. Analyze color properties")?;
        writeln!(self.out, "3. Test colorblind accessibility")?;
        writeln!(self.out, "4. Find compatible gray backgrounds")?;
        writeln!(self.out, "5. Exit")?;
        writeln!(self.out, "{RULE}")
    }

    /// The interactive loop: banner, then menu rounds until exit or EOF.
    fn run(&mut self) -> io::Result<()> {
        writeln!(self.out, "WEB ACCESSIBILITY COLOR ANALYZER")?;
        writeln!(
            self.out,
            "Ensure your website colors meet accessibility standards!"
        )?;
        writeln!(self.out, "Enter all colors in hex format (e.g., #FF8040)")?;
        writeln!(
            self.out,
            "Note: Color links work in modern terminals like Windows Terminal, iTerm2"
        )?;

        loop {
            self.menu()?;
            write!(self.out, "\nSelect option (1-5): ")?;
            self.out.flush()?;

            let Some(choice) = self.read_line()? else {
                break;
            };
            match choice.as_str() {
                "1" => self.check_contrast()?,
                "2" => self.analyze_color()?,
                "3" => self.simulate_view()?,
                "4" => self.gray_report()?,
                "5" => {
                    writeln!(self.out, "\nThanks for using the Web Accessibility Analyzer!")?;
                    writeln!(self.out, "Build inclusive websites that work for everyone!")?;
                    break;
                }
                _ => writeln!(self.out, "Please enter 1, 2, 3, 4, or 5.")?,
            }

            writeln!(self.out, "\n{THIN_RULE}")?;
            write!(self.out, "Press Enter to continue...")?;
            self.out.flush()?;
            if self.read_line()?.is_none() {
                break;
            }
        }
        Ok(())
    }
}

fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut analyzer = Analyzer::new(stdin.lock(), stdout.lock());

    if let Err(e) = analyzer.run() {
        eprintln!("luma: {e}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
