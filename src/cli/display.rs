// Copyright 2025-present DevLearning Hub
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the syllabus CLI.
//!
//! Pretty terminal output that respects your color scheme. OneDark for dark
//! terminals, One Light for light ones. The shell hands [`set_theme`] the
//! merged preference (`--theme` flag over `SYLLABUS_THEME` over the settings
//! file); with no preference anywhere, detection looks at the terminal
//! itself and defaults to dark because most developers live there.
//!
//! Box drawing, category badges, score colors, highlighted match spans - the
//! little touches that make CLI output feel polished. Respects `NO_COLOR`
//! for the purists and non-TTY detection for pipelines.
//!
//! # Theme resolution order
//!
//! 1. `--theme` flag, for that run only
//! 2. `SYLLABUS_THEME` env var ("dark" or "light")
//! 3. Saved preference from the settings file
//! 4. `COLORFGBG` env var (terminal background hint)
//! 5. macOS appearance (via defaults read)
//! 6. Default to dark theme

use std::sync::OnceLock;

use syllabus::highlight::Span;
use syllabus::settings::{Theme, THEME_ENV};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME RESOLUTION
// ═══════════════════════════════════════════════════════════════════════════

/// Resolved theme for this process
static THEME: OnceLock<Theme> = OnceLock::new();

/// Record the theme preference before any output happens.
///
/// `None` means no saved preference; detection decides. Later calls are
/// no-ops: the first resolution wins for the life of the process.
pub fn set_theme(preference: Option<Theme>) {
    let resolved = preference.unwrap_or_else(detect_theme);
    let _ = THEME.set(resolved);
}

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    // 1. Explicit override via SYLLABUS_THEME
    if let Ok(value) = std::env::var(THEME_ENV) {
        if let Ok(theme) = value.parse() {
            return theme;
        }
    }

    // 2. COLORFGBG (format: "fg;bg" where bg > 6 typically means light)
    // Set by some terminals like xterm, rxvt
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                // Colors 0-6 are typically dark, 7+ are light
                // 15 = white, 0 = black
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    // 3. macOS: Check system appearance
    #[cfg(target_os = "macos")]
    {
        if let Ok(output) = std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            // "Dark" means dark mode; absence or error means light mode
            let stdout = String::from_utf8_lossy(&output.stdout);
            if !stdout.contains("Dark") && output.status.success() {
                return Theme::Light;
            }
        }
    }

    // 4. Default to dark (most developer terminals)
    Theme::Dark
}

/// Get the resolved theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════
//
// OneDark: https://github.com/joshdick/onedark.vim
// One Light: https://github.com/sonph/onehalf

/// True color escape sequence helper
fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

pub use colors::*;

/// OneDark palette
mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117);     // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);   // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);  // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);     // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);     // #56b6c2
    pub const WHITE: (u8, u8, u8) = (171, 178, 191);   // #abb2bf
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);      // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
    pub const BRIGHT_YELLOW: (u8, u8, u8) = (255, 215, 0);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (102, 217, 239);
}

/// One Light palette
mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73);       // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);     // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);    // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);     // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164);  // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);      // #0184bc
    pub const WHITE: (u8, u8, u8) = (56, 58, 66);      // #383a42 (foreground)
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);    // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
    pub const BRIGHT_YELLOW: (u8, u8, u8) = (152, 104, 1);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (1, 112, 158);
}

// ═══════════════════════════════════════════════════════════════════════════
// THEME-AWARE COLOR ACCESSORS
// ═══════════════════════════════════════════════════════════════════════════

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(WHITE);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);
theme_color!(BRIGHT_YELLOW);
theme_color!(BRIGHT_CYAN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply multiple styles
pub fn styled(styles: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", styles.join(""), text, RESET)
    } else {
        text.to_string()
    }
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = GRAY();
    let len = visible_len(content);
    let pad = BOX_WIDTH.saturating_sub(len);
    println!(
        "{}│{}{}{}{}│{}",
        border,
        RESET,
        content,
        " ".repeat(pad),
        border,
        RESET
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = GRAY();
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        RESET,
        label_part,
        border,
        "─".repeat(remaining),
        RESET
    );
}

/// Print section divider: ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    let border = GRAY();
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part) + 1);
    println!(
        "{}├{}{}{}─{}┤{}",
        border,
        RESET,
        label_part,
        border,
        "─".repeat(remaining),
        RESET
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    let border = GRAY();
    println!("{}└{}┘{}", border, "─".repeat(BOX_WIDTH), RESET);
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded category badge
pub fn category_badge(tag: &str) -> String {
    if !use_colors() {
        return format!("[{}]", tag);
    }
    let color = match tag {
        "GO" => CYAN(),
        "PY" => BLUE(),
        "RS" => YELLOW(),
        "JS" => BRIGHT_YELLOW(),
        "TS" => BRIGHT_CYAN(),
        "SQL" => MAGENTA(),
        _ => GRAY(),
    };
    format!("{}[{}]{}", color, tag, RESET)
}

/// Color-coded difficulty label
pub fn level_label(level: &str) -> String {
    if !use_colors() {
        return level.to_string();
    }
    let color = match level {
        "beginner" => GREEN(),
        "intermediate" => YELLOW(),
        "advanced" => RED(),
        _ => GRAY(),
    };
    format!("{}{}{}", color, level, RESET)
}

/// Color-coded relevance score. Thresholds follow the scoring tiers: a
/// title hit is worth 100, a category hit 50, a module-title hit 30.
pub fn score_value(score: u32) -> String {
    if !use_colors() {
        return format!("{:>5}", score);
    }
    let color = if score >= 100 {
        BRIGHT_GREEN()
    } else if score >= 50 {
        GREEN()
    } else if score >= 20 {
        YELLOW()
    } else {
        GRAY()
    };
    format!("{}{:>5}{}", color, score, RESET)
}

/// Render highlight spans as one line, matched parts emphasized.
pub fn highlighted(spans: &[Span<'_>]) -> String {
    if !use_colors() {
        return spans.iter().map(|s| s.text).collect();
    }
    let mut out = String::new();
    for span in spans {
        if span.matched {
            out.push_str(&format!("{}{}{}{}", BOLD, BRIGHT_YELLOW(), span.text, RESET));
        } else {
            out.push_str(span.text);
        }
    }
    out
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
