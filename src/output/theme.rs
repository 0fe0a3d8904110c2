//! Grade colours for light and dark terminals

use clap::ValueEnum;
use owo_colors::{OwoColorize, Rgb};
use serde::{Deserialize, Serialize};

use crate::scoring::Grade;

/// Which palette to render with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

/// Theme preference as written in config or passed on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Auto,
    Light,
    Dark,
}

/// Foreground/background pair for a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub fg: (u8, u8, u8),
    pub bg: (u8, u8, u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeStyle {
    /// Colour family name, stable across themes
    pub token: &'static str,
    pub light: ColorPair,
    pub dark: ColorPair,
}

impl GradeStyle {
    pub fn pair(&self, theme: Theme) -> ColorPair {
        match theme {
            Theme::Light => self.light,
            Theme::Dark => self.dark,
        }
    }
}

/// Fixed style for each grade. Light pairs are dark text on a pale tint;
/// dark pairs are pale text on a deep shade of the same family.
pub fn grade_style(grade: Grade) -> GradeStyle {
    match grade {
        Grade::A => GradeStyle {
            token: "green",
            light: ColorPair { fg: (22, 101, 52), bg: (220, 252, 231) },
            dark: ColorPair { fg: (134, 239, 172), bg: (20, 83, 45) },
        },
        Grade::B => GradeStyle {
            token: "blue",
            light: ColorPair { fg: (30, 64, 175), bg: (219, 234, 254) },
            dark: ColorPair { fg: (147, 197, 253), bg: (30, 58, 138) },
        },
        Grade::C => GradeStyle {
            token: "yellow",
            light: ColorPair { fg: (133, 77, 14), bg: (254, 249, 195) },
            dark: ColorPair { fg: (253, 224, 71), bg: (113, 63, 18) },
        },
        Grade::D => GradeStyle {
            token: "red",
            light: ColorPair { fg: (153, 27, 27), bg: (254, 226, 226) },
            dark: ColorPair { fg: (252, 165, 165), bg: (127, 29, 29) },
        },
    }
}

/// Resolve a preference to a concrete theme, probing the terminal for `auto`.
pub fn resolve_theme(mode: ThemeMode) -> Theme {
    match mode {
        ThemeMode::Light => Theme::Light,
        ThemeMode::Dark => Theme::Dark,
        ThemeMode::Auto => match terminal_light::luma() {
            Ok(luma) if luma > 0.6 => Theme::Light,
            Ok(_) => Theme::Dark,
            Err(e) => {
                tracing::debug!("could not detect terminal background, assuming dark: {}", e);
                Theme::Dark
            }
        },
    }
}

/// Render the grade letter as a coloured badge, e.g. " A ".
pub fn grade_badge(grade: Grade, theme: Theme, use_colors: bool) -> String {
    let text = format!(" {} ", grade);
    if use_colors {
        let pair = grade_style(grade).pair(theme);
        let (fr, fg, fb) = pair.fg;
        let (br, bg, bb) = pair.bg;
        text.color(Rgb(fr, fg, fb)).on_color(Rgb(br, bg, bb)).bold().to_string()
    } else {
        text
    }
}
