//! Chip styling configuration.
//!
//! The explicit, opt-in styling resource: the host builds a [`ChipStyles`]
//! and passes it to the projection. Nothing is injected globally.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - a `--no-color`-style flag from the host
/// - the `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from a host flag and the environment.
    ///
    /// Priority (first match wins):
    /// 1. the flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== ChipStyles =====

/// Styles for each part of the widget.
///
/// Valid chips read as filled pills; invalid chips keep the pill shape but
/// switch to the error color so the distinction survives at a glance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipStyles {
    chip: Style,
    invalid_chip: Style,
    remove: Style,
    input: Style,
    placeholder: Style,
}

impl ChipStyles {
    /// Default color scheme, honoring `NO_COLOR`.
    pub fn new() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }

    /// Build styles for the given color configuration.
    ///
    /// With colors disabled every part renders unstyled except the
    /// invalid marker, which falls back to underline so it remains
    /// distinguishable.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                chip: Style::default().fg(Color::White).bg(Color::Blue),
                invalid_chip: Style::default().fg(Color::White).bg(Color::Red),
                remove: Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
                input: Style::default().fg(Color::White),
                placeholder: Style::default().fg(Color::DarkGray),
            }
        } else {
            Self {
                chip: Style::default(),
                invalid_chip: Style::default().add_modifier(Modifier::UNDERLINED),
                remove: Style::default(),
                input: Style::default(),
                placeholder: Style::default(),
            }
        }
    }

    /// Style for a chip, chosen by the entry's classification.
    pub fn chip_style(&self, is_valid: bool) -> Style {
        if is_valid {
            self.chip
        } else {
            self.invalid_chip
        }
    }

    /// Style for the remove glyph, layered over the chip background.
    pub fn remove_style(&self, is_valid: bool) -> Style {
        self.chip_style(is_valid).patch(self.remove)
    }

    pub fn input_style(&self) -> Style {
        self.input
    }

    pub fn placeholder_style(&self) -> Style {
        self.placeholder
    }
}

impl Default for ChipStyles {
    fn default() -> Self {
        Self::new()
    }
}

// ===== Tests =====
