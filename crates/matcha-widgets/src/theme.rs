//! Static style lookup tables for field widgets.
//!
//! Every visual decision a field makes is resolved through three fixed
//! tables: [`variant_style`] (keyed by [`Variant`] and [`Theme`]),
//! [`size_metrics`] (keyed by [`FieldSize`]), and [`palette`] (keyed by
//! [`Theme`]). There is no computed styling; disabled/invalid overrides are
//! composed on top by the widget at render time.
//!
//! The theme is an explicit value threaded through widget configuration.
//! Nothing in this module touches global state, so rendering stays a pure
//! function of widget state.

use ratatui::style::{Color, Modifier, Style};

/// Light or dark color scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    /// For terminals with a light background (default).
    #[default]
    Light,
    /// For terminals with a dark background.
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// A named visual style bundle for the field body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    /// Tinted background, no border.
    Filled,
    /// Visible border, transparent background (default).
    #[default]
    Outlined,
    /// No border, no background.
    Ghost,
}

/// Field sizing preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldSize {
    /// Tight: no padding around the text line.
    Sm,
    /// Default: one cell of horizontal padding.
    #[default]
    Md,
    /// Roomy: wide horizontal padding plus vertical padding.
    Lg,
}

/// Style bundle selected by [`variant_style`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantStyle {
    /// Base style for the field body (text and background).
    pub base: Style,
    /// Border style, when a border is drawn.
    pub border: Style,
    /// Whether this variant draws a border around the field body.
    pub bordered: bool,
}

/// Padding metrics selected by [`size_metrics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeMetrics {
    /// Horizontal padding cells inside the field body.
    pub pad_x: u16,
    /// Vertical padding rows inside the field body.
    pub pad_y: u16,
}

/// Theme-wide styles for the text around the field body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Style for the label line above the field.
    pub label: Style,
    /// Style for helper text below the field.
    pub helper: Style,
    /// Style for error text and the invalid border override.
    pub error: Style,
    /// Style for placeholder text.
    pub placeholder: Style,
    /// Border/indicator color for the focused field.
    pub accent: Color,
}

/// Look up the style bundle for a variant under a theme.
pub fn variant_style(variant: Variant, theme: Theme) -> VariantStyle {
    match (variant, theme) {
        (Variant::Filled, Theme::Light) => VariantStyle {
            base: Style::default().fg(Color::Black).bg(Color::Gray),
            border: Style::default().fg(Color::Gray),
            bordered: false,
        },
        (Variant::Filled, Theme::Dark) => VariantStyle {
            base: Style::default().fg(Color::White).bg(Color::DarkGray),
            border: Style::default().fg(Color::DarkGray),
            bordered: false,
        },
        (Variant::Outlined, Theme::Light) => VariantStyle {
            base: Style::default().fg(Color::Black),
            border: Style::default().fg(Color::DarkGray),
            bordered: true,
        },
        (Variant::Outlined, Theme::Dark) => VariantStyle {
            base: Style::default().fg(Color::White),
            border: Style::default().fg(Color::Gray),
            bordered: true,
        },
        (Variant::Ghost, Theme::Light) => VariantStyle {
            base: Style::default().fg(Color::Black),
            border: Style::default(),
            bordered: false,
        },
        (Variant::Ghost, Theme::Dark) => VariantStyle {
            base: Style::default().fg(Color::White),
            border: Style::default(),
            bordered: false,
        },
    }
}

/// Look up the padding metrics for a size preset.
pub fn size_metrics(size: FieldSize) -> SizeMetrics {
    match size {
        FieldSize::Sm => SizeMetrics { pad_x: 0, pad_y: 0 },
        FieldSize::Md => SizeMetrics { pad_x: 1, pad_y: 0 },
        FieldSize::Lg => SizeMetrics { pad_x: 2, pad_y: 1 },
    }
}

/// Look up the surrounding-text palette for a theme.
pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => Palette {
            label: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            helper: Style::default().fg(Color::DarkGray),
            error: Style::default().fg(Color::Red),
            placeholder: Style::default().fg(Color::DarkGray),
            accent: Color::Blue,
        },
        Theme::Dark => Palette {
            label: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            helper: Style::default().fg(Color::Gray),
            error: Style::default().fg(Color::LightRed),
            placeholder: Style::default().fg(Color::DarkGray),
            accent: Color::LightBlue,
        },
    }
}
