use crate::constants::CARD_BORDER_RADIUS;
use crate::theme::PaletteColors;
use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// Navigation bar style. Gains a shadow and loses translucency once the page
/// has scrolled past the hero.
pub fn navbar_style(
    palette: PaletteColors,
    elevated: bool,
) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_| {
        let alpha = if elevated { 0.98 } else { 0.95 };
        let shadow = if elevated {
            Shadow {
                color: Color {
                    a: 0.1,
                    ..palette.text
                },
                offset: Vector::new(0.0, 2.0),
                blur_radius: 20.0,
            }
        } else {
            Shadow::default()
        };
        container::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..palette.background
            })),
            border: Border {
                color: palette.border,
                width: 1.0,
                radius: 0.0.into(),
            },
            shadow,
            ..Default::default()
        }
    }
}

/// Card style for project, skill and stat tiles.
pub fn card_style(palette: PaletteColors) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_| container::Style {
        background: Some(Background::Color(Color {
            a: 0.6,
            ..palette.surface
        })),
        text_color: Some(palette.text),
        border: Border {
            color: palette.border,
            width: 1.0,
            radius: CARD_BORDER_RADIUS.into(),
        },
        ..Default::default()
    }
}

/// Small rounded pill for technology tags.
pub fn tag_style(palette: PaletteColors) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_| container::Style {
        background: Some(Background::Color(Color {
            a: 0.15,
            ..palette.accent
        })),
        text_color: Some(palette.accent),
        border: Border {
            color: Color {
                a: 0.4,
                ..palette.accent
            },
            width: 1.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    }
}

/// Dropdown panel for the compact navigation menu.
pub fn menu_panel_style(
    palette: PaletteColors,
    progress: f32,
) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_| container::Style {
        background: Some(Background::Color(Color {
            a: 0.98 * progress,
            ..palette.background
        })),
        border: Border {
            color: Color {
                a: progress,
                ..palette.border
            },
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Full-window veil that fades the page in on startup.
pub fn veil_style(
    palette: PaletteColors,
    opacity: f32,
) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_| container::Style {
        background: Some(Background::Color(Color {
            a: opacity,
            ..palette.background
        })),
        ..Default::default()
    }
}
