use crate::constants::BUTTON_BORDER_RADIUS;
use crate::contact::SendState;
use crate::theme::PaletteColors;
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// Primary accent call-to-action. Hover casts a drifted cyan glow below
/// the button.
pub fn primary_button_style(
    palette: PaletteColors,
) -> impl Fn(&Theme, button::Status) -> button::Style + Clone {
    move |_, status| {
        let base = button::Style {
            background: Some(Background::Color(palette.accent)),
            text_color: palette.background,
            border: Border {
                radius: BUTTON_BORDER_RADIUS.into(),
                ..Border::default()
            },
            shadow: Shadow::default(),
            ..button::Style::default()
        };
        match status {
            button::Status::Hovered => button::Style {
                shadow: Shadow {
                    color: Color {
                        a: 0.4,
                        ..palette.accent
                    },
                    blur_radius: 30.0,
                    offset: Vector::new(0.0, 10.0),
                },
                ..base
            },
            button::Status::Pressed => button::Style {
                background: Some(Background::Color(palette.accent_soft)),
                ..base
            },
            _ => base,
        }
    }
}

/// Transparent button with an accent outline, the secondary hero action.
pub fn outline_button_style(
    palette: PaletteColors,
) -> impl Fn(&Theme, button::Status) -> button::Style + Clone {
    move |_, status| {
        let base = button::Style {
            background: Some(Background::Color(Color::TRANSPARENT)),
            text_color: palette.accent,
            border: Border {
                color: palette.accent,
                width: 1.0,
                radius: BUTTON_BORDER_RADIUS.into(),
            },
            shadow: Shadow::default(),
            ..button::Style::default()
        };
        match status {
            button::Status::Hovered => button::Style {
                background: Some(Background::Color(Color {
                    a: 0.1,
                    ..palette.accent
                })),
                shadow: Shadow {
                    color: palette.accent,
                    blur_radius: 8.0,
                    offset: Vector::default(),
                },
                ..base
            },
            _ => base,
        }
    }
}

/// Navigation link style. The active link carries the accent color.
pub fn nav_link_style(
    palette: PaletteColors,
    active: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style + Clone {
    move |_, status| {
        let text_color = if active || matches!(status, button::Status::Hovered) {
            palette.accent
        } else {
            palette.text
        };
        button::Style {
            background: Some(Background::Color(Color::TRANSPARENT)),
            text_color,
            border: Border::default(),
            shadow: Shadow::default(),
            ..button::Style::default()
        }
    }
}

/// Submit button whose color reports the outcome of the last send.
pub fn submit_button_style(
    palette: PaletteColors,
    state: SendState,
) -> impl Fn(&Theme, button::Status) -> button::Style + Clone {
    move |_, status| {
        let background = match state {
            SendState::Sent => palette.success,
            SendState::Failed => palette.danger,
            _ => palette.accent,
        };
        let shadow = match status {
            button::Status::Hovered => Shadow {
                color: background,
                blur_radius: 10.0,
                offset: Vector::default(),
            },
            _ => Shadow::default(),
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: palette.background,
            border: Border {
                color: background,
                width: 1.0,
                radius: BUTTON_BORDER_RADIUS.into(),
            },
            shadow,
            ..button::Style::default()
        }
    }
}

/// Circular scroll-to-top button, light on dark with a lift on hover.
pub fn scroll_top_button_style(
    palette: PaletteColors,
) -> impl Fn(&Theme, button::Status) -> button::Style + Clone {
    move |_, status| {
        let base = button::Style {
            background: Some(Background::Color(palette.text)),
            text_color: palette.background,
            border: Border {
                color: palette.text,
                width: 0.0,
                radius: 25.0.into(),
            },
            shadow: Shadow::default(),
            ..button::Style::default()
        };
        match status {
            button::Status::Hovered => button::Style {
                shadow: Shadow {
                    color: Color {
                        a: 0.2,
                        ..palette.text
                    },
                    blur_radius: 30.0,
                    offset: Vector::new(0.0, 10.0),
                },
                ..base
            },
            _ => base,
        }
    }
}

/// Hamburger toggle for the compact navigation menu.
pub fn menu_toggle_style(
    palette: PaletteColors,
    is_open: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style + Clone {
    move |_, status| {
        let text_color = if is_open || matches!(status, button::Status::Hovered) {
            palette.accent
        } else {
            palette.text
        };
        button::Style {
            background: Some(Background::Color(Color::TRANSPARENT)),
            text_color,
            border: Border::default(),
            shadow: Shadow::default(),
            ..button::Style::default()
        }
    }
}

/// Bare accent link for social and contact rows.
pub fn link_button_style(
    palette: PaletteColors,
) -> impl Fn(&Theme, button::Status) -> button::Style + Clone {
    move |_, status| {
        let text_color = match status {
            button::Status::Hovered => palette.accent,
            _ => palette.muted,
        };
        button::Style {
            background: Some(Background::Color(Color::TRANSPARENT)),
            text_color,
            border: Border::default(),
            shadow: Shadow::default(),
            ..button::Style::default()
        }
    }
}
