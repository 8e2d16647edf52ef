use super::palette::palette;
use iced::{theme, Theme};

/// Creates the custom Folio theme.
pub fn app_theme() -> Theme {
    let p = palette();
    Theme::custom(
        "Folio".to_string(),
        theme::Palette {
            background: p.background,
            text: p.text,
            primary: p.accent,
            success: p.success,
            warning: theme::Palette::DARK.warning,
            danger: p.danger,
        },
    )
}
