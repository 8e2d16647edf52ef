use iced::Color;

/// Core color palette for the Folio dark theme.
#[derive(Debug, Clone, Copy)]
pub struct PaletteColors {
    pub background: Color,
    pub surface: Color,
    pub surface_raised: Color,
    pub border: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub accent_soft: Color,
    pub success: Color,
    pub danger: Color,
    pub glow: Color,
}

impl Default for PaletteColors {
    fn default() -> Self {
        Self::dark()
    }
}

impl PaletteColors {
    /// The single Folio palette. Near-black ground, white particles, cyan
    /// accent, violet glow.
    pub fn dark() -> Self {
        Self {
            background: Color::from_rgb8(10, 10, 10),     // Near black
            surface: Color::from_rgb8(18, 18, 20),        // Card ground
            surface_raised: Color::from_rgb8(26, 26, 30), // Raised card
            border: Color::from_rgb8(48, 48, 56),         // Subtle border
            text: Color::from_rgb8(245, 245, 248),        // Off-white
            muted: Color::from_rgb8(150, 150, 160),       // Dimmed copy
            accent: Color::from_rgb8(0, 212, 255),        // Cyan
            accent_soft: Color::from_rgb8(0, 150, 190),   // Deep cyan
            success: Color::from_rgb8(0, 212, 255),       // Cyan, send confirmation
            danger: Color::from_rgb8(255, 68, 68),        // Red, send failure
            glow: Color::from_rgb8(180, 100, 220),        // Violet accent ring
        }
    }
}

/// Returns the application palette.
pub fn palette() -> PaletteColors {
    PaletteColors::default()
}
