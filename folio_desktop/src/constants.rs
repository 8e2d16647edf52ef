// Animation timing
pub const TICK_INTERVAL_MS: u64 = 16;
pub const TYPING_DELAY_TICKS: u32 = 30;
pub const TYPING_TICKS_PER_CHAR: u32 = 2;
pub const VEIL_DELAY_TICKS: u32 = 6;
pub const VEIL_FADE_STEP: f32 = 0.04;

// Spring physics defaults
pub const SPRING_STIFFNESS: f32 = 0.03;
pub const SPRING_DAMPING: f32 = 0.80;
pub const SPRING_THRESHOLD: f32 = 0.001;

// Section reveals (fast and snappy)
pub const REVEAL_STIFFNESS: f32 = 0.12;
pub const REVEAL_DAMPING: f32 = 0.72;
pub const REVEAL_SLIDE_DISTANCE: f32 = 30.0;
pub const REVEAL_VIEWPORT_MARGIN: f32 = 50.0;

// Scroll thresholds
pub const NAV_SECTION_OFFSET: f32 = 200.0;
pub const NAVBAR_ELEVATE_OFFSET: f32 = 100.0;
pub const SCROLL_TOP_SHOW_OFFSET: f32 = 500.0;

// Contact form
pub const CONTACT_RESET_SECS: u64 = 3;

// UI dimensions
pub const WINDOW_WIDTH: f32 = 1280.0;
pub const WINDOW_HEIGHT: f32 = 800.0;
pub const COMPACT_NAV_WIDTH: f32 = 760.0;
pub const NAVBAR_HEIGHT: f32 = 64.0;
pub const MENU_BUTTON_SIZE: f32 = 44.0;
pub const SECTION_MAX_WIDTH: f32 = 980.0;
pub const GLOBE_SURFACE: f32 = 400.0;
pub const PARALLAX_RANGE: f32 = 5.0;
pub const INPUT_BORDER_RADIUS: f32 = 8.0;
pub const BUTTON_BORDER_RADIUS: f32 = 24.0;
pub const CARD_BORDER_RADIUS: f32 = 12.0;
pub const PROJECT_CARD_WIDTH: f32 = 420.0;
pub const SKILL_CARD_WIDTH: f32 = 280.0;

// Fixed section heights; the hero always matches the window height, so
// scroll targets and reveal thresholds can be computed without measuring
// the widget tree
pub const ABOUT_SECTION_HEIGHT: f32 = 640.0;
pub const PROJECTS_SECTION_HEIGHT: f32 = 960.0;
pub const SKILLS_SECTION_HEIGHT: f32 = 620.0;
pub const CONTACT_SECTION_HEIGHT: f32 = 780.0;
pub const FOOTER_HEIGHT: f32 = 120.0;
pub const REVEAL_SECTION_COUNT: usize = 4;
