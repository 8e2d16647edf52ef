//! Folio Desktop - an animated portfolio site rebuilt as an Iced application.

pub mod animation;
pub mod canvas;
pub mod config;
pub mod constants;
pub mod contact;
pub mod content;
pub mod styles;
pub mod theme;

pub use animation::{
    GlobeNetworkState, MenuState, SectionReveal, Spring, SwarmFieldState, TypingState, VeilState,
};
pub use canvas::{GlobeNetworkCanvas, SwarmFieldCanvas};
pub use config::FolioConfig;
pub use constants::*;
pub use contact::{ContactError, ContactForm, ContactPayload, SendState};
pub use content::Section;
pub use styles::*;
pub use theme::{app_theme, palette, PaletteColors};
