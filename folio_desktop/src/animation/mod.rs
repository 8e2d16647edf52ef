mod spring;
mod states;

pub use spring::Spring;
pub use states::{
    GlobeNetworkState, MenuState, SectionReveal, SwarmFieldState, TypingState, VeilState,
};
