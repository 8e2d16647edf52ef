use iced::widget::canvas;

use folio_core::{EntropyRandom, GlobeNetwork, SwarmField};

use super::Spring;
use crate::constants::{
    REVEAL_DAMPING, REVEAL_SLIDE_DISTANCE, REVEAL_STIFFNESS, TYPING_DELAY_TICKS,
    TYPING_TICKS_PER_CHAR, VEIL_DELAY_TICKS, VEIL_FADE_STEP,
};

/// State for the swarm field background canvas.
#[derive(Debug)]
pub struct SwarmFieldState {
    pub field: SwarmField,
    pub rng: EntropyRandom,
    pub cache: canvas::Cache,
}

impl SwarmFieldState {
    /// Creates a field sized to the current window.
    pub fn new(width: f32, height: f32) -> Self {
        let mut rng = EntropyRandom::new();
        let field = SwarmField::new(width, height, &mut rng);
        Self {
            field,
            rng,
            cache: canvas::Cache::default(),
        }
    }

    /// Advances the simulation by one frame.
    pub fn update(&mut self) {
        self.field.tick(&mut self.rng);
        self.cache.clear();
    }

    /// Resizes the field to match the window.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.field.resize(width, height);
        self.cache.clear();
    }
}

/// State for the globe network hero canvas.
#[derive(Debug)]
pub struct GlobeNetworkState {
    pub globe: GlobeNetwork,
    pub rng: EntropyRandom,
    pub cache: canvas::Cache,
}

impl GlobeNetworkState {
    /// Creates a globe for the hero surface. Compact mode reduces the node count.
    pub fn new(width: f32, height: f32, compact: bool) -> Self {
        let mut rng = EntropyRandom::new();
        let globe = GlobeNetwork::new(width, height, compact, &mut rng);
        Self {
            globe,
            rng,
            cache: canvas::Cache::default(),
        }
    }

    /// Advances the simulation by one frame.
    pub fn update(&mut self) {
        self.globe.tick(&mut self.rng);
        self.cache.clear();
    }
}

/// State for the hero title typing animation.
#[derive(Debug)]
pub struct TypingState {
    pub revealed: usize,
    target: usize,
    delay: u32,
    ticks: u32,
}

impl TypingState {
    /// Creates a typing animation over `target` characters.
    pub fn new(target: usize) -> Self {
        Self {
            revealed: 0,
            target,
            delay: TYPING_DELAY_TICKS,
            ticks: 0,
        }
    }

    /// Advances the typing animation by one tick. Returns true if still animating.
    pub fn update(&mut self) -> bool {
        if self.revealed >= self.target {
            return false;
        }
        if self.delay > 0 {
            self.delay -= 1;
            return true;
        }
        self.ticks += 1;
        if self.ticks >= TYPING_TICKS_PER_CHAR {
            self.ticks = 0;
            self.revealed += 1;
        }
        self.revealed < self.target
    }

    /// Returns true once every character is visible.
    pub fn is_done(&self) -> bool {
        self.revealed >= self.target
    }
}

/// State for the compact navigation menu overlay.
#[derive(Debug, Default)]
pub struct MenuState {
    pub spring: Spring,
}

impl MenuState {
    /// Advances the menu animation. Returns true while still moving.
    pub fn update(&mut self) -> bool {
        self.spring.update()
    }

    /// Flips the menu between open and closed.
    pub fn toggle(&mut self) {
        let target = if self.is_open() { 0.0 } else { 1.0 };
        self.spring.set_target(target);
    }

    /// Slides the menu shut.
    pub fn close(&mut self) {
        self.spring.set_target(0.0);
    }

    /// True while the menu is open or on its way open.
    pub fn is_open(&self) -> bool {
        self.spring.is_open()
    }

    /// Overlay progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        self.spring.value()
    }
}

/// Scroll-triggered reveal for a page section.
#[derive(Debug)]
pub struct SectionReveal {
    pub spring: Spring,
    pub triggered: bool,
}

impl Default for SectionReveal {
    fn default() -> Self {
        Self {
            spring: Spring::new(REVEAL_STIFFNESS, REVEAL_DAMPING),
            triggered: false,
        }
    }
}

impl SectionReveal {
    /// Starts the reveal the first time the section scrolls into view.
    pub fn trigger(&mut self) {
        if !self.triggered {
            self.triggered = true;
            self.spring.set_target(1.0);
        }
    }

    /// Updates the reveal animation. Returns true if still animating.
    pub fn update(&mut self) -> bool {
        if !self.triggered {
            return false;
        }
        self.spring.update()
    }

    /// Returns the current opacity (0.0 to 1.0).
    pub fn progress(&self) -> f32 {
        self.spring.value()
    }

    /// Returns the remaining upward slide distance in logical pixels.
    pub fn offset(&self) -> f32 {
        (1.0 - self.spring.value()) * REVEAL_SLIDE_DISTANCE
    }
}

/// State for the startup veil that fades the page in.
#[derive(Debug)]
pub struct VeilState {
    pub opacity: f32,
    delay: u32,
}

impl Default for VeilState {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            delay: VEIL_DELAY_TICKS,
        }
    }
}

impl VeilState {
    /// Fades the veil out after a short hold. Returns true while still visible.
    pub fn update(&mut self) -> bool {
        if self.delay > 0 {
            self.delay -= 1;
            return true;
        }
        if self.opacity > 0.0 {
            self.opacity = (self.opacity - VEIL_FADE_STEP).max(0.0);
        }
        self.opacity > 0.0
    }

    /// Returns true once the veil is fully transparent.
    pub fn is_done(&self) -> bool {
        self.delay == 0 && self.opacity <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_reveals_after_delay() {
        let mut typing = TypingState::new(10);
        for _ in 0..TYPING_DELAY_TICKS {
            typing.update();
            assert_eq!(typing.revealed, 0);
        }
        let mut guard = 0;
        while typing.update() {
            guard += 1;
            assert!(guard < 1000);
        }
        assert_eq!(typing.revealed, 10);
        assert!(typing.is_done());
    }

    #[test]
    fn test_veil_fades_to_transparent() {
        let mut veil = VeilState::default();
        let mut guard = 0;
        while veil.update() {
            guard += 1;
            assert!(guard < 1000);
        }
        assert_eq!(veil.opacity, 0.0);
        assert!(veil.is_done());
    }

    #[test]
    fn test_reveal_waits_for_trigger() {
        let mut reveal = SectionReveal::default();
        assert!(!reveal.update());
        assert_eq!(reveal.progress(), 0.0);

        reveal.trigger();
        for _ in 0..600 {
            if !reveal.update() {
                break;
            }
        }
        assert_eq!(reveal.progress(), 1.0);
        assert_eq!(reveal.offset(), 0.0);
    }
}
