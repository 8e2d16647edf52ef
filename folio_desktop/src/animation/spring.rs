use crate::constants::{SPRING_DAMPING, SPRING_STIFFNESS, SPRING_THRESHOLD};

/// Damped spring easing a unit value toward its target. Drives the menu
/// overlay, the section reveals and everything else that slides or fades.
#[derive(Debug, Clone, Copy)]
pub struct Spring {
    value: f32,
    velocity: f32,
    target: f32,
    stiffness: f32,
    damping: f32,
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(SPRING_STIFFNESS, SPRING_DAMPING)
    }
}

impl Spring {
    pub fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            value: 0.0,
            velocity: 0.0,
            target: 0.0,
            stiffness,
            damping,
        }
    }

    /// Advances one frame. Returns false once the value has settled on the
    /// target.
    pub fn update(&mut self) -> bool {
        let pull = (self.target - self.value) * self.stiffness;
        self.velocity = (self.velocity + pull) * self.damping;
        self.value = (self.value + self.velocity).clamp(0.0, 1.0);

        let settled = (self.target - self.value).abs() < SPRING_THRESHOLD
            && self.velocity.abs() < SPRING_THRESHOLD;
        if settled {
            self.value = self.target;
            self.velocity = 0.0;
        }
        !settled
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Current eased value in `[0, 1]`.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// True when the spring is heading for the open end.
    pub fn is_open(&self) -> bool {
        self.target > 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spring_settles_on_target() {
        let mut spring = Spring::default();
        spring.set_target(1.0);
        for _ in 0..600 {
            if !spring.update() {
                break;
            }
        }
        assert_eq!(spring.value(), 1.0);
        assert!(!spring.update());
    }

    #[test]
    fn test_spring_reports_motion() {
        let mut spring = Spring::new(0.12, 0.72);
        spring.set_target(1.0);
        assert!(spring.update());
        assert!(spring.value() > 0.0);
    }
}
