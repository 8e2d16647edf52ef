//! Swarm field renderer
//!
//! Full-surface particle background: eight drifting swarms of glowing
//! particles, flickering inter-swarm connections with dashed fracture
//! segments, and three wandering glow blobs. [`SwarmField::tick`] computes one
//! frame of output records and then advances the clock, so the first frame
//! reflects the freshly initialised field.

use crate::geometry::Vec2;
use crate::rng::RandomSource;

/// Number of swarms in the field.
pub const SWARM_COUNT: usize = 8;
/// Particles per swarm.
pub const PARTICLES_PER_SWARM: usize = 80;
/// Simulated time advance per tick.
pub const TIME_STEP: f32 = 0.3;
/// Centre distance below which two swarms are connected.
pub const CONNECT_DISTANCE: f32 = 800.0;
/// Probability of a dashed fracture segment on a connection.
pub const FRACTURE_CHANCE: f32 = 0.3;
/// Alpha of the full-surface wash painted before everything else.
pub const TRAIL_WASH_ALPHA: f32 = 0.95;
/// Number of ambient glow blobs.
pub const GLOW_COUNT: usize = 3;
/// Particles chained pairwise inside each swarm.
pub const INTRA_LINK_COUNT: usize = 20;
/// Alpha of the intra-swarm chain lines.
pub const INTRA_LINK_ALPHA: f32 = 0.08;

/// One particle orbiting its swarm centre.
#[derive(Debug, Clone)]
pub struct Particle {
    pub angle: f32,
    pub radius: f32,
    pub size: f32,
    pub brightness: f32,
    pub offset: Vec2,
    /// Screen position, overwritten every tick.
    pub position: Vec2,
    /// Draw alpha, overwritten every tick.
    pub alpha: f32,
}

/// One swarm of particles with a drifting centre.
#[derive(Debug, Clone)]
pub struct Swarm {
    pub base: Vec2,
    pub center: Vec2,
    pub rotation: f32,
    pub scale: f32,
    pub asymmetry: f32,
    pub pulse_phase: f32,
    pub particles: Vec<Particle>,
}

/// Dashed secondary segment of a connection, the damaged-network motif.
#[derive(Debug, Clone, Copy)]
pub struct Fracture {
    /// Flicker-offset midpoint the dashed segment runs to.
    pub to: Vec2,
    pub alpha: f32,
}

/// Line between two nearby swarm centres.
#[derive(Debug, Clone, Copy)]
pub struct Connection {
    pub from: Vec2,
    /// Far endpoint, already distortion-offset.
    pub to: Vec2,
    pub alpha: f32,
    pub fracture: Option<Fracture>,
}

/// Wandering ambient glow blob.
#[derive(Debug, Clone, Copy)]
pub struct GlowPulse {
    pub center: Vec2,
    pub radius: f32,
    pub alpha: f32,
}

/// Renderer state for the swarm field background.
#[derive(Debug)]
pub struct SwarmField {
    width: f32,
    height: f32,
    time: f32,
    audio_reactivity: f32,
    pub swarms: Vec<Swarm>,
    pub connections: Vec<Connection>,
    pub glows: Vec<GlowPulse>,
}

impl SwarmField {
    /// Seeds the field over a surface of the given size.
    pub fn new(width: f32, height: f32, rng: &mut dyn RandomSource) -> Self {
        let swarms = (0..SWARM_COUNT)
            .map(|_| {
                let base = Vec2::new(rng.range(width * 0.8), rng.range(height * 0.8));
                let rotation = rng.angle();
                let scale = 0.5 + rng.range(1.5);
                let pulse_phase = rng.angle();
                let asymmetry = 0.5 + rng.range(0.5);
                let particles = (0..PARTICLES_PER_SWARM)
                    .map(|_| Particle {
                        angle: rng.angle(),
                        radius: rng.range(200.0),
                        size: 0.5 + rng.range(2.0),
                        brightness: 0.3 + rng.range(0.5),
                        offset: Vec2::new(
                            (rng.next_f32() - 0.5) * 100.0,
                            (rng.next_f32() - 0.5) * 100.0,
                        ),
                        position: Vec2::ZERO,
                        alpha: 0.0,
                    })
                    .collect();
                Swarm {
                    base,
                    center: base,
                    rotation,
                    scale,
                    asymmetry,
                    pulse_phase,
                    particles,
                }
            })
            .collect();

        tracing::debug!(width, height, "swarm field seeded");

        Self {
            width,
            height,
            time: 0.0,
            audio_reactivity: 1.0,
            swarms,
            connections: Vec::new(),
            glows: Vec::new(),
        }
    }

    /// Computes one frame of output, then advances the clock.
    pub fn tick(&mut self, rng: &mut dyn RandomSource) {
        let t = self.time;

        for (idx, swarm) in self.swarms.iter_mut().enumerate() {
            let i = idx as f32;
            // Two slow sinusoids per axis. Per-swarm frequencies keep the
            // swarms uncorrelated while every term vanishes at t = 0.
            let chaos_x = (t * 0.005 * (1.0 + i * 0.07)).sin() * 300.0
                + (t * 0.0015 * (1.0 + i * 0.13)).sin() * 200.0;
            let chaos_y = (t * 0.006 * (1.0 + i * 0.09)).sin() * 300.0
                + (t * 0.002 * (1.0 + i * 0.15)).sin() * 250.0;
            swarm.center = Vec2::new(swarm.base.x + chaos_x, swarm.base.y + chaos_y);

            swarm.rotation += (rng.next_f32() - 0.5) * 0.1 + 0.01;
            swarm.pulse_phase += 0.02;

            let offset_multiplier = (t * 0.01 + i).sin() * swarm.asymmetry;
            for particle in &mut swarm.particles {
                let pulsed =
                    particle.radius * (0.7 + (swarm.pulse_phase + particle.angle).sin() * 0.3);
                let reach = particle.angle + swarm.rotation;
                particle.position = Vec2::new(
                    swarm.center.x + reach.cos() * pulsed + particle.offset.x * offset_multiplier,
                    swarm.center.y + reach.sin() * pulsed + particle.offset.y * offset_multiplier,
                );
                particle.alpha = particle.brightness
                    * (0.5 + (t * 0.03 + particle.angle).sin() * 0.5)
                    * self.audio_reactivity;
            }
        }

        self.connections.clear();
        for i in 0..self.swarms.len() {
            for j in (i + 1)..self.swarms.len() {
                let from = self.swarms[i].center;
                let to = self.swarms[j].center;
                let distance = from.distance(to);
                if distance >= CONNECT_DISTANCE {
                    continue;
                }

                let alpha = (1.0 - distance / CONNECT_DISTANCE) * self.audio_reactivity * 0.2;
                let fracture = if rng.chance(FRACTURE_CHANCE) {
                    let flicker = (t * 0.05 + (i * j) as f32).sin() * 20.0;
                    Some(Fracture {
                        to: Vec2::new(
                            (from.x + to.x) / 2.0 + flicker,
                            (from.y + to.y) / 2.0 + flicker,
                        ),
                        alpha: alpha * 0.6,
                    })
                } else {
                    None
                };

                self.connections.push(Connection {
                    from,
                    to: Vec2::new(
                        to.x + (t * 0.02 + i as f32).cos() * 15.0,
                        to.y + (t * 0.025 + j as f32).sin() * 15.0,
                    ),
                    alpha,
                    fracture,
                });
            }
        }

        self.glows.clear();
        for g in 0..GLOW_COUNT {
            let i = g as f32;
            self.glows.push(GlowPulse {
                center: Vec2::new(
                    (t * 0.015 + i * 2.0).sin() * self.width * 0.4 + self.width * 0.5,
                    (t * 0.018 + i * 2.5).cos() * self.height * 0.4 + self.height * 0.5,
                ),
                radius: 100.0 + (t * 0.02 + i).sin() * 50.0,
                alpha: self.audio_reactivity * 0.15,
            });
        }

        self.time = t + TIME_STEP;
    }

    /// Updates the surface size. Swarm anchors keep their coordinates; the
    /// drift re-covers the new area on its own.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Scales particle and connection intensity. 1.0 is the resting level.
    pub fn set_audio_reactivity(&mut self, value: f32) {
        self.audio_reactivity = value;
    }

    pub fn audio_reactivity(&self) -> f32 {
        self.audio_reactivity
    }

    /// Multiplier applied to particle sizes when painting this frame.
    pub fn size_factor(&self) -> f32 {
        0.7 + self.audio_reactivity * 0.6
    }

    pub fn dimensions(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{ConstRandom, SeededRandom};

    #[test]
    fn test_population_is_fixed() {
        let mut rng = SeededRandom::new(11);
        let mut field = SwarmField::new(1280.0, 800.0, &mut rng);
        assert_eq!(field.swarms.len(), SWARM_COUNT);
        for _ in 0..200 {
            field.tick(&mut rng);
            assert_eq!(field.swarms.len(), SWARM_COUNT);
            for swarm in &field.swarms {
                assert_eq!(swarm.particles.len(), PARTICLES_PER_SWARM);
            }
        }
    }

    #[test]
    fn test_first_frame_centers_match_bases() {
        let mut rng = ConstRandom(0.5);
        let mut field = SwarmField::new(1200.0, 800.0, &mut rng);
        field.tick(&mut rng);
        for swarm in &field.swarms {
            assert_eq!(swarm.center, swarm.base);
        }
    }

    #[test]
    fn test_centers_drift_after_first_frame() {
        let mut rng = ConstRandom(0.5);
        let mut field = SwarmField::new(1200.0, 800.0, &mut rng);
        for _ in 0..50 {
            field.tick(&mut rng);
        }
        let moved = field
            .swarms
            .iter()
            .any(|swarm| swarm.center.distance(swarm.base) > 1.0);
        assert!(moved);
    }

    #[test]
    fn test_seeded_runs_are_identical() {
        let mut rng_a = SeededRandom::new(42);
        let mut rng_b = SeededRandom::new(42);
        let mut a = SwarmField::new(1024.0, 768.0, &mut rng_a);
        let mut b = SwarmField::new(1024.0, 768.0, &mut rng_b);
        for _ in 0..100 {
            a.tick(&mut rng_a);
            b.tick(&mut rng_b);
        }
        for (sa, sb) in a.swarms.iter().zip(&b.swarms) {
            assert_eq!(sa.center, sb.center);
            assert_eq!(sa.rotation, sb.rotation);
            for (pa, pb) in sa.particles.iter().zip(&sb.particles) {
                assert_eq!(pa.position, pb.position);
                assert_eq!(pa.alpha, pb.alpha);
            }
        }
        assert_eq!(a.connections.len(), b.connections.len());
        assert_eq!(a.glows.len(), b.glows.len());
    }

    #[test]
    fn test_resize_keeps_swarm_anchors() {
        let mut rng = SeededRandom::new(5);
        let mut field = SwarmField::new(800.0, 600.0, &mut rng);
        let bases: Vec<Vec2> = field.swarms.iter().map(|s| s.base).collect();
        field.resize(2560.0, 1440.0);
        field.tick(&mut rng);
        for (swarm, base) in field.swarms.iter().zip(&bases) {
            assert_eq!(swarm.base, *base);
        }
        assert_eq!(field.dimensions(), (2560.0, 1440.0));
    }

    #[test]
    fn test_connection_alpha_falls_with_distance() {
        let mut rng = SeededRandom::new(8);
        let mut field = SwarmField::new(1600.0, 900.0, &mut rng);
        field.tick(&mut rng);
        for connection in &field.connections {
            assert!(connection.alpha > 0.0);
            assert!(connection.alpha <= 0.2);
            if let Some(fracture) = &connection.fracture {
                assert!((fracture.alpha - connection.alpha * 0.6).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_audio_reactivity_scales_output() {
        let mut rng = ConstRandom(0.5);
        let mut field = SwarmField::new(1000.0, 700.0, &mut rng);
        field.set_audio_reactivity(0.0);
        field.tick(&mut rng);
        for swarm in &field.swarms {
            for particle in &swarm.particles {
                assert_eq!(particle.alpha, 0.0);
            }
        }
        for glow in &field.glows {
            assert_eq!(glow.alpha, 0.0);
        }
        assert_eq!(field.size_factor(), 0.7);
    }

    #[test]
    fn test_glow_count_and_radius_band() {
        let mut rng = SeededRandom::new(2);
        let mut field = SwarmField::new(1440.0, 900.0, &mut rng);
        for _ in 0..25 {
            field.tick(&mut rng);
            assert_eq!(field.glows.len(), GLOW_COUNT);
            for glow in &field.glows {
                assert!(glow.radius >= 50.0);
                assert!(glow.radius <= 150.0);
            }
        }
    }
}
