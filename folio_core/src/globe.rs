//! Globe network renderer
//!
//! Bounded hero visual: nodes on a wobbling, noise-rotated sphere joined by
//! proximity links, with animated branches growing out of the node layer and
//! a breathing accent ring. [`GlobeNetwork::tick`] projects the current state
//! into flat draw records and then advances the clock, so the first frame
//! shows the freshly seeded sphere.

use std::f32::consts::PI;

use crate::geometry::{self, Vec2, Vec3};
use crate::rng::RandomSource;

/// Radius of the node sphere.
pub const SPHERE_RADIUS: f32 = 60.0;
/// Hard cap on the branch population.
pub const MAX_BRANCHES: usize = 50;
/// Depth behind which branches and nodes are not drawn.
pub const DEPTH_CUTOFF: f32 = -90.0;
/// Rotated-space distance below which two nodes are linked.
pub const LINK_DISTANCE: f32 = 100.0;
/// Simulated time advance per tick.
pub const TIME_STEP: f32 = 0.005;

/// Sphere node. `home` never changes after seeding.
#[derive(Debug, Clone, Copy)]
pub struct Node {
    pub home: Vec3,
    pub brightness: f32,
    pub size: f32,
    pub phase: f32,
}

/// Branch anchored to a node by index into the node list.
#[derive(Debug, Clone, Copy)]
pub struct Branch {
    pub node: usize,
    pub angle: f32,
    pub length: f32,
    pub phase: f32,
}

/// Per-frame projection of one node, in node order.
#[derive(Debug, Clone, Copy)]
pub struct Projected {
    pub screen: Vec2,
    pub depth: f32,
    pub scale: f32,
    pub rotated: Vec3,
    /// Brightness for this frame, pulse already applied.
    pub brightness: f32,
    /// Draw radius for this frame, perspective already applied.
    pub radius: f32,
}

impl Projected {
    /// Whether the node sits in front of the depth cutoff.
    pub fn visible(&self) -> bool {
        self.depth > DEPTH_CUTOFF
    }
}

/// Screen-space branch line for this frame.
#[derive(Debug, Clone, Copy)]
pub struct BranchLine {
    pub from: Vec2,
    pub to: Vec2,
    pub alpha: f32,
    /// Alpha of the bright dot at the branch end.
    pub tip_alpha: f32,
}

/// Proximity link between two nodes, by node index.
#[derive(Debug, Clone, Copy)]
pub struct Link {
    pub from: usize,
    pub to: usize,
    pub alpha: f32,
}

/// One-frame pulse ring around a node, by node index.
#[derive(Debug, Clone, Copy)]
pub struct Pulse {
    pub node: usize,
    pub radius: f32,
    pub alpha: f32,
}

/// Renderer state for the globe network.
#[derive(Debug)]
pub struct GlobeNetwork {
    width: f32,
    height: f32,
    compact: bool,
    time: f32,
    rotation: Vec3,
    noise_phase: Vec3,
    pub nodes: Vec<Node>,
    pub branches: Vec<Branch>,
    pub projected: Vec<Projected>,
    /// Painting order over `projected`, nearest depth first.
    pub draw_order: Vec<usize>,
    pub branch_lines: Vec<BranchLine>,
    pub links: Vec<Link>,
    pub pulses: Vec<Pulse>,
    /// Accent ring radius for this frame.
    pub ring_radius: f32,
}

impl GlobeNetwork {
    /// Seeds the sphere. `compact` drops the node count and branch seeding
    /// for small or low-powered surfaces.
    pub fn new(width: f32, height: f32, compact: bool, rng: &mut dyn RandomSource) -> Self {
        let node_count = if compact { 25 } else { 40 };
        let nodes: Vec<Node> = geometry::fibonacci_sphere(node_count, SPHERE_RADIUS)
            .into_iter()
            .map(|home| Node {
                home,
                brightness: 0.5 + rng.range(0.5),
                size: 1.0 + rng.range(1.5),
                phase: rng.angle(),
            })
            .collect();

        let seed_chance = if compact { 0.2 } else { 0.3 };
        let seed_spread = if compact { 2.0 } else { 3.0 };
        let mut branches = Vec::new();
        for node in 0..nodes.len() {
            if rng.chance(seed_chance) {
                let count = rng.range(seed_spread) as usize + 1;
                for _ in 0..count {
                    branches.push(Branch {
                        node,
                        angle: rng.angle(),
                        length: 40.0 + rng.range(60.0),
                        phase: rng.angle(),
                    });
                }
            }
        }

        tracing::debug!(
            nodes = nodes.len(),
            seeded_branches = branches.len(),
            compact,
            "globe network seeded"
        );

        Self {
            width,
            height,
            compact,
            time: 0.0,
            rotation: Vec3::new(0.4, 0.5, 0.2),
            noise_phase: Vec3::default(),
            nodes,
            branches,
            projected: Vec::new(),
            draw_order: Vec::new(),
            branch_lines: Vec::new(),
            links: Vec::new(),
            pulses: Vec::new(),
            ring_radius: 70.0,
        }
    }

    /// Computes one frame of draw records, then advances the clock and the
    /// noise-driven rotation.
    pub fn tick(&mut self, rng: &mut dyn RandomSource) {
        let t = self.time;
        let center = Vec2::new(self.width / 2.0, self.height / 2.0);

        self.projected.clear();
        for node in &self.nodes {
            let swing = t + node.phase;
            let magnitude = 15.0 * swing.sin();
            let wobbled = Vec3::new(
                node.home.x + swing.cos() * magnitude,
                node.home.y + swing.sin() * magnitude,
                node.home.z + (swing + 1.0).cos() * magnitude * 0.5,
            );
            let rotated = geometry::rotate_xyz(
                wobbled,
                self.rotation.x,
                self.rotation.y,
                self.rotation.z,
            );
            let (screen, scale) = geometry::project(rotated, center);
            self.projected.push(Projected {
                screen,
                depth: rotated.z,
                scale,
                rotated,
                brightness: node.brightness * (0.5 + (t + node.brightness).sin() * 0.5),
                radius: node.size * scale.max(0.3),
            });
        }

        let mut order: Vec<usize> = (0..self.projected.len()).collect();
        let projected = &self.projected;
        order.sort_by(|&a, &b| projected[a].depth.total_cmp(&projected[b].depth));
        self.draw_order = order;

        // Branch pass. Twigs spawned here join the sweep next frame; the cap
        // counts them so a burst cannot overshoot it.
        self.branch_lines.clear();
        let mut spawned: Vec<Branch> = Vec::new();
        for (index, branch) in self.branches.iter().enumerate() {
            let anchor = &self.projected[branch.node];
            if anchor.depth < DEPTH_CUTOFF {
                continue;
            }
            let i = index as f32;
            let length = branch.length * (0.3 + (t * 2.0 + branch.phase).sin() * 0.7);
            let angle = branch.angle + (t + i).sin() * 0.5;
            self.branch_lines.push(BranchLine {
                from: anchor.screen,
                to: Vec2::new(
                    anchor.screen.x + angle.cos() * length,
                    anchor.screen.y + angle.sin() * length,
                ),
                alpha: 0.3 * (0.5 + (t + i * 0.3).sin() * 0.5),
                tip_alpha: 0.6 * (0.4 + (t * 1.5 + i).sin() * 0.6),
            });

            if rng.chance(0.05) && self.branches.len() + spawned.len() < MAX_BRANCHES {
                let twig = Branch {
                    node: branch.node,
                    angle: angle + (rng.next_f32() - 0.5) * PI,
                    length: length * 0.6,
                    phase: rng.angle(),
                };
                if rng.chance(0.3) {
                    spawned.push(twig);
                }
            }
        }
        self.branches.append(&mut spawned);

        self.links.clear();
        for i in 0..self.projected.len() {
            for j in (i + 1)..self.projected.len() {
                let distance = self.projected[i].rotated.distance(self.projected[j].rotated);
                if distance < LINK_DISTANCE {
                    self.links.push(Link {
                        from: i,
                        to: j,
                        alpha: (1.0 - distance / LINK_DISTANCE) * 0.25,
                    });
                }
            }
        }

        self.pulses.clear();
        for &index in &self.draw_order {
            if !self.projected[index].visible() {
                continue;
            }
            if rng.chance(0.08) {
                self.pulses.push(Pulse {
                    node: index,
                    radius: self.projected[index].radius + 3.0 + rng.range(2.0),
                    alpha: 0.2 * self.projected[index].brightness,
                });
            }
        }

        self.ring_radius = 70.0 + (t * 0.5).sin() * 5.0;

        self.noise_phase.x += 0.02;
        self.noise_phase.y += 0.015;
        self.noise_phase.z += 0.018;
        let nx = sine_noise(self.noise_phase.x) - 0.5;
        let ny = sine_noise(self.noise_phase.y) - 0.5;
        let nz = sine_noise(self.noise_phase.z) - 0.5;
        self.rotation.x += 0.0005 + nx * 0.8 * 0.0003;
        self.rotation.y += 0.001 + ny * 0.8 * 0.0004;
        self.rotation.z += 0.0003 + nz * 0.8 * 0.0002;

        self.time = t + TIME_STEP;
    }

    /// Updates the surface size; only the projection centre moves.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn compact(&self) -> bool {
        self.compact
    }

    pub fn dimensions(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

/// Smooth pseudo-noise in `[0, 1]` used to perturb the rotation speed.
fn sine_noise(phase: f32) -> f32 {
    phase.sin() * 0.5 + 0.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SeededRandom;

    #[test]
    fn test_node_counts_per_density() {
        let mut rng = SeededRandom::new(1);
        let full = GlobeNetwork::new(400.0, 400.0, false, &mut rng);
        let compact = GlobeNetwork::new(400.0, 400.0, true, &mut rng);
        assert_eq!(full.nodes.len(), 40);
        assert_eq!(compact.nodes.len(), 25);
        assert!(!full.compact());
        assert!(compact.compact());
    }

    #[test]
    fn test_homes_sit_on_sphere() {
        let mut rng = SeededRandom::new(4);
        let globe = GlobeNetwork::new(400.0, 400.0, false, &mut rng);
        for node in &globe.nodes {
            assert!((node.home.length() - SPHERE_RADIUS).abs() < 1e-3);
        }
    }

    #[test]
    fn test_branches_grow_monotonically_to_cap() {
        let mut rng = SeededRandom::new(42);
        let mut globe = GlobeNetwork::new(400.0, 400.0, false, &mut rng);
        if globe.branches.is_empty() {
            globe.branches.push(Branch {
                node: 0,
                angle: 0.0,
                length: 50.0,
                phase: 0.0,
            });
        }
        let mut previous = globe.branches.len();
        for _ in 0..5000 {
            globe.tick(&mut rng);
            let now = globe.branches.len();
            assert!(now >= previous);
            assert!(now <= MAX_BRANCHES);
            previous = now;
        }
        assert_eq!(globe.branches.len(), MAX_BRANCHES);
    }

    #[test]
    fn test_draw_order_sorted_by_depth() {
        let mut rng = SeededRandom::new(9);
        let mut globe = GlobeNetwork::new(500.0, 400.0, false, &mut rng);
        for _ in 0..60 {
            globe.tick(&mut rng);
            assert_eq!(globe.draw_order.len(), globe.projected.len());
            for pair in globe.draw_order.windows(2) {
                let a = globe.projected[pair[0]].depth;
                let b = globe.projected[pair[1]].depth;
                assert!(a <= b);
            }
        }
    }

    #[test]
    fn test_seeded_runs_are_identical() {
        let mut rng_a = SeededRandom::new(77);
        let mut rng_b = SeededRandom::new(77);
        let mut a = GlobeNetwork::new(360.0, 360.0, false, &mut rng_a);
        let mut b = GlobeNetwork::new(360.0, 360.0, false, &mut rng_b);
        for _ in 0..200 {
            a.tick(&mut rng_a);
            b.tick(&mut rng_b);
        }
        assert_eq!(a.branches.len(), b.branches.len());
        assert_eq!(a.draw_order, b.draw_order);
        for (pa, pb) in a.projected.iter().zip(&b.projected) {
            assert_eq!(pa.screen, pb.screen);
            assert_eq!(pa.depth, pb.depth);
            assert_eq!(pa.brightness, pb.brightness);
        }
        assert_eq!(a.links.len(), b.links.len());
        assert_eq!(a.pulses.len(), b.pulses.len());
    }

    #[test]
    fn test_depth_cutoff_excludes_injected_node() {
        let mut rng = SeededRandom::new(13);
        let mut globe = GlobeNetwork::new(400.0, 400.0, false, &mut rng);
        globe.rotation = Vec3::default();
        let far_index = globe.nodes.len();
        globe.nodes.push(Node {
            home: Vec3::new(0.0, 0.0, -200.0),
            brightness: 1.0,
            size: 1.0,
            phase: 0.0,
        });
        globe.branches.push(Branch {
            node: far_index,
            angle: 0.0,
            length: 50.0,
            phase: 0.0,
        });
        let branches_before = globe.branches.len();

        globe.tick(&mut rng);

        let far = &globe.projected[far_index];
        assert!(far.depth < DEPTH_CUTOFF);
        assert!(!far.visible());
        // Every branch except the one anchored behind the cutoff drew a line.
        assert_eq!(globe.branch_lines.len(), branches_before - 1);
        assert!(globe.pulses.iter().all(|pulse| pulse.node != far_index));
    }

    #[test]
    fn test_ring_radius_breathes_in_band() {
        let mut rng = SeededRandom::new(21);
        let mut globe = GlobeNetwork::new(400.0, 400.0, true, &mut rng);
        for _ in 0..500 {
            globe.tick(&mut rng);
            assert!(globe.ring_radius >= 65.0);
            assert!(globe.ring_radius <= 75.0);
        }
    }

    #[test]
    fn test_link_alpha_falls_with_distance() {
        let mut rng = SeededRandom::new(30);
        let mut globe = GlobeNetwork::new(400.0, 400.0, false, &mut rng);
        globe.tick(&mut rng);
        assert!(!globe.links.is_empty());
        for link in &globe.links {
            let distance = globe.projected[link.from]
                .rotated
                .distance(globe.projected[link.to].rotated);
            assert!(distance < LINK_DISTANCE);
            assert!((link.alpha - (1.0 - distance / LINK_DISTANCE) * 0.25).abs() < 1e-6);
        }
    }

    #[test]
    fn test_resize_recenters_projection() {
        let mut rng = SeededRandom::new(50);
        let mut globe = GlobeNetwork::new(400.0, 400.0, false, &mut rng);
        globe.tick(&mut rng);
        let mean_x_before: f32 = globe.projected.iter().map(|p| p.screen.x).sum::<f32>()
            / globe.projected.len() as f32;
        globe.resize(800.0, 400.0);
        globe.tick(&mut rng);
        let mean_x_after: f32 = globe.projected.iter().map(|p| p.screen.x).sum::<f32>()
            / globe.projected.len() as f32;
        assert!(mean_x_after > mean_x_before + 100.0);
        assert_eq!(globe.nodes.len(), 40);
    }
}
