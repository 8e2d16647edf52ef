use crate::animation::SwarmFieldState;
use crate::theme::PaletteColors;
use folio_core::geometry::Vec2;
use folio_core::swarm::{INTRA_LINK_ALPHA, INTRA_LINK_COUNT, TRAIL_WASH_ALPHA};
use iced::mouse;
use iced::widget::canvas::{self, Geometry, LineDash, Path, Stroke};
use iced::{Color, Point, Rectangle, Theme};
use std::marker::PhantomData;

/// Canvas program for the swarm field page background.
///
/// Paints the records computed by the simulation: a near-opaque wash, eight
/// particle swarms with their internal chain lines, flickering inter-swarm
/// connections with dashed fracture segments, and three drifting glow blobs.
pub struct SwarmFieldCanvas<'a, Message> {
    pub state: &'a SwarmFieldState,
    pub palette: PaletteColors,
    pub _marker: PhantomData<Message>,
}

impl<'a, Message> SwarmFieldCanvas<'a, Message> {
    pub fn new(state: &'a SwarmFieldState, palette: PaletteColors) -> Self {
        Self {
            state,
            palette,
            _marker: PhantomData,
        }
    }
}

impl<'a, Message> canvas::Program<Message> for SwarmFieldCanvas<'a, Message> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let field = self.state.cache.draw(renderer, bounds.size(), |frame| {
            let field = &self.state.field;
            let size_factor = field.size_factor();

            frame.fill_rectangle(
                Point::ORIGIN,
                bounds.size(),
                canvas::Fill::from(Color {
                    a: TRAIL_WASH_ALPHA,
                    ..self.palette.background
                }),
            );

            for swarm in &field.swarms {
                for particle in &swarm.particles {
                    if particle.alpha <= 0.01 {
                        continue;
                    }
                    frame.fill(
                        &Path::circle(point(particle.position), particle.size * size_factor),
                        Color {
                            a: particle.alpha,
                            ..Color::WHITE
                        },
                    );
                }

                // Chain the leading particles so each swarm reads as one body.
                let chain = Stroke {
                    style: canvas::Style::Solid(Color {
                        a: INTRA_LINK_ALPHA,
                        ..Color::WHITE
                    }),
                    width: 0.5,
                    ..Default::default()
                };
                let count = swarm.particles.len().min(INTRA_LINK_COUNT);
                for i in 0..count {
                    let from = swarm.particles[i].position;
                    let to = swarm.particles[(i + 1) % swarm.particles.len()].position;
                    frame.stroke(&Path::line(point(from), point(to)), chain);
                }
            }

            for connection in &field.connections {
                let stroke = Stroke {
                    style: canvas::Style::Solid(Color {
                        a: connection.alpha,
                        ..Color::WHITE
                    }),
                    width: 1.0,
                    ..Default::default()
                };
                frame.stroke(
                    &Path::line(point(connection.from), point(connection.to)),
                    stroke,
                );

                if let Some(fracture) = &connection.fracture {
                    let dashed = Stroke {
                        style: canvas::Style::Solid(Color {
                            a: fracture.alpha,
                            ..Color::WHITE
                        }),
                        width: 1.0,
                        line_dash: LineDash {
                            segments: &[5.0, 5.0],
                            offset: 0,
                        },
                        ..Default::default()
                    };
                    frame.stroke(&Path::line(point(connection.from), point(fracture.to)), dashed);
                }
            }

            // Layered circles stand in for a radial falloff.
            for glow in &field.glows {
                let center = point(glow.center);
                let core = glow.alpha * 0.5;
                for (factor, share) in [(1.0_f32, 0.25_f32), (0.6, 0.5), (0.3, 1.0)] {
                    frame.fill(
                        &Path::circle(center, glow.radius * factor),
                        Color {
                            a: core * share,
                            ..Color::WHITE
                        },
                    );
                }
            }
        });
        vec![field]
    }
}

fn point(v: Vec2) -> Point {
    Point::new(v.x, v.y)
}
