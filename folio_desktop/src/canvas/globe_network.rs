use crate::animation::GlobeNetworkState;
use crate::theme::PaletteColors;
use folio_core::geometry::Vec2;
use iced::mouse;
use iced::widget::canvas::{self, Geometry, Path, Stroke};
use iced::{Color, Point, Rectangle, Theme, Vector};
use std::marker::PhantomData;

const BRANCH_COLOR: Color = Color::from_rgb8(180, 220, 255);
const TIP_COLOR: Color = Color::from_rgb8(200, 230, 255);
const LINK_COLOR: Color = Color::from_rgb8(200, 200, 220);
const HALO_COLOR: Color = Color::from_rgb8(200, 200, 255);

/// Canvas program for the globe network hero visual.
///
/// Paints the records computed by the simulation back to front: branch lines
/// with bright tips, proximity links, the node layer in depth order with halos
/// and pulse rings, and the breathing violet accent ring. The whole drawing is
/// shifted by `parallax` so the globe trails the pointer slightly.
pub struct GlobeNetworkCanvas<'a, Message> {
    pub state: &'a GlobeNetworkState,
    pub palette: PaletteColors,
    pub parallax: Vector,
    pub _marker: PhantomData<Message>,
}

impl<'a, Message> GlobeNetworkCanvas<'a, Message> {
    pub fn new(state: &'a GlobeNetworkState, palette: PaletteColors, parallax: Vector) -> Self {
        Self {
            state,
            palette,
            parallax,
            _marker: PhantomData,
        }
    }
}

impl<'a, Message> canvas::Program<Message> for GlobeNetworkCanvas<'a, Message> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let globe = self.state.cache.draw(renderer, bounds.size(), |frame| {
            let network = &self.state.globe;
            let center = frame.center();

            frame.with_save(|frame| {
                frame.translate(self.parallax);

                for line in &network.branch_lines {
                    let stroke = Stroke {
                        style: canvas::Style::Solid(Color {
                            a: line.alpha,
                            ..BRANCH_COLOR
                        }),
                        width: 1.5,
                        line_cap: canvas::LineCap::Round,
                        ..Default::default()
                    };
                    frame.stroke(&Path::line(point(line.from), point(line.to)), stroke);
                    frame.fill(
                        &Path::circle(point(line.to), 2.0),
                        Color {
                            a: line.tip_alpha,
                            ..TIP_COLOR
                        },
                    );
                }

                for link in &network.links {
                    let from = network.projected[link.from].screen;
                    let to = network.projected[link.to].screen;
                    let stroke = Stroke {
                        style: canvas::Style::Solid(Color {
                            a: link.alpha,
                            ..LINK_COLOR
                        }),
                        width: 0.8,
                        ..Default::default()
                    };
                    frame.stroke(&Path::line(point(from), point(to)), stroke);
                }

                for &index in &network.draw_order {
                    let node = &network.projected[index];
                    if !node.visible() {
                        continue;
                    }
                    let at = point(node.screen);

                    // Halo first, then the core dot on top of it.
                    frame.fill(
                        &Path::circle(at, node.radius * 2.0),
                        Color {
                            a: node.brightness * 0.4 * 0.4,
                            ..HALO_COLOR
                        },
                    );
                    frame.fill(
                        &Path::circle(at, node.radius * 1.2),
                        Color {
                            a: node.brightness * 0.4 * 0.7,
                            ..HALO_COLOR
                        },
                    );
                    frame.fill(
                        &Path::circle(at, node.radius),
                        Color {
                            a: node.brightness,
                            ..Color::WHITE
                        },
                    );

                    for pulse in &network.pulses {
                        if pulse.node != index {
                            continue;
                        }
                        let stroke = Stroke::default().with_width(1.0).with_color(Color {
                            a: pulse.alpha,
                            ..Color::WHITE
                        });
                        frame.stroke(&Path::circle(at, pulse.radius), stroke);
                    }
                }

                // Accent ring, brightest in the middle of its band.
                for (offset, alpha) in [(-3.0_f32, 0.06_f32), (0.0, 0.15), (3.0, 0.06)] {
                    let stroke = Stroke::default().with_width(2.0).with_color(Color {
                        a: alpha,
                        ..self.palette.glow
                    });
                    frame.stroke(&Path::circle(center, network.ring_radius + offset), stroke);
                }
            });
        });
        vec![globe]
    }
}

fn point(v: Vec2) -> Point {
    Point::new(v.x, v.y)
}
