//! Frame composition for the two backgrounds.
//!
//! The spider-web scene follows the seasonal theme; the section scene follows
//! the page section in view. They differ in web geometry, wave, layers,
//! pointer reach and overlays.

use crate::distort::{Distortion, PointerField};
use crate::frame::{DrawKey, Drawable, GeometryFrame, Ink, KeyKind, Paint, Primitive};
use crate::layer::{Layer, SECTION_LAYERS, SPIDER_LAYERS};
use crate::particles::{section_glyphs, ParticleField};
use crate::state::FrameInputs;
use crate::theme::Theme;
use crate::web::{generate_section_layer, generate_web_layer, WebLayout};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneKind {
    SpiderWeb,
    Section,
}

impl SceneKind {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "seasonal" | "spider" | "spider-web" => Some(SceneKind::SpiderWeb),
            "section" | "sections" => Some(SceneKind::Section),
            _ => None,
        }
    }

    pub fn layers(self) -> &'static [Layer] {
        match self {
            SceneKind::SpiderWeb => &SPIDER_LAYERS,
            SceneKind::Section => &SECTION_LAYERS,
        }
    }

    pub fn pointer_field(self) -> PointerField {
        match self {
            SceneKind::SpiderWeb => PointerField::SPIDER,
            SceneKind::Section => PointerField::SECTION,
        }
    }

    /// Undistorted web layouts for every layer of this scene.
    pub fn layouts(self, viewport: crate::state::ViewportState) -> Vec<WebLayout> {
        let generate: fn(&Layer, u8, crate::state::ViewportState) -> WebLayout = match self {
            SceneKind::SpiderWeb => generate_web_layer,
            SceneKind::Section => generate_section_layer,
        };
        self.layers()
            .iter()
            .enumerate()
            .map(|(i, layer)| generate(layer, i as u8, viewport))
            .collect()
    }
}

/// Inputs for composing one frame.
#[derive(Clone, Copy, Debug)]
pub struct SceneInputs<'a> {
    pub kind: SceneKind,
    pub theme: &'a Theme,
    pub layouts: &'a [WebLayout],
    pub particles: &'a ParticleField,
    pub frame: FrameInputs,
    pub field: PointerField,
    /// 0..=1 multiplier on particle opacity while a new theme fades in.
    pub particle_fade: f32,
}

fn push_checked(frame: &mut GeometryFrame, drawable: Drawable) {
    if drawable.is_finite() {
        frame.push(drawable);
    } else {
        log::warn!("[scene] skipping {}: non-finite geometry", drawable.key);
    }
}

pub fn compose_frame(inputs: &SceneInputs<'_>) -> GeometryFrame {
    let theme = inputs.theme;
    let p = theme.palette;
    let mut frame = GeometryFrame::new(
        inputs.frame.viewport,
        theme.glow_intensity,
        [p.primary, p.secondary, p.accent],
    );
    match inputs.kind {
        SceneKind::SpiderWeb => spider_frame(inputs, &mut frame),
        SceneKind::Section => section_frame(inputs, &mut frame),
    }
    log::trace!("[scene] {:?} frame with {} drawables", inputs.kind, frame.len());
    frame
}

fn distortion_for(inputs: &SceneInputs<'_>, layer: &Layer) -> Distortion {
    let f = inputs.frame;
    Distortion::new(
        f.scroll,
        f.pointer,
        layer,
        inputs.theme,
        inputs.field,
        f.hovered,
    )
}

fn push_particles(inputs: &SceneInputs<'_>, frame: &mut GeometryFrame) {
    let fade = inputs.particle_fade.clamp(0.0, 1.0);
    for particle in inputs
        .particles
        .animate(inputs.frame.scroll, inputs.frame.viewport)
    {
        let mut d = particle.drawable();
        d.opacity *= fade;
        push_checked(frame, d);
    }
}

fn spider_frame(inputs: &SceneInputs<'_>, frame: &mut GeometryFrame) {
    let theme = inputs.theme;
    let scroll = inputs.frame.scroll.offset();

    push_particles(inputs, frame);

    for (li, (layer, layout)) in inputs
        .kind
        .layers()
        .iter()
        .zip(inputs.layouts)
        .enumerate()
    {
        let distortion = distortion_for(inputs, layer);
        let color = theme.palette.cycle(li);
        for c in &layout.connections {
            let (from, to) = distortion.apply_line(c);
            let line = Primitive::Line {
                from,
                to,
                ink: Ink::Solid(color),
                width: layer.stroke_width,
            };
            push_checked(frame, Drawable::new(c.key, layer.opacity * 0.6, line));
        }
        for n in &layout.nodes {
            let dot = Primitive::Circle {
                center: distortion.apply(n.original),
                radius: layer.node_size,
                paint: Paint::Fill(color),
            };
            push_checked(frame, Drawable::new(n.key, layer.opacity * 0.7, dot));
        }
    }

    let center = inputs.frame.viewport.center()
        + Vec2::new((scroll * 0.002).sin() * 10.0, (scroll * 0.003).cos() * 8.0);
    push_checked(
        frame,
        Drawable::new(
            DrawKey::free(KeyKind::Core, 0),
            0.8,
            Primitive::Circle {
                center,
                radius: 3.0,
                paint: Paint::Fill(theme.palette.primary),
            },
        ),
    );

    if inputs.frame.hovered {
        push_checked(
            frame,
            Drawable::new(
                DrawKey::free(KeyKind::Pointer, 0),
                0.6,
                Primitive::Circle {
                    center: inputs.frame.pointer.position(),
                    radius: 40.0,
                    paint: Paint::Stroke {
                        color: theme.palette.primary,
                        width: 2.0,
                    },
                },
            ),
        );
    }
}

fn section_frame(inputs: &SceneInputs<'_>, frame: &mut GeometryFrame) {
    let theme = inputs.theme;
    let scroll = inputs.frame.scroll.offset();
    let layers = inputs.kind.layers();

    for (li, (layer, layout)) in layers.iter().zip(inputs.layouts).enumerate() {
        let distortion = distortion_for(inputs, layer);
        for c in &layout.connections {
            let (from, to) = distortion.apply_line(c);
            let line = Primitive::Line {
                from,
                to,
                ink: Ink::WebGradient,
                width: layer.stroke_width,
            };
            push_checked(frame, Drawable::new(c.key, layer.opacity, line).glowing());
        }

        // intersection dots on the front layer only
        if li + 1 == layers.len() {
            for (k, c) in layout.connections.iter().enumerate().step_by(4) {
                let dot = Primitive::Circle {
                    center: distortion.apply_line(c).1,
                    radius: layer.node_size,
                    paint: Paint::Fill(theme.palette.primary),
                };
                let key = DrawKey::new(KeyKind::Node, li as u8, 0, k as u16);
                push_checked(frame, Drawable::new(key, 0.8, dot).glowing());
            }
        }
    }

    push_particles(inputs, frame);

    for glyph in section_glyphs(theme, inputs.frame.viewport, inputs.frame.scroll) {
        push_checked(frame, glyph);
    }

    if inputs.frame.hovered {
        let pointer = inputs.frame.pointer.position();
        let ripples = [
            (80.0, theme.palette.primary, 2.0, 0.6),
            (120.0, theme.palette.secondary, 1.0, 0.3),
        ];
        for (i, (radius, color, width, opacity)) in ripples.into_iter().enumerate() {
            push_checked(
                frame,
                Drawable::new(
                    DrawKey::free(KeyKind::Pointer, i as u16),
                    opacity,
                    Primitive::Circle {
                        center: pointer,
                        radius,
                        paint: Paint::Stroke { color, width },
                    },
                ),
            );
        }
    }

    let center = inputs.frame.viewport.center();
    push_checked(
        frame,
        Drawable::new(
            DrawKey::free(KeyKind::Core, 0),
            0.9,
            Primitive::Circle {
                center,
                radius: 8.0 + (scroll * 0.003).sin() * 3.0,
                paint: Paint::Fill(theme.palette.primary),
            },
        )
        .glowing(),
    );
    push_checked(
        frame,
        Drawable::new(
            DrawKey::free(KeyKind::Core, 1),
            0.5,
            Primitive::Circle {
                center,
                radius: 15.0 + (scroll * 0.002).cos() * 5.0,
                paint: Paint::Stroke {
                    color: theme.palette.secondary,
                    width: 1.0,
                },
            },
        ),
    );
}
