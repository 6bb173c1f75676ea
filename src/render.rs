use crate::constants::GLOW_BLUR_PX;
use backdrop_core::{Drawable, GeometryFrame, Ink, Paint, Primitive, Rgba};
use fnv::FnvHashMap;
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Draws a [`GeometryFrame`] onto a 2D canvas context.
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
    // CSS strings are rebuilt only when a new color shows up
    css: FnvHashMap<(u8, u8, u8, u32), JsValue>,
}

impl CanvasPainter {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            ctx,
            css: FnvHashMap::default(),
        })
    }

    fn color(&mut self, c: Rgba) -> JsValue {
        self.css
            .entry(c.key())
            .or_insert_with(|| JsValue::from_str(&c.to_css()))
            .clone()
    }

    fn set_style(&self, prop: &str, value: &JsValue) {
        _ = js_sys::Reflect::set(self.ctx.as_ref(), &JsValue::from_str(prop), value);
    }

    fn fill_with(&mut self, c: Rgba) {
        let v = self.color(c);
        self.set_style("fillStyle", &v);
    }

    fn stroke_with(&mut self, c: Rgba, width: f32) {
        let v = self.color(c);
        self.set_style("strokeStyle", &v);
        self.ctx.set_line_width(width as f64);
    }

    pub fn paint(&mut self, frame: &GeometryFrame, dpr: f64) {
        let w = frame.viewport.width as f64;
        let h = frame.viewport.height as f64;
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        self.ctx.clear_rect(0.0, 0.0, w, h);

        let gradient = self.ctx.create_linear_gradient(0.0, 0.0, w, h);
        for (stop, color) in [0.0, 0.5, 1.0].into_iter().zip(frame.web_gradient) {
            _ = gradient.add_color_stop(stop, &color.to_css());
        }
        let gradient: JsValue = gradient.into();

        for d in frame.iter() {
            self.draw(d, frame.glow_intensity, &gradient, frame.web_gradient[0]);
        }
        self.ctx.set_global_alpha(1.0);
        self.ctx.set_shadow_blur(0.0);
    }

    fn draw(&mut self, d: &Drawable, glow_intensity: f32, gradient: &JsValue, gradient_glow: Rgba) {
        let ctx = self.ctx.clone();
        ctx.set_global_alpha(d.opacity.clamp(0.0, 1.0) as f64);
        if d.glow {
            ctx.set_shadow_blur(GLOW_BLUR_PX * glow_intensity as f64);
        } else {
            ctx.set_shadow_blur(0.0);
        }

        match &d.primitive {
            Primitive::Line {
                from,
                to,
                ink,
                width,
            } => {
                match ink {
                    Ink::Solid(c) => {
                        self.glow_color(d.glow, *c);
                        self.stroke_with(*c, *width);
                    }
                    Ink::WebGradient => {
                        self.glow_color(d.glow, gradient_glow);
                        self.set_style("strokeStyle", gradient);
                        ctx.set_line_width(*width as f64);
                    }
                }
                ctx.begin_path();
                ctx.move_to(from.x as f64, from.y as f64);
                ctx.line_to(to.x as f64, to.y as f64);
                ctx.stroke();
            }
            Primitive::Circle {
                center,
                radius,
                paint,
            } => {
                ctx.begin_path();
                _ = ctx.arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
                match *paint {
                    Paint::Fill(c) => {
                        self.glow_color(d.glow, c);
                        self.fill_with(c);
                        ctx.fill();
                    }
                    Paint::Stroke { color, width } => {
                        self.glow_color(d.glow, color);
                        self.stroke_with(color, width);
                        ctx.stroke();
                    }
                }
            }
            Primitive::Ellipse {
                center,
                radii,
                rotation,
                fill,
            } => {
                ctx.begin_path();
                _ = ctx.ellipse(
                    center.x as f64,
                    center.y as f64,
                    radii.x.max(0.0) as f64,
                    radii.y.max(0.0) as f64,
                    *rotation as f64,
                    0.0,
                    TAU,
                );
                self.glow_color(d.glow, *fill);
                self.fill_with(*fill);
                ctx.fill();
            }
            Primitive::QuadPath {
                start,
                segments,
                fill,
            } => {
                ctx.begin_path();
                ctx.move_to(start.x as f64, start.y as f64);
                for s in segments {
                    ctx.quadratic_curve_to(s.ctrl.x as f64, s.ctrl.y as f64, s.to.x as f64, s.to.y as f64);
                }
                ctx.close_path();
                self.glow_color(d.glow, *fill);
                self.fill_with(*fill);
                ctx.fill();
            }
            Primitive::Polygon {
                points,
                stroke,
                width,
            } => {
                let Some((first, rest)) = points.split_first() else {
                    return;
                };
                ctx.begin_path();
                ctx.move_to(first.x as f64, first.y as f64);
                for p in rest {
                    ctx.line_to(p.x as f64, p.y as f64);
                }
                ctx.close_path();
                self.stroke_with(*stroke, *width);
                ctx.stroke();
            }
            Primitive::Spokes {
                center,
                length,
                count,
                rotation,
                stroke,
                width,
            } => {
                self.stroke_with(*stroke, *width);
                ctx.begin_path();
                let n = (*count).max(1) as f32;
                for k in 0..*count {
                    let a = rotation + k as f32 / n * std::f32::consts::TAU;
                    let tip = *center + glam::Vec2::from_angle(a) * *length;
                    ctx.move_to(center.x as f64, center.y as f64);
                    ctx.line_to(tip.x as f64, tip.y as f64);
                }
                ctx.stroke();
            }
        }
    }

    fn glow_color(&mut self, glow: bool, c: Rgba) {
        if glow {
            let v = self.color(c);
            self.set_style("shadowColor", &v);
        }
    }
}
