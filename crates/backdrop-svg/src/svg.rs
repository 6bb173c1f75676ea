//! SVG dump of one [`GeometryFrame`].

use backdrop_core::{Drawable, GeometryFrame, Ink, Paint, Primitive, Rgba};
use glam::Vec2;
use std::fmt::Write;

const GRADIENT_ID: &str = "web-gradient";
const GLOW_ID: &str = "soft-glow";

fn rgb(c: Rgba) -> String {
    format!("rgb({},{},{})", c.r, c.g, c.b)
}

// SVG carries color alpha separately from element opacity
fn paint_attr(out: &mut String, attr: &str, c: Rgba) {
    _ = write!(out, r#" {attr}="{}" {attr}-opacity="{}""#, rgb(c), c.a);
}

fn pt(p: Vec2) -> String {
    format!("{} {}", p.x, p.y)
}

pub fn to_svg_string(frame: &GeometryFrame) -> String {
    let w = frame.viewport.width;
    let h = frame.viewport.height;
    let mut out = String::new();

    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    _ = writeln!(
        out,
        r#"viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#
    );

    out.push_str("<defs>\n");
    _ = writeln!(
        out,
        r#"<linearGradient id="{GRADIENT_ID}" x1="0" y1="0" x2="{w}" y2="{h}" gradientUnits="userSpaceOnUse">"#
    );
    for (offset, c) in ["0%", "50%", "100%"].iter().zip(frame.web_gradient) {
        _ = writeln!(
            out,
            r#"<stop offset="{offset}" stop-color="{}" stop-opacity="{}"/>"#,
            rgb(c),
            c.a
        );
    }
    out.push_str("</linearGradient>\n");
    _ = writeln!(
        out,
        r#"<filter id="{GLOW_ID}"><feGaussianBlur stdDeviation="{}" result="blur"/><feMerge><feMergeNode in="blur"/><feMergeNode in="SourceGraphic"/></feMerge></filter>"#,
        2.0 * frame.glow_intensity
    );
    out.push_str("</defs>\n");

    for d in frame.iter() {
        write_drawable(&mut out, d);
    }

    out.push_str("</svg>\n");
    out
}

fn write_drawable(out: &mut String, d: &Drawable) {
    let common = {
        let mut s = format!(r#" data-key="{}" opacity="{}""#, d.key, d.opacity);
        if d.glow {
            _ = write!(s, r#" filter="url(#{GLOW_ID})""#);
        }
        s
    };

    match &d.primitive {
        Primitive::Line {
            from,
            to,
            ink,
            width,
        } => {
            _ = write!(
                out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke-width="{width}""#,
                from.x, from.y, to.x, to.y
            );
            match ink {
                Ink::Solid(c) => paint_attr(out, "stroke", *c),
                Ink::WebGradient => {
                    _ = write!(out, r#" stroke="url(#{GRADIENT_ID})""#);
                }
            }
        }
        Primitive::Circle {
            center,
            radius,
            paint,
        } => {
            _ = write!(
                out,
                r#"<circle cx="{}" cy="{}" r="{}""#,
                center.x,
                center.y,
                radius.max(0.0)
            );
            match *paint {
                Paint::Fill(c) => paint_attr(out, "fill", c),
                Paint::Stroke { color, width } => {
                    out.push_str(r#" fill="none""#);
                    paint_attr(out, "stroke", color);
                    _ = write!(out, r#" stroke-width="{width}""#);
                }
            }
        }
        Primitive::Ellipse {
            center,
            radii,
            rotation,
            fill,
        } => {
            _ = write!(
                out,
                r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" transform="rotate({} {} {})""#,
                center.x,
                center.y,
                radii.x.max(0.0),
                radii.y.max(0.0),
                rotation.to_degrees(),
                center.x,
                center.y
            );
            paint_attr(out, "fill", *fill);
        }
        Primitive::QuadPath {
            start,
            segments,
            fill,
        } => {
            let mut path = format!("M {}", pt(*start));
            for s in segments {
                _ = write!(path, " Q {} {}", pt(s.ctrl), pt(s.to));
            }
            path.push_str(" Z");
            _ = write!(out, r#"<path d="{path}""#);
            paint_attr(out, "fill", *fill);
        }
        Primitive::Polygon {
            points,
            stroke,
            width,
        } => {
            let pts: Vec<String> = points.iter().map(|p| format!("{},{}", p.x, p.y)).collect();
            _ = write!(
                out,
                r#"<polygon points="{}" fill="none" stroke-width="{width}""#,
                pts.join(" ")
            );
            paint_attr(out, "stroke", *stroke);
        }
        Primitive::Spokes {
            center,
            length,
            count,
            rotation,
            stroke,
            width,
        } => {
            let n = (*count).max(1) as f32;
            let mut path = String::new();
            for k in 0..*count {
                let tip = *center
                    + Vec2::from_angle(rotation + k as f32 / n * std::f32::consts::TAU) * *length;
                _ = write!(path, "M {} L {} ", pt(*center), pt(tip));
            }
            _ = write!(
                out,
                r#"<path d="{}" fill="none" stroke-width="{width}""#,
                path.trim_end()
            );
            paint_attr(out, "stroke", *stroke);
        }
    }
    out.push_str(&common);
    out.push_str("/>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use backdrop_core::{Backdrop, ManualClock, SceneConfig, SceneKind, Season, Section};

    #[test]
    fn spider_svg_is_closed_and_keyed() {
        let b = Backdrop::seasonal(Season::Winter, ManualClock::default(), SceneConfig::default());
        let frame = b.frame();
        let svg = to_svg_string(&frame);
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("data-key=").count(), frame.len());
        assert!(!svg.contains("NaN"));
    }

    #[test]
    fn section_svg_uses_gradient_and_glow() {
        let mut b = Backdrop::sections(
            Section::Projects,
            ManualClock::default(),
            SceneConfig::for_kind(SceneKind::Section),
        );
        b.on_pointer_enter();
        let svg = to_svg_string(&b.frame());
        assert!(svg.contains(r#"stroke="url(#web-gradient)""#));
        assert!(svg.contains(r#"filter="url(#soft-glow)""#));
        assert!(svg.contains("<polygon"));
    }
}
