use std::fmt::Write;

use crate::input::{Point, Rect};
use crate::render::{Paint, Surface};

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillRect {
        rect: Rect,
        paint: Paint,
    },
    StrokeLine {
        from: Point,
        to: Point,
        width: f64,
        paint: Paint,
    },
    FillText {
        text: String,
        at: Point,
        font: String,
        paint: Paint,
    },
}

/// A [`Surface`] that records what is drawn on it.
///
/// A scene can be inspected, compared, replayed onto another surface, or
/// serialized to SVG.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    width: f64,
    height: f64,
    ops: Vec<DrawOp>,
}

impl Scene {
    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Draw this scene onto another surface.
    pub fn replay(&self, surface: &mut impl Surface) {
        surface.resize(self.width, self.height);
        surface.clear();
        for op in &self.ops {
            match op {
                DrawOp::FillRect { rect, paint } => surface.fill_rect(*rect, *paint),
                DrawOp::StrokeLine {
                    from,
                    to,
                    width,
                    paint,
                } => surface.stroke_line(*from, *to, *width, *paint),
                DrawOp::FillText {
                    text,
                    at,
                    font,
                    paint,
                } => surface.fill_text(text, *at, font, *paint),
            }
        }
    }

    /// Render the scene as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let mut svg = String::new();
        self.write_svg(&mut svg).expect("writing to a String does not fail");
        svg
    }

    fn write_svg(&self, out: &mut String) -> std::fmt::Result {
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height,
        )?;
        for op in &self.ops {
            match op {
                DrawOp::FillRect { rect, paint } => writeln!(
                    out,
                    r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}" fill-opacity="{}"/>"#,
                    rect.left, rect.top, rect.width, rect.height, paint.color, paint.alpha,
                )?,
                DrawOp::StrokeLine {
                    from,
                    to,
                    width,
                    paint,
                } => writeln!(
                    out,
                    r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-opacity="{}" stroke-width="{}" stroke-linecap="round"/>"#,
                    from.x, from.y, to.x, to.y, paint.color, paint.alpha, width,
                )?,
                DrawOp::FillText {
                    text,
                    at,
                    font,
                    paint,
                } => writeln!(
                    out,
                    r#"  <text x="{}" y="{}" style="font: {}" fill="{}" fill-opacity="{}" text-anchor="middle" dominant-baseline="central">{}</text>"#,
                    at.x,
                    at.y,
                    escape(font),
                    paint.color,
                    paint.alpha,
                    escape(text),
                )?,
            }
        }
        writeln!(out, "</svg>")
    }
}

impl Surface for Scene {
    fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    fn clear(&mut self) {
        self.ops.clear();
    }

    fn fill_rect(&mut self, rect: Rect, paint: Paint) {
        self.ops.push(DrawOp::FillRect { rect, paint });
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f64, paint: Paint) {
        self.ops.push(DrawOp::StrokeLine {
            from,
            to,
            width,
            paint,
        });
    }

    fn fill_text(&mut self, text: &str, at: Point, font: &str, paint: Paint) {
        self.ops.push(DrawOp::FillText {
            text: text.to_owned(),
            at,
            font: font.to_owned(),
            paint,
        });
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
