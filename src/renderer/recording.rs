//! Canvas that records draw calls instead of rasterizing them
//!
//! Used for headless runs and for checking what a frame draws.

use super::canvas::{Canvas, Color, LineCap};

/// One recorded canvas call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    Save,
    Restore,
    Translate(f32, f32),
    Rotate(f32),
    StrokeColor(Color),
    FillColor(Color),
    LineWidth(f32),
    LineCap(LineCap),
    MoveTo(f32, f32),
    LineTo(f32, f32),
    ArcTo {
        cx: f32,
        cy: f32,
        rx: f32,
        ry: f32,
        start: f32,
        sweep: f32,
    },
    Stroke,
    Fill,
}

/// Summary of a single `stroke` call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeRecord {
    pub color: Color,
    pub width: f32,
    pub cap: LineCap,
    /// `line_to` calls in the stroked path
    pub lines: usize,
    /// `arc_to` calls in the stroked path
    pub arcs: usize,
}

#[derive(Debug, Clone, Copy)]
struct Style {
    stroke: Color,
    fill: Color,
    width: f32,
    cap: LineCap,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            stroke: Color::BLACK,
            fill: Color::BLACK,
            width: 1.0,
            cap: LineCap::Butt,
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub ops: Vec<DrawOp>,
    pub strokes: Vec<StrokeRecord>,
    pub fills: usize,
    style: Style,
    saved: Vec<Style>,
    lines: usize,
    arcs: usize,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ops recorded since the last `clear`
    pub fn frame_ops(&self) -> &[DrawOp] {
        let start = self
            .ops
            .iter()
            .rposition(|op| *op == DrawOp::Clear)
            .map_or(0, |i| i + 1);
        &self.ops[start..]
    }

    fn reset_path(&mut self) {
        self.lines = 0;
        self.arcs = 0;
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
        self.strokes.clear();
        self.fills = 0;
        self.reset_path();
    }

    fn save(&mut self) {
        self.ops.push(DrawOp::Save);
        self.saved.push(self.style);
    }

    fn restore(&mut self) {
        self.ops.push(DrawOp::Restore);
        if let Some(style) = self.saved.pop() {
            self.style = style;
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.ops.push(DrawOp::Translate(dx, dy));
    }

    fn rotate(&mut self, radians: f32) {
        self.ops.push(DrawOp::Rotate(radians));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.ops.push(DrawOp::StrokeColor(color));
        self.style.stroke = color;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.ops.push(DrawOp::FillColor(color));
        self.style.fill = color;
    }

    fn set_line_width(&mut self, width: f32) {
        self.ops.push(DrawOp::LineWidth(width));
        self.style.width = width;
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.ops.push(DrawOp::LineCap(cap));
        self.style.cap = cap;
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.ops.push(DrawOp::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.ops.push(DrawOp::LineTo(x, y));
        self.lines += 1;
    }

    fn arc_to(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, start: f32, sweep: f32) {
        self.ops.push(DrawOp::ArcTo {
            cx,
            cy,
            rx,
            ry,
            start,
            sweep,
        });
        self.arcs += 1;
    }

    fn stroke(&mut self) {
        self.ops.push(DrawOp::Stroke);
        self.strokes.push(StrokeRecord {
            color: self.style.stroke,
            width: self.style.width,
            cap: self.style.cap,
            lines: self.lines,
            arcs: self.arcs,
        });
        self.reset_path();
    }

    fn fill(&mut self) {
        self.ops.push(DrawOp::Fill);
        self.fills += 1;
        self.reset_path();
    }
}
