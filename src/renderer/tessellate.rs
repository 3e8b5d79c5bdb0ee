//! Path tessellation
//!
//! `VertexCanvas` implements the drawing surface by flattening paths into
//! polylines and emitting triangle lists in window pixels, ready for the
//! GPU pipeline.

use glam::{Affine2, Vec2};
use std::f32::consts::TAU;

use super::canvas::{Canvas, Color, LineCap};
use super::vertex::Vertex;

/// Target length of one flattened arc segment (pixels)
const ARC_SEGMENT_LENGTH: f32 = 4.0;
const MIN_ARC_SEGMENTS: u32 = 8;
const MAX_ARC_SEGMENTS: u32 = 256;
/// Segments in a round line cap
const CAP_SEGMENTS: u32 = 16;
/// Longest miter, in half line widths
const MITER_LIMIT: f32 = 4.0;
/// Points closer than this are merged
const EPSILON: f32 = 1e-3;

#[derive(Debug, Clone, Copy)]
struct GraphicState {
    transform: Affine2,
    stroke: Color,
    fill: Color,
    line_width: f32,
    line_cap: LineCap,
}

impl Default for GraphicState {
    fn default() -> Self {
        Self {
            transform: Affine2::IDENTITY,
            stroke: Color::BLACK,
            fill: Color::BLACK,
            line_width: 1.0,
            line_cap: LineCap::Butt,
        }
    }
}

/// Canvas producing triangles
#[derive(Debug, Default)]
pub struct VertexCanvas {
    vertices: Vec<Vertex>,
    state: GraphicState,
    saved: Vec<GraphicState>,
    /// Subpaths of the current path, in device pixels
    path: Vec<Vec<Vec2>>,
}

impl VertexCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Triangles emitted since the last `clear`
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    fn to_device(&self, x: f32, y: f32) -> Vec2 {
        self.state.transform.transform_point2(Vec2::new(x, y))
    }

    fn push_point(&mut self, p: Vec2) {
        match self.path.last_mut() {
            Some(sub) => {
                if sub.last().is_none_or(|last| last.distance(p) > EPSILON) {
                    sub.push(p);
                }
            }
            None => self.path.push(vec![p]),
        }
    }

    fn stroke_polyline(&mut self, points: &[Vec2]) {
        if points.len() < 2 {
            return;
        }
        let color = self.state.stroke.to_f32();
        let half = self.state.line_width * 0.5;

        let mut pts = points.to_vec();
        let closed = pts.len() > 2 && pts[0].distance(pts[pts.len() - 1]) < EPSILON;
        if closed {
            pts.pop();
        }
        let n = pts.len();
        let seg_count = if closed { n } else { n - 1 };

        if !closed && self.state.line_cap == LineCap::Square {
            let start_dir = (pts[1] - pts[0]).normalize_or_zero();
            let end_dir = (pts[n - 1] - pts[n - 2]).normalize_or_zero();
            pts[0] -= start_dir * half;
            pts[n - 1] += end_dir * half;
        }

        let normals: Vec<Vec2> = (0..seg_count)
            .map(|i| {
                let dir = (pts[(i + 1) % n] - pts[i]).normalize_or_zero();
                Vec2::new(-dir.y, dir.x)
            })
            .collect();

        let offsets: Vec<Vec2> = (0..n)
            .map(|i| {
                let (prev, next) = if closed {
                    (normals[(i + seg_count - 1) % seg_count], normals[i])
                } else if i == 0 {
                    (normals[0], normals[0])
                } else if i == n - 1 {
                    (normals[seg_count - 1], normals[seg_count - 1])
                } else {
                    (normals[i - 1], normals[i])
                };
                miter(prev, next) * half
            })
            .collect();

        self.vertices.reserve(seg_count * 6);
        for i in 0..seg_count {
            let (a, b) = (i, (i + 1) % n);
            let v1a = pts[a] + offsets[a];
            let v1b = pts[a] - offsets[a];
            let v2a = pts[b] + offsets[b];
            let v2b = pts[b] - offsets[b];

            // Two triangles per segment
            self.vertices.push(Vertex::new(v1a.x, v1a.y, color));
            self.vertices.push(Vertex::new(v1b.x, v1b.y, color));
            self.vertices.push(Vertex::new(v2a.x, v2a.y, color));

            self.vertices.push(Vertex::new(v2a.x, v2a.y, color));
            self.vertices.push(Vertex::new(v1b.x, v1b.y, color));
            self.vertices.push(Vertex::new(v2b.x, v2b.y, color));
        }

        if !closed && self.state.line_cap == LineCap::Round {
            self.disc(pts[0], half, color);
            self.disc(pts[n - 1], half, color);
        }
    }

    /// Filled circle as a triangle fan around `center`
    fn disc(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        for i in 0..CAP_SEGMENTS {
            let theta1 = (i as f32 / CAP_SEGMENTS as f32) * TAU;
            let theta2 = ((i + 1) as f32 / CAP_SEGMENTS as f32) * TAU;

            self.vertices.push(Vertex::new(center.x, center.y, color));
            self.vertices.push(Vertex::new(
                center.x + radius * theta1.cos(),
                center.y + radius * theta1.sin(),
                color,
            ));
            self.vertices.push(Vertex::new(
                center.x + radius * theta2.cos(),
                center.y + radius * theta2.sin(),
                color,
            ));
        }
    }
}

/// Offset direction at a joint, scaled so both adjoining bands keep their width
fn miter(prev: Vec2, next: Vec2) -> Vec2 {
    let m = (prev + next).normalize_or_zero();
    if m == Vec2::ZERO {
        // Path doubles back on itself
        return next;
    }
    m / m.dot(next).max(1.0 / MITER_LIMIT)
}

impl Canvas for VertexCanvas {
    fn clear(&mut self) {
        self.vertices.clear();
        self.path.clear();
        self.saved.clear();
        self.state = GraphicState::default();
    }

    fn save(&mut self) {
        self.saved.push(self.state);
    }

    fn restore(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.state = state;
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.state.transform = self.state.transform * Affine2::from_translation(Vec2::new(dx, dy));
    }

    fn rotate(&mut self, radians: f32) {
        self.state.transform = self.state.transform * Affine2::from_angle(radians);
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.state.stroke = color;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.state.fill = color;
    }

    fn set_line_width(&mut self, width: f32) {
        self.state.line_width = width;
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.state.line_cap = cap;
    }

    fn move_to(&mut self, x: f32, y: f32) {
        let p = self.to_device(x, y);
        // A lone move_to is replaced rather than left as an empty subpath
        match self.path.last_mut() {
            Some(sub) if sub.len() == 1 => sub[0] = p,
            _ => self.path.push(vec![p]),
        }
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.to_device(x, y);
        self.push_point(p);
    }

    fn arc_to(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, start_angle: f32, sweep_angle: f32) {
        let span = rx.abs().max(ry.abs()) * sweep_angle.abs();
        let segments = ((span / ARC_SEGMENT_LENGTH).ceil() as u32).clamp(MIN_ARC_SEGMENTS, MAX_ARC_SEGMENTS);
        for k in 0..=segments {
            let theta = start_angle + sweep_angle * (k as f32 / segments as f32);
            let p = self.to_device(cx + rx * theta.cos(), cy + ry * theta.sin());
            self.push_point(p);
        }
    }

    fn stroke(&mut self) {
        let path = std::mem::take(&mut self.path);
        for sub in &path {
            self.stroke_polyline(sub);
        }
    }

    fn fill(&mut self) {
        let path = std::mem::take(&mut self.path);
        let color = self.state.fill.to_f32();
        for sub in path.iter().filter(|sub| sub.len() >= 3) {
            for i in 1..sub.len() - 1 {
                self.vertices.push(Vertex::new(sub[0].x, sub[0].y, color));
                self.vertices.push(Vertex::new(sub[i].x, sub[i].y, color));
                self.vertices.push(Vertex::new(sub[i + 1].x, sub[i + 1].y, color));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(v: &Vertex) -> Vec2 {
        Vec2::from(v.position)
    }

    #[test]
    fn test_butt_line() {
        let mut canvas = VertexCanvas::new();
        canvas.set_line_width(2.0);
        canvas.move_to(0.0, 0.0);
        canvas.line_to(10.0, 0.0);
        canvas.stroke();

        let verts = canvas.vertices();
        assert_eq!(verts.len(), 6);
        for v in verts {
            let p = pos(v);
            assert!(p.x.abs() < 1e-4 || (p.x - 10.0).abs() < 1e-4);
            assert!((p.y.abs() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_square_cap_extends_ends() {
        let mut canvas = VertexCanvas::new();
        canvas.set_line_width(2.0);
        canvas.set_line_cap(LineCap::Square);
        canvas.move_to(0.0, 0.0);
        canvas.line_to(10.0, 0.0);
        canvas.stroke();

        let xs: Vec<f32> = canvas.vertices().iter().map(|v| v.position[0]).collect();
        let min = xs.iter().cloned().fold(f32::MAX, f32::min);
        let max = xs.iter().cloned().fold(f32::MIN, f32::max);
        assert!((min + 1.0).abs() < 1e-4);
        assert!((max - 11.0).abs() < 1e-4);
    }

    #[test]
    fn test_round_cap_adds_discs() {
        let mut canvas = VertexCanvas::new();
        canvas.set_line_cap(LineCap::Round);
        canvas.move_to(0.0, 0.0);
        canvas.line_to(10.0, 0.0);
        canvas.stroke();
        assert_eq!(canvas.vertices().len(), 6 + 2 * CAP_SEGMENTS as usize * 3);
    }

    #[test]
    fn test_transform_and_restore() {
        let mut canvas = VertexCanvas::new();
        canvas.save();
        canvas.translate(5.0, 5.0);
        canvas.rotate(std::f32::consts::FRAC_PI_2);
        canvas.set_line_width(0.5);
        canvas.move_to(0.0, 0.0);
        canvas.line_to(10.0, 0.0);
        canvas.stroke();
        canvas.restore();

        // Rotated a quarter turn: the line now runs down the screen from (5, 5)
        for v in canvas.vertices() {
            let p = pos(v);
            assert!((p.x - 5.0).abs() <= 0.25 + 1e-4);
            assert!(p.y > 5.0 - 1e-4 && p.y < 15.0 + 1e-4);
        }

        // Identity transform and default width are back
        let before = canvas.vertices().len();
        canvas.move_to(0.0, 0.0);
        canvas.line_to(10.0, 0.0);
        canvas.stroke();
        let last = &canvas.vertices()[before..];
        assert!(last.iter().all(|v| (v.position[1].abs() - 0.5).abs() < 1e-4));
    }

    #[test]
    fn test_closed_circle_band() {
        let mut canvas = VertexCanvas::new();
        canvas.set_line_width(4.0);
        canvas.set_stroke_color(Color::green(200));
        canvas.move_to(150.0, 100.0);
        canvas.arc_to(100.0, 100.0, 50.0, 50.0, 0.0, TAU);
        canvas.stroke();

        let verts = canvas.vertices();
        assert!(!verts.is_empty());
        assert_eq!(verts.len() % 6, 0);
        for v in verts {
            let r = pos(v).distance(Vec2::new(100.0, 100.0));
            assert!((47.9..=52.1).contains(&r), "radius {r}");
            assert_eq!(v.color, Color::green(200).to_f32());
        }
    }

    #[test]
    fn test_fill_fan() {
        let mut canvas = VertexCanvas::new();
        canvas.set_fill_color(Color::rgba(255, 0, 0, 255));
        canvas.move_to(0.0, 0.0);
        canvas.line_to(10.0, 0.0);
        canvas.line_to(10.0, 10.0);
        canvas.line_to(0.0, 10.0);
        canvas.fill();

        let verts = canvas.vertices();
        assert_eq!(verts.len(), 6);
        assert!(verts.iter().all(|v| v.color == [1.0, 0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_stroke_consumes_path_and_clear_resets() {
        let mut canvas = VertexCanvas::new();
        canvas.move_to(0.0, 0.0);
        canvas.line_to(10.0, 0.0);
        canvas.stroke();
        let count = canvas.vertices().len();
        canvas.stroke();
        assert_eq!(canvas.vertices().len(), count);

        canvas.translate(100.0, 0.0);
        canvas.clear();
        assert!(canvas.vertices().is_empty());
        canvas.move_to(0.0, 0.0);
        canvas.line_to(10.0, 0.0);
        canvas.stroke();
        assert!(canvas.vertices().iter().all(|v| v.position[0] <= 10.0 + 1e-4));
    }

    #[test]
    fn test_degenerate_paths_draw_nothing() {
        let mut canvas = VertexCanvas::new();
        canvas.move_to(3.0, 3.0);
        canvas.stroke();
        canvas.move_to(1.0, 1.0);
        canvas.line_to(1.0, 1.0);
        canvas.stroke();
        canvas.move_to(0.0, 0.0);
        canvas.line_to(5.0, 0.0);
        canvas.fill();
        assert!(canvas.vertices().is_empty());
    }
}
