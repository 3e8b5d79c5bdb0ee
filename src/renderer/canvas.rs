//! 2D vector drawing surface
//!
//! The radar drawing routines only ever talk to this trait. Paths are built
//! with `move_to`/`line_to`/`arc_to` in the current transform and consumed by
//! `stroke` or `fill`.

/// 8-bit RGBA color in display space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque pure green at the given channel level
    pub const fn green(g: u8) -> Self {
        Self::rgba(0, g, 0, 255)
    }

    /// Normalized floats for vertex data
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

/// Stroke end style for open paths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    /// Ends exactly at the endpoint
    #[default]
    Butt,
    /// Extends half the line width past the endpoint
    Square,
    /// Half-disc past the endpoint
    Round,
}

/// Immediate-mode 2D drawing surface
pub trait Canvas {
    /// Drop everything drawn so far this frame
    fn clear(&mut self);

    /// Push transform and style
    fn save(&mut self);
    /// Pop transform and style pushed by the matching `save`
    fn restore(&mut self);
    fn translate(&mut self, dx: f32, dy: f32);
    /// Rotate the user space by `radians` (clockwise on screen, y down)
    fn rotate(&mut self, radians: f32);

    fn set_stroke_color(&mut self, color: Color);
    fn set_fill_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f32);
    fn set_line_cap(&mut self, cap: LineCap);

    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    /// Elliptical arc around (cx, cy) from `start_angle` through `sweep_angle` (radians)
    ///
    /// Joined to the current point with a straight line if one exists.
    fn arc_to(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, start_angle: f32, sweep_angle: f32);

    /// Outline the current path and start a new one
    fn stroke(&mut self);
    /// Fill the current path and start a new one
    fn fill(&mut self);
}
