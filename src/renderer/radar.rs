//! Radar scope drawing routines
//!
//! Stateless: each call strokes one layer of the scope from the current
//! geometry, sweep angle and blip snapshot. Every primitive is closed off with
//! exactly one `stroke`.

use std::f32::consts::TAU;

use super::canvas::{Canvas, Color, LineCap};
use crate::consts::*;
use crate::sim::{Blip, BlipField, RadarGeometry};

/// Grid and beam color
pub const RADAR_GREEN: Color = Color::green(SWEEP_HEAD_GREEN);

/// Spokes every 45° from the center to the outer ring
pub fn draw_spokes(canvas: &mut dyn Canvas, geometry: &RadarGeometry) {
    canvas.save();
    canvas.translate(geometry.center.x, geometry.center.y);
    canvas.set_line_width(GRID_LINE_WIDTH);
    canvas.set_stroke_color(RADAR_GREEN);
    for i in 0..SPOKE_COUNT {
        let degrees = i as f32 * (360.0 / SPOKE_COUNT as f32);
        canvas.save();
        canvas.rotate(degrees.to_radians());
        canvas.move_to(0.0, 0.0);
        canvas.line_to(geometry.radius, 0.0);
        canvas.stroke();
        canvas.restore();
    }
    canvas.restore();
}

/// Concentric range rings at 100%, 70%, 40% and 10% of the scope radius
pub fn draw_rings(canvas: &mut dyn Canvas, geometry: &RadarGeometry) {
    canvas.set_line_width(GRID_LINE_WIDTH);
    canvas.set_stroke_color(RADAR_GREEN);
    canvas.set_line_cap(LineCap::Butt);
    for factor in RING_FACTORS {
        circle(canvas, geometry.center.x, geometry.center.y, geometry.radius * factor);
        canvas.stroke();
    }
}

/// Beam at `angle` with a fading tail trailing behind it
pub fn draw_sweep(canvas: &mut dyn Canvas, geometry: &RadarGeometry, angle: u32) {
    for i in 0..SWEEP_TRAIL_LINES {
        let green = SWEEP_HEAD_GREEN.saturating_sub((i as u8).saturating_mul(SWEEP_TRAIL_FADE));
        let degrees = angle as f32 - i as f32 * SWEEP_TRAIL_SPACING;
        canvas.save();
        canvas.translate(geometry.center.x, geometry.center.y);
        canvas.set_line_width(SWEEP_LINE_WIDTH);
        canvas.set_stroke_color(Color::green(green));
        canvas.rotate(degrees.to_radians());
        canvas.move_to(0.0, 0.0);
        canvas.line_to(geometry.radius, 0.0);
        canvas.stroke();
        canvas.restore();
    }
}

/// One ring per blip, as bright as the blip currently is
pub fn draw_blips(canvas: &mut dyn Canvas, field: &BlipField) {
    for blip in field {
        draw_blip(canvas, blip);
    }
}

pub fn draw_blip(canvas: &mut dyn Canvas, blip: &Blip) {
    canvas.set_line_width(BLIP_LINE_WIDTH);
    canvas.set_stroke_color(Color::green(blip.brightness));
    canvas.set_line_cap(LineCap::Butt);
    circle(canvas, blip.pos.x, blip.pos.y, blip.radius);
    canvas.stroke();
}

/// Thick black band outside the outer ring, hiding blips that wandered off the scope
pub fn draw_masking_ring(canvas: &mut dyn Canvas, geometry: &RadarGeometry) {
    let r = geometry.radius;
    canvas.set_line_width(r);
    canvas.set_stroke_color(Color::BLACK);
    canvas.set_line_cap(LineCap::Butt);
    circle(canvas, geometry.center.x, geometry.center.y, r * 1.5 + 1.0);
    canvas.stroke();
}

/// Full-circle path starting at angle 0
fn circle(canvas: &mut dyn Canvas, cx: f32, cy: f32, r: f32) {
    canvas.move_to(cx + r, cy);
    canvas.arc_to(cx, cy, r, r, 0.0, TAU);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::recording::{DrawOp, RecordingCanvas};
    use crate::sim::RandomSource;

    fn geometry() -> RadarGeometry {
        RadarGeometry::from_size(512, 512)
    }

    #[test]
    fn test_spokes() {
        let mut canvas = RecordingCanvas::new();
        draw_spokes(&mut canvas, &geometry());

        assert_eq!(canvas.strokes.len(), 8);
        for s in &canvas.strokes {
            assert_eq!(s.color, RADAR_GREEN);
            assert_eq!(s.width, 2.0);
            assert_eq!((s.lines, s.arcs), (1, 0));
        }
        assert!(canvas.ops.contains(&DrawOp::LineTo(256.0, 0.0)));
        let rotations: Vec<f32> = canvas
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Rotate(r) => Some(r.to_degrees().round()),
                _ => None,
            })
            .collect();
        assert_eq!(rotations, [0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0]);
    }

    #[test]
    fn test_rings() {
        let mut canvas = RecordingCanvas::new();
        draw_rings(&mut canvas, &geometry());

        let radii: Vec<f32> = canvas
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::ArcTo { rx, sweep, .. } => {
                    assert!((sweep - TAU).abs() < 1e-6);
                    Some(*rx)
                }
                _ => None,
            })
            .collect();
        assert_eq!(radii.len(), 4);
        for (r, expected) in radii.iter().zip([256.0, 179.2, 102.4, 25.6]) {
            assert!((r - expected).abs() < 1e-3, "{r} != {expected}");
        }
        assert!(canvas.strokes.iter().all(|s| s.cap == LineCap::Butt && s.arcs == 1));
    }

    #[test]
    fn test_sweep_tail_fades() {
        let mut canvas = RecordingCanvas::new();
        draw_sweep(&mut canvas, &geometry(), 90);

        assert_eq!(canvas.strokes.len(), 60);
        assert_eq!(canvas.strokes[0].color, Color::green(250));
        assert_eq!(canvas.strokes[1].color, Color::green(247));
        assert_eq!(canvas.strokes[59].color, Color::green(73));
        assert!(canvas.strokes.iter().all(|s| s.width == 1.0));

        let first_rotation = canvas.ops.iter().find_map(|op| match op {
            DrawOp::Rotate(r) => Some(*r),
            _ => None,
        });
        assert_eq!(first_rotation, Some(90f32.to_radians()));
        let last_rotation = canvas.ops.iter().rev().find_map(|op| match op {
            DrawOp::Rotate(r) => Some(*r),
            _ => None,
        });
        assert_eq!(last_rotation, Some((90.0 - 29.5f32).to_radians()));
    }

    #[test]
    fn test_blips_use_brightness() {
        let mut rng = RandomSource::new(4);
        let mut field = BlipField::new(512, 512, &mut rng);
        field.update(0, geometry().center, crate::BlipMotion::Swept);

        let mut canvas = RecordingCanvas::new();
        draw_blips(&mut canvas, &field);

        assert_eq!(canvas.strokes.len(), BLIP_COUNT);
        for (stroke, blip) in canvas.strokes.iter().zip(&field) {
            assert_eq!(stroke.color, Color::green(blip.brightness));
            assert_eq!(stroke.width, 4.0);
            assert_eq!(stroke.arcs, 1);
        }
    }

    #[test]
    fn test_masking_ring() {
        let mut canvas = RecordingCanvas::new();
        draw_masking_ring(&mut canvas, &geometry());

        assert_eq!(canvas.strokes.len(), 1);
        assert_eq!(canvas.strokes[0].color, Color::BLACK);
        assert_eq!(canvas.strokes[0].width, 256.0);
        assert!(canvas.ops.iter().any(|op| matches!(
            op,
            DrawOp::ArcTo { rx, .. } if *rx == 385.0
        )));
    }
}
