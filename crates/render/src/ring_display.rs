//! Progress ring display for visualizing a 0-100 value as a circular arc
//!
//! Layers are painted in a fixed order: track, solid body, fading tail,
//! numeral. The body is stroked with the dash geometry from
//! [`ArcGeometry`]; the tail is painted as short sub-arcs whose opacity
//! follows the configured ramp.

use std::f64::consts::PI;

use cairo::{Context, LineCap};
use pango::Weight as PangoWeight;

use hls_ring_core::geometry::START_ROTATION;
use hls_ring_core::{compose_frame, ArcGeometry, ProgressValue, RingFrame, TailSegment};
use hls_ring_types::{OpacityStop, Palette, RingOptions};

use crate::pango_text::{font_description, show_text_centered, text_size};

/// Upper limit on sub-arcs used to paint one tail
pub const TAIL_STEPS_MAX: u32 = 256;

const NUMERAL_FONT_FAMILY: &str = "Sans";
/// Numeral height relative to ring size (28px on the 200px ring)
const NUMERAL_SCALE: f64 = 0.14;
/// Caption height relative to ring size
const LABEL_SCALE: f64 = 0.07;

/// Render a composed frame centered in a `width` x `height` area
pub fn render_ring(
    cr: &Context,
    frame: &RingFrame,
    options: &RingOptions,
    palette: &Palette,
    width: f64,
    height: f64,
) -> Result<(), cairo::Error> {
    let layout = frame.layout;
    let (cx, cy) = (width / 2.0, height / 2.0);

    cr.save()?;

    if frame.track {
        render_track(cr, palette, cx, cy, layout.radius, layout.stroke_width)?;
    }

    if let Some(base) = &frame.progress {
        cr.save()?;
        cr.translate(cx, cy);
        cr.rotate(START_ROTATION);

        render_body(
            cr,
            palette,
            base,
            frame.body_length(),
            layout.radius,
            layout.stroke_width,
        )?;
        if let Some(tail) = &frame.tail {
            render_tail(cr, palette, options, base, tail, layout.radius, layout.stroke_width)?;
        }

        cr.restore()?;
    }

    render_numeral(cr, frame, palette, cx, cy, layout.size)?;

    cr.restore()?;
    Ok(())
}

/// Compose and render a settled ring showing `value`
pub fn render_static(
    cr: &Context,
    value: f64,
    options: &RingOptions,
    palette: &Palette,
    width: f64,
    height: f64,
) -> Result<(), cairo::Error> {
    let frame = compose_frame(options, ProgressValue::new(value));
    render_ring(cr, &frame, options, palette, width, height)
}

/// Full-circle background stroke
fn render_track(
    cr: &Context,
    palette: &Palette,
    cx: f64,
    cy: f64,
    radius: f64,
    stroke_width: f64,
) -> Result<(), cairo::Error> {
    cr.save()?;
    palette.hairline.apply_to_cairo(cr);
    cr.set_line_width(stroke_width);
    cr.set_line_cap(LineCap::Round);
    cr.new_path();
    cr.arc(cx, cy, radius, 0.0, 2.0 * PI);
    cr.stroke()?;
    cr.restore()?;
    Ok(())
}

/// Solid part of the progress arc, from the start up to `body_length`.
///
/// Expects the context centered on the ring and rotated to 12 o'clock.
fn render_body(
    cr: &Context,
    palette: &Palette,
    base: &ArcGeometry,
    body_length: f64,
    radius: f64,
    stroke_width: f64,
) -> Result<(), cairo::Error> {
    // A zero-length dash with a round cap would still paint a dot
    if body_length <= 0.0 {
        return Ok(());
    }

    let (on, off) = base.dash_array;
    let offset = (base.circumference - body_length).max(0.0);

    cr.save()?;
    palette.accent.apply_to_cairo(cr);
    cr.set_line_width(stroke_width);
    cr.set_line_cap(LineCap::Round);
    cr.set_dash(&[on, off], offset);
    cr.new_path();
    cr.arc(0.0, 0.0, radius, 0.0, 2.0 * PI);
    cr.stroke()?;
    cr.restore()?;
    Ok(())
}

/// Tail from `tail.start` to the head, fading along the opacity ramp.
///
/// Expects the context centered on the ring and rotated to 12 o'clock.
fn render_tail(
    cr: &Context,
    palette: &Palette,
    options: &RingOptions,
    base: &ArcGeometry,
    tail: &TailSegment,
    radius: f64,
    stroke_width: f64,
) -> Result<(), cairo::Error> {
    let steps = options.tail_steps.clamp(1, TAIL_STEPS_MAX);
    let start_angle = base.angle_for(tail.start);
    let sweep = base.angle_for(tail.length);
    let step_angle = sweep / steps as f64;
    let join_color = palette.accent;
    let head_color = palette.tail_head_color();

    cr.save()?;
    cr.set_line_width(stroke_width);
    cr.set_line_cap(LineCap::Butt);

    for i in 0..steps {
        // Sample the ramp at the middle of each sub-arc
        let t = (i as f64 + 0.5) / steps as f64;
        let opacity = tail_opacity(&options.opacity_stops, t);
        if opacity <= 0.0 {
            continue;
        }

        let seg_start = start_angle + i as f64 * step_angle;
        let seg_end = seg_start + step_angle;

        join_color
            .lerp(&head_color, t)
            .with_alpha_factor(opacity)
            .apply_to_cairo(cr);
        cr.new_path();
        cr.arc(0.0, 0.0, radius, seg_start, seg_end);
        cr.stroke()?;
    }

    cr.restore()?;
    Ok(())
}

fn tail_opacity(stops: &[OpacityStop], t: f64) -> f64 {
    TailSegment::opacity_at(stops, t)
}

/// Rounded value, with the caption underneath when present
fn render_numeral(
    cr: &Context,
    frame: &RingFrame,
    palette: &Palette,
    cx: f64,
    cy: f64,
    size: f64,
) -> Result<(), cairo::Error> {
    if !(size.is_finite() && size > 0.0) {
        return Ok(());
    }

    let numeral_font = font_description(
        NUMERAL_FONT_FAMILY,
        PangoWeight::Ultrabold,
        size * NUMERAL_SCALE,
    );
    let label_font = font_description(NUMERAL_FONT_FAMILY, PangoWeight::Normal, size * LABEL_SCALE);

    let numeral_size = text_size(cr, &frame.numeral, &numeral_font);
    let label_height = frame
        .label
        .as_deref()
        .map(|label| text_size(cr, label, &label_font).height)
        .unwrap_or(0.0);
    let top = cy - (numeral_size.height + label_height) / 2.0;

    cr.save()?;
    palette.text_primary.apply_to_cairo(cr);
    show_text_centered(cr, cx, top, &frame.numeral, &numeral_font);

    if let Some(label) = frame.label.as_deref() {
        palette.text_secondary.apply_to_cairo(cr);
        show_text_centered(cr, cx, top + numeral_size.height, label, &label_font);
    }
    cr.restore()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cairo::{Format, ImageSurface};
    use hls_ring_types::Color;

    fn paint(options: &RingOptions, palette: &Palette, value: f64) -> ImageSurface {
        let side = options.size as i32;
        let surface = ImageSurface::create(Format::ARgb32, side, side).unwrap();
        {
            let cr = Context::new(&surface).unwrap();
            render_static(&cr, value, options, palette, options.size, options.size).unwrap();
        }
        surface
    }

    /// Read an opaque pixel as (r, g, b, a)
    fn pixel(surface: &mut ImageSurface, x: usize, y: usize) -> (u8, u8, u8, u8) {
        surface.flush();
        let stride = surface.stride() as usize;
        let data = surface.data().unwrap();
        let i = y * stride + x * 4;
        (data[i + 2], data[i + 1], data[i], data[i + 3])
    }

    fn close_to(actual: (u8, u8, u8, u8), color: Color) -> bool {
        let (r, g, b, _) = color.to_rgba8();
        let near = |x: u8, y: u8| (x as i32 - y as i32).abs() <= 3;
        near(actual.0, r) && near(actual.1, g) && near(actual.2, b)
    }

    #[test]
    fn test_half_ring_pixels() {
        let options = RingOptions {
            show_label: false,
            ..RingOptions::default()
        };
        let palette = Palette::default();
        let mut surface = paint(&options, &palette, 50.0);

        // 3 o'clock is a quarter of the way round: solid body
        let right = pixel(&mut surface, 191, 100);
        assert!(close_to(right, palette.accent), "got {:?}", right);

        // 9 o'clock is three quarters round: bare track
        let left = pixel(&mut surface, 9, 100);
        assert!(close_to(left, palette.hairline), "got {:?}", left);
    }

    #[test]
    fn test_zero_value_shows_track_only() {
        let options = RingOptions::default();
        let palette = Palette::default();
        let mut surface = paint(&options, &palette, 0.0);

        for (x, y) in [(100, 9), (191, 100), (100, 191), (9, 100)] {
            let p = pixel(&mut surface, x, y);
            assert!(close_to(p, palette.hairline), "({}, {}) got {:?}", x, y, p);
        }
    }

    #[test]
    fn test_tail_fades_toward_head() {
        let options = RingOptions {
            show_label: false,
            ..RingOptions::default()
        };
        // Black track makes the tail alpha readable from the red channel
        let palette = Palette {
            accent: Color::new(1.0, 0.0, 0.0, 1.0),
            hairline: Color::new(0.0, 0.0, 0.0, 1.0),
            ..Palette::default()
        };
        let mut surface = paint(&options, &palette, 50.0);

        // The tail spans 40%..50%: just past 6 o'clock is near the join,
        // the head sits at 6 o'clock exactly. Sample at 42% and 49%.
        let at = |fraction: f64| {
            let angle = START_ROTATION + 2.0 * PI * fraction;
            let x = 100.0 + 91.0 * angle.cos();
            let y = 100.0 + 91.0 * angle.sin();
            (x.round() as usize, y.round() as usize)
        };
        let (x1, y1) = at(0.42);
        let (x2, y2) = at(0.49);
        let near_join = pixel(&mut surface, x1, y1).0;
        let near_head = pixel(&mut surface, x2, y2).0;
        assert!(near_join > near_head, "{} vs {}", near_join, near_head);
    }

    #[test]
    fn test_degenerate_geometry_renders_without_progress() {
        let options = RingOptions {
            size: 400.0,
            stroke_width: 300.0,
            ..RingOptions::default()
        };
        let palette = Palette::default();
        let mut surface = paint(&options, &palette, 80.0);

        surface.flush();
        let stride = surface.stride() as usize;
        let data = surface.data().unwrap();
        for y in 0..400 {
            for x in 0..400 {
                let i = y * stride + x * 4;
                let p = (data[i + 2], data[i + 1], data[i], data[i + 3]);
                assert!(!close_to(p, palette.accent), "accent at ({}, {})", x, y);
            }
        }
    }
}
