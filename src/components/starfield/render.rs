//! Canvas drawing pass for the starfield.
//!
//! One pass per frame: clear to the background color, paint every star as a
//! filled arc at its twinkle opacity, then the optional decoration layers
//! (scroll contrails, pointer ring) on top.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::config::StarfieldConfig;
use super::field::{PointerState, StarField};

/// Contrail magnitudes below this are not worth a stroke per star.
const TRAIL_MIN_VISIBLE: f64 = 0.5;

/// Draw the whole frame.
pub fn render(
	field: &StarField,
	pointer: &PointerState,
	ctx: &CanvasRenderingContext2d,
	config: &StarfieldConfig,
) {
	ctx.set_fill_style_str(&config.background.to_css());
	ctx.fill_rect(0.0, 0.0, field.width(), field.height());

	let color = config.color;
	for star in field.stars() {
		ctx.set_fill_style_str(&format!(
			"rgba({}, {}, {}, {})",
			color.r, color.g, color.b, star.opacity
		));
		ctx.begin_path();
		let _ = ctx.arc(star.x, star.y, star.radius, 0.0, PI * 2.0);
		ctx.fill();
	}

	if config.scroll_trails && field.trail().abs() > TRAIL_MIN_VISIBLE {
		draw_contrails(field, ctx, config);
	}

	if config.pointer_ring && pointer.inside {
		draw_pointer_ring(pointer, ctx, config);
	}
}

/// Short lines trailing each star opposite the scroll direction, scaled by
/// the decayed scroll delta and the star's own speed multiplier.
fn draw_contrails(field: &StarField, ctx: &CanvasRenderingContext2d, config: &StarfieldConfig) {
	let trail = field.trail() * config.speed_factor;
	let color = config.color;

	ctx.set_line_width(1.0);
	for star in field.stars() {
		ctx.set_stroke_style_str(&format!(
			"rgba({}, {}, {}, {})",
			color.r,
			color.g,
			color.b,
			star.opacity * 0.5
		));
		ctx.begin_path();
		ctx.move_to(star.x, star.y);
		ctx.line_to(star.x, star.y - trail * star.speed);
		ctx.stroke();
	}
}

fn draw_pointer_ring(pointer: &PointerState, ctx: &CanvasRenderingContext2d, config: &StarfieldConfig) {
	ctx.begin_path();
	let _ = ctx.arc(pointer.x, pointer.y, config.repel_radius, 0.0, PI * 2.0);
	ctx.set_stroke_style_str(&config.color.with_alpha(0.35).to_css());
	ctx.set_line_width(2.0);
	ctx.stroke();
}
