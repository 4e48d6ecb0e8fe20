//! Star particle engine for the animated background.
//!
//! Pure state-update logic with no web dependencies: the Leptos component
//! owns a [`StarField`], advances it once per animation frame, and hands it
//! to the renderer. Randomness comes from an injected seed so tests can run
//! the engine deterministically.

use std::f64::consts::TAU;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Velocity clamp for either component, before speed-factor scaling.
const MAX_WANDER_SPEED: f64 = 0.2;
/// Amplitude of the per-frame random velocity perturbation.
const WANDER_JITTER: f64 = 0.01;
/// Twinkle phase advance per frame.
const PHASE_STEP: f64 = 0.02;
/// Twinkle opacity floor.
const OPACITY_MIN: f64 = 0.1;
/// Twinkle opacity span above the floor.
const OPACITY_SPAN: f64 = 0.7;
/// Geometric damping applied to the scroll trail each frame.
const TRAIL_DECAY: f64 = 0.95;
/// Trail magnitude below which the trail snaps to zero.
const TRAIL_EPSILON: f64 = 1e-3;

/// A single twinkling star.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
	/// Position in surface coordinates (CSS pixels).
	pub x: f64,
	/// Position in surface coordinates (CSS pixels).
	pub y: f64,
	/// Velocity in pixels per frame.
	pub vx: f64,
	/// Velocity in pixels per frame.
	pub vy: f64,
	/// Draw radius, fixed at spawn.
	pub radius: f64,
	/// Per-star multiplier for contrail length.
	pub speed: f64,
	/// Current twinkle opacity, recomputed from `phase` each frame.
	pub opacity: f64,
	/// Twinkle phase angle, advanced each frame.
	pub phase: f64,
}

/// Last-known pointer position over the drawing surface.
///
/// Written by the component's pointer/touch handlers and read by the draw
/// pass on the next frame; both run on the same event queue, so no further
/// synchronization is needed.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
	/// Pointer x relative to the canvas.
	pub x: f64,
	/// Pointer y relative to the canvas.
	pub y: f64,
	/// Whether the pointer is currently over the surface.
	pub inside: bool,
}

/// The animated star set and its surface bounds.
pub struct StarField {
	stars: Vec<Star>,
	width: f64,
	height: f64,
	rng: SmallRng,
	trail: f64,
}

/// Fold a coordinate back into `[0, bound)`.
fn wrap(value: f64, bound: f64) -> f64 {
	if bound <= 0.0 {
		return value;
	}
	let wrapped = value.rem_euclid(bound);
	// rem_euclid rounds up to `bound` for tiny negative inputs.
	if wrapped >= bound { 0.0 } else { wrapped }
}

/// Map a phase angle to an opacity in `[OPACITY_MIN, OPACITY_MIN + OPACITY_SPAN]`.
fn twinkle(phase: f64) -> f64 {
	(phase.sin() + 1.0) / 2.0 * OPACITY_SPAN + OPACITY_MIN
}

impl StarField {
	/// Create a field of `count` stars scattered uniformly over
	/// `width x height`, using a seeded generator.
	pub fn new(count: usize, width: f64, height: f64, seed: u64) -> Self {
		let mut field = Self {
			stars: Vec::with_capacity(count),
			width,
			height,
			rng: SmallRng::seed_from_u64(seed),
			trail: 0.0,
		};
		field.set_count(count);
		field
	}

	fn scatter(&mut self, bound: f64) -> f64 {
		if bound > 0.0 {
			self.rng.random_range(0.0..bound)
		} else {
			0.0
		}
	}

	fn spawn(&mut self) -> Star {
		let x = self.scatter(self.width);
		let y = self.scatter(self.height);
		let phase = self.rng.random_range(0.0..TAU);
		Star {
			x,
			y,
			vx: (self.rng.random::<f64>() - 0.5) * MAX_WANDER_SPEED,
			vy: (self.rng.random::<f64>() - 0.5) * MAX_WANDER_SPEED,
			radius: self.rng.random_range(0.4..1.2),
			speed: self.rng.random_range(0.5..1.5),
			opacity: twinkle(phase),
			phase,
		}
	}

	/// Reconcile the star set to `count` by appending new stars or
	/// truncating the excess. Surviving stars are never touched, so
	/// reconfiguration does not visually reset the field.
	pub fn set_count(&mut self, count: usize) {
		if self.stars.len() > count {
			self.stars.truncate(count);
		}
		while self.stars.len() < count {
			let star = self.spawn();
			self.stars.push(star);
		}
	}

	/// Advance the field by one frame: wander, integrate, wrap, twinkle,
	/// and decay the scroll trail.
	///
	/// `speed_factor` scales both the perturbation and the velocity clamp;
	/// non-finite or non-positive values fall back to 1.0 so a bad config
	/// cannot stall or explode the field.
	pub fn step(&mut self, speed_factor: f64) {
		let factor = if speed_factor.is_finite() && speed_factor > 0.0 {
			speed_factor
		} else {
			1.0
		};
		let max_speed = MAX_WANDER_SPEED * factor;
		for star in &mut self.stars {
			let jx = (self.rng.random::<f64>() - 0.5) * WANDER_JITTER * factor;
			let jy = (self.rng.random::<f64>() - 0.5) * WANDER_JITTER * factor;
			star.vx = (star.vx + jx).clamp(-max_speed, max_speed);
			star.vy = (star.vy + jy).clamp(-max_speed, max_speed);
		}
		self.advance();
		self.trail *= TRAIL_DECAY;
		if self.trail.abs() < TRAIL_EPSILON {
			self.trail = 0.0;
		}
	}

	/// Integrate positions by one frame and update twinkle state, without
	/// perturbing velocities. Positions wrap at the surface edges.
	fn advance(&mut self) {
		for star in &mut self.stars {
			star.x = wrap(star.x + star.vx, self.width);
			star.y = wrap(star.y + star.vy, self.height);
			star.phase += PHASE_STEP;
			star.opacity = twinkle(star.phase);
		}
	}

	/// Update the surface bounds. Stars keep their positions; anything left
	/// outside the new bounds wraps back in on the next step. The set is
	/// never regenerated on resize.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// Feed a scroll delta into the decaying contrail value.
	pub fn kick(&mut self, delta: f64) {
		self.trail += delta;
	}

	/// Current contrail magnitude (signed; decays toward zero each step).
	pub fn trail(&self) -> f64 {
		self.trail
	}

	/// The current star set.
	pub fn stars(&self) -> &[Star] {
		&self.stars
	}

	/// Number of stars currently in the field.
	pub fn len(&self) -> usize {
		self.stars.len()
	}

	/// Whether the field holds no stars.
	pub fn is_empty(&self) -> bool {
		self.stars.is_empty()
	}

	/// Surface width in CSS pixels.
	pub fn width(&self) -> f64 {
		self.width
	}

	/// Surface height in CSS pixels.
	pub fn height(&self) -> f64 {
		self.height
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn field(count: usize) -> StarField {
		StarField::new(count, 200.0, 120.0, 42)
	}

	#[test]
	fn initial_count_matches_target() {
		for count in [0, 1, 3, 500] {
			assert_eq!(field(count).len(), count);
		}
	}

	#[test]
	fn spawned_stars_start_in_bounds() {
		let field = field(300);
		for star in field.stars() {
			assert!(star.x >= 0.0 && star.x < 200.0);
			assert!(star.y >= 0.0 && star.y < 120.0);
		}
	}

	#[test]
	fn opacity_stays_in_twinkle_range() {
		let mut field = field(64);
		for _ in 0..10_000 {
			field.step(1.0);
			for star in field.stars() {
				assert!(star.opacity >= 0.1 && star.opacity <= 0.8 + 1e-12);
			}
		}
	}

	#[test]
	fn positions_stay_in_bounds_over_many_frames() {
		let mut field = field(64);
		for _ in 0..10_000 {
			field.step(1.0);
			for star in field.stars() {
				assert!(star.x >= 0.0 && star.x < 200.0, "x = {}", star.x);
				assert!(star.y >= 0.0 && star.y < 120.0, "y = {}", star.y);
			}
		}
	}

	#[test]
	fn velocity_components_stay_clamped() {
		let mut field = field(64);
		for _ in 0..2_000 {
			field.step(1.0);
		}
		for star in field.stars() {
			assert!(star.vx.abs() <= 0.2);
			assert!(star.vy.abs() <= 0.2);
		}
	}

	#[test]
	fn wrap_crossing_right_edge_is_exact() {
		let mut field = StarField::new(3, 100.0, 100.0, 1);
		field.stars[0] = Star {
			x: 99.5,
			y: 50.0,
			vx: 1.0,
			vy: 0.0,
			radius: 1.0,
			speed: 1.0,
			opacity: 0.5,
			phase: 0.0,
		};
		field.advance();
		assert_eq!(field.stars[0].x, 0.5);
		assert_eq!(field.stars[0].y, 50.0);
	}

	#[test]
	fn wrap_crossing_left_edge_is_exact() {
		let mut field = StarField::new(1, 100.0, 100.0, 1);
		field.stars[0].x = 0.25;
		field.stars[0].vx = -1.0;
		field.stars[0].vy = 0.0;
		field.advance();
		assert_eq!(field.stars[0].x, 99.25);
	}

	#[test]
	fn wrap_folds_exact_bound_to_zero() {
		assert_eq!(wrap(100.0, 100.0), 0.0);
		assert_eq!(wrap(-0.5, 100.0), 99.5);
		assert_eq!(wrap(42.0, 100.0), 42.0);
		// Rounding from a tiny negative input must not land on the bound itself.
		assert_eq!(wrap(-1e-18, 100.0), 0.0);
	}

	#[test]
	fn growing_keeps_existing_stars_untouched() {
		let mut field = field(5);
		let before = field.stars().to_vec();
		field.set_count(9);
		assert_eq!(field.len(), 9);
		assert_eq!(&field.stars()[..5], &before[..]);
		for star in &field.stars()[5..] {
			assert!(star.x >= 0.0 && star.x < 200.0);
		}
	}

	#[test]
	fn shrinking_keeps_a_prefix_of_existing_stars() {
		let mut field = field(10);
		let before = field.stars().to_vec();
		field.set_count(4);
		assert_eq!(field.len(), 4);
		assert_eq!(field.stars(), &before[..4]);
	}

	#[test]
	fn resize_preserves_stars_and_rewraps_on_next_step() {
		let mut field = field(50);
		let before = field.stars().to_vec();
		field.resize(300.0, 150.0);
		assert_eq!(field.stars(), &before[..]);
		field.step(1.0);
		for star in field.stars() {
			assert!(star.x >= 0.0 && star.x < 300.0);
			assert!(star.y >= 0.0 && star.y < 150.0);
		}
	}

	#[test]
	fn trail_decays_geometrically_to_zero() {
		let mut field = field(8);
		field.kick(12.0);
		assert_eq!(field.trail(), 12.0);
		field.step(1.0);
		assert!((field.trail() - 12.0 * 0.95).abs() < 1e-9);
		for _ in 0..300 {
			field.step(1.0);
		}
		assert_eq!(field.trail(), 0.0);
	}

	#[test]
	fn same_seed_same_evolution() {
		let mut a = StarField::new(40, 640.0, 480.0, 7);
		let mut b = StarField::new(40, 640.0, 480.0, 7);
		for _ in 0..250 {
			a.step(1.0);
			b.step(1.0);
		}
		assert_eq!(a.stars(), b.stars());
	}

	#[test]
	fn bad_speed_factor_falls_back_to_default() {
		let mut field = field(16);
		field.step(f64::NAN);
		field.step(-3.0);
		field.step(0.0);
		for star in field.stars() {
			assert!(star.vx.is_finite() && star.vy.is_finite());
			assert!(star.vx.abs() <= 0.2 && star.vy.abs() <= 0.2);
		}
	}

	#[test]
	fn empty_field_steps_without_panicking() {
		let mut field = field(0);
		field.step(1.0);
		assert!(field.is_empty());
	}
}
