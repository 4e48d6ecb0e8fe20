//! Visual configuration for the starfield.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in `[0, 1]`.
	pub a: f64,
}

impl Color {
	/// Opaque color from RGB channels.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Copy of this color with a different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// CSS color string, hex when fully opaque.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Starfield tuning knobs. All fields have defaults matching the shipped
/// look: a dense white field on black with a pointer ring and no contrails.
#[derive(Clone, Debug, PartialEq)]
pub struct StarfieldConfig {
	/// Target number of stars.
	pub count: usize,
	/// Star fill color (twinkle alpha is applied per star).
	pub color: Color,
	/// Fill used to clear the surface each frame.
	pub background: Color,
	/// Scales wander velocity and contrail length.
	pub speed_factor: f64,
	/// Radius of the decorative ring drawn around the pointer.
	pub repel_radius: f64,
	/// Whether to draw the pointer ring at all.
	pub pointer_ring: bool,
	/// Whether scrolling leaves motion trails behind the stars.
	pub scroll_trails: bool,
}

impl Default for StarfieldConfig {
	fn default() -> Self {
		Self {
			count: 1000,
			color: Color::rgb(255, 255, 255),
			background: Color::rgb(0, 0, 0),
			speed_factor: 1.0,
			repel_radius: 60.0,
			pointer_ring: true,
			scroll_trails: false,
		}
	}
}

impl StarfieldConfig {
	/// Replace out-of-range numeric fields with their defaults so a bad
	/// config degrades visually instead of breaking the frame loop.
	pub fn sanitized(mut self) -> Self {
		let defaults = Self::default();
		if !self.speed_factor.is_finite() || self.speed_factor <= 0.0 {
			self.speed_factor = defaults.speed_factor;
		}
		if !self.repel_radius.is_finite() || self.repel_radius <= 0.0 {
			self.repel_radius = defaults.repel_radius;
		}
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_formats() {
		assert_eq!(Color::rgb(255, 255, 255).to_css(), "#ffffff");
		assert_eq!(
			Color::rgb(10, 20, 30).with_alpha(0.5).to_css(),
			"rgba(10, 20, 30, 0.5)"
		);
	}

	#[test]
	fn default_config_is_already_sane() {
		let config = StarfieldConfig::default();
		assert_eq!(config.clone().sanitized(), config);
	}

	#[test]
	fn sanitize_replaces_bad_numbers() {
		let config = StarfieldConfig {
			speed_factor: f64::NAN,
			repel_radius: -1.0,
			..StarfieldConfig::default()
		};
		let clean = config.sanitized();
		assert_eq!(clean.speed_factor, 1.0);
		assert_eq!(clean.repel_radius, 60.0);
	}
}
