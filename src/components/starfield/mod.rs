//! Animated starfield background component.
//!
//! A full-viewport canvas of softly twinkling stars drifting on a bounded
//! random walk:
//! - Wandering velocity with a hard clamp, wrap-around edges
//! - Sinusoidal twinkle driven by a per-star phase angle
//! - Incremental reconfiguration (count changes append or truncate, never
//!   rebuild the field)
//! - Optional pointer ring and scroll contrails
//!
//! # Example
//!
//! ```ignore
//! use hackthenet_site::components::starfield::{Starfield, StarfieldConfig};
//!
//! let config = Signal::derive(|| StarfieldConfig {
//!     count: 800,
//!     ..StarfieldConfig::default()
//! });
//!
//! view! { <Starfield config /> }
//! ```

mod component;
mod config;
mod field;
mod render;

pub use component::Starfield;
pub use config::{Color, StarfieldConfig};
pub use field::{PointerState, Star, StarField};
