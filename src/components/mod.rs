//! UI components for the promo site.

pub mod countdown;
pub mod sections;
pub mod starfield;
