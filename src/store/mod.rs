//! In-memory state shared across requests
//!
//! - [`ContactGuard`] serializes access to the single contact record
//! - [`ColorPalette`] drives the color swap example

mod contact;
mod palette;

pub use contact::ContactGuard;
pub use palette::{ColorPalette, DEFAULT_COLORS};
