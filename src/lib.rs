//! Astrodrift - a wrap-around asteroids arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `config`: Data-driven game tuning
//!
//! Rendering and input bindings live in the host; the sim exposes plain
//! state that the host reads back every frame and mutates only through
//! [`sim::tick`].

pub mod config;
pub mod sim;

pub use config::Config;

use glam::Vec2;

/// Normalize a heading in degrees to [0, 360)
#[inline]
pub fn normalize_heading(degrees: f32) -> f32 {
    degrees.rem_euclid(360.0)
}

/// Unit vector for a heading in degrees (0 points along +x)
#[inline]
pub fn heading_to_vec(degrees: f32) -> Vec2 {
    let rad = degrees.to_radians();
    Vec2::new(rad.cos(), rad.sin())
}

/// Wrap a single coordinate into [0, dim)
#[inline]
pub fn wrap_coord(value: f32, dim: f32) -> f32 {
    // rem_euclid of a tiny negative value can round up to exactly `dim`
    let wrapped = value.rem_euclid(dim);
    if wrapped >= dim { 0.0 } else { wrapped }
}

/// Wrap a position into the screen rectangle [0, width) x [0, height)
#[inline]
pub fn wrap_position(pos: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(wrap_coord(pos.x, width), wrap_coord(pos.y, height))
}
