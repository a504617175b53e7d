//! Collision tests between the moving-object collections
//!
//! Everything reduces to a point-against-disc test on plain Euclidean
//! distance. The controller runs brute-force passes over the collections;
//! no spatial index is warranted at this object count.

use glam::Vec2;

/// True when `point` lies strictly inside the disc. Projectiles are
/// treated as points, and the ship is tested by its center alone (its own
/// radius does not widen the hit circle).
#[inline]
pub fn point_hits_circle(point: Vec2, center: Vec2, radius: f32) -> bool {
    point.distance(center) < radius
}
