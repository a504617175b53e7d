//! Game tuning record
//!
//! One flat struct handed to the session at construction. The defaults are
//! the canonical arcade values; a host can deserialize its own.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// All tuning knobs for one session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Playfield width in pixels; positions wrap into [0, width)
    pub screen_width: f32,
    /// Playfield height in pixels; positions wrap into [0, height)
    pub screen_height: f32,

    /// Starting life count
    pub lives: u32,

    // === Asteroids ===
    /// Velocity components are sampled uniformly in ±this (px/tick)
    pub asteroid_speed: f32,
    /// Radius sampled uniformly in [min, max]
    pub asteroid_radius_min: f32,
    pub asteroid_radius_max: f32,
    /// Cosmetic spin sampled uniformly in ±this (degrees/tick)
    pub asteroid_spin_max: f32,
    /// Spawner tops the live count up to this each tick
    pub min_asteroids: usize,
    /// Hard cap on simultaneous asteroids
    pub max_asteroids: usize,
    /// Explosion animation length in ticks
    pub explosion_ticks: u32,
    /// Tick at which the explosion switches to its second frame
    pub explosion_frame_switch: u32,

    // === Ship ===
    pub ship_radius: f32,
    /// Forward acceleration while thrusting (px/tick²)
    pub ship_thrust: f32,
    /// Rotation per tick of held input (degrees)
    pub ship_rotation_speed: f32,
    /// Velocity multiplier per coasting tick; decay is exponential and
    /// never reaches zero, so drift persists
    pub ship_friction: f32,

    // === Projectiles ===
    pub projectile_speed: f32,
    /// Lifetime in ticks; a projectile that hits nothing expires after
    /// exactly this many advances
    pub projectile_lifetime: i32,

    // === Start screen ===
    /// Decorative rocks drifting behind the title
    pub backdrop_rocks: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: 800.0,
            screen_height: 600.0,
            lives: 3,
            asteroid_speed: 2.0,
            asteroid_radius_min: 20.0,
            asteroid_radius_max: 40.0,
            asteroid_spin_max: 2.0,
            min_asteroids: 5,
            max_asteroids: 10,
            explosion_ticks: 20,
            explosion_frame_switch: 10,
            ship_radius: 15.0,
            ship_thrust: 0.1,
            ship_rotation_speed: 3.0,
            ship_friction: 0.99,
            projectile_speed: 8.0,
            projectile_lifetime: 50,
            backdrop_rocks: 10,
        }
    }
}

impl Config {
    /// Center of the playfield (ship spawn and respawn point)
    #[inline]
    pub fn screen_center(&self) -> Vec2 {
        Vec2::new(self.screen_width / 2.0, self.screen_height / 2.0)
    }
}
