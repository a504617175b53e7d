//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! The host owns the cadence: it feeds `tick` one `TickInput` per fixed
//! interval and reads the resulting `GameState` back as a snapshot.

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::point_hits_circle;
pub use state::{Asteroid, AsteroidPhase, BackdropRock, GameState, Mode, Projectile, Ship};
pub use tick::{Rotate, TickInput, tick};
