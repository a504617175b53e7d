//! Game state and core simulation types
//!
//! All state for one session lives here, owned by `GameState` and mutated
//! only through `tick`. Hosts read the public fields back each frame.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::{heading_to_vec, normalize_heading, wrap_position};

/// Current phase of a session
///
/// Transitions are monotonic within a session; a fresh `GameState` is a
/// fresh session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Attract screen with drifting backdrop rocks
    StartScreen,
    /// Active gameplay
    Playing,
    /// Lives hit zero; the killing asteroid's explosion is draining
    GameOverPending,
    /// Run ended
    GameOverFinal,
}

/// A ship-fired projectile: fixed speed, fixed heading, finite lifetime
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Heading in degrees, kept for the renderer
    pub heading: f32,
    /// Remaining lifetime in ticks
    pub lifetime: i32,
    pub expired: bool,
}

impl Projectile {
    pub fn new(origin: Vec2, heading: f32, config: &Config) -> Self {
        Self {
            pos: origin,
            vel: heading_to_vec(heading) * config.projectile_speed,
            heading,
            lifetime: config.projectile_lifetime,
            expired: false,
        }
    }

    /// Move one tick with screen wrap and burn one tick of lifetime.
    pub fn advance(&mut self, config: &Config) {
        debug_assert!(!self.expired, "advanced an expired projectile");
        self.pos = wrap_position(self.pos + self.vel, config.screen_width, config.screen_height);
        self.lifetime -= 1;
        if self.lifetime <= 0 {
            self.expired = true;
        }
    }
}

/// Lifecycle of an asteroid
///
/// A tagged state instead of flag pairs, so destroyed-while-exploding
/// cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AsteroidPhase {
    /// Moving and collidable
    Drifting,
    /// Playing the explosion animation; position is frozen
    Exploding {
        timer: u32,
        /// Set when this asteroid killed the ship; the game-over drain
        /// waits for its animation before the final screen
        lethal: bool,
    },
    /// Terminal; filtered out on the controller's next cleanup pass
    Destroyed,
}

/// A drifting circular rock
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Cosmetic rotation in degrees
    pub angle: f32,
    /// Cosmetic spin in degrees/tick
    pub spin: f32,
    pub phase: AsteroidPhase,
}

impl Asteroid {
    /// Spawn at `pos` with radius, initial angle and spin drawn from `rng`.
    pub fn new(pos: Vec2, vel: Vec2, rng: &mut Pcg32, config: &Config) -> Self {
        Self {
            pos,
            vel,
            radius: rng.random_range(config.asteroid_radius_min..=config.asteroid_radius_max),
            angle: rng.random_range(0.0..360.0),
            spin: rng.random_range(-config.asteroid_spin_max..=config.asteroid_spin_max),
            phase: AsteroidPhase::Drifting,
        }
    }

    /// One tick: drift with wrap while alive, count the explosion down
    /// otherwise.
    pub fn advance(&mut self, config: &Config) {
        match self.phase {
            AsteroidPhase::Drifting => {
                self.pos =
                    wrap_position(self.pos + self.vel, config.screen_width, config.screen_height);
                self.angle = normalize_heading(self.angle + self.spin);
            }
            AsteroidPhase::Exploding { timer, lethal } => {
                let timer = timer + 1;
                self.phase = if timer >= config.explosion_ticks {
                    AsteroidPhase::Destroyed
                } else {
                    AsteroidPhase::Exploding { timer, lethal }
                };
            }
            AsteroidPhase::Destroyed => {
                debug_assert!(false, "advanced a destroyed asteroid");
            }
        }
    }

    /// Begin the explosion animation. A no-op unless drifting, so a second
    /// hit in the same window never resets the timer.
    pub fn start_explosion(&mut self, lethal: bool) {
        if self.phase == AsteroidPhase::Drifting {
            self.phase = AsteroidPhase::Exploding { timer: 0, lethal };
        }
    }

    #[inline]
    pub fn is_drifting(&self) -> bool {
        self.phase == AsteroidPhase::Drifting
    }

    #[inline]
    pub fn is_exploding(&self) -> bool {
        matches!(self.phase, AsteroidPhase::Exploding { .. })
    }

    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.phase == AsteroidPhase::Destroyed
    }

    /// Explosion sprite index for the renderer: 0 for the first half of
    /// the animation, 1 after the switch tick. `None` while not exploding.
    pub fn explosion_frame(&self, config: &Config) -> Option<u32> {
        match self.phase {
            AsteroidPhase::Exploding { timer, .. } => {
                Some(if timer < config.explosion_frame_switch { 0 } else { 1 })
            }
            _ => None,
        }
    }
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Heading in degrees; 0 points along +x
    pub heading: f32,
    pub radius: f32,
    pub thrusting: bool,
}

impl Ship {
    pub fn new(pos: Vec2, config: &Config) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            heading: 0.0,
            radius: config.ship_radius,
            thrusting: false,
        }
    }

    /// Turn by `delta` degrees, keeping the heading in [0, 360).
    pub fn rotate(&mut self, delta: f32) {
        self.heading = normalize_heading(self.heading + delta);
    }

    pub fn set_thrust(&mut self, on: bool) {
        self.thrusting = on;
    }

    /// One tick of Euler integration: accelerate along the heading while
    /// thrusting, otherwise decay velocity by the friction factor.
    pub fn advance(&mut self, config: &Config) {
        if self.thrusting {
            self.vel += heading_to_vec(self.heading) * config.ship_thrust;
        } else {
            self.vel *= config.ship_friction;
        }
        self.pos = wrap_position(self.pos + self.vel, config.screen_width, config.screen_height);
    }

    /// Spawn a projectile at the nose, carrying the current heading.
    /// The caller owns the projectile; the ship is untouched.
    pub fn fire(&self, config: &Config) -> Projectile {
        let nose = self.pos + heading_to_vec(self.heading) * self.radius;
        Projectile::new(nose, self.heading, config)
    }

    /// Back to the screen center with zero velocity. Heading and thrust
    /// are deliberately kept (the player resumes facing the way they died).
    pub fn respawn(&mut self, config: &Config) {
        self.pos = config.screen_center();
        self.vel = Vec2::ZERO;
    }
}

/// Decorative attract-screen rock: drifts left, re-enters on the right.
/// Not part of gameplay; cleared when a run starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackdropRock {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
}

impl BackdropRock {
    pub fn new(rng: &mut Pcg32, config: &Config) -> Self {
        Self {
            pos: Vec2::new(
                rng.random_range(0.0..config.screen_width),
                rng.random_range(0.0..config.screen_height),
            ),
            size: rng.random_range(30.0..=60.0),
            speed: rng.random_range(1.0..5.0),
        }
    }

    pub fn advance(&mut self, config: &Config) {
        self.pos.x -= self.speed;
        if self.pos.x < -self.size {
            self.pos.x = config.screen_width + self.size;
        }
    }
}

/// Complete session state
///
/// An explicit object rather than globals: hosts can run several sessions
/// side by side, and tests inject the seed.
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: Config,
    /// Session seed, kept for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub mode: Mode,
    pub lives: u32,
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Exists only while playing; `None` on the start screen and from the
    /// moment the game-over sequence begins
    pub ship: Option<Ship>,
    pub asteroids: Vec<Asteroid>,
    pub projectiles: Vec<Projectile>,
    pub backdrop: Vec<BackdropRock>,
}

impl GameState {
    /// Create a session on the start screen with the given seed.
    pub fn new(config: Config, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let backdrop = (0..config.backdrop_rocks)
            .map(|_| BackdropRock::new(&mut rng, &config))
            .collect();
        Self {
            lives: config.lives,
            config,
            seed,
            rng,
            mode: Mode::StartScreen,
            score: 0,
            time_ticks: 0,
            ship: None,
            asteroids: Vec::new(),
            projectiles: Vec::new(),
            backdrop,
        }
    }

    /// True from run start until the final game-over screen.
    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self.mode, Mode::Playing | Mode::GameOverPending)
    }

    /// Top the asteroid count up to the configured minimum, never past the
    /// maximum. Spawn positions are anywhere on screen with velocity
    /// components uniform in ±asteroid_speed.
    pub(crate) fn top_up_asteroids(&mut self) {
        let live = self.asteroids.len();
        let deficit = self.config.min_asteroids.saturating_sub(live);
        let room = self.config.max_asteroids.saturating_sub(live);
        for _ in 0..deficit.min(room) {
            let pos = Vec2::new(
                self.rng.random_range(0.0..self.config.screen_width),
                self.rng.random_range(0.0..self.config.screen_height),
            );
            let speed = self.config.asteroid_speed;
            let vel = Vec2::new(
                self.rng.random_range(-speed..=speed),
                self.rng.random_range(-speed..=speed),
            );
            let asteroid = Asteroid::new(pos, vel, &mut self.rng, &self.config);
            self.asteroids.push(asteroid);
        }
    }
}
