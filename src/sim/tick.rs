//! Fixed timestep simulation tick
//!
//! The host calls `tick` once per fixed interval (the canonical cadence is
//! ~16 ms) with the input collected since the previous call. All mutation
//! happens here, sequentially and deterministically for a given seed and
//! input sequence.

use serde::{Deserialize, Serialize};

use super::collision::point_hits_circle;
use super::state::{GameState, Mode, Ship};

/// Rotation input held during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Rotate {
    Left,
    Right,
    #[default]
    None,
}

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub rotate: Rotate,
    pub thrust: bool,
    /// Fire one projectile this tick
    pub fire: bool,
    /// Leave the start screen and begin a run
    pub start: bool,
}

/// Advance the session by one fixed timestep.
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.mode {
        Mode::StartScreen => tick_start_screen(state, input),
        Mode::Playing => tick_playing(state, input),
        Mode::GameOverPending => tick_game_over_drain(state),
        Mode::GameOverFinal => {}
    }
}

fn tick_start_screen(state: &mut GameState, input: &TickInput) {
    for rock in &mut state.backdrop {
        rock.advance(&state.config);
    }
    if input.start {
        begin_run(state);
    }
}

/// StartScreen -> Playing: fresh lives/score, ship at center, initial field.
fn begin_run(state: &mut GameState) {
    state.backdrop.clear();
    state.lives = state.config.lives;
    state.score = 0;
    state.ship = Some(Ship::new(state.config.screen_center(), &state.config));
    state.top_up_asteroids();
    state.mode = Mode::Playing;
    log::info!("run started (seed {})", state.seed);
}

fn tick_playing(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    // 1. Ship input, then integration
    if let Some(ship) = &mut state.ship {
        match input.rotate {
            Rotate::Left => ship.rotate(-state.config.ship_rotation_speed),
            Rotate::Right => ship.rotate(state.config.ship_rotation_speed),
            Rotate::None => {}
        }
        ship.set_thrust(input.thrust);
        if input.fire {
            let projectile = ship.fire(&state.config);
            state.projectiles.push(projectile);
        }
        ship.advance(&state.config);
    }

    // 2. Projectiles
    for projectile in &mut state.projectiles {
        projectile.advance(&state.config);
    }
    state.projectiles.retain(|p| !p.expired);

    // 3. Asteroids
    for asteroid in &mut state.asteroids {
        asteroid.advance(&state.config);
    }
    state.asteroids.retain(|a| !a.is_destroyed());

    // 4. Collisions (may flip mode to GameOverPending)
    resolve_collisions(state);

    // 5. Cleanup
    state.projectiles.retain(|p| !p.expired);
    state.asteroids.retain(|a| !a.is_destroyed());

    // 6. Spawner, suspended once the game-over sequence has begun
    if state.mode == Mode::Playing {
        state.top_up_asteroids();
    }
}

/// Brute-force collision passes: every live projectile against every
/// drifting asteroid, then the ship against every drifting asteroid.
fn resolve_collisions(state: &mut GameState) {
    for projectile in &mut state.projectiles {
        if projectile.expired {
            continue;
        }
        for asteroid in &mut state.asteroids {
            if !asteroid.is_drifting() {
                continue;
            }
            if point_hits_circle(projectile.pos, asteroid.pos, asteroid.radius) {
                log::debug!("projectile hit asteroid at {}", asteroid.pos);
                projectile.expired = true;
                asteroid.start_explosion(false);
                state.score += 1;
                // one kill per projectile per tick
                break;
            }
        }
    }

    let Some(ship) = &mut state.ship else {
        return;
    };
    let mut out_of_lives = false;
    for asteroid in &mut state.asteroids {
        if !asteroid.is_drifting() {
            continue;
        }
        if point_hits_circle(ship.pos, asteroid.pos, asteroid.radius) {
            log::debug!("ship collided with asteroid at {}", asteroid.pos);
            asteroid.start_explosion(true);
            state.lives = state.lives.saturating_sub(1);
            if state.lives == 0 {
                // stop the pass; the rest of the field is cleared below
                out_of_lives = true;
                break;
            }
            ship.respawn(&state.config);
        }
    }
    if out_of_lives {
        enter_game_over(state);
    }
}

/// First phase of the game-over sequence: drop the ship and everything
/// that is not mid-explosion, then let the drain ticks run the killing
/// asteroid's animation to completion before the final screen.
fn enter_game_over(state: &mut GameState) {
    log::info!("out of lives at score {}, draining explosions", state.score);
    state.mode = Mode::GameOverPending;
    state.ship = None;
    state.asteroids.retain(|a| a.is_exploding());
}

fn tick_game_over_drain(state: &mut GameState) {
    state.time_ticks += 1;

    for projectile in &mut state.projectiles {
        projectile.advance(&state.config);
    }
    state.projectiles.retain(|p| !p.expired);

    for asteroid in &mut state.asteroids {
        asteroid.advance(&state.config);
    }
    state.asteroids.retain(|a| !a.is_destroyed());

    if !state.asteroids.iter().any(|a| a.is_exploding()) {
        state.asteroids.clear();
        state.projectiles.clear();
        state.mode = Mode::GameOverFinal;
        log::info!("game over, final score {}", state.score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::sim::state::{Asteroid, AsteroidPhase, Projectile};
    use glam::Vec2;

    fn playing_state() -> GameState {
        let mut state = GameState::new(Config::default(), 42);
        tick(&mut state, &TickInput { start: true, ..TickInput::default() });
        state
    }

    /// Playing state with the spawner disabled, for tests that place
    /// every asteroid by hand.
    fn quiet_state() -> GameState {
        let config = Config {
            min_asteroids: 0,
            ..Config::default()
        };
        let mut state = GameState::new(config, 42);
        tick(&mut state, &TickInput { start: true, ..TickInput::default() });
        assert!(state.asteroids.is_empty());
        state
    }

    /// An asteroid placed by hand, out of the spawner's control.
    fn asteroid_at(pos: Vec2, radius: f32) -> Asteroid {
        Asteroid {
            pos,
            vel: Vec2::ZERO,
            radius,
            angle: 0.0,
            spin: 0.0,
            phase: AsteroidPhase::Drifting,
        }
    }

    #[test]
    fn start_input_begins_a_run() {
        let mut state = GameState::new(Config::default(), 1);
        assert_eq!(state.mode, Mode::StartScreen);
        assert!(!state.backdrop.is_empty());

        tick(&mut state, &TickInput::default());
        assert_eq!(state.mode, Mode::StartScreen, "no start input, no run");

        tick(&mut state, &TickInput { start: true, ..TickInput::default() });
        assert_eq!(state.mode, Mode::Playing);
        assert!(state.backdrop.is_empty());
        assert!(state.ship.is_some());
        assert_eq!(state.asteroids.len(), state.config.min_asteroids);
        assert_eq!(state.lives, state.config.lives);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn projectile_kill_scores_once_and_expires_the_projectile() {
        let mut state = quiet_state();
        // far from the ship so only the projectile pass fires
        state.asteroids.push(asteroid_at(Vec2::new(100.0, 100.0), 30.0));
        state
            .projectiles
            .push(Projectile::new(Vec2::new(100.0, 100.0), 0.0, &state.config));

        tick(&mut state, &TickInput::default());

        assert_eq!(state.score, 1);
        assert!(state.projectiles.is_empty(), "hit projectile must be dropped");
        assert!(state.asteroids.iter().any(|a| a.is_exploding()));
    }

    #[test]
    fn projectile_kills_at_most_one_asteroid_per_tick() {
        let mut state = quiet_state();
        // two overlapping asteroids, one projectile inside both
        state.asteroids.push(asteroid_at(Vec2::new(100.0, 100.0), 30.0));
        state.asteroids.push(asteroid_at(Vec2::new(110.0, 100.0), 30.0));
        state
            .projectiles
            .push(Projectile::new(Vec2::new(100.0, 100.0), 0.0, &state.config));

        tick(&mut state, &TickInput::default());

        assert_eq!(state.score, 1);
        assert_eq!(state.asteroids.iter().filter(|a| a.is_exploding()).count(), 1);
    }

    #[test]
    fn score_never_decreases() {
        let mut state = playing_state();
        let mut last = state.score;
        for i in 0..600u32 {
            let input = TickInput {
                rotate: Rotate::Right,
                fire: i % 10 == 0,
                ..TickInput::default()
            };
            tick(&mut state, &input);
            assert!(state.score >= last);
            last = state.score;
        }
    }

    #[test]
    fn ship_hit_costs_a_life_and_respawns_at_center() {
        let mut state = quiet_state();
        // park the ship off-center so the respawn is observable
        state.ship.as_mut().unwrap().pos += Vec2::new(60.0, 0.0);
        let ship_pos = state.ship.as_ref().unwrap().pos;
        state.asteroids.push(asteroid_at(ship_pos, 30.0));

        let lives_before = state.lives;
        tick(&mut state, &TickInput::default());

        assert_eq!(state.lives, lives_before - 1);
        assert_eq!(state.mode, Mode::Playing);
        assert_eq!(state.ship.as_ref().unwrap().pos, state.config.screen_center());
        assert!(state.asteroids.iter().any(|a| a.is_exploding()));
    }

    #[test]
    fn exploding_asteroids_cannot_hit_the_ship() {
        let mut state = quiet_state();
        let ship_pos = state.ship.as_ref().unwrap().pos;
        let mut a = asteroid_at(ship_pos, 40.0);
        a.start_explosion(false);
        state.asteroids.push(a);

        let lives_before = state.lives;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.lives, lives_before);
    }

    #[test]
    fn last_life_triggers_the_game_over_drain() {
        let mut state = quiet_state();
        state.lives = 1;
        let ship_pos = state.ship.as_ref().unwrap().pos;
        state.asteroids.push(asteroid_at(ship_pos, 30.0));
        // a bystander rock that must be swept out immediately
        state.asteroids.push(asteroid_at(Vec2::new(50.0, 50.0), 25.0));

        tick(&mut state, &TickInput::default());

        assert_eq!(state.mode, Mode::GameOverPending);
        assert!(state.ship.is_none());
        assert_eq!(state.asteroids.len(), 1, "only the killer survives the sweep");
        assert!(state.asteroids[0].is_exploding());
        assert!(state.is_running());

        // the drain holds until the killer's animation completes,
        // and no new asteroids spawn meanwhile
        let explosion_ticks = state.config.explosion_ticks;
        for _ in 0..explosion_ticks - 1 {
            tick(&mut state, &TickInput::default());
            assert_eq!(state.mode, Mode::GameOverPending);
            assert_eq!(state.asteroids.len(), 1);
        }
        tick(&mut state, &TickInput::default());
        assert_eq!(state.mode, Mode::GameOverFinal);
        assert!(state.asteroids.is_empty());
        assert!(state.projectiles.is_empty());
        assert!(!state.is_running());

        // terminal: further ticks change nothing
        let score = state.score;
        tick(&mut state, &TickInput { start: true, fire: true, ..TickInput::default() });
        assert_eq!(state.mode, Mode::GameOverFinal);
        assert_eq!(state.score, score);
    }

    #[test]
    fn fire_input_spawns_one_projectile() {
        let mut state = quiet_state();
        let before = state.projectiles.len();
        tick(&mut state, &TickInput { fire: true, ..TickInput::default() });
        assert_eq!(state.projectiles.len(), before + 1);
    }

    #[test]
    fn rotation_input_turns_by_the_configured_rate() {
        let mut state = quiet_state();
        let heading = state.ship.as_ref().unwrap().heading;

        tick(&mut state, &TickInput { rotate: Rotate::Right, ..TickInput::default() });
        let turned = state.ship.as_ref().unwrap().heading;
        assert!((turned - (heading + state.config.ship_rotation_speed) % 360.0).abs() < 1e-4);

        tick(&mut state, &TickInput { rotate: Rotate::Left, ..TickInput::default() });
        assert!((state.ship.as_ref().unwrap().heading - heading).abs() < 1e-4);
    }

    #[test]
    fn spawner_keeps_the_field_topped_up() {
        let mut state = playing_state();
        state.asteroids.truncate(2);
        // enough lives that incidental hits cannot end the run mid-test
        state.lives = 99;
        tick(&mut state, &TickInput::default());
        assert!(state.asteroids.len() >= state.config.min_asteroids);
        assert!(state.asteroids.len() <= state.config.max_asteroids);
    }

    #[test]
    fn same_seed_and_inputs_replay_identically() {
        let run = |seed: u64| {
            let mut state = GameState::new(Config::default(), seed);
            tick(&mut state, &TickInput { start: true, ..TickInput::default() });
            for i in 0..500u32 {
                let input = TickInput {
                    rotate: if i % 3 == 0 { Rotate::Left } else { Rotate::None },
                    thrust: i % 7 < 3,
                    fire: i % 11 == 0,
                    ..TickInput::default()
                };
                tick(&mut state, &input);
            }
            state
        };

        let a = run(1234);
        let b = run(1234);
        assert_eq!(a.mode, b.mode);
        assert_eq!(a.score, b.score);
        assert_eq!(a.lives, b.lives);
        assert_eq!(a.asteroids.len(), b.asteroids.len());
        for (x, y) in a.asteroids.iter().zip(&b.asteroids) {
            assert_eq!(x.pos, y.pos);
            assert_eq!(x.phase, y.phase);
        }
    }
}
