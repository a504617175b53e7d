//! Headless demo: runs a scripted session against the simulation core and
//! reports the outcome. Useful as a smoke test and as a minimal example of
//! driving the tick loop from a host.

use astrodrift::config::Config;
use astrodrift::sim::{GameState, Mode, Rotate, TickInput, tick};

const MAX_TICKS: u64 = 20_000;

fn main() {
    env_logger::init();

    let config = Config::default();
    let mut state = GameState::new(config, 0xA57E_0105);

    // a few attract-screen frames, then start
    for _ in 0..30 {
        tick(&mut state, &TickInput::default());
    }
    tick(&mut state, &TickInput { start: true, ..TickInput::default() });

    // sweep-and-shoot autopilot: turn steadily, fire in bursts, pulse the
    // thruster to wander the field
    let mut ticks = 0u64;
    let mut last_score = 0u32;
    while state.is_running() && ticks < MAX_TICKS {
        let input = TickInput {
            rotate: Rotate::Right,
            thrust: ticks % 240 < 40,
            fire: ticks % 15 == 0,
            ..TickInput::default()
        };
        tick(&mut state, &input);
        if state.score != last_score {
            log::info!("score {} at tick {}", state.score, ticks);
            last_score = state.score;
        }
        ticks += 1;
    }

    match state.mode {
        Mode::GameOverFinal => println!("game over after {ticks} ticks: final score {}", state.score),
        _ => println!(
            "stopped after {ticks} ticks: score {}, lives {}",
            state.score, state.lives
        ),
    }
}
