//! Breakout entry point
//!
//! Runs a headless session: the simulation and scene drawing run every frame
//! against a recording surface, driven by a seeded key masher and paced by
//! the wall clock. The last frame is tessellated for a size check. A windowed
//! frontend plugs its own `RenderSurface` and `InputSource` into `Game`.

use breakout::consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use breakout::platform::{MashInput, SystemClock};
use breakout::renderer::{DrawList, shapes};
use breakout::sim::{GameEvent, RoundPhase};
use breakout::{Game, Settings, format_round_time};

fn main() {
    env_logger::init();
    log::info!("Breakout (headless) starting...");

    let settings = Settings::load_or_default();
    log::info!(
        "Running {} frames at {} fps, input seed {:#x}",
        settings
            .frame_limit
            .map_or_else(|| "unlimited".to_string(), |n| n.to_string()),
        settings.target_fps,
        settings.input_seed
    );

    let mut game = Game::new(
        &settings,
        DrawList::new(),
        MashInput::new(settings.input_seed),
        SystemClock::new(),
    );

    let history = game.run(settings.frame_limit);

    let vertices: Vec<_> = shapes::tessellate(game.surface().commands())
        .into_iter()
        .map(|v| v.to_ndc(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT))
        .collect();
    let bytes: &[u8] = bytemuck::cast_slice(&vertices);
    log::debug!(
        "Last frame tessellates to {} vertices ({} bytes)",
        vertices.len(),
        bytes.len()
    );

    let count = |pred: fn(&GameEvent) -> bool| history.iter().filter(|e| pred(e)).count();
    let destroyed = count(|e| matches!(e, GameEvent::BlockDestroyed { .. }));
    let lost = count(|e| matches!(e, GameEvent::BallLost { .. }));
    let resets = count(|e| matches!(e, GameEvent::Reset));

    let state = &game.state;
    let outcome = match state.phase() {
        RoundPhase::Lost => "lost",
        RoundPhase::Won => "won",
        RoundPhase::Idle | RoundPhase::Active => "in progress",
    };

    println!(
        "{} frames: round {} at {}, {} lives, {} blocks left \
         ({} destroyed, {} balls lost, {} resets)",
        game.frames,
        outcome,
        format_round_time(state.round_time),
        state.lives,
        state.blocks.len(),
        destroyed,
        lost,
        resets
    );
}
