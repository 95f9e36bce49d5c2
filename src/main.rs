//! Leaf Blower headless driver
//!
//! Plays one round with the demo autopilot at a fixed frame rate and prints
//! the final snapshot as JSON.
//!
//! Usage: `leaf-blower [seed] [config.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use leaf_blower::consts::FRAME_DT;
    use leaf_blower::sim::{GameEvent, RoundState, Simulation, autopilot_input, tick};
    use leaf_blower::RoundConfig;

    env_logger::init();
    log::info!("Leaf Blower (headless) starting...");

    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(arg) => arg.parse::<u64>()?,
        None => 42,
    };
    let config = match args.next() {
        Some(path) => {
            let json = std::fs::read_to_string(&path)?;
            log::info!("Loaded config from {}", path);
            RoundConfig::from_json(&json)?
        }
        None => RoundConfig::default(),
    };

    let mut sim = Simulation::new(config, seed)?;
    let frames_per_second = (1.0 / FRAME_DT).round() as u64;
    // Enough frames to run the clock out, plus slack
    let max_frames = ((sim.clock.total() / FRAME_DT).ceil() as u64) + frames_per_second;

    for frame in 0..max_frames {
        let input = autopilot_input(&sim);
        tick(&mut sim, &input, FRAME_DT);

        for event in sim.events() {
            if let GameEvent::FloorCleanChanged { clean } = event {
                log::info!("Floor is now {}", if *clean { "clean" } else { "dirty" });
            }
        }

        if frame % frames_per_second == 0 {
            let snap = sim.snapshot();
            log::info!(
                "Time {} ({:.0}%) | tick {} | leaves on floor: {} | power: {:.0}% | residual: {:.0}%",
                snap.clock_label,
                snap.time_fraction * 100.0,
                snap.ticks,
                snap.on_floor,
                snap.power * 100.0,
                snap.residual * 100.0
            );
        }

        if sim.phase != RoundState::Running {
            break;
        }
    }

    match sim.phase {
        RoundState::Won => log::info!("Victory! Floor cleaned with {} to spare", sim.clock.label()),
        RoundState::Lost => log::info!("Time's up: {} leaves left", sim.particles_on_floor()),
        RoundState::Running => log::warn!("Frame cap reached with the round still running"),
    }

    println!("{}", serde_json::to_string_pretty(&sim.snapshot())?);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No headless driver on wasm; embed the library instead
}
