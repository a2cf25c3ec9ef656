use std::error::Error as _;
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use common::*;
use config::ConfigType;
use gameloop::{FrameAction, GameLoop};
use simulation::{Role, Simulation};

use crate::text::TextRenderer;

mod text;

/// Shipped with the binary, used when no config file exists
const DEFAULT_CONFIG: &str = include_str!("../steering.ron");
const DEFAULT_CONFIG_PATH: &str = "steering.ron";

/// Headless ticks to run when --ticks is not given
const DEFAULT_TICKS: u64 = 500;

/// Current tick, shown as the log timestamp
static TICK: AtomicU64 = AtomicU64::new(0);

/// Steering behaviours demo
#[derive(argh::FromArgs)]
struct Args {
    /// config file to load and watch for changes, defaults to ./steering.ron
    #[argh(option)]
    config: Option<PathBuf>,

    /// demo phase 0-10, overriding the config
    #[argh(option)]
    phase: Option<u8>,

    /// number of ticks to run, unlimited if --realtime
    #[argh(option)]
    ticks: Option<u64>,

    /// run at wall-clock speed instead of as fast as possible
    #[argh(switch)]
    realtime: bool,

    /// random seed, overriding the config
    #[argh(option)]
    seed: Option<u64>,
}

fn log_tick(out: &mut dyn Write) -> std::io::Result<()> {
    write!(out, "T{:05}", TICK.load(Ordering::Relaxed))
}

fn do_main(args: Args) -> BoxedResult<()> {
    // load config
    let watched = args
        .config
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    if watched.is_file() {
        info!("loading config"; "path" => %watched.display());
        config::init(ConfigType::WatchedFile(&watched))?;
    } else {
        warn!("config file not found, using defaults"; "path" => %watched.display());
        config::init(ConfigType::String(DEFAULT_CONFIG))?;
    }

    let mut cfg = (*config::get()).clone();
    if let Some(phase) = args.phase {
        cfg.simulation.phase = phase;
    }
    if let Some(seed) = args.seed {
        cfg.simulation.random_seed = Some(seed);
    }
    if let Some(seed) = cfg.simulation.random_seed {
        common::random::reseed(seed);
    }

    let gameloop = GameLoop::new(cfg.simulation.ticks_per_second, cfg.simulation.max_frameskip);
    let mut renderer = TextRenderer::new(gameloop.dt());
    let mut sim = Simulation::new(&cfg)?;

    // re-apply watched config once per simulated second
    let reload_interval = cfg.simulation.ticks_per_second as u64;

    let phase_override = args.phase;

    let tick = |sim: &mut Simulation<TextRenderer>, renderer: &mut TextRenderer| -> BoxedResult<()> {
        sim.tick(gameloop.dt(), renderer)?;
        TICK.store(gameloop.ticks(), Ordering::Relaxed);

        if gameloop.ticks() % reload_interval == 0 {
            let mut reloaded = (*config::get()).clone();
            if let Some(phase) = phase_override {
                reloaded.simulation.phase = phase;
            }
            sim.update_config(&reloaded, renderer);

            for role in [Role::Hunter, Role::Wolf] {
                let state = sim.agent(role)?.state();
                info!("agent";
                    "agent" => role,
                    "position" => ?state.position,
                    "speed" => state.velocity.magnitude()
                );
            }
        }

        Ok(())
    };

    if args.realtime {
        info!("running in realtime"; "phase" => %sim.phase(), "ticks" => ?args.ticks);
        'outer: loop {
            let frame = gameloop.start_frame();
            for action in frame.actions() {
                match action {
                    FrameAction::Tick => {
                        tick(&mut sim, &mut renderer)?;
                        if args.ticks.map(|n| gameloop.ticks() >= n).unwrap_or(false) {
                            break 'outer;
                        }
                    }
                    FrameAction::Render { interpolation } => {
                        sim.render(&mut renderer, interpolation)
                    }
                }
            }

            std::thread::sleep(Duration::from_millis(1));
        }
    } else {
        let ticks = args.ticks.unwrap_or(DEFAULT_TICKS);
        info!("running headless"; "phase" => %sim.phase(), "ticks" => ticks);

        while gameloop.ticks() < ticks {
            match gameloop.force_tick() {
                FrameAction::Tick => tick(&mut sim, &mut renderer)?,
                FrameAction::Render { interpolation } => sim.render(&mut renderer, interpolation),
            }
        }
        sim.render(&mut renderer, 0.0);
    }

    info!("finished"; "phase" => %sim.phase(), "ticks" => sim.ticks());
    Ok(())
}

fn main() {
    let args = argh::from_env::<Args>();

    // headless runs exit straight after the last tick, so log on this thread
    let realtime = args.realtime;
    let logger = match logging::LoggerBuilder::with_env()
        .map(|b| if realtime { b } else { b.synchronous() })
        .and_then(|b| b.init(log_tick))
    {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("failed to initialize logging: {}", e);
            std::process::exit(1);
        }
    };
    info!("initialized logging"; "level" => ?logger.level());

    let exit = match do_main(args) {
        Err(e) => {
            error!("error: {}", e);
            debug!("error details"; "error" => ?e);

            let mut src = e.source();
            while let Some(source) = src {
                error!(" caused by: {}", source);
                src = source.source();
            }

            1
        }
        Ok(()) => 0,
    };

    info!("exiting cleanly"; "exit_code" => exit);
    std::process::exit(exit);
}
