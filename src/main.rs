//! VIP Cyclops entry point
//!
//! Parses the command line, loads settings, opens the window and runs the
//! game loop until the window is closed.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use clap::Parser;
use clap::error::ErrorKind;
use macroquad::window::{Conf, next_frame};

use vip_cyclops::consts::{DEFAULT_SETTINGS_FILE, WINDOW_TITLE};
use vip_cyclops::platform::{MacroquadInput, open_window};
use vip_cyclops::renderer::MacroquadRenderer;
use vip_cyclops::sim::GameState;
use vip_cyclops::{FrameDriver, GameError, LoopControl, Result, Settings};

#[derive(Parser, Debug)]
#[command(name = "vip-cyclops", version, about = "Collect coins, grow, avoid the blocks")]
struct Cli {
    /// TrueType font used for the score and the play-again button
    font_path: PathBuf,

    /// JSON settings file (defaults to ./vip_cyclops.json when present)
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Fixed RNG seed for a reproducible board
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{e}");
            return;
        }
        Err(e) => {
            // Usage goes to stdout, like the help text
            println!("{e}");
            std::process::exit(1);
        }
    };

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => fail(e),
    };
    let conf = match window_conf(&settings) {
        Ok(conf) => conf,
        Err(e) => fail(e),
    };

    log::info!("VIP Cyclops starting...");
    static LOOP_STARTED: AtomicBool = AtomicBool::new(false);
    let opened = open_window(
        move || {
            macroquad::Window::from_config(conf, async move {
                LOOP_STARTED.store(true, Ordering::SeqCst);
                // `run` has dropped everything it loaded by the time it returns
                if let Err(e) = run(cli.font_path, settings).await {
                    fail(e);
                }
            });
        },
        &LOOP_STARTED,
    );
    if let Err(e) = opened {
        fail(e);
    }
}

fn fail(e: GameError) -> ! {
    log::error!("{}", e);
    std::process::exit(1);
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    let default_file = Path::new(DEFAULT_SETTINGS_FILE);
    let mut settings = match &cli.settings {
        Some(path) => Settings::load(path)?,
        None if default_file.exists() => Settings::load(default_file)?,
        None => Settings::default(),
    };
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }
    settings.validate()?;
    Ok(settings)
}

fn window_conf(settings: &Settings) -> Result<Conf> {
    let fits = |n: i32| u16::try_from(n).is_ok();
    if !fits(settings.field_width) || !fits(settings.field_height) {
        return Err(GameError::Initialization {
            step: "window creation",
            reason: format!(
                "{}x{} is larger than any supported window",
                settings.field_width, settings.field_height
            ),
        });
    }
    Ok(Conf {
        window_title: WINDOW_TITLE.to_string(),
        window_width: settings.field_width,
        window_height: settings.field_height,
        window_resizable: false,
        high_dpi: false,
        ..Default::default()
    })
}

async fn run(font_path: PathBuf, settings: Settings) -> Result<()> {
    let mut renderer = MacroquadRenderer::load(&font_path, &settings).await?;

    let seed = settings.seed.unwrap_or_else(rand::random);
    let mut game = GameState::new(settings, seed)?;
    let mut input = MacroquadInput::new();
    let mut driver = FrameDriver::new(&game.settings);

    loop {
        let frame_start = Instant::now();
        let control = driver.step(&mut game, &mut input, &mut renderer);
        next_frame().await;
        if control == LoopControl::Quit {
            break;
        }
        driver.pacer().sleep_remaining(frame_start);
    }

    log::info!(
        "Final score {} after {} frames (seed {})",
        game.score,
        driver.frames(),
        game.seed
    );
    Ok(())
}
