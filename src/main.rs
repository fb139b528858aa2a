use clap::Parser;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use motion_keys::camera::{CameraCapture, CameraSettings, Resolution};
use motion_keys::cli::{self, Args, Command};
use motion_keys::config::Config;
use motion_keys::display::{DisplayLoop, DisplaySettings};
use motion_keys::error::AppError;
use motion_keys::keys::{Dispatcher, RdevInjector};
use motion_keys::motion::{MotionLoop, MotionSettings};
use motion_keys::shared::SharedState;

fn main() {
    let args = Args::parse();

    let loaded = Config::load(args.config.as_deref());
    let mut config = loaded.as_ref().cloned().unwrap_or_default();
    args.apply_to(&mut config);

    let headless = args.command.is_some() || !config.display.preview;
    init_logging(headless);
    if let Err(e) = &loaded {
        log::warn!("{}; using default settings", e);
    }

    let result = match args.command {
        Some(Command::ListCameras) => cli::list_cameras(),
        Some(Command::Keymap { action }) => {
            cli::handle_keymap_action(action, &config);
            Ok(())
        }
        Some(Command::Config { action }) => {
            cli::handle_config_action(action, &config, args.config.as_deref())
        }
        None => run(&config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(headless: bool) {
    let filter = env_logger::Env::default().default_filter_or(default_log_filter(headless));
    env_logger::Builder::from_env(filter).init();
}

/// Logs go to stderr, which the preview shares with its raw-mode screen.
///
/// Per-cycle warnings (a failing key injection) would tear the picture, so
/// the preview only lets errors through unless `RUST_LOG` says otherwise.
fn default_log_filter(headless: bool) -> &'static str {
    if headless {
        "info"
    } else {
        "error"
    }
}

fn run(config: &Config) -> Result<(), AppError> {
    let keymap = cli::load_keymap(&config.keymap_path());

    let mut camera = CameraCapture::open(CameraSettings {
        device_index: config.camera.device,
        resolution: Resolution {
            width: config.camera.width,
            height: config.camera.height,
        },
        fps: config.camera.fps,
        mirror: config.camera.mirror,
    })?;
    camera.start()?;

    let shared = Arc::new(SharedState::new());
    {
        let shared = Arc::clone(&shared);
        ctrlc::set_handler(move || shared.request_stop())?;
    }

    let settings = MotionSettings {
        threshold: config.motion.threshold,
        working_width: config.motion.working_width,
        working_height: config.motion.working_height,
        idle: Duration::from_millis(config.motion.idle_ms),
    };
    let dispatcher = Dispatcher::new(RdevInjector, Duration::from_millis(config.keys.hold_ms));
    let motion = MotionLoop::new(camera.feed(), keymap, dispatcher, Arc::clone(&shared), settings);

    let motion_thread = thread::Builder::new()
        .name("motion-loop".to_string())
        .spawn(move || motion.run())?;

    let display_result = if config.display.preview {
        let display = DisplayLoop::new(
            camera.feed(),
            Arc::clone(&shared),
            DisplaySettings {
                charset: config.display.charset(),
                invert: config.display.invert,
                ..DisplaySettings::default()
            },
        );
        display.run().map_err(AppError::from)
    } else {
        log::info!("running headless, press Ctrl+C to stop");
        Ok(())
    };
    if display_result.is_err() {
        shared.request_stop();
    }

    let stats = motion_thread.join().map_err(|_| AppError::MotionThread)?;
    camera.stop();

    log::info!(
        "stopped after {} presses ({} compared, {} skipped, {} failed)",
        stats.dispatched,
        stats.compared,
        stats.skipped,
        stats.failed
    );
    display_result
}
