use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, warn};
use std::rc::Rc;
use std::time::Duration;

use tileplay::cli::Args;
use tileplay::config::{self, PlayerSettings};
use tileplay::core::event_bus::downcast_event;
use tileplay::core::player_events::FrameLoadFailedEvent;
use tileplay::dataset::Dataset;
use tileplay::series::{Frame, FrameList, TimeDepthMatrix};
use tileplay::MoviePlayer;

fn main() -> Result<()> {
    let args = Args::parse();

    let path_config = config::PathConfig::from_env_and_cli(args.config_dir.clone());
    if let Err(e) = config::ensure_dirs(&path_config) {
        eprintln!("Warning: Failed to create application directories: {:#}", e);
    }

    init_logging(&args, &path_config)?;
    info!("tileplay {} starting", env!("CARGO_PKG_VERSION"));
    debug!("Command-line args: {:?}", args);

    let settings_path = config::config_file(config::SETTINGS_FILE, &path_config);
    let mut settings = PlayerSettings::load(&settings_path)?;
    if let Some(delay_ms) = args.delay_ms {
        settings.frame_delay_ms = delay_ms;
    }
    if args.save_settings {
        settings.save(&settings_path)?;
    }

    let dataset = Dataset::load(&args.dataset)?;
    let frames = dataset.frames()?;
    print_frames(&frames);

    if args.play {
        play(Rc::new(frames), &settings, args.start_frame)?;
    }
    Ok(())
}

fn init_logging(args: &Args, path_config: &config::PathConfig) -> Result<()> {
    // 0 (default) = warn, 1 (-v) = info, 2 (-vv) = debug, 3+ (-vvv) = trace
    let log_level = match args.verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    if let Some(log_path_opt) = &args.log_file {
        let log_path = log_path_opt
            .clone()
            .unwrap_or_else(|| config::data_file("tileplay.log", path_config));
        let file = std::fs::File::create(&log_path)
            .with_context(|| format!("Failed to create log file: {}", log_path.display()))?;

        env_logger::Builder::new()
            .filter_level(log_level)
            .format_timestamp_millis()
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();
        info!("Logging to file: {} (level: {:?})", log_path.display(), log_level);
    } else {
        // Respects RUST_LOG if set
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level.as_str().to_lowercase()),
        )
        .format_timestamp_millis()
        .init();
    }
    Ok(())
}

fn print_frames(frames: &FrameList) {
    println!(
        "{} frame(s), {}x{} tile grid",
        frames.len(),
        frames.tile_rows(),
        frames.tile_cols()
    );
    for index in 0..frames.len() {
        if let (Some(label), Some(entry)) = (frames.progress_label(index), frames.get(index)) {
            println!("\n[{}] {}", index, label);
            print_grid(&entry.frame);
        }
    }

    if let Some(matrix) = TimeDepthMatrix::from_frames(frames) {
        println!(
            "\nTime x depth view: {} timepoint(s) x {} depth level(s)",
            matrix.timepoint_count(),
            matrix.depth_count()
        );
    }
}

/// Occupancy grid: `#` = image, `.` = empty position
fn print_grid(frame: &Frame) {
    let mut line = String::new();
    for (_, col, tile) in frame.tiles() {
        line.push(if tile.is_some() { '#' } else { '.' });
        if col == frame.cols() {
            println!("  {}", line);
            line.clear();
        }
    }
}

fn play(frames: Rc<FrameList>, settings: &PlayerSettings, start_frame: Option<usize>) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to start runtime")?;
    let local = tokio::task::LocalSet::new();

    local.block_on(&runtime, async move {
        let shown = Rc::clone(&frames);
        let player = MoviePlayer::with_settings(
            frames.len(),
            move |index: usize| {
                let label = shown.progress_label(index);
                async move {
                    let label = label.with_context(|| format!("no frame {}", index))?;
                    println!("> {}", label);
                    anyhow::Ok(())
                }
            },
            settings,
        );

        if let Some(frame) = start_frame {
            player.seek(frame)?;
        }
        player.play();

        // Autoplay stops by itself after the last frame
        let poll = settings.frame_delay().max(Duration::from_millis(10));
        while player.is_playing() {
            tokio::time::sleep(poll).await;
        }
        // let the rewind load finish
        tokio::time::sleep(poll).await;

        let failures = player
            .events()
            .poll()
            .iter()
            .filter(|e| downcast_event::<FrameLoadFailedEvent>(e).is_some())
            .count();
        if failures > 0 {
            warn!("{} frame(s) failed to load", failures);
        }
        info!("Playback finished at frame {}", player.frame());
        anyhow::Ok(())
    })
}
