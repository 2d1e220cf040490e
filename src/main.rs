//! cambind - camera input binding console
//!
//! Reads lines such as `MoveForward 1` from stdin and runs the matching
//! binding against the scene's current camera.

use std::io::{self, BufRead, Write};

use cambind::config::AppConfig;
use cambind::input::ConsoleMapper;
use cambind::systems::{ConsoleOutcome, ConsoleSystem};
use cambind_core::{RecordingCamera, Scene};

fn main() {
    // Load configuration before logging so the configured level applies
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    log::info!("Starting cambind");

    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    let table = config.binding_table().unwrap_or_else(|e| {
        log::warn!("{}. Using default bindings.", e);
        Default::default()
    });
    log::info!("Loaded {} bindings", table.len());

    let mut scene = Scene::new();
    scene.create_camera(
        &config.camera.name,
        config.camera.priority,
        RecordingCamera::new(config.camera.name.as_str()),
    );

    let mut system = ConsoleSystem::new(table, scene);
    if let Err(e) = run(&mut system, io::stdin().lock(), io::stdout().lock()) {
        log::error!("Console I/O error: {}", e);
        std::process::exit(1);
    }
}

/// Read, map and execute lines until input ends or `quit`
fn run<R: BufRead, W: Write>(
    system: &mut ConsoleSystem,
    input: R,
    mut output: W,
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        let action = match ConsoleMapper::map_line(&line) {
            Ok(Some(action)) => action,
            Ok(None) => continue,
            Err(e) => {
                writeln!(output, "error: {}", e)?;
                continue;
            }
        };

        match system.execute(action) {
            Ok(ConsoleOutcome::Lines(lines)) => {
                for l in lines {
                    writeln!(output, "{}", l)?;
                }
            }
            Ok(ConsoleOutcome::Exit) => break,
            Err(e) => writeln!(output, "error: {}", e)?,
        }
        output.flush()?;
    }

    log::info!("Console closed");
    Ok(())
}
