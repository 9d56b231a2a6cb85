//! Eye Break - an hourly reminder that walks through timed eye exercises
//!
//! This is the main entry point for the eye-break application.

use std::{io::BufReader, sync::Arc, thread};

use tokio::sync::mpsc;
use tracing::{error, info};

use eye_break::{
    config::{Config, HostKind, Theme},
    exercise::{catalog, Bounds},
    host::{read_commands, JsonHost, TerminalHost},
    run_event_loop,
    shutdown_signal,
    AppState,
    ReminderScheduler,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so they never land inside the exercise window
    tracing_subscriber::fmt()
        .with_env_filter(format!("eye_break={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting eye-break v1.0.0");
    info!(
        "Configuration: interval={}min, exercise={}s, host={:?}, canvas={}x{}",
        config.interval_minutes,
        config.exercise_duration(),
        config.host,
        config.width,
        config.height
    );

    let theme = Arc::new(Theme::default());
    let app = AppState::new(
        catalog(config.exercise_duration()),
        Arc::clone(&theme),
        Bounds::new(config.width, config.height),
        !config.hidden,
    );
    let scheduler = ReminderScheduler::new(config.reminder_interval());

    // Stdin blocks, so it gets a plain thread instead of a runtime task
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    thread::Builder::new()
        .name("command-input".to_string())
        .spawn(move || {
            if let Err(e) = read_commands(BufReader::new(std::io::stdin()), command_tx) {
                error!("Failed to read commands: {}", e);
            }
        })?;

    let shutdown = shutdown_signal()?;

    match config.host {
        HostKind::Terminal => {
            let mut host = TerminalHost::stdout(theme);
            run_event_loop(app, scheduler, &mut host, command_rx, shutdown).await?;
        }
        HostKind::Json => {
            let mut host = JsonHost::new(std::io::stdout());
            run_event_loop(app, scheduler, &mut host, command_rx, shutdown).await?;
        }
    }

    info!("Eye break shutdown complete");
    Ok(())
}
