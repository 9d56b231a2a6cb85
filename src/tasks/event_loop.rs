//! Single-threaded event loop
//!
//! Every state change happens here, one event at a time: reminder ticks,
//! exercise ticks, user commands and the shutdown signal.

use std::{future::Future, time::Duration};

use tokio::{
    sync::mpsc,
    time::{interval, MissedTickBehavior},
};
use tracing::{debug, info};

use super::ReminderScheduler;
use crate::{
    host::{Command, HostWindow},
    state::AppState,
};

/// Period of the exercise countdown
pub const EXERCISE_TICK: Duration = Duration::from_secs(1);

/// Drive `app` until an exit command or `shutdown` completes
pub async fn run_event_loop<H, F>(
    mut app: AppState,
    mut scheduler: ReminderScheduler,
    host: &mut H,
    mut commands: mpsc::UnboundedReceiver<Command>,
    shutdown: F,
) -> anyhow::Result<AppState>
where
    H: HostWindow,
    F: Future<Output = ()>,
{
    info!(
        "Reminding every {} minutes, first at {}",
        scheduler.period().as_secs() / 60,
        scheduler.next_fire_at().format("%H:%M:%S")
    );

    let mut reminders = scheduler.interval();
    let mut ticker = interval(EXERCISE_TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    tokio::pin!(shutdown);

    let mut shown = false;
    let mut input_open = true;
    sync_host(host, &mut app, &mut shown)?;

    loop {
        let ticking = app.is_ticking();

        tokio::select! {
            _ = &mut shutdown => {
                info!("Shutdown signal received");
                break;
            }
            _ = reminders.tick() => scheduler.fire(&mut app),
            _ = ticker.tick(), if ticking => {
                app.tick();
            }
            command = commands.recv(), if input_open => match command {
                Some(command) => {
                    if !app.apply(command) {
                        info!("Exit requested");
                        break;
                    }
                }
                None => {
                    debug!("Command channel closed, reminders continue");
                    input_open = false;
                    continue;
                }
            },
        }

        // A fresh countdown gets a full second before its first tick
        if !ticking && app.is_ticking() {
            ticker.reset();
        }
        sync_host(host, &mut app, &mut shown)?;
    }

    Ok(app)
}

/// Bring the host in line with the state: visibility first, then contents
fn sync_host<H: HostWindow>(host: &mut H, app: &mut AppState, shown: &mut bool) -> anyhow::Result<()> {
    let raise = app.take_raise_request();

    if app.is_visible() {
        if raise || !*shown {
            host.show()?;
        }
        host.present(&app.view())?;
    } else if *shown {
        host.hide()?;
    }

    *shown = app.is_visible();
    Ok(())
}
