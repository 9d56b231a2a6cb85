//! Signal handling for graceful shutdown

use std::future::Future;

use futures::stream::StreamExt;
use signal_hook_tokio::Signals;
use tracing::info;

/// Register for SIGTERM, SIGINT and SIGHUP; the returned future completes on the first one
pub fn shutdown_signal() -> anyhow::Result<impl Future<Output = ()>> {
    let mut signals = Signals::new([
        signal_hook::consts::SIGTERM,
        signal_hook::consts::SIGINT,
        signal_hook::consts::SIGHUP,
    ])?;

    Ok(async move {
        if let Some(signal) = signals.next().await {
            info!("Received signal: {}", signal);
        }
    })
}
