//! User input commands
//!
//! Hosts and the tray translate clicks and keys into [`Command`]s and send
//! them down a channel, so the event loop can be driven without a real UI.

use std::{io::BufRead, str::FromStr};

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::exercise::Bounds;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// The "Start / Next Exercise / Finish" button
    Acknowledge,
    /// Reset the sequence and bring the window up
    Show,
    /// Put the window away; closing the window does the same
    Hide,
    /// The drawing area changed size
    Resize(Bounds),
    Exit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let command = match words.next() {
            None | Some("n") | Some("next") => Command::Acknowledge,
            Some("s") | Some("show") => Command::Show,
            Some("h") | Some("hide") | Some("close") => Command::Hide,
            Some("q") | Some("quit") | Some("exit") => Command::Exit,
            Some("r") | Some("resize") => {
                let mut dimension = || {
                    words
                        .next()
                        .and_then(|w| w.parse::<u32>().ok())
                        .filter(|&v| v > 0)
                        .ok_or_else(|| "usage: resize <width> <height>".to_string())
                };
                let width = dimension()?;
                let height = dimension()?;
                Command::Resize(Bounds::new(width, height))
            }
            Some(other) => return Err(format!("unknown command: {}", other)),
        };
        Ok(command)
    }
}

/// Forward one command per input line until the input or the receiver closes.
///
/// Blocks on `input`, so it belongs on its own thread.
pub fn read_commands<R: BufRead>(input: R, tx: mpsc::UnboundedSender<Command>) -> anyhow::Result<()> {
    info!("Listening for commands: <enter>/n next, s show, h hide, r W H resize, q quit");

    for line in input.lines() {
        let line = line?;
        match line.trim().parse::<Command>() {
            Ok(command) => {
                debug!("Input command: {:?}", command);
                if tx.send(command).is_err() {
                    break;
                }
            }
            Err(e) => warn!("{}", e),
        }
    }

    debug!("Command input closed");
    Ok(())
}
