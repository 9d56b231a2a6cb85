//! JSON lines host for external renderers

use std::io::Write;

use serde::Serialize;

use super::{HostWindow, View};

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum HostEvent<'a> {
    Show,
    Hide,
    Present { view: &'a View },
}

/// Writes every window event as one JSON object per line
pub struct JsonHost<W: Write> {
    out: W,
}

impl<W: Write> JsonHost<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, event: &HostEvent<'_>) -> anyhow::Result<()> {
        serde_json::to_writer(&mut self.out, event)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> HostWindow for JsonHost<W> {
    fn show(&mut self) -> anyhow::Result<()> {
        self.emit(&HostEvent::Show)
    }

    fn hide(&mut self) -> anyhow::Result<()> {
        self.emit(&HostEvent::Hide)
    }

    fn present(&mut self, view: &View) -> anyhow::Result<()> {
        self.emit(&HostEvent::Present { view })
    }
}
