//! Drives a [`Site`] against the wall clock.
//!
//! Loop time starts at zero when [`run`] is entered. Due timers fire as the
//! clock passes their deadlines; commands arrive on a channel.

use crate::shutdown::ShutdownHandle;
use crate::ui::app::Site;
use crate::ui::events::HostCommand;
use std::io::{self, Write};
use tokio::sync::mpsc;
use tokio::time::Instant;

pub async fn run<W: Write>(
    site: &mut Site,
    mut commands: mpsc::Receiver<HostCommand>,
    shutdown: ShutdownHandle,
    echo: bool,
    out: &mut W,
) -> io::Result<()> {
    let start = Instant::now();

    loop {
        site.advance_to(start.elapsed());
        let wake = site.next_deadline().map(|deadline| start + deadline);

        tokio::select! {
            _ = shutdown.wait() => break,
            _ = sleep_until(wake) => {}
            command = commands.recv() => {
                let Some(command) = command else {
                    tracing::debug!("command channel closed");
                    break;
                };
                site.advance_to(start.elapsed());
                match command {
                    HostCommand::Event(event) => {
                        tracing::debug!(?event, "host event");
                        let applied = site.handle(event);
                        if echo {
                            write_snapshot(site, out)?;
                        } else if !applied {
                            tracing::debug!("event had no effect");
                        }
                    }
                    HostCommand::Wait(duration) => {
                        if !wait(site, start, start.elapsed() + duration, &shutdown).await {
                            break;
                        }
                        if echo {
                            write_snapshot(site, out)?;
                        }
                    }
                    HostCommand::Show => write_snapshot(site, out)?,
                    HostCommand::Quit => break,
                }
            }
        }
    }

    site.shutdown();
    out.flush()
}

/// Keep firing timers until loop time `until`. `false` if shut down first.
async fn wait(
    site: &mut Site,
    start: Instant,
    until: std::time::Duration,
    shutdown: &ShutdownHandle,
) -> bool {
    loop {
        let elapsed = start.elapsed();
        site.advance_to(elapsed);
        if elapsed >= until {
            return true;
        }
        let wake = site
            .next_deadline()
            .map_or(until, |deadline| deadline.min(until));
        tokio::select! {
            _ = shutdown.wait() => return false,
            _ = tokio::time::sleep_until(start + wake) => {}
        }
    }
}

async fn sleep_until(at: Option<Instant>) {
    match at {
        Some(at) => tokio::time::sleep_until(at).await,
        None => std::future::pending().await,
    }
}

fn write_snapshot<W: Write>(site: &Site, out: &mut W) -> io::Result<()> {
    serde_json::to_writer(&mut *out, &site.snapshot())?;
    writeln!(out)?;
    out.flush()
}
