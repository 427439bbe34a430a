use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use dashboard_core::{update, AppState, AppViewModel, Msg};
use dashboard_engine::EngineHandle;
use dashboard_logging::{dashboard_error, dashboard_info, dashboard_warn, set_poll_tick};

use super::effects::EffectRunner;
use super::input::{parse_command, Command, HELP};
use super::ui;
use crate::config::DashboardConfig;

const CLOCK_INTERVAL: Duration = Duration::from_millis(500);

/// Everything the main loop reacts to.
pub enum LoopEvent {
    Msg(Msg),
    /// Help text or a parse error for the last typed line.
    Hint(String),
    Quit,
}

pub fn run_app(config: DashboardConfig) -> anyhow::Result<()> {
    let settings = config
        .client_settings()
        .inspect_err(|err| dashboard_error!("Invalid backend address {}: {}", config.base_url, err))
        .context("invalid backend address")?;
    dashboard_info!("Dashboard polling {} every {:?}", settings.base_url, config.poll_interval());
    let engine = EngineHandle::new(settings)
        .inspect_err(|err| dashboard_error!("Failed to start request engine: {}", err))
        .context("failed to start request engine")?;

    let (loop_tx, loop_rx) = mpsc::channel::<LoopEvent>();
    let runner = EffectRunner::new(engine, loop_tx.clone());

    spawn_ticker(loop_tx.clone(), config.poll_interval(), || Msg::PollTick);
    spawn_ticker(loop_tx.clone(), CLOCK_INTERVAL, || Msg::Tick { now: Instant::now() });
    spawn_stdin_reader(loop_tx.clone());

    let mut state = AppState::new();
    let mut hint = Some(HELP.to_string());
    let mut poll_ticks = 0u64;

    // Polling is switched on unconditionally at startup.
    loop_tx
        .send(LoopEvent::Msg(Msg::PageLoaded))
        .context("message loop closed before start")?;

    while let Ok(event) = loop_rx.recv() {
        let msg = match event {
            LoopEvent::Msg(msg) => msg,
            LoopEvent::Hint(text) => {
                hint = Some(text);
                draw(&state.view(), hint.as_deref())?;
                continue;
            }
            LoopEvent::Quit => break,
        };

        if msg == Msg::PollTick {
            poll_ticks += 1;
            set_poll_tick(poll_ticks);
        }

        let (next, effects) = update(state, msg);
        state = next;
        runner.enqueue(effects);

        if state.consume_dirty() {
            draw(&state.view(), hint.as_deref())?;
        }
    }

    dashboard_info!("Dashboard shutting down after {} poll ticks", poll_ticks);
    Ok(())
}

fn draw(view: &AppViewModel, hint: Option<&str>) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write!(out, "{}", ui::constants::CLEAR_SCREEN)?;
    for line in ui::render::render(view) {
        writeln!(out, "{line}")?;
    }
    if let Some(hint) = hint {
        writeln!(out, "\n{hint}")?;
    }
    write!(out, "> ")?;
    out.flush()
}

/// Single fixed-interval timer per message kind; timers never stack.
fn spawn_ticker(
    loop_tx: mpsc::Sender<LoopEvent>,
    interval: Duration,
    make_msg: impl Fn() -> Msg + Send + 'static,
) {
    thread::spawn(move || loop {
        thread::sleep(interval);
        if loop_tx.send(LoopEvent::Msg(make_msg())).is_err() {
            break;
        }
    });
}

fn spawn_stdin_reader(loop_tx: mpsc::Sender<LoopEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    dashboard_warn!("Failed to read stdin: {}", err);
                    break;
                }
            };
            let events = match parse_command(&line) {
                Command::Send(msgs) => msgs.into_iter().map(LoopEvent::Msg).collect(),
                Command::Help => vec![LoopEvent::Hint(HELP.to_string())],
                Command::Invalid(reason) => vec![LoopEvent::Hint(format!("{reason}\n{HELP}"))],
                Command::Quit => vec![LoopEvent::Quit],
            };
            for event in events {
                if loop_tx.send(event).is_err() {
                    return;
                }
            }
        }
        // Without stdin the dashboard keeps polling until interrupted.
        dashboard_info!("Stdin closed; interactive commands disabled");
    });
}
