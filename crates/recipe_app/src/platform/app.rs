use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use recipe_core::{AppState, AppViewModel, Msg, Store};
use recipe_engine::ApiSettings;
use recipe_logging::{recipe_info, recipe_warn};

use super::effects::EffectRunner;
use super::logging;
use super::ui::constants::{HELP_TEXT, PROMPT};
use super::ui::input::{parse_command, UserCommand};
use super::ui::render;

/// Everything the main loop reacts to.
#[derive(Debug)]
pub enum AppEvent {
    Msg(Msg),
    Help,
    Quit,
}

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize();

    let (msg_tx, msg_rx) = mpsc::channel::<AppEvent>();
    let runner = EffectRunner::new(ApiSettings::default(), msg_tx.clone())?;

    let pending_view: Arc<Mutex<Option<AppViewModel>>> = Arc::new(Mutex::new(None));
    let mut store = Store::new(AppState::new());
    let latest = pending_view.clone();
    store.subscribe(move |view| {
        if let Ok(mut slot) = latest.lock() {
            *slot = Some(view.clone());
        }
    });

    spawn_input_reader(msg_tx.clone());
    let _ = msg_tx.send(AppEvent::Msg(Msg::Started));
    drop(msg_tx);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{HELP_TEXT}")?;

    // Drain everything already queued, then redraw once.
    while let Ok(first) = msg_rx.recv() {
        let mut focus_detail = false;
        let mut show_help = false;
        let mut quit = false;

        for event in std::iter::once(first).chain(msg_rx.try_iter()) {
            match event {
                AppEvent::Msg(msg) => {
                    let effects = store.dispatch(msg);
                    focus_detail |= runner.enqueue(effects);
                }
                AppEvent::Help => show_help = true,
                AppEvent::Quit => quit = true,
            }
        }

        if quit {
            recipe_info!("quit requested");
            break;
        }

        let view = pending_view.lock().ok().and_then(|mut slot| slot.take());
        if let Some(view) = view {
            writeln!(out)?;
            for line in render::render(&view, focus_detail) {
                writeln!(out, "{line}")?;
            }
        }
        if show_help {
            writeln!(out, "{HELP_TEXT}")?;
        }
        write!(out, "{PROMPT}")?;
        out.flush()?;
    }

    Ok(())
}

/// Reads commands from stdin until EOF or `quit`.
fn spawn_input_reader(msg_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    recipe_warn!("stdin read failed: {}", err);
                    break;
                }
            };
            let Some(command) = parse_command(&line) else {
                continue;
            };
            let quit = command == UserCommand::Quit;
            for event in command_events(command) {
                if msg_tx.send(event).is_err() {
                    return;
                }
            }
            if quit {
                return;
            }
        }
        let _ = msg_tx.send(AppEvent::Quit);
    });
}

fn command_events(command: UserCommand) -> Vec<AppEvent> {
    match command {
        UserCommand::Search(text) => vec![
            AppEvent::Msg(Msg::QueryChanged(text)),
            AppEvent::Msg(Msg::SearchSubmitted),
        ],
        UserCommand::View(meal_id) => vec![AppEvent::Msg(Msg::RecipeSelected { meal_id })],
        UserCommand::Help => vec![AppEvent::Help],
        UserCommand::Quit => vec![AppEvent::Quit],
    }
}
