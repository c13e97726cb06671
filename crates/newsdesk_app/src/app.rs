use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use feed_logging::{feed_debug, feed_info};
use newsdesk_core::{update, FeedState, Msg, SlotId};
use newsdesk_engine::{ApiSettings, EngineConfig, EngineHandle, ImageSettings};

use crate::effects::{map_event, EffectRunner, UiAction};
use crate::images::ImageStore;
use crate::input::{parse_command, Command};
use crate::logging::{self, LogDestination};
use crate::persistence;
use crate::render;

/// Reusable slots available to the article section; a screenful of cells.
const SLOT_POOL: usize = 12;

/// Dispatch-loop cadence; also coalesces renders.
const TICK: Duration = Duration::from_millis(75);

pub fn run() -> Result<()> {
    logging::initialize(LogDestination::File);

    let settings_path = persistence::settings_path();
    let settings = persistence::load_settings(&settings_path);
    let mut state = FeedState::with_settings(settings);
    let mut images = ImageStore::new();

    let engine = EngineHandle::new(EngineConfig {
        api: ApiSettings::from_env(),
        images: ImageSettings::default(),
    });
    let runner = EffectRunner::new(engine.clone(), settings_path);

    let (input_tx, input_rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        let stdin = std::io::stdin();
        let mut line = String::new();
        loop {
            line.clear();
            match stdin.read_line(&mut line) {
                Ok(0) | Err(_) => break,
                Ok(_) => {
                    if input_tx.send(line.trim().to_string()).is_err() {
                        break;
                    }
                }
            }
        }
    });

    feed_info!("newsdesk starting");
    println!("newsdesk — type `help` for commands");
    dispatch(&mut state, Msg::ScreenAppeared, &runner);

    loop {
        while let Some(event) = engine.try_recv() {
            if let Some(msg) = map_event(event, &mut images) {
                dispatch(&mut state, msg, &runner);
            }
        }

        match input_rx.try_recv() {
            Ok(line) => match parse_command(&line) {
                Command::Quit => break,
                Command::Help => println!("{}", render::help_text()),
                Command::Dispatch(msg) => dispatch(&mut state, msg, &runner),
                Command::Unknown(word) => println!("unknown command: {word} (try `help`)"),
                Command::Noop => {}
            },
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => break,
        }

        if state.consume_dirty() {
            print!("{}", render::render(&state, &images));
            bind_visible_slots(&mut state, &runner);
        }

        thread::sleep(TICK);
    }

    feed_info!("newsdesk exiting");
    Ok(())
}

fn dispatch(state: &mut FeedState, msg: Msg, runner: &EffectRunner) {
    let (next, effects) = update(std::mem::take(state), msg);
    *state = next;
    for action in runner.run(effects) {
        match action {
            UiAction::Alert(message) => println!("⚠ {message}"),
            UiAction::ScrollToTop => feed_debug!("scroll to top"),
            UiAction::EndRefreshing => feed_debug!("refresh indicator stopped"),
        }
    }
}

/// Binds a slot per visible row the way a collection view configures cells.
/// A slot is rebound only when the row under it changes, which is what
/// triggers image loading for that slot.
fn bind_visible_slots(state: &mut FeedState, runner: &EffectRunner) {
    let rows: Vec<(usize, String)> = state
        .view()
        .articles
        .iter()
        .enumerate()
        .take(SLOT_POOL)
        .map(|(index, row)| (index, row.id.clone()))
        .collect();

    for (index, id) in rows {
        let slot = index as SlotId;
        let bound = state.slot(slot).map(|binding| binding.article_id.clone());
        if bound.as_deref() != Some(id.as_str()) {
            dispatch(state, Msg::SlotDisplayed { slot, index }, runner);
        }
    }
}
