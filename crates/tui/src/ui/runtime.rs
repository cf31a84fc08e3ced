//! Runtime: terminal lifecycle and the unified event loop.
//!
//! Responsibilities
//! - Own the terminal (enter/leave alternate screen, raw mode, mouse capture).
//! - Drive a single event loop over input, animation ticks, and Ctrl+C.
//! - Route input to `MainView`, execute returned `Effect`s, and redraw only
//!   when the `App` marked itself dirty.
//!
//! Ticking strategy: a fast interval while the smooth scroll is animating, a
//! long one when idle, so an idle brochure costs nothing. Input comes from a
//! dedicated task that blocks on `crossterm::event::read()` and forwards
//! events over a channel; keeping `poll()` and `read()` together avoids lost
//! events on some terminals.

use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use navetta_content::SiteContent;
use navetta_types::{Effect, Msg};
use ratatui::{Terminal, prelude::*};
use tokio::{
    signal,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};

use crate::app::App;
use crate::cmd;
use crate::ui::main_component::MainView;
use crate::ui::theme::Theme;

const FAST_TICK: Duration = Duration::from_millis(33);
const IDLE_TICK: Duration = Duration::from_millis(500);

/// Spawn a dedicated task that blocks on terminal input and forwards
/// `crossterm` events over a Tokio channel.
async fn spawn_input_task() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);

    tokio::spawn(async move {
        let poll_interval = Duration::from_millis(16);
        loop {
            match event::poll(poll_interval) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        // Hover moves carry no meaning here; drop them at
                        // the source instead of waking the loop.
                        if event
                            .as_mouse_event()
                            .is_some_and(|e| e.kind == MouseEventKind::Moved)
                        {
                            continue;
                        }
                        if let Err(error) = sender.send(event).await {
                            tracing::warn!("failed to forward input event: {error}");
                            break;
                        }
                    }
                    Err(error) => {
                        tracing::warn!("failed to read input event: {error}");
                        break;
                    }
                },
                Ok(false) => {}
                Err(error) => {
                    tracing::warn!("failed to poll input: {error}");
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    main_view: &mut MainView,
) -> Result<()> {
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

/// Handle a raw crossterm event. Returns `None` when the event asks the
/// application to exit.
fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Option<Vec<Effect>> {
    match input_event {
        Event::Key(key_event) => {
            let ctrl_c = key_event.code == KeyCode::Char('c')
                && key_event.modifiers.contains(KeyModifiers::CONTROL);
            if ctrl_c || key_event.code == KeyCode::Char('q') {
                return None;
            }
            Some(main_view.handle_key_events(app, key_event))
        }
        Event::Mouse(mouse_event) => Some(main_view.handle_mouse_events(app, mouse_event)),
        Event::Resize(width, height) => Some(main_view.handle_message(app, Msg::Resize(width, height))),
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => Some(Vec::new()),
    }
}

/// Entry point for the TUI runtime: sets up the terminal, spawns the input
/// task, runs the event loop, and restores the terminal on exit.
pub async fn run_app(site: SiteContent, theme: Theme) -> Result<()> {
    let mut input_receiver = spawn_input_task().await;
    let mut app = App::new(site, theme);
    let mut main_view = MainView::new();
    let mut terminal = setup_terminal()?;

    let mut current_interval = IDLE_TICK;
    let mut ticker = time::interval(current_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    render(&mut terminal, &mut app, &mut main_view)?;

    // Some terminals drop resize notifications; track the last known size
    // and synthesize a Resize when it drifts.
    let mut last_size: Option<(u16, u16)> = crossterm::terminal::size().ok();
    let mut effects: Vec<Effect> = Vec::new();

    loop {
        let target_interval = if app.is_animating() { FAST_TICK } else { IDLE_TICK };
        if target_interval != current_interval {
            current_interval = target_interval;
            ticker = time::interval(current_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        }

        tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else {
                    // Input channel closed; shut down cleanly.
                    break;
                };
                match handle_input_event(&mut app, &mut main_view, event) {
                    Some(new_effects) => effects.extend(new_effects),
                    None => break,
                }
            }
            _ = ticker.tick() => {
                effects.extend(main_view.handle_message(&mut app, Msg::Tick));
            }
            _ = signal::ctrl_c() => { break; }
        }

        if !effects.is_empty() {
            cmd::apply_effects(&mut app, std::mem::take(&mut effects));
        }

        if let Ok((width, height)) = crossterm::terminal::size()
            && last_size != Some((width, height))
        {
            last_size = Some((width, height));
            effects.extend(main_view.handle_message(&mut app, Msg::Resize(width, height)));
        }

        if app.take_dirty() {
            render(&mut terminal, &mut app, &mut main_view)?;
        }
    }

    cleanup_terminal(&mut terminal)?;
    Ok(())
}
