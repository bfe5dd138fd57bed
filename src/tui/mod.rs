//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the calculator,
//! and translates keyboard and mouse events into `core::Action` values.
//!
//! This is the only module that knows about ratatui, crossterm and the
//! timer runtime. A browser adapter could replace it without touching
//! `core`.
//!
//! ## Event Loop
//!
//! Each iteration draws (if something changed), waits for input, then
//! drains every pending terminal event before drawing again. Actions sent
//! from background tasks (the error-clear timer) arrive over an `mpsc`
//! channel and go through the same `update()` path as user input.

mod component;
pub mod components;
pub mod event;
pub mod input;
pub mod palette;
pub mod scheduler;
mod ui;

use log::{debug, info};
use std::io::{self, stdout};
use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::Calculator;
use crate::core::theme::{Theme, ThemeStore};
use crate::tui::component::EventHandler;
use crate::tui::components::KeypadState;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::palette::Palette;
use crate::tui::scheduler::ErrorClearScheduler;

/// Poll timeout while a keypad highlight is fading or an error clear is due.
const ACTIVE_POLL: Duration = Duration::from_millis(50);
/// Poll timeout when nothing on screen is changing.
const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of the calculator)
pub struct TuiState {
    pub theme: Theme,
    pub palette: Palette,
    pub keypad: KeypadState,
}

impl TuiState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            palette: Palette::for_theme(theme),
            keypad: KeypadState::new(),
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.palette = Palette::for_theme(theme);
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Runs one action through the core and carries out the effect it asks for.
/// Returns `true` when the app should quit.
pub fn dispatch(
    calc: &mut Calculator,
    action: Action,
    scheduler: &mut ErrorClearScheduler,
) -> bool {
    match update(calc, action) {
        Effect::None => false,
        Effect::ScheduleErrorClear { generation } => {
            scheduler.schedule(generation);
            false
        }
        Effect::CancelErrorClear => {
            scheduler.cancel();
            false
        }
        Effect::Quit => true,
    }
}

/// Must be called from within a tokio runtime (the error-clear timer
/// spawns onto it).
pub fn run(config: ResolvedConfig, store: ThemeStore) -> io::Result<()> {
    let mut calc = Calculator::new();
    let mut tui = TuiState::new(config.theme);

    let (tx, rx) = mpsc::channel();
    let mut scheduler = ErrorClearScheduler::new(config.error_clear_delay, tx);

    if config.start_powered_on {
        dispatch(&mut calc, Action::TogglePower, &mut scheduler);
    }

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new().and_then(|_guard| {
        event_loop(&mut terminal, &mut calc, &mut tui, &store, &mut scheduler, &rx)
    });

    scheduler.cancel();
    ratatui::restore();
    info!("Calcpad shutting down");
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    calc: &mut Calculator,
    tui: &mut TuiState,
    store: &ThemeStore,
    scheduler: &mut ErrorClearScheduler,
    rx: &mpsc::Receiver<Action>,
) -> io::Result<()> {
    let mut needs_redraw = true; // Force first frame
    let mut was_highlighting = false;

    loop {
        // A fading highlight needs one more frame after it expires
        let highlighting = tui.keypad.is_highlighting();
        if highlighting || was_highlighting {
            needs_redraw = true;
        }
        was_highlighting = highlighting;

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, calc, tui))?;
            needs_redraw = false;
        }

        let timeout = poll_timeout(highlighting, scheduler.is_pending());
        let mut next = poll_event_timeout(timeout)?;

        // Process first event + drain ALL pending events before next draw
        while let Some(event) = next {
            needs_redraw = true;
            if handle_event(&event, calc, tui, store, scheduler) {
                return Ok(());
            }
            next = poll_event_immediate()?;
        }

        // Actions from background tasks (error timeouts)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if dispatch(calc, action, scheduler) {
                return Ok(());
            }
        }
    }
}

/// The timer's action is only read between polls, so a pending error clear
/// keeps the poll short enough to land close to its deadline.
fn poll_timeout(highlighting: bool, clear_pending: bool) -> Duration {
    if highlighting || clear_pending {
        ACTIVE_POLL
    } else {
        IDLE_POLL
    }
}

/// Routes one terminal event. Returns `true` when the app should quit.
fn handle_event(
    event: &TuiEvent,
    calc: &mut Calculator,
    tui: &mut TuiState,
    store: &ThemeStore,
    scheduler: &mut ErrorClearScheduler,
) -> bool {
    match event {
        TuiEvent::Resize | TuiEvent::MouseUp => false,
        TuiEvent::ToggleTheme => {
            let next = store.toggle(tui.theme);
            tui.set_theme(next);
            false
        }
        TuiEvent::MouseDown(..) => match tui.keypad.handle_event(event) {
            Some(action) => dispatch(calc, action, scheduler),
            None => false,
        },
        _ => match input::action_for(event, calc.power_on) {
            Some(action) => {
                tui.keypad.highlight_action(action);
                dispatch(calc, action, scheduler)
            }
            None => false,
        },
    }
}
