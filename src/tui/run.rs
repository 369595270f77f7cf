//! TUI effects boundary: event loop, terminal lifecycle, input mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, layout, view) to the real terminal via crossterm and
//! ratatui. All intelligence lives in the pure layers.
//!
//! Architecture: several producers feed a single mpsc channel.
//! - Input reader thread: forwards crossterm key, mouse and resize events
//! - Dismiss timer: one short-lived thread per live carousel ticket
//! - Role ticker: rotates the hero role line
//! The event loop consumes from the channel, dispatching to pure handlers.

use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::ExecutableCommand;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{info, warn};

use crate::carousel::CarouselTuning;
use crate::profile::PROFILE;

use super::layout::{self, Regions};
use super::state::{Action, App, AppEvent, Effect, Transition};
use super::theme::ThemeVariant;
use super::timer::{DismissTimer, spawn_ticker};
use super::update::{handle_background_event, update};
use super::view::render;

/// Session parameters resolved from config and flags.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    pub tuning: CarouselTuning,
    pub theme: ThemeVariant,
    pub role_interval: Duration,
}

// ============================================================================
// INPUT MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        // Sections
        KeyCode::Tab => Some(Action::NextSection),
        KeyCode::BackTab => Some(Action::PrevSection),

        // Navigation
        KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveRight),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Enter => Some(Action::Enter),
        KeyCode::Esc => Some(Action::Back),

        // Actions
        KeyCode::Char('m') => Some(Action::HireMe),
        KeyCode::Char('r') => Some(Action::Resume),
        KeyCode::Char('t') => Some(Action::ToggleTheme),
        KeyCode::Char('q') => Some(Action::Quit),

        // Number keys jump to a category
        KeyCode::Char(c @ '1'..='9') => Some(Action::NumberKey(c as u8 - b'0')),

        _ => None,
    }
}

/// Map a crossterm mouse event to a semantic Action, resolving the
/// pointer position against the last rendered geometry.
pub fn map_mouse(mouse: MouseEvent, regions: &Regions) -> Option<Action> {
    let (x, y) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Moved => Some(Action::PointerOver(regions.target_at(x, y))),
        MouseEventKind::Down(MouseButton::Left) => Some(Action::PointerDown {
            target: regions.target_at(x, y),
            x: i32::from(x),
            in_swipe_area: regions.in_swipe_area(x, y),
        }),
        MouseEventKind::Drag(MouseButton::Left) => Some(Action::PointerDrag { x: i32::from(x) }),
        MouseEventKind::Up(MouseButton::Left) => Some(Action::PointerUp {
            target: regions.target_at(x, y),
        }),
        MouseEventKind::ScrollDown => Some(Action::MoveDown),
        MouseEventKind::ScrollUp => Some(Action::MoveUp),
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    io::stdout().execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(io::stdout());
    Terminal::new(backend)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// BACKGROUND THREADS
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards them to the channel.
fn spawn_input_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            let event = match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
                Ok(Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
                Ok(Event::Resize(_, _)) => AppEvent::Resize,
                Ok(_) => continue, // key release, focus, paste
                Err(_) => break,
            };
            if tx.send(event).is_err() {
                break; // receiver dropped, TUI is shutting down
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the TUI event loop until the user quits.
pub fn run(options: RunOptions) -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new(&PROFILE, options.tuning, options.theme);
    let mut regions = Regions::default();

    let (tx, rx) = mpsc::channel::<AppEvent>();

    spawn_input_reader(tx.clone());
    spawn_ticker(options.role_interval, tx.clone());
    let mut timer = DismissTimer::new(tx);

    info!(theme = ?options.theme, "tui started");

    loop {
        let completed = terminal.draw(|frame| {
            regions = layout::compute(frame.area(), &app);
            render(&app, frame);
        })?;
        app.viewport = completed.area;

        if app.should_quit {
            break;
        }

        // Block on next event from any producer
        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => break, // all senders dropped
        };

        let action = match event {
            AppEvent::Key(key) => map_key(key),
            AppEvent::Mouse(mouse) => map_mouse(mouse, &regions),
            AppEvent::Resize => None,
            background_event => {
                handle_background_event(&mut app, background_event);
                None
            }
        };

        if let Some(action) = action {
            match update(&mut app, &action) {
                Transition::Stay => {}
                Transition::Quit => app.should_quit = true,
                Transition::Effect(effect) => handle_effect(effect, &mut app),
            }
        }

        timer.sync(app.carousel.pending_dismiss(), options.tuning.dismiss_delay);
    }

    app.carousel.teardown();
    timer.cancel();
    info!("tui stopped");

    restore_terminal()
}

// ============================================================================
// EFFECT HANDLING
// ============================================================================

/// Handle a side effect requested by a pure transition.
fn handle_effect(effect: Effect, app: &mut App) {
    match effect {
        Effect::OpenLink(link) => match open::that(&link.url) {
            Ok(()) => {
                info!(url = %link.url, "opened link");
                app.status = Some(format!("Opened {}", link.label));
            }
            Err(e) => {
                warn!(url = %link.url, error = %e, "failed to open link");
                app.status = Some(format!("Could not open {}: {}", link.label, link.url));
            }
        },
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::state::{Section, Target};
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn skills_regions() -> Regions {
        let mut app = App::new(&PROFILE, CarouselTuning::default(), ThemeVariant::Dark);
        app.section = Section::Skills;
        layout::compute(Rect::new(0, 0, 120, 40), &app)
    }

    #[test]
    fn ctrl_c_maps_to_quit() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Some(Action::Quit));
    }

    #[test]
    fn vim_keys_map_to_movement() {
        assert_eq!(map_key(key(KeyCode::Char('j'))), Some(Action::MoveDown));
        assert_eq!(map_key(key(KeyCode::Char('k'))), Some(Action::MoveUp));
        assert_eq!(map_key(key(KeyCode::Char('h'))), Some(Action::MoveLeft));
        assert_eq!(map_key(key(KeyCode::Char('l'))), Some(Action::MoveRight));
    }

    #[test]
    fn arrow_keys_map_to_movement() {
        assert_eq!(map_key(key(KeyCode::Left)), Some(Action::MoveLeft));
        assert_eq!(map_key(key(KeyCode::Right)), Some(Action::MoveRight));
        assert_eq!(map_key(key(KeyCode::Up)), Some(Action::MoveUp));
        assert_eq!(map_key(key(KeyCode::Down)), Some(Action::MoveDown));
    }

    #[test]
    fn tab_and_backtab_switch_sections() {
        assert_eq!(map_key(key(KeyCode::Tab)), Some(Action::NextSection));
        assert_eq!(map_key(key(KeyCode::BackTab)), Some(Action::PrevSection));
    }

    #[test]
    fn letter_actions() {
        assert_eq!(map_key(key(KeyCode::Char('m'))), Some(Action::HireMe));
        assert_eq!(map_key(key(KeyCode::Char('r'))), Some(Action::Resume));
        assert_eq!(map_key(key(KeyCode::Char('t'))), Some(Action::ToggleTheme));
        assert_eq!(map_key(key(KeyCode::Char('q'))), Some(Action::Quit));
    }

    #[test]
    fn number_keys_map_to_number_actions() {
        for n in 1..=9u8 {
            let k = key(KeyCode::Char((b'0' + n) as char));
            assert_eq!(map_key(k), Some(Action::NumberKey(n)));
        }
        assert_eq!(map_key(key(KeyCode::Char('0'))), None);
    }

    #[test]
    fn unmapped_key_returns_none() {
        assert_eq!(map_key(key(KeyCode::Char('z'))), None);
    }

    #[test]
    fn enter_and_esc() {
        assert_eq!(map_key(key(KeyCode::Enter)), Some(Action::Enter));
        assert_eq!(map_key(key(KeyCode::Esc)), Some(Action::Back));
    }

    #[test]
    fn mouse_move_resolves_target() {
        let regions = skills_regions();
        let tile = regions.skills.as_ref().unwrap().tiles[1];
        let action = map_mouse(mouse(MouseEventKind::Moved, tile.x + 1, tile.y + 1), &regions);
        assert_eq!(action, Some(Action::PointerOver(Some(Target::Tile(1)))));

        let action = map_mouse(mouse(MouseEventKind::Moved, 0, 39), &regions);
        assert_eq!(action, Some(Action::PointerOver(None)));
    }

    #[test]
    fn press_inside_card_can_swipe() {
        let regions = skills_regions();
        let card = regions.skills.as_ref().unwrap().card;
        let action = map_mouse(
            mouse(MouseEventKind::Down(MouseButton::Left), card.x + 2, card.y + 2),
            &regions,
        );
        assert!(matches!(
            action,
            Some(Action::PointerDown { in_swipe_area: true, x, .. }) if x == i32::from(card.x + 2)
        ));
    }

    #[test]
    fn drag_and_release_map_to_pointer_actions() {
        let regions = skills_regions();
        assert_eq!(
            map_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 30, 10), &regions),
            Some(Action::PointerDrag { x: 30 })
        );
        assert!(matches!(
            map_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 30, 10), &regions),
            Some(Action::PointerUp { .. })
        ));
    }

    #[test]
    fn right_button_and_scroll() {
        let regions = skills_regions();
        assert_eq!(
            map_mouse(mouse(MouseEventKind::Down(MouseButton::Right), 5, 5), &regions),
            None
        );
        assert_eq!(
            map_mouse(mouse(MouseEventKind::ScrollDown, 5, 5), &regions),
            Some(Action::MoveDown)
        );
    }
}
