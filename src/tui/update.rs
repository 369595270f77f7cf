//! State transitions: (App, Action) → Transition.
//!
//! This is the core logic of the TUI. Fully testable without a terminal.
//! Each section defines which actions it accepts. Unhandled actions are
//! no-ops that keep the current state.

use tracing::debug;

use crate::carousel::{Carousel, Direction, SkillRef};
use crate::contact::{Link, contact_link, hire_me, resume};

use super::state::{Action, App, AppEvent, Effect, Section, Target, Transition};
use super::view::max_scroll;

/// Apply one action to the app.
pub fn update(app: &mut App, action: &Action) -> Transition {
    // Pointer motion is too frequent to dismiss the status line
    if !matches!(action, Action::PointerOver(_) | Action::PointerDrag { .. }) {
        app.status = None;
    }

    match action {
        Action::Quit => return Transition::Quit,
        Action::ToggleTheme => {
            app.theme = app.theme.toggled();
            return Transition::Stay;
        }
        Action::HireMe => return open(hire_me(app.profile)),
        Action::Resume => return open(resume(app.profile)),
        Action::NextSection => {
            switch_section(app, app.section.next());
            return Transition::Stay;
        }
        Action::PrevSection => {
            switch_section(app, app.section.previous());
            return Transition::Stay;
        }
        Action::PointerOver(target) => {
            pointer_over(app, *target);
            return Transition::Stay;
        }
        Action::PointerDown {
            target,
            x,
            in_swipe_area,
        } => {
            app.pressed = *target;
            if *in_swipe_area && app.section == Section::Skills {
                app.carousel.begin_swipe(*x);
            }
            return Transition::Stay;
        }
        Action::PointerDrag { x } => {
            if app.carousel.is_swiping() {
                app.carousel.track_swipe(*x);
            }
            return Transition::Stay;
        }
        Action::PointerUp { target } => return pointer_up(app, *target),
        _ => {}
    }

    match app.section {
        Section::Home => update_home(app, action),
        Section::About | Section::Experience => update_text(app, action),
        Section::Skills => update_skills(app, action),
        Section::Contact => update_contact(app, action),
    }
}

/// Handle non-input events from timer and ticker threads.
pub fn handle_background_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::DismissDue(ticket) => {
            app.carousel.fire_dismiss(ticket);
        }
        AppEvent::RoleTick => {
            let count = app.profile.roles.len();
            if count > 0 {
                app.role_index = (app.role_index + 1) % count;
            }
        }
        // Input events are routed through map_key / map_mouse
        AppEvent::Key(_) | AppEvent::Mouse(_) | AppEvent::Resize => {}
    }
}

// ============================================================================
// PER-SECTION HANDLERS
// ============================================================================

/// Home: Enter is the hero call-to-action.
fn update_home(app: &App, action: &Action) -> Transition {
    match action {
        Action::Enter => open(hire_me(app.profile)),
        _ => Transition::Stay,
    }
}

/// About / Experience: scrolling text. Enter on About opens the resume.
fn update_text(app: &mut App, action: &Action) -> Transition {
    match action {
        Action::MoveDown => {
            app.scroll = app.scroll.saturating_add(1).min(max_scroll(app));
            Transition::Stay
        }
        Action::MoveUp => {
            app.scroll = app.scroll.saturating_sub(1);
            Transition::Stay
        }
        Action::Enter if app.section == Section::About => open(resume(app.profile)),
        _ => Transition::Stay,
    }
}

/// Skills: category navigation and keyboard focus over tiles.
fn update_skills(app: &mut App, action: &Action) -> Transition {
    match action {
        Action::MoveLeft => change_category(app, |c| c.advance(Direction::Previous)),
        Action::MoveRight => change_category(app, |c| c.advance(Direction::Next)),
        Action::NumberKey(n) => {
            let n = usize::from(*n);
            if (1..=app.carousel.len()).contains(&n) {
                change_category(app, |c| c.select_category(n as isize - 1));
            }
        }
        Action::MoveDown => move_focus(app, 1),
        Action::MoveUp => move_focus(app, -1),
        Action::Back => blur(app),
        _ => {}
    }
    Transition::Stay
}

/// Contact: cursor over methods; Enter opens the method's link.
fn update_contact(app: &mut App, action: &Action) -> Transition {
    let len = app.profile.contacts.len();
    match action {
        Action::MoveUp => {
            app.contact_cursor = app.contact_cursor.saturating_sub(1);
            Transition::Stay
        }
        Action::MoveDown => {
            app.contact_cursor = if len == 0 {
                0
            } else {
                (app.contact_cursor + 1).min(len - 1)
            };
            Transition::Stay
        }
        Action::Enter => open_contact(app, app.contact_cursor),
        _ => Transition::Stay,
    }
}

// ============================================================================
// SKILLS HELPERS
// ============================================================================

/// Run a category change and drop pointer/focus bookkeeping tied to the
/// old tiles. The carousel itself clears the selection.
fn change_category(app: &mut App, change: impl FnOnce(&mut Carousel<'static>)) {
    change(&mut app.carousel);
    if app.focus.take().is_some() {
        app.carousel.leave_item();
    }
    if matches!(app.hover, Some(Target::Tile(_) | Target::DetailPanel)) {
        app.hover = None;
    }
}

/// Move keyboard focus across tiles. Focus behaves exactly like hover.
fn move_focus(app: &mut App, delta: isize) {
    let count = app
        .carousel
        .current_category()
        .map_or(0, |c| c.skills.len());
    if count == 0 {
        return;
    }

    let next = match app.focus {
        None if delta >= 0 => 0,
        None => count - 1,
        Some(i) => (i as isize + delta).clamp(0, count as isize - 1) as usize,
    };
    if app.focus == Some(next) {
        return;
    }

    if app.focus.is_some() {
        app.carousel.leave_item();
    }
    app.focus = Some(next);
    app.carousel
        .hover_item(SkillRef::new(app.carousel.index(), next));
}

fn blur(app: &mut App) {
    if app.focus.take().is_some() {
        app.carousel.leave_item();
    }
}

/// Drop all focus, pointer and gesture state tied to the carousel. A
/// hovered tile or detail panel is left, so its dismiss gets scheduled.
fn leave_skills(app: &mut App) {
    blur(app);
    match app.hover {
        Some(Target::Tile(_)) => {
            app.carousel.leave_item();
            app.hover = None;
        }
        Some(Target::DetailPanel) => {
            app.carousel.leave_detail_panel();
            app.hover = None;
        }
        _ => {}
    }
    app.carousel.cancel_swipe();
    app.pressed = None;
}

// ============================================================================
// POINTER
// ============================================================================

/// Translate a change of pointer target into enter/leave calls.
fn pointer_over(app: &mut App, target: Option<Target>) {
    if app.hover == target {
        return;
    }

    match app.hover {
        Some(Target::Tile(_)) => {
            app.carousel.leave_item();
        }
        Some(Target::DetailPanel) => {
            app.carousel.leave_detail_panel();
        }
        _ => {}
    }

    match target {
        Some(Target::Tile(i)) => {
            app.carousel
                .hover_item(SkillRef::new(app.carousel.index(), i));
        }
        Some(Target::DetailPanel) => app.carousel.enter_detail_panel(),
        _ => {}
    }

    app.hover = target;
}

/// Release ends any swipe; a press-release on the same target activates it.
fn pointer_up(app: &mut App, target: Option<Target>) -> Transition {
    let pressed = app.pressed.take();

    if app.carousel.is_swiping() {
        let hover = app.hover;
        if app.carousel.end_swipe().is_some() {
            if matches!(hover, Some(Target::Tile(_) | Target::DetailPanel)) {
                app.hover = None;
            }
            app.focus = None;
            return Transition::Stay;
        }
    }

    match (pressed, target) {
        (Some(p), Some(t)) if p == t => activate(app, t),
        _ => Transition::Stay,
    }
}

/// Click semantics for each target.
fn activate(app: &mut App, target: Target) -> Transition {
    debug!(?target, "activate");
    match target {
        Target::Tab(section) => switch_section(app, section),
        Target::ThemeToggle => app.theme = app.theme.toggled(),
        Target::Dot(i) | Target::SummaryRow(i) => {
            change_category(app, |c| c.select_category(i as isize));
        }
        Target::Prev => change_category(app, |c| c.advance(Direction::Previous)),
        Target::Next => change_category(app, |c| c.advance(Direction::Next)),
        Target::Tile(i) => {
            if app.carousel.hover_item(SkillRef::new(app.carousel.index(), i)) {
                app.focus = Some(i);
            }
        }
        Target::DetailPanel => {}
        Target::HireMe => return open(hire_me(app.profile)),
        Target::Resume => return open(resume(app.profile)),
        Target::ContactRow(i) => {
            app.contact_cursor = i;
            return open_contact(app, i);
        }
    }
    Transition::Stay
}

// ============================================================================
// SHARED
// ============================================================================

fn switch_section(app: &mut App, section: Section) {
    if app.section == section {
        return;
    }
    if app.section == Section::Skills {
        leave_skills(app);
    }
    debug!(from = ?app.section, to = ?section, "section change");
    app.section = section;
    app.scroll = 0;
}

fn open(link: Link) -> Transition {
    Transition::Effect(Effect::OpenLink(link))
}

fn open_contact(app: &mut App, index: usize) -> Transition {
    match app.profile.contacts.get(index) {
        Some(method) => match contact_link(method) {
            Some(link) => open(link),
            None => {
                app.status = Some(format!("{}: {}", method.label, method.value));
                Transition::Stay
            }
        },
        None => Transition::Stay,
    }
}

// ============================================================================
// TESTS
// ============================================================================
